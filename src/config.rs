use crate::gizmo::GizmoSettings;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_zoom_min")]
    pub camera_zoom_min: f32,
    #[serde(default = "EditorConfig::default_zoom_max")]
    pub camera_zoom_max: f32,
    #[serde(default = "EditorConfig::default_grid_size")]
    pub grid_size: f32,
    #[serde(default = "EditorConfig::default_rotate_snap_degrees")]
    pub rotate_snap_degrees: f32,
    #[serde(default = "EditorConfig::default_scale_snap_step")]
    pub scale_snap_step: f32,
    #[serde(default = "EditorConfig::default_show_colliders")]
    pub show_colliders: bool,
    #[serde(default)]
    pub continuous_render: bool,
}

impl EditorConfig {
    const fn default_zoom_min() -> f32 {
        0.1
    }

    const fn default_zoom_max() -> f32 {
        10.0
    }

    const fn default_grid_size() -> f32 {
        1.0
    }

    const fn default_rotate_snap_degrees() -> f32 {
        15.0
    }

    const fn default_scale_snap_step() -> f32 {
        0.1
    }

    const fn default_show_colliders() -> bool {
        true
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read editor config {}", path.display()))?;
        let config: EditorConfig = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse editor config {}", path.display()))?;
        Ok(config.sanitized())
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!(
                    "[config] {}: {err:#}. Falling back to default editor settings.",
                    path.as_ref().display()
                );
                Self::default()
            }
        }
    }

    /// Degenerate values would feed zero/negative steps and limits into the
    /// interaction math; clamp them on the way in.
    fn sanitized(mut self) -> Self {
        self.camera_zoom_min = self.camera_zoom_min.max(1e-3);
        self.camera_zoom_max = self.camera_zoom_max.max(self.camera_zoom_min);
        self.grid_size = self.grid_size.max(1e-3);
        self.rotate_snap_degrees = self.rotate_snap_degrees.max(1e-3);
        self.scale_snap_step = self.scale_snap_step.max(1e-3);
        self
    }

    pub fn gizmo_settings(&self) -> GizmoSettings {
        GizmoSettings {
            grid_size: self.grid_size,
            rotate_snap_degrees: self.rotate_snap_degrees,
            scale_snap_step: self.scale_snap_step,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            camera_zoom_min: Self::default_zoom_min(),
            camera_zoom_max: Self::default_zoom_max(),
            grid_size: Self::default_grid_size(),
            rotate_snap_degrees: Self::default_rotate_snap_degrees(),
            scale_snap_step: Self::default_scale_snap_step(),
            show_colliders: Self::default_show_colliders(),
            continuous_render: false,
        }
    }
}
