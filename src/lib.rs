pub mod camera;
pub mod collider;
pub mod config;
pub mod geometry;
pub mod gizmo;
pub mod input;
pub mod marquee;
pub mod overlay;
pub mod panel;
pub mod render_loop;
pub mod router;
pub mod store;

pub use camera::{CameraController, ViewportRect};
pub use collider::{ColliderHandle, ColliderOverlay};
pub use config::EditorConfig;
pub use geometry::{BoundsProvider, LocalBounds, WorldRect};
pub use gizmo::{GizmoAxis, GizmoManager, GizmoMode};
pub use input::{InputEvent, ModifierTracker, Modifiers, PointerButton};
pub use marquee::MarqueeSelection;
pub use overlay::{OverlayFrame, OverlayShape};
pub use panel::SceneViewPanel;
pub use render_loop::{FramePlan, RenderScheduler};
pub use router::{DragClaim, DragListenerHost, InputRouter, NoopListenerHost};
pub use store::{ColliderShape, EntityId, PropertyValue, SceneStore, WorldTransform};

pub(crate) fn wrap_angle(mut radians: f32) -> f32 {
    let two_pi = 2.0 * std::f32::consts::PI;
    while radians > std::f32::consts::PI {
        radians -= two_pi;
    }
    while radians < -std::f32::consts::PI {
        radians += two_pi;
    }
    radians
}
