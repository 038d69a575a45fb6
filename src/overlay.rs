use crate::geometry::WorldRect;
use glam::Vec2;

pub type Color = [f32; 4];

pub const SELECTION_COLOR: Color = [1.0, 0.62, 0.18, 1.0];
pub const MARQUEE_FILL_COLOR: Color = [0.25, 0.55, 0.95, 0.18];
pub const MARQUEE_STROKE_COLOR: Color = [0.25, 0.55, 0.95, 0.9];
pub const AXIS_X_COLOR: Color = [0.9, 0.25, 0.25, 1.0];
pub const AXIS_Y_COLOR: Color = [0.3, 0.82, 0.3, 1.0];
pub const HANDLE_COLOR: Color = [0.9, 0.9, 0.9, 1.0];
pub const HANDLE_HOVER_COLOR: Color = [1.0, 1.0, 0.3, 1.0];
pub const COLLIDER_COLOR: Color = [0.35, 0.85, 0.55, 0.9];

/// World-space overlay primitives. The core never touches a draw surface;
/// the host paints these into its overlay context after the scene pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayShape {
    Line { from: Vec2, to: Vec2, width: f32, color: Color },
    RectOutline { rect: WorldRect, width: f32, color: Color },
    RectFill { rect: WorldRect, color: Color },
    Circle { center: Vec2, radius: f32, width: f32, color: Color },
    Disc { center: Vec2, radius: f32, color: Color },
}

#[derive(Default, Debug)]
pub struct OverlayFrame {
    pub shapes: Vec<OverlayShape>,
}

impl OverlayFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.shapes.push(OverlayShape::Line { from, to, width, color });
    }

    pub fn rect_outline(&mut self, rect: WorldRect, width: f32, color: Color) {
        self.shapes.push(OverlayShape::RectOutline { rect, width, color });
    }

    pub fn rect_fill(&mut self, rect: WorldRect, color: Color) {
        self.shapes.push(OverlayShape::RectFill { rect, color });
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        self.shapes.push(OverlayShape::Circle { center, radius, width, color });
    }

    pub fn disc(&mut self, center: Vec2, radius: f32, color: Color) {
        self.shapes.push(OverlayShape::Disc { center, radius, color });
    }
}
