use crate::modules::geometry::ShapeKind;
use macroquad::prelude::{Color, Vec2};

/// Identity of a live shape, handed out in increasing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

/// One falling shape
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub pos: Vec2,
    pub rgb: [u8; 3],
    // Pixels added to pos.y every frame
    pub gravity: f32,
}

impl Shape {
    pub fn new(id: ShapeId, kind: ShapeKind, pos: Vec2, rgb: [u8; 3], gravity: f32) -> Self {
        Shape { id, kind, pos, rgb, gravity }
    }

    pub fn color(&self) -> Color {
        Color::from_rgba(self.rgb[0], self.rgb[1], self.rgb[2], 255)
    }

    pub fn area(&self) -> f64 {
        self.kind.area()
    }

    pub fn height(&self) -> f32 {
        self.kind.height()
    }

    /// Move down by one frame's worth of gravity
    pub fn advance(&mut self) {
        self.pos.y += self.gravity;
    }

    /// True once the shape is fully below a viewport of the given height
    pub fn has_exited(&self, viewport_height: f32) -> bool {
        self.pos.y >= viewport_height + self.height()
    }
}
