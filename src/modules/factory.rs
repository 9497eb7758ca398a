use crate::modules::geometry::CATALOG;
use crate::modules::shape::{Shape, ShapeId};
use log::debug;
use macroquad::prelude::*;

/// Height above the viewport where automatic spawns start
pub const SPAWN_Y: f32 = -100.0;
/// Keeps automatic spawns from hugging the right edge
pub const SPAWN_RIGHT_MARGIN: f32 = 50.0;

/// Builds shapes with a random kind and color
pub struct ShapeFactory {
    viewport_width: f32,
    next_id: u64,
}

impl ShapeFactory {
    pub fn new(viewport_width: f32) -> Self {
        ShapeFactory { viewport_width, next_id: 1 }
    }

    /// Shape just above the viewport at a random x
    pub fn spawn_random(&mut self, gravity: f32) -> Shape {
        let max_x = (self.viewport_width - SPAWN_RIGHT_MARGIN).max(0.0);
        let x = if max_x > 0.0 { rand::gen_range(0.0, max_x) } else { 0.0 };
        self.build(Vec2::new(x, SPAWN_Y), gravity)
    }

    /// Shape at the given point, used by click-to-spawn
    pub fn spawn_at(&mut self, pos: Vec2, gravity: f32) -> Shape {
        self.build(pos, gravity)
    }

    fn build(&mut self, pos: Vec2, gravity: f32) -> Shape {
        let kind = CATALOG[rand::gen_range(0, CATALOG.len() as i32) as usize];
        let rgb = random_rgb();
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        debug!("spawned {} #{} at ({:.1}, {:.1})", kind.name(), id.0, pos.x, pos.y);
        Shape::new(id, kind, pos, rgb, gravity)
    }
}

// Each channel uniform over 0..=255
fn random_rgb() -> [u8; 3] {
    [
        rand::gen_range(0, 256) as u8,
        rand::gen_range(0, 256) as u8,
        rand::gen_range(0, 256) as u8,
    ]
}
