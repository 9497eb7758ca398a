use crate::modules::controls::Readouts;
use crate::modules::geometry::{star_outline, ShapeKind};
use crate::modules::registry::Registry;
use crate::modules::shape::Shape;
use macroquad::prelude::*;

const HUD_FONT: f32 = 20.0;
const HUD_ORIGIN: Vec2 = Vec2::new(20.0, 20.0);
const HUD_GAP: f32 = 30.0;

/// Draws every live shape, oldest first so newer shapes end up on top
pub fn draw_shapes(registry: &Registry) {
    for shape in registry.iter() {
        draw_shape(shape);
    }
}

pub fn draw_shape(shape: &Shape) {
    let color = shape.color();
    let Vec2 { x, y } = shape.pos;
    match shape.kind {
        ShapeKind::Circle { radius } => draw_circle(x, y, radius, color),
        ShapeKind::Ellipse { width, height } => draw_ellipse(x, y, width / 2.0, height / 2.0, 0.0, color),
        ShapeKind::Rectangle { width, height } => draw_rectangle(x, y, width, height, color),
        ShapeKind::Star { radius } => {
            // Triangle fan from the center, every edge is visible from there
            let points = star_outline(radius);
            for i in 0..points.len() {
                let a = shape.pos + points[i];
                let b = shape.pos + points[(i + 1) % points.len()];
                draw_triangle(shape.pos, a, b, color);
            }
        }
    }
}

/// Shape count, then the total area to its right
pub fn draw_hud(readouts: &Readouts) {
    let baseline = HUD_ORIGIN.y + HUD_FONT;
    let count = draw_text(&readouts.count, HUD_ORIGIN.x, baseline, HUD_FONT, WHITE);
    draw_text(&readouts.area, HUD_ORIGIN.x + count.width + HUD_GAP, baseline, HUD_FONT, WHITE);
}
