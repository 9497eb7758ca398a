/*
Lets us check which shape a click landed on.  One version for web one for
native linux and windows

The native build (with the "native" feature) fans the search out with
Rayon, the web build walks the shapes in order.  Both return the topmost hit, which is the shape added last
since shapes are drawn in insertion order.

Use it from the frame loop like this:

use crate::modules::collision::pick_topmost;

    if let Some(index) = pick_topmost(&shapes, click_point) {
        println!("Clicked shape {index}");
    }
*/

use crate::modules::geometry::{star_outline, ShapeKind};
use crate::modules::shape::Shape;
use macroquad::prelude::Vec2;

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
use rayon::prelude::*;

// Anything that can answer "is this point on me"
pub trait Hittable {
    fn contains_point(&self, point: Vec2) -> bool;
}

impl Hittable for Shape {
    fn contains_point(&self, point: Vec2) -> bool {
        match self.kind {
            ShapeKind::Circle { radius } => is_point_in_circle(point, self.pos, radius),
            ShapeKind::Ellipse { width, height } => is_point_in_ellipse(point, self.pos, width / 2.0, height / 2.0),
            ShapeKind::Rectangle { width, height } => is_point_in_bounds(point, self.pos, Vec2::new(width, height)),
            ShapeKind::Star { radius } => {
                // Cheap reject on the bounding circle before the polygon test
                if !is_point_in_circle(point, self.pos, radius) {
                    return false;
                }
                is_point_in_polygon(point - self.pos, &star_outline(radius))
            }
        }
    }
}

// Utility function to check if a point is within rectangle bounds
#[inline]
pub fn is_point_in_bounds(point: Vec2, pos: Vec2, size: Vec2) -> bool {
    point.x >= pos.x && point.x < pos.x + size.x &&
    point.y >= pos.y && point.y < pos.y + size.y
}

#[inline]
pub fn is_point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance_squared(center) <= radius * radius
}

#[inline]
pub fn is_point_in_ellipse(point: Vec2, center: Vec2, half_width: f32, half_height: f32) -> bool {
    if half_width <= 0.0 || half_height <= 0.0 {
        return false;
    }
    let dx = (point.x - center.x) / half_width;
    let dy = (point.y - center.y) / half_height;
    dx * dx + dy * dy <= 1.0
}

// Even-odd ray cast, the polygon is treated as closed
pub fn is_point_in_polygon(point: Vec2, vertices: &[Vec2]) -> bool {
    let mut inside = false;
    let mut j = vertices.len().wrapping_sub(1);
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[j];
        if (a.y > point.y) != (b.y > point.y) {
            let cross_x = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Index of the last (topmost) item containing the point
pub fn pick_topmost<T>(items: &[T], point: Vec2) -> Option<usize>
where
    T: Hittable + Sync,
{
    #[cfg(all(feature = "native", not(target_arch = "wasm32")))]
    {
        // Parallel processing (Rayon) on Linux/Windows
        return items.par_iter().position_last(|item| item.contains_point(point));
    }

    #[cfg(not(all(feature = "native", not(target_arch = "wasm32"))))]
    {
        // Sequential for Web (WASM) or without the "native" feature
        items.iter().rposition(|item| item.contains_point(point))
    }
}
