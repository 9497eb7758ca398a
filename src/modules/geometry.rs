/*
Area formulas and outlines for the four shape kinds.

Everything here is pure math, no drawing. The renderer and the hit tests
both read the star outline from star_outline() so they always agree.
*/

use macroquad::prelude::Vec2;
use std::f64::consts::PI;

/// Radius every star is drawn with
pub const STAR_RADIUS: f32 = 40.0;

/// A shape kind together with the dimensions it needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Circle { radius: f32 },
    Ellipse { width: f32, height: f32 },
    Star { radius: f32 },
    Rectangle { width: f32, height: f32 },
}

/// The fixed catalog the factory picks from
pub const CATALOG: [ShapeKind; 4] = [
    ShapeKind::Circle { radius: 40.0 },
    ShapeKind::Ellipse { width: 50.0, height: 40.0 },
    ShapeKind::Star { radius: STAR_RADIUS },
    ShapeKind::Rectangle { width: 80.0, height: 40.0 },
];

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle { .. } => "Circle",
            ShapeKind::Ellipse { .. } => "Ellipse",
            ShapeKind::Star { .. } => "Star",
            ShapeKind::Rectangle { .. } => "Rectangle",
        }
    }

    /// Area in square pixels
    pub fn area(&self) -> f64 {
        match *self {
            ShapeKind::Ellipse { width, height } => ellipse_area(width as f64, height as f64),
            ShapeKind::Circle { radius } => circle_area(radius as f64),
            ShapeKind::Star { radius } => star_area(radius as f64),
            ShapeKind::Rectangle { width, height } => rectangle_area(width as f64, height as f64),
        }
    }

    /// Vertical extent of the drawn shape, used for the bottom boundary check
    pub fn height(&self) -> f32 {
        match *self {
            ShapeKind::Circle { radius } => radius * 2.0,
            ShapeKind::Ellipse { height, .. } => height,
            ShapeKind::Rectangle { height, .. } => height,
            ShapeKind::Star { radius } => {
                // Top point sits at -radius, the two lower points at radius * cos(pi/5)
                radius + radius * (std::f32::consts::PI / 5.0).cos()
            }
        }
    }
}

pub fn ellipse_area(width: f64, height: f64) -> f64 {
    PI * (width / 2.0) * (height / 2.0)
}

pub fn circle_area(radius: f64) -> f64 {
    PI * radius.powi(2)
}

pub fn rectangle_area(width: f64, height: f64) -> f64 {
    width * height
}

/// Star area as a pentagon plus the five triangles sitting on its edges
pub fn star_area(radius: f64) -> f64 {
    star_pentagon_area(radius) + 5.0 * star_triangle_area(radius)
}

// (5/4) * r^2 * cot(pi/5)
pub fn star_pentagon_area(radius: f64) -> f64 {
    (5.0 / 4.0) * radius * radius * (1.0 / (PI / 5.0).tan())
}

pub fn star_triangle_area(radius: f64) -> f64 {
    let base = 2.0 * radius * (PI / 5.0).sin();
    let height = radius * (PI / 5.0).cos();
    0.5 * base * height
}

/// Sum of the given areas rounded to the nearest whole pixel
pub fn total_area<I>(areas: I) -> u64
where
    I: IntoIterator<Item = f64>,
{
    let sum: f64 = areas.into_iter().sum();
    sum.round() as u64
}

/// Ten points of a five-pointed star centered on the origin.
///
/// Outer and inner vertices alternate, starting with the top point. The
/// inner vertices sit at half the radius, rotated a tenth of a turn past
/// their outer vertex. The path is closed by joining the last point back
/// to the first.
pub fn star_outline(radius: f32) -> [Vec2; 10] {
    let tau = std::f32::consts::PI * 2.0;
    let mut points = [Vec2::ZERO; 10];
    for i in 0..5 {
        let angle = (i as f32 * tau) / 5.0 - std::f32::consts::PI / 2.0;
        points[i * 2] = Vec2::new(angle.cos() * radius, angle.sin() * radius);

        let inner_angle = angle + tau / 10.0;
        points[i * 2 + 1] = Vec2::new(inner_angle.cos() * (radius / 2.0), inner_angle.sin() * (radius / 2.0));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance
    }

    #[test]
    fn rectangle_area_is_width_times_height() {
        let kind = ShapeKind::Rectangle { width: 80.0, height: 40.0 };
        assert_eq!(kind.area(), 3200.0);
    }

    #[test]
    fn circle_area_matches_pi_r_squared() {
        let kind = ShapeKind::Circle { radius: 40.0 };
        assert!(close(kind.area(), 5026.5, 0.1), "got {}", kind.area());
    }

    #[test]
    fn ellipse_area_uses_half_axes() {
        let kind = ShapeKind::Ellipse { width: 50.0, height: 40.0 };
        assert!(close(kind.area(), 1570.8, 0.1), "got {}", kind.area());
    }

    #[test]
    fn star_area_is_pentagon_plus_five_triangles() {
        let pentagon = star_pentagon_area(40.0);
        let triangle = star_triangle_area(40.0);
        assert!(close(pentagon, 2752.76, 0.01), "pentagon {pentagon}");
        assert!(close(triangle, 760.85, 0.01), "triangle {triangle}");

        let kind = ShapeKind::Star { radius: STAR_RADIUS };
        assert!(close(kind.area(), pentagon + 5.0 * triangle, 1e-9));
        assert!(close(kind.area(), 6556.99, 0.1), "got {}", kind.area());
    }

    #[test]
    fn total_area_rounds_the_sum() {
        assert_eq!(total_area(Vec::<f64>::new()), 0);
        assert_eq!(total_area([0.4, 0.4]), 1);
        assert_eq!(total_area([3200.0, circle_area(40.0)]), 8227);
    }

    #[test]
    fn star_outline_alternates_outer_and_inner_points() {
        let points = star_outline(40.0);
        for (i, p) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { 40.0 } else { 20.0 };
            assert!((p.length() - expected).abs() < 1e-3, "point {i} at {p:?}");
        }
        // First point is straight up
        assert!(points[0].x.abs() < 1e-3);
        assert!((points[0].y + 40.0).abs() < 1e-3);
    }

    #[test]
    fn star_height_matches_outline_extent() {
        let points = star_outline(STAR_RADIUS);
        let min_y = points.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        let max_y = points.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        let kind = ShapeKind::Star { radius: STAR_RADIUS };
        assert!((kind.height() - (max_y - min_y)).abs() < 1e-3);
    }

    #[test]
    fn catalog_holds_one_of_each_kind() {
        let names: Vec<&str> = CATALOG.iter().map(ShapeKind::name).collect();
        assert_eq!(names, ["Circle", "Ellipse", "Star", "Rectangle"]);
    }
}
