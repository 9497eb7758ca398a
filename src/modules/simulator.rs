use crate::modules::registry::Registry;
use crate::modules::shape::{Shape, ShapeId};
use log::debug;

/// Moves every live shape down once per frame and drops the ones that fell out
pub struct FallSimulator {
    viewport_height: f32,
}

impl FallSimulator {
    pub fn new(viewport_height: f32) -> Self {
        FallSimulator { viewport_height }
    }

    /// One frame. All positions move first, then the boundary check runs over
    /// the moved shapes. Returns the shapes that left the viewport.
    pub fn step(&self, registry: &mut Registry) -> Vec<Shape> {
        for shape in registry.iter_mut() {
            shape.advance();
        }

        let exited: Vec<ShapeId> = registry
            .iter()
            .filter(|shape| shape.has_exited(self.viewport_height))
            .map(|shape| shape.id)
            .collect();

        let removed: Vec<Shape> = exited.into_iter().filter_map(|id| registry.remove(id)).collect();
        for shape in &removed {
            debug!("{} #{} left the viewport", shape.kind.name(), shape.id.0);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::geometry::ShapeKind;
    use macroquad::prelude::Vec2;

    fn rect_at(id: u64, y: f32, gravity: f32) -> Shape {
        Shape::new(ShapeId(id), ShapeKind::Rectangle { width: 80.0, height: 40.0 }, Vec2::new(0.0, y), [9, 9, 9], gravity)
    }

    #[test]
    fn every_shape_falls_by_its_own_gravity() {
        let mut registry = Registry::new();
        registry.add(rect_at(1, 0.0, 0.5));
        registry.add(rect_at(2, 10.0, 2.0));
        let sim = FallSimulator::new(600.0);

        assert!(sim.step(&mut registry).is_empty());
        let ys: Vec<f32> = registry.iter().map(|s| s.pos.y).collect();
        assert_eq!(ys, [0.5, 12.0]);
    }

    #[test]
    fn shape_crossing_the_bottom_is_removed_in_that_frame() {
        let mut registry = Registry::new();
        registry.add(rect_at(1, 639.5, 0.5));
        registry.add(rect_at(2, 0.0, 0.5));
        let sim = FallSimulator::new(600.0);

        let removed = sim.step(&mut registry);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].id, ShapeId(1));
        assert_eq!(removed[0].pos.y, 640.0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn removed_shape_never_moves_again() {
        let mut registry = Registry::new();
        registry.add(rect_at(1, 640.0, 1.0));
        let sim = FallSimulator::new(600.0);

        let removed = sim.step(&mut registry);
        assert_eq!(removed.len(), 1);
        for _ in 0..5 {
            assert!(sim.step(&mut registry).is_empty());
        }
        assert!(registry.get(ShapeId(1)).is_none());
        assert_eq!(removed[0].pos.y, 641.0);
    }

    #[test]
    fn shape_just_above_threshold_stays() {
        let mut registry = Registry::new();
        registry.add(rect_at(1, 638.0, 1.0));
        let sim = FallSimulator::new(600.0);
        assert!(sim.step(&mut registry).is_empty());
        assert_eq!(registry.len(), 1);
    }
}
