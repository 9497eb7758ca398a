use crate::modules::collision::pick_topmost;
use crate::modules::geometry::total_area;
use crate::modules::shape::{Shape, ShapeId};
use macroquad::prelude::Vec2;

/// Live shapes in insertion (and render) order
#[derive(Debug, Default)]
pub struct Registry {
    shapes: Vec<Shape>,
}

impl Registry {
    pub fn new() -> Self {
        Registry { shapes: Vec::new() }
    }

    /// Adds the shape unless one with the same id is already live.
    /// Returns false when it was a duplicate.
    pub fn add(&mut self, shape: Shape) -> bool {
        if self.contains(shape.id) {
            return false;
        }
        self.shapes.push(shape);
        true
    }

    /// Removes the shape with this id. Removing twice is a no-op.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(index))
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.iter().any(|s| s.id == id)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.iter_mut()
    }

    /// Rounded sum of every live shape's area
    pub fn total_area(&self) -> u64 {
        total_area(self.shapes.iter().map(Shape::area))
    }

    /// Gives every live shape the same fall speed
    pub fn set_gravity(&mut self, gravity: f32) {
        for shape in &mut self.shapes {
            shape.gravity = gravity;
        }
    }

    /// Topmost shape under the point
    pub fn shape_at(&self, point: Vec2) -> Option<ShapeId> {
        pick_topmost(&self.shapes, point).map(|index| self.shapes[index].id)
    }
}
