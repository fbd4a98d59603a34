//! Prototype: a cache of pre-built shapes hands out copies instead of
//! building new ones. Trait objects are cloned through `clone_box`.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::{CatalogError, Result};
use std::collections::HashMap;

pub trait ShapeClone {
    fn clone_box(&self) -> Box<dyn Shape>;
}

impl<T> ShapeClone for T
where
    T: Shape + Clone + 'static,
{
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

pub trait Shape: ShapeClone {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: &str);
    fn shape_type(&self) -> &'static str;

    fn draw(&self, out: &mut Transcript) {
        out.say(format!("Inside {}::draw() method.", self.shape_type()));
    }
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Rectangle {
    id: String,
}

impl Shape for Rectangle {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn shape_type(&self) -> &'static str {
        "Rectangle"
    }
}

#[derive(Debug, Clone, Default)]
pub struct Square {
    id: String,
}

impl Shape for Square {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn shape_type(&self) -> &'static str {
        "Square"
    }
}

#[derive(Debug, Clone, Default)]
pub struct Circle {
    id: String,
}

impl Shape for Circle {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn shape_type(&self) -> &'static str {
        "Circle"
    }
}

#[derive(Default)]
pub struct ShapeCache {
    shapes: HashMap<String, Box<dyn Shape>>,
}

impl ShapeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh copy of the cached shape, `None` for unknown ids.
    pub fn get_shape(&self, shape_id: &str) -> Option<Box<dyn Shape>> {
        self.shapes.get(shape_id).map(|shape| shape.clone_box())
    }

    pub fn insert(&mut self, mut shape: Box<dyn Shape>, id: &str) {
        shape.set_id(id);
        self.shapes.insert(id.to_string(), shape);
    }

    // stands in for an expensive lookup per shape
    pub fn load_cache(&mut self) {
        self.insert(Box::new(Circle::default()), "1");
        self.insert(Box::new(Square::default()), "2");
        self.insert(Box::new(Rectangle::default()), "3");
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

pub struct PrototypeDemo;

impl Demo for PrototypeDemo {
    fn name(&self) -> &'static str {
        "prototype"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "A shape cache returns clones of its prototypes"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let mut shape_cache = ShapeCache::new();
        shape_cache.load_cache();

        for id in ["1", "2", "3"] {
            let cloned_shape = shape_cache
                .get_shape(id)
                .ok_or_else(|| CatalogError::unknown_label("shape id", id))?;
            out.say(format!("Shape : {}", cloned_shape.shape_type()));
        }
        Ok(())
    }
}
