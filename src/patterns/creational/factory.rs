//! Factory: callers ask for a shape by label and get it back behind the
//! common trait, never naming the concrete type.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::{CatalogError, Result};

pub trait Shape {
    fn kind(&self) -> &'static str;

    fn draw(&self, out: &mut Transcript) {
        out.say(format!("Inside {}::draw() method.", self.kind()));
    }
}

pub struct Rectangle;

impl Shape for Rectangle {
    fn kind(&self) -> &'static str {
        "Rectangle"
    }
}

pub struct Square;

impl Shape for Square {
    fn kind(&self) -> &'static str {
        "Square"
    }
}

pub struct Circle;

impl Shape for Circle {
    fn kind(&self) -> &'static str {
        "Circle"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ShapeFactory;

impl ShapeFactory {
    /// Case-insensitive; `None` for labels it does not know.
    pub fn get_shape(&self, shape_type: &str) -> Option<Box<dyn Shape>> {
        if shape_type.eq_ignore_ascii_case("CIRCLE") {
            Some(Box::new(Circle))
        } else if shape_type.eq_ignore_ascii_case("RECTANGLE") {
            Some(Box::new(Rectangle))
        } else if shape_type.eq_ignore_ascii_case("SQUARE") {
            Some(Box::new(Square))
        } else {
            None
        }
    }
}

pub struct FactoryDemo;

impl Demo for FactoryDemo {
    fn name(&self) -> &'static str {
        "factory"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "A shape factory selects shapes by label"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let shape_factory = ShapeFactory;

        for label in ["CIRCLE", "RECTANGLE", "SQUARE"] {
            let shape = shape_factory
                .get_shape(label)
                .ok_or_else(|| CatalogError::unknown_label("shape", label))?;
            shape.draw(out);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_any_case() {
        let factory = ShapeFactory;
        for (label, kind) in [
            ("CIRCLE", "Circle"),
            ("circle", "Circle"),
            ("Rectangle", "Rectangle"),
            ("sQuArE", "Square"),
        ] {
            assert_eq!(factory.get_shape(label).unwrap().kind(), kind);
        }
    }

    #[test]
    fn test_unknown_label_is_none() {
        let factory = ShapeFactory;
        assert!(factory.get_shape("triangle").is_none());
        assert!(factory.get_shape("").is_none());
        assert!(factory.get_shape(" circle").is_none());
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        FactoryDemo.run(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            &[
                "Inside Circle::draw() method.",
                "Inside Rectangle::draw() method.",
                "Inside Square::draw() method.",
            ]
        );
    }
}
