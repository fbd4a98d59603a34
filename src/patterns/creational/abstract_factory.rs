//! Abstract Factory: a producer hands out factories, each factory builds one
//! family of products. Shapes are shared with the plain factory demo.

use super::factory::{self, Shape};
use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::{CatalogError, Result};

pub trait Color {
    fn kind(&self) -> &'static str;

    fn fill(&self, out: &mut Transcript) {
        out.say(format!("Inside {}::fill() method.", self.kind()));
    }
}

pub struct Red;

impl Color for Red {
    fn kind(&self) -> &'static str {
        "Red"
    }
}

pub struct Green;

impl Color for Green {
    fn kind(&self) -> &'static str {
        "Green"
    }
}

pub struct Blue;

impl Color for Blue {
    fn kind(&self) -> &'static str {
        "Blue"
    }
}

/// A factory answers `None` for products outside its family.
pub trait AbstractFactory {
    fn get_shape(&self, shape_type: &str) -> Option<Box<dyn Shape>>;
    fn get_color(&self, color: &str) -> Option<Box<dyn Color>>;
}

pub struct ShapeFactory;

impl AbstractFactory for ShapeFactory {
    fn get_shape(&self, shape_type: &str) -> Option<Box<dyn Shape>> {
        factory::ShapeFactory.get_shape(shape_type)
    }

    fn get_color(&self, _color: &str) -> Option<Box<dyn Color>> {
        None
    }
}

pub struct ColorFactory;

impl AbstractFactory for ColorFactory {
    fn get_shape(&self, _shape_type: &str) -> Option<Box<dyn Shape>> {
        None
    }

    fn get_color(&self, color: &str) -> Option<Box<dyn Color>> {
        if color.eq_ignore_ascii_case("RED") {
            Some(Box::new(Red))
        } else if color.eq_ignore_ascii_case("GREEN") {
            Some(Box::new(Green))
        } else if color.eq_ignore_ascii_case("BLUE") {
            Some(Box::new(Blue))
        } else {
            None
        }
    }
}

pub struct FactoryProducer;

impl FactoryProducer {
    pub fn get_factory(choice: &str) -> Option<Box<dyn AbstractFactory>> {
        if choice.eq_ignore_ascii_case("SHAPE") {
            Some(Box::new(ShapeFactory))
        } else if choice.eq_ignore_ascii_case("COLOR") {
            Some(Box::new(ColorFactory))
        } else {
            None
        }
    }
}

pub struct AbstractFactoryDemo;

impl Demo for AbstractFactoryDemo {
    fn name(&self) -> &'static str {
        "abstract-factory"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "A factory producer hands out shape and color factories"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let shape_factory = FactoryProducer::get_factory("SHAPE")
            .ok_or_else(|| CatalogError::unknown_label("factory", "SHAPE"))?;
        for label in ["CIRCLE", "RECTANGLE", "SQUARE"] {
            shape_factory
                .get_shape(label)
                .ok_or_else(|| CatalogError::unknown_label("shape", label))?
                .draw(out);
        }

        let color_factory = FactoryProducer::get_factory("COLOR")
            .ok_or_else(|| CatalogError::unknown_label("factory", "COLOR"))?;
        for label in ["RED", "Green", "BLUE"] {
            color_factory
                .get_color(label)
                .ok_or_else(|| CatalogError::unknown_label("color", label))?
                .fill(out);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_producer_selects_factories() {
        let shapes = FactoryProducer::get_factory("shape").unwrap();
        assert_eq!(shapes.get_shape("square").unwrap().kind(), "Square");
        assert!(shapes.get_color("red").is_none());

        let colors = FactoryProducer::get_factory("Color").unwrap();
        assert_eq!(colors.get_color("bLuE").unwrap().kind(), "Blue");
        assert!(colors.get_shape("circle").is_none());
    }

    #[test]
    fn test_unknown_labels_are_none() {
        assert!(FactoryProducer::get_factory("texture").is_none());
        assert!(ColorFactory.get_color("purple").is_none());
        assert!(ShapeFactory.get_shape("hexagon").is_none());
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        AbstractFactoryDemo.run(&mut out).unwrap();
        assert_eq!(out.len(), 6);
        assert_eq!(out.lines()[0], "Inside Circle::draw() method.");
        assert_eq!(out.lines()[4], "Inside Green::fill() method.");
    }
}
