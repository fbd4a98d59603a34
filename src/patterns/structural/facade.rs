//! Facade: `ShapeMaker` offers one simple call per shape and hides the
//! concrete types behind it.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

pub trait Shape {
    fn draw(&self, out: &mut Transcript);
}

pub struct Rectangle;

impl Shape for Rectangle {
    fn draw(&self, out: &mut Transcript) {
        out.say("Rectangle::draw()");
    }
}

pub struct Square;

impl Shape for Square {
    fn draw(&self, out: &mut Transcript) {
        out.say("Square::draw()");
    }
}

pub struct Circle;

impl Shape for Circle {
    fn draw(&self, out: &mut Transcript) {
        out.say("Circle::draw()");
    }
}

pub struct ShapeMaker {
    circle: Box<dyn Shape>,
    rectangle: Box<dyn Shape>,
    square: Box<dyn Shape>,
}

impl ShapeMaker {
    pub fn new() -> Self {
        Self {
            circle: Box::new(Circle),
            rectangle: Box::new(Rectangle),
            square: Box::new(Square),
        }
    }

    pub fn draw_circle(&self, out: &mut Transcript) {
        self.circle.draw(out);
    }

    pub fn draw_rectangle(&self, out: &mut Transcript) {
        self.rectangle.draw(out);
    }

    pub fn draw_square(&self, out: &mut Transcript) {
        self.square.draw(out);
    }
}

impl Default for ShapeMaker {
    fn default() -> Self {
        Self::new()
    }
}

pub struct FacadeDemo;

impl Demo for FacadeDemo {
    fn name(&self) -> &'static str {
        "facade"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "A shape maker hides the individual shape types"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let shape_maker = ShapeMaker::new();
        shape_maker.draw_circle(out);
        shape_maker.draw_rectangle(out);
        shape_maker.draw_square(out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_call_draws_one_shape() {
        let maker = ShapeMaker::default();
        let mut out = Transcript::new();
        maker.draw_square(&mut out);
        assert_eq!(out.lines(), &["Square::draw()"]);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        FacadeDemo.run(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            &["Circle::draw()", "Rectangle::draw()", "Square::draw()"]
        );
    }
}
