//! Decorator: wrap a shape to add behavior while keeping the `Shape`
//! interface intact.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

pub trait Shape {
    fn draw(&self, out: &mut Transcript);
}

pub struct Rectangle;

impl Shape for Rectangle {
    fn draw(&self, out: &mut Transcript) {
        out.say("Shape: Rectangle");
    }
}

pub struct Circle;

impl Shape for Circle {
    fn draw(&self, out: &mut Transcript) {
        out.say("Shape: Circle");
    }
}

pub struct RedShapeDecorator<S> {
    decorated: S,
}

impl<S: Shape> RedShapeDecorator<S> {
    pub fn new(decorated: S) -> Self {
        Self { decorated }
    }

    fn set_red_border(&self, out: &mut Transcript) {
        out.say("Border Color: Red");
    }
}

impl<S: Shape> Shape for RedShapeDecorator<S> {
    fn draw(&self, out: &mut Transcript) {
        self.decorated.draw(out);
        self.set_red_border(out);
    }
}

impl Shape for Box<dyn Shape> {
    fn draw(&self, out: &mut Transcript) {
        (**self).draw(out);
    }
}

pub struct DecoratorDemo;

impl Demo for DecoratorDemo {
    fn name(&self) -> &'static str {
        "decorator"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "Add a red border to shapes without touching them"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let circle = Circle;
        let red_circle = RedShapeDecorator::new(Circle);
        let red_rectangle = RedShapeDecorator::new(Rectangle);

        out.say("Circle with normal border");
        circle.draw(out);

        out.blank();
        out.say("Circle of red border");
        red_circle.draw(out);

        out.blank();
        out.say("Rectangle of red border");
        red_rectangle.draw(out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorator_draws_inner_first() {
        let mut out = Transcript::new();
        RedShapeDecorator::new(Rectangle).draw(&mut out);
        assert_eq!(out.lines(), &["Shape: Rectangle", "Border Color: Red"]);
    }

    #[test]
    fn test_decorators_stack() {
        let boxed: Box<dyn Shape> = Box::new(RedShapeDecorator::new(Circle));
        let mut out = Transcript::new();
        RedShapeDecorator::new(boxed).draw(&mut out);
        assert_eq!(
            out.lines(),
            &["Shape: Circle", "Border Color: Red", "Border Color: Red"]
        );
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        DecoratorDemo.run(&mut out).unwrap();
        assert_eq!(out.len(), 10);
        assert_eq!(out.count_containing("Border Color: Red"), 2);
    }
}
