//! Flyweight: circles are shared per color. A circle only keeps its intrinsic
//! state (the color); where it is drawn and how big is passed in on each
//! `draw` call, so one instance can be drawn any number of times.

use crate::config::toml_config::FlyweightSettings;
use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::{CatalogError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::rc::Rc;

/// Extrinsic state supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub radius: u32,
}

pub trait Shape {
    fn draw(&self, placement: Placement, out: &mut Transcript);
}

#[derive(Debug, PartialEq, Eq)]
pub struct Circle {
    color: String,
}

impl Circle {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl Shape for Circle {
    fn draw(&self, placement: Placement, out: &mut Transcript) {
        out.say(format!(
            "Circle: Draw() [Color : {}, x : {}, y :{}, radius :{}",
            self.color, placement.x, placement.y, placement.radius
        ));
    }
}

#[derive(Debug, Default)]
pub struct ShapeFactory {
    circles: HashMap<String, Rc<Circle>>,
}

impl ShapeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same color, same instance. A miss creates and caches a new circle.
    pub fn get_circle(&mut self, color: &str, out: &mut Transcript) -> Rc<Circle> {
        if let Some(circle) = self.circles.get(color) {
            tracing::trace!("Reusing circle of color {}", color);
            return Rc::clone(circle);
        }

        let circle = Rc::new(Circle::new(color));
        self.circles.insert(color.to_string(), Rc::clone(&circle));
        out.say(format!("Creating circle of color : {}", color));
        circle
    }

    pub fn cached(&self) -> usize {
        self.circles.len()
    }
}

pub struct FlyweightDemo {
    settings: FlyweightSettings,
}

impl FlyweightDemo {
    pub fn new(settings: FlyweightSettings) -> Self {
        Self { settings }
    }
}

impl Demo for FlyweightDemo {
    fn name(&self) -> &'static str {
        "flyweight"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "Many circles drawn from a handful of shared instances"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(self.settings.seed);
        let mut factory = ShapeFactory::new();

        for _ in 0..self.settings.circles {
            let color = self
                .settings
                .colors
                .choose(&mut rng)
                .ok_or_else(|| CatalogError::unknown_label("color", "<none configured>"))?;
            let circle = factory.get_circle(color, out);
            circle.draw(
                Placement {
                    x: rng.gen_range(0..100),
                    y: rng.gen_range(0..100),
                    radius: self.settings.radius,
                },
                out,
            );
        }

        tracing::debug!(
            "Drew {} circles from {} shared instances",
            self.settings.circles,
            factory.cached()
        );
        Ok(())
    }
}
