use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

/// Anything that can fly, whatever else it is.
pub trait Flyable {
    fn fly(&self) -> String;

    fn max_altitude_m(&self) -> u32;
}

pub struct Bird {
    species: String,
}

impl Bird {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
        }
    }
}

impl Flyable for Bird {
    fn fly(&self) -> String {
        format!("The {} flaps its wings", self.species)
    }

    fn max_altitude_m(&self) -> u32 {
        6_000
    }
}

pub struct Aeroplane {
    model: String,
}

impl Aeroplane {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

impl Flyable for Aeroplane {
    fn fly(&self) -> String {
        format!("The {} spins up its engines", self.model)
    }

    fn max_altitude_m(&self) -> u32 {
        12_000
    }
}

pub fn highest_flyer(flyers: &[Box<dyn Flyable>]) -> Option<&dyn Flyable> {
    flyers
        .iter()
        .map(|f| f.as_ref())
        .max_by_key(|f| f.max_altitude_m())
}

pub struct InterfacesDemo;

impl Demo for InterfacesDemo {
    fn name(&self) -> &'static str {
        "interfaces"
    }

    fn category(&self) -> Category {
        Category::Oops
    }

    fn summary(&self) -> &'static str {
        "Unrelated types share a Flyable contract"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let flyers: Vec<Box<dyn Flyable>> = vec![
            Box::new(Bird::new("eagle")),
            Box::new(Aeroplane::new("A320")),
        ];

        for flyer in &flyers {
            out.say(format!("{} (up to {} m)", flyer.fly(), flyer.max_altitude_m()));
        }
        if let Some(top) = highest_flyer(&flyers) {
            out.say(format!("Highest: {}", top.fly()));
        }
        Ok(())
    }
}
