//! Inheritance expressed the Rust way: shared data is embedded (composition),
//! shared behavior comes from trait default methods, and "overriding" means
//! providing the method in the impl.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

/// Data every animal carries.
#[derive(Debug, Clone)]
pub struct Animal {
    name: String,
    legs: u8,
}

impl Animal {
    pub fn new(name: impl Into<String>, legs: u8, out: &mut Transcript) -> Self {
        let name = name.into();
        out.say(format!("Animal constructor: {}", name));
        Self { name, legs }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn legs(&self) -> u8 {
        self.legs
    }
}

pub trait Creature {
    fn base(&self) -> &Animal;

    fn describe(&self) -> String {
        format!("{} walks on {} legs", self.base().name(), self.base().legs())
    }

    fn sound(&self) -> String {
        format!("{} makes a sound", self.base().name())
    }
}

#[derive(Debug, Clone)]
pub struct Dog {
    animal: Animal,
    breed: String,
}

impl Dog {
    /// Builds the embedded `Animal` first, like a superclass constructor.
    pub fn new(name: &str, breed: &str, out: &mut Transcript) -> Self {
        let animal = Animal::new(name, 4, out);
        out.say(format!("Dog constructor: {} ({})", name, breed));
        Self {
            animal,
            breed: breed.to_string(),
        }
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }
}

impl Creature for Dog {
    fn base(&self) -> &Animal {
        &self.animal
    }

    fn sound(&self) -> String {
        format!("{} barks", self.animal.name())
    }
}

#[derive(Debug, Clone)]
pub struct Cat {
    animal: Animal,
}

impl Cat {
    pub fn new(name: &str, out: &mut Transcript) -> Self {
        let animal = Animal::new(name, 4, out);
        out.say(format!("Cat constructor: {}", name));
        Self { animal }
    }
}

// keeps the default sound
impl Creature for Cat {
    fn base(&self) -> &Animal {
        &self.animal
    }
}

pub struct InheritanceDemo;

impl Demo for InheritanceDemo {
    fn name(&self) -> &'static str {
        "inheritance"
    }

    fn category(&self) -> Category {
        Category::Oops
    }

    fn summary(&self) -> &'static str {
        "Constructor chaining and overriding through composition and traits"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let dog = Dog::new("Rex", "Beagle", out);
        let cat = Cat::new("Tom", out);

        let creatures: [&dyn Creature; 2] = [&dog, &cat];
        for creature in creatures {
            out.say(creature.describe());
            out.say(creature.sound());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_constructor_runs_first() {
        let mut out = Transcript::new();
        let dog = Dog::new("Rex", "Beagle", &mut out);
        assert_eq!(
            out.lines(),
            &["Animal constructor: Rex", "Dog constructor: Rex (Beagle)"]
        );
        assert_eq!(dog.breed(), "Beagle");
    }

    #[test]
    fn test_override_and_default() {
        let mut out = Transcript::new();
        let dog = Dog::new("Rex", "Beagle", &mut out);
        let cat = Cat::new("Tom", &mut out);

        assert_eq!(dog.sound(), "Rex barks");
        assert_eq!(cat.sound(), "Tom makes a sound");
        assert_eq!(cat.describe(), "Tom walks on 4 legs");
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        InheritanceDemo.run(&mut out).unwrap();
        assert_eq!(out.len(), 8);
        assert_eq!(out.lines()[4], "Rex walks on 4 legs");
        assert_eq!(out.lines()[2], "Animal constructor: Tom");
        assert_eq!(out.lines()[3], "Cat constructor: Tom");
        assert_eq!(out.lines()[5], "Rex barks");
        assert_eq!(out.lines()[7], "Tom makes a sound");
    }
}
