//! Memento: capture an object's state so it can be restored later without
//! exposing its internals.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::{CatalogError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    state: String,
}

impl Memento {
    fn new(state: String) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &str {
        &self.state
    }
}

#[derive(Debug, Default)]
pub struct Originator {
    state: String,
}

impl Originator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn save_state_to_memento(&self) -> Memento {
        Memento::new(self.state.clone())
    }

    pub fn restore_from_memento(&mut self, memento: &Memento) {
        self.state = memento.state.clone();
    }
}

/// Append-only history of mementos.
#[derive(Debug, Default)]
pub struct CareTaker {
    mementos: Vec<Memento>,
}

impl CareTaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, memento: Memento) {
        self.mementos.push(memento);
    }

    pub fn get(&self, index: usize) -> Option<&Memento> {
        self.mementos.get(index)
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}

pub struct MementoDemo;

impl Demo for MementoDemo {
    fn name(&self) -> &'static str {
        "memento"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Save and restore an originator's state through a caretaker"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let mut originator = Originator::new();
        let mut care_taker = CareTaker::new();

        originator.set_state("State #1");
        originator.set_state("State #2");
        care_taker.add(originator.save_state_to_memento());

        originator.set_state("State #3");
        care_taker.add(originator.save_state_to_memento());

        originator.set_state("State #4");
        out.say(format!("Current State: {}", originator.state()));

        for (index, label) in [(0, "First"), (1, "Second")] {
            let memento = care_taker
                .get(index)
                .ok_or_else(|| CatalogError::unknown_label("memento index", &index.to_string()))?;
            originator.restore_from_memento(memento);
            out.say(format!("{} saved State: {}", label, originator.state()));
        }
        Ok(())
    }
}
