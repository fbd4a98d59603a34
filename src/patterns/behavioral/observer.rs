//! Observer: a subject notifies every attached observer, in attach order,
//! whenever its state changes.

use crate::config::toml_config::ObserverSettings;
use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

pub trait Observer {
    fn update(&self, state: u32, out: &mut Transcript);
}

pub struct BinaryObserver;

impl Observer for BinaryObserver {
    fn update(&self, state: u32, out: &mut Transcript) {
        out.say(format!("Binary String: {:b}", state));
    }
}

pub struct OctalObserver;

impl Observer for OctalObserver {
    fn update(&self, state: u32, out: &mut Transcript) {
        out.say(format!("Octal String: {:o}", state));
    }
}

pub struct HexaObserver;

impl Observer for HexaObserver {
    fn update(&self, state: u32, out: &mut Transcript) {
        out.say(format!("Hex String: {:X}", state));
    }
}

#[derive(Default)]
pub struct Subject {
    observers: Vec<Box<dyn Observer>>,
    state: u32,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn attach(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn set_state(&mut self, state: u32, out: &mut Transcript) {
        self.state = state;
        self.notify_all_observers(out);
    }

    pub fn notify_all_observers(&self, out: &mut Transcript) {
        for observer in &self.observers {
            observer.update(self.state, out);
        }
    }
}

pub struct ObserverDemo {
    settings: ObserverSettings,
}

impl ObserverDemo {
    pub fn new(settings: ObserverSettings) -> Self {
        Self { settings }
    }
}

impl Demo for ObserverDemo {
    fn name(&self) -> &'static str {
        "observer"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Hex, octal and binary observers follow a subject's state"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let mut subject = Subject::new();
        subject.attach(HexaObserver);
        subject.attach(OctalObserver);
        subject.attach(BinaryObserver);

        const ORDINALS: [&str; 5] = ["First", "Second", "Third", "Fourth", "Fifth"];
        for (i, state) in self.settings.states.iter().enumerate() {
            let ordinal = ORDINALS
                .get(i)
                .map(|o| o.to_string())
                .unwrap_or_else(|| format!("#{}", i + 1));
            out.say(format!("{} state change: {}", ordinal, state));
            subject.set_state(*state, out);
        }
        Ok(())
    }
}
