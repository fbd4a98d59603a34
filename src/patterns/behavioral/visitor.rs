//! Visitor: the operation lives in the visitor, the parts only dispatch to
//! the matching `visit_*` method.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

pub trait ComputerPart {
    fn accept(&self, visitor: &mut dyn ComputerPartVisitor);
}

pub trait ComputerPartVisitor {
    fn visit_computer(&mut self, computer: &Computer);
    fn visit_mouse(&mut self, mouse: &Mouse);
    fn visit_keyboard(&mut self, keyboard: &Keyboard);
    fn visit_monitor(&mut self, monitor: &Monitor);
}

pub struct Keyboard;

impl ComputerPart for Keyboard {
    fn accept(&self, visitor: &mut dyn ComputerPartVisitor) {
        visitor.visit_keyboard(self);
    }
}

pub struct Monitor;

impl ComputerPart for Monitor {
    fn accept(&self, visitor: &mut dyn ComputerPartVisitor) {
        visitor.visit_monitor(self);
    }
}

pub struct Mouse;

impl ComputerPart for Mouse {
    fn accept(&self, visitor: &mut dyn ComputerPartVisitor) {
        visitor.visit_mouse(self);
    }
}

/// Visits its parts first, then itself.
pub struct Computer {
    parts: Vec<Box<dyn ComputerPart>>,
}

impl Computer {
    pub fn new() -> Self {
        Self {
            parts: vec![Box::new(Mouse), Box::new(Keyboard), Box::new(Monitor)],
        }
    }
}

impl Default for Computer {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputerPart for Computer {
    fn accept(&self, visitor: &mut dyn ComputerPartVisitor) {
        for part in &self.parts {
            part.accept(visitor);
        }
        visitor.visit_computer(self);
    }
}

pub struct ComputerPartDisplayVisitor<'t> {
    out: &'t mut Transcript,
}

impl<'t> ComputerPartDisplayVisitor<'t> {
    pub fn new(out: &'t mut Transcript) -> Self {
        Self { out }
    }
}

impl ComputerPartVisitor for ComputerPartDisplayVisitor<'_> {
    fn visit_computer(&mut self, _computer: &Computer) {
        self.out.say("Displaying Computer.");
    }

    fn visit_mouse(&mut self, _mouse: &Mouse) {
        self.out.say("Displaying Mouse.");
    }

    fn visit_keyboard(&mut self, _keyboard: &Keyboard) {
        self.out.say("Displaying Keyboard.");
    }

    fn visit_monitor(&mut self, _monitor: &Monitor) {
        self.out.say("Displaying Monitor.");
    }
}

pub struct VisitorDemo;

impl Demo for VisitorDemo {
    fn name(&self) -> &'static str {
        "visitor"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "A display visitor walks the parts of a computer"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let computer = Computer::new();
        computer.accept(&mut ComputerPartDisplayVisitor::new(out));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct PartCounter {
        parts: usize,
        computers: usize,
    }

    impl ComputerPartVisitor for PartCounter {
        fn visit_computer(&mut self, _computer: &Computer) {
            self.computers += 1;
        }

        fn visit_mouse(&mut self, _mouse: &Mouse) {
            self.parts += 1;
        }

        fn visit_keyboard(&mut self, _keyboard: &Keyboard) {
            self.parts += 1;
        }

        fn visit_monitor(&mut self, _monitor: &Monitor) {
            self.parts += 1;
        }
    }

    #[test]
    fn test_counter_sees_every_part_once() {
        let mut counter = PartCounter::default();
        Computer::new().accept(&mut counter);
        assert_eq!(counter.parts, 3);
        assert_eq!(counter.computers, 1);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        VisitorDemo.run(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            &[
                "Displaying Mouse.",
                "Displaying Keyboard.",
                "Displaying Monitor.",
                "Displaying Computer.",
            ]
        );
    }
}
