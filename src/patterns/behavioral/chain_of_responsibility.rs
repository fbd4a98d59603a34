//! Chain of Responsibility: a request travels along a chain of receivers and
//! each one decides for itself whether to act on it.
//!
//! Here every link is a logger with a threshold. A link writes the message
//! when its threshold is at or below the message severity, and forwards the
//! message to the next link regardless.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info = 1,
    Debug = 2,
    Error = 3,
}

pub trait LogWriter {
    fn write(&self, message: &str, out: &mut Transcript);
}

pub struct ConsoleWriter;

impl LogWriter for ConsoleWriter {
    fn write(&self, message: &str, out: &mut Transcript) {
        out.say(format!("Standard Console::Logger: {}", message));
    }
}

pub struct ErrorWriter;

impl LogWriter for ErrorWriter {
    fn write(&self, message: &str, out: &mut Transcript) {
        out.say(format!("Error Console::Logger: {}", message));
    }
}

pub struct FileWriter;

impl LogWriter for FileWriter {
    fn write(&self, message: &str, out: &mut Transcript) {
        out.say(format!("File::Logger: {}", message));
    }
}

pub struct ChainLink {
    level: Severity,
    writer: Box<dyn LogWriter>,
    next: Option<Box<ChainLink>>,
}

impl ChainLink {
    pub fn new(level: Severity, writer: impl LogWriter + 'static) -> Self {
        Self {
            level,
            writer: Box::new(writer),
            next: None,
        }
    }

    pub fn set_next(&mut self, next: ChainLink) {
        self.next = Some(Box::new(next));
    }

    /// Builder-style variant of [`ChainLink::set_next`].
    pub fn then(mut self, next: ChainLink) -> Self {
        self.set_next(next);
        self
    }

    pub fn log_message(&self, level: Severity, message: &str, out: &mut Transcript) {
        if self.level <= level {
            self.writer.write(message, out);
        }
        if let Some(next) = &self.next {
            next.log_message(level, message, out);
        }
    }
}

/// error -> file -> console
pub fn chain_of_loggers() -> ChainLink {
    let console = ChainLink::new(Severity::Info, ConsoleWriter);
    let file = ChainLink::new(Severity::Debug, FileWriter).then(console);
    ChainLink::new(Severity::Error, ErrorWriter).then(file)
}

pub struct ChainOfResponsibilityDemo;

impl Demo for ChainOfResponsibilityDemo {
    fn name(&self) -> &'static str {
        "chain-of-responsibility"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Loggers chained by severity threshold"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let chain = chain_of_loggers();

        chain.log_message(Severity::Info, "This is an information.", out);
        chain.log_message(Severity::Debug, "This is an debug level information.", out);
        chain.log_message(Severity::Error, "This is an error information.", out);
        Ok(())
    }
}
