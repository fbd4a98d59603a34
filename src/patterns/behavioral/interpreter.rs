//! Interpreter: a tiny grammar of terminal, `or` and `and` expressions
//! evaluated against a context string.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

pub trait Expression {
    fn interpret(&self, context: &str) -> bool;
}

/// Matches when the context contains `data`.
pub struct TerminalExpression {
    data: String,
}

impl TerminalExpression {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl Expression for TerminalExpression {
    fn interpret(&self, context: &str) -> bool {
        context.contains(&self.data)
    }
}

pub struct OrExpression {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl OrExpression {
    pub fn new(left: impl Expression + 'static, right: impl Expression + 'static) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Expression for OrExpression {
    fn interpret(&self, context: &str) -> bool {
        self.left.interpret(context) || self.right.interpret(context)
    }
}

pub struct AndExpression {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl AndExpression {
    pub fn new(left: impl Expression + 'static, right: impl Expression + 'static) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Expression for AndExpression {
    fn interpret(&self, context: &str) -> bool {
        self.left.interpret(context) && self.right.interpret(context)
    }
}

/// Rule: Robert and John are male.
pub fn male_expression() -> impl Expression {
    OrExpression::new(
        TerminalExpression::new("Robert"),
        TerminalExpression::new("John"),
    )
}

/// Rule: Julie is a married woman.
pub fn married_woman_expression() -> impl Expression {
    AndExpression::new(
        TerminalExpression::new("Julie"),
        TerminalExpression::new("Married"),
    )
}

pub struct InterpreterDemo;

impl Demo for InterpreterDemo {
    fn name(&self) -> &'static str {
        "interpreter"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Boolean rules built from terminal/or/and expressions"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let is_male = male_expression();
        let is_married_woman = married_woman_expression();

        out.say(format!("John is male? {}", is_male.interpret("John")));
        out.say(format!(
            "Julie is a married women? {}",
            is_married_woman.interpret("Married Julie")
        ));
        Ok(())
    }
}
