//! State: the context's behavior follows whichever state object it currently
//! holds. Any state may follow any other.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::{CatalogError, Result};
use std::fmt;

pub trait State: fmt::Display {
    fn do_action(&self, context: &mut Context, out: &mut Transcript);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartState;

impl State for StartState {
    fn do_action(&self, context: &mut Context, out: &mut Transcript) {
        out.say("Player is in start state");
        context.set_state(*self);
    }
}

impl fmt::Display for StartState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Start State")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopState;

impl State for StopState {
    fn do_action(&self, context: &mut Context, out: &mut Transcript) {
        out.say("Player is in stop state");
        context.set_state(*self);
    }
}

impl fmt::Display for StopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stop State")
    }
}

#[derive(Default)]
pub struct Context {
    state: Option<Box<dyn State>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_state(&mut self, state: impl State + 'static) {
        self.state = Some(Box::new(state));
    }

    pub fn state(&self) -> Option<&dyn State> {
        self.state.as_deref()
    }
}

pub struct StateDemo;

impl StateDemo {
    fn report(context: &Context, out: &mut Transcript) -> Result<()> {
        let state = context
            .state()
            .ok_or_else(|| CatalogError::unknown_label("state", "<unset>"))?;
        out.say(state.to_string());
        Ok(())
    }
}

impl Demo for StateDemo {
    fn name(&self) -> &'static str {
        "state"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "A player context switches between start and stop states"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let mut context = Context::new();

        StartState.do_action(&mut context, out);
        Self::report(&context, out)?;

        StopState.do_action(&mut context, out);
        Self::report(&context, out)?;
        Ok(())
    }
}
