//! Template Method: `play` fixes the order of the steps, implementors only
//! fill the steps in.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

pub trait Game {
    fn initialize(&self, out: &mut Transcript);
    fn start_play(&self, out: &mut Transcript);
    fn end_play(&self, out: &mut Transcript);

    /// Implementors are not expected to override this.
    fn play(&self, out: &mut Transcript) {
        self.initialize(out);
        self.start_play(out);
        self.end_play(out);
    }
}

pub struct Cricket;

impl Game for Cricket {
    fn initialize(&self, out: &mut Transcript) {
        out.say("Cricket Game Initialized! Start playing.");
    }

    fn start_play(&self, out: &mut Transcript) {
        out.say("Cricket Game Started. Enjoy the game!");
    }

    fn end_play(&self, out: &mut Transcript) {
        out.say("Cricket Game Finished!");
    }
}

pub struct Football;

impl Game for Football {
    fn initialize(&self, out: &mut Transcript) {
        out.say("Football Game Initialized! Start playing.");
    }

    fn start_play(&self, out: &mut Transcript) {
        out.say("Football Game Started. Enjoy the game!");
    }

    fn end_play(&self, out: &mut Transcript) {
        out.say("Football Game Finished!");
    }
}

pub struct TemplateMethodDemo;

impl Demo for TemplateMethodDemo {
    fn name(&self) -> &'static str {
        "template-method"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Games share one fixed play sequence"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let games: [&dyn Game; 2] = [&Cricket, &Football];
        for (i, game) in games.iter().enumerate() {
            if i > 0 {
                out.blank();
            }
            game.play(out);
        }
        Ok(())
    }
}
