//! Encapsulation: the score can only change through the scorer's methods.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

#[derive(Debug, Default)]
pub struct CricketScorer {
    score: u32,
}

impl CricketScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn four(&mut self) -> u32 {
        self.score = self.score.wrapping_add(4);
        self.score
    }

    pub fn six(&mut self) -> u32 {
        self.score = self.score.wrapping_add(6);
        self.score
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}

pub struct EncapsulationDemo;

impl Demo for EncapsulationDemo {
    fn name(&self) -> &'static str {
        "encapsulation"
    }

    fn category(&self) -> Category {
        Category::Oops
    }

    fn summary(&self) -> &'static str {
        "A cricket scorer guards its score behind methods"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let mut scorer = CricketScorer::new();
        out.say(format!("The score is :{}", scorer.score()));
        scorer.four();
        out.say(format!("The new score is :{}", scorer.score()));
        Ok(())
    }
}
