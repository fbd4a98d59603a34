//! Strategy: the algorithm a context runs is an object that can be swapped at
//! runtime. Plain closures qualify as strategies too.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

pub trait Strategy {
    fn do_operation(&self, num1: i32, num2: i32) -> i32;
}

impl<F> Strategy for F
where
    F: Fn(i32, i32) -> i32,
{
    fn do_operation(&self, num1: i32, num2: i32) -> i32 {
        self(num1, num2)
    }
}

pub struct OperationAdd;

impl Strategy for OperationAdd {
    fn do_operation(&self, num1: i32, num2: i32) -> i32 {
        num1.wrapping_add(num2)
    }
}

pub struct OperationSubtract;

impl Strategy for OperationSubtract {
    fn do_operation(&self, num1: i32, num2: i32) -> i32 {
        num1.wrapping_sub(num2)
    }
}

pub struct OperationMultiply;

impl Strategy for OperationMultiply {
    fn do_operation(&self, num1: i32, num2: i32) -> i32 {
        num1.wrapping_mul(num2)
    }
}

pub struct Context {
    strategy: Box<dyn Strategy>,
}

impl Context {
    pub fn new(strategy: impl Strategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    pub fn set_strategy(&mut self, strategy: impl Strategy + 'static) {
        self.strategy = Box::new(strategy);
    }

    pub fn execute_strategy(&self, num1: i32, num2: i32) -> i32 {
        self.strategy.do_operation(num1, num2)
    }
}

pub struct StrategyDemo;

impl Demo for StrategyDemo {
    fn name(&self) -> &'static str {
        "strategy"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Swap arithmetic strategies inside one context"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let mut context = Context::new(OperationAdd);
        out.say(format!("10 + 5 = {}", context.execute_strategy(10, 5)));

        context.set_strategy(OperationSubtract);
        out.say(format!("10 - 5 = {}", context.execute_strategy(10, 5)));

        context.set_strategy(OperationMultiply);
        out.say(format!("10 * 5 = {}", context.execute_strategy(10, 5)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_operations() {
        assert_eq!(OperationAdd.do_operation(2, 3), 5);
        assert_eq!(OperationSubtract.do_operation(2, 3), -1);
        assert_eq!(OperationMultiply.do_operation(2, 3), 6);
    }

    // 溢位時與 32 位元整數一樣回繞，不會 panic
    #[test]
    fn test_operations_wrap_on_overflow() {
        let context = Context::new(OperationAdd);
        assert_eq!(context.execute_strategy(i32::MAX, 1), i32::MIN);
        assert_eq!(OperationSubtract.do_operation(i32::MIN, 1), i32::MAX);
        assert_eq!(OperationMultiply.do_operation(1 << 20, 1 << 20), 0);
        assert_eq!(OperationMultiply.do_operation(i32::MAX, 2), -2);
    }

    #[test]
    fn test_closure_strategy() {
        let context = Context::new(|a: i32, b: i32| a.max(b));
        assert_eq!(context.execute_strategy(4, 9), 9);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        StrategyDemo.run(&mut out).unwrap();
        assert_eq!(out.lines(), &["10 + 5 = 15", "10 - 5 = 5", "10 * 5 = 50"]);
    }
}
