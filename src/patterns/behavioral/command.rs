//! Command: requests are wrapped as objects and handed to an invoker that
//! executes them later, in the order it took them.

use crate::config::toml_config::CommandSettings;
use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

pub trait Order {
    fn execute(&self, out: &mut Transcript);
}

/// The receiver of the orders.
#[derive(Debug, Clone)]
pub struct Stock {
    name: String,
    quantity: u32,
}

impl Stock {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    pub fn buy(&self, out: &mut Transcript) {
        out.say(format!(
            "Stock [ Name: {}, Quantity: {} ] bought",
            self.name, self.quantity
        ));
    }

    pub fn sell(&self, out: &mut Transcript) {
        out.say(format!(
            "Stock [ Name: {}, Quantity: {} ] sold",
            self.name, self.quantity
        ));
    }
}

pub struct BuyStock<'a> {
    stock: &'a Stock,
}

impl<'a> BuyStock<'a> {
    pub fn new(stock: &'a Stock) -> Self {
        Self { stock }
    }
}

impl Order for BuyStock<'_> {
    fn execute(&self, out: &mut Transcript) {
        self.stock.buy(out);
    }
}

pub struct SellStock<'a> {
    stock: &'a Stock,
}

impl<'a> SellStock<'a> {
    pub fn new(stock: &'a Stock) -> Self {
        Self { stock }
    }
}

impl Order for SellStock<'_> {
    fn execute(&self, out: &mut Transcript) {
        self.stock.sell(out);
    }
}

/// Invoker. Orders run in insertion order and the queue is emptied afterwards.
#[derive(Default)]
pub struct Broker<'a> {
    orders: Vec<Box<dyn Order + 'a>>,
}

impl<'a> Broker<'a> {
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    pub fn take_order(&mut self, order: impl Order + 'a) {
        self.orders.push(Box::new(order));
    }

    pub fn pending(&self) -> usize {
        self.orders.len()
    }

    /// Returns how many orders were executed.
    pub fn place_orders(&mut self, out: &mut Transcript) -> usize {
        let placed = self.orders.len();
        for order in self.orders.drain(..) {
            order.execute(out);
        }
        placed
    }
}

pub struct CommandDemo {
    settings: CommandSettings,
}

impl CommandDemo {
    pub fn new(settings: CommandSettings) -> Self {
        Self { settings }
    }
}

impl Demo for CommandDemo {
    fn name(&self) -> &'static str {
        "command"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Broker queues buy/sell orders and places them in order"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let stock = Stock::new(self.settings.stock_name.as_str(), self.settings.quantity);

        let mut broker = Broker::new();
        broker.take_order(BuyStock::new(&stock));
        broker.take_order(SellStock::new(&stock));

        let placed = broker.place_orders(out);
        tracing::debug!("Broker placed {} orders", placed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Tagged<'c> {
        tag: &'static str,
        calls: &'c Cell<usize>,
    }

    impl Order for Tagged<'_> {
        fn execute(&self, out: &mut Transcript) {
            self.calls.set(self.calls.get() + 1);
            out.say(self.tag);
        }
    }

    #[test]
    fn test_orders_execute_in_insertion_order() {
        let calls = Cell::new(0);
        let mut broker = Broker::new();
        for tag in ["a", "b", "c", "d"] {
            broker.take_order(Tagged { tag, calls: &calls });
        }

        let mut out = Transcript::new();
        assert_eq!(broker.place_orders(&mut out), 4);
        assert_eq!(calls.get(), 4);
        assert_eq!(out.lines(), &["a", "b", "c", "d"]);
    }

    #[test]
    fn test_place_orders_clears_queue() {
        let stock = Stock::new("ABC", 10);
        let mut broker = Broker::new();
        broker.take_order(BuyStock::new(&stock));
        assert_eq!(broker.pending(), 1);

        let mut out = Transcript::new();
        broker.place_orders(&mut out);
        assert_eq!(broker.pending(), 0);
        assert_eq!(broker.place_orders(&mut out), 0);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        CommandDemo::new(CommandSettings::default())
            .run(&mut out)
            .unwrap();
        assert_eq!(
            out.lines(),
            &[
                "Stock [ Name: ABC, Quantity: 10 ] bought",
                "Stock [ Name: ABC, Quantity: 10 ] sold",
            ]
        );
    }
}
