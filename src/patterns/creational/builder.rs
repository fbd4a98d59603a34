//! Builder: a meal builder assembles meals step by step out of simple items.
//! Burgers come wrapped and cold drinks come bottled, so packing follows from
//! the item's family.

use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

pub trait Packing {
    fn pack(&self) -> &'static str;
}

pub struct Wrapper;

impl Packing for Wrapper {
    fn pack(&self) -> &'static str {
        "Wrapper"
    }
}

pub struct Bottle;

impl Packing for Bottle {
    fn pack(&self) -> &'static str {
        "Bottle"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFamily {
    Burger,
    ColdDrink,
}

pub trait Item {
    fn name(&self) -> &'static str;
    fn price(&self) -> f32;
    fn family(&self) -> ItemFamily;

    fn packing(&self) -> Box<dyn Packing> {
        match self.family() {
            ItemFamily::Burger => Box::new(Wrapper),
            ItemFamily::ColdDrink => Box::new(Bottle),
        }
    }
}

pub struct VegBurger;

impl Item for VegBurger {
    fn name(&self) -> &'static str {
        "Veg Burger"
    }

    fn price(&self) -> f32 {
        25.0
    }

    fn family(&self) -> ItemFamily {
        ItemFamily::Burger
    }
}

pub struct ChickenBurger;

impl Item for ChickenBurger {
    fn name(&self) -> &'static str {
        "Chicken Burger"
    }

    fn price(&self) -> f32 {
        50.5
    }

    fn family(&self) -> ItemFamily {
        ItemFamily::Burger
    }
}

pub struct Coke;

impl Item for Coke {
    fn name(&self) -> &'static str {
        "Coke"
    }

    fn price(&self) -> f32 {
        30.0
    }

    fn family(&self) -> ItemFamily {
        ItemFamily::ColdDrink
    }
}

pub struct Pepsi;

impl Item for Pepsi {
    fn name(&self) -> &'static str {
        "Pepsi"
    }

    fn price(&self) -> f32 {
        35.0
    }

    fn family(&self) -> ItemFamily {
        ItemFamily::ColdDrink
    }
}

#[derive(Default)]
pub struct Meal {
    items: Vec<Box<dyn Item>>,
}

impl Meal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: impl Item + 'static) {
        self.items.push(Box::new(item));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cost(&self) -> f32 {
        self.items.iter().map(|item| item.price()).sum()
    }

    pub fn show_items(&self, out: &mut Transcript) {
        for item in &self.items {
            out.say(format!(
                "Item : {}, Packing : {}, Price : {:.1}",
                item.name(),
                item.packing().pack(),
                item.price()
            ));
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MealBuilder;

impl MealBuilder {
    pub fn prepare_veg_meal(&self) -> Meal {
        let mut meal = Meal::new();
        meal.add_item(VegBurger);
        meal.add_item(Coke);
        meal
    }

    pub fn prepare_non_veg_meal(&self) -> Meal {
        let mut meal = Meal::new();
        meal.add_item(ChickenBurger);
        meal.add_item(Pepsi);
        meal
    }
}

pub struct BuilderDemo;

impl Demo for BuilderDemo {
    fn name(&self) -> &'static str {
        "builder"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "A meal builder assembles veg and non-veg meals"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let meal_builder = MealBuilder;

        let veg_meal = meal_builder.prepare_veg_meal();
        out.say("Veg Meal");
        veg_meal.show_items(out);
        out.say(format!("Total Cost: {:.1}", veg_meal.cost()));

        let non_veg_meal = meal_builder.prepare_non_veg_meal();
        out.blank();
        out.blank();
        out.say("Non-Veg Meal");
        non_veg_meal.show_items(out);
        out.say(format!("Total Cost: {:.1}", non_veg_meal.cost()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn add_pick(meal: &mut Meal, pick: usize) -> f32 {
        match pick % 4 {
            0 => {
                meal.add_item(VegBurger);
                VegBurger.price()
            }
            1 => {
                meal.add_item(ChickenBurger);
                ChickenBurger.price()
            }
            2 => {
                meal.add_item(Coke);
                Coke.price()
            }
            _ => {
                meal.add_item(Pepsi);
                Pepsi.price()
            }
        }
    }

    #[test]
    fn test_packing_follows_family() {
        assert_eq!(VegBurger.packing().pack(), "Wrapper");
        assert_eq!(ChickenBurger.packing().pack(), "Wrapper");
        assert_eq!(Coke.packing().pack(), "Bottle");
        assert_eq!(Pepsi.packing().pack(), "Bottle");
    }

    #[test]
    fn test_prepared_meal_costs() {
        let builder = MealBuilder;
        assert_eq!(builder.prepare_veg_meal().cost(), 55.0);
        assert_eq!(builder.prepare_non_veg_meal().cost(), 85.5);
        assert_eq!(Meal::new().cost(), 0.0);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Transcript::new();
        BuilderDemo.run(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            &[
                "Veg Meal",
                "Item : Veg Burger, Packing : Wrapper, Price : 25.0",
                "Item : Coke, Packing : Bottle, Price : 30.0",
                "Total Cost: 55.0",
                "",
                "",
                "Non-Veg Meal",
                "Item : Chicken Burger, Packing : Wrapper, Price : 50.5",
                "Item : Pepsi, Packing : Bottle, Price : 35.0",
                "Total Cost: 85.5",
            ]
        );
    }

    proptest! {
        #[test]
        fn cost_is_sum_of_item_prices(picks in proptest::collection::vec(0usize..4, 0..16)) {
            let mut meal = Meal::new();
            let mut prices = Vec::new();
            for pick in picks {
                prices.push(add_pick(&mut meal, pick));
            }

            prop_assert_eq!(meal.len(), prices.len());
            prop_assert_eq!(meal.cost(), prices.iter().sum::<f32>());
        }
    }
}
