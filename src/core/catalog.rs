use crate::config::toml_config::CatalogConfig;
use crate::domain::model::Category;
use crate::domain::ports::Demo;
use crate::oops::{
    encapsulation::EncapsulationDemo, inheritance::InheritanceDemo, interfaces::InterfacesDemo,
    notes::NotesDemo,
};
use crate::patterns::behavioral::{
    chain_of_responsibility::ChainOfResponsibilityDemo, command::CommandDemo,
    interpreter::InterpreterDemo, iterator::IteratorDemo, mediator::MediatorDemo,
    memento::MementoDemo, observer::ObserverDemo, state::StateDemo, strategy::StrategyDemo,
    template_method::TemplateMethodDemo, visitor::VisitorDemo,
};
use crate::patterns::creational::{
    abstract_factory::AbstractFactoryDemo, builder::BuilderDemo, factory::FactoryDemo,
    prototype::PrototypeDemo,
};
use crate::patterns::structural::{
    decorator::DecoratorDemo, facade::FacadeDemo, flyweight::FlyweightDemo, proxy::ProxyDemo,
};
use serde::Serialize;

/// Name, category and summary of a registered demo.
#[derive(Debug, Clone, Serialize)]
pub struct DemoInfo {
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
}

impl DemoInfo {
    fn of(demo: &dyn Demo) -> Self {
        Self {
            name: demo.name(),
            category: demo.category(),
            summary: demo.summary(),
        }
    }
}

/// Registry of demos, kept in registration order.
pub struct Catalog {
    demos: Vec<Box<dyn Demo>>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self { demos: Vec::new() }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        let mut catalog = Self::empty();

        // behavioral
        catalog.register(ChainOfResponsibilityDemo);
        catalog.register(CommandDemo::new(config.command.clone()));
        catalog.register(InterpreterDemo);
        catalog.register(IteratorDemo);
        catalog.register(MediatorDemo);
        catalog.register(MementoDemo);
        catalog.register(ObserverDemo::new(config.observer.clone()));
        catalog.register(StateDemo);
        catalog.register(StrategyDemo);
        catalog.register(TemplateMethodDemo);
        catalog.register(VisitorDemo);

        // creational
        catalog.register(FactoryDemo);
        catalog.register(AbstractFactoryDemo);
        catalog.register(BuilderDemo);
        catalog.register(PrototypeDemo);

        // structural
        catalog.register(DecoratorDemo);
        catalog.register(FacadeDemo);
        catalog.register(FlyweightDemo::new(config.flyweight.clone()));
        catalog.register(ProxyDemo::new(config.proxy.clone()));

        // oops
        catalog.register(EncapsulationDemo);
        catalog.register(InheritanceDemo);
        catalog.register(InterfacesDemo);
        catalog.register(NotesDemo);

        tracing::debug!("Registered {} demos", catalog.len());
        catalog
    }

    /// A demo registered under a name already taken replaces the earlier one.
    pub fn register(&mut self, demo: impl Demo + 'static) {
        if let Some(pos) = self.demos.iter().position(|d| d.name() == demo.name()) {
            tracing::warn!("Replacing demo {}", demo.name());
            self.demos[pos] = Box::new(demo);
        } else {
            self.demos.push(Box::new(demo));
        }
    }

    /// Case-insensitive; `_` and spaces count as `-`.
    pub fn find(&self, name: &str) -> Option<&dyn Demo> {
        let wanted = normalize(name);
        self.demos
            .iter()
            .find(|d| d.name() == wanted)
            .map(|d| d.as_ref())
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &dyn Demo> {
        self.iter().filter(move |d| d.category() == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Demo> {
        self.demos.iter().map(|d| d.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|d| d.name()).collect()
    }

    pub fn infos(&self, category: Option<Category>) -> Vec<DemoInfo> {
        self.iter()
            .filter(|d| category.map_or(true, |c| d.category() == c))
            .map(DemoInfo::of)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.demos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_config(&CatalogConfig::default())
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_catalog_is_complete() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 23);
        assert_eq!(catalog.by_category(Category::Behavioral).count(), 11);
        assert_eq!(catalog.by_category(Category::Creational).count(), 4);
        assert_eq!(catalog.by_category(Category::Structural).count(), 4);
        assert_eq!(catalog.by_category(Category::Oops).count(), 4);
    }

    #[test]
    fn test_names_are_unique() {
        let catalog = Catalog::default();
        let names = catalog.names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_find_normalizes_names() {
        let catalog = Catalog::default();
        for name in [
            "chain-of-responsibility",
            "Chain_Of_Responsibility",
            "chain of responsibility",
            "  CHAIN-OF-RESPONSIBILITY ",
        ] {
            assert_eq!(catalog.find(name).unwrap().name(), "chain-of-responsibility");
        }
        assert!(catalog.find("singleton").is_none());
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut catalog = Catalog::empty();
        catalog.register(FacadeDemo);
        catalog.register(FacadeDemo);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_infos_filter_by_category() {
        let catalog = Catalog::default();
        let infos = catalog.infos(Some(Category::Structural));
        let names: Vec<_> = infos.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["decorator", "facade", "flyweight", "proxy"]);
        assert_eq!(catalog.infos(None).len(), 23);
    }
}
