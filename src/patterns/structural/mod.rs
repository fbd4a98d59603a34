pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;
