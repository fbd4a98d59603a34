pub mod catalog;
pub mod runner;

pub use crate::domain::model::{Category, DemoReport, Transcript};
pub use crate::domain::ports::Demo;
pub use crate::utils::error::Result;
