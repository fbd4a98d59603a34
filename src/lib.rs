pub mod config;
pub mod core;
pub mod domain;
pub mod oops;
pub mod patterns;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::CatalogConfig;
pub use core::{
    catalog::Catalog,
    runner::{render, render_listing, CatalogRunner, OutputFormat},
};
pub use domain::model::{Category, DemoReport, Transcript};
pub use domain::ports::Demo;
pub use utils::error::{CatalogError, Result};
