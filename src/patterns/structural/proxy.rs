//! Proxy: `ProxyImage` stands in for a `RealImage` and only loads it the
//! first time it is displayed.

use crate::config::toml_config::ProxySettings;
use crate::domain::model::{Category, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::cell::OnceCell;

pub trait Image {
    fn display(&self, out: &mut Transcript);
}

#[derive(Debug)]
pub struct RealImage {
    file_name: String,
}

impl RealImage {
    /// Loading happens on construction.
    pub fn load(file_name: impl Into<String>, out: &mut Transcript) -> Self {
        let file_name = file_name.into();
        out.say(format!("Loading {}", file_name));
        Self { file_name }
    }
}

impl Image for RealImage {
    fn display(&self, out: &mut Transcript) {
        out.say(format!("Displaying {}", self.file_name));
    }
}

#[derive(Debug)]
pub struct ProxyImage {
    file_name: String,
    real_image: OnceCell<RealImage>,
}

impl ProxyImage {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            real_image: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real_image.get().is_some()
    }
}

impl Image for ProxyImage {
    fn display(&self, out: &mut Transcript) {
        let image = self
            .real_image
            .get_or_init(|| RealImage::load(self.file_name.as_str(), out));
        image.display(out);
    }
}

pub struct ProxyDemo {
    settings: ProxySettings,
}

impl ProxyDemo {
    pub fn new(settings: ProxySettings) -> Self {
        Self { settings }
    }
}

impl Demo for ProxyDemo {
    fn name(&self) -> &'static str {
        "proxy"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "An image proxy defers loading until first display"
    }

    fn run(&self, out: &mut Transcript) -> Result<()> {
        let image = ProxyImage::new(self.settings.file_name.as_str());

        // first display loads from disk
        image.display(out);
        out.blank();
        // second one does not
        image.display(out);
        Ok(())
    }
}
