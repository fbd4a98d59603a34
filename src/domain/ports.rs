use crate::domain::model::{Category, Transcript};
use crate::utils::error::Result;

/// A runnable demonstration: a fixed driver that wires up its variants and
/// records what happens into a [`Transcript`].
pub trait Demo: Send + Sync {
    /// Kebab-case name, unique within a catalog.
    fn name(&self) -> &'static str;
    fn category(&self) -> Category;
    fn summary(&self) -> &'static str;
    fn run(&self, out: &mut Transcript) -> Result<()>;
}
