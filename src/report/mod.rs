//! Rendering sinks for the final comparison.
//!
//! Reporters consume the outcome of a run and produce text. Nothing they do
//! feeds back into learning.

mod canvas;
mod json;
mod summary;
#[cfg(feature = "cli")]
mod table;

pub use canvas::*;
pub use json::*;
pub use summary::*;
#[cfg(feature = "cli")]
pub use table::*;

/// Renders a [`Summary`].
pub trait Reporter {
    fn render(&self, summary: &Summary<'_>) -> anyhow::Result<String>;
    /// Render to stdout.
    fn emit(&self, summary: &Summary<'_>) -> anyhow::Result<()> {
        println!("{}", self.render(summary)?);
        Ok(())
    }
}
