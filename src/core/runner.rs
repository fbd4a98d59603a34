use crate::core::catalog::{Catalog, DemoInfo};
use crate::domain::model::{Category, DemoReport, Transcript};
use crate::domain::ports::Demo;
use crate::utils::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct CatalogRunner {
    catalog: Catalog,
}

impl CatalogRunner {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn run_demo(&self, demo: &dyn Demo) -> Result<DemoReport> {
        tracing::info!("▶️ Running {} ({})", demo.name(), demo.category());
        let started = Instant::now();

        let mut out = Transcript::new();
        demo.run(&mut out)?;

        tracing::debug!(
            "{} produced {} lines in {:?}",
            demo.name(),
            out.len(),
            started.elapsed()
        );

        Ok(DemoReport {
            name: demo.name().to_string(),
            category: demo.category(),
            summary: demo.summary().to_string(),
            lines: out,
        })
    }

    pub fn run(&self, name: &str) -> Result<DemoReport> {
        let demo = self
            .catalog
            .find(name)
            .ok_or_else(|| CatalogError::UnknownDemo {
                name: name.to_string(),
            })?;
        self.run_demo(demo)
    }

    /// Runs in the given order and stops at the first failure.
    pub fn run_many<I, S>(&self, names: I) -> Result<Vec<DemoReport>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.run(name.as_ref()))
            .collect()
    }

    pub fn run_all(&self) -> Result<Vec<DemoReport>> {
        self.catalog.iter().map(|d| self.run_demo(d)).collect()
    }

    pub fn run_category(&self, category: Category) -> Result<Vec<DemoReport>> {
        self.catalog
            .by_category(category)
            .map(|d| self.run_demo(d))
            .collect()
    }
}

pub fn render<W: Write>(reports: &[DemoReport], format: OutputFormat, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (i, report) in reports.iter().enumerate() {
                if i > 0 {
                    writeln!(writer)?;
                }
                writeln!(writer, "== {} ({}) ==", report.name, report.category)?;
                for line in report.lines.lines() {
                    writeln!(writer, "{}", line)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, reports)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

pub fn render_listing<W: Write>(infos: &[DemoInfo], format: OutputFormat, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let width = infos.iter().map(|i| i.name.len()).max().unwrap_or(0);
            for info in infos {
                writeln!(
                    writer,
                    "{:<width$}  {:<10}  {}",
                    info.name,
                    info.category.as_str(),
                    info.summary,
                    width = width
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, infos)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
