use crate::core::{formatter, loader, renderer};
use crate::core::{ConfigProvider, PageContext, Pipeline, Storage, Table};
use crate::utils::error::Result;
use chrono::{Datelike, Local};
use std::path::Path;

/// Fixed page file name; the listener serves it as the directory index.
pub const OUTPUT_FILE: &str = "index.html";

pub struct SitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SitePipeline<S, C> {
    async fn extract(&self) -> Result<Table> {
        tracing::debug!("Reading catalog table from: {}", self.config.data_path());
        let bytes = self.storage.read_file(self.config.data_path()).await?;

        let table = loader::parse_table(&bytes, self.config.data_path())?;
        tracing::debug!(
            "Parsed {} rows across {} columns",
            table.rows.len(),
            table.headers.len()
        );

        Ok(table)
    }

    async fn transform(&self, table: Table) -> Result<PageContext> {
        let grouped_wines = loader::group_by_category(table, self.config.category_field())?;
        let total_years =
            formatter::age_label(self.config.founded_year(), Local::now().year());

        tracing::debug!(
            "Grouped into {} categories, age label '{}'",
            grouped_wines.len(),
            total_years
        );

        Ok(PageContext {
            grouped_wines,
            total_years,
        })
    }

    async fn load(&self, page: PageContext) -> Result<String> {
        let html = renderer::render_page(Path::new(self.config.template_path()), &page)?;

        tracing::debug!("Writing rendered page ({} bytes)", html.len());
        self.storage.write_file(OUTPUT_FILE, html.as_bytes()).await?;

        Ok(format!("{}/{}", self.config.output_dir(), OUTPUT_FILE))
    }
}
