pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "wine-catalog")]
#[command(about = "Builds a wine catalog page from a spreadsheet and serves it over HTTP")]
pub struct CliConfig {
    /// Path to the catalog table (.xlsx or .csv)
    #[arg(long, env = "WINE_DATA_PATH", default_value = "wine.xlsx")]
    pub data_path: String,

    /// Path to the page template
    #[arg(long, env = "WINE_TEMPLATE_PATH", default_value = "template.html")]
    pub template_path: String,

    /// Column whose values group the catalog
    #[arg(long, default_value = "Категория")]
    pub category_field: String,

    /// Year the winery opened, used for the page age label
    #[arg(long, default_value = "1920")]
    pub founded_year: i32,

    /// Directory the page is written to and served from
    #[arg(long, default_value = ".")]
    pub output_dir: String,

    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,

    #[arg(long, default_value = "8000")]
    pub port: u16,

    /// Build the page without starting the HTTP listener
    #[arg(long)]
    pub no_serve: bool,

    #[arg(long, help = "Enable system monitoring output")]
    pub monitor: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn template_path(&self) -> &str {
        &self.template_path
    }

    fn category_field(&self) -> &str {
        &self.category_field
    }

    fn founded_year(&self) -> i32 {
        self.founded_year
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data_path", &self.data_path)?;
        validation::validate_file_extensions(
            "data_path",
            std::slice::from_ref(&self.data_path),
            &["xlsx", "csv"],
        )?;
        validation::validate_path("template_path", &self.template_path)?;
        validation::validate_path("output_dir", &self.output_dir)?;
        validation::validate_range("founded_year", self.founded_year, 1, 9999)?;

        if self.category_field.trim().is_empty() {
            return Err(SiteError::InvalidConfigValueError {
                field: "category_field".to_string(),
                value: self.category_field.clone(),
                reason: "Category column name cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
