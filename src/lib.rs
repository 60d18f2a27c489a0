pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::PublishEngine, pipeline::SitePipeline};
pub use utils::error::{Result, SiteError};
