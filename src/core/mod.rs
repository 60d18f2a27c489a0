pub mod engine;
pub mod formatter;
pub mod loader;
pub mod pipeline;
pub mod renderer;

pub use crate::domain::model::{GroupedCatalog, PageContext, Record, Table};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
