use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One input row: column header → cell value, in column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub data: IndexMap<String, serde_json::Value>,
}

/// Parsed input table. Headers are kept separately so the category column
/// can be checked even when there are no data rows.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

/// Category key → rows in source order, categories in first-encounter order.
pub type GroupedCatalog = IndexMap<String, Vec<Record>>;

/// The two bindings handed to the page template.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub grouped_wines: GroupedCatalog,
    pub total_years: String,
}
