use crate::domain::model::PageContext;
use crate::utils::error::Result;
use std::path::Path;
use tera::{Context, Tera};

/// Binding names fixed by the page template contract.
pub const CATALOG_BINDING: &str = "grouped_wines";
pub const AGE_BINDING: &str = "total_years";

/// Renders the page template with the grouped catalog and age label.
/// Template lookup failures and undefined variables surface as errors
/// per Tera's own strictness.
pub fn render_page(template_path: &Path, page: &PageContext) -> Result<String> {
    let template_name = template_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "template.html".to_string());

    let mut tera = Tera::default();
    tera.add_template_file(template_path, Some(template_name.as_str()))?;

    let mut context = Context::new();
    context.insert(CATALOG_BINDING, &page.grouped_wines);
    context.insert(AGE_BINDING, &page.total_years);

    let html = tera.render(&template_name, &context)?;
    Ok(html)
}
