use crate::domain::model::{GroupedCatalog, Record, Table};
use crate::utils::error::{Result, SiteError};
use calamine::{Data, Reader, Xlsx};
use indexmap::IndexMap;
use serde_json::Value;
use std::io::Cursor;
use std::path::Path;

/// Cells holding exactly one of these literals load as absent values.
/// Case-sensitive; lowercase "na" is an ordinary string.
pub const NA_TOKENS: [&str; 2] = ["N/A", "NA"];

/// Parses raw table bytes into headers and rows, dispatching on the
/// source file extension.
pub fn parse_table(bytes: &[u8], source_name: &str) -> Result<Table> {
    match Path::new(source_name)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some("xlsx") => parse_xlsx(bytes),
        Some("csv") => parse_csv(bytes),
        other => Err(SiteError::ParseError {
            message: format!(
                "Unsupported table format '{}' for {}",
                other.unwrap_or(""),
                source_name
            ),
        }),
    }
}

/// Groups rows by the category column, creating each bucket on first
/// encounter. Categories keep first-occurrence order, rows keep source
/// order, and every row lands in exactly one bucket.
pub fn group_by_category(table: Table, category_field: &str) -> Result<GroupedCatalog> {
    if !table.headers.iter().any(|h| h == category_field) {
        return Err(SiteError::ParseError {
            message: format!("Input table has no '{}' column", category_field),
        });
    }

    let mut grouped: GroupedCatalog = IndexMap::new();
    for row in table.rows {
        let key = row
            .data
            .get(category_field)
            .map(group_key)
            .unwrap_or_default();
        grouped.entry(key).or_default().push(row);
    }

    Ok(grouped)
}

fn parse_xlsx(bytes: &[u8]) -> Result<Table> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => {
            return Err(SiteError::ParseError {
                message: "Workbook contains no worksheets".to_string(),
            })
        }
    };

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(cell_to_header).collect(),
        None => {
            return Ok(Table {
                headers: Vec::new(),
                rows: Vec::new(),
            })
        }
    };

    let mut records = Vec::new();
    for row in rows {
        let mut data = IndexMap::new();
        for (i, header) in headers.iter().enumerate() {
            // ragged rows are padded with empty cells
            let value = row
                .get(i)
                .map(cell_to_value)
                .unwrap_or_else(|| Value::String(String::new()));
            data.insert(header.clone(), value);
        }
        records.push(Record { data });
    }

    Ok(Table {
        headers,
        rows: records,
    })
}

fn parse_csv(bytes: &[u8]) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut data = IndexMap::new();
        for (i, header) in headers.iter().enumerate() {
            let field = row.get(i).unwrap_or("");
            data.insert(header.clone(), csv_field_value(field));
        }
        records.push(Record { data });
    }

    Ok(Table {
        headers,
        rows: records,
    })
}

fn cell_to_header(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::String(String::new()),
        Data::String(s) => normalize_text(s),
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => float_value(*f),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => float_value(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        Data::Error(e) => Value::String(e.to_string()),
    }
}

fn csv_field_value(field: &str) -> Value {
    if NA_TOKENS.contains(&field) {
        return Value::Null;
    }
    if let Ok(n) = field.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = field.parse::<f64>() {
        return float_value(f);
    }
    Value::String(field.to_string())
}

fn normalize_text(text: &str) -> Value {
    if NA_TOKENS.contains(&text) {
        Value::Null
    } else {
        Value::String(text.to_string())
    }
}

// Spreadsheet readers hand back integer columns as floats; integral
// values render without a trailing ".0" this way.
fn float_value(f: f64) -> Value {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Value::from(f as i64)
    } else {
        Value::from(f)
    }
}

fn group_key(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
