//! Column mapping — turns already-parsed spreadsheet rows into records.
//!
//! Reading the spreadsheet itself happens upstream. Rows arrive here as
//! header → cell maps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cards::models::Record;

/// Name shown when no column carries the card holder's name.
pub const UNKNOWN_NAME: &str = "Unknown";

pub type Row = Map<String, Value>;

/// Which source column feeds each record field. `None` means unmapped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub name: Option<String>,
    pub id: Option<String>,
    pub date: Option<String>,
}

impl ColumnMapping {
    /// Guesses a mapping from header names.
    ///
    /// Checked case-insensitively per header: `name` first, then `ut`/`id`,
    /// then `date`. Later headers overwrite earlier matches. With no name
    /// match, the first header becomes the name column.
    pub fn detect<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut mapping = ColumnMapping::default();
        for header in headers {
            let header = header.as_ref();
            let lower = header.to_lowercase();
            if lower.contains("name") {
                mapping.name = Some(header.to_string());
            } else if lower.contains("ut") || lower.contains("id") {
                mapping.id = Some(header.to_string());
            } else if lower.contains("date") {
                mapping.date = Some(header.to_string());
            }
        }
        if mapping.name.is_none() {
            mapping.name = headers.first().map(|h| h.as_ref().to_string());
        }
        mapping
    }

    /// Builds one record per row.
    pub fn apply(&self, rows: &[Row]) -> Vec<Record> {
        rows.iter()
            .map(|row| Record {
                name: cell(row, self.name.as_deref()).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                id: cell(row, self.id.as_deref()),
                date: cell(row, self.date.as_deref()),
            })
            .collect()
    }
}

/// Header names of a row, in column order.
pub fn headers_of(row: &Row) -> Vec<String> {
    row.keys().cloned().collect()
}

fn cell(row: &Row, column: Option<&str>) -> Option<String> {
    let column = column.filter(|c| !c.is_empty())?;
    match row.get(column)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
