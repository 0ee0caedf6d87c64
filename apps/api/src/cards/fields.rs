//! Field Resolver — picks the ID and date actually printed on a card.
//!
//! Precedence per field: the record's own value if it is non-empty,
//! otherwise the computed fallback. Resolution depends only on
//! `(record, index, settings)`, so records can be resolved in any order.

use serde::Serialize;

use crate::cards::models::{GlobalCardSettings, Record};

/// Prefix on every generated identifier.
pub const ID_PREFIX: &str = "UT";
/// Zero-padded width of the numeric part of a generated identifier.
pub const ID_DIGITS: usize = 6;

/// Values to print for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFields {
    pub index: usize,
    pub name: String,
    pub id: String,
    pub date: String,
    /// True when `id` came from the sequence rather than the record.
    pub id_generated: bool,
}

/// Resolves the displayed fields of `record` at sequence position `index`.
pub fn resolve_fields(record: &Record, index: usize, settings: &GlobalCardSettings) -> ResolvedFields {
    let (id, id_generated) = match present(record.id.as_deref()) {
        Some(id) => (id.to_string(), false),
        None => (generated_id(&settings.start_id, index), true),
    };
    let date = present(record.date.as_deref())
        .unwrap_or(settings.global_date.as_str())
        .to_string();

    ResolvedFields {
        index,
        name: record.name.clone(),
        id,
        date,
        id_generated,
    }
}

/// Resolves every record, using each one's position as its index.
pub fn resolve_all(records: &[Record], settings: &GlobalCardSettings) -> Vec<ResolvedFields> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| resolve_fields(record, index, settings))
        .collect()
}

/// `UT` + zero-padded `seed + index`.
///
/// Sums below zero clamp to 0. Numbers wider than the padding are printed in full.
pub fn generated_id(start_id: &str, index: usize) -> String {
    let offset = i64::try_from(index).unwrap_or(i64::MAX);
    let number = parse_seed(start_id).saturating_add(offset).max(0);
    format!("{ID_PREFIX}{number:0width$}", width = ID_DIGITS)
}

/// Lenient integer parse: optional leading whitespace and sign, then the
/// leading run of ASCII digits. Anything unparseable is 0.
pub fn parse_seed(start_id: &str) -> i64 {
    let trimmed = start_id.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude = rest[..digits_end]
        .bytes()
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
