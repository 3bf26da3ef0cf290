//! Row ↔ record mapping
//!
//! Pure functions over a [`SheetSchema`], decoupled from any network call.
//! Decoding is lenient about row length (short rows are padded with empty
//! strings); encoding always emits exactly one cell per schema field.

use super::schema::SheetSchema;
use shared::models::{Product, SheetEntry};

/// An ordered field-name → cell-value record, in schema order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(&'static str, String)>,
}

impl Record {
    pub fn new(fields: Vec<(&'static str, String)>) -> Self {
        Self { fields }
    }

    /// Value of the named field; empty string when the schema lacks it
    pub fn get(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|(n, v)| (*n, v.as_str()))
    }
}

/// Decode one data row positionally into a record
///
/// Missing trailing cells become empty strings; extra cells beyond the
/// schema are ignored.
pub fn decode_row(schema: &SheetSchema, row: &[String]) -> Record {
    let fields = schema
        .fields
        .iter()
        .enumerate()
        .map(|(i, spec)| (spec.name, row.get(i).cloned().unwrap_or_default()))
        .collect();
    Record { fields }
}

/// Encode a record into cells, in schema order
pub fn encode_record(schema: &SheetSchema, record: &Record) -> Vec<String> {
    schema
        .fields
        .iter()
        .map(|spec| record.get(spec.name).to_string())
        .collect()
}

/// Project a record onto the product wire model
pub fn product_from_record(record: &Record) -> Product {
    Product {
        id: record.get("id").to_string(),
        name: record.get("name").to_string(),
        price: record.get("price").to_string(),
        image: record.get("image").to_string(),
        created_at: record.get("created_at").to_string(),
    }
}

/// Project a record onto the generic entry wire model
pub fn entry_from_record(record: &Record) -> SheetEntry {
    SheetEntry {
        name: record.get("name").to_string(),
        message: record.get("message").to_string(),
    }
}
