//! Generic sheet entry model

use serde::{Deserialize, Serialize};

/// A raw two-column sheet entry, stored exactly as submitted
///
/// No id or timestamp is generated for this variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetEntry {
    pub name: String,
    pub message: String,
}
