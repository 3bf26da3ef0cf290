//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// All fields are strings: the backing store is a sheet and reproduces
/// whatever stringification it applied on write, so `price` is carried as
/// an opaque numeric-looking string rather than a parsed number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// UUID v4, generated server-side at creation, immutable
    pub id: String,
    pub name: String,
    pub price: String,
    /// Public URL at the media host, or empty when no image was supplied
    #[serde(default)]
    pub image: String,
    /// RFC 3339 UTC timestamp, generated server-side at creation, immutable
    pub created_at: String,
}
