//! Catalog store adapter
//!
//! Translates between an external row-oriented sheet range and in-memory
//! records. The adapter owns the only repeatable behavior of the service:
//!
//! - [`SheetSchema`]: the configurable column layout (ordered field list
//!   with per-field kind), shared by every variant
//! - [`codec`]: pure row ↔ record mapping given a schema
//! - [`RowCatalog`]: list/create orchestration — validation, id and
//!   timestamp assignment, optional media upload, append
//!
//! The network edges are behind the [`RowStore`] and [`MediaHost`] traits so
//! the adapter can be exercised with substitutable fakes.

pub mod codec;
pub mod schema;
pub mod service;

use axum::body::Bytes;
use shared::error::AppResult;

pub use codec::Record;
pub use schema::{FieldKind, FieldSpec, SheetSchema};
pub use service::{CreateInput, ImagePayload, RowCatalog};

/// External row-oriented backing store (the spreadsheet values API)
#[async_trait::async_trait]
pub trait RowStore: Send + Sync {
    /// Read every row of the range, as rows of string cells
    async fn read_rows(&self, range: &str) -> AppResult<Vec<Vec<String>>>;

    /// Append exactly one row to the range, letting the store interpret
    /// typed values (numeric strings become numbers)
    async fn append_row(&self, range: &str, cells: Vec<String>) -> AppResult<()>;
}

/// External media host (image upload)
#[async_trait::async_trait]
pub trait MediaHost: Send + Sync {
    /// Upload a binary payload under the given folder namespace and return
    /// its stable public URL
    async fn upload(&self, data: Bytes, media_type: &str, folder: &str) -> AppResult<String>;
}
