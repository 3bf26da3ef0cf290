//! Catalog Server - sheet-backed product catalog service
//!
//! # Architecture overview
//!
//! The service translates between HTTP callers and two external
//! collaborators: a Google Sheet (the backing row store) and Cloudinary
//! (the media host, image-capable variant only).
//!
//! # Module structure
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # configuration, state, server bootstrap
//! ├── api/           # HTTP routes and handlers
//! ├── catalog/       # schema, codec, store adapter (the core contract)
//! ├── sheets/        # Google Sheets values client + service-account auth
//! ├── media/         # Cloudinary upload client
//! └── utils/         # logging, validation
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod media;
pub mod sheets;
pub mod utils;

// Re-export public types
pub use catalog::{CreateInput, ImagePayload, MediaHost, RowCatalog, RowStore, SheetSchema};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};
