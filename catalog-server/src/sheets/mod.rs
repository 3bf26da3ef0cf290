//! Google Sheets values API client
//!
//! Implements [`RowStore`](crate::catalog::RowStore) over the v4 values
//! endpoints (`values/{range}` and `values/{range}:append`), authenticated
//! with a service-account JWT grant.

pub mod auth;
pub mod client;

pub use auth::TokenProvider;
pub use client::SheetsClient;
