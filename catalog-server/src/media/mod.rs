//! Media host client
//!
//! Implements [`MediaHost`](crate::catalog::MediaHost) against the
//! Cloudinary upload API. Only constructed when Cloudinary credentials are
//! configured; without them the service runs in the no-image layout.

pub mod cloudinary;

pub use cloudinary::CloudinaryClient;
