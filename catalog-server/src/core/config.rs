//! Server configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | GOOGLE_SERVICE_ACCOUNT_KEY | (required) | service-account key JSON |
//! | GOOGLE_SHEET_ID | (required) | target spreadsheet id |
//! | PRODUCTS_TAB | products | product tab name |
//! | SHEET_TAB | Sheet1 | generic two-column tab name |
//! | CLOUDINARY_CLOUD_NAME | - | media host cloud name |
//! | CLOUDINARY_API_KEY | - | media host API key |
//! | CLOUDINARY_API_SECRET | - | media host API secret |
//! | UPLOAD_FOLDER | products | media host folder namespace |
//! | PRODUCT_IMAGE_COLUMN | auto | force the 5-column layout on/off |
//! | HTTP_PORT | 3000 | HTTP service port |
//! | LOG_LEVEL | info | log level |
//! | LOG_DIR | - | daily-rolling file logs |
//!
//! Missing or partial credential configuration is fatal before the server
//! binds; there is no per-request recovery from a broken configuration.

use shared::error::{AppError, AppResult};

/// Media host credentials (image-capable variant only)
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API service port
    pub http_port: u16,
    /// Service-account key JSON (parsed by the token provider)
    pub service_account_key: String,
    /// Target spreadsheet id
    pub spreadsheet_id: String,
    /// Product tab name
    pub products_tab: String,
    /// Generic two-column tab name
    pub sheet_tab: String,
    /// Media host folder namespace for product images
    pub upload_folder: String,
    /// Media host credentials, when the image variant is enabled
    pub cloudinary: Option<CloudinaryConfig>,
    /// Whether the product layout carries the image column
    pub image_column: bool,
    /// Log level
    pub log_level: String,
    /// Optional directory for daily-rolling file logs
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    ///
    /// `from_env` is a thin wrapper over this; tests inject closures
    /// instead of mutating process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let required = |name: &str| -> AppResult<String> {
            match lookup(name) {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(AppError::config_missing(name)),
            }
        };

        let service_account_key = required("GOOGLE_SERVICE_ACCOUNT_KEY")?;
        let spreadsheet_id = required("GOOGLE_SHEET_ID")?;

        let cloudinary = match (
            lookup("CLOUDINARY_CLOUD_NAME"),
            lookup("CLOUDINARY_API_KEY"),
            lookup("CLOUDINARY_API_SECRET"),
        ) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(CloudinaryConfig {
                cloud_name,
                api_key,
                api_secret,
            }),
            (None, None, None) => None,
            _ => {
                return Err(AppError::config_invalid(
                    "CLOUDINARY_CLOUD_NAME, CLOUDINARY_API_KEY and CLOUDINARY_API_SECRET must be set together",
                ));
            }
        };

        // The image column follows the media host unless forced explicitly
        let image_column = match lookup("PRODUCT_IMAGE_COLUMN") {
            Some(v) => v.parse().map_err(|_| {
                AppError::config_invalid(format!(
                    "PRODUCT_IMAGE_COLUMN must be true or false, got {v:?}"
                ))
            })?,
            None => cloudinary.is_some(),
        };

        Ok(Self {
            http_port: lookup("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            service_account_key,
            spreadsheet_id,
            products_tab: lookup("PRODUCTS_TAB").unwrap_or_else(|| "products".into()),
            sheet_tab: lookup("SHEET_TAB").unwrap_or_else(|| "Sheet1".into()),
            upload_folder: lookup("UPLOAD_FOLDER").unwrap_or_else(|| "products".into()),
            cloudinary,
            image_column,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use std::collections::HashMap;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |name| map.get(name).map(|v| v.to_string())
    }

    const KEY: (&str, &str) = ("GOOGLE_SERVICE_ACCOUNT_KEY", "{}");
    const SHEET: (&str, &str) = ("GOOGLE_SHEET_ID", "sheet-123");

    #[test]
    fn test_minimal_configuration() {
        let config = Config::from_lookup(lookup_from(&[KEY, SHEET])).unwrap();
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.products_tab, "products");
        assert_eq!(config.sheet_tab, "Sheet1");
        assert!(config.cloudinary.is_none());
        assert!(!config.image_column, "image layout off without a media host");
    }

    #[test]
    fn test_missing_sheet_id_fails_fast() {
        let err = Config::from_lookup(lookup_from(&[KEY])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigMissing);
        assert!(err.message.contains("GOOGLE_SHEET_ID"));
    }

    #[test]
    fn test_blank_key_fails_fast() {
        let err = Config::from_lookup(lookup_from(&[("GOOGLE_SERVICE_ACCOUNT_KEY", "  "), SHEET]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigMissing);
    }

    #[test]
    fn test_full_cloudinary_enables_image_column() {
        let config = Config::from_lookup(lookup_from(&[
            KEY,
            SHEET,
            ("CLOUDINARY_CLOUD_NAME", "demo"),
            ("CLOUDINARY_API_KEY", "key"),
            ("CLOUDINARY_API_SECRET", "secret"),
        ]))
        .unwrap();
        assert!(config.cloudinary.is_some());
        assert!(config.image_column);
    }

    #[test]
    fn test_partial_cloudinary_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            KEY,
            SHEET,
            ("CLOUDINARY_CLOUD_NAME", "demo"),
        ]))
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_image_column_override() {
        let config = Config::from_lookup(lookup_from(&[
            KEY,
            SHEET,
            ("PRODUCT_IMAGE_COLUMN", "true"),
        ]))
        .unwrap();
        assert!(config.image_column);

        let err = Config::from_lookup(lookup_from(&[
            KEY,
            SHEET,
            ("PRODUCT_IMAGE_COLUMN", "yes"),
        ]))
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
    }
}
