//! Server state

use std::sync::Arc;

use shared::error::AppResult;

use crate::catalog::{MediaHost, RowCatalog, RowStore, SheetSchema};
use crate::core::Config;
use crate::media::CloudinaryClient;
use crate::sheets::{SheetsClient, TokenProvider};

/// Server state - shared references to the catalog adapters
///
/// Built once at startup from configuration; `Arc` makes cloning into
/// handlers cheap. The store and media clients are injected, so tests build
/// the same state around in-memory fakes via [`ServerState::with_services`].
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    /// Product catalog adapter (4- or 5-column layout)
    pub products: Arc<RowCatalog>,
    /// Generic two-column adapter
    pub sheet: Arc<RowCatalog>,
}

impl ServerState {
    /// Build state from real external clients
    ///
    /// Fails fast when the service-account key is unusable; nothing binds
    /// before the credentials parse.
    pub fn initialize(config: Config) -> AppResult<Self> {
        let http = reqwest::Client::new();

        let auth = TokenProvider::new(http.clone(), &config.service_account_key)?;
        let store: Arc<dyn RowStore> =
            Arc::new(SheetsClient::new(http.clone(), &config.spreadsheet_id, auth));

        let media: Option<Arc<dyn MediaHost>> = config.cloudinary.as_ref().map(|c| {
            Arc::new(CloudinaryClient::new(
                http.clone(),
                &c.cloud_name,
                &c.api_key,
                &c.api_secret,
            )) as Arc<dyn MediaHost>
        });

        Ok(Self::with_services(config, store, media))
    }

    /// Build state around injected store/media services
    pub fn with_services(
        config: Config,
        store: Arc<dyn RowStore>,
        media: Option<Arc<dyn MediaHost>>,
    ) -> Self {
        let products = RowCatalog::new(
            store.clone(),
            media,
            SheetSchema::products(&config.products_tab, config.image_column),
            &config.upload_folder,
        );
        let sheet = RowCatalog::new(
            store,
            None,
            SheetSchema::key_value(&config.sheet_tab),
            &config.upload_folder,
        );

        Self {
            config: Arc::new(config),
            products: Arc::new(products),
            sheet: Arc::new(sheet),
        }
    }
}
