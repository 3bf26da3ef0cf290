//! List/create orchestration over the backing store
//!
//! Each call is stateless and independent: read the whole range, or
//! validate → (upload) → append one row. There is no retry, no transaction
//! and no compensation beyond "do not write if validation failed" and
//! "do not write if the upload failed".

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use chrono::{SecondsFormat, Utc};
use shared::error::{AppError, AppResult};
use uuid::Uuid;

use super::codec::{self, Record};
use super::schema::{FieldKind, SheetSchema};
use super::{MediaHost, RowStore};
use crate::utils::validation::validate_required_text;

/// Binary image payload with its declared media type
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub data: Bytes,
    pub media_type: String,
}

/// Caller input for a create operation
///
/// `fields` holds the caller-supplied text fields by schema name; generated
/// fields (id, timestamp, media URL) are never accepted from the caller.
#[derive(Debug, Default)]
pub struct CreateInput {
    pub fields: HashMap<String, String>,
    pub image: Option<ImagePayload>,
}

impl CreateInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn image(mut self, payload: ImagePayload) -> Self {
        self.image = Some(payload);
        self
    }
}

/// Catalog store adapter over one sheet tab
///
/// Constructed once at startup from injected clients; cheap to clone via
/// [`Arc`] in the server state.
pub struct RowCatalog {
    store: Arc<dyn RowStore>,
    media: Option<Arc<dyn MediaHost>>,
    schema: SheetSchema,
    upload_folder: String,
}

impl RowCatalog {
    pub fn new(
        store: Arc<dyn RowStore>,
        media: Option<Arc<dyn MediaHost>>,
        schema: SheetSchema,
        upload_folder: impl Into<String>,
    ) -> Self {
        Self {
            store,
            media,
            schema,
            upload_folder: upload_folder.into(),
        }
    }

    pub fn schema(&self) -> &SheetSchema {
        &self.schema
    }

    /// List every record of the tab, in store order
    ///
    /// Store order is append order, so the result is chronological. A tab
    /// holding only the header row (or nothing at all) yields an empty list.
    pub async fn list(&self) -> AppResult<Vec<Record>> {
        let range = self.schema.range();
        let rows = self.store.read_rows(&range).await.map_err(|e| {
            tracing::error!(range = %range, error = %e, cause = e.cause().unwrap_or(""), "List failed");
            // Read failures stay generic on the wire; only writes carry the
            // underlying cause out to the caller
            AppError::with_message(e.code, e.message)
        })?;

        if rows.len() < 2 {
            return Ok(Vec::new());
        }

        // Row 1 is the header, never data
        Ok(rows[1..]
            .iter()
            .map(|row| codec::decode_row(&self.schema, row))
            .collect())
    }

    /// Create one record: validate, upload the image if any, mint the
    /// generated fields, append exactly one row
    ///
    /// Validation happens strictly before any external call, so invalid
    /// input never reaches the store or the media host. Returns the fully
    /// populated record so callers can render it without a second read.
    pub async fn create(&self, input: CreateInput) -> AppResult<Record> {
        let trimmed = self.validate(&input)?;

        let image_url = self.upload_image(&input).await?;

        let mut fields = Vec::with_capacity(self.schema.fields.len());
        for spec in &self.schema.fields {
            let value = match spec.kind {
                FieldKind::GeneratedId => Uuid::new_v4().to_string(),
                FieldKind::GeneratedTimestamp => {
                    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
                }
                FieldKind::Required => trimmed[spec.name].clone(),
                FieldKind::MediaUrl => image_url.clone(),
            };
            fields.push((spec.name, value));
        }
        let record = Record::new(fields);

        let range = self.schema.range();
        let cells = codec::encode_record(&self.schema, &record);
        self.store.append_row(&range, cells).await.map_err(|e| {
            tracing::error!(range = %range, error = %e, cause = e.cause().unwrap_or(""), "Append failed");
            e
        })?;

        tracing::info!(range = %range, id = record.get("id"), "Record appended");
        Ok(record)
    }

    /// Single validation policy: trim, reject empty-after-trim
    fn validate(&self, input: &CreateInput) -> AppResult<HashMap<&'static str, String>> {
        let mut trimmed = HashMap::new();
        for name in self.schema.required_fields() {
            let value = input.fields.get(name).map(String::as_str).unwrap_or("");
            trimmed.insert(name, validate_required_text(value, name)?.to_string());
        }
        Ok(trimmed)
    }

    /// Upload the image payload, if the layout has an image column and a
    /// non-empty payload was supplied; otherwise the URL stays empty
    async fn upload_image(&self, input: &CreateInput) -> AppResult<String> {
        if self.schema.media_field().is_none() {
            return Ok(String::new());
        }
        let Some(payload) = &input.image else {
            return Ok(String::new());
        };
        if payload.data.is_empty() {
            return Ok(String::new());
        }

        let Some(media) = &self.media else {
            return Err(AppError::upload_rejected(
                "Image supplied but no media host is configured",
            ));
        };

        let url = media
            .upload(payload.data.clone(), &payload.media_type, &self.upload_folder)
            .await
            .map_err(|e| {
                tracing::error!(
                    folder = %self.upload_folder,
                    media_type = %payload.media_type,
                    error = %e,
                    "Image upload failed"
                );
                e
            })?;

        tracing::info!(folder = %self.upload_folder, url = %url, "Image uploaded");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// In-memory sheet: a header row plus appended data rows
    struct MemStore {
        rows: Mutex<Vec<Vec<String>>>,
        fail_reads: AtomicBool,
        fail_appends: AtomicBool,
    }

    impl MemStore {
        fn with_header(cells: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                rows: Mutex::new(vec![cells.iter().map(|c| c.to_string()).collect()]),
                fail_reads: AtomicBool::new(false),
                fail_appends: AtomicBool::new(false),
            })
        }

        fn empty() -> Arc<Self> {
            Arc::new(Self {
                rows: Mutex::new(Vec::new()),
                fail_reads: AtomicBool::new(false),
                fail_appends: AtomicBool::new(false),
            })
        }

        fn push_row(&self, cells: &[&str]) {
            self.rows
                .lock()
                .unwrap()
                .push(cells.iter().map(|c| c.to_string()).collect());
        }

        fn row_count(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl RowStore for MemStore {
        async fn read_rows(&self, _range: &str) -> AppResult<Vec<Vec<String>>> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(AppError::store_read("Failed to fetch products").with_cause("boom"));
            }
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn append_row(&self, _range: &str, cells: Vec<String>) -> AppResult<()> {
            if self.fail_appends.load(Ordering::SeqCst) {
                return Err(AppError::store_append("Failed to save product").with_cause("quota"));
            }
            self.rows.lock().unwrap().push(cells);
            Ok(())
        }
    }

    /// Media host fake counting calls
    struct MemMedia {
        calls: AtomicUsize,
        fail: AtomicBool,
    }

    impl MemMedia {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail: AtomicBool::new(false),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail: AtomicBool::new(true),
            })
        }
    }

    #[async_trait::async_trait]
    impl MediaHost for MemMedia {
        async fn upload(&self, _data: Bytes, _media_type: &str, folder: &str) -> AppResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(AppError::upload("Media upload failed").with_cause("rejected"));
            }
            Ok(format!("https://media.test/{folder}/image.jpg"))
        }
    }

    fn product_catalog(store: Arc<MemStore>, media: Option<Arc<MemMedia>>) -> RowCatalog {
        let media = media.map(|m| m as Arc<dyn MediaHost>);
        RowCatalog::new(
            store,
            media,
            SheetSchema::products("products", true),
            "products",
        )
    }

    fn pen_input() -> CreateInput {
        CreateInput::new().field("name", "Pen").field("price", "10")
    }

    fn uuid_shaped(s: &str) -> bool {
        Uuid::parse_str(s).is_ok()
    }

    #[tokio::test]
    async fn test_create_then_list_roundtrip() {
        let store = MemStore::with_header(&["id", "name", "price", "image", "created_at"]);
        let catalog = product_catalog(store.clone(), None);

        let created = catalog.create(pen_input()).await.unwrap();
        assert_eq!(created.get("name"), "Pen");
        assert_eq!(created.get("price"), "10");
        assert!(uuid_shaped(created.get("id")));
        assert!(
            chrono::DateTime::parse_from_rfc3339(created.get("created_at")).is_ok(),
            "created_at not RFC 3339: {}",
            created.get("created_at")
        );

        let listed = catalog.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
    }

    #[tokio::test]
    async fn test_ids_unique_across_calls() {
        let store = MemStore::with_header(&["id", "name", "price", "image", "created_at"]);
        let catalog = product_catalog(store, None);

        let a = catalog.create(pen_input()).await.unwrap();
        let b = catalog.create(pen_input()).await.unwrap();
        assert_ne!(a.get("id"), b.get("id"));
    }

    #[tokio::test]
    async fn test_missing_name_fails_before_any_external_call() {
        let store = MemStore::with_header(&["id", "name", "price", "image", "created_at"]);
        let media = MemMedia::ok();
        let catalog = product_catalog(store.clone(), Some(media.clone()));

        let input = CreateInput::new().field("price", "10").image(ImagePayload {
            data: Bytes::from_static(b"img"),
            media_type: "image/png".into(),
        });
        let err = catalog.create(input).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(store.row_count(), 1, "nothing may be appended");
        assert_eq!(media.calls.load(Ordering::SeqCst), 0, "no upload attempted");
    }

    #[tokio::test]
    async fn test_whitespace_only_price_rejected() {
        let store = MemStore::with_header(&["id", "name", "price", "image", "created_at"]);
        let catalog = product_catalog(store.clone(), None);

        let input = CreateInput::new().field("name", "Pen").field("price", "   ");
        let err = catalog.create(input).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(store.row_count(), 1);
    }

    #[tokio::test]
    async fn test_values_stored_trimmed() {
        let store = MemStore::with_header(&["id", "name", "price", "image", "created_at"]);
        let catalog = product_catalog(store, None);

        let input = CreateInput::new().field("name", "  Pen ").field("price", " 10 ");
        let created = catalog.create(input).await.unwrap();
        assert_eq!(created.get("name"), "Pen");
        assert_eq!(created.get("price"), "10");
    }

    #[tokio::test]
    async fn test_header_only_lists_empty() {
        let store = MemStore::with_header(&["id", "name", "price", "image", "created_at"]);
        let catalog = product_catalog(store, None);
        assert!(catalog.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_tab_lists_empty() {
        let catalog = product_catalog(MemStore::empty(), None);
        assert!(catalog.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_short_rows_padded_not_failed() {
        let store = MemStore::with_header(&["id", "name", "price", "image", "created_at"]);
        store.push_row(&["a3f1", "Pen"]);
        let catalog = product_catalog(store, None);

        let listed = catalog.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].get("price"), "");
        assert_eq!(listed[0].get("image"), "");
    }

    #[tokio::test]
    async fn test_list_surfaces_store_failure() {
        let store = MemStore::with_header(&["id", "name", "price", "image", "created_at"]);
        store.fail_reads.store(true, Ordering::SeqCst);
        let catalog = product_catalog(store, None);

        let err = catalog.list().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StoreReadFailed);
        assert_eq!(err.cause(), None, "read failures stay generic");
    }

    #[tokio::test]
    async fn test_append_failure_carries_cause() {
        let store = MemStore::with_header(&["id", "name", "price", "image", "created_at"]);
        store.fail_appends.store(true, Ordering::SeqCst);
        let catalog = product_catalog(store, None);

        let err = catalog.create(pen_input()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StoreAppendFailed);
        assert_eq!(err.cause(), Some("quota"));
    }

    #[tokio::test]
    async fn test_no_payload_skips_media_host() {
        let store = MemStore::with_header(&["id", "name", "price", "image", "created_at"]);
        let media = MemMedia::ok();
        let catalog = product_catalog(store, Some(media.clone()));

        let created = catalog.create(pen_input()).await.unwrap();
        assert_eq!(created.get("image"), "");
        assert_eq!(media.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_payload_skips_media_host() {
        let store = MemStore::with_header(&["id", "name", "price", "image", "created_at"]);
        let media = MemMedia::ok();
        let catalog = product_catalog(store, Some(media.clone()));

        let input = pen_input().image(ImagePayload {
            data: Bytes::new(),
            media_type: "image/png".into(),
        });
        let created = catalog.create(input).await.unwrap();
        assert_eq!(created.get("image"), "");
        assert_eq!(media.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_payload_uploaded_and_url_stored() {
        let store = MemStore::with_header(&["id", "name", "price", "image", "created_at"]);
        let media = MemMedia::ok();
        let catalog = product_catalog(store, Some(media.clone()));

        let input = pen_input().image(ImagePayload {
            data: Bytes::from_static(b"img"),
            media_type: "image/png".into(),
        });
        let created = catalog.create(input).await.unwrap();
        assert_eq!(created.get("image"), "https://media.test/products/image.jpg");
        assert_eq!(media.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_upload_failure_aborts_append() {
        let store = MemStore::with_header(&["id", "name", "price", "image", "created_at"]);
        let media = MemMedia::failing();
        let catalog = product_catalog(store.clone(), Some(media));

        let input = pen_input().image(ImagePayload {
            data: Bytes::from_static(b"img"),
            media_type: "image/png".into(),
        });
        let err = catalog.create(input).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::UploadFailed);
        assert_eq!(store.row_count(), 1, "no partial product may be created");
    }

    #[tokio::test]
    async fn test_payload_without_media_host_rejected() {
        let store = MemStore::with_header(&["id", "name", "price", "image", "created_at"]);
        let catalog = product_catalog(store.clone(), None);

        let input = pen_input().image(ImagePayload {
            data: Bytes::from_static(b"img"),
            media_type: "image/png".into(),
        });
        let err = catalog.create(input).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::UploadRejected);
        assert_eq!(store.row_count(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_both_appear() {
        let store = MemStore::with_header(&["id", "name", "price", "image", "created_at"]);
        let catalog = Arc::new(product_catalog(store, None));

        let (a, b) = tokio::join!(
            catalog.create(CreateInput::new().field("name", "Pen").field("price", "10")),
            catalog.create(CreateInput::new().field("name", "Mug").field("price", "25")),
        );
        let (a, b) = (a.unwrap(), b.unwrap());
        assert_ne!(a.get("id"), b.get("id"));

        let listed = catalog.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        let names: Vec<_> = listed.iter().map(|r| r.get("name").to_string()).collect();
        assert!(names.contains(&"Pen".to_string()));
        assert!(names.contains(&"Mug".to_string()));
    }

    #[tokio::test]
    async fn test_key_value_variant_stores_pair_as_submitted() {
        let store = MemStore::with_header(&["name", "message"]);
        let catalog = RowCatalog::new(
            store.clone(),
            None,
            SheetSchema::key_value("Sheet1"),
            "products",
        );

        let created = catalog
            .create(CreateInput::new().field("name", "alice").field("message", "hello"))
            .await
            .unwrap();
        assert_eq!(created.get("name"), "alice");
        assert_eq!(created.get("message"), "hello");

        let err = catalog
            .create(CreateInput::new().field("name", "bob"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(store.row_count(), 2);
    }
}
