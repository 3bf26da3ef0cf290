//! Product API handlers
//!
//! `POST /api/products` accepts both submission encodings: multipart form
//! fields (`name`, `price`, optional `image` file part) and a JSON body
//! (`name`, `price`). The encoding is picked by content type, not by a
//! forked route.

use axum::{
    Json,
    extract::{FromRequest, Multipart, Request, State},
};
use http::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::error::{AppError, AppResult};
use shared::models::Product;

use crate::catalog::codec::product_from_record;
use crate::catalog::{CreateInput, ImagePayload};
use crate::core::ServerState;

/// GET /api/products response
#[derive(Debug, Serialize)]
pub struct ProductList {
    pub products: Vec<Product>,
}

/// POST /api/products response
#[derive(Debug, Serialize)]
pub struct ProductCreated {
    pub success: bool,
    pub product: Product,
}

/// JSON submission body
///
/// `price` may arrive as a string or a bare number; both are carried to the
/// store as text and validated for presence only.
#[derive(Debug, Deserialize)]
pub struct CreateProductBody {
    #[serde(default)]
    name: Value,
    #[serde(default)]
    price: Value,
}

fn text_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// GET /api/products - list every product, in append order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ProductList>> {
    let records = state.products.list().await?;
    let products = records.iter().map(product_from_record).collect();
    Ok(Json(ProductList { products }))
}

/// POST /api/products - create one product
pub async fn create(
    State(state): State<ServerState>,
    req: Request,
) -> AppResult<Json<ProductCreated>> {
    let input = if is_multipart(&req) {
        let multipart = Multipart::from_request(req, &()).await.map_err(|e| {
            AppError::invalid_request(format!("Invalid multipart request: {e}"))
        })?;
        read_multipart(multipart).await?
    } else {
        let Json(body) = Json::<CreateProductBody>::from_request(req, &())
            .await
            .map_err(|e| AppError::invalid_request(format!("Invalid JSON body: {e}")))?;
        CreateInput::new()
            .field("name", text_value(&body.name))
            .field("price", text_value(&body.price))
    };

    let record = state.products.create(input).await?;
    Ok(Json(ProductCreated {
        success: true,
        product: product_from_record(&record),
    }))
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

/// Pull `name`, `price` and the optional `image` file out of the form
async fn read_multipart(mut multipart: Multipart) -> AppResult<CreateInput> {
    let mut input = CreateInput::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid_request(format!("Invalid multipart request: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "image" => {
                let media_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await.map_err(|e| {
                    AppError::invalid_request(format!("Invalid multipart request: {e}"))
                })?;
                input = input.image(ImagePayload { data, media_type });
            }
            "name" | "price" => {
                let value = field.text().await.map_err(|e| {
                    AppError::invalid_request(format!("Invalid multipart request: {e}"))
                })?;
                input = input.field(name, value);
            }
            // Unknown form fields are ignored
            _ => {}
        }
    }

    Ok(input)
}
