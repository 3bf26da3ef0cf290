//! Generic sheet handlers
//!
//! The undifferentiated two-column variant: the record is the raw pair as
//! submitted, with no id or timestamp generation.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::error::AppResult;
use shared::models::SheetEntry;
use shared::response::Ack;

use crate::catalog::CreateInput;
use crate::catalog::codec::entry_from_record;
use crate::core::ServerState;

/// GET /api/sheet response
#[derive(Debug, Serialize)]
pub struct EntryList {
    pub entries: Vec<SheetEntry>,
}

/// POST /api/sheet body
#[derive(Debug, Deserialize)]
pub struct AppendEntryBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    message: String,
}

/// GET /api/sheet - list every entry, header excluded
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<EntryList>> {
    let records = state.sheet.list().await?;
    let entries = records.iter().map(entry_from_record).collect();
    Ok(Json(EntryList { entries }))
}

/// POST /api/sheet - append one raw pair
pub async fn append(
    State(state): State<ServerState>,
    Json(body): Json<AppendEntryBody>,
) -> AppResult<Json<Ack>> {
    state
        .sheet
        .create(
            CreateInput::new()
                .field("name", body.name)
                .field("message", body.message),
        )
        .await?;
    Ok(Json(Ack::ok()))
}
