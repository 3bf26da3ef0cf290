//! Generic sheet API module

mod handler;

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/sheet", get(handler::list).post(handler::append))
}
