//! The `GET /lookup` handler.
//!
//! Each request runs one pass of the machine
//! `received → validated → {cache hit | resolving} → responded`, or
//! `received → rejected → responded`. Exactly one outcome event is logged
//! before the response is produced: `hit` and `resolved` at info level,
//! `rejected` at warn level, and an unexpected resolver fault at error
//! level.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info, warn};

use phonemeta_lib::{validate, ResolveError, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

/// Handle `GET /lookup?number=<value>`.
///
/// The query string is URL-decoded by the extractor before validation. A
/// repeated `number` parameter is resolved first-occurrence-wins.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let raw = params
        .iter()
        .find(|(key, _)| key == "number")
        .map(|(_, value)| value.as_str());

    let Some(raw) = raw else {
        let err = ValidationError::Missing;
        warn!(outcome = "rejected", reason = %err, "lookup rejected");
        return ApiError::from(&err).into_response();
    };

    let number = match validate(raw) {
        Ok(number) => number,
        Err(err) => {
            warn!(outcome = "rejected", number = raw, reason = %err, "lookup rejected");
            return ApiError::from(&err).into_response();
        }
    };

    if let Some(meta) = state.cache().get(&number) {
        info!(outcome = "hit", number = %number, "lookup served from cache");
        return Json(&*meta).into_response();
    }

    match state.resolver().resolve(number.as_str()) {
        Ok(meta) => {
            let meta = Arc::new(meta);
            state.cache().put(number.clone(), Arc::clone(&meta));
            info!(outcome = "resolved", number = %number, "lookup resolved and cached");
            Json(&*meta).into_response()
        }
        Err(err @ (ResolveError::Unparseable { .. } | ResolveError::NoRegion { .. })) => {
            warn!(outcome = "rejected", number = %number, reason = %err, "lookup rejected");
            ApiError::from(&err).into_response()
        }
        Err(err @ ResolveError::Internal { .. }) => {
            error!(outcome = "fault", number = %number, reason = %err, "resolver fault");
            ApiError::from(&err).into_response()
        }
    }
}
