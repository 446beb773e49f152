//! HTTP route handlers
//!
//! Handlers are generic over the request body so the router can be driven
//! from tests without a socket.

pub mod campsite;
pub mod gear;
pub mod health;

pub use campsite::handle_get_campsite;
pub use gear::{
    handle_add_gear, handle_delete_gear, handle_undo_volunteer_gear, handle_volunteer_gear,
};
pub use health::{health_check, HealthResponse};

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Body;
use hyper::{Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use tracing::{error, warn};

use crate::auth::resolve_caller;
use crate::server::AppState;
use crate::types::{TrailheadError, UserId};

pub type FullBody = Full<Bytes>;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// =============================================================================
// Response Helpers
// =============================================================================

pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<FullBody> {
    let json = serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string());
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(json)))
        .unwrap()
}

pub(crate) fn error_response(status: StatusCode, error: &str) -> Response<FullBody> {
    json_response(
        status,
        &ErrorResponse {
            error: error.to_string(),
        },
    )
}

/// Translate a fault into a JSON error response
///
/// Client-side faults carry their message. Server-side faults are logged
/// and answered with the bare status reason.
pub(crate) fn fault_response(err: TrailheadError) -> Response<FullBody> {
    let status = err.status_code();
    if status.is_server_error() {
        error!(status = status.as_u16(), error = %err, "Request failed");
        let reason = status.canonical_reason().unwrap_or("Server error");
        return error_response(status, reason);
    }

    warn!(status = status.as_u16(), error = %err, "Request rejected");
    error_response(status, &err.to_string())
}

// =============================================================================
// Request Helpers
// =============================================================================

/// Identify the caller or produce the 401 to send back
pub(crate) fn caller_of<B>(req: &Request<B>, state: &AppState) -> Result<UserId, Response<FullBody>> {
    resolve_caller(req.headers(), &state.jwt, state.args.dev_mode).map_err(fault_response)
}

/// Collect and decode a JSON request body
pub(crate) async fn read_json<T, B>(body: B) -> Result<T, Response<FullBody>>
where
    T: DeserializeOwned,
    B: Body,
    B::Error: Display,
{
    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                &format!("Invalid body: {}", e),
            ))
        }
    };

    serde_json::from_slice(&bytes).map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, &format!("Invalid JSON: {}", e))
    })
}
