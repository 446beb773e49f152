//! Liveness probe
//!
//! /health and /healthz return 200 whenever the process is serving.

use hyper::{Response, StatusCode};
use serde::Serialize;

use super::{json_response, FullBody};
use crate::config::StoreBackend;
use crate::server::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub node_id: String,
    pub store: &'static str,
    pub mode: &'static str,
}

pub fn health_check(state: &AppState) -> Response<FullBody> {
    let args = &state.args;
    let body = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        node_id: args.node_id.to_string(),
        store: match args.store {
            StoreBackend::Memory => "memory",
            StoreBackend::Mongo => "mongo",
        },
        mode: if args.dev_mode { "development" } else { "production" },
    };
    json_response(StatusCode::OK, &body)
}
