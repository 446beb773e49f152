//! HTTP server implementation
//!
//! Uses hyper http1 with TokioIo for async handling.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::fmt::Display;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::auth::JwtValidator;
use crate::config::Args;
use crate::routes::{self, FullBody};
use crate::services::GearService;
use crate::store::CampsiteStore;
use crate::types::TrailheadError;

type BoxBody = http_body_util::combinators::BoxBody<Bytes, hyper::Error>;

/// Shared application state
pub struct AppState {
    pub args: Args,
    /// Gear and volunteer operations
    pub service: GearService,
    /// Verifies caller tokens
    pub jwt: JwtValidator,
}

impl AppState {
    /// Build state over an already-connected campsite store
    pub fn new(args: Args, store: Arc<dyn CampsiteStore>) -> Result<Self, TrailheadError> {
        let jwt = match &args.jwt_secret {
            Some(secret) => JwtValidator::new(secret.clone(), args.jwt_expiry_seconds)?,
            None if args.dev_mode => JwtValidator::new_dev(),
            None => {
                return Err(TrailheadError::Config(
                    "JWT_SECRET is required in production mode".into(),
                ))
            }
        };

        let service = GearService::new(store, args.gear_service_config());

        Ok(Self { args, service, jwt })
    }
}

/// Bind `args.listen` and serve until the process exits
pub async fn run(state: Arc<AppState>) -> Result<(), TrailheadError> {
    let listener = TcpListener::bind(state.args.listen).await?;
    serve(listener, state).await
}

/// Accept loop over an existing listener
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<(), TrailheadError> {
    info!(
        "Trailhead listening on {} as node {}",
        listener.local_addr()?,
        state.args.node_id
    );

    if state.args.dev_mode {
        warn!("Development mode enabled - X-User-Id accepted as caller identity");
    }

    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);

                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move { handle_request(state, addr, req).await }
                    });

                    if let Err(err) = http1::Builder::new()
                        .preserve_header_case(true)
                        .title_case_headers(true)
                        .serve_connection(io, service)
                        .await
                    {
                        error!("Error serving connection from {}: {:?}", addr, err);
                    }
                });
            }
            Err(e) => {
                error!("Error accepting connection: {:?}", e);
            }
        }
    }
}

async fn handle_request(
    state: Arc<AppState>,
    addr: SocketAddr,
    req: Request<Incoming>,
) -> Result<Response<BoxBody>, hyper::Error> {
    info!("[{}] {} {}", addr, req.method(), req.uri().path());
    Ok(to_boxed(route(&state, req).await))
}

/// Dispatch a request to its handler
pub async fn route<B>(state: &AppState, req: Request<B>) -> Response<FullBody>
where
    B: Body,
    B::Error: Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (method, path.as_str()) {
        (Method::OPTIONS, _) => preflight_response(),

        (Method::GET, "/health") | (Method::GET, "/healthz") => routes::health_check(state),

        (Method::GET, p) if p.starts_with("/api/v1/campsites/") => {
            let id = p.trim_start_matches("/api/v1/campsites/");
            if id.is_empty() || id.contains('/') {
                return not_found_response(&path);
            }
            routes::handle_get_campsite(req, state, id).await
        }

        (Method::POST, "/api/v1/gear") => routes::handle_add_gear(req, state).await,
        (Method::POST, "/api/v1/gear/delete") => routes::handle_delete_gear(req, state).await,
        (Method::POST, "/api/v1/gear/volunteer") => routes::handle_volunteer_gear(req, state).await,
        (Method::POST, "/api/v1/gear/undo-volunteer") => {
            routes::handle_undo_volunteer_gear(req, state).await
        }

        _ => not_found_response(&path),
    }
}

/// Convert a Full<Bytes> body to BoxBody
fn to_boxed(response: Response<Full<Bytes>>) -> Response<BoxBody> {
    response.map(|body| body.map_err(|never| match never {}).boxed())
}

/// CORS preflight response
fn preflight_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Headers", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap()
}

/// Not found response
fn not_found_response(path: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "error": "Not Found",
        "path": path,
    });

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}
