//! GET /api/v1/campsites/{id} - campsite with gear, as seen by the caller

use hyper::{Request, Response, StatusCode};

use super::{caller_of, fault_response, json_response, FullBody};
use crate::server::AppState;
use crate::types::CampsiteId;

pub async fn handle_get_campsite<B>(
    req: Request<B>,
    state: &AppState,
    campsite_id: &str,
) -> Response<FullBody> {
    let caller = match caller_of(&req, state) {
        Ok(c) => c,
        Err(resp) => return resp,
    };

    match state
        .service
        .get_campsite(&CampsiteId::new(campsite_id), &caller)
        .await
    {
        Ok(view) => json_response(StatusCode::OK, &view),
        Err(e) => fault_response(e),
    }
}
