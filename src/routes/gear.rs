//! Gear routes
//!
//! - POST /api/v1/gear                 - add gear to a category
//! - POST /api/v1/gear/delete          - delete gear and its volunteers
//! - POST /api/v1/gear/volunteer       - commit to bringing gear
//! - POST /api/v1/gear/undo-volunteer  - withdraw a commitment
//!
//! Rejected input comes back as 200 with `{gear: null, errors: [...]}`.
//! Faults use the error's status code.

use hyper::body::Body;
use hyper::{Request, Response, StatusCode};
use std::fmt::Display;

use super::{caller_of, fault_response, json_response, read_json, FullBody};
use crate::server::AppState;
use crate::services::{AddGearInput, DeleteGearInput, UndoVolunteerGearInput, VolunteerGearInput};

/// POST /api/v1/gear
pub async fn handle_add_gear<B>(req: Request<B>, state: &AppState) -> Response<FullBody>
where
    B: Body,
    B::Error: Display,
{
    let caller = match caller_of(&req, state) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let input: AddGearInput = match read_json(req.into_body()).await {
        Ok(i) => i,
        Err(resp) => return resp,
    };

    match state.service.add_gear(input, &caller).await {
        Ok(response) => json_response(StatusCode::OK, &response),
        Err(e) => fault_response(e),
    }
}

/// POST /api/v1/gear/delete
pub async fn handle_delete_gear<B>(req: Request<B>, state: &AppState) -> Response<FullBody>
where
    B: Body,
    B::Error: Display,
{
    let caller = match caller_of(&req, state) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let input: DeleteGearInput = match read_json(req.into_body()).await {
        Ok(i) => i,
        Err(resp) => return resp,
    };

    match state.service.delete_gear(input, &caller).await {
        Ok(view) => json_response(StatusCode::OK, &view),
        Err(e) => fault_response(e),
    }
}

/// POST /api/v1/gear/volunteer
pub async fn handle_volunteer_gear<B>(req: Request<B>, state: &AppState) -> Response<FullBody>
where
    B: Body,
    B::Error: Display,
{
    let caller = match caller_of(&req, state) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let input: VolunteerGearInput = match read_json(req.into_body()).await {
        Ok(i) => i,
        Err(resp) => return resp,
    };

    match state.service.volunteer_gear(input, &caller).await {
        Ok(response) => json_response(StatusCode::OK, &response),
        Err(e) => fault_response(e),
    }
}

/// POST /api/v1/gear/undo-volunteer
pub async fn handle_undo_volunteer_gear<B>(req: Request<B>, state: &AppState) -> Response<FullBody>
where
    B: Body,
    B::Error: Display,
{
    let caller = match caller_of(&req, state) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    let input: UndoVolunteerGearInput = match read_json(req.into_body()).await {
        Ok(i) => i,
        Err(resp) => return resp,
    };

    match state.service.undo_volunteer_gear(input, &caller).await {
        Ok(response) => json_response(StatusCode::OK, &response),
        Err(e) => fault_response(e),
    }
}
