//! Game-related HTTP routes: the thin adapter over [`GameFlow`].
//!
//! The externally driven seat is always P1; the automated opponent answers
//! inline before a request returns, so `GET /api/state` is a pure read.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Action, Seat};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::game_flow::{GameFlow, DEFAULT_TARGET_SCORE};
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct StartRequest {
    pub target_score: Option<u8>,
    /// Fixed RNG seed for reproducible matches (testing aid).
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct StartResponse {
    status: String,
    target_score: u8,
}

/// POST /api/start
///
/// Create a fresh match, replacing any previous one.
async fn start_game(
    body: Option<web::Json<StartRequest>>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.map(|b| b.into_inner()).unwrap_or_default();
    let target_score = req.target_score.unwrap_or(DEFAULT_TARGET_SCORE);
    if target_score == 0 {
        return Err(AppError::validation(
            ErrorCode::ValidationError,
            "target_score must be at least 1",
        ));
    }

    let flow = GameFlow::new(target_score, req.seed)?;
    *app_state.game.lock() = Some(flow);
    info!(target_score, "new match started");

    Ok(HttpResponse::Ok().json(StartResponse {
        status: "started".to_string(),
        target_score,
    }))
}

/// GET /api/state
///
/// The externally driven seat's snapshot. Read-only.
async fn get_state(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let guard = app_state.game.lock();
    let flow = guard
        .as_ref()
        .ok_or_else(|| AppError::bad_request(ErrorCode::NoActiveMatch, "No game active"))?;
    Ok(HttpResponse::Ok().json(flow.snapshot(Seat::P1)))
}

#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    pub action: String,
}

#[derive(Debug, Serialize)]
struct ActionResponse {
    status: String,
    message: String,
    game_over: bool,
}

/// POST /api/action
///
/// Apply one action for the externally driven seat. Rule violations come
/// back as 400 with the engine's message; state is untouched in that case.
async fn post_action(
    body: web::Json<ActionRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let action: Action = body.action.parse()?;

    let mut guard = app_state.game.lock();
    let flow = guard
        .as_mut()
        .ok_or_else(|| AppError::bad_request(ErrorCode::NoActiveMatch, "No game active"))?;
    let outcome = flow.apply_action(Seat::P1, action)?;

    Ok(HttpResponse::Ok().json(ActionResponse {
        status: "success".to_string(),
        message: outcome.message,
        game_over: outcome.game_over,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/start").route(web::post().to(start_game)));
    cfg.service(web::resource("/state").route(web::get().to(get_state)));
    cfg.service(web::resource("/action").route(web::post().to(post_action)));
}
