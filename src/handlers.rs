use crate::challenge::{parse_steps, steps_from_signed};
use crate::errors::AppError;
use crate::models::{ChallengeResponse, ProfileRequest, ProfileView, ShareResponse, StepsForm, StepsRequest};
use crate::share::build_share;
use crate::state::AppState;
use crate::stats::{build_catalog, build_challenge};
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let challenge = state.challenge.lock().await;
    Html(render_index(&challenge))
}

pub async fn get_challenge(State(state): State<AppState>) -> Json<ChallengeResponse> {
    let challenge = state.challenge.lock().await;
    Json(build_challenge(&challenge))
}

pub async fn get_profiles() -> Json<Vec<ProfileView>> {
    Json(build_catalog())
}

pub async fn get_share(State(state): State<AppState>) -> Json<ShareResponse> {
    let challenge = state.challenge.lock().await;
    Json(build_share(&challenge))
}

pub async fn set_steps(
    State(state): State<AppState>,
    Json(payload): Json<StepsRequest>,
) -> Result<Json<ChallengeResponse>, AppError> {
    let steps = steps_from_signed(payload.steps)?;
    let mut challenge = state.challenge.lock().await;
    challenge.set_current_steps(steps);
    Ok(Json(build_challenge(&challenge)))
}

pub async fn submit(State(state): State<AppState>) -> Result<Json<ChallengeResponse>, AppError> {
    let mut challenge = state.challenge.lock().await;
    let day = challenge.current_day();
    let record = challenge.submit_current_day().inspect_err(|err| {
        warn!(day, "submit refused: {err}");
    })?;
    info!(day, steps = ?record.steps_logged(), outcome = ?record.outcome(), "day submitted");
    Ok(Json(build_challenge(&challenge)))
}

pub async fn skip(State(state): State<AppState>) -> Json<ChallengeResponse> {
    let mut challenge = state.challenge.lock().await;
    let day = challenge.current_day();
    challenge.skip_current_day();
    info!(day, "day skipped");
    Json(build_challenge(&challenge))
}

pub async fn edit_day(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(payload): Json<StepsRequest>,
) -> Result<Json<ChallengeResponse>, AppError> {
    let steps = steps_from_signed(payload.steps)?;
    let mut challenge = state.challenge.lock().await;
    let record = challenge.edit_day(index, steps).inspect_err(|err| {
        warn!(index, "edit refused: {err}");
    })?;
    info!(day = index + 1, steps, outcome = ?record.outcome(), "day edited");
    Ok(Json(build_challenge(&challenge)))
}

pub async fn set_profile(
    State(state): State<AppState>,
    Json(payload): Json<ProfileRequest>,
) -> Result<Json<ChallengeResponse>, AppError> {
    let mut challenge = state.challenge.lock().await;
    let profile = challenge.set_device_profile(&payload.name).inspect_err(|err| {
        warn!("profile change refused: {err}");
    })?;
    info!(%profile, "device profile changed");
    Ok(Json(build_challenge(&challenge)))
}

pub async fn reset(State(state): State<AppState>) -> Json<ChallengeResponse> {
    let mut challenge = state.challenge.lock().await;
    challenge.reset();
    info!(profile = %challenge.device_profile(), "challenge reset");
    Json(build_challenge(&challenge))
}

pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<StepsForm>,
) -> Result<Redirect, AppError> {
    let steps = parse_steps(&form.steps)?;
    let mut challenge = state.challenge.lock().await;
    let day = challenge.current_day();
    challenge.set_current_steps(steps);
    challenge.submit_current_day()?;
    info!(day, steps, "day submitted");
    Ok(Redirect::to("/"))
}

pub async fn skip_form(State(state): State<AppState>) -> Redirect {
    let mut challenge = state.challenge.lock().await;
    let day = challenge.current_day();
    challenge.skip_current_day();
    info!(day, "day skipped");
    Redirect::to("/")
}
