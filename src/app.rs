use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/submit", post(handlers::submit_form))
        .route("/skip", post(handlers::skip_form))
        .route("/api/challenge", get(handlers::get_challenge))
        .route("/api/profiles", get(handlers::get_profiles))
        .route("/api/share", get(handlers::get_share))
        .route("/api/steps", put(handlers::set_steps))
        .route("/api/submit", post(handlers::submit))
        .route("/api/skip", post(handlers::skip))
        .route("/api/days/:index", put(handlers::edit_day))
        .route("/api/profile", put(handlers::set_profile))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
