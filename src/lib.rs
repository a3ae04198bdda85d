pub mod app;
pub mod challenge;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod profiles;
pub mod share;
pub mod state;
pub mod stats;
pub mod ui;

pub use app::router;
pub use challenge::ChallengeState;
pub use config::Config;
pub use state::AppState;
