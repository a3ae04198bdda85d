use crate::challenge::ChallengeState;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The one session served by this process. The whole challenge sits behind a
/// single lock; handlers hold it for the full read-modify-render cycle.
#[derive(Clone)]
pub struct AppState {
    pub challenge: Arc<Mutex<ChallengeState>>,
}

impl AppState {
    pub fn new(challenge: ChallengeState) -> Self {
        Self {
            challenge: Arc::new(Mutex::new(challenge)),
        }
    }
}
