use crate::challenge::Outcome;
use crate::profiles::DeviceProfile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct StepsRequest {
    pub steps: i64,
}

#[derive(Debug, Deserialize)]
pub struct StepsForm {
    pub steps: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct DayView {
    pub day: usize,
    pub steps: Option<u64>,
    pub outcome: Outcome,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub completed: usize,
    pub missed: usize,
    pub open: usize,
    pub incentive_max: f64,
    pub incentive_progress_percent: f64,
    pub incentive_earned: f64,
    pub incentive_earned_display: String,
}

#[derive(Debug, Serialize)]
pub struct ChallengeResponse {
    pub current_day: usize,
    pub current_steps: u64,
    pub goal: u64,
    pub progress_percent: f64,
    pub device: DeviceProfile,
    pub finished: bool,
    pub history: Vec<DayView>,
    pub stats: StatsResponse,
}

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub name: DeviceProfile,
    pub max_incentive: f64,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub message: String,
    pub url: String,
}
