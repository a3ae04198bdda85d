use crate::challenge::{ChallengeState, GOAL_STEPS};
use crate::models::{ChallengeResponse, DayView, ProfileView, StatsResponse};
use crate::profiles::DeviceProfile;

pub fn build_stats(state: &ChallengeState) -> StatsResponse {
    StatsResponse {
        completed: state.completed_count(),
        missed: state.missed_count(),
        open: state.open_count(),
        incentive_max: state.incentive_max(),
        incentive_progress_percent: state.incentive_progress_percent(),
        incentive_earned: state.incentive_earned(),
        incentive_earned_display: state.incentive_earned_display(),
    }
}

pub fn build_challenge(state: &ChallengeState) -> ChallengeResponse {
    let history = state
        .history()
        .iter()
        .enumerate()
        .map(|(index, record)| DayView {
            day: index + 1,
            steps: record.steps_logged(),
            outcome: record.outcome(),
        })
        .collect();

    ChallengeResponse {
        current_day: state.current_day(),
        current_steps: state.current_steps(),
        goal: GOAL_STEPS,
        progress_percent: state.current_progress_percent(),
        device: state.device_profile(),
        finished: state.is_finished(),
        history,
        stats: build_stats(state),
    }
}

pub fn build_catalog() -> Vec<ProfileView> {
    DeviceProfile::ALL
        .into_iter()
        .map(|profile| ProfileView {
            name: profile,
            max_incentive: profile.max_incentive(),
        })
        .collect()
}
