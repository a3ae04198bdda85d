use crate::challenge::{CHALLENGE_DAYS, ChallengeState};
use crate::models::ShareResponse;

const SHARE_ENDPOINT: &str = "https://api.whatsapp.com/send";

pub fn share_message(state: &ChallengeState) -> String {
    format!(
        "I'm on day {} of the {CHALLENGE_DAYS}-day challenge with {} steps! ({})",
        state.current_day(),
        state.current_steps(),
        state.device_profile()
    )
}

pub fn share_url(message: &str) -> String {
    format!("{SHARE_ENDPOINT}?text={}", urlencoding::encode(message))
}

pub fn build_share(state: &ChallengeState) -> ShareResponse {
    let message = share_message(state);
    let url = share_url(&message);
    ShareResponse { message, url }
}
