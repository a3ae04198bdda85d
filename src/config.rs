use crate::errors::ChallengeError;
use crate::profiles::DeviceProfile;
use std::env;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub device: DeviceProfile,
}

impl Config {
    /// Reads `PORT` and `CHALLENGE_DEVICE`.
    pub fn from_env() -> Result<Self, ChallengeError> {
        Self::from_values(env::var("PORT").ok(), env::var("CHALLENGE_DEVICE").ok())
    }

    fn from_values(port: Option<String>, device: Option<String>) -> Result<Self, ChallengeError> {
        let port = port
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let device = match device {
            Some(name) => name.parse()?,
            None => DeviceProfile::default(),
        };
        Ok(Self { port, device })
    }
}
