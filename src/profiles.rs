use crate::errors::ChallengeError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Device a participant bought; selects the cashback cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeviceProfile {
    #[default]
    #[serde(rename = "RunningPad Pro")]
    RunningPadPro,
    #[serde(rename = "WALKR Pro")]
    WalkrPro,
}

impl DeviceProfile {
    /// Catalog order, as shown in the device picker.
    pub const ALL: [DeviceProfile; 2] = [DeviceProfile::RunningPadPro, DeviceProfile::WalkrPro];

    pub fn name(self) -> &'static str {
        match self {
            DeviceProfile::RunningPadPro => "RunningPad Pro",
            DeviceProfile::WalkrPro => "WALKR Pro",
        }
    }

    /// Maximum cashback in euros, paid out when all 21 days are met.
    pub fn max_incentive(self) -> f64 {
        match self {
            DeviceProfile::RunningPadPro => 125.0,
            DeviceProfile::WalkrPro => 84.0,
        }
    }
}

impl fmt::Display for DeviceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeviceProfile {
    type Err = ChallengeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let name = value.trim();
        Self::ALL
            .into_iter()
            .find(|profile| profile.name() == name)
            .ok_or_else(|| ChallengeError::UnknownProfile(name.to_string()))
    }
}
