//! Progress state machine for the 21-day step challenge.
//!
//! A [`ChallengeState`] owns the per-day history and the day pointer. Days are
//! committed either as the active day (which advances the pointer) or by
//! explicit index (which never does). Every derived figure is recomputed from
//! the history on demand.

use crate::errors::ChallengeError;
use crate::profiles::DeviceProfile;
use serde::Serialize;

/// Daily step target; a day is met when at least this many steps are logged.
pub const GOAL_STEPS: u64 = 7000;

/// Length of the challenge in days.
pub const CHALLENGE_DAYS: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[default]
    Unset,
    Met,
    Missed,
}

/// One day of the challenge. `outcome` is `Unset` exactly when no steps were logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DayRecord {
    steps_logged: Option<u64>,
    outcome: Outcome,
}

impl DayRecord {
    pub fn recorded(steps: u64) -> Self {
        let outcome = if steps >= GOAL_STEPS {
            Outcome::Met
        } else {
            Outcome::Missed
        };
        Self {
            steps_logged: Some(steps),
            outcome,
        }
    }

    pub fn steps_logged(&self) -> Option<u64> {
        self.steps_logged
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_unset(&self) -> bool {
        self.outcome == Outcome::Unset
    }
}

/// Which day a [`ChallengeState::record_day`] call writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayTarget {
    /// The active day; committing it moves the day pointer forward.
    Current,
    /// A 0-based history index; the day pointer is left alone.
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallengeState {
    history: [DayRecord; CHALLENGE_DAYS],
    current_day: usize,
    current_steps: u64,
    device_profile: DeviceProfile,
}

impl Default for ChallengeState {
    fn default() -> Self {
        Self::new(DeviceProfile::default())
    }
}

impl ChallengeState {
    pub fn new(device_profile: DeviceProfile) -> Self {
        Self {
            history: [DayRecord::default(); CHALLENGE_DAYS],
            current_day: 1,
            current_steps: 0,
            device_profile,
        }
    }

    pub fn history(&self) -> &[DayRecord] {
        &self.history
    }

    pub fn day(&self, index: usize) -> Result<&DayRecord, ChallengeError> {
        self.history
            .get(index)
            .ok_or(ChallengeError::InvalidIndex(index))
    }

    /// 1-based day the user is working on.
    pub fn current_day(&self) -> usize {
        self.current_day
    }

    pub fn current_steps(&self) -> u64 {
        self.current_steps
    }

    pub fn device_profile(&self) -> DeviceProfile {
        self.device_profile
    }

    pub fn set_current_steps(&mut self, steps: u64) {
        self.current_steps = steps;
    }

    /// Overwrites one day with `steps`. Only a `DayTarget::Current` commit
    /// advances the day pointer, and never past the last day.
    pub fn record_day(&mut self, steps: u64, target: DayTarget) -> Result<DayRecord, ChallengeError> {
        match target {
            DayTarget::Current => Ok(self.commit_current(steps)),
            DayTarget::Index(index) => {
                let slot = self
                    .history
                    .get_mut(index)
                    .ok_or(ChallengeError::InvalidIndex(index))?;
                *slot = DayRecord::recorded(steps);
                Ok(*slot)
            }
        }
    }

    /// Commits the in-progress count for the active day. Refused without any
    /// change while the count is below the goal.
    pub fn submit_current_day(&mut self) -> Result<DayRecord, ChallengeError> {
        if self.current_steps < GOAL_STEPS {
            return Err(ChallengeError::GoalNotReached {
                steps: self.current_steps,
                goal: GOAL_STEPS,
            });
        }
        Ok(self.commit_current(self.current_steps))
    }

    /// Commits the active day as missed with zero steps, discarding any
    /// partially entered count.
    pub fn skip_current_day(&mut self) -> DayRecord {
        self.commit_current(0)
    }

    pub fn edit_day(&mut self, index: usize, steps: u64) -> Result<DayRecord, ChallengeError> {
        self.record_day(steps, DayTarget::Index(index))
    }

    /// Value shown when the edit dialog for `index` opens.
    pub fn edit_prefill(&self, index: usize) -> Result<u64, ChallengeError> {
        Ok(self.day(index)?.steps_logged().unwrap_or(0))
    }

    pub fn set_device_profile(&mut self, name: &str) -> Result<DeviceProfile, ChallengeError> {
        let profile = name.parse::<DeviceProfile>()?;
        self.device_profile = profile;
        Ok(profile)
    }

    /// Starts over with an empty history, keeping the selected device.
    pub fn reset(&mut self) {
        *self = Self::new(self.device_profile);
    }

    /// True once the last day has been committed as the active day.
    pub fn is_finished(&self) -> bool {
        self.current_day == CHALLENGE_DAYS && !self.history[CHALLENGE_DAYS - 1].is_unset()
    }

    pub fn completed_count(&self) -> usize {
        self.count(Outcome::Met)
    }

    pub fn missed_count(&self) -> usize {
        self.count(Outcome::Missed)
    }

    pub fn open_count(&self) -> usize {
        CHALLENGE_DAYS - self.completed_count() - self.missed_count()
    }

    pub fn current_progress_percent(&self) -> f64 {
        progress_percent(self.current_steps)
    }

    pub fn incentive_max(&self) -> f64 {
        self.device_profile.max_incentive()
    }

    pub fn incentive_progress_percent(&self) -> f64 {
        self.completed_count() as f64 / CHALLENGE_DAYS as f64 * 100.0
    }

    /// Pro-rata cashback over met days. Missed and open days contribute nothing.
    pub fn incentive_earned(&self) -> f64 {
        self.completed_count() as f64 / CHALLENGE_DAYS as f64 * self.incentive_max()
    }

    pub fn incentive_earned_display(&self) -> String {
        format!("{:.2}", self.incentive_earned())
    }

    fn commit_current(&mut self, steps: u64) -> DayRecord {
        let record = DayRecord::recorded(steps);
        self.history[self.current_day - 1] = record;
        if self.current_day < CHALLENGE_DAYS {
            self.current_day += 1;
            self.current_steps = 0;
        }
        record
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.history
            .iter()
            .filter(|record| record.outcome == outcome)
            .count()
    }
}

/// Share of the daily goal reached by `steps`, clamped to 100.
pub fn progress_percent(steps: u64) -> f64 {
    (steps as f64 / GOAL_STEPS as f64 * 100.0).min(100.0)
}

/// Converts user text into a step count. Negative or non-numeric input is rejected.
pub fn parse_steps(raw: &str) -> Result<u64, ChallengeError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ChallengeError::InvalidStepsValue(raw.to_string()))
}

pub fn steps_from_signed(value: i64) -> Result<u64, ChallengeError> {
    u64::try_from(value).map_err(|_| ChallengeError::InvalidStepsValue(value.to_string()))
}
