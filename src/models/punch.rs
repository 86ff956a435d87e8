//! Punch time tokens.
//!
//! A punch token is a raw `HH:MM` wall-clock time on a 24-hour clock,
//! with no date attached. All duration arithmetic in the engine works on
//! integer minutes-of-day derived from these tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A single timeclock punch: a validated `HH:MM` time of day.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::PunchTime;
///
/// let punch: PunchTime = "23:30".parse().unwrap();
/// assert_eq!(punch.minute_of_day(), 23 * 60 + 30);
/// assert_eq!(punch.to_string(), "23:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PunchTime {
    hour: u32,
    minute: u32,
}

impl PunchTime {
    /// Creates a punch time from an hour (0-23) and minute (0-59).
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// The hour component (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// The minute component (0-59).
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl FromStr for PunchTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::PunchTokenInvalid {
            token: s.to_string(),
        };

        let (hour_part, minute_part) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour_part.parse().map_err(|_| invalid())?;
        let minute: u32 = minute_part.parse().map_err(|_| invalid())?;
        PunchTime::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for PunchTime {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PunchTime> for String {
    fn from(punch: PunchTime) -> Self {
        punch.to_string()
    }
}

impl fmt::Display for PunchTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
