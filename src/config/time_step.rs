use chrono::Duration;
use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::metabolism::constants::MINUTES_PER_DAY;

/// Fixed sampling interval of the sensor series, in whole minutes dividing a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStep {
    minutes: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TimeStepParseError(pub u32);

impl TimeStep {
    pub fn new(minutes: u32) -> Result<Self, TimeStepParseError> {
        if minutes == 0 || MINUTES_PER_DAY % minutes != 0 {
            return Err(TimeStepParseError(minutes));
        }

        Ok(Self { minutes })
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn duration(&self) -> Duration {
        Duration::minutes(self.minutes as i64)
    }

    /// Integration time step as a fraction of a day.
    pub fn fraction_of_day(&self) -> f64 {
        self.minutes as f64 / MINUTES_PER_DAY as f64
    }
}

impl<'de> Deserialize<'de> for TimeStep {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let minutes = u32::deserialize(deserializer)?;
        TimeStep::new(minutes).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for TimeStepParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid time step of {} minutes, it must be a positive divisor of 1440",
            self.0
        )
    }
}

impl std::error::Error for TimeStepParseError {}
