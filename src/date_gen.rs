use crate::config::{Config, TimeStep};
use chrono::NaiveDateTime;

/// Fixed-interval timestamps from `start` to `end`, both included.
#[derive(Debug, Clone)]
pub struct TimeGrid {
    current: NaiveDateTime,
    end: NaiveDateTime,
    time_step: TimeStep,
}

impl TimeGrid {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, time_step: TimeStep) -> Self {
        Self {
            current: start,
            end,
            time_step,
        }
    }
}

impl Iterator for TimeGrid {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current <= self.end {
            let current = self.current;
            self.current = self.current.checked_add_signed(self.time_step.duration())?;
            Some(current)
        } else {
            None
        }
    }
}

pub struct DateTimeGenerator {
    grid: TimeGrid,
}

impl DateTimeGenerator {
    pub fn new(config: &Config) -> Self {
        Self {
            grid: config.time_grid(),
        }
    }

    pub fn generate_datetime_series(&self) -> Vec<NaiveDateTime> {
        self.grid.clone().collect()
    }
}
