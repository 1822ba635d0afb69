use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForcingError {
    UndefinedFirstValue(&'static str),
    LengthMismatch { temperature: usize, par: usize },
}

impl fmt::Display for ForcingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForcingError::UndefinedFirstValue(series) => write!(
                f,
                "first {} value is undefined, there is no earlier value to carry forward",
                series
            ),
            ForcingError::LengthMismatch { temperature, par } => write!(
                f,
                "forcing series lengths differ: temperature has {} values, par has {}",
                temperature, par
            ),
        }
    }
}

impl std::error::Error for ForcingError {}
