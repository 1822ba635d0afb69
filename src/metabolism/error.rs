use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    NonPositiveSteps,
    StepsExceedForcing {
        requested: usize,
        available: usize,
    },
    MissingForcing {
        series: &'static str,
        index: usize,
    },
    InvalidInitialState(String),
    InvalidParameter(String),
    UnknownParameter(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::NonPositiveSteps => write!(f, "number of steps must be positive"),
            SimulationError::StepsExceedForcing {
                requested,
                available,
            } => write!(
                f,
                "requested {} steps but forcing only covers {}",
                requested, available
            ),
            SimulationError::MissingForcing { series, index } => {
                write!(f, "undefined {} forcing value at index {}", series, index)
            }
            SimulationError::InvalidInitialState(msg) => {
                write!(f, "Invalid initial state: {}", msg)
            }
            SimulationError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            SimulationError::UnknownParameter(name) => write!(f, "Unknown parameter: {}", name),
        }
    }
}

impl std::error::Error for SimulationError {}
