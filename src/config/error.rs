use crate::metabolism::SimulationError;

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    DateOrder,
    Io(std::io::Error),
    Json(serde_json::Error),
    Steps,
    InitialPhyto(f64),
    Parameters(SimulationError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DateOrder => write!(f, "end cannot be earlier than start"),
            ConfigError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse JSON: {}", e),
            ConfigError::Steps => write!(f, "n_steps should be greater than 0"),
            ConfigError::InitialPhyto(v) => {
                write!(f, "initial_phyto should be a finite number, got {}", v)
            }
            ConfigError::Parameters(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> ConfigError {
        ConfigError::Json(err)
    }
}
