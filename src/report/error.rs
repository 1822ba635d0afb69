use std::fmt;

#[derive(Debug)]
pub enum ReportError {
    LengthMismatch { rows: usize, timestamps: usize },
    UnknownFormat(String),
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::LengthMismatch { rows, timestamps } => write!(
                f,
                "cannot label {} rows with {} timestamps",
                rows, timestamps
            ),
            ReportError::UnknownFormat(path) => {
                write!(f, "Unsupported output format (expected .csv or .json): {}", path)
            }
            ReportError::Io(e) => write!(f, "I/O error: {}", e),
            ReportError::Csv(e) => write!(f, "Failed to write CSV: {}", e),
            ReportError::Json(e) => write!(f, "Failed to write JSON: {}", e),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> ReportError {
        ReportError::Io(err)
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> ReportError {
        ReportError::Csv(err)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> ReportError {
        ReportError::Json(err)
    }
}
