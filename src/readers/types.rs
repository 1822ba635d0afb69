use chrono::NaiveDateTime;
use std::fmt;

pub trait DataReader {
    fn read_series(&self, column: &str) -> Result<TimeSeries, ReadError>;
}

#[derive(Debug)]
pub enum ReadError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn(String),
    Timestamp { line: u64, value: String },
}

#[derive(Debug, PartialEq, Eq)]
pub enum FileError {
    UnknownFileType(String),
}

/// A sensor series with undefined values kept as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub name: String,
    pub timestamps: Vec<NaiveDateTime>,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Csv,
    Tsv,
}

impl FileType {
    pub fn delimiter(&self) -> u8 {
        match self {
            FileType::Csv => b',',
            FileType::Tsv => b'\t',
        }
    }
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn undefined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }
}

impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let defined = self.values.iter().flatten();

        let min_value = defined.clone().copied().fold(f64::NAN, f64::min);
        let max_value = defined.copied().fold(f64::NAN, f64::max);

        write!(
            f,
            "Series: {}\nLength: {}\nUndefined: {}\nMin value: {}\nMax value: {}",
            self.name,
            self.len(),
            self.undefined_count(),
            min_value,
            max_value,
        )
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(e) => write!(f, "I/O error: {}", e),
            ReadError::Csv(e) => write!(f, "Failed to parse delimited file: {}", e),
            ReadError::MissingColumn(name) => write!(f, "Column not found: {}", name),
            ReadError::Timestamp { line, value } => {
                write!(f, "Invalid timestamp '{}' on line {}", value, line)
            }
        }
    }
}

impl std::error::Error for ReadError {}

impl From<std::io::Error> for ReadError {
    fn from(err: std::io::Error) -> ReadError {
        ReadError::Io(err)
    }
}

impl From<csv::Error> for ReadError {
    fn from(err: csv::Error) -> ReadError {
        ReadError::Csv(err)
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::UnknownFileType(path) => {
                write!(f, "Unsupported file type (expected .csv, .tsv or .txt): {}", path)
            }
        }
    }
}

impl std::error::Error for FileError {}
