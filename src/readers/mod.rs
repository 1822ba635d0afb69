pub mod delimited;
pub mod types;
pub mod utils;

use serde::Deserialize;
use std::path::Path;

pub use delimited::DelimitedReader;
pub use types::{DataReader, FileError, FileType, ReadError, TimeSeries};
pub use utils::reader_from_filetype;

/// How timestamps and invalid readings are recognized in sensor files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    pub datetime_column: String,
    pub datetime_format: String,
    pub missing_values: Vec<f64>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            datetime_column: "datetime".to_string(),
            datetime_format: "%Y-%m-%d %H:%M".to_string(),
            missing_values: vec![-9999.0, -99999.0],
        }
    }
}

pub fn create_reader<P: AsRef<Path>>(
    file_name: P,
    options: ReaderOptions,
) -> Result<Box<dyn DataReader + Send + Sync>, FileError> {
    let file_name = file_name.as_ref();
    match reader_from_filetype(file_name) {
        Ok(file_type) => Ok(Box::new(DelimitedReader {
            file_name: file_name.to_path_buf(),
            delimiter: file_type.delimiter(),
            options,
        })),
        Err(e) => Err(e),
    }
}
