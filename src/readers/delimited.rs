use chrono::NaiveDateTime;
use std::path::PathBuf;

use super::utils::parse_value;
use super::{DataReader, ReadError, ReaderOptions, TimeSeries};

/// Reader for header-first delimited sensor files (one timestamp column, one column per sensor).
pub struct DelimitedReader {
    pub file_name: PathBuf,
    pub delimiter: u8,
    pub options: ReaderOptions,
}

impl DataReader for DelimitedReader {
    fn read_series(&self, column: &str) -> Result<TimeSeries, ReadError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(&self.file_name)?;

        let headers = reader.headers()?.clone();
        let find_column = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ReadError::MissingColumn(name.to_string()))
        };
        let time_idx = find_column(&self.options.datetime_column)?;
        let value_idx = find_column(column)?;

        let mut timestamps = Vec::new();
        let mut values = Vec::new();

        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());

            let raw_time = record.get(time_idx).unwrap_or_default();
            let timestamp = NaiveDateTime::parse_from_str(raw_time, &self.options.datetime_format)
                .map_err(|_| ReadError::Timestamp {
                    line,
                    value: raw_time.to_string(),
                })?;

            timestamps.push(timestamp);
            values.push(
                record
                    .get(value_idx)
                    .and_then(|token| parse_value(token, &self.options.missing_values)),
            );
        }

        let series = TimeSeries {
            name: column.to_string(),
            timestamps,
            values,
        };

        log::info!(
            "Read {} values of '{}' from {} ({} undefined)",
            series.len(),
            column,
            self.file_name.display(),
            series.undefined_count()
        );

        Ok(series)
    }
}
