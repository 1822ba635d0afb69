use super::types::{FileError, FileType};
use std::path::Path;

pub fn reader_from_filetype(path: &Path) -> Result<FileType, FileError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => Ok(FileType::Csv),
        Some("tsv") | Some("txt") => Ok(FileType::Tsv),
        _ => Err(FileError::UnknownFileType(path.display().to_string())),
    }
}

/// Parses a sensor value, mapping non-numeric tokens, NaN and sentinel values to `None`.
pub fn parse_value(token: &str, missing_values: &[f64]) -> Option<f64> {
    let value = token.trim().parse::<f64>().ok()?;

    if value.is_nan() || missing_values.contains(&value) {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_from_filetype() {
        assert_eq!(
            reader_from_filetype(Path::new("data/do.csv")),
            Ok(FileType::Csv)
        );
        assert_eq!(
            reader_from_filetype(Path::new("data/par.txt")),
            Ok(FileType::Tsv)
        );
        assert!(reader_from_filetype(Path::new("data/sst.tif")).is_err());
        assert!(reader_from_filetype(Path::new("data/noext")).is_err());
    }

    #[test]
    fn test_parse_value() {
        let sentinels = [-9999.0, -99999.0];

        assert_eq!(parse_value(" 12.5 ", &sentinels), Some(12.5));
        assert_eq!(parse_value("0", &sentinels), Some(0.0));
        assert_eq!(parse_value("-9999", &sentinels), None);
        assert_eq!(parse_value("-99999.0", &sentinels), None);
        assert_eq!(parse_value("NA", &sentinels), None);
        assert_eq!(parse_value("NaN", &sentinels), None);
        assert_eq!(parse_value("", &sentinels), None);
    }
}
