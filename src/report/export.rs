use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{ReportError, ReportTable};

impl ReportTable {
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        Ok(())
    }

    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(writer, &self.rows)?;

        Ok(())
    }

    /// Writes the table to `path`, picking the format from its extension.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str());

        if !matches!(extension, Some("csv") | Some("json")) {
            return Err(ReportError::UnknownFormat(path.display().to_string()));
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(File::create(path)?);
        match extension {
            Some("json") => self.write_json(writer)?,
            _ => self.write_csv(writer)?,
        }

        log::info!("Saved {} rows to {}", self.len(), path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::report::ReportError;
    use crate::report::tests::sample_table;
    use tempfile::tempdir;

    #[test]
    fn test_write_csv() {
        let table = sample_table();
        let mut buffer = Vec::new();

        table.write_csv(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "datetime,do_obs,do_model,phyto,do_sat,atm_flux,npp,r_doc,r_phyto,r_total,settling"
        );
        assert_eq!(lines[1], "2010-06-01 00:00,8.5,8.5,0.2,,,,,,,");
        assert!(lines[2].starts_with("2010-06-01 00:30,,8.6,"));
    }

    #[test]
    fn test_write_json() {
        let table = sample_table();
        let mut buffer = Vec::new();

        table.write_json(&mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["datetime"], "2010-06-01 00:00");
        assert!(rows[0]["npp"].is_null());
        assert_eq!(rows[1]["npp"], 0.0);
    }

    #[test]
    fn test_export_by_extension() {
        let dir = tempdir().unwrap();
        let table = sample_table();

        let csv_path = dir.path().join("out").join("metab.csv");
        table.export(&csv_path).unwrap();
        assert!(csv_path.exists());

        let json_path = dir.path().join("metab.json");
        table.export(&json_path).unwrap();
        assert!(json_path.exists());

        assert!(matches!(
            table.export(dir.path().join("metab.xlsx")),
            Err(ReportError::UnknownFormat(_))
        ));
    }
}
