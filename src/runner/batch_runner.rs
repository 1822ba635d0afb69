use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::runner::processor::sweep_output_path;
use crate::runner::MetabolismProcessor;

/// Result of running one scenario configuration.
#[derive(Debug)]
pub struct BatchOutcome {
    pub config_path: PathBuf,
    pub result: Result<Vec<PathBuf>, String>,
}

#[derive(Debug)]
pub struct BatchRunner {
    configs: Vec<PathBuf>,
}

impl BatchRunner {
    /// Collects the scenario configurations matching a glob pattern, e.g. `scenarios/*.json`.
    pub fn new(pattern: &str) -> Result<Self, glob::PatternError> {
        let mut configs: Vec<PathBuf> = glob::glob(pattern)?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    log::warn!("Skipping unreadable match of {}: {}", pattern, e);
                    None
                }
            })
            .collect();
        configs.sort();

        log::info!("Found {} scenario files matching {}", configs.len(), pattern);

        Ok(BatchRunner { configs })
    }

    pub fn configs(&self) -> &[PathBuf] {
        &self.configs
    }

    /// Runs every scenario in parallel and saves the tables to the configured outputs.
    pub fn process(&self) -> Vec<BatchOutcome> {
        self.configs
            .par_iter()
            .map(|path| BatchOutcome {
                config_path: path.clone(),
                result: run_scenario(path).map_err(|e| e.to_string()),
            })
            .collect()
    }
}

/// Runs a single configuration file, returning the written output files.
pub fn run_scenario(path: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let config = Config::from_file(path)?;
    let processor = MetabolismProcessor::new(config)?;
    let output = processor
        .config()
        .output()
        .map(|p| p.to_path_buf())
        .ok_or("Output path not configured")?;

    let mut written = Vec::new();

    if processor.config().sweep().is_some() {
        for run in processor.process_sweep()? {
            let file = sweep_output_path(&output, &run.parameter, run.value);
            match run.table {
                Ok(table) => {
                    table.export(&file)?;
                    written.push(file);
                }
                Err(e) => log::warn!("{} = {} failed: {}", run.parameter, run.value, e),
            }
        }
    } else {
        processor.process()?.export(&output)?;
        written.push(output);
    }

    Ok(written)
}
