use chrono::NaiveDateTime;

use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::date_gen::TimeGrid;
use crate::metabolism::Parameters;
use crate::readers::ReaderOptions;

pub mod error;
pub use error::ConfigError;

pub mod time_step;
pub use time_step::TimeStep;

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct InputFile {
    pub path: PathBuf,
    pub column: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Inputs {
    pub do_obs: InputFile,
    pub temperature: InputFile,
    pub par: InputFile,
}

/// One-parameter sensitivity sweep.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SweepConfig {
    pub parameter: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    start: NaiveDateTime,
    end: NaiveDateTime,
    time_step: TimeStep,
    n_steps: Option<usize>,
    reader: ReaderOptions,
    inputs: Inputs,
    initial_phyto: f64,
    parameters: Parameters,
    output: Option<PathBuf>,
    sweep: Option<SweepConfig>,
}

// This function deserializes a Config object from a deserializer, ensuring the datetimes are valid
// and in order, and that the time step, step count and model parameters can be used for a run.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            start: String,
            end: String,
            time_step_minutes: TimeStep,
            n_steps: Option<usize>,
            #[serde(flatten)]
            reader: ReaderOptions,
            inputs: Inputs,
            initial_phyto: f64,
            #[serde(default)]
            parameters: Parameters,
            output: Option<PathBuf>,
            sweep: Option<SweepConfig>,
        }

        let helper = ConfigHelper::deserialize(deserializer)?;

        let start = NaiveDateTime::parse_from_str(&helper.start, DATETIME_FORMAT)
            .map_err(|e| D::Error::custom(format!("Invalid start format: {}", e)))?;

        let end = NaiveDateTime::parse_from_str(&helper.end, DATETIME_FORMAT)
            .map_err(|e| D::Error::custom(format!("Invalid end format: {}", e)))?;

        if start > end {
            return Err(D::Error::custom(ConfigError::DateOrder));
        }

        if helper.n_steps == Some(0) {
            return Err(D::Error::custom(ConfigError::Steps));
        }

        if !helper.initial_phyto.is_finite() {
            return Err(D::Error::custom(ConfigError::InitialPhyto(
                helper.initial_phyto,
            )));
        }

        // The integration step always follows the sampling interval.
        let parameters = helper
            .parameters
            .with_time_step(helper.time_step_minutes.fraction_of_day());
        parameters
            .validate()
            .map_err(|e| D::Error::custom(ConfigError::Parameters(e)))?;

        if let Some(sweep) = &helper.sweep {
            for &value in &sweep.values {
                parameters
                    .with_value(&sweep.parameter, value)
                    .map_err(|e| D::Error::custom(ConfigError::Parameters(e)))?;
            }
        }

        Ok(Config {
            start,
            end,
            time_step: helper.time_step_minutes,
            n_steps: helper.n_steps,
            reader: helper.reader,
            inputs: helper.inputs,
            initial_phyto: helper.initial_phyto,
            parameters,
            output: helper.output,
            sweep: helper.sweep,
        })
    }
}

impl Config {
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        time_step: TimeStep,
        inputs: Inputs,
        initial_phyto: f64,
    ) -> Self {
        Self {
            start,
            end,
            time_step,
            n_steps: None,
            reader: ReaderOptions::default(),
            inputs,
            initial_phyto,
            parameters: Parameters::default().with_time_step(time_step.fraction_of_day()),
            output: None,
            sweep: None,
        }
    }

    /// Reads a JSON configuration. Relative paths inside it are resolved against the directory
    /// holding the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut config: Config = serde_json::from_reader(reader).map_err(ConfigError::from)?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }

        log::info!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };

        resolve(&mut self.inputs.do_obs.path);
        resolve(&mut self.inputs.temperature.path);
        resolve(&mut self.inputs.par.path);
        if let Some(output) = self.output.as_mut() {
            resolve(output);
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn time_step(&self) -> TimeStep {
        self.time_step
    }

    pub fn n_steps(&self) -> Option<usize> {
        self.n_steps
    }

    pub fn reader_options(&self) -> &ReaderOptions {
        &self.reader
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    pub fn initial_phyto(&self) -> f64 {
        self.initial_phyto
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn sweep(&self) -> Option<&SweepConfig> {
        self.sweep.as_ref()
    }

    pub fn with_n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters.with_time_step(self.time_step.fraction_of_day());
        self
    }

    pub fn with_output<P: Into<PathBuf>>(mut self, output: P) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn time_grid(&self) -> TimeGrid {
        TimeGrid::new(self.start, self.end, self.time_step)
    }
}
