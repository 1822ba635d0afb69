use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::config::{Config, InputFile};
use crate::date_gen::DateTimeGenerator;
use crate::forcing::{self, Forcing};
use crate::metabolism::sweep::{run_sweep, vary_parameter};
use crate::metabolism::{SimulationError, Simulator, State};
use crate::readers::{self, TimeSeries};
use crate::report::ReportTable;

pub const DO_OBS: &str = "do_obs";

/// Loads the sensor series of one configuration and turns them into model runs.
#[derive(Debug)]
pub struct MetabolismProcessor {
    config: Config,
    series: HashMap<&'static str, TimeSeries>,
    grid: Vec<NaiveDateTime>,
}

/// Outcome of one sweep member.
#[derive(Debug)]
pub struct SweepRun {
    pub parameter: String,
    pub value: f64,
    pub table: Result<ReportTable, SimulationError>,
}

impl MetabolismProcessor {
    fn read_input(
        config: &Config,
        input: &InputFile,
    ) -> Result<TimeSeries, Box<dyn std::error::Error>> {
        let reader = readers::create_reader(&input.path, config.reader_options().clone())?;
        let series = reader.read_series(&input.column)?;
        log::debug!("{}", series);

        Ok(series)
    }

    pub fn new(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        let inputs = config.inputs();
        let input_files = [
            (DO_OBS, &inputs.do_obs),
            (forcing::TEMPERATURE, &inputs.temperature),
            (forcing::PAR, &inputs.par),
        ];

        let mut series = HashMap::new();
        for (name, input) in input_files {
            series.insert(name, Self::read_input(&config, input)?);
        }

        let grid = DateTimeGenerator::new(&config).generate_datetime_series();
        log::info!(
            "Time grid: {} steps of {} minutes from {}",
            grid.len(),
            config.time_step().minutes(),
            config.start()
        );

        Ok(Self {
            config,
            series,
            grid,
        })
    }

    fn aligned(&self, name: &str) -> Vec<Option<f64>> {
        match self.series.get(name) {
            Some(series) => forcing::align_to_grid(series, &self.grid),
            None => vec![None; self.grid.len()],
        }
    }

    /// Temperature and PAR on the time grid, gaps filled.
    pub fn forcing(&self) -> Result<Forcing, Box<dyn std::error::Error>> {
        let mut forcing = Forcing::new(
            self.aligned(forcing::TEMPERATURE),
            self.aligned(forcing::PAR),
        )?;
        let filled = forcing.fill_gaps()?;
        if filled > 0 {
            log::warn!("Filled {} forcing gaps with the previous value", filled);
        }

        Ok(forcing)
    }

    pub fn observed_do(&self) -> Vec<Option<f64>> {
        self.aligned(DO_OBS)
    }

    /// DO from the first observation on the grid, phytoplankton from the configuration.
    pub fn initial_state(&self, do_obs: &[Option<f64>]) -> Result<State, SimulationError> {
        let dissolved_oxygen = do_obs.first().copied().flatten().ok_or_else(|| {
            SimulationError::InvalidInitialState(format!(
                "no DO observation at {}",
                self.config.start()
            ))
        })?;

        Ok(State::new(dissolved_oxygen, self.config.initial_phyto()))
    }

    pub fn n_steps(&self) -> usize {
        self.config.n_steps().unwrap_or(self.grid.len())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &[NaiveDateTime] {
        &self.grid
    }

    pub fn process(&self) -> Result<ReportTable, Box<dyn std::error::Error>> {
        let forcing = self.forcing()?;
        let do_obs = self.observed_do();
        let initial = self.initial_state(&do_obs)?;

        let simulator = Simulator::new(*self.config.parameters())?;
        let trajectory = simulator.run(&forcing, initial, self.n_steps())?;

        Ok(ReportTable::assemble(&self.grid, &do_obs, &trajectory)?)
    }

    /// Runs the configured sensitivity sweep, one table per parameter value.
    pub fn process_sweep(&self) -> Result<Vec<SweepRun>, Box<dyn std::error::Error>> {
        let Some(sweep) = self.config.sweep() else {
            return Err("No sweep configured".into());
        };

        let forcing = self.forcing()?;
        let do_obs = self.observed_do();
        let initial = self.initial_state(&do_obs)?;

        let param_sets = vary_parameter(self.config.parameters(), &sweep.parameter, &sweep.values)?;
        let results = run_sweep(&forcing, initial, self.n_steps(), &param_sets);

        let mut runs = Vec::with_capacity(results.len());
        for (value, result) in sweep.values.iter().zip(results) {
            let table = match result {
                Ok(trajectory) => Ok(ReportTable::assemble(&self.grid, &do_obs, &trajectory)?),
                Err(e) => Err(e),
            };
            runs.push(SweepRun {
                parameter: sweep.parameter.clone(),
                value: *value,
                table,
            });
        }

        Ok(runs)
    }
}

/// Output path of a sweep member: `metab.csv` becomes `metab_k_do_0.5.csv`.
pub fn sweep_output_path(output: &Path, parameter: &str, value: f64) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = match output.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{}_{}_{}.{}", stem, parameter, value, ext),
        None => format!("{}_{}_{}", stem, parameter, value),
    };

    output.with_file_name(file_name)
}

impl Display for MetabolismProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MetabolismProcessor {{ series: {}, steps: {}, time step: {} min }}",
            self.series.len(),
            self.n_steps(),
            self.config.time_step().minutes()
        )
    }
}
