//! Forcing preprocessing
//!
//! Temperature and PAR series are aligned on the run's time grid and their gaps are filled by
//! carrying the last defined value forward before they reach the simulator.

pub mod align;
pub mod error;

pub use align::align_to_grid;
pub use error::ForcingError;

pub const TEMPERATURE: &str = "temperature";
pub const PAR: &str = "par";

/// Replaces every undefined entry by the value preceding it, in a single left-to-right pass.
///
/// A run of undefined entries takes the value immediately before the run. Fails without touching
/// the series when its first entry is undefined. Returns the number of entries filled.
pub fn fill_forward(
    label: &'static str,
    series: &mut [Option<f64>],
) -> Result<usize, ForcingError> {
    if series.first().is_some_and(|v| v.is_none()) {
        return Err(ForcingError::UndefinedFirstValue(label));
    }

    let mut filled = 0;
    for i in 1..series.len() {
        if series[i].is_none() {
            series[i] = series[i - 1];
            filled += 1;
        }
    }

    Ok(filled)
}

/// Temperature (degC) and PAR (umol m^-2 s^-1) series on a common time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Forcing {
    temperature: Vec<Option<f64>>,
    par: Vec<Option<f64>>,
}

impl Forcing {
    pub fn new(temperature: Vec<Option<f64>>, par: Vec<Option<f64>>) -> Result<Self, ForcingError> {
        if temperature.len() != par.len() {
            return Err(ForcingError::LengthMismatch {
                temperature: temperature.len(),
                par: par.len(),
            });
        }

        Ok(Self { temperature, par })
    }

    /// Builds a forcing from complete series.
    pub fn from_values(temperature: &[f64], par: &[f64]) -> Result<Self, ForcingError> {
        Self::new(
            temperature.iter().copied().map(Some).collect(),
            par.iter().copied().map(Some).collect(),
        )
    }

    /// Gap-fills both series in place.
    ///
    /// Both leading values are checked before either series is modified.
    pub fn fill_gaps(&mut self) -> Result<usize, ForcingError> {
        for (label, series) in [(TEMPERATURE, &self.temperature), (PAR, &self.par)] {
            if series.first().is_some_and(|v| v.is_none()) {
                return Err(ForcingError::UndefinedFirstValue(label));
            }
        }

        let filled = fill_forward(TEMPERATURE, &mut self.temperature)?
            + fill_forward(PAR, &mut self.par)?;

        if filled > 0 {
            log::debug!("Carried forward {} undefined forcing values", filled);
        }

        Ok(filled)
    }

    pub fn temperature(&self) -> &[Option<f64>] {
        &self.temperature
    }

    pub fn par(&self) -> &[Option<f64>] {
        &self.par
    }

    pub fn len(&self) -> usize {
        self.temperature.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty()
    }
}
