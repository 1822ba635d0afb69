//! Parameter set of a metabolism run.
//!
//! Units follow the sensor conventions of the model: concentrations in mg L^-1 (phosphorus in
//! ug L^-1), depths in m, rates per day and PAR in umol m^-2 s^-1.

use serde::{Deserialize, Serialize};

use super::SimulationError;
use super::constants::{C_TO_O2, MINUTES_PER_DAY};

/// Names accepted by [`Parameters::with_value`], in declaration order.
pub const PARAM_NAMES: &[&str] = &[
    "phosphorus",
    "doc",
    "z_mix",
    "k_do",
    "p_npp",
    "theta_npp",
    "phyto_r",
    "theta_r",
    "settling_phyto",
    "doc_r",
    "c_to_o2",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    /// Phosphorus concentration (ug L^-1)
    pub phosphorus: f64,
    /// Dissolved organic carbon concentration (mg L^-1)
    pub doc: f64,
    /// Mixed layer depth (m)
    pub z_mix: f64,
    /// Piston velocity of O2 gas exchange (m d^-1)
    pub k_do: f64,
    /// Conversion of light and phosphorus to fixed carbon
    pub p_npp: f64,
    /// Temperature sensitivity of primary production
    pub theta_npp: f64,
    /// Phytoplankton respiration rate (d^-1)
    pub phyto_r: f64,
    /// Temperature sensitivity of phytoplankton respiration
    pub theta_r: f64,
    /// Phytoplankton settling velocity (m d^-1)
    pub settling_phyto: f64,
    /// DOC decay rate (d^-1)
    pub doc_r: f64,
    /// Carbon to oxygen mass conversion
    pub c_to_o2: f64,
    /// Integration time step (fraction of a day). Derived from the sampling interval.
    #[serde(skip_deserializing)]
    pub dt: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            phosphorus: 15.0,
            doc: 8.0,
            z_mix: 2.0,
            k_do: 0.5,
            p_npp: 1.5e-5,
            theta_npp: 1.08,
            phyto_r: 0.1,
            theta_r: 1.08,
            settling_phyto: 0.1,
            doc_r: 0.01,
            c_to_o2: C_TO_O2,
            dt: 30.0 / MINUTES_PER_DAY as f64,
        }
    }
}

impl Parameters {
    pub fn with_time_step(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Returns a copy with the named parameter replaced.
    pub fn with_value(mut self, name: &str, value: f64) -> Result<Self, SimulationError> {
        let slot = match name {
            "phosphorus" => &mut self.phosphorus,
            "doc" => &mut self.doc,
            "z_mix" => &mut self.z_mix,
            "k_do" => &mut self.k_do,
            "p_npp" => &mut self.p_npp,
            "theta_npp" => &mut self.theta_npp,
            "phyto_r" => &mut self.phyto_r,
            "theta_r" => &mut self.theta_r,
            "settling_phyto" => &mut self.settling_phyto,
            "doc_r" => &mut self.doc_r,
            "c_to_o2" => &mut self.c_to_o2,
            _ => return Err(SimulationError::UnknownParameter(name.to_string())),
        };
        *slot = value;

        Ok(self)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let values = [
            ("phosphorus", self.phosphorus),
            ("doc", self.doc),
            ("z_mix", self.z_mix),
            ("k_do", self.k_do),
            ("p_npp", self.p_npp),
            ("theta_npp", self.theta_npp),
            ("phyto_r", self.phyto_r),
            ("theta_r", self.theta_r),
            ("settling_phyto", self.settling_phyto),
            ("doc_r", self.doc_r),
            ("c_to_o2", self.c_to_o2),
            ("dt", self.dt),
        ];

        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimulationError::InvalidParameter(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        if self.z_mix <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "z_mix must be positive, got {}",
                self.z_mix
            )));
        }

        if self.dt < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "dt must not be negative, got {}",
                self.dt
            )));
        }

        Ok(())
    }
}
