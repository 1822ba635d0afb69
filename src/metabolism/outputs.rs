//! Simulation outputs.
//!
//! `StepFluxes` holds the derived quantities of a single step (returned by `Simulator::step`).
//! `Trajectory` holds the full run (returned by `Simulator::run`). The first row of a trajectory
//! only carries the initial state, so every flux column is `None` there.

use serde::Serialize;

/// Model state at one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct State {
    /// Dissolved oxygen (mg O2 L^-1)
    pub dissolved_oxygen: f64,
    /// Phytoplankton biomass (mg C L^-1)
    pub phytoplankton: f64,
}

impl State {
    pub fn new(dissolved_oxygen: f64, phytoplankton: f64) -> Self {
        Self {
            dissolved_oxygen,
            phytoplankton,
        }
    }
}

/// Fluxes computed during a single step, already scaled by the time step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepFluxes {
    pub do_sat: f64,   // Saturation DO [mg O2 L^-1]
    pub atm_flux: f64, // Atmospheric exchange [mg O2 L^-1]
    pub npp: f64,      // Net primary production [mg C L^-1]
    pub r_doc: f64,    // DOC respiration [mg C L^-1]
    pub r_phyto: f64,  // Phytoplankton respiration [mg C L^-1]
    pub r_total: f64,  // Total respiration [mg C L^-1]
    pub settling: f64, // Settling loss [mg C L^-1]
}

/// State and flux series of a full run.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub dissolved_oxygen: Vec<f64>,
    pub phytoplankton: Vec<f64>,
    pub do_sat: Vec<Option<f64>>,
    pub atm_flux: Vec<Option<f64>>,
    pub npp: Vec<Option<f64>>,
    pub r_doc: Vec<Option<f64>>,
    pub r_phyto: Vec<Option<f64>>,
    pub r_total: Vec<Option<f64>>,
    pub settling: Vec<Option<f64>>,
}

impl Trajectory {
    /// Pre-allocates `n` rows and records the initial state as the first one.
    pub fn with_initial_state(initial: State, n: usize) -> Self {
        let mut trajectory = Self {
            dissolved_oxygen: Vec::with_capacity(n),
            phytoplankton: Vec::with_capacity(n),
            do_sat: Vec::with_capacity(n),
            atm_flux: Vec::with_capacity(n),
            npp: Vec::with_capacity(n),
            r_doc: Vec::with_capacity(n),
            r_phyto: Vec::with_capacity(n),
            r_total: Vec::with_capacity(n),
            settling: Vec::with_capacity(n),
        };

        trajectory.dissolved_oxygen.push(initial.dissolved_oxygen);
        trajectory.phytoplankton.push(initial.phytoplankton);
        trajectory.do_sat.push(None);
        trajectory.atm_flux.push(None);
        trajectory.npp.push(None);
        trajectory.r_doc.push(None);
        trajectory.r_phyto.push(None);
        trajectory.r_total.push(None);
        trajectory.settling.push(None);

        trajectory
    }

    /// Appends the state reached by a step along with the fluxes that produced it.
    pub fn push(&mut self, state: State, fluxes: &StepFluxes) {
        self.dissolved_oxygen.push(state.dissolved_oxygen);
        self.phytoplankton.push(state.phytoplankton);
        self.do_sat.push(Some(fluxes.do_sat));
        self.atm_flux.push(Some(fluxes.atm_flux));
        self.npp.push(Some(fluxes.npp));
        self.r_doc.push(Some(fluxes.r_doc));
        self.r_phyto.push(Some(fluxes.r_phyto));
        self.r_total.push(Some(fluxes.r_total));
        self.settling.push(Some(fluxes.settling));
    }

    /// State at row `index`.
    pub fn state(&self, index: usize) -> Option<State> {
        Some(State::new(
            *self.dissolved_oxygen.get(index)?,
            *self.phytoplankton.get(index)?,
        ))
    }

    /// State after the last step.
    pub fn last_state(&self) -> Option<State> {
        self.state(self.len().checked_sub(1)?)
    }

    pub fn len(&self) -> usize {
        self.dissolved_oxygen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dissolved_oxygen.is_empty()
    }
}
