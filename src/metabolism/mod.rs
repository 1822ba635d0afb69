//! Lake metabolism model
//!
//! One-box mass balance of dissolved oxygen and phytoplankton carbon in the surface mixed layer,
//! driven by water temperature and PAR and integrated with an explicit Euler scheme.
//!
//! ## Step equations
//!
//! For every step `i > 0`, with `T` the water temperature and `I` the PAR:
//!
//! 1. `do_sat = -0.00006 T^3 + 0.0069 T^2 - 0.3906 T + 14.578`
//! 2. `atm_flux = dt k_do (do_sat - DO[i-1]) / z_mix`
//! 3. `npp = dt I phosphorus p_npp theta_npp^(T - 20)`
//! 4. `r_doc = dt doc doc_r`
//! 5. `r_phyto = dt phyto[i-1] phyto_r theta_r^(T - 20)`
//! 6. `r_total = r_doc + r_phyto`
//! 7. `settling = dt phyto[i-1] settling_phyto / z_mix`
//! 8. `DO[i] = DO[i-1] + atm_flux + c_to_o2 (npp - r_total)`
//! 9. `phyto[i] = phyto[i-1] + npp - r_phyto - settling`
//!
//! Nothing keeps the state physically plausible: a time step that is large compared to the
//! fastest rate can drive DO or biomass negative.
//!
//! ## Usage Example
//!
//! ```rust
//! use lakemetab::forcing::Forcing;
//! use lakemetab::metabolism::{Parameters, Simulator, State};
//!
//! let forcing = Forcing::from_values(&[18.0, 18.2, 18.4], &[0.0, 350.0, 700.0]).unwrap();
//! let simulator = Simulator::new(Parameters::default()).unwrap();
//!
//! let trajectory = simulator.run(&forcing, State::new(8.9, 0.2), 3).unwrap();
//! assert_eq!(trajectory.len(), 3);
//! ```

pub mod constants;
pub mod error;
pub mod outputs;
pub mod params;
pub mod simulator;
pub mod sweep;

pub use error::SimulationError;
pub use outputs::{State, StepFluxes, Trajectory};
pub use params::{PARAM_NAMES, Parameters};
pub use simulator::Simulator;
