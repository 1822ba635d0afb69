use super::constants::{do_saturation, theta_adjustment};
use super::{Parameters, SimulationError, State, StepFluxes, Trajectory};
use crate::forcing::{Forcing, PAR, TEMPERATURE};

/// Explicit Euler integrator of the mixed layer DO and phytoplankton mass balances.
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    params: Parameters,
}

impl Simulator {
    pub fn new(params: Parameters) -> Result<Self, SimulationError> {
        params.validate()?;

        if params.dt == 0.0 {
            log::warn!("Time step is zero, state will stay at its initial value");
        }

        Ok(Self { params })
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Advances `prev` by one time step under the given forcing.
    pub fn step(&self, prev: State, temperature: f64, par: f64) -> (State, StepFluxes) {
        let p = &self.params;

        let do_sat = do_saturation(temperature);
        let atm_flux = p.dt * p.k_do * (do_sat - prev.dissolved_oxygen) / p.z_mix;
        let npp = p.dt * par * p.phosphorus * p.p_npp * theta_adjustment(p.theta_npp, temperature);
        let r_doc = p.dt * p.doc * p.doc_r;
        let r_phyto =
            p.dt * prev.phytoplankton * p.phyto_r * theta_adjustment(p.theta_r, temperature);
        let r_total = r_doc + r_phyto;
        let settling = p.dt * prev.phytoplankton * p.settling_phyto / p.z_mix;

        // Carbon fluxes are converted to O2 before entering the oxygen balance.
        let dissolved_oxygen =
            prev.dissolved_oxygen + atm_flux + npp * p.c_to_o2 - r_total * p.c_to_o2;
        let phytoplankton = prev.phytoplankton + npp - r_phyto - settling;

        let fluxes = StepFluxes {
            do_sat,
            atm_flux,
            npp,
            r_doc,
            r_phyto,
            r_total,
            settling,
        };

        (State::new(dissolved_oxygen, phytoplankton), fluxes)
    }

    /// Runs `n_steps` rows, the first holding `initial`.
    ///
    /// Every precondition is checked before the first step, so a failed run produces no output.
    /// Row `i` uses the forcing at index `i`; the forcing at index 0 is never read by a step.
    pub fn run(
        &self,
        forcing: &Forcing,
        initial: State,
        n_steps: usize,
    ) -> Result<Trajectory, SimulationError> {
        if n_steps == 0 {
            return Err(SimulationError::NonPositiveSteps);
        }

        if n_steps > forcing.len() {
            return Err(SimulationError::StepsExceedForcing {
                requested: n_steps,
                available: forcing.len(),
            });
        }

        if !initial.dissolved_oxygen.is_finite() || !initial.phytoplankton.is_finite() {
            return Err(SimulationError::InvalidInitialState(format!(
                "dissolved_oxygen={}, phytoplankton={}",
                initial.dissolved_oxygen, initial.phytoplankton
            )));
        }

        let temperature = defined_values(TEMPERATURE, &forcing.temperature()[..n_steps])?;
        let par = defined_values(PAR, &forcing.par()[..n_steps])?;

        log::info!(
            "Running {} steps (dt = {:.5} d, z_mix = {} m)",
            n_steps,
            self.params.dt,
            self.params.z_mix
        );

        let mut trajectory = Trajectory::with_initial_state(initial, n_steps);
        let mut state = initial;

        for i in 1..n_steps {
            let (next, fluxes) = self.step(state, temperature[i], par[i]);
            trajectory.push(next, &fluxes);
            state = next;
        }

        if let Some(last) = trajectory.last_state() {
            log::info!(
                "Run finished: DO = {:.3} mg/L, phytoplankton = {:.4} mg C/L",
                last.dissolved_oxygen,
                last.phytoplankton
            );
        }

        Ok(trajectory)
    }
}

fn defined_values(
    series: &'static str,
    values: &[Option<f64>],
) -> Result<Vec<f64>, SimulationError> {
    values
        .iter()
        .enumerate()
        .map(|(index, v)| v.ok_or(SimulationError::MissingForcing { series, index }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn diel_forcing(n: usize) -> Forcing {
        let temperature: Vec<f64> = (0..n)
            .map(|i| 18.0 + 2.0 * (i as f64 * std::f64::consts::PI / 24.0).sin())
            .collect();
        let par: Vec<f64> = (0..n)
            .map(|i| (1500.0 * (i as f64 * std::f64::consts::PI / 24.0).sin()).max(0.0))
            .collect();

        Forcing::from_values(&temperature, &par).unwrap()
    }

    fn simulator() -> Simulator {
        Simulator::new(Parameters::default()).unwrap()
    }

    #[test]
    fn test_first_row_is_initial_state() {
        let initial = State::new(8.7, 0.25);
        let trajectory = simulator().run(&diel_forcing(10), initial, 10).unwrap();

        assert_eq!(trajectory.len(), 10);
        assert_eq!(trajectory.state(0), Some(initial));
        assert!(trajectory.do_sat[0].is_none());
        assert!(trajectory.atm_flux[0].is_none());
        assert!(trajectory.npp[0].is_none());
        assert!(trajectory.r_doc[0].is_none());
        assert!(trajectory.r_phyto[0].is_none());
        assert!(trajectory.r_total[0].is_none());
        assert!(trajectory.settling[0].is_none());
        assert!(trajectory.do_sat[1..].iter().all(|v| v.is_some()));
    }

    #[test]
    fn test_run_is_deterministic() {
        let forcing = diel_forcing(96);
        let initial = State::new(8.7, 0.25);

        let first = simulator().run(&forcing, initial, 96).unwrap();
        let second = simulator().run(&forcing, initial, 96).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_mass_balance_holds_every_step() {
        let params = Parameters::default();
        let trajectory = simulator()
            .run(&diel_forcing(96), State::new(8.7, 0.25), 96)
            .unwrap();

        for i in 1..trajectory.len() {
            let fatm = trajectory.atm_flux[i].unwrap();
            let npp = trajectory.npp[i].unwrap();
            let r_total = trajectory.r_total[i].unwrap();
            let r_phyto = trajectory.r_phyto[i].unwrap();
            let settling = trajectory.settling[i].unwrap();

            let d_do = trajectory.dissolved_oxygen[i] - trajectory.dissolved_oxygen[i - 1];
            let d_phyto = trajectory.phytoplankton[i] - trajectory.phytoplankton[i - 1];

            assert!(
                (d_do - (fatm + params.c_to_o2 * (npp - r_total))).abs() < EPS,
                "DO balance broken at step {}",
                i
            );
            assert!(
                (d_phyto - (npp - r_phyto - settling)).abs() < EPS,
                "phytoplankton balance broken at step {}",
                i
            );
            assert!(
                (r_total - (trajectory.r_doc[i].unwrap() + r_phyto)).abs() < EPS,
                "total respiration broken at step {}",
                i
            );
        }
    }

    #[test]
    fn test_step_matches_hand_computation() {
        let params = Parameters {
            phosphorus: 10.0,
            doc: 5.0,
            z_mix: 2.0,
            k_do: 0.5,
            p_npp: 1e-5,
            theta_npp: 1.08,
            phyto_r: 0.2,
            theta_r: 1.08,
            settling_phyto: 0.1,
            doc_r: 0.01,
            c_to_o2: 2.0,
            dt: 0.5,
        };
        let sim = Simulator::new(params).unwrap();

        let (next, fluxes) = sim.step(State::new(8.0, 1.0), 20.0, 1000.0);

        // At 20 degC the theta factors are exactly one.
        assert!((fluxes.do_sat - 9.046).abs() < 1e-9);
        assert!((fluxes.atm_flux - 0.5 * 0.5 * (9.046 - 8.0) / 2.0).abs() < 1e-9);
        assert!((fluxes.npp - 0.05).abs() < EPS);
        assert!((fluxes.r_doc - 0.025).abs() < EPS);
        assert!((fluxes.r_phyto - 0.1).abs() < EPS);
        assert!((fluxes.r_total - 0.125).abs() < EPS);
        assert!((fluxes.settling - 0.025).abs() < EPS);
        assert!((next.dissolved_oxygen - (8.0 + fluxes.atm_flux + 0.1 - 0.25)).abs() < 1e-9);
        assert!((next.phytoplankton - (1.0 + 0.05 - 0.1 - 0.025)).abs() < EPS);
    }

    #[test]
    fn test_dark_constant_temperature_decays_phytoplankton() {
        let n = 48;
        let forcing = Forcing::from_values(&vec![20.0; n], &vec![0.0; n]).unwrap();

        let trajectory = simulator().run(&forcing, State::new(9.0, 0.5), n).unwrap();

        for i in 1..n {
            assert_eq!(trajectory.npp[i], Some(0.0));
            assert!(trajectory.phytoplankton[i - 1] > 0.0);
            assert!(
                trajectory.phytoplankton[i] < trajectory.phytoplankton[i - 1],
                "phytoplankton did not decrease at step {}",
                i
            );
        }
    }

    #[test]
    fn test_zero_time_step_keeps_initial_state() {
        let sim = Simulator::new(Parameters::default().with_time_step(0.0)).unwrap();
        let initial = State::new(8.7, 0.25);

        let trajectory = sim.run(&diel_forcing(24), initial, 24).unwrap();

        for i in 1..trajectory.len() {
            assert_eq!(trajectory.state(i), Some(initial));
            assert_eq!(trajectory.atm_flux[i], Some(0.0));
            assert_eq!(trajectory.npp[i], Some(0.0));
            assert_eq!(trajectory.r_doc[i], Some(0.0));
            assert_eq!(trajectory.r_phyto[i], Some(0.0));
            assert_eq!(trajectory.r_total[i], Some(0.0));
            assert_eq!(trajectory.settling[i], Some(0.0));
        }
    }

    #[test]
    fn test_negative_biomass_is_not_clamped() {
        let params = Parameters {
            phyto_r: 30.0,
            ..Parameters::default()
        }
        .with_time_step(1.0);
        let sim = Simulator::new(params).unwrap();
        let forcing = Forcing::from_values(&[20.0, 20.0], &[0.0, 0.0]).unwrap();

        let trajectory = sim.run(&forcing, State::new(9.0, 0.5), 2).unwrap();

        assert!(trajectory.phytoplankton[1] < 0.0);
    }

    #[test]
    fn test_single_step_run() {
        let trajectory = simulator()
            .run(&diel_forcing(5), State::new(8.7, 0.25), 1)
            .unwrap();

        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.state(0), Some(State::new(8.7, 0.25)));
    }

    #[test]
    fn test_run_preconditions() {
        let sim = simulator();
        let initial = State::new(8.7, 0.25);

        assert_eq!(
            sim.run(&diel_forcing(5), initial, 0),
            Err(SimulationError::NonPositiveSteps)
        );
        assert_eq!(
            sim.run(&diel_forcing(5), initial, 6),
            Err(SimulationError::StepsExceedForcing {
                requested: 6,
                available: 5
            })
        );
        assert!(matches!(
            sim.run(&diel_forcing(5), State::new(f64::NAN, 0.25), 5),
            Err(SimulationError::InvalidInitialState(_))
        ));
    }

    #[test]
    fn test_run_rejects_undefined_forcing() {
        let forcing = Forcing::new(
            vec![Some(18.0), Some(18.5), None, Some(19.0)],
            vec![Some(0.0), Some(10.0), Some(20.0), Some(30.0)],
        )
        .unwrap();

        assert_eq!(
            simulator().run(&forcing, State::new(8.7, 0.25), 4),
            Err(SimulationError::MissingForcing {
                series: TEMPERATURE,
                index: 2
            })
        );

        // The gap lies beyond the requested steps.
        assert!(simulator().run(&forcing, State::new(8.7, 0.25), 2).is_ok());
    }

    #[test]
    fn test_new_rejects_invalid_parameters() {
        let params = Parameters {
            z_mix: -1.0,
            ..Parameters::default()
        };

        assert!(matches!(
            Simulator::new(params),
            Err(SimulationError::InvalidParameter(_))
        ));
    }
}
