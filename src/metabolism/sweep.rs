use rayon::prelude::*;

use super::{Parameters, SimulationError, Simulator, State, Trajectory};
use crate::forcing::Forcing;

/// Runs one simulation per parameter set in parallel.
///
/// Each run works on its own copy of the parameters and of the forcing. Results keep the order
/// of `param_sets`.
pub fn run_sweep(
    forcing: &Forcing,
    initial: State,
    n_steps: usize,
    param_sets: &[Parameters],
) -> Vec<Result<Trajectory, SimulationError>> {
    log::info!("Running sweep over {} parameter sets", param_sets.len());

    param_sets
        .par_iter()
        .map(|params| {
            let forcing = forcing.clone();
            Simulator::new(*params)?.run(&forcing, initial, n_steps)
        })
        .collect()
}

/// Parameter sets that differ from `base` only by the value of `name`.
pub fn vary_parameter(
    base: &Parameters,
    name: &str,
    values: &[f64],
) -> Result<Vec<Parameters>, SimulationError> {
    values
        .iter()
        .map(|&value| base.with_value(name, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forcing() -> Forcing {
        let temperature: Vec<f64> = (0..48).map(|i| 15.0 + 0.1 * i as f64).collect();
        let par: Vec<f64> = (0..48)
            .map(|i| if (12..36).contains(&i) { 900.0 } else { 0.0 })
            .collect();
        Forcing::from_values(&temperature, &par).unwrap()
    }

    #[test]
    fn test_sweep_matches_individual_runs() {
        let forcing = forcing();
        let initial = State::new(9.5, 0.3);
        let param_sets = vary_parameter(&Parameters::default(), "k_do", &[0.1, 0.5, 2.0]).unwrap();

        let results = run_sweep(&forcing, initial, 48, &param_sets);

        assert_eq!(results.len(), 3);
        for (params, result) in param_sets.iter().zip(results) {
            let expected = Simulator::new(*params)
                .unwrap()
                .run(&forcing, initial, 48)
                .unwrap();
            assert_eq!(result.unwrap(), expected);
        }
    }

    #[test]
    fn test_sweep_reports_each_failure() {
        let param_sets = vary_parameter(&Parameters::default(), "z_mix", &[3.0, 0.0]).unwrap();

        let results = run_sweep(&forcing(), State::new(9.5, 0.3), 48, &param_sets);

        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(SimulationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_vary_unknown_parameter() {
        assert!(vary_parameter(&Parameters::default(), "depth", &[1.0]).is_err());
    }
}
