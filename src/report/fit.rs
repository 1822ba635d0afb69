use serde::Serialize;
use std::fmt;

/// Agreement between observed and modeled DO over the rows where an observation exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitSummary {
    pub n: usize,
    pub bias: f64, // Mean of modeled - observed [mg O2 L^-1]
    pub mae: f64,  // Mean absolute error [mg O2 L^-1]
    pub rmse: f64, // Root mean square error [mg O2 L^-1]
}

impl FitSummary {
    /// Returns `None` when no row has an observation.
    pub fn compute(observed: &[Option<f64>], modeled: &[f64]) -> Option<Self> {
        let residuals: Vec<f64> = observed
            .iter()
            .zip(modeled)
            .filter_map(|(obs, model)| obs.map(|o| model - o))
            .collect();

        if residuals.is_empty() {
            return None;
        }

        let n = residuals.len();
        let bias = residuals.iter().sum::<f64>() / n as f64;
        let mae = residuals.iter().map(|r| r.abs()).sum::<f64>() / n as f64;
        let rmse = (residuals.iter().map(|r| r * r).sum::<f64>() / n as f64).sqrt();

        Some(Self {
            n,
            bias,
            mae,
            rmse,
        })
    }
}

impl fmt::Display for FitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n = {}, bias = {:.3} mg/L, MAE = {:.3} mg/L, RMSE = {:.3} mg/L",
            self.n, self.bias, self.mae, self.rmse
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_skips_undefined_observations() {
        let observed = [Some(8.0), None, Some(9.0), Some(10.0)];
        let modeled = [8.0, 100.0, 10.0, 8.0];

        let fit = FitSummary::compute(&observed, &modeled).unwrap();

        assert_eq!(fit.n, 3);
        assert!((fit.bias - (-1.0 / 3.0)).abs() < 1e-12);
        assert!((fit.mae - 1.0).abs() < 1e-12);
        assert!((fit.rmse - (5.0_f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_compute_without_observations() {
        assert_eq!(FitSummary::compute(&[None, None], &[1.0, 2.0]), None);
        assert_eq!(FitSummary::compute(&[], &[]), None);
    }
}
