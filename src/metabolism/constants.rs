//! Model constants
//!
//! Coefficients of the empirical oxygen saturation curve and the reference values shared by the
//! temperature-adjusted rate terms.

/// Cubic coefficient of the DO saturation curve (mg O2 L^-1 degC^-3)
pub const DOSAT_C3: f64 = -0.00006;

/// Quadratic coefficient of the DO saturation curve (mg O2 L^-1 degC^-2)
pub const DOSAT_C2: f64 = 0.0069;

/// Linear coefficient of the DO saturation curve (mg O2 L^-1 degC^-1)
pub const DOSAT_C1: f64 = -0.3906;

/// Intercept of the DO saturation curve (mg O2 L^-1)
pub const DOSAT_C0: f64 = 14.578;

/// Reference temperature of the theta (Arrhenius-style) rate adjustments (degC)
pub const REFERENCE_TEMPERATURE: f64 = 20.0;

/// Mass of O2 consumed or released per mass of carbon respired or fixed (32 / 12)
pub const C_TO_O2: f64 = 32.0 / 12.0;

pub const MINUTES_PER_DAY: u32 = 1440;

/// Equilibrium dissolved oxygen concentration at a given water temperature.
///
/// Empirical cubic fit; `temperature` in degC, result in mg O2 L^-1.
pub fn do_saturation(temperature: f64) -> f64 {
    DOSAT_C3 * temperature.powi(3) + DOSAT_C2 * temperature.powi(2) + DOSAT_C1 * temperature
        + DOSAT_C0
}

/// Temperature adjustment `theta^(T - 20)` applied to a base rate.
pub fn theta_adjustment(theta: f64, temperature: f64) -> f64 {
    theta.powf(temperature - REFERENCE_TEMPERATURE)
}
