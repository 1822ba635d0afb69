use chrono::NaiveDateTime;
use std::collections::HashMap;

use crate::readers::TimeSeries;

/// Picks the value of `series` at every grid timestamp.
///
/// Grid timestamps without a sample are undefined, samples off the grid are dropped. When a
/// timestamp appears more than once the last sample wins.
pub fn align_to_grid(series: &TimeSeries, grid: &[NaiveDateTime]) -> Vec<Option<f64>> {
    let lookup: HashMap<NaiveDateTime, Option<f64>> = series
        .timestamps
        .iter()
        .copied()
        .zip(series.values.iter().copied())
        .collect();

    let aligned: Vec<Option<f64>> = grid
        .iter()
        .map(|t| lookup.get(t).copied().flatten())
        .collect();

    let missing = aligned.iter().filter(|v| v.is_none()).count();
    if missing > 0 {
        log::debug!(
            "{} of {} grid timestamps have no value for {}",
            missing,
            grid.len(),
            series.name
        );
    }

    aligned
}
