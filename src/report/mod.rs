//! Output table of a run
//!
//! One row per step with the observed DO passed through next to the modeled state and fluxes,
//! ready for plotting tools. Undefined values are written as empty CSV cells or JSON `null`.

pub mod error;
pub mod export;
pub mod fit;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use crate::config::DATETIME_FORMAT;
use crate::metabolism::Trajectory;

pub use error::ReportError;
pub use fit::FitSummary;

fn serialize_datetime<S>(datetime: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&datetime.format(DATETIME_FORMAT))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(serialize_with = "serialize_datetime")]
    pub datetime: NaiveDateTime,
    pub do_obs: Option<f64>,
    pub do_model: f64,
    pub phyto: f64,
    pub do_sat: Option<f64>,
    pub atm_flux: Option<f64>,
    pub npp: Option<f64>,
    pub r_doc: Option<f64>,
    pub r_phyto: Option<f64>,
    pub r_total: Option<f64>,
    pub settling: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    /// Labels every trajectory row with its timestamp and observed DO.
    ///
    /// `timestamps` and `do_obs` may be longer than the trajectory; the extra entries are ignored.
    pub fn assemble(
        timestamps: &[NaiveDateTime],
        do_obs: &[Option<f64>],
        trajectory: &Trajectory,
    ) -> Result<Self, ReportError> {
        let n = trajectory.len();
        if timestamps.len() < n || do_obs.len() < n {
            return Err(ReportError::LengthMismatch {
                rows: n,
                timestamps: timestamps.len().min(do_obs.len()),
            });
        }

        let rows = (0..n)
            .map(|i| ReportRow {
                datetime: timestamps[i],
                do_obs: do_obs[i],
                do_model: trajectory.dissolved_oxygen[i],
                phyto: trajectory.phytoplankton[i],
                do_sat: trajectory.do_sat[i],
                atm_flux: trajectory.atm_flux[i],
                npp: trajectory.npp[i],
                r_doc: trajectory.r_doc[i],
                r_phyto: trajectory.r_phyto[i],
                r_total: trajectory.r_total[i],
                settling: trajectory.settling[i],
            })
            .collect();

        Ok(Self { rows })
    }

    pub fn observed(&self) -> Vec<Option<f64>> {
        self.rows.iter().map(|r| r.do_obs).collect()
    }

    pub fn modeled(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.do_model).collect()
    }

    pub fn fit_summary(&self) -> Option<FitSummary> {
        FitSummary::compute(&self.observed(), &self.modeled())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metabolism::{State, StepFluxes};
    use chrono::Duration;

    pub(crate) fn sample_table() -> ReportTable {
        let start = NaiveDateTime::parse_from_str("2010-06-01 00:00", DATETIME_FORMAT).unwrap();
        let timestamps: Vec<NaiveDateTime> =
            (0..3).map(|i| start + Duration::minutes(30 * i)).collect();

        let mut trajectory = Trajectory::with_initial_state(State::new(8.5, 0.2), 3);
        let fluxes = StepFluxes {
            do_sat: 9.0,
            atm_flux: 0.01,
            npp: 0.0,
            r_doc: 0.002,
            r_phyto: 0.001,
            r_total: 0.003,
            settling: 0.0005,
        };
        trajectory.push(State::new(8.6, 0.1985), &fluxes);
        trajectory.push(State::new(8.7, 0.197), &fluxes);

        ReportTable::assemble(&timestamps, &[Some(8.5), None, Some(8.5)], &trajectory).unwrap()
    }

    #[test]
    fn test_assemble() {
        let table = sample_table();

        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[0].do_model, 8.5);
        assert_eq!(table.rows[0].do_sat, None);
        assert_eq!(table.rows[1].do_obs, None);
        assert_eq!(table.rows[2].do_model, 8.7);
        assert_eq!(table.rows[2].settling, Some(0.0005));
    }

    #[test]
    fn test_assemble_short_timestamps() {
        let trajectory = Trajectory::with_initial_state(State::new(8.5, 0.2), 1);

        assert!(matches!(
            ReportTable::assemble(&[], &[], &trajectory),
            Err(ReportError::LengthMismatch {
                rows: 1,
                timestamps: 0
            })
        ));
    }
}
