//! Filtered reading of the parameter-sweep table.
//!
//! The model file is a PyTables-compatible HDF5 container. The sweep lives at
//! a well-known internal path as a compound dataset; all columns are read in a
//! single pass so that every column of one load call is row-aligned by
//! construction, independent of any storage call-order guarantees.

use std::path::Path;
use std::time::Instant;

use hdf5::H5Type;
use tracing::{debug, info};

use super::error::{AnalysisError, Result};
use super::metadata::ColumnMetadata;

/// Internal HDF5 path of the sweep table inside the model file.
pub const SWEEP_TABLE_PATH: &str = "parameter_sweep/modal_composites";

/// One row of the sweep table, matching the compound layout on disk.
#[derive(H5Type, Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct ModalCompositeRow {
    /// Strip length
    pub a: f64,
    /// Base strip thickness
    pub t_b: f64,
    /// Dominant mode index
    pub m_dominant: f64,
    /// Natural frequency, direct method
    pub omega: f64,
    pub omega_approx: f64,
    pub omega_rel_err: f64,
    /// Critical buckling stress, direct method
    pub sigma_cr: f64,
    pub sigma_cr_approx: f64,
    pub sigma_cr_rel_err: f64,
}

/// Inclusive range filter on the two independent variables.
///
/// Unset bounds mean unbounded. Applied once, at read time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterCriteria {
    pub a_min: Option<f64>,
    pub a_max: Option<f64>,
    pub t_b_min: Option<f64>,
    pub t_b_max: Option<f64>,
}

impl FilterCriteria {
    /// True when the row lies within every bounded range.
    pub fn matches(&self, row: &ModalCompositeRow) -> bool {
        within(row.a, self.a_min, self.a_max) && within(row.t_b, self.t_b_min, self.t_b_max)
    }
}

fn within(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.map_or(true, |lo| value >= lo) && max.map_or(true, |hi| value <= hi)
}

/// The filtered slice of the sweep table, in storage row order.
#[derive(Debug, Clone)]
pub struct ModalComposites {
    rows: Vec<ModalCompositeRow>,
}

impl ModalComposites {
    pub fn from_rows(rows: Vec<ModalCompositeRow>) -> Self {
        ModalComposites { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extract one column as a flat sequence, aligned with every other column
    /// of the same load call.
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        let extract: fn(&ModalCompositeRow) -> f64 = match name {
            "a" => |r| r.a,
            "t_b" => |r| r.t_b,
            "m_dominant" => |r| r.m_dominant,
            "omega" => |r| r.omega,
            "omega_approx" => |r| r.omega_approx,
            "omega_rel_err" => |r| r.omega_rel_err,
            "sigma_cr" => |r| r.sigma_cr,
            "sigma_cr_approx" => |r| r.sigma_cr_approx,
            "sigma_cr_rel_err" => |r| r.sigma_cr_rel_err,
            _ => {
                return Err(AnalysisError::UnknownColumn {
                    column: name.to_string(),
                })
            }
        };
        Ok(self.rows.iter().map(extract).collect())
    }
}

/// Load the filtered modal composites and the column metadata from the model
/// file.
///
/// The file is opened read-only and released when this function returns,
/// whether it succeeds or fails. Reading is all-or-nothing: any HDF5 failure
/// aborts the call without partial results.
pub fn load_modal_composites(
    model_file: &Path,
    criteria: &FilterCriteria,
) -> Result<(ModalComposites, ColumnMetadata)> {
    info!(model_file = %model_file.display(), "loading modal composites");
    let start = Instant::now();

    let file = hdf5::File::open(model_file)?;
    let table = file.dataset(SWEEP_TABLE_PATH)?;

    let rows: Vec<ModalCompositeRow> = table.read_raw()?;
    let metadata = ColumnMetadata::read_from(&table)?;

    let total = rows.len();
    let rows: Vec<ModalCompositeRow> =
        rows.into_iter().filter(|r| criteria.matches(r)).collect();
    debug!(total, kept = rows.len(), "applied range filter");

    info!(
        elapsed_s = start.elapsed().as_secs_f64(),
        rows = rows.len(),
        "loading completed"
    );
    Ok((ModalComposites::from_rows(rows), metadata))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(a: f64, t_b: f64) -> ModalCompositeRow {
        ModalCompositeRow {
            a,
            t_b,
            m_dominant: 1.0,
            omega: 0.0,
            omega_approx: 0.0,
            omega_rel_err: 0.0,
            sigma_cr: 0.0,
            sigma_cr_approx: 0.0,
            sigma_cr_rel_err: 0.0,
        }
    }

    #[test]
    fn unbounded_criteria_match_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.matches(&row(5.0, 1.0)));
        assert!(criteria.matches(&row(-1.0, 1e9)));
    }

    #[test]
    fn bounds_are_inclusive() {
        let criteria = FilterCriteria {
            a_min: Some(10.0),
            a_max: Some(15.0),
            ..Default::default()
        };
        assert!(criteria.matches(&row(10.0, 1.0)));
        assert!(criteria.matches(&row(15.0, 1.0)));
        assert!(!criteria.matches(&row(9.999, 1.0)));
        assert!(!criteria.matches(&row(15.001, 1.0)));
    }

    #[test]
    fn filter_keeps_original_relative_order() {
        let rows: Vec<ModalCompositeRow> =
            [5.0, 10.0, 15.0, 20.0].iter().map(|&a| row(a, 1.0)).collect();
        let criteria = FilterCriteria {
            a_min: Some(10.0),
            a_max: Some(15.0),
            ..Default::default()
        };
        let kept: Vec<f64> = rows
            .into_iter()
            .filter(|r| criteria.matches(r))
            .map(|r| r.a)
            .collect();
        assert_eq!(kept, vec![10.0, 15.0]);
    }

    #[test]
    fn both_variables_are_filtered() {
        let criteria = FilterCriteria {
            a_min: Some(10.0),
            t_b_max: Some(2.0),
            ..Default::default()
        };
        assert!(criteria.matches(&row(10.0, 2.0)));
        assert!(!criteria.matches(&row(10.0, 2.5)));
        assert!(!criteria.matches(&row(9.0, 2.0)));
    }

    #[test]
    fn columns_are_row_aligned() {
        let composites = ModalComposites::from_rows(vec![row(10.0, 1.0), row(20.0, 2.0)]);
        assert_eq!(composites.column("a").unwrap(), vec![10.0, 20.0]);
        assert_eq!(composites.column("t_b").unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn unknown_column_is_rejected() {
        let composites = ModalComposites::from_rows(vec![row(10.0, 1.0)]);
        let err = composites.column("no_such_column").unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownColumn { .. }));
    }
}
