//! Rectangular grid reconstruction from flat sweep rows.
//!
//! The sweep covers a Cartesian product of the two independent variables, so
//! a filtered row set of length `n` must satisfy `n == |unique(a)| *
//! |unique(t_b)|`. Every column of one family is reshaped through the same
//! [`GridShape`], which makes grid cell `(i, j)` refer to the same underlying
//! row across all of them.

use super::error::{AnalysisError, Result};

/// Shape of the `(a, t_b)` rectangle implied by the filtered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub n_a: usize,
    pub n_t: usize,
}

impl GridShape {
    /// Detect the rectangle implied by the two independent-variable columns.
    ///
    /// Fails with [`AnalysisError::IrregularGrid`] when the rows do not form
    /// a complete Cartesian product; no truncation or padding is attempted.
    pub fn detect(a: &[f64], t_b: &[f64]) -> Result<Self> {
        debug_assert_eq!(a.len(), t_b.len(), "independent columns must be row-aligned");
        let shape = GridShape {
            n_a: count_distinct(a),
            n_t: count_distinct(t_b),
        };
        if a.len() != shape.cells() || t_b.len() != shape.cells() {
            return Err(AnalysisError::IrregularGrid {
                n_a: shape.n_a,
                n_t: shape.n_t,
                expected: shape.cells(),
                actual: a.len(),
            });
        }
        Ok(shape)
    }

    pub fn cells(&self) -> usize {
        self.n_a * self.n_t
    }

    /// Reshape one flat column onto the rectangle, row-major over `a`.
    pub fn reshape(&self, flat: &[f64]) -> Result<Grid> {
        if flat.len() != self.cells() {
            return Err(AnalysisError::IrregularGrid {
                n_a: self.n_a,
                n_t: self.n_t,
                expected: self.cells(),
                actual: flat.len(),
            });
        }
        Ok(Grid {
            n_a: self.n_a,
            n_t: self.n_t,
            values: flat.to_vec(),
        })
    }
}

/// One column's values mapped onto the `(a, t_b)` rectangle.
///
/// Ephemeral, recomputed per run, used purely for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    n_a: usize,
    n_t: usize,
    values: Vec<f64>,
}

impl Grid {
    pub fn n_a(&self) -> usize {
        self.n_a
    }

    pub fn n_t(&self) -> usize {
        self.n_t
    }

    /// Value at grid cell `(i, j)`, `i` indexing distinct `a` values.
    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n_t + j]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Finite (min, max) over all cells; NaNs are skipped.
    pub fn value_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.values {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        (min, max)
    }
}

fn count_distinct(values: &[f64]) -> usize {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2x2 rectangle: a in {10, 20}, t_b in {1, 2}
    const A: [f64; 4] = [10.0, 10.0, 20.0, 20.0];
    const T_B: [f64; 4] = [1.0, 2.0, 1.0, 2.0];

    #[test]
    fn complete_rectangle_reshapes() {
        let shape = GridShape::detect(&A, &T_B).unwrap();
        assert_eq!(shape, GridShape { n_a: 2, n_t: 2 });

        let grid = shape.reshape(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(grid.at(0, 0), 1.0);
        assert_eq!(grid.at(0, 1), 2.0);
        assert_eq!(grid.at(1, 0), 3.0);
        assert_eq!(grid.at(1, 1), 4.0);
    }

    #[test]
    fn element_count_is_preserved() {
        let shape = GridShape::detect(&A, &T_B).unwrap();
        assert_eq!(shape.cells(), A.len());
        let grid = shape.reshape(&[0.5; 4]).unwrap();
        assert_eq!(grid.values().len(), A.len());
    }

    #[test]
    fn missing_combination_is_rejected() {
        // Same distinct values, but only 3 of the 4 combinations present.
        let a = [10.0, 10.0, 20.0];
        let t_b = [1.0, 2.0, 1.0];
        let err = GridShape::detect(&a, &t_b).unwrap_err();
        match err {
            AnalysisError::IrregularGrid {
                n_a,
                n_t,
                expected,
                actual,
            } => {
                assert_eq!((n_a, n_t), (2, 2));
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reshape_rejects_misaligned_column() {
        let shape = GridShape::detect(&A, &T_B).unwrap();
        let err = shape.reshape(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::IrregularGrid { actual: 3, .. }));
    }

    #[test]
    fn reshaping_is_coordinate_consistent() {
        // Two dependent columns derived from the same rows stay paired per cell.
        let shape = GridShape::detect(&A, &T_B).unwrap();
        let base = shape.reshape(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let approx = shape.reshape(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        for i in 0..shape.n_a {
            for j in 0..shape.n_t {
                assert_eq!(approx.at(i, j), base.at(i, j) * 10.0);
            }
        }
    }

    #[test]
    fn reshape_is_deterministic() {
        let shape = GridShape::detect(&A, &T_B).unwrap();
        let first = shape.reshape(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let second = shape.reshape(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn value_range_skips_non_finite_cells() {
        let shape = GridShape { n_a: 2, n_t: 2 };
        let grid = shape
            .reshape(&[1.0, f64::NAN, 3.0, f64::INFINITY])
            .unwrap();
        assert_eq!(grid.value_range(), (1.0, 3.0));
    }
}
