use std::collections::HashSet;

use crate::error::MatroidError;
use crate::matrix::DenseMatrix;
use crate::matroid::Matroid;

/// Tolerance used when deciding the rank of a real matrix: entries whose
/// magnitude falls at or below this value during elimination are treated as
/// exact zeros. Column sets that are singular only up to this tolerance are
/// therefore reported as dependent, silently.
pub const RANK_TOLERANCE: f64 = 1e-9;

/// A linear matroid over the real numbers.
///
/// The ground set is the set of column indices of a matrix M; a subset of
/// columns is independent iff the columns are linearly independent, i.e. the
/// sub-matrix they form has rank equal to the subset's size.
///
/// The representation is immutable. Weights are stored as a vector with one
/// entry per column.
#[derive(Debug, Clone)]
pub struct RealLinearMatroid {
    matrix: DenseMatrix,
    weights: Vec<f64>,
}

impl RealLinearMatroid {
    /// Wraps the given matrix; `weights` must have one entry per column
    /// (all 1.0 when `None`).
    pub fn new(matrix: DenseMatrix, weights: Option<Vec<f64>>) -> Result<Self, MatroidError> {
        let weights = match weights {
            Some(weights) => {
                if weights.len() != matrix.num_cols() {
                    return Err(MatroidError::invalid_shape(format!(
                        "weights vector has length {}, expected one weight per column ({})",
                        weights.len(),
                        matrix.num_cols()
                    )));
                }
                weights
            }
            None => vec![1.0; matrix.num_cols()],
        };
        Ok(RealLinearMatroid { matrix, weights })
    }

    /// The sub-matrix formed by the given columns, in ascending index order.
    pub fn sub_matrix(&self, subset: &HashSet<usize>) -> DenseMatrix {
        let mut columns: Vec<usize> = subset.iter().copied().collect();
        columns.sort_unstable();
        self.matrix.column_subset(&columns)
    }
}

impl Matroid for RealLinearMatroid {
    type Element = usize;

    fn ground_set(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.matrix.num_cols())
    }

    fn contains(&self, element: &usize) -> bool {
        *element < self.matrix.num_cols()
    }

    fn is_empty(&self) -> bool {
        self.matrix.num_cols() == 0
    }

    fn is_independent(&self, subset: &HashSet<usize>) -> bool {
        // more vectors than dimensions can never be independent
        if subset.len() > self.matrix.num_rows() {
            return false;
        }
        let mut sub_matrix = self.sub_matrix(subset);
        sub_matrix.gauss_jordan(RANK_TOLERANCE);
        sub_matrix.rank(RANK_TOLERANCE) == subset.len()
    }

    fn get_weight(&self, element: &usize) -> f64 {
        self.weights[*element]
    }
}
