use std::fmt::Display;
use std::ops::{Index, IndexMut};

use crate::error::MatroidError;

/// A dense real matrix in row-major storage.
///
/// Just enough linear algebra for rank queries over column subsets: Gauss-
/// Jordan elimination with partial pivoting, where entries whose magnitude
/// falls at or below a caller-supplied tolerance are treated as exact zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Box<[f64]>,
}

impl DenseMatrix {
    /// Creates a matrix of the given size, filled with zeros.
    pub fn new(rows: usize, cols: usize) -> Self {
        DenseMatrix {
            rows,
            cols,
            data: vec![0.0; rows * cols].into_boxed_slice(),
        }
    }

    /// Builds a matrix from row slices; the rows must all have equal length.
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self, MatroidError> {
        let nrows = rows.len();
        let cols = rows.first().map_or(0, |row| row.len());
        let mut a = Self::new(nrows, cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatroidError::invalid_shape(format!(
                    "row {} has length {}, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            for (j, &x) in row.iter().enumerate() {
                a[(i, j)] = x;
            }
        }
        Ok(a)
    }

    /// Builds a matrix from column slices; the columns must all have equal
    /// length.
    pub fn from_columns(columns: &[&[f64]]) -> Result<Self, MatroidError> {
        let ncols = columns.len();
        let rows = columns.first().map_or(0, |col| col.len());
        let mut a = Self::new(rows, ncols);
        for (j, col) in columns.iter().enumerate() {
            if col.len() != rows {
                return Err(MatroidError::invalid_shape(format!(
                    "column {} has length {}, expected {}",
                    j,
                    col.len(),
                    rows
                )));
            }
            for (i, &x) in col.iter().enumerate() {
                a[(i, j)] = x;
            }
        }
        Ok(a)
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Creates a matrix from the specified columns, deduplicated and in
    /// ascending order.
    pub fn column_subset(&self, columns: &[usize]) -> Self {
        let mut cols = Vec::from(columns);
        cols.sort_unstable();
        cols.dedup();
        let mut a = Self::new(self.rows, cols.len());
        for i in 0..self.rows {
            for (j, &c) in cols.iter().enumerate() {
                a[(i, j)] = self[(i, c)];
            }
        }
        a
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }

    /// Reduces the matrix in place to reduced row echelon form.
    ///
    /// Partial pivoting: each step picks the remaining row with the largest
    /// magnitude in the pivot column. A column whose candidates are all of
    /// magnitude <= `tolerance` counts as a zero column and is zeroed out.
    pub fn gauss_jordan(&mut self, tolerance: f64) {
        let mut i = 0;
        let mut j = 0;
        while i < self.rows && j < self.cols {
            let mut k = i;
            for r in (i + 1)..self.rows {
                if self[(r, j)].abs() > self[(k, j)].abs() {
                    k = r;
                }
            }
            if self[(k, j)].abs() <= tolerance {
                for r in i..self.rows {
                    self[(r, j)] = 0.0;
                }
                j += 1;
                continue;
            }
            self.swap_rows(i, k);

            let pivot = self[(i, j)];
            for c in j..self.cols {
                self[(i, c)] /= pivot;
            }
            for r in 0..self.rows {
                if r != i {
                    let factor = self[(r, j)];
                    if factor != 0.0 {
                        for c in j..self.cols {
                            let x = self[(i, c)];
                            self[(r, c)] -= factor * x;
                        }
                    }
                }
            }
            i += 1;
            j += 1;
        }
    }

    /// The rank of the matrix, which HAS to be in row echelon form already
    /// (see [`DenseMatrix::gauss_jordan`]). Rows whose entries are all of
    /// magnitude <= `tolerance` count as zero rows.
    pub fn rank(&self, tolerance: f64) -> usize {
        let mut r = 0;
        for i in 0..self.rows {
            let zero = (0..self.cols).all(|j| self[(i, j)].abs() <= tolerance);
            if zero {
                break;
            }
            r += 1;
        }
        r
    }
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.cols + j]
    }
}

impl Display for DenseMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{} ", self[(i, j)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn gauss_jordan_reduces() {
        let mut a =
            DenseMatrix::from_columns(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]])
                .unwrap();
        a.gauss_jordan(TOL);
        let expected =
            DenseMatrix::from_rows(&[&[1.0, 0.0, -1.0], &[0.0, 1.0, 2.0], &[0.0, 0.0, 0.0]])
                .unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert!((a[(i, j)] - expected[(i, j)]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn rank_of_singular_matrix() {
        let mut a =
            DenseMatrix::from_columns(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]])
                .unwrap();
        a.gauss_jordan(TOL);
        assert_eq!(a.rank(TOL), 2);
    }

    #[test]
    fn rank_of_full_rank_matrix() {
        let mut a = DenseMatrix::from_columns(&[
            &[0.0, 0.0, 1.0],
            &[0.0, 1.0, 0.0],
            &[0.0, 1.0, 1.0],
            &[1.0, 0.0, 0.0],
            &[1.0, 0.0, 1.0],
            &[1.0, 1.0, 0.0],
            &[1.0, 1.0, 1.0],
        ])
        .unwrap();
        a.gauss_jordan(TOL);
        assert_eq!(a.rank(TOL), 3);
    }

    #[test]
    fn near_zero_column_is_treated_as_dependent() {
        let mut a = DenseMatrix::from_columns(&[&[1.0, 0.0], &[1.0 + 1e-12, 1e-12]]).unwrap();
        a.gauss_jordan(TOL);
        assert_eq!(a.rank(TOL), 1);
    }

    #[test]
    fn column_subset_sorts_and_deduplicates() {
        let a = DenseMatrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
        let b = a.column_subset(&[2, 0, 2]);
        assert_eq!(b.num_cols(), 2);
        assert_eq!(b[(0, 0)], 1.0);
        assert_eq!(b[(1, 1)], 6.0);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let result = DenseMatrix::from_rows(&[&[1.0, 2.0][..], &[3.0][..]]);
        assert!(matches!(result, Err(MatroidError::InvalidShape { .. })));
    }
}
