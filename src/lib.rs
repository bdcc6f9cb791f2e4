//! This is a library for computing and maintaining maximum-weight
//! independent sets (MWIS) of matroids.
//!
//! Matroids are exposed through the [`matroid::Matroid`] trait, an
//! independence oracle with incremental refinements that concrete matroids
//! can specialise (the graphical matroid, for instance, answers incremental
//! queries through a union-find over the nodes). Three matroid kinds ship
//! with the crate: graphical, linear over the reals and uniform.
//!
//! # Examples
//!
//! The static greedy algorithm on a weighted linear matroid:
//! ```
//! use matroid_mis::algorithms::maximal_independent_set;
//! use matroid_mis::matrix::DenseMatrix;
//! use matroid_mis::matroid::RealLinearMatroid;
//! use std::collections::HashSet;
//!
//! let matrix = DenseMatrix::from_rows(&[
//!     &[1.0, 1.0, 0.0],
//!     &[0.0, 0.0, 1.0],
//! ]).unwrap();
//! let matroid = RealLinearMatroid::new(matrix, Some(vec![2.0, 3.0, 1.0])).unwrap();
//!
//! assert_eq!(maximal_independent_set(&matroid), HashSet::from([1, 2]));
//! ```
//!
//! Maintaining the MWIS of a graphical matroid under updates:
//! ```
//! use matroid_mis::algorithms::{DynamicAlgorithm, DynamicSolver};
//! use matroid_mis::matroid::{Edge, GraphicalMatroid};
//!
//! let graph: GraphicalMatroid<u32> = GraphicalMatroid::new();
//! let mut solver = DynamicSolver::naive(graph);
//!
//! solver.add_element(Edge::new(0, 1), None).unwrap();
//! solver.add_element(Edge::new(1, 2), Some(2.5)).unwrap();
//! solver.add_element(Edge::new(0, 2), None).unwrap();
//! // the triangle closes: only two of its edges fit in a forest
//! assert_eq!(solver.current().len(), 2);
//!
//! solver.remove_element(&Edge::new(1, 2)).unwrap();
//! assert_eq!(solver.current().len(), 2);
//! ```
//!
//! Removal-only maintenance under uniform weights, with reproducible random
//! pivots:
//! ```
//! use matroid_mis::algorithms::{DynamicAlgorithm, DynamicSolver};
//! use matroid_mis::matroid::MutableIntUniformMatroid;
//!
//! let matroid = MutableIntUniformMatroid::new(6, 3);
//! let mut solver = DynamicSolver::uniform_removal_with_seed(matroid, 7);
//! assert_eq!(solver.current().len(), 3);
//!
//! solver.remove_element(&2).unwrap();
//! assert_eq!(solver.current().len(), 3);
//! ```

extern crate itertools;
extern crate rand;
extern crate thiserror;

pub mod algorithms;
pub mod error;
pub mod list;
pub mod matrix;
pub mod matroid;
pub mod set;
pub mod union_find;
