//! Algorithms that maintain a maximum-weight independent set while elements
//! are added to and removed from the matroid.

use std::collections::HashSet;

use crate::error::MatroidError;
use crate::matroid::MutableMatroid;

mod full;
mod partial;

pub use full::{NaiveDynamic, RestartGreedy};
pub use partial::{UniformAdditionDynamic, UniformRemovalDynamic};

/// Interface of the dynamic maximum-weight independent set algorithms.
///
/// A solver owns its matroid: all mutations go through
/// [`DynamicAlgorithm::add_element`] and [`DynamicAlgorithm::remove_element`]
/// so that the cached solution and the auxiliary bookkeeping can never drift
/// from the ground set. After any sequence of updates,
/// [`DynamicAlgorithm::current`] is a maximum-weight independent set of the
/// matroid as mutated so far.
pub trait DynamicAlgorithm<M: MutableMatroid> {
    /// The current maximum-weight independent set, without recomputation.
    fn current(&self) -> &HashSet<M::Element>;

    /// Read access to the maintained matroid.
    fn matroid(&self) -> &M;

    /// Adds an element (with an optional weight) to the matroid and returns
    /// the new maximum-weight independent set.
    ///
    /// If the element is already in the matroid its weight is updated to the
    /// given value, if any.
    fn add_element(
        &mut self,
        element: M::Element,
        weight: Option<f64>,
    ) -> Result<&HashSet<M::Element>, MatroidError>;

    /// Removes an element from the matroid and returns the new maximum-weight
    /// independent set.
    fn remove_element(&mut self, element: &M::Element)
        -> Result<&HashSet<M::Element>, MatroidError>;
}

/// Unified facade over the dynamic algorithms, selected at construction.
///
/// The partial algorithms keep their restrictions: an update kind they do
/// not support surfaces as [`MatroidError::UnsupportedUpdate`].
pub enum DynamicSolver<M: MutableMatroid> {
    RestartGreedy(RestartGreedy<M>),
    Naive(NaiveDynamic<M>),
    UniformAddition(UniformAdditionDynamic<M>),
    UniformRemoval(UniformRemovalDynamic<M>),
}

impl<M: MutableMatroid> DynamicSolver<M> {
    /// Baseline: rerun the static greedy algorithm after every update.
    pub fn restart_greedy(matroid: M) -> Self {
        DynamicSolver::RestartGreedy(RestartGreedy::new(matroid))
    }

    /// Incremental greedy over a weight-ordered element list; supports both
    /// additions and removals with arbitrary weights.
    pub fn naive(matroid: M) -> Self {
        DynamicSolver::Naive(NaiveDynamic::new(matroid))
    }

    /// Addition-only solver for uniformly weighted matroids.
    pub fn uniform_addition(matroid: M) -> Self {
        DynamicSolver::UniformAddition(UniformAdditionDynamic::new(matroid))
    }

    /// Removal-only solver for uniformly weighted matroids, with pivots
    /// chosen by an entropy-seeded RNG.
    pub fn uniform_removal(matroid: M) -> Self {
        DynamicSolver::UniformRemoval(UniformRemovalDynamic::new(matroid))
    }

    /// As [`DynamicSolver::uniform_removal`], but reproducible: the same
    /// seed and update sequence yield the same pivots.
    pub fn uniform_removal_with_seed(matroid: M, seed: u64) -> Self {
        DynamicSolver::UniformRemoval(UniformRemovalDynamic::with_seed(matroid, seed))
    }
}

impl<M: MutableMatroid> DynamicAlgorithm<M> for DynamicSolver<M> {
    fn current(&self) -> &HashSet<M::Element> {
        match self {
            DynamicSolver::RestartGreedy(solver) => solver.current(),
            DynamicSolver::Naive(solver) => solver.current(),
            DynamicSolver::UniformAddition(solver) => solver.current(),
            DynamicSolver::UniformRemoval(solver) => solver.current(),
        }
    }

    fn matroid(&self) -> &M {
        match self {
            DynamicSolver::RestartGreedy(solver) => solver.matroid(),
            DynamicSolver::Naive(solver) => solver.matroid(),
            DynamicSolver::UniformAddition(solver) => solver.matroid(),
            DynamicSolver::UniformRemoval(solver) => solver.matroid(),
        }
    }

    fn add_element(
        &mut self,
        element: M::Element,
        weight: Option<f64>,
    ) -> Result<&HashSet<M::Element>, MatroidError> {
        match self {
            DynamicSolver::RestartGreedy(solver) => solver.add_element(element, weight),
            DynamicSolver::Naive(solver) => solver.add_element(element, weight),
            DynamicSolver::UniformAddition(solver) => solver.add_element(element, weight),
            DynamicSolver::UniformRemoval(solver) => solver.add_element(element, weight),
        }
    }

    fn remove_element(
        &mut self,
        element: &M::Element,
    ) -> Result<&HashSet<M::Element>, MatroidError> {
        match self {
            DynamicSolver::RestartGreedy(solver) => solver.remove_element(element),
            DynamicSolver::Naive(solver) => solver.remove_element(element),
            DynamicSolver::UniformAddition(solver) => solver.remove_element(element),
            DynamicSolver::UniformRemoval(solver) => solver.remove_element(element),
        }
    }
}
