//! Dynamic algorithms that handle only additions or only removals, for
//! matroids whose elements all share the same positive weight.
//!
//! With uniform weights only independence matters, never the order in which
//! elements were tried, which admits much lighter bookkeeping than the
//! general-weight algorithms.

use std::collections::HashSet;
use std::mem;

use log::debug;

use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::algorithms::greedy::maximal_independent_set_uniform_weights;
use crate::error::MatroidError;
use crate::matroid::{Matroid, MutableMatroid};
use crate::set::RandomAccessSet;

use super::DynamicAlgorithm;

/// Addition-only solver for uniformly weighted matroids.
///
/// Since all weights are equal, a newly added element either extends the
/// current solution or changes nothing; existing selections never need to be
/// swapped out.
pub struct UniformAdditionDynamic<M: MutableMatroid> {
    matroid: M,
    current: HashSet<M::Element>,
}

impl<M: MutableMatroid> UniformAdditionDynamic<M> {
    pub fn new(matroid: M) -> Self {
        let current = maximal_independent_set_uniform_weights(&matroid);
        UniformAdditionDynamic { matroid, current }
    }
}

impl<M: MutableMatroid> DynamicAlgorithm<M> for UniformAdditionDynamic<M> {
    fn current(&self) -> &HashSet<M::Element> {
        &self.current
    }

    fn matroid(&self) -> &M {
        &self.matroid
    }

    fn add_element(
        &mut self,
        element: M::Element,
        weight: Option<f64>,
    ) -> Result<&HashSet<M::Element>, MatroidError> {
        self.matroid.add_element(element.clone(), weight)?;

        let seed = mem::take(&mut self.current);
        let mut checker = self.matroid.stateful_checker(seed);
        checker.add_if_independent(element);
        self.current = checker.into_current();
        Ok(&self.current)
    }

    fn remove_element(
        &mut self,
        _element: &M::Element,
    ) -> Result<&HashSet<M::Element>, MatroidError> {
        Err(MatroidError::UnsupportedUpdate {
            algorithm: "UniformAdditionDynamic",
            operation: "element removal",
        })
    }
}

/// Removal-only solver for uniformly weighted matroids.
///
/// Runs a random-pivot greedy: at each step a pivot is drawn uniformly from
/// the current witness set (the elements whose addition would keep the
/// solution independent) and the next witness set is the filtered remainder.
/// Removing a non-pivot only prunes the witness sets; removing the pivot of
/// step k keeps the first k steps and replays the greedy from there.
pub struct UniformRemovalDynamic<M: MutableMatroid> {
    matroid: M,
    /// elements selected for the solution, in selection order
    pivots: Vec<M::Element>,
    /// `witness_sets[i]`: elements still addable after the first i pivots,
    /// minus the pivots drawn from it so far
    witness_sets: Vec<RandomAccessSet<M::Element>>,
    current: HashSet<M::Element>,
    rng: ChaCha12Rng,
}

impl<M: MutableMatroid> UniformRemovalDynamic<M> {
    /// Solver with entropy-seeded pivot choice.
    pub fn new(matroid: M) -> Self {
        Self::with_rng(matroid, ChaCha12Rng::from_entropy())
    }

    /// Reproducible solver: the same seed and removal sequence produce the
    /// same pivots.
    pub fn with_seed(matroid: M, seed: u64) -> Self {
        Self::with_rng(matroid, ChaCha12Rng::seed_from_u64(seed))
    }

    fn with_rng(matroid: M, rng: ChaCha12Rng) -> Self {
        // the first witness set: all elements independent as singletons
        let singletons: RandomAccessSet<M::Element> = matroid
            .ground_set()
            .filter(|x| matroid.is_independent(&HashSet::from([x.clone()])))
            .collect();

        let mut solver = UniformRemovalDynamic {
            matroid,
            pivots: Vec::new(),
            witness_sets: vec![singletons],
            current: HashSet::new(),
            rng,
        };
        solver.rebuild_from(0);
        solver
    }

    /// The solution elements in the order the greedy selected them.
    pub fn pivots(&self) -> &[M::Element] {
        &self.pivots
    }

    /// Reruns the pivot loop from the given step, keeping the pivots and
    /// witness sets of all earlier steps.
    fn rebuild_from(&mut self, step: usize) {
        self.witness_sets.truncate(step + 1);
        self.pivots.truncate(step);

        let seed: HashSet<M::Element> = self.pivots.iter().cloned().collect();
        let mut checker = self.matroid.stateful_checker(seed);

        while !self.witness_sets.last().expect("no witness sets").is_empty() {
            let last = self.witness_sets.len() - 1;
            let pivot = self.witness_sets[last]
                .choice(&mut self.rng)
                .expect("witness set is non-empty")
                .clone();
            self.witness_sets[last].remove(&pivot);
            checker.add_element(pivot.clone());
            self.pivots.push(pivot);

            // candidates for the next step: whatever is left and still fits
            let next: RandomAccessSet<M::Element> = self.witness_sets[last]
                .iter()
                .filter(|&x| checker.would_be_independent_after_adding(x))
                .cloned()
                .collect();
            self.witness_sets.push(next);
        }

        self.current = checker.into_current();
    }
}

impl<M: MutableMatroid> DynamicAlgorithm<M> for UniformRemovalDynamic<M> {
    fn current(&self) -> &HashSet<M::Element> {
        &self.current
    }

    fn matroid(&self) -> &M {
        &self.matroid
    }

    fn add_element(
        &mut self,
        _element: M::Element,
        _weight: Option<f64>,
    ) -> Result<&HashSet<M::Element>, MatroidError> {
        Err(MatroidError::UnsupportedUpdate {
            algorithm: "UniformRemovalDynamic",
            operation: "element addition",
        })
    }

    fn remove_element(
        &mut self,
        element: &M::Element,
    ) -> Result<&HashSet<M::Element>, MatroidError> {
        self.matroid.remove_element(element)?;
        for witness_set in &mut self.witness_sets {
            witness_set.remove(element);
        }

        // a non-pivot never influenced the selection
        if !self.current.contains(element) {
            return Ok(&self.current);
        }

        let step = self
            .pivots
            .iter()
            .position(|pivot| pivot == element)
            .expect("pivot bookkeeping out of sync with the solution");
        debug!("removed pivot of step {}; replaying the greedy from there", step);
        self.rebuild_from(step);
        Ok(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    use crate::matroid::examples::{complete_graph, gnp_random_graph};
    use crate::matroid::{Edge, Matroid, MutableIntUniformMatroid};

    #[test]
    fn addition_solver_grows_the_solution() {
        let mut solver = UniformAdditionDynamic::new(MutableIntUniformMatroid::new(0, 2));
        assert!(solver.current().is_empty());

        assert_eq!(solver.add_element(1, None).unwrap(), &HashSet::from([1]));
        assert_eq!(solver.add_element(2, None).unwrap(), &HashSet::from([1, 2]));
        // rank reached: further additions change nothing
        assert_eq!(solver.add_element(3, None).unwrap(), &HashSet::from([1, 2]));
        assert!(solver.matroid().contains(&3));
    }

    #[test]
    fn addition_solver_on_a_graph() {
        let mut solver = UniformAdditionDynamic::new(complete_graph(3));
        assert_eq!(solver.current().len(), 2);

        // the third triangle edge is dependent, a fresh edge is not
        let current = solver.add_element(Edge::new(3, 4), None).unwrap().clone();
        assert_eq!(current.len(), 3);
        assert!(current.contains(&Edge::new(3, 4)));
    }

    #[test]
    fn removal_solver_on_a_complete_graph() {
        let mut solver = UniformRemovalDynamic::with_seed(complete_graph(4), 99);
        let initial = solver.current().clone();
        assert_eq!(initial.len(), 3);
        assert!(solver.matroid().is_independent(&initial));

        // removing an edge outside the solution keeps it unchanged
        let outside = solver
            .matroid()
            .ground_set()
            .find(|e| !initial.contains(e))
            .unwrap();
        let after = solver.remove_element(&outside).unwrap().clone();
        assert_eq!(after, initial);

        // remove the selected edges one by one; the solution must stay
        // maximal (its size equals the rank of what is left)
        let mut maximal = after;
        while let Some(&to_remove) = maximal.iter().next() {
            maximal = solver.remove_element(&to_remove).unwrap().clone();
            assert!(!maximal.contains(&to_remove));
            assert!(solver.matroid().is_independent(&maximal));
            let reference = maximal_independent_set_uniform_weights(solver.matroid());
            assert_eq!(maximal.len(), reference.len());
            if solver.matroid().is_empty() {
                break;
            }
        }
    }

    #[test]
    fn removal_solver_matches_the_static_reference_on_a_random_graph() {
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        let matroid = gnp_random_graph(12, 0.4, &mut rng);
        let mut order: Vec<Edge<usize>> = matroid.ground_set().collect();
        order.shuffle(&mut rng);

        let mut solver = UniformRemovalDynamic::with_seed(matroid, 11);
        for element in order {
            let result = solver.remove_element(&element).unwrap().clone();
            assert!(!result.contains(&element));
            assert!(solver.matroid().is_independent(&result));

            let reference = maximal_independent_set_uniform_weights(solver.matroid());
            assert_eq!(result.len(), reference.len());
        }
        assert!(solver.current().is_empty());
        assert!(solver.pivots().is_empty());
    }

    #[test]
    fn removal_of_a_mid_sequence_pivot_keeps_the_earlier_steps() {
        let mut solver = UniformRemovalDynamic::with_seed(complete_graph(5), 3);
        let pivots = solver.pivots().to_vec();
        assert_eq!(pivots.len(), 4);

        // remove the second pivot: the first must survive the rebuild
        let first = pivots[0];
        solver.remove_element(&pivots[1]).unwrap();
        assert_eq!(solver.pivots()[0], first);
        assert!(solver.current().contains(&first));
        assert_eq!(solver.current().len(), 4);
    }

    #[test]
    fn pivot_choice_is_deterministic_given_a_seed() {
        let removal_order = || {
            let mut edges: Vec<Edge<usize>> = complete_graph(5).ground_set().collect();
            edges.sort_unstable();
            edges
        };

        let run = || {
            let mut solver = UniformRemovalDynamic::with_seed(complete_graph(5), 42);
            let mut trace = vec![solver.pivots().to_vec()];
            for element in removal_order() {
                solver.remove_element(&element).unwrap();
                trace.push(solver.pivots().to_vec());
            }
            trace
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn removal_solver_rejects_additions() {
        let mut solver = UniformRemovalDynamic::with_seed(MutableIntUniformMatroid::new(4, 2), 5);
        assert!(matches!(
            solver.add_element(9, None),
            Err(MatroidError::UnsupportedUpdate { .. })
        ));
    }

    #[test]
    fn removal_solver_on_a_uniform_matroid() {
        let mut solver = UniformRemovalDynamic::with_seed(MutableIntUniformMatroid::new(5, 3), 21);
        assert_eq!(solver.current().len(), 3);

        for element in 0..5 {
            solver.remove_element(&element).unwrap();
            let expected = solver.matroid().ground_set().count().min(3);
            assert_eq!(solver.current().len(), expected);
        }
        assert!(solver.current().is_empty());
    }
}
