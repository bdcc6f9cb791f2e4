//! The greedy algorithm for computing a maximum-weight independent set.

use std::collections::HashSet;

use itertools::Itertools;

use crate::matroid::Matroid;

/// Computes a maximum-weight independent set of the given matroid.
///
/// Elements of negative weight are discarded (they can never increase the
/// total weight); the rest are tried in descending order of weight through a
/// stateful independence checker. For matroids this greedy strategy is
/// exact. Ties are broken by the ground set's iteration order, which is
/// arbitrary but fixed within a run.
pub fn maximal_independent_set<M: Matroid>(matroid: &M) -> HashSet<M::Element> {
    let elements = matroid
        .ground_set()
        .filter(|e| matroid.get_weight(e) >= 0.0)
        .sorted_by(|a, b| matroid.get_weight(b).total_cmp(&matroid.get_weight(a)));

    let mut checker = matroid.stateful_checker(HashSet::new());
    for element in elements {
        checker.add_if_independent(element);
    }
    checker.into_current()
}

/// As [`maximal_independent_set`], assuming all elements share the same
/// positive weight: only independence matters, so the sort is skipped.
pub fn maximal_independent_set_uniform_weights<M: Matroid>(matroid: &M) -> HashSet<M::Element> {
    let elements: Vec<M::Element> = matroid.ground_set().collect();
    let mut checker = matroid.stateful_checker(HashSet::new());
    for element in elements {
        checker.add_if_independent(element);
    }
    checker.into_current()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use crate::matrix::DenseMatrix;
    use crate::matroid::examples::complete_graph;
    use crate::matroid::{Edge, IntUniformMatroid, RealLinearMatroid};

    /// Reference implementation: enumerate every subset. Exponential; only
    /// for tiny matroids.
    fn brute_force_best_weight<M: Matroid>(matroid: &M) -> f64 {
        let elements: Vec<M::Element> = matroid.ground_set().collect();
        assert!(elements.len() <= 16);
        let mut best = 0.0f64;
        for mask in 0..(1usize << elements.len()) {
            let subset: HashSet<M::Element> = elements
                .iter()
                .enumerate()
                .filter(|(i, _)| mask >> i & 1 == 1)
                .map(|(_, e)| e.clone())
                .collect();
            if matroid.is_independent(&subset) {
                best = best.max(matroid.total_weight(&subset));
            }
        }
        best
    }

    #[test]
    fn linear_matroid_with_weights() {
        let matrix = DenseMatrix::from_rows(&[
            &[1.0, 1.0, 0.0],
            &[0.0, 0.0, 1.0],
            &[0.0, 0.0, 0.0],
        ])
        .unwrap();
        let matroid = RealLinearMatroid::new(matrix, Some(vec![2.0, 3.0, 1.0])).unwrap();

        // columns 0 and 1 are parallel; the heavier one wins
        assert_eq!(maximal_independent_set(&matroid), HashSet::from([1, 2]));
    }

    #[test]
    fn linear_matroid_with_uniform_weights() {
        let matrix = DenseMatrix::from_rows(&[
            &[0.0, 1.0, 0.0],
            &[0.0, 0.0, 1.0],
            &[0.0, 0.0, 0.0],
        ])
        .unwrap();
        let matroid = RealLinearMatroid::new(matrix, None).unwrap();

        assert_eq!(
            maximal_independent_set_uniform_weights(&matroid),
            HashSet::from([1, 2])
        );
    }

    #[test]
    fn negative_weights_are_ignored() {
        let matroid = IntUniformMatroid::with_weights(
            3,
            3,
            HashMap::from([(0, 1.0), (1, 1.0), (2, -2.0)]),
        )
        .unwrap();

        assert_eq!(maximal_independent_set(&matroid), HashSet::from([0, 1]));
    }

    #[test]
    fn spanning_forest_of_a_complete_graph() {
        let matroid = complete_graph(5);
        let result = maximal_independent_set_uniform_weights(&matroid);
        // a spanning tree of K_5
        assert_eq!(result.len(), 4);
        assert!(matroid.is_independent(&result));
    }

    #[test]
    fn greedy_matches_brute_force_on_small_matroids() {
        let mut matroid = complete_graph(4);
        matroid.set_weight(Edge::new(0, 1), 2.0).unwrap();
        matroid.set_weight(Edge::new(2, 3), 4.5).unwrap();
        matroid.set_weight(Edge::new(1, 2), -1.0).unwrap();

        let result = maximal_independent_set(&matroid);
        assert!(matroid.is_independent(&result));
        assert_eq!(matroid.total_weight(&result), brute_force_best_weight(&matroid));

        let uniform = IntUniformMatroid::with_weights(
            6,
            3,
            HashMap::from([(0, 0.5), (3, 2.0), (5, -0.5)]),
        )
        .unwrap();
        let result = maximal_independent_set(&uniform);
        assert_eq!(
            uniform.total_weight(&result),
            brute_force_best_weight(&uniform)
        );
    }
}
