use std::collections::{BTreeSet, HashMap, HashSet};

use crate::error::MatroidError;
use crate::matroid::{Matroid, MutableMatroid};

fn validate_weight_keys(
    weights: &HashMap<usize, f64>,
    size: usize,
) -> Result<(), MatroidError> {
    match weights.keys().find(|&&e| e >= size) {
        Some(&key) => Err(MatroidError::invalid_shape(format!(
            "weight override for element {} outside ground set of size {}",
            key, size
        ))),
        None => Ok(()),
    }
}

/// The uniform matroid U(rank, size) on the ground set {0, ..., size - 1}:
/// a subset is independent iff it has at most `rank` elements.
///
/// Weights default to 1.0 and can be overridden per element.
#[derive(Debug, Clone)]
pub struct IntUniformMatroid {
    size: usize,
    rank: usize,
    weights: HashMap<usize, f64>,
}

impl IntUniformMatroid {
    pub fn new(size: usize, rank: usize) -> Result<Self, MatroidError> {
        Self::with_weights(size, rank, HashMap::new())
    }

    /// As [`IntUniformMatroid::new`], with weight overrides for some
    /// elements (every key must lie in the ground set).
    pub fn with_weights(
        size: usize,
        rank: usize,
        weights: HashMap<usize, f64>,
    ) -> Result<Self, MatroidError> {
        if rank > size {
            return Err(MatroidError::invalid_shape(format!(
                "rank {} exceeds ground set size {}",
                rank, size
            )));
        }
        validate_weight_keys(&weights, size)?;
        Ok(IntUniformMatroid {
            size,
            rank,
            weights,
        })
    }

    /// The free matroid of the given size: every subset is independent.
    pub fn free(size: usize) -> Self {
        IntUniformMatroid {
            size,
            rank: size,
            weights: HashMap::new(),
        }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }
}

impl Matroid for IntUniformMatroid {
    type Element = usize;

    fn ground_set(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.size)
    }

    fn contains(&self, element: &usize) -> bool {
        *element < self.size
    }

    fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn is_independent(&self, subset: &HashSet<usize>) -> bool {
        subset.len() <= self.rank
    }

    fn is_independent_incremental(
        &self,
        independent_subset: &HashSet<usize>,
        _new_element: &usize,
    ) -> bool {
        independent_subset.len() < self.rank
    }

    fn get_weight(&self, element: &usize) -> f64 {
        self.weights.get(element).copied().unwrap_or(1.0)
    }
}

/// A uniform matroid with an explicit, mutable ground set of integers.
///
/// The rank is fixed at construction and preserved across mutations, so the
/// ground set may temporarily be smaller than the rank (e.g. when starting
/// from an empty matroid and adding elements one by one). The element set is
/// ordered so that ground-set iteration is reproducible across runs.
#[derive(Debug, Clone)]
pub struct MutableIntUniformMatroid {
    elements: BTreeSet<usize>,
    rank: usize,
    weights: HashMap<usize, f64>,
}

impl MutableIntUniformMatroid {
    /// Ground set {0, ..., size - 1} with the given rank.
    pub fn new(size: usize, rank: usize) -> Self {
        MutableIntUniformMatroid {
            elements: (0..size).collect(),
            rank,
            weights: HashMap::new(),
        }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }
}

impl Matroid for MutableIntUniformMatroid {
    type Element = usize;

    fn ground_set(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.elements.iter().copied())
    }

    fn contains(&self, element: &usize) -> bool {
        self.elements.contains(element)
    }

    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn is_independent(&self, subset: &HashSet<usize>) -> bool {
        subset.len() <= self.rank
    }

    fn is_independent_incremental(
        &self,
        independent_subset: &HashSet<usize>,
        _new_element: &usize,
    ) -> bool {
        independent_subset.len() < self.rank
    }

    fn get_weight(&self, element: &usize) -> f64 {
        self.weights.get(element).copied().unwrap_or(1.0)
    }
}

impl MutableMatroid for MutableIntUniformMatroid {
    fn add_element(&mut self, element: usize, weight: Option<f64>) -> Result<(), MatroidError> {
        self.elements.insert(element);
        if let Some(weight) = weight {
            self.weights.insert(element, weight);
        }
        Ok(())
    }

    fn remove_element(&mut self, element: &usize) -> Result<(), MatroidError> {
        if !self.elements.remove(element) {
            return Err(MatroidError::not_in_ground_set(element));
        }
        self.weights.remove(element);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_larger_than_size_is_rejected() {
        assert!(matches!(
            IntUniformMatroid::new(3, 4),
            Err(MatroidError::InvalidShape { .. })
        ));
    }

    #[test]
    fn weight_override_outside_ground_set_is_rejected() {
        let weights = HashMap::from([(7, 2.0)]);
        assert!(matches!(
            IntUniformMatroid::with_weights(3, 2, weights),
            Err(MatroidError::InvalidShape { .. })
        ));
    }

    #[test]
    fn independence_is_a_cardinality_test() {
        let matroid = IntUniformMatroid::new(6, 3).unwrap();
        assert!(matroid.is_independent(&HashSet::from([0, 2, 4])));
        assert!(!matroid.is_independent(&HashSet::from([0, 1, 2, 3])));
        assert!(matroid.is_independent(&HashSet::new()));
    }

    #[test]
    fn free_matroid_has_full_rank() {
        let matroid = IntUniformMatroid::free(4);
        let everything: HashSet<usize> = matroid.ground_set().collect();
        assert!(matroid.is_independent(&everything));
    }

    #[test]
    fn weights_default_to_unit() {
        let matroid =
            IntUniformMatroid::with_weights(3, 3, HashMap::from([(2, -2.0)])).unwrap();
        assert_eq!(matroid.get_weight(&0), 1.0);
        assert_eq!(matroid.get_weight(&2), -2.0);
    }

    #[test]
    fn mutable_matroid_can_start_empty() {
        let mut matroid = MutableIntUniformMatroid::new(0, 3);
        assert!(matroid.is_empty());

        matroid.add_element(5, None).unwrap();
        matroid.add_element(9, Some(2.5)).unwrap();
        assert!(matroid.contains(&5));
        assert_eq!(matroid.get_weight(&5), 1.0);
        assert_eq!(matroid.get_weight(&9), 2.5);
        assert_eq!(matroid.rank(), 3);
    }

    #[test]
    fn re_adding_without_weight_keeps_the_old_weight() {
        let mut matroid = MutableIntUniformMatroid::new(0, 2);
        matroid.add_element(1, Some(3.0)).unwrap();
        matroid.add_element(1, None).unwrap();
        assert_eq!(matroid.get_weight(&1), 3.0);

        matroid.add_element(1, Some(-1.0)).unwrap();
        assert_eq!(matroid.get_weight(&1), -1.0);
    }

    #[test]
    fn removing_an_absent_element_fails() {
        let mut matroid = MutableIntUniformMatroid::new(2, 2);
        assert!(matches!(
            matroid.remove_element(&5),
            Err(MatroidError::NotInGroundSet { .. })
        ));
        matroid.remove_element(&1).unwrap();
        assert!(!matroid.contains(&1));
    }
}
