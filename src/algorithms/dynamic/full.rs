//! Dynamic algorithms that handle both additions and removals of elements
//! with arbitrary weights.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use itertools::Itertools;

use crate::algorithms::greedy::maximal_independent_set;
use crate::error::MatroidError;
use crate::list::{NodeId, OrderedUniqueList};
use crate::matroid::{Element, IndependenceChecker, Matroid, MutableMatroid};

use super::DynamicAlgorithm;

/// The baseline: rerun the static greedy algorithm after every update.
///
/// Always correct; every update costs a full greedy pass.
pub struct RestartGreedy<M: MutableMatroid> {
    matroid: M,
    current: HashSet<M::Element>,
}

impl<M: MutableMatroid> RestartGreedy<M> {
    pub fn new(matroid: M) -> Self {
        let current = maximal_independent_set(&matroid);
        RestartGreedy { matroid, current }
    }
}

impl<M: MutableMatroid> DynamicAlgorithm<M> for RestartGreedy<M> {
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
        self.matroid.add_element(element, weight)?;
        self.current = maximal_independent_set(&self.matroid);
        Ok(&self.current)
    }

    fn remove_element(
        &mut self,
        element: &M::Element,
    ) -> Result<&HashSet<M::Element>, MatroidError> {
        self.matroid.remove_element(element)?;
        self.current = maximal_independent_set(&self.matroid);
        Ok(&self.current)
    }
}

/// Incremental greedy that remembers its previous run.
///
/// All elements of non-negative weight are held in a linked list in
/// descending order of weight, with a boolean indicator per element
/// recording whether the last greedy pass selected it. An update replays
/// the prefix of the list that is unaffected (by re-adding the
/// indicator-true elements to a fresh checker) and reruns the greedy pass
/// only from the updated position onwards.
pub struct NaiveDynamic<M: MutableMatroid> {
    matroid: M,
    /// non-negative-weight elements in descending order of weight
    elements: OrderedUniqueList<M::Element>,
    /// greedy selection flag for each element of `elements`
    indicators: HashMap<M::Element, bool>,
    current: HashSet<M::Element>,
}

/// Runs the greedy pass over the list from `start` onwards, recording each
/// element's selection flag in `indicators`.
fn continue_greedy<E: Element, C: IndependenceChecker<E> + ?Sized>(
    checker: &mut C,
    elements: &OrderedUniqueList<E>,
    indicators: &mut HashMap<E, bool>,
    start: Option<NodeId>,
) {
    for element in elements.iter_from(start) {
        let added = checker.add_if_independent(element.clone());
        indicators.insert(element.clone(), added);
    }
}

impl<M: MutableMatroid> NaiveDynamic<M> {
    pub fn new(matroid: M) -> Self {
        let elements: OrderedUniqueList<M::Element> = matroid
            .ground_set()
            .filter(|e| matroid.get_weight(e) >= 0.0)
            .sorted_by(|a, b| matroid.get_weight(b).total_cmp(&matroid.get_weight(a)))
            .collect();

        let mut indicators = HashMap::new();
        let mut checker = matroid.stateful_checker(HashSet::new());
        continue_greedy(
            checker.as_mut(),
            &elements,
            &mut indicators,
            elements.first(),
        );
        let current = checker.into_current();

        NaiveDynamic {
            matroid,
            elements,
            indicators,
            current,
        }
    }
}

impl<M: MutableMatroid> DynamicAlgorithm<M> for NaiveDynamic<M> {
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
        if self.matroid.contains(&element) {
            return match weight {
                Some(weight) if self.matroid.get_weight(&element) != weight => {
                    // weight update: easiest is to delete and then re-add
                    debug!("updating weight of {:?} to {}", element, weight);
                    self.remove_element(&element)?;
                    self.add_element(element, Some(weight))
                }
                // already present and the weight doesn't change
                _ => Ok(&self.current),
            };
        }

        self.matroid.add_element(element.clone(), weight)?;
        let weight = self.matroid.get_weight(&element);
        if weight < 0.0 {
            // never enters the ordered list nor the solution
            return Ok(&self.current);
        }

        // replay the greedy prefix of elements at least as heavy as the
        // newcomer; the cursor ends up at its sorted position
        let mut checker = self.matroid.stateful_checker(HashSet::new());
        let mut cursor = self.elements.first();
        while let Some(node) = cursor {
            let value = self.elements.value(node);
            if self.matroid.get_weight(value) < weight {
                break;
            }
            if self.indicators[value] {
                checker.add_element(value.clone());
            }
            cursor = self.elements.next(node);
        }

        let node = self.elements.insert_before(cursor, element.clone());
        self.indicators.insert(element.clone(), false);

        if !checker.would_be_independent_after_adding(&element) {
            // the newcomer doesn't fit, so nothing downstream changes either
            trace!("{:?} does not extend the replayed prefix", element);
            return Ok(&self.current);
        }
        checker.add_element(element.clone());
        self.indicators.insert(element, true);

        // the new element may evict lighter ones; rerun greedy downstream
        let start = self.elements.next(node);
        continue_greedy(checker.as_mut(), &self.elements, &mut self.indicators, start);
        self.current = checker.into_current();
        Ok(&self.current)
    }

    fn remove_element(
        &mut self,
        element: &M::Element,
    ) -> Result<&HashSet<M::Element>, MatroidError> {
        self.matroid.remove_element(element)?;

        if !self.current.contains(element) {
            // unselected elements don't influence the greedy state
            self.elements.remove(element);
            self.indicators.remove(element);
            return Ok(&self.current);
        }

        // replay the greedy prefix strictly before the removed element; that
        // part of the run cannot have depended on it
        let mut checker = self.matroid.stateful_checker(HashSet::new());
        let mut cursor = self.elements.first();
        while let Some(node) = cursor {
            let value = self.elements.value(node);
            if value == element {
                break;
            }
            if self.indicators[value] {
                checker.add_element(value.clone());
            }
            cursor = self.elements.next(node);
        }

        debug!("removed selected element {:?}; resuming greedy", element);
        let start = cursor.and_then(|node| self.elements.next(node));
        self.elements.remove(element);
        self.indicators.remove(element);

        continue_greedy(checker.as_mut(), &self.elements, &mut self.indicators, start);
        self.current = checker.into_current();
        Ok(&self.current)
    }
}
