use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::MatroidError;

/// Bound for ground-set elements: cheap to clone, hashable, printable in
/// error messages. Blanket-implemented, so any such type qualifies.
pub trait Element: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Element for T {}

/// A weighted matroid.
///
/// A matroid is a pair (E, I) where E is a finite ground set and I is a
/// family of "independent" subsets of E such that
///   * every subset of an independent set is independent, and
///   * if X, Y are independent with |X| < |Y|, some y in Y \ X keeps
///     X ∪ {y} independent (the augmentation axiom).
///
/// The family I is never materialised; it is exposed through the
/// [`Matroid::is_independent`] oracle and its incremental refinements. Each
/// element additionally carries a real weight (1.0 unless overridden).
pub trait Matroid {
    type Element: Element;

    /// The elements of the ground set E. No iteration order is guaranteed.
    fn ground_set(&self) -> Box<dyn Iterator<Item = Self::Element> + '_>;

    /// Whether the given element is in the ground set.
    fn contains(&self, element: &Self::Element) -> bool {
        self.ground_set().any(|e| &e == element)
    }

    /// Whether the ground set is empty.
    fn is_empty(&self) -> bool {
        self.ground_set().next().is_none()
    }

    /// Membership oracle for the family of independent sets.
    ///
    /// Behaviour is undefined if `subset` contains elements outside the
    /// ground set.
    fn is_independent(&self, subset: &HashSet<Self::Element>) -> bool;

    /// Independence test for a set of the form S ∪ {e}.
    ///
    /// Preconditions (not checked): `independent_subset` is independent and
    /// does not contain `new_element`. The default implementation falls back
    /// on the bulk oracle; concrete matroids may know a faster answer.
    fn is_independent_incremental(
        &self,
        independent_subset: &HashSet<Self::Element>,
        new_element: &Self::Element,
    ) -> bool {
        let mut extended = independent_subset.clone();
        extended.insert(new_element.clone());
        self.is_independent(&extended)
    }

    /// The weight of an element; 1.0 unless the matroid stores weights.
    fn get_weight(&self, _element: &Self::Element) -> f64 {
        1.0
    }

    /// Sum of the weights of the given elements.
    fn total_weight<'a, I>(&self, subset: I) -> f64
    where
        I: IntoIterator<Item = &'a Self::Element>,
        Self::Element: 'a,
    {
        subset.into_iter().map(|e| self.get_weight(e)).sum()
    }

    /// Creates a stateful incremental independence checker seeded with the
    /// given subset, which must be independent.
    ///
    /// The checker takes ownership of the seed, grows it one element at a
    /// time while keeping it independent, and hands it back through
    /// [`IndependenceChecker::into_current`]. The matroid must not be
    /// mutated while the checker is alive.
    ///
    /// The default checker answers queries with
    /// [`Matroid::is_independent_incremental`]; concrete matroids override
    /// this method when they can maintain cheaper auxiliary state (see the
    /// union-find checker of the graphical matroid).
    fn stateful_checker(
        &self,
        seed: HashSet<Self::Element>,
    ) -> Box<dyn IndependenceChecker<Self::Element> + '_>
    where
        Self: Sized,
    {
        Box::new(FallbackChecker {
            matroid: self,
            subset: seed,
        })
    }
}

/// Incremental independence oracle around a growing independent subset.
///
/// Invariant: the tracked subset is independent at all times; any auxiliary
/// state stays consistent with it.
pub trait IndependenceChecker<E: Element> {
    /// The independent subset tracked so far.
    fn current(&self) -> &HashSet<E>;

    /// Whether the subset would stay independent after adding `element`.
    ///
    /// Precondition: `element` is not already in the subset. Does not modify
    /// the subset; use [`IndependenceChecker::add_element`] for that.
    fn would_be_independent_after_adding(&self, element: &E) -> bool;

    /// Adds an element to the subset.
    ///
    /// Precondition: the subset stays independent, e.g. because
    /// [`IndependenceChecker::would_be_independent_after_adding`] just
    /// returned `true`.
    fn add_element(&mut self, element: E);

    /// Adds the element if that keeps the subset independent; returns
    /// whether it was added.
    fn add_if_independent(&mut self, element: E) -> bool {
        if self.would_be_independent_after_adding(&element) {
            self.add_element(element);
            true
        } else {
            false
        }
    }

    /// Consumes the checker and returns the tracked subset.
    fn into_current(self: Box<Self>) -> HashSet<E>;
}

/// Default checker: no auxiliary state, every query goes through the
/// matroid's incremental oracle.
struct FallbackChecker<'a, M: Matroid> {
    matroid: &'a M,
    subset: HashSet<M::Element>,
}

impl<'a, M: Matroid> IndependenceChecker<M::Element> for FallbackChecker<'a, M> {
    fn current(&self) -> &HashSet<M::Element> {
        &self.subset
    }

    fn would_be_independent_after_adding(&self, element: &M::Element) -> bool {
        self.matroid
            .is_independent_incremental(&self.subset, element)
    }

    fn add_element(&mut self, element: M::Element) {
        debug_assert!(self.would_be_independent_after_adding(&element));
        self.subset.insert(element);
    }

    fn into_current(self: Box<Self>) -> HashSet<M::Element> {
        self.subset
    }
}

/// A matroid whose ground set can change.
pub trait MutableMatroid: Matroid {
    /// Adds an element to the ground set.
    ///
    /// Idempotent on the ground set: if the element is already present the
    /// ground set is unchanged, but a given weight still replaces the stored
    /// one. An absent weight leaves an existing element's weight untouched
    /// and gives a new element the default of 1.0.
    fn add_element(
        &mut self,
        element: Self::Element,
        weight: Option<f64>,
    ) -> Result<(), MatroidError>;

    /// Removes an element from the ground set (and implicitly from every
    /// independent set containing it).
    ///
    /// Returns [`MatroidError::NotInGroundSet`] if the element is absent;
    /// the matroid is left unchanged in that case. Checkers whose subset
    /// contained the element are invalidated by a successful removal.
    fn remove_element(&mut self, element: &Self::Element) -> Result<(), MatroidError>;
}
