use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;

/// A mutable set with O(1) membership, insertion, removal by value and
/// uniform random selection.
///
/// The elements are kept in a vector with a parallel value-to-index map;
/// removal swaps the victim with the last element so no shifting is needed.
/// Iteration order is the insertion order, perturbed by removals.
///
/// ```
/// use matroid_mis::set::RandomAccessSet;
///
/// let mut set: RandomAccessSet<u32> = (0..5).collect();
/// assert!(set.contains(&3));
/// set.remove(&3);
/// assert_eq!(set.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RandomAccessSet<T> {
    items: Vec<T>,
    index: HashMap<T, usize>,
}

impl<T: Clone + Eq + Hash> RandomAccessSet<T> {
    pub fn new() -> Self {
        RandomAccessSet {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.items.len(), self.index.len());
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// Adds a value; returns whether it was newly inserted.
    pub fn insert(&mut self, value: T) -> bool {
        if self.index.contains_key(&value) {
            return false;
        }
        self.index.insert(value.clone(), self.items.len());
        self.items.push(value);
        true
    }

    /// Removes a value in O(1) by swapping it with the last element.
    /// Returns whether the value was present.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(index) = self.index.remove(value) else {
            return false;
        };
        let last = self.items.pop().expect("index map out of sync");
        if index < self.items.len() {
            self.index.insert(last.clone(), index);
            self.items[index] = last;
        }
        true
    }

    /// Picks an element uniformly at random, in O(1).
    pub fn choice<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        if self.items.is_empty() {
            None
        } else {
            Some(&self.items[rng.gen_range(0..self.items.len())])
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for RandomAccessSet<T> {
    /// Collects an iterator, deduplicating on first occurrence.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = RandomAccessSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<'a, T> IntoIterator for &'a RandomAccessSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt::Debug;

    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    fn check_invariant<T: Clone + Eq + Hash + Debug>(set: &RandomAccessSet<T>) {
        assert_eq!(set.items.len(), set.index.len());
        for (i, item) in set.items.iter().enumerate() {
            assert_eq!(set.index[item], i);
        }
    }

    #[test]
    fn insert_deduplicates() {
        let mut set = RandomAccessSet::new();
        assert!(set.insert(7));
        assert!(!set.insert(7));
        assert_eq!(set.len(), 1);
        check_invariant(&set);
    }

    #[test]
    fn from_iterator_deduplicates() {
        let set: RandomAccessSet<u32> = [3, 1, 4, 1, 5, 9, 2, 6, 5].into_iter().collect();
        assert_eq!(set.len(), 7);
        check_invariant(&set);
    }

    #[test]
    fn remove_swaps_last() {
        let mut set: RandomAccessSet<u32> = (0..10).collect();
        assert!(set.remove(&4));
        assert!(!set.remove(&4));
        assert!(!set.contains(&4));
        assert_eq!(set.len(), 9);
        check_invariant(&set);

        // removing the last element is the degenerate swap
        assert!(set.remove(&9));
        check_invariant(&set);
    }

    #[test]
    fn choice_is_uniformly_supported() {
        let set: RandomAccessSet<u32> = (0..4).collect();
        let mut rng = ChaCha12Rng::seed_from_u64(17);

        let mut seen = [false; 4];
        for _ in 0..100 {
            seen[*set.choice(&mut rng).unwrap() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn choice_of_empty_set() {
        let set: RandomAccessSet<u32> = RandomAccessSet::new();
        let mut rng = ChaCha12Rng::seed_from_u64(17);
        assert_eq!(set.choice(&mut rng), None);
    }
}
