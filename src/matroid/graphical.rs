use std::collections::btree_map::Entry as BTreeEntry;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::MatroidError;
use crate::matroid::{Element, IndependenceChecker, Matroid, MutableMatroid};
use crate::union_find::UnionFind;

/// An undirected edge between two nodes, normalised so that
/// `Edge::new(u, v) == Edge::new(v, u)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<N> {
    u: N,
    v: N,
}

impl<N: Ord> Edge<N> {
    pub fn new(u: N, v: N) -> Self {
        if u <= v {
            Edge { u, v }
        } else {
            Edge { u: v, v: u }
        }
    }
}

impl<N> Edge<N> {
    pub fn endpoints(&self) -> (&N, &N) {
        (&self.u, &self.v)
    }

    /// Whether both endpoints are the same node.
    pub fn is_loop(&self) -> bool
    where
        N: PartialEq,
    {
        self.u == self.v
    }
}

impl<N: Ord> From<(N, N)> for Edge<N> {
    fn from((u, v): (N, N)) -> Self {
        Edge::new(u, v)
    }
}

/// The matroid of a weighted undirected graph G = (V, E): the ground set is
/// E and a subset of edges is independent iff it forms a forest.
///
/// Edges carry their weight directly (default 1.0). The node set is implied
/// by the edges; isolated nodes play no role in the matroid. The edge map is
/// ordered so that ground-set iteration is reproducible across runs.
#[derive(Debug, Clone, Default)]
pub struct GraphicalMatroid<N> {
    edges: BTreeMap<Edge<N>, f64>,
}

impl<N: Element + Ord> GraphicalMatroid<N> {
    pub fn new() -> Self {
        GraphicalMatroid {
            edges: BTreeMap::new(),
        }
    }

    /// Builds the matroid of the graph with the given edges, all of unit
    /// weight. Duplicate pairs (in either orientation) collapse.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        GraphicalMatroid {
            edges: edges
                .into_iter()
                .map(|(u, v)| (Edge::new(u, v), 1.0))
                .collect(),
        }
    }

    /// Builds the matroid of the graph with the given edges and per-edge
    /// weights.
    pub fn from_weighted_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        GraphicalMatroid {
            edges: edges
                .into_iter()
                .map(|(u, v, weight)| (Edge::new(u, v), weight))
                .collect(),
        }
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Overrides the weight of an existing edge.
    pub fn set_weight(&mut self, edge: Edge<N>, weight: f64) -> Result<(), MatroidError> {
        match self.edges.get_mut(&edge) {
            Some(stored) => {
                *stored = weight;
                Ok(())
            }
            None => Err(MatroidError::not_in_ground_set(&edge)),
        }
    }
}

impl<N: Element + Ord> Matroid for GraphicalMatroid<N> {
    type Element = Edge<N>;

    fn ground_set(&self) -> Box<dyn Iterator<Item = Edge<N>> + '_> {
        Box::new(self.edges.keys().cloned())
    }

    fn contains(&self, element: &Edge<N>) -> bool {
        self.edges.contains_key(element)
    }

    fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// A subset of edges is independent iff it contains no cycle, which a
    /// single union-find sweep detects.
    fn is_independent(&self, subset: &HashSet<Edge<N>>) -> bool {
        let mut components = UnionFind::new(0);
        let mut nodes: HashMap<&N, usize> = HashMap::new();
        for edge in subset {
            if edge.is_loop() {
                return false;
            }
            let (u, v) = edge.endpoints();
            let a = *nodes.entry(u).or_insert_with(|| components.make_set());
            let b = *nodes.entry(v).or_insert_with(|| components.make_set());
            if !components.union(a, b) {
                return false;
            }
        }
        true
    }

    fn get_weight(&self, element: &Edge<N>) -> f64 {
        self.edges.get(element).copied().unwrap_or(1.0)
    }

    /// Specialised checker: a union-find over the nodes keyed by connected
    /// component of the tracked forest, giving amortised near-O(1) queries.
    fn stateful_checker(
        &self,
        seed: HashSet<Edge<N>>,
    ) -> Box<dyn IndependenceChecker<Edge<N>> + '_> {
        Box::new(ForestChecker::new(seed))
    }
}

impl<N: Element + Ord> MutableMatroid for GraphicalMatroid<N> {
    fn add_element(&mut self, element: Edge<N>, weight: Option<f64>) -> Result<(), MatroidError> {
        match self.edges.entry(element) {
            BTreeEntry::Occupied(mut occupied) => {
                if let Some(weight) = weight {
                    occupied.insert(weight);
                }
            }
            BTreeEntry::Vacant(vacant) => {
                vacant.insert(weight.unwrap_or(1.0));
            }
        }
        Ok(())
    }

    fn remove_element(&mut self, element: &Edge<N>) -> Result<(), MatroidError> {
        self.edges
            .remove(element)
            .map(|_| ())
            .ok_or_else(|| MatroidError::not_in_ground_set(element))
    }
}

/// Stateful checker for graphical matroids.
///
/// Keeps a union-find mapping each node of the tracked forest to its
/// connected component: adding an edge keeps the subset independent exactly
/// when its endpoints lie in different components.
struct ForestChecker<N> {
    subset: HashSet<Edge<N>>,
    components: UnionFind,
    nodes: HashMap<N, usize>,
}

impl<N: Element + Ord> ForestChecker<N> {
    fn new(seed: HashSet<Edge<N>>) -> Self {
        let mut checker = ForestChecker {
            subset: HashSet::new(),
            components: UnionFind::new(0),
            nodes: HashMap::new(),
        };
        for edge in seed {
            checker.link(&edge);
            checker.subset.insert(edge);
        }
        checker
    }

    fn intern(&mut self, node: &N) -> usize {
        match self.nodes.entry(node.clone()) {
            Entry::Occupied(occupied) => *occupied.get(),
            Entry::Vacant(vacant) => *vacant.insert(self.components.make_set()),
        }
    }

    fn link(&mut self, edge: &Edge<N>) {
        let (u, v) = (edge.u.clone(), edge.v.clone());
        let a = self.intern(&u);
        let b = self.intern(&v);
        self.components.union(a, b);
    }
}

impl<N: Element + Ord> IndependenceChecker<Edge<N>> for ForestChecker<N> {
    fn current(&self) -> &HashSet<Edge<N>> {
        &self.subset
    }

    fn would_be_independent_after_adding(&self, element: &Edge<N>) -> bool {
        // an edge already in the forest is trivially addable, even though
        // the precondition rules the case out
        if self.subset.contains(element) {
            return true;
        }
        if element.is_loop() {
            return false;
        }
        match (self.nodes.get(&element.u), self.nodes.get(&element.v)) {
            (Some(&a), Some(&b)) => !self.components.equiv(a, b),
            // an endpoint outside the forest cannot close a cycle
            _ => true,
        }
    }

    fn add_element(&mut self, element: Edge<N>) {
        debug_assert!(self.would_be_independent_after_adding(&element));
        self.link(&element);
        self.subset.insert(element);
    }

    fn into_current(self: Box<Self>) -> HashSet<Edge<N>> {
        self.subset
    }
}
