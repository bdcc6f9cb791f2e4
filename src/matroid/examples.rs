//! Small fixture matroids used in tests and demos.

use rand::Rng;

use super::GraphicalMatroid;

/// The graphical matroid of the complete graph K_n on nodes 0..n, with unit
/// edge weights.
pub fn complete_graph(n: usize) -> GraphicalMatroid<usize> {
    GraphicalMatroid::from_edges((0..n).flat_map(|u| ((u + 1)..n).map(move |v| (u, v))))
}

/// The graphical matroid of a G(n, p) random graph: every pair of nodes is
/// an edge independently with probability `p`. Unit edge weights.
pub fn gnp_random_graph<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> GraphicalMatroid<usize> {
    GraphicalMatroid::from_edges(
        (0..n)
            .flat_map(|u| ((u + 1)..n).map(move |v| (u, v)))
            .filter(|_| rng.gen_bool(p))
            .collect::<Vec<_>>(),
    )
}
