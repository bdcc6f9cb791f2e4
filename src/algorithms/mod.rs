//! Algorithms for computing and maintaining maximum-weight independent sets.

pub mod dynamic;
pub mod greedy;

pub use dynamic::{
    DynamicAlgorithm, DynamicSolver, NaiveDynamic, RestartGreedy, UniformAdditionDynamic,
    UniformRemovalDynamic,
};
pub use greedy::{maximal_independent_set, maximal_independent_set_uniform_weights};
