//! The abstract matroid interface and the concrete matroid kinds.

#[allow(clippy::module_inception)]
mod matroid;

pub mod examples;
mod graphical;
mod linear;
mod uniform;

pub use graphical::{Edge, GraphicalMatroid};
pub use linear::{RealLinearMatroid, RANK_TOLERANCE};
pub use matroid::{Element, IndependenceChecker, Matroid, MutableMatroid};
pub use uniform::{IntUniformMatroid, MutableIntUniformMatroid};
