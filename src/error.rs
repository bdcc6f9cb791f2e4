use std::fmt::Debug;

use thiserror::Error;

/// Errors surfaced by matroid constructors, mutations and dynamic solvers.
///
/// Every fallible operation leaves the matroid and any attached solver in the
/// state they had before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatroidError {
    /// An element was removed or queried that is not in the ground set.
    #[error("element {element} is not in the ground set")]
    NotInGroundSet { element: String },

    /// A matroid was constructed with inconsistent dimensions.
    #[error("invalid shape: {message}")]
    InvalidShape { message: String },

    /// A partial dynamic algorithm was asked for the update kind it does not
    /// support.
    #[error("{algorithm} does not support {operation}")]
    UnsupportedUpdate {
        algorithm: &'static str,
        operation: &'static str,
    },
}

impl MatroidError {
    pub(crate) fn not_in_ground_set<E: Debug>(element: &E) -> Self {
        MatroidError::NotInGroundSet {
            element: format!("{:?}", element),
        }
    }

    pub(crate) fn invalid_shape(message: impl Into<String>) -> Self {
        MatroidError::InvalidShape {
            message: message.into(),
        }
    }
}
