//! Error taxonomy for tree mutation and rendering.

use thiserror::Error;

/// Errors raised while building or rendering an element tree.
///
/// Schema violations are raised at the mutating call; only the
/// required-content check on screens is deferred to render time, since a
/// screen under construction is allowed to be temporarily empty.
#[derive(Debug, Error)]
pub enum Error {
    /// A required input was absent or malformed (unknown node id, invalid
    /// column count, missing mandatory key, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A schema rule was broken at insertion time: a cardinality cap, the
    /// one-content-element-per-screen rule, or a column-count mismatch.
    #[error("structural constraint violated: {0}")]
    StructuralConstraintViolation(String),

    /// A screen reached the serializer without any of its mandatory content
    /// elements.
    #[error("{container} must contain one of: {expected}")]
    MissingRequiredChild {
        container: &'static str,
        expected: &'static str,
    },

    /// The root synthesizer cannot wrap this element kind into a
    /// transmittable phone/display/screen chain.
    #[error("an {tag} is not suitable to be sent directly to the phone; place it inside the correct element first")]
    UnsuitableRootCandidate { tag: String },

    /// Writing the finished document to an output sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
