//! Error types for the triangulation library.

/// Main error type for triangulation operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DelaunayError {
    /// Caller-supplied data the triangulator refuses to work with
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A builder recursion level was handed a range too small to triangulate
    #[error("Invalid vertex range [{first}, {last}): at least 2 points are required")]
    InvalidRange {
        /// First sorted index of the range
        first: usize,
        /// One past the last sorted index of the range
        last: usize,
    },

    /// The quad-edge arena no longer encodes a valid subdivision
    #[error("Quad-edge invariant violated at edge {edge}: {invariant}")]
    InvariantViolation {
        /// Raw handle of the offending directed edge
        edge: usize,
        /// Description of the violated invariant
        invariant: &'static str,
    },

    /// Invalid configuration parameters
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// A point lies strictly inside the circumcircle of an emitted triangle
    #[error("Triangle {triangle:?} is not Delaunay: point {point} lies inside its circumcircle")]
    NotDelaunay {
        /// Original indices of the offending triangle
        triangle: [usize; 3],
        /// Original index of the enclosed point
        point: usize,
    },

    /// Two triangulation algorithms produced different triangle sets
    #[error("Cross-check failed: {0}")]
    CrossCheckMismatch(String),

    /// Writing results failed
    #[error("Output error: {0}")]
    Output(String),
}

/// Result type for triangulation operations.
pub type DelaunayResult<T> = Result<T, DelaunayError>;
