//! Error taxonomy for rendering.

use thiserror::Error;

/// Reasons a render is refused.
///
/// Every variant is raised before or instead of returning an output; a
/// caller can always retry with a smaller depth or a larger ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The requested recursion depth was below zero.
    #[error("recursion depth must be non-negative, got {depth}")]
    NegativeDepth { depth: i32 },

    /// The requested depth exceeds the configured recursion ceiling.
    #[error("recursion depth {depth} exceeds the configured maximum of {max_depth}")]
    DepthLimitExceeded { depth: u32, max_depth: u32 },

    /// The expansion would produce more points than the configured ceiling allows.
    #[error("output too large: depth {depth} would exceed the limit of {limit} points")]
    OutputTooLarge { depth: u32, limit: usize },

    /// The expansion would take more turtle steps, drawn or not, than allowed.
    #[error("too many steps: depth {depth} needs {steps} steps, the limit is {limit}")]
    TooManySteps { depth: u32, steps: u64, limit: u64 },
}
