//! Icosphere generation error types.

/// Errors that can occur when generating an icosphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// The requested subdivision order is above [`MAX_ORDER`](crate::MAX_ORDER).
    #[error("subdivision order {order} exceeds the maximum of {max}")]
    InvalidOrder { order: u32, max: u32 },
}
