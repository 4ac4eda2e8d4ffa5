use thiserror::Error;

/// Errors raised by the camera and geometry core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlenumError {
    /// The box dimensions would produce degenerate or self-intersecting walls.
    #[error("invalid box spec: {0}")]
    InvalidSpec(String),
    /// The camera sits on its target, so no direction can be derived.
    #[error("camera offset has zero length")]
    DegenerateOffset,
    #[error("invalid orbit config: {0}")]
    InvalidConfig(String),
}

/// Failures reported by a checkout collaborator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    #[error("checkout transport failed: {0}")]
    Transport(String),
    #[error("checkout rejected the configuration: {0}")]
    Rejected(String),
}
