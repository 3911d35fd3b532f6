use thiserror::Error;

/// Errors raised while validating simulation configuration.
///
/// Geometry that is merely degenerate at runtime (unreachable targets,
/// collapsed chains) is not an error; only values that make the model
/// meaningless are rejected up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{layout} arm chain has no segments")]
    EmptyChain { layout: &'static str },

    #[error("{layout} segment {index} has invalid length {length}")]
    InvalidLength {
        layout: &'static str,
        index: usize,
        length: f64,
    },

    #[error("{name} range [{min}, {max}) is empty or inverted")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{name} must lie in [0, 1], got {value}")]
    OutOfUnitInterval { name: &'static str, value: f64 },

    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}
