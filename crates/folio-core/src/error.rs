use thiserror::Error;

/// Validation errors for reveal parameters. The defaults never fail; these
/// only surface when callers override the tuning knobs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpecError {
    #[error("reveal threshold {0} is outside 0.0..=1.0")]
    ThresholdOutOfRange(f32),

    #[error("reveal offset {0} is not finite")]
    NonFiniteOffset(f32),

    #[error("reveal scale {0} must be finite and positive")]
    BadScale(f32),
}
