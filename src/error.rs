use thiserror::Error;

/// A test configuration that was rejected at construction time.
///
/// Construction is the only fallible operation in this crate; a rejected
/// configuration produces no test object, so `user_group` can never observe
/// an invalid state.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A split test needs at least two groups to split between.
    #[error("a split test needs at least two groups, got {0}")]
    TooFewGroups(u32),

    /// The involvement fraction lies outside `[0.0, 1.0]`.
    #[error("involvement fraction {0} is outside [0.0, 1.0]")]
    ExposureOutOfRange(f64),
}
