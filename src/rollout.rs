use rand::Rng;

use crate::error::ConfigError;

/// The fraction of eligible users that enter a test at all.
///
/// `0.0` keeps everyone out and `1.0` lets everyone in. Values outside
/// `[0.0, 1.0]` are rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exposure(f64);

impl Exposure {
    /// Every eligible user is involved.
    pub const FULL: Exposure = Exposure(1.0);

    /// Create a new Exposure, validating the fraction.
    pub fn new(fraction: f64) -> Result<Self, ConfigError> {
        if (0.0..=1.0).contains(&fraction) {
            Ok(Self(fraction))
        } else {
            Err(ConfigError::ExposureOutOfRange(fraction))
        }
    }

    /// The wrapped fraction.
    pub fn fraction(self) -> f64 {
        self.0
    }

    /// Draw once: does this particular user fall inside the exposed
    /// fraction?
    pub(crate) fn draw(self) -> bool {
        let mut rng = rand::thread_rng();

        rng.gen::<f64>() <= self.0
    }
}
