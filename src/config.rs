//! Startup configuration.

use crate::Sensitivity;

/// Settings applied by [`Scanner::initialize()`](crate::Scanner::initialize).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    /// Whether to switch the illumination LED on.
    pub illumination: bool,
    /// Motion detection threshold to enable motion sensitive reading with.
    pub sensitivity: Sensitivity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            illumination: true,
            sensitivity: Sensitivity::Medium,
        }
    }
}
