//! Error types.
//!
//! The animation and scroll code has no failure modes; the only fallible step
//! is turning command-line input into validated [`Settings`](crate::config::Settings).

use thiserror::Error;

/// Invalid startup configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("window scale {0} is out of range (expected {min}..={max})", min = crate::config::MIN_SCALE, max = crate::config::MAX_SCALE)]
    ScaleOutOfRange(u32),

    #[error("particle count {0} exceeds the maximum of {max}", max = crate::config::MAX_PARTICLES)]
    TooManyParticles(usize),
}
