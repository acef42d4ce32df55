//! Configuration errors.

use thiserror::Error;

/// Error returned when a carousel configuration is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A breakpoint asks for zero visible slides.
    #[error("breakpoint #{position} must show at least one slide")]
    ZeroSlides {
        /// Index of the offending entry.
        position: usize,
    },
    /// A breakpoint width is negative, infinite or NaN.
    #[error("breakpoint #{position} has invalid width {width}")]
    InvalidWidth {
        /// Index of the offending entry.
        position: usize,
        /// The rejected width.
        width: f64,
    },
    /// The configuration text could not be parsed.
    #[error("malformed carousel options: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::ZeroSlides { position: 2 }.to_string(),
            "breakpoint #2 must show at least one slide"
        );
        assert_eq!(
            ConfigError::InvalidWidth {
                position: 0,
                width: -5.0
            }
            .to_string(),
            "breakpoint #0 has invalid width -5"
        );
    }
}
