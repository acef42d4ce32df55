//! Responsive breakpoints.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A viewport width threshold paired with the number of slides shown at or above it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    /// Minimum window width in CSS pixels.
    pub width: f64,
    /// Number of slides visible once `width` is reached.
    pub slides_to_show: u32,
}

impl Breakpoint {
    /// Creates a new breakpoint.
    #[must_use]
    pub const fn new(width: f64, slides_to_show: u32) -> Self {
        Self {
            width,
            slides_to_show,
        }
    }

    fn validate(&self, position: usize) -> Result<(), ConfigError> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(ConfigError::InvalidWidth {
                position,
                width: self.width,
            });
        }
        if self.slides_to_show == 0 {
            return Err(ConfigError::ZeroSlides { position });
        }
        Ok(())
    }
}

/// Ordered list of breakpoints.
///
/// Entries are scanned in table order and the last one whose width fits wins,
/// so an ascending table behaves like a "largest threshold below the width"
/// lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakpointTable(Vec<Breakpoint>);

impl BreakpointTable {
    /// Builds a table, rejecting entries with a zero slide count or a bad width.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the first invalid entry.
    pub fn new(entries: Vec<Breakpoint>) -> Result<Self, ConfigError> {
        let table = Self(entries);
        table.validate()?;
        Ok(table)
    }

    /// Checks every entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the first invalid entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.0
            .iter()
            .enumerate()
            .try_for_each(|(position, bp)| bp.validate(position))
    }

    /// Resolves how many slides are visible at `window_width`. Defaults to 1.
    #[must_use]
    pub fn slides_to_show(&self, window_width: f64) -> u32 {
        let mut show = 1;
        for bp in &self.0 {
            if window_width >= bp.width {
                show = bp.slides_to_show;
            }
        }
        show.max(1)
    }

    /// Returns the entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[Breakpoint] {
        &self.0
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self(vec![
            Breakpoint::new(0.0, 1),
            Breakpoint::new(600.0, 2),
            Breakpoint::new(900.0, 3),
        ])
    }
}
