//! Navigation input.

/// A navigation request coming from a button or the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Move one slide towards the start.
    Previous,
    /// Move one slide towards the end.
    Next,
}

impl Navigation {
    /// Maps a `KeyboardEvent.key` value to a navigation, if any.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}
