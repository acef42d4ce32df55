use carousel_core::ConfigError;
use thiserror::Error;

/// Error type produced by the web backend.
#[derive(Debug, Clone, Error)]
pub enum WebError {
    /// The DOM APIs are not accessible (e.g., when executed outside of a browser).
    #[error("DOM is not available")]
    DomUnavailable,
    /// The root selector matched nothing.
    #[error("Carousel root not found: `{0}`")]
    RootNotFound(String),
    /// A required element is missing under the root.
    #[error("Carousel `{root}` has no `{part}` element")]
    MissingElement {
        /// Root selector of the carousel.
        root: String,
        /// Selector of the missing part.
        part: &'static str,
    },
    /// The options passed from JavaScript were rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Wrapper around JavaScript exceptions.
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for WebError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        value
            .as_string()
            .map_or_else(|| Self::Js(format!("{value:?}")), Self::Js)
    }
}

impl From<WebError> for wasm_bindgen::JsValue {
    fn from(value: WebError) -> Self {
        match value {
            WebError::Js(msg) => Self::from(msg),
            other => Self::from(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_not_found_display() {
        let err = WebError::RootNotFound(".carousel".into());
        assert_eq!(err.to_string(), "Carousel root not found: `.carousel`");
    }

    #[test]
    fn test_missing_element_display() {
        let err = WebError::MissingElement {
            root: ".carousel".into(),
            part: ".carousel__track",
        };
        assert_eq!(
            err.to_string(),
            "Carousel `.carousel` has no `.carousel__track` element"
        );
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err = WebError::from(ConfigError::ZeroSlides { position: 1 });
        assert_eq!(err.to_string(), "breakpoint #1 must show at least one slide");
    }
}
