//! Error types for page behaviors
//!
//! Missing markup is never an error: behaviors whose elements are absent are
//! skipped. These variants cover the browser refusing an operation we
//! expected to succeed.

use wasm_bindgen::JsValue;

/// Errors that can occur while attaching or running page behaviors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BehaviorError {
    /// No `window` global (not running in a browser)
    #[error("window is not available")]
    WindowUnavailable,

    /// Window has no document
    #[error("document is not available")]
    DocumentUnavailable,

    /// Document has no body element
    #[error("document has no body element")]
    BodyUnavailable,

    /// Document has no head element
    #[error("document has no head element")]
    HeadUnavailable,

    /// A DOM call raised a JS exception
    #[error("DOM operation '{operation}' failed: {message}")]
    Dom { operation: String, message: String },

    /// A selector was rejected by the browser
    #[error("invalid selector: {selector}")]
    InvalidSelector { selector: String },

    /// An element exists but is not the expected interface type
    #[error("element '{selector}' is not a {expected}")]
    ElementType {
        selector: String,
        expected: &'static str,
    },

    /// Configuration block could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Logging subscriber could not be installed
    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl BehaviorError {
    /// Wraps a JS exception raised by `operation`
    pub fn dom(operation: impl Into<String>, err: &JsValue) -> Self {
        Self::Dom {
            operation: operation.into(),
            message: describe_js_error(err),
        }
    }
}

/// Result type alias for behavior operations
pub type Result<T> = std::result::Result<T, BehaviorError>;

/// Best-effort human readable text for a thrown JS value
fn describe_js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
