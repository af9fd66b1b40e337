//! Error types for the rendering front end
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Render Error Enum ==
/// Errors produced by a page renderer.
///
/// A render failure is recovered per-request: the gate hands it to the
/// error-rendering collaborator instead of propagating it to the caller.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The renderer could not produce HTML for a template
    #[error("failed to render template '{template}': {message}")]
    Template { template: String, message: String },

    /// The renderer failed its startup preparation
    #[error("renderer preparation failed: {0}")]
    Prepare(String),
}

impl RenderError {
    /// Creates a template render failure with context.
    pub fn template(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Template {
            template: template.into(),
            message: message.into(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_error_display() {
        let err = RenderError::template("/news", "upstream data unavailable");
        let msg = err.to_string();
        assert!(msg.contains("/news"));
        assert!(msg.contains("upstream data unavailable"));
    }

    #[test]
    fn test_prepare_error_display() {
        let err = RenderError::Prepare("asset manifest missing".to_string());
        assert!(err.to_string().contains("asset manifest missing"));
    }
}
