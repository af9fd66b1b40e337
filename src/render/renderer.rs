//! Renderer Collaborators
//!
//! The async seams the render gate depends on: a page renderer that turns
//! a template and parameters into HTML, and an error renderer that turns a
//! render failure into an error page.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{RenderError, Result};

// == Page Renderer ==
/// Renders a page template into a full HTML document.
///
/// Rendering is a suspending operation; implementations may fetch data or
/// run a template engine. The gate awaits the renderer without holding the
/// cache lock, so a slow render blocks only its own request.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Asynchronous startup preparation, completed before the server
    /// accepts connections. A failure here is fatal to the process.
    async fn prepare(&self) -> Result<()> {
        Ok(())
    }

    /// Renders `template` with `params` into an HTML document.
    async fn render(&self, template: &str, params: &HashMap<String, String>) -> Result<String>;
}

// == Error Renderer ==
/// Produces an HTML error page for a failed render.
///
/// Error rendering itself is infallible: whatever HTML it returns is what
/// the client sees, so the process never crashes on a render failure.
#[async_trait]
pub trait ErrorRenderer: Send + Sync {
    /// Renders an error page for `error`, with the template and parameters
    /// of the request that failed.
    async fn render_error(
        &self,
        error: &RenderError,
        template: &str,
        params: &HashMap<String, String>,
    ) -> String;
}

// == Shell Renderer ==
/// Default renderer producing a bare HTML shell for each template.
///
/// Stands in for a real template engine behind the [`PageRenderer`] seam.
/// Output is deterministic for a given template and parameter map, so a
/// cached page and a re-rendered page are byte-identical.
#[derive(Debug, Default)]
pub struct ShellRenderer;

impl ShellRenderer {
    /// Creates a new shell renderer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PageRenderer for ShellRenderer {
    async fn render(&self, template: &str, params: &HashMap<String, String>) -> Result<String> {
        // Sorted for deterministic output
        let mut pairs: Vec<(&String, &String)> = params.iter().collect();
        pairs.sort();

        let items: String = pairs
            .iter()
            .map(|(name, value)| format!("<li>{name}: {value}</li>"))
            .collect();

        Ok(format!(
            "<!DOCTYPE html>\
             <html>\
             <head><title>{template}</title></head>\
             <body data-template=\"{template}\"><ul>{items}</ul></body>\
             </html>"
        ))
    }
}

// == Basic Error Page ==
/// Default error renderer: a minimal 500 page carrying the failure message.
#[derive(Debug, Default)]
pub struct BasicErrorPage;

#[async_trait]
impl ErrorRenderer for BasicErrorPage {
    async fn render_error(
        &self,
        error: &RenderError,
        template: &str,
        _params: &HashMap<String, String>,
    ) -> String {
        format!(
            "<!DOCTYPE html>\
             <html>\
             <head><title>Something went wrong</title></head>\
             <body data-template=\"{template}\">\
             <h1>Something went wrong</h1>\
             <p>{error}</p>\
             </body>\
             </html>"
        )
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_shell_renderer_embeds_template_and_params() {
        let renderer = ShellRenderer::new();

        let html = renderer
            .render("/major", &params(&[("id", "biology")]))
            .await
            .unwrap();

        assert!(html.contains("data-template=\"/major\""));
        assert!(html.contains("<li>id: biology</li>"));
    }

    #[tokio::test]
    async fn test_shell_renderer_is_deterministic() {
        let renderer = ShellRenderer::new();
        let p = params(&[("id", "biology"), ("tab", "courses")]);

        let first = renderer.render("/major", &p).await.unwrap();
        let second = renderer.render("/major", &p).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_shell_renderer_prepare_succeeds() {
        let renderer = ShellRenderer::new();
        assert!(renderer.prepare().await.is_ok());
    }

    #[tokio::test]
    async fn test_error_page_carries_failure_message() {
        let page = BasicErrorPage;
        let err = RenderError::template("/news", "upstream data unavailable");

        let html = page.render_error(&err, "/news", &params(&[])).await;

        assert!(html.contains("Something went wrong"));
        assert!(html.contains("upstream data unavailable"));
    }
}
