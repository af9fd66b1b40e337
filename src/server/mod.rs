//! Server Module
//!
//! HTTP surface of the rendering front end: the axum router, the page
//! handler in front of the render gate, diagnostics endpoints, and the
//! fallback seam for everything that is not a page route.

pub mod fallback;
pub mod handlers;
pub mod routes;

pub use fallback::{FallbackHandler, NotFoundFallback};
pub use handlers::AppState;
pub use routes::create_router;
