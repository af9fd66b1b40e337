//! Render Module
//!
//! The cache-backed render gate and its collaborator seams: the page
//! renderer, the error renderer, and the cache key derivation.

mod gate;
mod key;
mod renderer;

pub use gate::{RenderGate, RenderedPage};
pub use key::CacheKey;
pub use renderer::{BasicErrorPage, ErrorRenderer, PageRenderer, ShellRenderer};
