//! # HTML Rendering
//!
//! - **`engine`**: `RenderEngine` table keyed by `ObjectKind`, `ObjectRenderer`, `RenderError`
//! - **`renderers`**: block renderers; inline content goes through `crate::inline`

pub mod engine;
pub mod renderers;

pub use engine::{ObjectRenderer, RenderEngine, RenderError};
