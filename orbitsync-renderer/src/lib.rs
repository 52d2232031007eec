//! # orbitsync-renderer
//!
//! Tera-based engine that renders the generated chain-registry source file
//! from processed Orbit chain records.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use orbitsync_renderer::{ArtifactKind, Renderer, TemplateContext};
//!
//! fn render_all(ctx: &TemplateContext, root: &std::path::Path) {
//!     if let Ok(renderer) = Renderer::new() {
//!         for artifact in ArtifactKind::all() {
//!             if let Ok(outputs) = renderer.render(ctx, *artifact, root) {
//!                 for (path, content) in outputs {
//!                     println!("{}: {} bytes", path.display(), content.len());
//!                 }
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::{MetaCtx, TemplateContext};
pub use engine::{ArtifactKind, Renderer};
pub use error::RenderError;
