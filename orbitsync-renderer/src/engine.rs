//! Tera rendering engine — [`ArtifactKind`] enum and [`Renderer`].
//!
//! # Path mapping
//!
//! | Artifact      | Output path (relative to root)   |
//! |---------------|----------------------------------|
//! | ChainRegistry | `src/generated/orbit_chains.rs`  |

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use crate::context::TemplateContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[(
    "registry/orbit_chains.rs.tera",
    include_str!("templates/orbit_chains.rs.tera"),
)];

/// Render a context string as a double-quoted, escaped Rust string literal.
///
/// Registered as the `rust_str` tera filter; the `Debug` formatting of `str`
/// is exactly Rust string-literal syntax.
fn rust_str(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("rust_str filter expects a string"))?;
    Ok(tera::Value::String(format!("{s:?}")))
}

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    let items: Vec<(String, String)> = TPLS
        .iter()
        .map(|(name, content)| ((*name).to_string(), (*content).to_string()))
        .collect();
    tera.add_raw_templates(items)?;
    tera.register_filter("rust_str", rust_str);
    Ok(tera)
}

// ---------------------------------------------------------------------------
// ArtifactKind
// ---------------------------------------------------------------------------

/// All generated artifacts the renderer knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// The statically-typed chain registry source module.
    ChainRegistry,
}

impl ArtifactKind {
    /// All artifact variants in a stable order.
    pub fn all() -> &'static [ArtifactKind] {
        &[ArtifactKind::ChainRegistry]
    }

    /// Template name(s) to render for this artifact.
    pub fn template_names(&self) -> &'static [&'static str] {
        match self {
            ArtifactKind::ChainRegistry => &["registry/orbit_chains.rs.tera"],
        }
    }

    /// Output paths for this artifact, relative to the sync root.
    /// Returns one `PathBuf` per template (same order as `template_names`).
    pub fn output_paths(&self, root: &Path) -> Vec<PathBuf> {
        match self {
            ArtifactKind::ChainRegistry => vec![root
                .join("src")
                .join("generated")
                .join("orbit_chains.rs")],
        }
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Tera-based renderer for all artifact kinds.
///
/// Uses embedded templates only. Create once with [`Renderer::new`] and reuse.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { tera: build_tera()? })
    }

    /// Render all output files for `artifact` using the supplied context.
    ///
    /// Returns `Vec<(output_path, rendered_content)>` — one entry per file.
    /// Output depends only on the context's chains and feed metadata, so the
    /// same input renders byte-identically every time.
    pub fn render(
        &self,
        ctx: &TemplateContext,
        artifact: ArtifactKind,
        root: &Path,
    ) -> Result<Vec<(PathBuf, String)>, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let names = artifact.template_names();
        let paths = artifact.output_paths(root);

        debug_assert_eq!(
            names.len(),
            paths.len(),
            "template_names() and output_paths() must return equal-length slices for {:?}",
            artifact
        );

        let mut results = Vec::with_capacity(names.len());
        for (name, path) in names.iter().zip(paths.into_iter()) {
            let content = self.tera.render(name, &tera_ctx)?;
            results.push((path, content));
        }
        Ok(results)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
