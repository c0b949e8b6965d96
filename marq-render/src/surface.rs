//! Surface trait definition
//!
//! This module defines the core Surface trait that all presentation surfaces
//! implement. A surface is a pure projection: it receives the completed node
//! sequence and returns the rendered output; the caller owns the output
//! target. No surface reaches into process-wide state.

use crate::error::RenderError;
use marq_core::Document;
use std::collections::HashMap;

/// Trait for presentation surfaces
///
/// Implementors project a [`Document`] onto one concrete output medium.
/// The `Error` node is a terminal diagnostic: every surface renders it
/// visibly and projects nothing that might follow it.
///
/// # Examples
///
/// ```ignore
/// struct MySurface;
///
/// impl Surface for MySurface {
///     fn name(&self) -> &str {
///         "my-surface"
///     }
///
///     fn render(&self, doc: &Document) -> Result<String, RenderError> {
///         // Project doc onto the medium
///         todo!()
///     }
/// }
/// ```
pub trait Surface: Send + Sync {
    /// The name of this surface (e.g., "html", "text", "treeviz")
    fn name(&self) -> &str;

    /// Optional description of this surface
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this surface (e.g., ["html", "htm"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic surface detection from output filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render a document onto this surface
    fn render(&self, doc: &Document) -> Result<String, RenderError>;

    /// Render a document, optionally using extra parameters.
    ///
    /// Surfaces without knobs can rely on the default implementation, which
    /// delegates to [`Surface::render`] when the map is empty.
    fn render_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        if options.is_empty() {
            self.render(doc)
        } else {
            Err(RenderError::NotSupported(format!(
                "Surface '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
