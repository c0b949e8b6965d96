//! Surface registry for surface discovery and selection
//!
//! This module provides a centralized registry for all available surfaces.
//! Surfaces can be registered and retrieved by name.

use crate::error::RenderError;
use crate::surface::Surface;
use marq_core::Document;
use std::collections::HashMap;

/// Registry of presentation surfaces
///
/// Provides a centralized registry for all available surfaces.
/// Surfaces can be registered and retrieved by name.
///
/// # Examples
///
/// ```ignore
/// let mut registry = SurfaceRegistry::new();
/// registry.register(MySurface);
///
/// let surface = registry.get("my-surface")?;
/// let output = surface.render(&doc)?;
/// ```
pub struct SurfaceRegistry {
    surfaces: HashMap<String, Box<dyn Surface>>,
}

impl SurfaceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        SurfaceRegistry {
            surfaces: HashMap::new(),
        }
    }

    /// Register a surface
    ///
    /// If a surface with the same name already exists, it will be replaced.
    pub fn register<S: Surface + 'static>(&mut self, surface: S) {
        self.surfaces
            .insert(surface.name().to_string(), Box::new(surface));
    }

    /// Get a surface by name
    pub fn get(&self, name: &str) -> Result<&dyn Surface, RenderError> {
        self.surfaces
            .get(name)
            .map(|s| s.as_ref())
            .ok_or_else(|| RenderError::SurfaceNotFound(name.to_string()))
    }

    /// Check if a surface exists
    pub fn has(&self, name: &str) -> bool {
        self.surfaces.contains_key(name)
    }

    /// List all available surface names (sorted)
    pub fn list_surfaces(&self) -> Vec<String> {
        let mut names: Vec<_> = self.surfaces.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect surface from filename based on file extension
    ///
    /// Returns the surface name if a matching extension is found, or None
    /// otherwise. Used to infer the target surface from an output path.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let registry = SurfaceRegistry::default();
    /// assert_eq!(registry.detect_surface_from_filename("out.html"), Some("html".to_string()));
    /// assert_eq!(registry.detect_surface_from_filename("out.unknown"), None);
    /// ```
    pub fn detect_surface_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        for surface in self.surfaces.values() {
            if surface.file_extensions().contains(&extension) {
                return Some(surface.name().to_string());
            }
        }

        None
    }

    /// Render a document using the named surface
    pub fn render(&self, doc: &Document, surface: &str) -> Result<String, RenderError> {
        self.get(surface)?.render(doc)
    }

    /// Render a document using the named surface and options
    pub fn render_with_options(
        &self,
        doc: &Document,
        surface: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        self.get(surface)?.render_with_options(doc, options)
    }

    /// Create a registry with the built-in surfaces
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::surfaces::html::HtmlSurface::default());
        registry.register(crate::surfaces::markup::MarkupSurface);
        registry.register(crate::surfaces::text::TextSurface);
        registry.register(crate::surfaces::treeviz::TreevizSurface);

        registry
    }
}

impl Default for SurfaceRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
