//! HTML surface implementation
//!
//! This module projects marq documents onto semantic HTML5 with embedded CSS.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` ecosystem for HTML
//! construction and serialization:
//! - `html5ever`: Browser-grade HTML5 machinery from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! Building a real DOM and serializing it (instead of string concatenation)
//! keeps escaping and attribute handling correct by construction.
//!
//! # Element Mapping Table
//!
//! | marq node        | HTML equivalent                        | Notes                                   |
//! |------------------|----------------------------------------|-----------------------------------------|
//! | Document         | `<div class="marq-document">`          | Root container with document class      |
//! | Heading          | `<h1>`..`<h6>` with `marq-heading`     | Level drives the tag, clamped to 1..=6  |
//! | Paragraph        | `<p class="marq-paragraph">`           | Direct mapping                          |
//! | Emphasis (Bold)  | `<strong class="marq-emphasis">`       | Semantic strong tag                     |
//! | Emphasis (Italic)| `<em class="marq-emphasis">`           | Semantic emphasis tag                   |
//! | LineBreak        | `<br>`                                 | Explicit break                          |
//! | Error            | `<p class="marq-error">`               | Visible diagnostic, final element       |
//!
//! The `Error` node is terminal: the serializer stops projecting after it,
//! so a failed build renders as everything up to the failure plus one
//! diagnostic block.
//!
//! # CSS and Theming
//!
//! HTML export includes embedded CSS from:
//! - `css/baseline.css`: reset + default presentation (always included)
//! - `css/themes/theme-*.css`: optional overrides layered on top
//!
//! The default theme (`HtmlTheme::Modern`) injects an empty stylesheet so
//! the baseline alone controls rendering. The Serif theme only adds font
//! overrides. Custom CSS from the caller is appended last.
//!
//! # Output Format
//!
//! Export produces a single, self-contained HTML file: complete HTML5
//! document structure, embedded CSS in a `<style>` tag, no external
//! dependencies, mobile-responsive viewport meta tag. The `<title>` is the
//! first heading's text, falling back to "Marq Document".

mod serializer;

use crate::error::RenderError;
use crate::surface::Surface;
use marq_core::Document;

pub use serializer::get_default_css;

/// Surface implementation for HTML
pub struct HtmlSurface {
    /// CSS theme to use for export
    theme: HtmlTheme,
}

/// Available CSS themes for HTML export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlTheme {
    /// Serif typography override (fonts only, layout comes from baseline)
    Serif,
    /// Baseline modern theme (no-op; relies on baseline.css)
    Modern,
}

/// Options for HTML rendering
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// CSS theme to use
    pub theme: HtmlTheme,
    /// Optional custom CSS appended after the baseline and theme CSS
    pub custom_css: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new(HtmlTheme::Modern)
    }
}

impl HtmlOptions {
    pub fn new(theme: HtmlTheme) -> Self {
        Self {
            theme,
            custom_css: None,
        }
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

impl Default for HtmlSurface {
    fn default() -> Self {
        Self::new(HtmlTheme::Modern)
    }
}

impl HtmlSurface {
    /// Create a new HTML surface with the specified theme
    pub fn new(theme: HtmlTheme) -> Self {
        Self { theme }
    }

    /// Create an HTML surface with the serif theme
    pub fn with_serif() -> Self {
        Self::new(HtmlTheme::Serif)
    }
}

impl Surface for HtmlSurface {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML5 output with embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn render(&self, doc: &Document) -> Result<String, RenderError> {
        serializer::render_to_html(doc, HtmlOptions::new(self.theme))
    }

    fn render_with_options(
        &self,
        doc: &Document,
        options: &std::collections::HashMap<String, String>,
    ) -> Result<String, RenderError> {
        let mut theme = self.theme;
        if let Some(theme_str) = options.get("theme") {
            theme = match theme_str.as_str() {
                "serif" => HtmlTheme::Serif,
                "modern" | "default" => HtmlTheme::Modern,
                // Unknown themes fall back to the baseline.
                _ => HtmlTheme::Modern,
            };
        }

        let mut html_options = HtmlOptions::new(theme);
        if let Some(css) = options.get("custom-css") {
            html_options = html_options.with_custom_css(css.clone());
        }

        serializer::render_to_html(doc, html_options)
    }
}
