//! Surface implementations
//!
//! This module contains all surface implementations that project the marq
//! node sequence onto concrete output media.

pub mod html;
pub mod icons;
pub mod markup;
pub mod text;
pub mod treeviz;

pub use html::{get_default_css, HtmlOptions, HtmlSurface, HtmlTheme};
pub use markup::MarkupSurface;
pub use text::TextSurface;
pub use treeviz::TreevizSurface;
