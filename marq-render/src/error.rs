//! Error types for surface operations

use std::fmt;

/// Errors that can occur while rendering a document onto a surface
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Surface not found in registry
    SurfaceNotFound(String),
    /// Error while projecting the node sequence
    RenderFailed(String),
    /// Surface does not support the requested operation
    NotSupported(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceNotFound(name) => write!(f, "Surface '{name}' not found"),
            RenderError::RenderFailed(msg) => write!(f, "Render error: {msg}"),
            RenderError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}
