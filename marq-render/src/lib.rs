//! Presentation surfaces for marq documents
//!
//!     This crate provides a uniform interface for projecting the flat node
//!     sequence produced by marq-core onto concrete output media (HTML,
//!     canonical markup, plain text, tree visualization).
//!
//! Architecture
//!
//!     - Surface trait: uniform render-only interface for all surfaces
//!     - SurfaceRegistry: centralized discovery and selection of surfaces
//!     - Surface implementations: concrete projections for each medium
//!
//!     Every surface is injected its inputs: it receives the completed
//!     Document and returns the rendered string; the caller owns the output
//!     target. No surface performs an implicit global lookup or touches
//!     process-wide state.
//!
//!     This is a pure lib, that is, it powers the marq-cli but is shell
//!     agnostic; no code here supposes a shell environment, be it to std
//!     print, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── surface.rs              # Surface trait definition
//!     ├── registry.rs             # SurfaceRegistry for discovery and selection
//!     ├── surfaces
//!     │   ├── <surface>
//!     │   │   ├── serializer.rs   # Projection implementation (where split out)
//!     │   │   └── mod.rs
//!     │   ├── icons.rs            # Shared visualization icons
//!     ├── lib.rs
//!
//! Testing
//!     tests
//!     └── <surface>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories,
//!     so we need to include these in the mod.
//!
//! The Error Contract
//!
//!     The Error node is a terminal diagnostic: the tree builder emits it as
//!     the last element of a failed build. Every surface honours that
//!     contract from its own side as well, rendering the diagnostic visibly
//!     and projecting nothing that might follow it.
//!
//! Surface Selection
//!
//!     - HTML output: the most common medium for publishing and viewing.
//!     - Canonical markup: re-serializing to the dialect itself gives a
//!       formatter for free and makes round-trip testing cheap.
//!     - Plain text: terminals and logs.
//!     - Treeviz: structural inspection during development.

pub mod error;
pub mod registry;
pub mod surface;
pub mod surfaces;

pub use error::RenderError;
pub use registry::SurfaceRegistry;
pub use surface::Surface;
