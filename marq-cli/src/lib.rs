//! Library side of the marq CLI.
//!
//! Holds the inspect transforms so integration tests and the binary share
//! one implementation.

pub mod transforms;
