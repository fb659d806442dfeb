//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`text_source`]: loading the raw text of the input file
//!
//! These ports keep the domain and use cases independent of the file system.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod text_source;
