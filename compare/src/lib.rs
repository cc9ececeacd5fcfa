//! # embedcheck
//!
//! Checks whether two embedding pipelines wrote the same data.
//!
//! Each pipeline dumps its embedding as a JSON document next to this crate
//! (`../python/python-embeddings.json` and `../java/java-embeddings.json`).
//! The documents are decoded and compared for deep structural equality:
//!
//! - object keys are compared as a set, their order is irrelevant
//! - arrays must have the same length and the same element order
//! - numbers compare by value, so `1` and `1.0` are equal, and integers of
//!   any size compare exactly
//!
//! ```rust,no_run
//! use embedcheck::{compare::run, config::ComparePaths};
//!
//! let verdict = run(&ComparePaths::default())?;
//! println!("{verdict}");
//! # Ok::<(), embedcheck::error::CompareError>(())
//! ```

/// Deep structural comparison and the printed verdict
pub mod compare;

/// Locations of the two embedding documents
pub mod config;

/// A decoded embedding document
pub mod document;

/// Error types for loading and comparing documents
pub mod error;

/// Reading and decoding documents from disk
pub mod loader;
