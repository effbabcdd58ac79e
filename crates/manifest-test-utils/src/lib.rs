//! Shared test utilities for the manifest-resolver workspace.
//!
//! This crate provides standardised directory-tree fixtures to eliminate
//! duplication across crate test suites. It is a dev-dependency only and is
//! never published.
//!
//! # Modules
//!
//! - [`tree`]: [`TestTree`] builder for project trees on disk

pub mod tree;

pub use tree::TestTree;
