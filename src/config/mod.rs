//! Configuration module for pocketbook
//!
//! Provides path resolution for the data directory and the two
//! backing documents.

pub mod paths;

pub use paths::Paths;
