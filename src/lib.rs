//! pocketbook - Terminal-based household ledger
//!
//! This library provides the core functionality for the pocketbook ledger
//! application: a fixed category catalog, two JSON-backed documents (the
//! record sequence and the per-category budget ceilings), and the
//! operations and reports over them. The binary in `main.rs` is a thin
//! presentation layer over this crate.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the data directory
//! - `error`: Custom error types
//! - `models`: Core data models (records, the category catalog, budgets)
//! - `storage`: JSON file storage layer behind an injectable `Store` trait
//! - `services`: Ledger operations as full load-compute-save cycles
//! - `reports`: Pure aggregations over the record sequence
//! - `cli`: Command handlers used by the binary
//!
//! Every operation reloads the documents from storage and writes them back
//! whole after a mutation; the durable files are the single source of
//! truth. The design assumes a single actor; embedding this crate in a
//! multi-actor system requires wrapping each load-mutate-save cycle in an
//! external mutual-exclusion scope.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PocketbookError, PocketbookResult};
