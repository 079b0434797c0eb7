//! Asset normalization and lookup core.
//!
//! Reconciles asset records from heterogeneous source formats into one
//! canonical [`Asset`](types::Asset) schema, keeps them in an ordered,
//! immutable [`Catalog`](catalog::Catalog), and answers paginated listing
//! and first-match lookup against it.
//!
//! This crate performs no filesystem or network I/O. Callers hand it
//! already-deserialized JSON records together with the alias table that
//! applies to each source.

pub mod aliases;
pub mod catalog;
pub mod error;
pub mod matching;
pub mod normalizer;
pub mod resolver;
pub mod store;
pub mod types;
