//! Corpus Document Module
//!
//! The canonical data model shared by the converter and the query engine.
//!
//! ## Overview
//! A corpus is a five-level hierarchy: document -> division -> book ->
//! chapter -> verse. Documents are produced once by the converter, stored as
//! immutable JSON files, and loaded fresh on every query.
//!
//! ## Submodules
//! - **`types`**: The `CorpusDocument` tree and its serde representation.
//! - **`names`**: The fixed ordinal-to-name table for canonical book names.
//! - **`store`**: File-backed access to the corpus and annotation-set
//!   directories.

pub mod names;
pub mod store;
pub mod types;
