//! Scriptorium Library
//!
//! This library crate defines the core modules behind the corpus API service
//! and the offline converter binary.
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems sharing one
//! on-disk document format:
//!
//! - **`convert`**: The structural converter. Transforms markup-formatted
//!   source documents into the canonical nested JSON representation, one
//!   document at a time with per-document failure isolation in batch mode.
//! - **`corpus`**: The canonical document model (document -> division ->
//!   book -> chapter -> verse), the fixed book-name table, and the
//!   file-backed store the query engine reads from.
//! - **`query`**: The read-only lookup and search logic plus its HTTP
//!   handlers. Resolves books and chapters by caller-visible 1-based
//!   positions and runs bounded-result substring search.

pub mod convert;
pub mod corpus;
pub mod error;
pub mod query;
