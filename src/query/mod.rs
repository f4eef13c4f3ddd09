//! Query Service Module
//!
//! The read-only lookup and search surface over converted corpus documents.
//!
//! ## Overview
//! Every operation is a pure function of (document store snapshot, request
//! parameters): the target document is loaded fresh, scanned in memory, and
//! discarded. No shared mutable state, no locking, no retries.
//!
//! ## Responsibilities
//! - **Resolution**: Case-insensitive book lookup by name or abbreviation,
//!   1-based chapter bounds checking.
//! - **Search**: Exhaustive in-order substring scan with a fixed result cap.
//! - **API**: Exposing the operations via RESTful HTTP endpoints.
//!
//! ## Submodules
//! - **`engine`**: Book/chapter resolution and the substring search scan.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod types;
