//! Structural Converter Module
//!
//! Transforms markup-formatted corpus documents into the canonical nested
//! JSON representation. Leaf component: depends on the corpus model only,
//! never on the query engine. Runs offline, once per source document.
//!
//! ## Workflow
//! 1. **Parse**: Walk the XML event stream, one output record per input node.
//! 2. **Resolve**: Map each book ordinal to its canonical display name.
//! 3. **Write**: Serialize pretty-printed JSON so re-runs are reproducible.
//!
//! ## Submodules
//! - **`parser`**: The five-level structural recursion over XML events.
//! - **`batch`**: Directory-level driver with per-document failure isolation.

pub mod batch;
pub mod parser;

#[cfg(test)]
mod tests;
