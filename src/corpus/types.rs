//! Corpus Data Types
//!
//! The canonical nested document representation. Field declaration order is
//! the serialization order, which keeps converter output stable and
//! human-diffable across runs.

use serde::{Deserialize, Serialize};

/// One complete converted text collection (an edition or translation).
///
/// Immutable once written by the converter. Division order is canonical
/// reading order and is preserved end-to-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusDocument {
    pub name: String,
    pub abbreviation: String,
    pub language: String,
    pub divisions: Vec<Division>,
}

/// Top-level grouping within a corpus (e.g. Old/New Testament).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Division {
    pub name: String,
    pub books: Vec<Book>,
}

/// A named book within a division.
///
/// `ordinal` is the source-assigned canonical position across the whole
/// corpus, not per-division, and is globally unique within one document.
/// `abbreviation` is optional: the source markup may omit it, in which case
/// book resolution falls back to name-only matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub ordinal: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    pub chapters: Vec<Chapter>,
}

/// An ordered chapter. `number` is the 1-based position within its book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub number: u32,
    pub verses: Vec<Verse>,
}

/// The leaf unit of text. `text` may be empty but is never absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verse {
    pub number: u32,
    pub text: String,
}
