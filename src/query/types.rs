//! Query API Types
//!
//! Data Transfer Objects (DTOs) for the HTTP surface. Chapter responses are
//! deliberately flattened: the resolved book name, the requested chapter
//! number, and the verse sequence, not a wrapped `Chapter` record.

use serde::{Deserialize, Serialize};

use crate::corpus::store::{AnnotationSet, CorpusSummary};
use crate::corpus::types::Verse;

#[derive(Debug, Serialize)]
pub struct CorporaResponse {
    pub count: usize,
    pub corpora: Vec<CorpusSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChapterResponse {
    pub book: String,
    pub chapter: usize,
    pub verses: Vec<Verse>,
}

#[derive(Debug, Serialize)]
pub struct AnnotationSetsResponse {
    pub count: usize,
    pub sets: Vec<AnnotationSet>,
}

/// One search hit. `chapter` and `verse` are 1-based scan positions within
/// the corpus, independent of the declared number attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseHit {
    pub book: String,
    pub chapter: usize,
    pub verse: usize,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub corpus: String,
    pub count: usize,
    pub results: Vec<VerseHit>,
}

/// Raw query-string parameters; presence is validated in the handler so a
/// missing parameter yields `InvalidQuery` instead of a rejection.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub corpus: Option<String>,
}
