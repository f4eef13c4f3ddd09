//! Corpus Store
//!
//! File-backed access to converted corpus documents and annotation sets.
//! Layout: one `{corpusId}.json` per corpus under the corpora directory, plus
//! one subdirectory per annotation set under the annotations directory, each
//! holding one `{BOOKREF}.json` per book.
//!
//! Every lookup reads the target file fresh; there is no cross-request cache.
//! A missing file and an unparseable file both surface as `CorpusNotFound`,
//! the distinction is only visible in the logs.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::corpus::types::CorpusDocument;
use crate::error::ApiError;

/// One entry in the corpus listing.
///
/// `language_tag` is taken from the document's own `language` field rather
/// than inferred from the identifier; documents that fail to load report
/// `"Unknown"` but stay listed.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusSummary {
    pub name: String,
    pub filename: String,
    #[serde(rename = "languageTag")]
    pub language_tag: String,
}

/// A named annotation set and the book references it covers.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationSet {
    pub name: String,
    pub books: Vec<String>,
}

/// Read-only handle on the document store directories.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    corpora_dir: PathBuf,
    annotations_dir: PathBuf,
}

impl CorpusStore {
    pub fn new(corpora_dir: impl Into<PathBuf>, annotations_dir: impl Into<PathBuf>) -> Self {
        Self {
            corpora_dir: corpora_dir.into(),
            annotations_dir: annotations_dir.into(),
        }
    }

    /// Enumerates available corpus documents in store order.
    ///
    /// Each document is opened to read its language tag; a directory that
    /// does not exist yields an empty list rather than an error.
    pub async fn list_corpora(&self) -> Vec<CorpusSummary> {
        let mut corpora = Vec::new();

        let Ok(mut entries) = tokio::fs::read_dir(&self.corpora_dir).await else {
            return corpora;
        };

        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            let Some(id) = corpus_id(&path) else {
                continue;
            };

            let language_tag = match self.load(&id).await {
                Ok(doc) if !doc.language.is_empty() => doc.language,
                _ => "Unknown".to_string(),
            };

            corpora.push(CorpusSummary {
                name: id,
                filename: entry.file_name().to_string_lossy().into_owned(),
                language_tag,
            });
        }

        corpora
    }

    /// Loads one corpus document fresh from disk.
    pub async fn load(&self, id: &str) -> Result<CorpusDocument, ApiError> {
        let path = self.corpora_dir.join(format!("{id}.json"));

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|_| ApiError::CorpusNotFound)?;

        serde_json::from_str(&raw).map_err(|err| {
            tracing::warn!("Corpus document {} failed to parse: {}", path.display(), err);
            ApiError::CorpusNotFound
        })
    }

    /// Enumerates annotation sets: one per subdirectory, each listing the
    /// book references of the documents inside it.
    pub async fn list_annotation_sets(&self) -> Vec<AnnotationSet> {
        let mut sets = Vec::new();

        let Ok(mut entries) = tokio::fs::read_dir(&self.annotations_dir).await else {
            return sets;
        };

        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let mut books = Vec::new();
            if let Ok(mut files) = tokio::fs::read_dir(&path).await {
                while let Ok(Some(file)) = files.next_entry().await {
                    if let Some(book) = corpus_id(&file.path()) {
                        books.push(book);
                    }
                }
            }

            sets.push(AnnotationSet {
                name: entry.file_name().to_string_lossy().into_owned(),
                books,
            });
        }

        sets
    }

    /// Loads the raw annotation document for one book of one set.
    ///
    /// Book references are uppercased before path construction, matching the
    /// store naming convention.
    pub async fn load_annotation(
        &self,
        set: &str,
        book: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let path = self
            .annotations_dir
            .join(set)
            .join(format!("{}.json", book.to_uppercase()));

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|_| ApiError::CorpusNotFound)?;

        serde_json::from_str(&raw).map_err(|err| {
            tracing::warn!(
                "Annotation document {} failed to parse: {}",
                path.display(),
                err
            );
            ApiError::CorpusNotFound
        })
    }
}

/// Returns the file stem for `*.json` paths, `None` for anything else.
fn corpus_id(path: &Path) -> Option<String> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
        return None;
    }
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}
