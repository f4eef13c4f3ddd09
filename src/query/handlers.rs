//! HTTP Request Handlers
//!
//! Thin axum wrappers around the store and the engine. Each handler loads
//! its target document fresh and maps engine failures straight to
//! `ApiError` responses.

use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::{Extension, Json};
use serde_json::{json, Value};

use crate::corpus::store::CorpusStore;
use crate::corpus::types::{Book, CorpusDocument};
use crate::error::ApiError;
use crate::query::engine;
use crate::query::types::{
    AnnotationSetsResponse, ChapterResponse, CorporaResponse, SearchParams, SearchResponse,
};

pub async fn handle_home() -> Json<Value> {
    Json(json!({
        "message": "Scriptorium corpus API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/corpora": "List available corpus documents",
            "/corpus/{id}": "Full corpus document",
            "/corpus/{id}/{book}": "One book by name or abbreviation",
            "/corpus/{id}/{book}/{chapter}": "One chapter of a book",
            "/annotations": "List available annotation sets",
            "/annotation/{set}/{book}": "Annotation document for one book",
            "/search?q=<text>&corpus=<id>": "Substring search across one corpus",
        },
    }))
}

pub async fn handle_list_corpora(
    Extension(store): Extension<Arc<CorpusStore>>,
) -> Json<CorporaResponse> {
    let corpora = store.list_corpora().await;
    Json(CorporaResponse {
        count: corpora.len(),
        corpora,
    })
}

pub async fn handle_get_corpus(
    Path(id): Path<String>,
    Extension(store): Extension<Arc<CorpusStore>>,
) -> Result<Json<CorpusDocument>, ApiError> {
    Ok(Json(store.load(&id).await?))
}

pub async fn handle_get_book(
    Path((id, book_ref)): Path<(String, String)>,
    Extension(store): Extension<Arc<CorpusStore>>,
) -> Result<Json<Book>, ApiError> {
    let doc = store.load(&id).await?;
    let book = engine::find_book(&doc, &book_ref).ok_or(ApiError::BookNotFound)?;
    Ok(Json(book.clone()))
}

pub async fn handle_get_chapter(
    Path((id, book_ref, chapter)): Path<(String, String, String)>,
    Extension(store): Extension<Arc<CorpusStore>>,
) -> Result<Json<ChapterResponse>, ApiError> {
    // Non-integer chapter segments never reach chapter resolution.
    let number: usize = chapter.parse().map_err(|_| ApiError::ChapterNotFound)?;

    let doc = store.load(&id).await?;
    let book = engine::find_book(&doc, &book_ref).ok_or(ApiError::BookNotFound)?;
    let chapter = engine::chapter(book, number)?;

    Ok(Json(ChapterResponse {
        book: book.name.clone(),
        chapter: number,
        verses: chapter.verses.clone(),
    }))
}

pub async fn handle_list_annotations(
    Extension(store): Extension<Arc<CorpusStore>>,
) -> Json<AnnotationSetsResponse> {
    let sets = store.list_annotation_sets().await;
    Json(AnnotationSetsResponse {
        count: sets.len(),
        sets,
    })
}

pub async fn handle_get_annotation(
    Path((set, book)): Path<(String, String)>,
    Extension(store): Extension<Arc<CorpusStore>>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(store.load_annotation(&set, &book).await?))
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(store): Extension<Arc<CorpusStore>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::InvalidQuery("Search query parameter is required"));
    }

    let corpus = params.corpus.as_deref().unwrap_or_default();
    if corpus.is_empty() {
        return Err(ApiError::InvalidQuery("Corpus parameter is required"));
    }

    let doc = store.load(corpus).await?;
    let (count, results) = engine::search(&doc, query);

    Ok(Json(SearchResponse {
        query: query.to_string(),
        corpus: corpus.to_string(),
        count,
        results,
    }))
}
