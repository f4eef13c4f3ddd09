//! Resolution and Search
//!
//! Pure in-memory scans over one loaded `CorpusDocument`. Positions reported
//! to callers (chapter and verse numbers) are 1-based scan positions;
//! internal storage stays 0-based.

use crate::corpus::types::{Book, Chapter, CorpusDocument};
use crate::error::ApiError;
use crate::query::types::VerseHit;

/// Search results are truncated to this many hits; the reported match count
/// stays uncapped.
pub const SEARCH_RESULT_CAP: usize = 100;

/// Resolves a book reference against every book across all divisions.
///
/// One left-to-right scan in division/book order, testing abbreviation OR
/// name per candidate case-insensitively. When a reference matches one book
/// by abbreviation and a later book by name, the earlier book wins.
pub fn find_book<'a>(doc: &'a CorpusDocument, book_ref: &str) -> Option<&'a Book> {
    let wanted = book_ref.to_uppercase();

    doc.divisions
        .iter()
        .flat_map(|division| division.books.iter())
        .find(|book| {
            let by_abbrev = book
                .abbreviation
                .as_deref()
                .is_some_and(|abbrev| abbrev.to_uppercase() == wanted);
            by_abbrev || book.name.to_uppercase() == wanted
        })
}

/// Returns the chapter at 1-based position `number`, or `ChapterNotFound`
/// when the position is outside `[1, chapter count]`.
pub fn chapter(book: &Book, number: usize) -> Result<&Chapter, ApiError> {
    if (1..=book.chapters.len()).contains(&number) {
        Ok(&book.chapters[number - 1])
    } else {
        Err(ApiError::ChapterNotFound)
    }
}

/// Case-insensitive substring scan over every verse of the corpus, in
/// document order.
///
/// Returns the uncapped total match count alongside the first
/// [`SEARCH_RESULT_CAP`] hits in scan order; the two diverge by design when
/// matches exceed the cap.
pub fn search(doc: &CorpusDocument, query: &str) -> (usize, Vec<VerseHit>) {
    let needle = query.to_lowercase();

    let mut total = 0;
    let mut results = Vec::new();

    for division in &doc.divisions {
        for book in &division.books {
            for (chapter_idx, chapter) in book.chapters.iter().enumerate() {
                for (verse_idx, verse) in chapter.verses.iter().enumerate() {
                    if !verse.text.to_lowercase().contains(&needle) {
                        continue;
                    }
                    total += 1;
                    if results.len() < SEARCH_RESULT_CAP {
                        results.push(VerseHit {
                            book: book.name.clone(),
                            chapter: chapter_idx + 1,
                            verse: verse_idx + 1,
                            text: verse.text.clone(),
                        });
                    }
                }
            }
        }
    }

    (total, results)
}
