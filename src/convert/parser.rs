//! XML Structure Parser
//!
//! Walks the source document's event stream and builds a `CorpusDocument`.
//! Source order is preserved unconditionally: declared `number` attributes
//! are recorded but never used for sorting, so a misnumbered source still
//! converts in document order. Verse text is accumulated unescaped and
//! untrimmed so converted text round-trips byte-identically.

use std::io::BufRead;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

use crate::corpus::names::book_name;
use crate::corpus::types::{Book, Chapter, CorpusDocument, Division, Verse};

#[derive(Debug, Error)]
pub enum ConvertError {
    /// A required numeric attribute is missing or unparseable. Aborts the
    /// whole document; partial output is never emitted.
    #[error("malformed {node} node: missing or non-numeric `{attribute}` attribute")]
    MalformedNode {
        node: &'static str,
        attribute: &'static str,
    },

    #[error("XML parse error: {0}")]
    Xml(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Converts one source document read from `path`.
pub fn convert_file(path: &Path) -> Result<CorpusDocument, ConvertError> {
    let mut reader = Reader::from_file(path).map_err(|err| ConvertError::Xml(err.to_string()))?;
    convert_document(&mut reader)
}

/// Converts one source document from an already-open XML reader.
///
/// The root element carries the corpus attributes; nested `testament`,
/// `book`, `chapter`, and `verse` elements map one-to-one onto the canonical
/// model. Unknown elements (inline markup inside verses included) are
/// skipped, their text still counts toward the enclosing verse.
pub fn convert_document<R: BufRead>(
    reader: &mut Reader<R>,
) -> Result<CorpusDocument, ConvertError> {
    let mut buf = Vec::new();
    let mut doc: Option<CorpusDocument> = None;
    let mut in_verse = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if open_node(&e, &mut doc)? == Node::Verse {
                    in_verse = true;
                }
            }
            // Self-closing nodes never carry text; a self-closing verse
            // keeps its defaulted empty string.
            Ok(Event::Empty(e)) => {
                open_node(&e, &mut doc)?;
            }
            Ok(Event::Text(e)) if in_verse => {
                let text = e.unescape().map_err(|err| ConvertError::Xml(err.to_string()))?;
                if let Some(verse) = current_verse(&mut doc) {
                    verse.text.push_str(&text);
                }
            }
            Ok(Event::End(e)) if e.local_name().as_ref() == b"verse" => {
                in_verse = false;
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(ConvertError::Xml(err.to_string())),
            _ => {}
        }
        buf.clear();
    }

    doc.ok_or_else(|| ConvertError::Xml("document has no root element".to_string()))
}

#[derive(PartialEq)]
enum Node {
    Verse,
    Other,
}

/// Appends the record for one opening element at its position in the tree.
///
/// The first element seen becomes the corpus root whatever its tag name;
/// after that only the four structural tags are meaningful.
fn open_node(e: &BytesStart, doc: &mut Option<CorpusDocument>) -> Result<Node, ConvertError> {
    let Some(doc) = doc.as_mut() else {
        *doc = Some(CorpusDocument {
            name: attr(e, b"name")?.unwrap_or_default(),
            abbreviation: attr(e, b"abbreviation")?.unwrap_or_default(),
            language: attr(e, b"language")?.unwrap_or_default(),
            divisions: Vec::new(),
        });
        return Ok(Node::Other);
    };

    match e.local_name().as_ref() {
        b"testament" => {
            doc.divisions.push(Division {
                name: attr(e, b"name")?.unwrap_or_default(),
                books: Vec::new(),
            });
        }
        b"book" => {
            let ordinal = numeric_attr(e, "book", "number")?;
            if let Some(division) = doc.divisions.last_mut() {
                division.books.push(Book {
                    ordinal,
                    name: book_name(ordinal),
                    abbreviation: attr(e, b"abbrev")?,
                    chapters: Vec::new(),
                });
            }
        }
        b"chapter" => {
            let number = numeric_attr(e, "chapter", "number")?;
            if let Some(book) = doc
                .divisions
                .last_mut()
                .and_then(|d| d.books.last_mut())
            {
                book.chapters.push(Chapter {
                    number,
                    verses: Vec::new(),
                });
            }
        }
        b"verse" => {
            let number = numeric_attr(e, "verse", "number")?;
            if let Some(chapter) = doc
                .divisions
                .last_mut()
                .and_then(|d| d.books.last_mut())
                .and_then(|b| b.chapters.last_mut())
            {
                chapter.verses.push(Verse {
                    number,
                    text: String::new(),
                });
                return Ok(Node::Verse);
            }
        }
        _ => {}
    }

    Ok(Node::Other)
}

/// The verse currently receiving text: the last verse of the last chapter of
/// the last book of the last division.
fn current_verse(doc: &mut Option<CorpusDocument>) -> Option<&mut Verse> {
    doc.as_mut()?
        .divisions
        .last_mut()?
        .books
        .last_mut()?
        .chapters
        .last_mut()?
        .verses
        .last_mut()
}

fn attr(e: &BytesStart, key: &[u8]) -> Result<Option<String>, ConvertError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| ConvertError::Xml(err.to_string()))?;
        if attr.key.as_ref() == key {
            let value = attr
                .unescape_value()
                .map_err(|err| ConvertError::Xml(err.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn numeric_attr(
    e: &BytesStart,
    node: &'static str,
    attribute: &'static str,
) -> Result<u32, ConvertError> {
    attr(e, attribute.as_bytes())?
        .and_then(|value| value.trim().parse::<u32>().ok())
        .ok_or(ConvertError::MalformedNode { node, attribute })
}
