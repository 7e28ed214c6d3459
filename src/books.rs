//! The book/chapter-count table.
//!
//! Loaded once from a JSON-LD ItemList document (data/books.json) and
//! passed by reference into the parser; never mutated after construction.
//! Books absent from the table (Moses, Abraham, ...) are still parseable
//! when the reading spells out explicit chapter numbers.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// The canonical table bundled into the binary.
const BUNDLED_BOOKS: &str = include_str!("../data/books.json");

// ── On-disk shape (JSON-LD ItemList) ─────────────────────────────────

#[derive(Deserialize)]
struct BooksDocument {
    #[serde(rename = "itemListElement")]
    items: Vec<BookEntry>,
}

#[derive(Deserialize)]
struct BookEntry {
    name: String,
    #[serde(rename = "chapterCount")]
    chapter_count: u32,
}

// ── Lookup table ─────────────────────────────────────────────────────

/// Immutable book name → chapter count lookup.
///
/// Listing order follows the source document (canonical book order),
/// while `count` goes through a map for exact-name lookup. Names are
/// case- and spacing-sensitive.
#[derive(Debug, Clone)]
pub struct BookTable {
    counts: HashMap<String, u32>,
    order: Vec<String>,
}

impl BookTable {
    /// Parse a table from JSON-LD text. Returns `None` on malformed JSON.
    pub fn from_json_str(json: &str) -> Option<Self> {
        let doc: BooksDocument = serde_json::from_str(json).ok()?;
        let mut counts = HashMap::with_capacity(doc.items.len());
        let mut order = Vec::with_capacity(doc.items.len());
        for entry in doc.items {
            if !counts.contains_key(&entry.name) {
                order.push(entry.name.clone());
            }
            counts.insert(entry.name, entry.chapter_count);
        }
        Some(Self { counts, order })
    }

    /// Read a table from a file on disk.
    pub fn from_path(path: &Path) -> Option<Self> {
        let json = fs::read_to_string(path).ok()?;
        Self::from_json_str(&json)
    }

    /// The table compiled into the binary (Old Testament).
    pub fn bundled() -> Self {
        Self::from_json_str(BUNDLED_BOOKS).expect("bundled books.json is valid")
    }

    /// Chapter count for an exact book name, or `None` if unknown.
    pub fn count(&self, book: &str) -> Option<u32> {
        self.counts.get(book).copied()
    }

    /// Book names in canonical (document) order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all chapter counts in the table.
    pub fn total_chapters(&self) -> u32 {
        self.order.iter().filter_map(|n| self.count(n)).sum()
    }
}
