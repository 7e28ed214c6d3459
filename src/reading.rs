//! Reading-reference parsing.
//!
//! Turns a free-text weekly reading assignment into an ordered sequence
//! of chapter references.
//!
//! Real data examples:
//!   "Genesis 1–2; Moses 2–3; Abraham 4–5"   three books, one range each
//!   "Psalms 1-2; 8; 19-33"                  one book, several ranges
//!   "1 Samuel 8–10; 13; 15–18"              numbered book name
//!   "Song of Solomon"                       whole-book reference
//!   "Easter"                                special reading, never parsed
//!
//! Parsing is best-effort by construction: no function here returns an
//! error. Unparseable segments, unknown whole-book references and
//! malformed chapter tokens all contribute zero chapters.

use std::sync::LazyLock;

use regex::Regex;
use timeline_types::ChapterRef;

use crate::books::BookTable;

/// Non-scriptural week entries that must never go through the parser.
pub const SPECIAL_READINGS: &[&str] = &[
    "Introduction to the Old Testament",
    "Easter",
    "Christmas",
];

// Book name at the head of a segment: an optional leading digit
// ("1 Samuel"), then letters, then an optional "of <word>" tail
// ("Song of Solomon"). Everything after is the chapter part.
static RE_BOOK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d?\s*[A-Za-z]+(?:\s+of\s+[A-Za-z]+)?)\s*(.*)$").unwrap()
});

// "3-5" — an inclusive chapter range.
static RE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*-\s*(\d+)$").unwrap());

// A part that opens a new book segment: starts with an optional digit
// then a letter.
static RE_STARTS_WITH_BOOK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d?\s*[A-Za-z]").unwrap());

// A bare chapter-or-range token ("8", "19-33") — a continuation of the
// current book, not a new segment.
static RE_CHAPTER_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(-\d+)?$").unwrap());

/// Collapse en dash, em dash and minus sign to a plain hyphen.
pub fn normalize_dashes(text: &str) -> String {
    text.replace(['\u{2013}', '\u{2014}', '\u{2212}'], "-")
}

/// Is this reading one of the fixed non-scriptural entries?
pub fn is_special_reading(reading: &str) -> bool {
    SPECIAL_READINGS.contains(&reading)
}

/// Split a reading string into book-scoped segments.
///
/// Splits on `;`, then re-groups so that chapter-only parts stay with
/// the book that opened them: "Psalms 1-2; 8; 19-33" is one segment,
/// "Genesis 1-2; Moses 2-3" is two. A leading orphan part opens a
/// segment unconditionally. Empty input yields no segments.
pub fn segment_reading(reading: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for part in reading.split(';').map(str::trim) {
        let starts_with_book = RE_STARTS_WITH_BOOK.is_match(part);
        let chapter_only = RE_CHAPTER_ONLY.is_match(part);

        if starts_with_book && !chapter_only {
            // New book: close out the previous segment
            if !current.is_empty() {
                segments.push(current);
            }
            current = part.to_string();
        } else if !current.is_empty() {
            // Continuation of the current book (additional psalm numbers)
            current.push_str("; ");
            current.push_str(part);
        } else {
            current = part.to_string();
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Parse one book-scoped segment into chapter references.
///
/// "Genesis 1-5" expands the range; "Psalms 1-2; 8" handles several
/// comma/semicolon separated tokens; a bare book name expands to every
/// chapter in the table (or nothing, if the book is unknown there).
/// Inverted ranges ("5-3") and non-numeric tokens emit nothing.
pub fn parse_segment(segment: &str, books: &BookTable) -> Vec<ChapterRef> {
    let mut chapters = Vec::new();
    let normalized = normalize_dashes(segment.trim());

    let caps = match RE_BOOK.captures(&normalized) {
        Some(c) => c,
        None => return chapters,
    };
    let book = caps[1].trim();
    let chapter_part = caps[2].trim();

    // Bare book name: whole-book reference
    if chapter_part.is_empty() {
        if let Some(count) = books.count(book) {
            for chapter in 1..=count {
                chapters.push(ChapterRef::new(book, chapter));
            }
        }
        return chapters;
    }

    for token in chapter_part.split([',', ';']).map(str::trim) {
        if token.is_empty() {
            continue;
        }
        if let Some(range) = RE_RANGE.captures(token) {
            // Overflowing bounds are malformed like any other bad token
            if let (Ok(start), Ok(end)) = (range[1].parse::<u32>(), range[2].parse::<u32>()) {
                for chapter in start..=end {
                    chapters.push(ChapterRef::new(book, chapter));
                }
            }
        } else if let Ok(chapter) = token.parse::<u32>() {
            chapters.push(ChapterRef::new(book, chapter));
        }
        // Anything else is malformed and skipped
    }

    chapters
}

/// Parse a full reading string into the flat, source-ordered chapter
/// sequence. Special readings parse to nothing.
pub fn parse_reading(reading: &str, books: &BookTable) -> Vec<ChapterRef> {
    if is_special_reading(reading) {
        return Vec::new();
    }

    let normalized = normalize_dashes(reading);
    segment_reading(&normalized)
        .iter()
        .flat_map(|segment| parse_segment(segment, books))
        .collect()
}
