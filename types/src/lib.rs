use std::fmt;

use serde::{Deserialize, Serialize};

// ── Chapter reference ────────────────────────────────────────────────────

/// One addressable chapter: a book name plus a 1-based chapter number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChapterRef {
    pub book: String,
    pub chapter: u32,
}

impl ChapterRef {
    pub fn new(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
        }
    }
}

impl fmt::Display for ChapterRef {
    /// Renders as `"Genesis 1"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)
    }
}

// ── Weekly lesson ────────────────────────────────────────────────────────

/// The Come, Follow Me lesson attached to a week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Lesson title displayed as link text
    pub title: String,
    /// URL of the official lesson page
    pub link: String,
    /// Scripture reading assignment for the week, free text
    pub reading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// ── Week record ──────────────────────────────────────────────────────────

/// A single week of the yearly timeline, as stored in weeks.json.
///
/// Field names are camelCase on disk; `cfmDaily` is absent until a
/// generate pass fills it in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    /// Week number (1-52)
    pub week: u32,
    /// ISO date for the Monday the week starts on
    pub start_date: String,
    /// ISO date for the Sunday the week ends on
    pub end_date: String,
    /// Human-readable date range label, e.g. "Jan 5–11"
    pub date_label: String,
    pub cfm: Lesson,
    /// Chronological-order daily readings (supplied upstream, 7 entries)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chronological: Vec<String>,
    /// Lesson-order daily readings computed from `cfm.reading` (7 entries)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cfm_daily: Option<Vec<String>>,
}
