use serde::{Deserialize, Serialize};

use super::{indexed, BookSummary};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DiaryEntry {
    pub entry_id: u64,
    pub book_id: u64,
    pub title: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub author_name: String,
    pub author_id: u64,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub number_ratings: u32,
    #[serde(default)]
    pub overall_rating: Option<f64>,
    #[serde(default)]
    pub plot_rating: Option<f64>,
    #[serde(default)]
    pub character_rating: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub thoughts: Option<String>,
    pub date_added: String,
    #[serde(default)]
    pub pages_read: u32,
}

/// Diary page payload: existing entries plus the currently-reading books the
/// new-entry form may choose from.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct DiaryData {
    #[serde(default, deserialize_with = "indexed")]
    pub entries: Vec<DiaryEntry>,
    #[serde(default, deserialize_with = "indexed")]
    pub books: Vec<BookSummary>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewDiaryEntry {
    pub session_id: String,
    pub book_id: u64,
    pub overall_rating: u8,
    pub plot_rating: Option<u8>,
    pub character_rating: Option<u8>,
    pub pages_read: u32,
    pub summary: Option<String>,
    pub thoughts: Option<String>,
    pub book_completed: bool,
    pub as_review: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DeleteDiaryEntryRequest {
    pub session_id: String,
    pub entry_id: u64,
}
