use serde::Deserialize;

use super::{indexed, BookSummary};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GenreAbout {
    pub name: String,
    #[serde(default)]
    pub about: String,
    #[serde(default, deserialize_with = "indexed")]
    pub books: Vec<BookSummary>,
}
