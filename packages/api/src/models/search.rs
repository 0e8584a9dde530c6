use serde::Deserialize;

/// One search hit. The server discriminates rows with a one-letter `type`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum SearchResult {
    #[serde(rename = "a")]
    Author {
        name: String,
        author_id: u64,
        #[serde(default)]
        certainty: f64,
    },
    #[serde(rename = "b")]
    Book {
        book_id: u64,
        title: String,
        #[serde(default)]
        author: String,
        #[serde(default)]
        cover: Option<String>,
        #[serde(default)]
        certainty: f64,
    },
    #[serde(rename = "g")]
    Genre {
        name: String,
        #[serde(default)]
        certainty: f64,
    },
}

impl SearchResult {
    pub fn certainty(&self) -> f64 {
        match self {
            SearchResult::Author { certainty, .. }
            | SearchResult::Book { certainty, .. }
            | SearchResult::Genre { certainty, .. } => *certainty,
        }
    }
}
