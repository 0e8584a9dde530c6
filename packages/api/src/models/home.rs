use serde::Deserialize;

use super::{indexed, optional_indexed, BookSummary};

/// Home page rows. Personal rows are `None` for anonymous visitors.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct HomeData {
    #[serde(default, deserialize_with = "indexed")]
    pub trending: Vec<BookSummary>,
    #[serde(default, deserialize_with = "indexed")]
    pub newest_additions: Vec<BookSummary>,
    #[serde(default, deserialize_with = "optional_indexed")]
    pub currently_reading: Option<Vec<BookSummary>>,
    #[serde(default, deserialize_with = "optional_indexed")]
    pub want_read: Option<Vec<BookSummary>>,
    #[serde(default, deserialize_with = "optional_indexed")]
    pub recommended: Option<Vec<BookSummary>>,
}

/// Browse page rows. The "because you..." rows carry the title of the book
/// they are based on.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct BrowseData {
    #[serde(default, deserialize_with = "indexed")]
    pub trending: Vec<BookSummary>,
    #[serde(default, deserialize_with = "indexed")]
    pub newest_additions: Vec<BookSummary>,
    #[serde(default, deserialize_with = "indexed")]
    pub highly_rated: Vec<BookSummary>,
    #[serde(default, deserialize_with = "optional_indexed")]
    pub because_added: Option<Vec<BookSummary>>,
    #[serde(default)]
    pub because_added_title: Option<String>,
    #[serde(default, deserialize_with = "optional_indexed")]
    pub because_read: Option<Vec<BookSummary>>,
    #[serde(default)]
    pub because_read_title: Option<String>,
    #[serde(default, deserialize_with = "optional_indexed")]
    pub favourite_authors: Option<Vec<BookSummary>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_home_has_no_personal_rows() {
        let data: HomeData = serde_json::from_str(
            r#"{"trending": [], "newest_additions": [], "currently_reading": null, "want_read": null, "recommended": null}"#,
        )
        .unwrap();
        assert!(data.currently_reading.is_none());
        assert!(data.recommended.is_none());
    }

    #[test]
    fn browse_without_user_rows() {
        let data: BrowseData = serde_json::from_str(
            r#"{"trending": [], "newest_additions": [], "highly_rated": [{"book_id": 1, "title": "Emma", "author": "Jane Austen", "cover": "/e.jpg"}],
                "because_read": null, "because_added": null}"#,
        )
        .unwrap();
        assert_eq!(data.highly_rated.len(), 1);
        assert!(data.favourite_authors.is_none());
    }
}
