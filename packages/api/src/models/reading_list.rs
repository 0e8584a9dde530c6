use serde::{Deserialize, Serialize};

use super::indexed;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReadingListName {
    pub id: u64,
    pub name: String,
}

/// One book inside a reading list.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ListEntry {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub synopsis: String,
    pub author: String,
    pub author_id: u64,
    pub date_added: String,
    #[serde(default, deserialize_with = "indexed")]
    pub genres: Vec<String>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub num_reviews: u32,
}

/// Contents of a reading list plus the optional "move to next list" action.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ListEntries {
    #[serde(default, deserialize_with = "indexed")]
    pub books: Vec<ListEntry>,
    /// Label of the move action, e.g. "Mark as Read".
    #[serde(default)]
    pub button: Option<String>,
    #[serde(default)]
    pub move_target_id: Option<u64>,
    /// Notice shown when the list is empty.
    #[serde(default)]
    pub meta: Option<String>,
}

impl ListEntries {
    /// The move action, present only when the server names both a label and
    /// a target list.
    pub fn move_action(&self) -> Option<(&str, u64)> {
        match (self.button.as_deref(), self.move_target_id) {
            (Some(label), Some(target)) if !label.is_empty() => Some((label, target)),
            _ => None,
        }
    }
}

/// A reading list as offered in the book page's "add to list" popup.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ListTarget {
    pub id: u64,
    pub list_name: String,
    #[serde(default)]
    pub has_book: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateListRequest {
    pub session_id: String,
    pub list_name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RemoveListRequest {
    pub session_id: String,
    pub list_id: u64,
}

/// Body for adding or removing a book in a list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListEntryRequest {
    pub session_id: String,
    pub list_id: u64,
    pub book_id: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoveEntryRequest {
    pub session_id: String,
    pub list_id: u64,
    pub book_id: u64,
    pub target_list_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_action_requires_label_and_target() {
        let entries: ListEntries = serde_json::from_str(
            r#"{"books": {}, "button": "Mark as Read", "move_target_id": 3, "meta": "You have no books in this list"}"#,
        )
        .unwrap();
        assert_eq!(entries.move_action(), Some(("Mark as Read", 3)));
        assert!(entries.books.is_empty());

        let custom: ListEntries =
            serde_json::from_str(r#"{"books": [], "button": null, "move_target_id": null}"#).unwrap();
        assert_eq!(custom.move_action(), None);
    }
}
