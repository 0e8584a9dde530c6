use serde::{Deserialize, Serialize};

use super::{indexed, BookSummary};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthorAbout {
    pub author_id: u64,
    pub name: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub num_followers: u64,
    #[serde(default, deserialize_with = "indexed")]
    pub books: Vec<BookSummary>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub num_ratings: u32,
    #[serde(default, deserialize_with = "indexed")]
    pub genres: Vec<String>,
}

/// Body for both follow and unfollow. The server answers with the new
/// follower count as plain text.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FollowRequest {
    pub session_id: String,
    pub author_id: u64,
}
