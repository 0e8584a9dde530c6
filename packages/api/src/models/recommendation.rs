use serde::{Deserialize, Serialize};

use super::Indexed;

/// A ranked recommendation for a user with stored preferences.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Recommendation {
    pub book_id: u64,
    pub title: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub author_name: String,
    pub author_id: u64,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub date_added: String,
    /// Match strength reported by the recommender.
    #[serde(default)]
    pub certainty: f64,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub number_ratings: u32,
}

/// An author offered in the new-user preference form.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthorChoice {
    pub id: u64,
    pub name: String,
}

/// Raw `get_recommendations` payload. `data` changes shape with `new_user`,
/// so it is decoded in a second step by [`RecommendationsResponse::into_mode`].
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub new_user: bool,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub list_id: Option<u64>,
}

/// The two mutually exclusive render modes of the recommendations page.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendations {
    /// No preferences stored yet: collect favourite authors.
    NewUser { authors: Vec<AuthorChoice> },
    /// Ranked list; `want_to_read_list` is where "add" moves a book.
    Ranked {
        items: Vec<Recommendation>,
        want_to_read_list: Option<u64>,
    },
}

impl RecommendationsResponse {
    pub fn into_mode(self) -> Result<Recommendations, serde_json::Error> {
        if self.new_user {
            let authors: Indexed<AuthorChoice> = serde_json::from_value(self.data)?;
            Ok(Recommendations::NewUser {
                authors: authors.into_vec(),
            })
        } else {
            let items: Indexed<Recommendation> = serde_json::from_value(self.data)?;
            Ok(Recommendations::Ranked {
                items: items.into_vec(),
                want_to_read_list: self.list_id,
            })
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RemoveRecommendationRequest {
    pub session_id: String,
    pub book_id: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AcceptRecommendationRequest {
    pub session_id: String,
    pub book_id: u64,
    pub list_id: u64,
}

/// Author ids are sent as strings, the way checkbox values are read.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SetPreferencesRequest {
    pub session_id: String,
    pub authors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_mode_lists_authors() {
        let raw: RecommendationsResponse = serde_json::from_str(
            r#"{"new_user": true, "data": [{"id": 1, "name": "Ursula K. Le Guin"}, {"id": 2, "name": "Iain M. Banks"}]}"#,
        )
        .unwrap();
        match raw.into_mode().unwrap() {
            Recommendations::NewUser { authors } => assert_eq!(authors.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn ranked_mode_keeps_list_id() {
        let raw: RecommendationsResponse = serde_json::from_str(
            r#"{"new_user": false, "list_id": 7, "data": [{"book_id": 3, "title": "Excession",
                "author_name": "Iain M. Banks", "author_id": 2, "certainty": 0.82, "genres": ["Sci-Fi"]}]}"#,
        )
        .unwrap();
        match raw.into_mode().unwrap() {
            Recommendations::Ranked {
                items,
                want_to_read_list,
            } => {
                assert_eq!(items[0].title, "Excession");
                assert_eq!(want_to_read_list, Some(7));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
