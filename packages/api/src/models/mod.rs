//! Wire models for the Bookshelf API.
//!
//! Field names follow the server's JSON exactly. Several endpoints encode
//! collections as objects keyed `"0"`, `"1"`, ... rather than arrays; those
//! fields go through [`Indexed`], which accepts both shapes.

mod account;
mod author;
mod book;
mod diary;
mod genre;
mod home;
mod reading_list;
mod recommendation;
mod search;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

pub use account::{AccountResponse, SignInRequest, SignUpRequest};
pub use author::{AuthorAbout, FollowRequest};
pub use book::{
    BookAbout, BookSummary, DeleteReviewRequest, NewReview, RatingDistribution, Review,
    UserReview,
};
pub use diary::{DeleteDiaryEntryRequest, DiaryData, DiaryEntry, NewDiaryEntry};
pub use genre::GenreAbout;
pub use home::{BrowseData, HomeData};
pub use reading_list::{
    CreateListRequest, ListEntries, ListEntry, ListEntryRequest, ListTarget, MoveEntryRequest,
    ReadingListName, RemoveListRequest,
};
pub use recommendation::{
    AcceptRecommendationRequest, AuthorChoice, Recommendation, Recommendations,
    RecommendationsResponse, RemoveRecommendationRequest, SetPreferencesRequest,
};
pub use search::SearchResult;

/// A collection that may arrive as a JSON array or as an index-keyed object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Indexed<T>(pub Vec<T>);

impl<T> Indexed<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Indexed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            List(Vec<T>),
            Keyed(BTreeMap<String, T>),
        }

        match Repr::<T>::deserialize(deserializer)? {
            Repr::List(items) => Ok(Indexed(items)),
            Repr::Keyed(map) => {
                let mut pairs = map
                    .into_iter()
                    .map(|(key, value)| {
                        key.parse::<usize>()
                            .map(|index| (index, value))
                            .map_err(|_| D::Error::custom(format!("non-index key `{key}`")))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                pairs.sort_by_key(|(index, _)| *index);
                Ok(Indexed(pairs.into_iter().map(|(_, value)| value).collect()))
            }
        }
    }
}

pub(crate) fn indexed<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Indexed::deserialize(deserializer).map(Indexed::into_vec)
}

pub(crate) fn optional_indexed<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Indexed<T>>::deserialize(deserializer).map(|v| v.map(Indexed::into_vec))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_accepts_arrays() {
        let v: Indexed<u32> = serde_json::from_str("[3, 1, 2]").unwrap();
        assert_eq!(v.0, vec![3, 1, 2]);
    }

    #[test]
    fn indexed_orders_keyed_objects_numerically() {
        let v: Indexed<String> =
            serde_json::from_str(r#"{"10": "k", "2": "c", "0": "a", "1": "b"}"#).unwrap();
        assert_eq!(v.0, vec!["a", "b", "c", "k"]);
    }

    #[test]
    fn indexed_rejects_named_keys() {
        let v: Result<Indexed<u32>, _> = serde_json::from_str(r#"{"first": 1}"#);
        assert!(v.is_err());
    }
}
