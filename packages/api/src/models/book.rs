use serde::{Deserialize, Serialize};

use super::{indexed, optional_indexed};

/// Compact book card used by home rows, genre/author pages and similar-books.
///
/// The server names the identifier `book_id` in some payloads and `id` in
/// others; both are accepted.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BookSummary {
    #[serde(alias = "id")]
    pub book_id: u64,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
}

/// A published review on a book page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Review {
    pub id: u64,
    pub username: String,
    pub date_added: String,
    pub overall_rating: f64,
    #[serde(default)]
    pub plot_rating: Option<f64>,
    #[serde(default)]
    pub character_rating: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub rating_body: Option<String>,
}

/// The signed-in user's own review of the book.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserReview {
    pub review_id: u64,
    #[serde(default)]
    pub overall_rating: Option<f64>,
    #[serde(default)]
    pub plot_rating: Option<f64>,
    #[serde(default)]
    pub character_rating: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub rating_body: Option<String>,
}

/// Number of ratings at each star level, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingDistribution {
    pub counts: [u32; 5],
}

/// Everything the book page shows.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BookAbout {
    pub title: String,
    pub synopsis: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub purchase_link: Option<String>,
    #[serde(default, deserialize_with = "indexed")]
    pub genres: Vec<String>,

    pub author: String,
    pub author_id: u64,
    #[serde(default)]
    pub author_about: String,
    #[serde(default)]
    pub author_following: bool,
    #[serde(default)]
    pub author_number_followers: u64,

    #[serde(default)]
    pub num_want_read: u64,
    #[serde(default)]
    pub num_reading: u64,
    #[serde(default)]
    pub num_read: u64,

    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub num_ratings: u32,
    #[serde(default)]
    pub num_5_stars: u32,
    #[serde(default)]
    pub num_4_stars: u32,
    #[serde(default)]
    pub num_3_stars: u32,
    #[serde(default)]
    pub num_2_stars: u32,
    #[serde(default)]
    pub num_1_star: u32,

    #[serde(default, deserialize_with = "indexed")]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub current_user_review: Option<UserReview>,
    #[serde(default, deserialize_with = "optional_indexed")]
    pub similar_books: Option<Vec<BookSummary>>,
}

impl BookAbout {
    pub fn distribution(&self) -> RatingDistribution {
        RatingDistribution {
            counts: [
                self.num_5_stars,
                self.num_4_stars,
                self.num_3_stars,
                self.num_2_stars,
                self.num_1_star,
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewReview {
    pub session_id: String,
    pub book_id: u64,
    pub overall_rating: u8,
    pub plot_rating: Option<u8>,
    pub character_rating: Option<u8>,
    pub summary: Option<String>,
    pub thoughts: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DeleteReviewRequest {
    pub session_id: String,
    pub review_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_accepts_either_id_name() {
        let a: BookSummary =
            serde_json::from_str(r#"{"book_id": 4, "title": "Dune", "author": "Frank Herbert", "cover": "/c.jpg"}"#)
                .unwrap();
        let b: BookSummary =
            serde_json::from_str(r#"{"id": 4, "title": "Dune", "cover": "/c.jpg"}"#).unwrap();
        assert_eq!(a.book_id, b.book_id);
        assert!(b.author.is_none());
    }

    #[test]
    fn book_about_with_keyed_reviews() {
        let json = r#"{
            "title": "Dune", "synopsis": "<p>Sand</p>", "author": "Frank Herbert",
            "author_id": 9, "genres": ["Sci-Fi"],
            "num_5_stars": 3, "num_1_star": 1, "num_ratings": 4, "average_rating": 4.0,
            "reviews": {"0": {"id": 1, "username": "paul", "date_added": "01/02/2023",
                              "overall_rating": 5, "plot_rating": null, "character_rating": 4,
                              "summary": null, "rating_body": null}},
            "current_user_review": null,
            "similar_books": [{"book_id": 2, "title": "Dune Messiah", "author": "Frank Herbert", "cover": "/m.jpg"}]
        }"#;
        let about: BookAbout = serde_json::from_str(json).unwrap();
        assert_eq!(about.reviews.len(), 1);
        assert_eq!(about.reviews[0].character_rating, Some(4.0));
        assert_eq!(about.distribution().counts, [3, 0, 0, 0, 1]);
        assert_eq!(about.similar_books.map(|s| s.len()), Some(1));
    }
}
