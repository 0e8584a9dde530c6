//! Pure view models derived from API records.
//!
//! Components in `ui` call these to decide wording, visibility and derived
//! numbers, keeping every rule here where it can be tested without a DOM.

use api::models::{
    AuthorAbout, BookAbout, BookSummary, ListEntries, ReadingListName, Review, UserReview,
};

use crate::navigation::list_fragment;
use crate::rating::{render_stars, StarIcon};

/// `"person"` for exactly one, `"people"` otherwise.
pub fn person_qualifier(count: u64) -> &'static str {
    if count == 1 {
        "person"
    } else {
        "people"
    }
}

/// `"person has"` / `"people have"`, for the "read this book" statistic.
pub fn has_read_qualifier(count: u64) -> &'static str {
    if count == 1 {
        "person has"
    } else {
        "people have"
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReaderStat {
    pub count: u64,
    pub qualifier: &'static str,
    pub caption: &'static str,
}

/// Want-to-read, reading and read counts with their qualifiers.
pub fn reader_stats(book: &BookAbout) -> [ReaderStat; 3] {
    [
        ReaderStat {
            count: book.num_want_read,
            qualifier: person_qualifier(book.num_want_read),
            caption: "want to read this",
        },
        ReaderStat {
            count: book.num_reading,
            qualifier: person_qualifier(book.num_reading),
            caption: "currently reading this",
        },
        ReaderStat {
            count: book.num_read,
            qualifier: has_read_qualifier(book.num_read),
            caption: "read this",
        },
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct DistributionBar {
    pub stars: u8,
    pub count: u32,
    /// Share of all ratings, 0 to 100.
    pub percentage: f64,
}

impl DistributionBar {
    /// Percentage with two decimals, e.g. `"33.33"`.
    pub fn label(&self) -> String {
        format!("{:.2}", self.percentage)
    }
}

/// One bar per star level, five stars first. A book with no ratings divides
/// by one so every bar reads zero.
pub fn distribution_bars(book: &BookAbout) -> Vec<DistributionBar> {
    let total = f64::from(book.num_ratings.max(1));
    book.distribution()
        .counts
        .iter()
        .zip((1..=5u8).rev())
        .map(|(&count, stars)| DistributionBar {
            stars,
            count,
            percentage: f64::from(count) / total * 100.0,
        })
        .collect()
}

/// A personal row (currently reading, because you read ...) is shown only
/// when the server sent it and it has books.
pub fn visible_row<T>(row: Option<&Vec<T>>) -> Option<&[T]> {
    row.filter(|items| !items.is_empty()).map(Vec::as_slice)
}

#[derive(Clone, Debug, PartialEq)]
pub struct RatingLine {
    pub label: &'static str,
    pub stars: [StarIcon; 5],
}

/// Rendered review. Categories the reviewer skipped are absent.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewView {
    pub ratings: Vec<RatingLine>,
    pub summary: Option<String>,
    pub body: Option<String>,
}

fn rating_lines(
    overall: Option<f64>,
    plot: Option<f64>,
    character: Option<f64>,
) -> Vec<RatingLine> {
    [("Overall", overall), ("Plot", plot), ("Characters", character)]
        .into_iter()
        .filter_map(|(label, rating)| {
            rating.map(|r| RatingLine {
                label,
                stars: render_stars(r),
            })
        })
        .collect()
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            ratings: rating_lines(
                Some(review.overall_rating),
                review.plot_rating,
                review.character_rating,
            ),
            summary: review.summary.clone(),
            body: review.rating_body.clone(),
        }
    }
}

impl From<&UserReview> for ReviewView {
    fn from(review: &UserReview) -> Self {
        Self {
            ratings: rating_lines(
                review.overall_rating,
                review.plot_rating,
                review.character_rating,
            ),
            summary: review.summary.clone(),
            body: review.rating_body.clone(),
        }
    }
}

/// Diary entries and reviews share the optional rating layout.
pub fn entry_ratings(
    overall: Option<f64>,
    plot: Option<f64>,
    character: Option<f64>,
) -> Vec<RatingLine> {
    rating_lines(overall, plot, character)
}

/// An author's books with the author's name filled in where the listing
/// left it out.
pub fn author_books(author: &AuthorAbout) -> Vec<BookSummary> {
    author
        .books
        .iter()
        .cloned()
        .map(|mut book| {
            book.author.get_or_insert_with(|| author.name.clone());
            book
        })
        .collect()
}

/// Match strength of a search hit or recommendation. The server reports a
/// percentage already rounded to one decimal place.
pub fn match_strength(certainty: f64) -> String {
    format!("{certainty:.1}% match")
}

/// `"Added <date>"`, or nothing when the server sent no date.
pub fn added_on(date_added: &str) -> Option<String> {
    let date = date_added.trim();
    (!date.is_empty()).then(|| format!("Added {date}"))
}

/// Index of the list to open on the My Books page: the one whose bookmark
/// matches `fragment`, else the first.
pub fn initial_list(lists: &[ReadingListName], fragment: Option<&str>) -> Option<usize> {
    if lists.is_empty() {
        return None;
    }
    let wanted = fragment.map(|f| f.trim_start_matches('#')).filter(|f| !f.is_empty());
    let matched = wanted.and_then(|f| lists.iter().position(|l| list_fragment(&l.name) == f));
    Some(matched.unwrap_or(0))
}

/// The "move to next list" button, if the server offered one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveButton {
    pub label: String,
    pub target_list_id: u64,
}

pub fn move_button(entries: &ListEntries) -> Option<MoveButton> {
    entries.move_action().map(|(label, target)| MoveButton {
        label: label.to_string(),
        target_list_id: target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(json: serde_json::Value) -> BookAbout {
        let mut base = serde_json::json!({
            "title": "Emma", "synopsis": "", "author": "Jane Austen", "author_id": 1
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), json.as_object()) {
            base.extend(extra.clone());
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn qualifiers_are_singular_for_one() {
        let stats = reader_stats(&book(
            serde_json::json!({"num_want_read": 1, "num_reading": 0, "num_read": 1}),
        ));
        assert_eq!(stats[0].qualifier, "person");
        assert_eq!(stats[1].qualifier, "people");
        assert_eq!(stats[2].qualifier, "person has");

        assert_eq!(has_read_qualifier(4), "people have");
    }

    #[test]
    fn distribution_percentages() {
        let bars = distribution_bars(&book(serde_json::json!({
            "num_ratings": 3, "num_5_stars": 2, "num_4_stars": 1
        })));
        assert_eq!(bars[0].stars, 5);
        assert_eq!(bars[0].label(), "66.67");
        assert_eq!(bars[1].label(), "33.33");
        assert_eq!(bars[4].stars, 1);
        assert_eq!(bars[4].label(), "0.00");
    }

    #[test]
    fn unrated_book_has_zero_bars() {
        let bars = distribution_bars(&book(serde_json::json!({})));
        assert!(bars.iter().all(|b| b.percentage == 0.0));
    }

    #[test]
    fn empty_or_missing_rows_are_hidden() {
        let empty: Vec<u8> = Vec::new();
        assert!(visible_row(Some(&empty)).is_none());
        assert!(visible_row::<u8>(None).is_none());
        assert_eq!(visible_row(Some(&vec![1, 2])), Some(&[1, 2][..]));
    }

    #[test]
    fn skipped_categories_are_absent() {
        let review = Review {
            id: 1,
            username: "ada".into(),
            date_added: "2024-01-02".into(),
            overall_rating: 3.5,
            plot_rating: None,
            character_rating: Some(4.0),
            summary: None,
            rating_body: None,
        };
        let view = ReviewView::from(&review);
        let labels: Vec<_> = view.ratings.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Overall", "Characters"]);
        assert!(view.summary.is_none());
    }

    #[test]
    fn author_books_carry_the_author_name() {
        let author: AuthorAbout = serde_json::from_value(serde_json::json!({
            "author_id": 3, "name": "Jane Austen",
            "books": {"0": {"id": 5, "title": "Emma"}, "1": {"id": 6, "title": "Persuasion", "author": "J. Austen"}}
        }))
        .unwrap();
        let books = author_books(&author);
        assert_eq!(books[0].author.as_deref(), Some("Jane Austen"));
        assert_eq!(books[1].author.as_deref(), Some("J. Austen"));
    }

    #[test]
    fn match_strength_is_a_percentage() {
        assert_eq!(match_strength(100.0), "100.0% match");
        assert_eq!(match_strength(82.4), "82.4% match");
        assert_eq!(match_strength(0.0), "0.0% match");
    }

    #[test]
    fn missing_date_hides_added_line() {
        assert_eq!(added_on("2024-03-01").as_deref(), Some("Added 2024-03-01"));
        assert_eq!(added_on(""), None);
        assert_eq!(added_on("  "), None);
    }

    #[test]
    fn bookmark_selects_list() {
        let lists = vec![
            ReadingListName { id: 1, name: "Currently Reading".into() },
            ReadingListName { id: 2, name: "Want to Read".into() },
        ];
        assert_eq!(initial_list(&lists, Some("#WantToRead")), Some(1));
        assert_eq!(initial_list(&lists, Some("#Unknown")), Some(0));
        assert_eq!(initial_list(&lists, None), Some(0));
        assert_eq!(initial_list(&[], None), None);
    }
}
