//! Client-side form validation. A form that fails here never produces a
//! request; the error's display text is shown in the form's alert banner.

use api::models::{NewDiaryEntry, NewReview, SignUpRequest};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Overall rating cannot be blank.")]
    MissingOverallRating,
    #[error("A summary must be present if you have given your thoughts and feelings.")]
    ThoughtsWithoutSummary,
    #[error("Pages read cannot be blank")]
    MissingPagesRead,
    #[error("Please select a book")]
    MissingBook,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpForm {
    pub first_name: String,
    pub surname: String,
    pub username: String,
    pub password: String,
    pub password_repeat: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<SignUpRequest, ValidationError> {
        if self.password != self.password_repeat {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(SignUpRequest {
            first_name: self.first_name.clone(),
            surname: self.surname.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

/// Empty text inputs are sent as `null`.
fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Ratings and free text shared by the review and diary forms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewForm {
    pub overall_rating: Option<u8>,
    pub plot_rating: Option<u8>,
    pub character_rating: Option<u8>,
    pub summary: String,
    pub thoughts: String,
}

struct CheckedReview {
    overall_rating: u8,
    summary: Option<String>,
    thoughts: Option<String>,
}

impl ReviewForm {
    fn check(&self) -> Result<CheckedReview, ValidationError> {
        let summary = non_empty(&self.summary);
        let thoughts = non_empty(&self.thoughts);
        let overall_rating = self
            .overall_rating
            .ok_or(ValidationError::MissingOverallRating)?;
        if summary.is_none() && thoughts.is_some() {
            return Err(ValidationError::ThoughtsWithoutSummary);
        }
        Ok(CheckedReview {
            overall_rating,
            summary,
            thoughts,
        })
    }

    pub fn validate(&self, session: &str, book_id: u64) -> Result<NewReview, ValidationError> {
        let checked = self.check()?;
        Ok(NewReview {
            session_id: session.to_string(),
            book_id,
            overall_rating: checked.overall_rating,
            plot_rating: self.plot_rating,
            character_rating: self.character_rating,
            summary: checked.summary,
            thoughts: checked.thoughts,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiaryEntryForm {
    pub review: ReviewForm,
    /// Raw text of the pages-read input.
    pub pages_read: String,
    pub book_id: Option<u64>,
    completed: bool,
    as_review: bool,
}

impl DiaryEntryForm {
    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn as_review(&self) -> bool {
        self.as_review
    }

    /// The "publish as review" option is only offered for a finished book;
    /// unticking "completed" also unticks it.
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
        if !completed {
            self.as_review = false;
        }
    }

    pub fn set_as_review(&mut self, as_review: bool) {
        self.as_review = as_review && self.completed;
    }

    pub fn validate(&self, session: &str) -> Result<NewDiaryEntry, ValidationError> {
        let checked = self.review.check()?;
        let pages_read = self.pages_read.trim();
        if pages_read.is_empty() {
            return Err(ValidationError::MissingPagesRead);
        }
        let pages_read = pages_read
            .parse()
            .map_err(|_| ValidationError::MissingPagesRead)?;
        let book_id = self.book_id.ok_or(ValidationError::MissingBook)?;
        Ok(NewDiaryEntry {
            session_id: session.to_string(),
            book_id,
            overall_rating: checked.overall_rating,
            plot_rating: self.review.plot_rating,
            character_rating: self.review.character_rating,
            pages_read,
            summary: checked.summary,
            thoughts: checked.thoughts,
            book_completed: self.completed,
            as_review: self.as_review,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_passwords() {
        let form = SignUpForm {
            password: "abc".into(),
            password_repeat: "xyz".into(),
            ..Default::default()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn matching_passwords_build_request() {
        let form = SignUpForm {
            first_name: "Ada".into(),
            surname: "Lovelace".into(),
            username: "ada".into(),
            password: "engine".into(),
            password_repeat: "engine".into(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.username, "ada");
        assert_eq!(request.password, "engine");
    }

    #[test]
    fn review_requires_overall_rating() {
        let form = ReviewForm {
            summary: "Great".into(),
            ..Default::default()
        };
        let err = form.validate("abc", 1).unwrap_err();
        assert_eq!(err.to_string(), "Overall rating cannot be blank.");
    }

    #[test]
    fn thoughts_need_a_summary() {
        let form = ReviewForm {
            overall_rating: Some(4),
            thoughts: "Loved the ending".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate("abc", 1),
            Err(ValidationError::ThoughtsWithoutSummary)
        );
    }

    #[test]
    fn empty_text_becomes_none() {
        let form = ReviewForm {
            overall_rating: Some(5),
            plot_rating: Some(3),
            ..Default::default()
        };
        let review = form.validate("abc", 9).unwrap();
        assert_eq!(review.summary, None);
        assert_eq!(review.thoughts, None);
        assert_eq!(review.plot_rating, Some(3));
        assert_eq!(review.character_rating, None);
    }

    fn rated_entry() -> DiaryEntryForm {
        DiaryEntryForm {
            review: ReviewForm {
                overall_rating: Some(4),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn diary_checks_in_order() {
        let mut form = DiaryEntryForm::default();
        assert_eq!(form.validate("s"), Err(ValidationError::MissingOverallRating));

        form = rated_entry();
        assert_eq!(form.validate("s"), Err(ValidationError::MissingPagesRead));

        form.pages_read = "120".into();
        assert_eq!(form.validate("s"), Err(ValidationError::MissingBook));

        form.book_id = Some(7);
        let entry = form.validate("s").unwrap();
        assert_eq!(entry.pages_read, 120);
        assert_eq!(entry.book_id, 7);
    }

    #[test]
    fn unticking_completed_unticks_review() {
        let mut form = rated_entry();
        form.set_as_review(true);
        assert!(!form.as_review());

        form.set_completed(true);
        form.set_as_review(true);
        assert!(form.as_review());

        form.set_completed(false);
        assert!(!form.as_review());
    }
}
