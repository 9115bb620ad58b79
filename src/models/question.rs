// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::utils::html::clean_html;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The question prompt shown to the user.
    pub text: String,

    pub option_1: String,
    pub option_2: String,
    pub option_3: String,
    pub option_4: String,

    /// Index of the correct option, 1 through 4.
    pub correct_option: i64,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for sending a question to a test taker (excludes the correct option).
#[derive(Debug, Serialize, Deserialize)]
pub struct PublicQuestion {
    pub id: i64,
    pub text: String,
    /// Options in display order; option N is at index N - 1.
    pub options: [String; 4],
}

impl From<Question> for PublicQuestion {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            text: q.text,
            options: [q.option_1, q.option_2, q.option_3, q.option_4],
        }
    }
}

/// DTO for creating a new question.
///
/// Handlers call `sanitized()` before `validate()`: ammonia entity-escapes
/// `<`, `>` and `&`, so the length limits apply to the stored text.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000))]
    pub text: String,
    #[validate(length(min = 1, max = 100))]
    pub option_1: String,
    #[validate(length(min = 1, max = 100))]
    pub option_2: String,
    #[validate(length(min = 1, max = 100))]
    pub option_3: String,
    #[validate(length(min = 1, max = 100))]
    pub option_4: String,
    #[validate(range(min = 1, max = 4, message = "correct_option must be between 1 and 4."))]
    pub correct_option: i64,
}

/// DTO for updating a question. Fields are optional.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateQuestionRequest {
    #[validate(length(min = 1, max = 1000))]
    pub text: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub option_1: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub option_2: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub option_3: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub option_4: Option<String>,
    #[validate(range(min = 1, max = 4, message = "correct_option must be between 1 and 4."))]
    pub correct_option: Option<i64>,
}

impl CreateQuestionRequest {
    pub fn sanitized(self) -> Self {
        Self {
            text: clean_html(&self.text),
            option_1: clean_html(&self.option_1),
            option_2: clean_html(&self.option_2),
            option_3: clean_html(&self.option_3),
            option_4: clean_html(&self.option_4),
            correct_option: self.correct_option,
        }
    }
}

impl UpdateQuestionRequest {
    pub fn sanitized(self) -> Self {
        let clean = |field: Option<String>| field.map(|v| clean_html(&v));
        Self {
            text: clean(self.text),
            option_1: clean(self.option_1),
            option_2: clean(self.option_2),
            option_3: clean(self.option_3),
            option_4: clean(self.option_4),
            correct_option: self.correct_option,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.option_1.is_none()
            && self.option_2.is_none()
            && self.option_3.is_none()
            && self.option_4.is_none()
            && self.correct_option.is_none()
    }
}
