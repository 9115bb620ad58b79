// src/models/test_result.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'test_results' table in the database.
/// One row per submitted test; rows are append-only.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestResult {
    pub id: i64,
    pub user_id: i64,
    pub score: i64,
    pub total_questions: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A result joined with its owner's username, for the admin listing.
#[derive(Debug, Serialize, FromRow)]
pub struct TestResultEntry {
    pub id: i64,
    pub username: String,
    pub score: i64,
    pub total_questions: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for submitting a test attempt.
#[derive(Debug, Deserialize)]
pub struct SubmitTestRequest {
    /// Key: question ID. Value: selected option, normally "1".."4".
    /// Kept loose so that a malformed entry only loses its own point.
    #[serde(default)]
    pub answers: HashMap<String, serde_json::Value>,
}

/// Score display for a single result, with where to go next.
#[derive(Debug, Serialize)]
pub struct ResultView {
    #[serde(flatten)]
    pub result: TestResult,
    pub retake_url: &'static str,
    pub suggestions_url: &'static str,
}

impl From<TestResult> for ResultView {
    fn from(result: TestResult) -> Self {
        Self {
            result,
            retake_url: "/api/test/questions",
            suggestions_url: "/api/suggestions",
        }
    }
}
