// src/handlers/suggestions.rs

use axum::{Json, response::IntoResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Suggestion {
    pub category: &'static str,
    pub text: &'static str,
}

pub const SUGGESTIONS: [Suggestion; 3] = [
    Suggestion {
        category: "Medication",
        text: "Consult a certified psychologist.",
    },
    Suggestion {
        category: "Diet",
        text: "Include omega-3 rich foods and avoid caffeine.",
    },
    Suggestion {
        category: "Consultation",
        text: "Schedule a session with a doctor.",
    },
];

/// Static wellbeing suggestions.
pub async fn list_suggestions() -> impl IntoResponse {
    Json(serde_json::json!({
        "title": "Mental Health Suggestions",
        "suggestions": SUGGESTIONS,
    }))
}
