// src/handlers/admin.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use validator::Validate;

use crate::{
    error::AppError,
    handlers::test::fetch_all_questions,
    models::{
        question::{CreateQuestionRequest, UpdateQuestionRequest},
        test_result::TestResultEntry,
    },
};

/// Lists every question, including the correct option.
/// Admin only.
pub async fn list_questions(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(fetch_all_questions(&pool).await?))
}

/// Creates a new quiz question.
/// Admin only.
pub async fn create_question(
    State(pool): State<SqlitePool>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let payload = payload.sanitized();
    payload.validate()?;

    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO questions
        (text, option_1, option_2, option_3, option_4, correct_option, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(payload.text)
    .bind(payload.option_1)
    .bind(payload.option_2)
    .bind(payload.option_3)
    .bind(payload.option_4)
    .bind(payload.correct_option)
    .bind(chrono::Utc::now())
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    tracing::info!("Question {} created", id);

    Ok((StatusCode::CREATED, Json(serde_json::json!({"id": id}))))
}

/// Updates a question by ID. Only the fields present are changed.
/// Admin only.
pub async fn update_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let payload = payload.sanitized();
    payload.validate()?;

    if payload.is_empty() {
        let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM questions WHERE id = ?")
            .bind(id)
            .fetch_optional(&pool)
            .await?;
        return match exists {
            Some(_) => Ok(StatusCode::OK),
            None => Err(AppError::NotFound("Question not found".to_string())),
        };
    }

    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE questions SET ");
    let mut separated = builder.separated(", ");

    let text_fields = [
        ("text", payload.text),
        ("option_1", payload.option_1),
        ("option_2", payload.option_2),
        ("option_3", payload.option_3),
        ("option_4", payload.option_4),
    ];
    for (column, value) in text_fields {
        if let Some(value) = value {
            separated.push(format!("{column} = "));
            separated.push_bind_unseparated(value);
        }
    }

    if let Some(correct_option) = payload.correct_option {
        separated.push("correct_option = ");
        separated.push_bind_unseparated(correct_option);
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);

    let result = builder.build().execute(&pool).await.map_err(|e| {
        tracing::error!("Failed to update question: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Question not found".to_string()));
    }

    Ok(StatusCode::OK)
}

/// Deletes a quiz question by ID.
/// Admin only.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete question: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Question not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Lists all test results with their usernames, newest first.
/// Admin only.
pub async fn list_results(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let results = sqlx::query_as::<_, TestResultEntry>(
        r#"
        SELECT r.id, u.username, r.score, r.total_questions, r.created_at
        FROM test_results r
        JOIN users u ON r.user_id = u.id
        ORDER BY r.created_at DESC, r.id DESC
        "#,
    )
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list results: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(results))
}
