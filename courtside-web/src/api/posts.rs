//! Post board API
//!
//! Authors are identified by display name, created on first post and
//! never updated. A repeated `(author, body)` submission is reported as
//! already existing rather than erroring; the store-level UNIQUE
//! constraints make both writes single atomic statements.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::AppState;

const MAX_POST_CHARS: usize = 500;

/// POST /api/posts request body
#[derive(Debug, Deserialize)]
pub struct SubmitPostRequest {
    pub name: String,
    pub post: String,
}

/// POST /api/posts response
#[derive(Debug, Serialize)]
pub struct SubmitPostResponse {
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'static str>,
}

/// One author with all of their posts
#[derive(Debug, Serialize)]
pub struct AuthorPosts {
    pub name: String,
    pub posts: Vec<String>,
}

/// GET /api/posts response
#[derive(Debug, Serialize)]
pub struct ListPostsResponse {
    pub authors: Vec<AuthorPosts>,
}

/// POST /api/posts
///
/// Accepts `{name, post}`. Creates the author on first use, then inserts
/// the post unless the same author already posted the same text.
pub async fn submit_post(
    State(state): State<AppState>,
    Json(request): Json<SubmitPostRequest>,
) -> Result<Response, PostError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(PostError::Validation {
            field: "name",
            message: "Name must not be empty".to_string(),
        });
    }

    let body = request.post.as_str();
    if body.is_empty() {
        return Err(PostError::Validation {
            field: "post",
            message: "Post must not be empty".to_string(),
        });
    }
    if body.chars().count() > MAX_POST_CHARS {
        return Err(PostError::Validation {
            field: "post",
            message: format!("Post must be at most {} characters long", MAX_POST_CHARS),
        });
    }

    // First-write-wins author creation, atomic on the display name
    sqlx::query("INSERT INTO authors (guid, display_name) VALUES (?, ?) ON CONFLICT(display_name) DO NOTHING")
        .bind(Uuid::new_v4().to_string())
        .bind(name)
        .execute(&state.db)
        .await?;

    let author_id: String = sqlx::query_scalar("SELECT guid FROM authors WHERE display_name = ?")
        .bind(name)
        .fetch_one(&state.db)
        .await?;

    let inserted = sqlx::query(
        "INSERT INTO posts (guid, author_id, body) VALUES (?, ?, ?) ON CONFLICT(author_id, body) DO NOTHING",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(&author_id)
    .bind(body)
    .execute(&state.db)
    .await?
    .rows_affected();

    if inserted == 0 {
        // Duplicate post: informational outcome, point the caller at the listing
        tracing::info!(author = name, "Duplicate post submission ignored");
        return Ok((
            StatusCode::OK,
            Json(SubmitPostResponse {
                outcome: "already_exists",
                location: Some("/api/posts"),
            }),
        )
            .into_response());
    }

    tracing::info!(author = name, "Post submitted");
    Ok((
        StatusCode::CREATED,
        Json(SubmitPostResponse {
            outcome: "created",
            location: None,
        }),
    )
        .into_response())
}

/// GET /api/posts
///
/// Every author with all of their posts. Full scan, store default order,
/// no pagination.
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<ListPostsResponse>, PostError> {
    let authors: Vec<(String, String)> =
        sqlx::query_as("SELECT guid, display_name FROM authors")
            .fetch_all(&state.db)
            .await?;

    let mut result = Vec::with_capacity(authors.len());
    for (author_id, name) in authors {
        let posts: Vec<String> = sqlx::query_scalar("SELECT body FROM posts WHERE author_id = ?")
            .bind(&author_id)
            .fetch_all(&state.db)
            .await?;
        result.push(AuthorPosts { name, posts });
    }

    Ok(Json(ListPostsResponse { authors: result }))
}

/// Post board API errors
#[derive(Debug)]
pub enum PostError {
    Validation { field: &'static str, message: String },
    Database(sqlx::Error),
}

impl From<sqlx::Error> for PostError {
    fn from(e: sqlx::Error) -> Self {
        PostError::Database(e)
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        match self {
            PostError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message, "field": field })),
            )
                .into_response(),
            PostError::Database(e) => {
                tracing::error!("Post board database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": format!("Database error: {}", e) })),
                )
                    .into_response()
            }
        }
    }
}
