//! Best-player vote tally API
//!
//! The candidate set is closed and fixed at form-definition time. Each
//! vote is a single atomic upsert: insert with count 1, or increment.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use courtside_common::db::models::PlayerVote;

use crate::AppState;

/// The closed candidate set
pub const CANDIDATES: [&str; 3] = ["kobe bryant", "lebron james", "michael jordan"];

/// POST /api/votes request body
#[derive(Debug, Deserialize)]
pub struct SubmitVoteRequest {
    pub player: String,
}

/// GET /api/votes response: all tallies plus the current leader.
/// Leader ties are broken arbitrarily by the descending sort.
#[derive(Debug, Serialize)]
pub struct ListVotesResponse {
    pub players: Vec<PlayerVote>,
    pub leader: Option<PlayerVote>,
}

/// POST /api/votes
///
/// Records one vote for a candidate, then points the caller at the
/// results view.
pub async fn submit_vote(
    State(state): State<AppState>,
    Json(request): Json<SubmitVoteRequest>,
) -> Result<Response, VoteError> {
    if !CANDIDATES.contains(&request.player.as_str()) {
        return Err(VoteError::UnknownCandidate(request.player));
    }

    sqlx::query(
        r#"
        INSERT INTO player_votes (guid, player_name, vote_count) VALUES (?, ?, 1)
        ON CONFLICT(player_name)
        DO UPDATE SET vote_count = vote_count + 1, updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(&request.player)
    .execute(&state.db)
    .await?;

    tracing::info!(player = %request.player, "Vote recorded");

    Ok((
        StatusCode::SEE_OTHER,
        [(header::LOCATION, "/api/votes")],
        Json(json!({ "outcome": "recorded", "location": "/api/votes" })),
    )
        .into_response())
}

/// GET /api/votes
///
/// All tally rows, highest count first, plus the current leader.
pub async fn list_votes(State(state): State<AppState>) -> Result<Json<ListVotesResponse>, VoteError> {
    let players: Vec<PlayerVote> = sqlx::query_as(
        "SELECT guid, player_name, vote_count FROM player_votes ORDER BY vote_count DESC",
    )
    .fetch_all(&state.db)
    .await?;

    let leader = players.first().cloned();

    Ok(Json(ListVotesResponse { players, leader }))
}

/// Vote API errors
#[derive(Debug)]
pub enum VoteError {
    UnknownCandidate(String),
    Database(sqlx::Error),
}

impl From<sqlx::Error> for VoteError {
    fn from(e: sqlx::Error) -> Self {
        VoteError::Database(e)
    }
}

impl IntoResponse for VoteError {
    fn into_response(self) -> Response {
        match self {
            VoteError::UnknownCandidate(player) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": format!("'{}' is not one of the candidates", player),
                    "field": "player",
                })),
            )
                .into_response(),
            VoteError::Database(e) => {
                tracing::error!("Vote tally database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": format!("Database error: {}", e) })),
                )
                    .into_response()
            }
        }
    }
}
