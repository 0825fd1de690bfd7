//! Score lookup API with a fill-once cache
//!
//! The first lookup for a date makes exactly one provider call and
//! persists one row per game; every later lookup for that date is served
//! from the store. There is no TTL and no invalidation: once any row
//! exists for a date the provider is never asked about it again.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use courtside_common::db::models::GameScore;

use crate::services::normalize::normalize_game;
use crate::services::schedule::ScheduleError;
use crate::AppState;

const MIN_YEAR: i32 = 2013;
const MAX_YEAR: i32 = 2018;

/// Query parameters for score lookup
#[derive(Debug, Deserialize)]
pub struct ScoreQuery {
    pub date: String,
}

/// GET /api/scores response
#[derive(Debug, Serialize)]
pub struct ScoresResponse {
    pub date: String,
    pub games: Vec<GameScore>,
}

/// Date validation failures, one variant per violated rule
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateValidationError {
    #[error("Not a valid date, use YYYY-MM-DD")]
    Malformed,

    #[error("Year must be between {} and {}", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange,

    #[error("Date must be earlier than today")]
    NotInPast,
}

/// Validate a lookup date against `today`.
///
/// Must parse as YYYY-MM-DD, fall in a year from 2013 through 2018, and
/// be strictly earlier than today. Checked in that order; the first
/// violated rule is reported.
pub fn validate_lookup_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, DateValidationError> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| DateValidationError::Malformed)?;

    if date.year() < MIN_YEAR || date.year() > MAX_YEAR {
        return Err(DateValidationError::YearOutOfRange);
    }

    if date >= today {
        return Err(DateValidationError::NotInPast);
    }

    Ok(date)
}

/// GET /api/scores?date=YYYY-MM-DD
///
/// Returns every game result recorded for the date, fetching and caching
/// them on first access.
pub async fn lookup_scores(
    State(state): State<AppState>,
    Query(query): Query<ScoreQuery>,
) -> Result<Json<ScoresResponse>, ScoreError> {
    let date = validate_lookup_date(&query.date, Utc::now().date_naive())?;
    let date_key = date.format("%Y-%m-%d").to_string();

    let cached: Vec<GameScore> =
        sqlx::query_as("SELECT guid, game_date, home_team, away_team, home_score, away_score, winner FROM game_scores WHERE game_date = ?")
            .bind(&date_key)
            .fetch_all(&state.db)
            .await?;

    if !cached.is_empty() {
        tracing::info!(date = %date_key, games = cached.len(), "Score cache hit");
        return Ok(Json(ScoresResponse {
            date: date_key,
            games: cached,
        }));
    }

    tracing::info!(date = %date_key, "Score cache miss, querying provider");
    let schedule = state.provider.daily_schedule(date).await?;

    // One insert per game, committed individually, in provider order
    for game in &schedule.games {
        let score = normalize_game(&date_key, game)?;
        sqlx::query(
            "INSERT INTO game_scores (guid, game_date, home_team, away_team, home_score, away_score, winner) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&score.guid)
        .bind(&score.game_date)
        .bind(&score.home_team)
        .bind(&score.away_team)
        .bind(score.home_score)
        .bind(score.away_score)
        .bind(&score.winner)
        .execute(&state.db)
        .await?;
    }

    let games: Vec<GameScore> =
        sqlx::query_as("SELECT guid, game_date, home_team, away_team, home_score, away_score, winner FROM game_scores WHERE game_date = ?")
            .bind(&date_key)
            .fetch_all(&state.db)
            .await?;

    tracing::info!(date = %date_key, games = games.len(), "Score cache populated");

    Ok(Json(ScoresResponse {
        date: date_key,
        games,
    }))
}

/// Score lookup API errors
#[derive(Debug)]
pub enum ScoreError {
    Validation(DateValidationError),
    Provider(ScheduleError),
    Database(sqlx::Error),
}

impl From<DateValidationError> for ScoreError {
    fn from(e: DateValidationError) -> Self {
        ScoreError::Validation(e)
    }
}

impl From<ScheduleError> for ScoreError {
    fn from(e: ScheduleError) -> Self {
        ScoreError::Provider(e)
    }
}

impl From<sqlx::Error> for ScoreError {
    fn from(e: sqlx::Error) -> Self {
        ScoreError::Database(e)
    }
}

impl IntoResponse for ScoreError {
    fn into_response(self) -> Response {
        match self {
            ScoreError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string(), "field": "date" })),
            )
                .into_response(),
            ScoreError::Provider(e) => {
                tracing::error!("Schedule provider failure: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({ "error": e.to_string() })),
                )
                    .into_response()
            }
            ScoreError::Database(e) => {
                tracing::error!("Score lookup database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": format!("Database error: {}", e) })),
                )
                    .into_response()
            }
        }
    }
}
