//! Database models

use serde::{Deserialize, Serialize};

/// A post author, identified by display name (case-sensitive,
/// first-write-wins; never updated or deleted).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Author {
    pub guid: String,
    pub display_name: String,
}

/// One board post. At most one post per `(author_id, body)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub guid: String,
    pub author_id: String,
    pub body: String,
}

/// One cached game result. Rows are immutable after insert; the set of
/// rows for a date is written once and never refreshed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GameScore {
    pub guid: String,
    pub game_date: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i64,
    pub away_score: i64,
    pub winner: String,
}

/// Running vote tally for one candidate. `vote_count` only increments.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayerVote {
    pub guid: String,
    pub player_name: String,
    pub vote_count: i64,
}
