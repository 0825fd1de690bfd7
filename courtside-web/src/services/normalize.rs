//! Score normalization
//!
//! Reshapes one provider schedule entry into the flat row the store
//! keeps. Pure apart from the generated row id.

use courtside_common::db::models::GameScore;
use uuid::Uuid;

use super::schedule::{ScheduleError, ScheduledGame};

/// Winner placeholder for games that have not produced a result
pub const PENDING_RESULT: &str = "Game has not started or is in progress";

/// Convert one schedule entry into a game score row for `game_date`.
///
/// A game that is still `scheduled` or `inprogress` records 0/0 and the
/// pending-result placeholder. A finished game records the reported
/// points, and the winner is the home team exactly when its score is
/// strictly greater; equal scores therefore report the away team. That
/// matches the long-standing comparison and is left as-is (ties do not
/// occur in basketball box scores).
pub fn normalize_game(game_date: &str, game: &ScheduledGame) -> Result<GameScore, ScheduleError> {
    let (home_score, away_score, winner) = match game.status.as_str() {
        "scheduled" | "inprogress" => (0, 0, PENDING_RESULT.to_string()),
        _ => {
            let home_points = game.home_points.ok_or_else(|| {
                ScheduleError::Parse(format!(
                    "game '{}' at '{}' has status '{}' but no home_points",
                    game.away.name, game.home.name, game.status
                ))
            })?;
            let away_points = game.away_points.ok_or_else(|| {
                ScheduleError::Parse(format!(
                    "game '{}' at '{}' has status '{}' but no away_points",
                    game.away.name, game.home.name, game.status
                ))
            })?;

            let winner = if home_points > away_points {
                game.home.name.clone()
            } else {
                game.away.name.clone()
            };
            (home_points, away_points, winner)
        }
    };

    Ok(GameScore {
        guid: Uuid::new_v4().to_string(),
        game_date: game_date.to_string(),
        home_team: game.home.name.clone(),
        away_team: game.away.name.clone(),
        home_score,
        away_score,
        winner,
    })
}
