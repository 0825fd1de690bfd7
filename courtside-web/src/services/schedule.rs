//! Schedule provider API client
//!
//! One GET per cache miss against the external daily-schedule endpoint.
//! No retry, no backoff: a provider failure fails the request that
//! triggered it, and the cache stays empty for that date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = "Courtside/0.1.0";

/// Schedule provider client errors
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Provider error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Daily schedule response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleResponse {
    pub date: String,
    pub games: Vec<ScheduledGame>,
}

/// One game entry in a daily schedule
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduledGame {
    pub status: String,
    pub home: TeamRef,
    pub away: TeamRef,
    /// Absent until the game has a reported score
    pub home_points: Option<i64>,
    pub away_points: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamRef {
    pub name: String,
}

/// Schedule provider API client
#[derive(Clone)]
pub struct ScheduleClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ScheduleClient {
    pub fn new(base_url: String, api_key: String) -> Result<Self, ScheduleError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ScheduleError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
            api_key,
        })
    }

    /// Fetch the schedule (with any reported scores) for one calendar day
    pub async fn daily_schedule(&self, date: NaiveDate) -> Result<ScheduleResponse, ScheduleError> {
        let url = format!(
            "{}/games/{:04}/{:02}/{:02}/schedule.json",
            self.base_url,
            date.year(),
            date.month(),
            date.day()
        );

        tracing::debug!(date = %date, "Querying schedule provider");

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ScheduleError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ScheduleError::Api(status.as_u16(), error_text));
        }

        // Typed parse: a missing or mismatched field is a deterministic
        // Parse error, never a generic key lookup failure
        let schedule: ScheduleResponse = response
            .json()
            .await
            .map_err(|e| ScheduleError::Parse(e.to_string()))?;

        tracing::info!(
            date = %schedule.date,
            games = schedule.games.len(),
            "Schedule lookup successful"
        );

        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = ScheduleClient::new(
            "https://example.test/nba".to_string(),
            "test-key".to_string(),
        );
        assert!(client.is_ok());
    }

    #[test]
    fn schedule_response_parses_mixed_statuses() {
        let body = r#"{
            "date": "2018-11-03",
            "games": [
                {
                    "status": "closed",
                    "home": {"name": "Lakers"},
                    "away": {"name": "Blazers"},
                    "home_points": 114,
                    "away_points": 110
                },
                {
                    "status": "scheduled",
                    "home": {"name": "Celtics"},
                    "away": {"name": "Pacers"}
                }
            ]
        }"#;

        let parsed: ScheduleResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.games.len(), 2);
        assert_eq!(parsed.games[0].home.name, "Lakers");
        assert_eq!(parsed.games[0].home_points, Some(114));
        assert_eq!(parsed.games[1].status, "scheduled");
        assert_eq!(parsed.games[1].home_points, None);
    }

    #[test]
    fn schedule_response_rejects_missing_team_name() {
        let body = r#"{
            "date": "2018-11-03",
            "games": [{"status": "closed", "home": {}, "away": {"name": "Blazers"}}]
        }"#;

        assert!(serde_json::from_str::<ScheduleResponse>(body).is_err());
    }
}
