use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::types::{
    Envelope, LiveStatus, Match, PointsTable, Schedule, SeasonOption, TeamMatches,
    UpcomingMatches,
};

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {error}: {message}")]
    Api {
        status: StatusCode,
        error: String,
        message: String,
    },

    #[error("unreadable response ({status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("response from {0} carried no data")]
    MissingData(String),
}

pub struct LiveMatchClient {
    client: Client,
    base_url: String,
}

impl LiveMatchClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Reuse an existing `reqwest` client (timeouts, proxies, pools).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Points table of `season`, or of the server's default season.
    pub async fn points_table(&self, season: Option<&str>) -> Result<PointsTable, SdkError> {
        let path = "/api/points-table";
        let query: Vec<(&str, &str)> = season.map(|s| ("season", s)).into_iter().collect();
        self.get(path, &query).await?.ok_or_else(|| missing(path))
    }

    pub async fn available_seasons(&self) -> Result<Vec<SeasonOption>, SdkError> {
        let path = "/api/points-table/seasons";
        self.get(path, &[]).await?.ok_or_else(|| missing(path))
    }

    pub async fn match_schedule(&self) -> Result<Schedule, SdkError> {
        let path = "/api/match-schedule";
        self.get(path, &[]).await?.ok_or_else(|| missing(path))
    }

    /// The match in progress; `None` when nothing is live.
    pub async fn live_match(&self) -> Result<Option<Match>, SdkError> {
        self.get("/api/live-match", &[]).await
    }

    pub async fn upcoming_matches(&self) -> Result<UpcomingMatches, SdkError> {
        let path = "/api/upcoming-matches";
        self.get(path, &[]).await?.ok_or_else(|| missing(path))
    }

    pub async fn upcoming_matches_by_team(&self, code: &str) -> Result<TeamMatches, SdkError> {
        let path = format!("/api/upcoming-matches/team/{}", code);
        self.get(&path, &[]).await?.ok_or_else(|| missing(&path))
    }

    pub async fn live_match_status(&self) -> Result<LiveStatus, SdkError> {
        let path = "/api/live-match/status";
        self.get(path, &[]).await?.ok_or_else(|| missing(path))
    }

    /// GET `path` and unwrap the envelope.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<T>, SdkError> {
        let resp = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        let envelope: Envelope<T> = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(SdkError::Api {
                    status,
                    error: status.to_string(),
                    message: text,
                })
            }
            Err(source) => return Err(SdkError::Decode { status, source }),
        };

        if !status.is_success() || !envelope.success {
            return Err(SdkError::Api {
                status,
                error: envelope.error.unwrap_or_else(|| status.to_string()),
                message: envelope.message.unwrap_or_default(),
            });
        }

        Ok(envelope.data)
    }
}

fn missing(path: &str) -> SdkError {
    SdkError::MissingData(path.to_string())
}
