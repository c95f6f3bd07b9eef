//! Blocking client for the word-list API.
//!
//! Calls block the calling thread, so the UI only invokes them from worker
//! threads (see [`crate::tasks`]).

use crate::error::{AppError, Result};
use crate::models::{LevelFilter, VocabularyItem};
use crate::services::VocabularySource;
use reqwest::blocking::{Client, Response};
use reqwest::header::USER_AGENT;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CLIENT_AGENT: &str = concat!("wortwunder/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct StudySessionRequest<'a> {
    activity_type: &'a str,
}

#[derive(Deserialize)]
struct CountResponse {
    #[serde(default)]
    count: u64,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn vocabulary_url(&self, level: LevelFilter) -> String {
        match level.query_value() {
            Some(level) => format!("{}/api/vocabulary?level={}", self.base_url, level),
            None => format!("{}/api/vocabulary", self.base_url),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get_vocabulary(&self, level: LevelFilter) -> Result<Vec<VocabularyItem>> {
        let url = self.vocabulary_url(level);
        debug!(%url, "fetching vocabulary");
        let resp = self.client.get(&url).header(USER_AGENT, CLIENT_AGENT).send()?;
        let items: Vec<VocabularyItem> = ensure_success(resp)?.json()?;
        debug!(count = items.len(), "vocabulary fetched");
        Ok(items)
    }

    pub fn get_favorites(&self) -> Result<Vec<VocabularyItem>> {
        let resp = self
            .client
            .get(self.url("/api/favorites"))
            .header(USER_AGENT, CLIENT_AGENT)
            .send()?;
        Ok(ensure_success(resp)?.json()?)
    }

    pub fn add_favorite(&self, vocabulary_id: i64) -> Result<()> {
        let resp = self
            .client
            .post(self.url(&format!("/api/favorites/{vocabulary_id}")))
            .header(USER_AGENT, CLIENT_AGENT)
            .send()?;
        ensure_success(resp)?;
        Ok(())
    }

    pub fn remove_favorite(&self, vocabulary_id: i64) -> Result<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/api/favorites/{vocabulary_id}")))
            .header(USER_AGENT, CLIENT_AGENT)
            .send()?;
        ensure_success(resp)?;
        Ok(())
    }

    /// Records a finished study session and returns the server's running count (0 if not sent).
    pub fn add_study_session(&self, activity_type: &str) -> Result<u64> {
        let resp = self
            .client
            .post(self.url("/api/study-sessions"))
            .header(USER_AGENT, CLIENT_AGENT)
            .json(&StudySessionRequest { activity_type })
            .send()?;
        let body: CountResponse = ensure_success(resp)?.json()?;
        Ok(body.count)
    }

    /// Number of recorded study sessions; 0 when the server cannot be reached.
    pub fn study_sessions_count(&self) -> u64 {
        let result = self
            .client
            .get(self.url("/api/study-sessions/count"))
            .header(USER_AGENT, CLIENT_AGENT)
            .send()
            .map_err(AppError::from)
            .and_then(ensure_success)
            .and_then(|resp| resp.json::<CountResponse>().map_err(AppError::from));

        match result {
            Ok(body) => body.count,
            Err(e) => {
                warn!("Error fetching study sessions count: {e}");
                0
            }
        }
    }
}

impl VocabularySource for ApiClient {
    fn fetch(&self, level: LevelFilter) -> Result<Vec<VocabularyItem>> {
        self.get_vocabulary(level)
    }
}

fn ensure_success(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let url = resp.url().to_string();
    let body = resp.text().unwrap_or_default();
    Err(AppError::Status {
        status: status.as_u16(),
        url,
        message: error_message(&body, status.canonical_reason().unwrap_or("request failed")),
    })
}

/// Extracts the `error` field of a JSON error body, falling back to the raw body or `fallback`.
fn error_message(body: &str, fallback: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
        return parsed.error;
    }
    let body = body.trim();
    if body.is_empty() {
        fallback.to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CefrLevel;

    #[test]
    fn test_vocabulary_url() {
        let client = ApiClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.vocabulary_url(LevelFilter::All),
            "http://localhost:5000/api/vocabulary"
        );
        assert_eq!(
            client.vocabulary_url(LevelFilter::Only(CefrLevel::B1)),
            "http://localhost:5000/api/vocabulary?level=B1"
        );
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"error": "activity_type is required"}"#, "Bad Request"),
            "activity_type is required"
        );
        assert_eq!(error_message("  ", "Not Found"), "Not Found");
        assert_eq!(error_message("<h1>oops</h1>", "Server Error"), "<h1>oops</h1>");
    }

    #[test]
    fn test_count_response_defaults_to_zero() {
        let body: CountResponse =
            serde_json::from_str(r#"{"message": "Study session created successfully"}"#).unwrap();
        assert_eq!(body.count, 0);
        let body: CountResponse = serde_json::from_str(r#"{"count": 12}"#).unwrap();
        assert_eq!(body.count, 12);
    }

    #[test]
    fn test_unreachable_server_reports_zero_sessions() {
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        assert_eq!(client.study_sessions_count(), 0);
        assert!(client.get_vocabulary(LevelFilter::All).is_err());
    }
}
