use super::ApiClient;
use crate::services::SessionRecorder;
use std::thread;
use tracing::{error, info};

/// Posts completed sessions to the API from a detached thread.
pub struct ApiSessionRecorder {
    client: ApiClient,
}

impl ApiSessionRecorder {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl SessionRecorder for ApiSessionRecorder {
    fn record(&self, activity_kind: &str) {
        let client = self.client.clone();
        let activity_kind = activity_kind.to_string();
        let spawned = thread::Builder::new()
            .name("session-recorder".to_string())
            .spawn(move || record_blocking(&client, &activity_kind));
        if let Err(e) = spawned {
            error!("Could not start session recorder thread: {e}");
        }
    }
}

/// Sends one study session; failures are logged and swallowed.
fn record_blocking(client: &ApiClient, activity_kind: &str) -> Option<u64> {
    match client.add_study_session(activity_kind) {
        Ok(count) => {
            info!(activity_kind, count, "study session recorded");
            Some(count)
        }
        Err(e) => {
            error!(activity_kind, "Error adding study session: {e}");
            None
        }
    }
}
