//! Command-line and environment configuration, and the services built from it.

use crate::api::{ApiClient, ApiSessionRecorder};
use crate::error::Result;
use crate::export::json::FileSource;
use crate::services::{SessionRecorder, SpeechService, VocabularySource};
use crate::speech::{CommandSpeech, DEFAULT_SPEECH_COMMAND, SilentSpeech};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Command-line arguments for wortwunder
#[derive(Parser, Debug)]
#[command(name = "wortwunder")]
#[command(about = "German vocabulary trainer")]
#[command(version)]
pub struct Args {
    /// Base URL of the word-list API
    #[arg(long, default_value = "http://localhost:5000", env = "WORTWUNDER_API_URL")]
    pub api_url: String,

    /// Local settings database
    #[arg(long, default_value = "wortwunder.sqlite3", env = "WORTWUNDER_DB")]
    pub db_path: PathBuf,

    /// Read vocabulary from this JSON word list instead of the API
    #[arg(long, env = "WORTWUNDER_WORD_LIST")]
    pub word_list: Option<PathBuf>,

    /// Command used to speak German words; the word is appended as last argument
    #[arg(long, default_value = DEFAULT_SPEECH_COMMAND, env = "WORTWUNDER_SPEECH_CMD")]
    pub speech_command: String,

    /// Disable text-to-speech
    #[arg(long)]
    pub no_speech: bool,

    /// Seconds between refreshes of the study statistics
    #[arg(long, default_value_t = 30, env = "WORTWUNDER_STATS_INTERVAL")]
    pub stats_interval: u64,
}

/// External collaborators shared by all screens.
#[derive(Clone)]
pub struct Services {
    pub api: ApiClient,
    pub vocabulary: Arc<dyn VocabularySource>,
    pub recorder: Arc<dyn SessionRecorder>,
    pub speech: Arc<dyn SpeechService>,
    pub stats_interval: Duration,
}

impl Services {
    pub fn from_args(args: &Args) -> Result<Self> {
        let api = ApiClient::new(&args.api_url)?;

        let vocabulary: Arc<dyn VocabularySource> = match &args.word_list {
            Some(path) => {
                info!("Reading vocabulary from {}", path.display());
                Arc::new(FileSource::new(path.clone()))
            }
            None => {
                info!("Reading vocabulary from {}", api.base_url());
                Arc::new(api.clone())
            }
        };

        let speech: Arc<dyn SpeechService> = match CommandSpeech::from_command_line(&args.speech_command) {
            Some(speech) if !args.no_speech => Arc::new(speech),
            _ => Arc::new(SilentSpeech),
        };

        Ok(Self {
            recorder: Arc::new(ApiSessionRecorder::new(api.clone())),
            api,
            vocabulary,
            speech,
            stats_interval: Duration::from_secs(args.stats_interval.max(1)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_unset(name: &str) -> bool {
        std::env::var_os(name).is_none()
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["wortwunder"]).unwrap();
        assert!(!args.no_speech);
        // only check defaults that the environment does not override
        if env_unset("WORTWUNDER_DB") {
            assert_eq!(args.db_path, PathBuf::from("wortwunder.sqlite3"));
        }
        if env_unset("WORTWUNDER_STATS_INTERVAL") {
            assert_eq!(args.stats_interval, 30);
        }
        if env_unset("WORTWUNDER_WORD_LIST") {
            assert!(args.word_list.is_none());
        }
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "wortwunder",
            "--api-url",
            "http://example.com:8080/",
            "--word-list",
            "words.json",
            "--no-speech",
            "--stats-interval",
            "0",
        ])
        .unwrap();
        assert_eq!(args.api_url, "http://example.com:8080/");
        assert_eq!(args.word_list, Some(PathBuf::from("words.json")));

        let services = Services::from_args(&args).unwrap();
        assert_eq!(services.api.base_url(), "http://example.com:8080");
        assert_eq!(services.stats_interval, Duration::from_secs(1));
    }
}
