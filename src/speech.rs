//! Text-to-speech through the platform's speech command.
//!
//! Synthesis itself is left to the operating system: the word is handed to a
//! command such as `espeak-ng` (Linux) or `say` (macOS) which runs detached.

use crate::services::SpeechService;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

#[cfg(target_os = "macos")]
pub const DEFAULT_SPEECH_COMMAND: &str = "say -v Anna";
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_SPEECH_COMMAND: &str = "espeak-ng -v de";

pub struct CommandSpeech {
    program: String,
    args: Vec<String>,
}

impl CommandSpeech {
    /// Builds a speech service from a whitespace separated command line.
    /// Returns `None` for an empty command.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    fn command(&self, word: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(word)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl SpeechService for CommandSpeech {
    fn speak(&self, word: &str) {
        debug!(word, program = %self.program, "speaking");
        // the child is not waited on; it exits by itself once the word is spoken
        if let Err(e) = self.command(word).spawn() {
            warn!("Could not run speech command '{}': {e}", self.program);
        }
    }
}

/// Speech service used when no speech command is configured.
pub struct SilentSpeech;

impl SpeechService for SilentSpeech {
    fn speak(&self, word: &str) {
        debug!(word, "speech disabled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_line() {
        let speech = CommandSpeech::from_command_line("espeak-ng -v de").unwrap();
        assert_eq!(speech.program, "espeak-ng");
        assert_eq!(speech.args, vec!["-v".to_string(), "de".to_string()]);

        let command = speech.command("Hallo");
        let args: Vec<_> = command.get_args().map(|a| a.to_string_lossy().to_string()).collect();
        assert_eq!(args, vec!["-v", "de", "Hallo"]);
    }

    #[test]
    fn test_empty_command_line() {
        assert!(CommandSpeech::from_command_line("   ").is_none());
    }

    #[test]
    fn test_missing_program_does_not_panic() {
        let speech = CommandSpeech::from_command_line("definitely-not-a-speech-program-xyz").unwrap();
        speech.speak("Hallo");
    }
}
