use super::CefrLevel;
use chrono::{DateTime, Local};

/// Learner profile stored in the local settings database.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileSettings {
    pub display_name: String,
    pub email: String,
    pub preferred_level: CefrLevel,
    pub updated_at: Option<DateTime<Local>>,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            email: String::new(),
            preferred_level: CefrLevel::A1,
            updated_at: None,
        }
    }
}
