//! Records served by the good-times endpoint

use serde::{Deserialize, Serialize};

/// A suggested window for going out, as served by `api/v1/goodtimes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodTime {
    /// Server-formatted label such as "Tomorrow at 6:10 AM"
    pub pretty_time: String,
    pub unix_time: i64,
    #[serde(default)]
    pub reasons: Vec<String>,
}

impl GoodTime {
    /// Single-line rendering used for list items
    pub fn display_line(&self) -> String {
        if self.reasons.is_empty() {
            self.pretty_time.clone()
        } else {
            format!("{}: {}", self.pretty_time, self.reasons.join(" and "))
        }
    }
}
