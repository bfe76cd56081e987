//! Log Record
//!
//! One formatted tracing event.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use tracing::Level;

#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    /// Module path of the call site
    pub target: String,
    /// The event's `message` field
    pub message: String,
    /// Remaining fields, in declaration order
    pub fields: Vec<(String, String)>,
}

impl LogRecord {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Single-line form: `12:00:01.250 ERROR target: message key=value`
    pub fn render(&self) -> String {
        let mut line = format!(
            "{} {:>5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level.as_str(),
            self.target,
            self.message
        );
        for (key, value) in &self.fields {
            let _ = write!(line, " {key}={value}");
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render() {
        let record = LogRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 5).unwrap(),
            level: Level::WARN,
            target: "todo_core::controller".to_string(),
            message: "toggle requested for a task not in the list".to_string(),
            fields: vec![("task_id".to_string(), "7".to_string())],
        };

        assert_eq!(
            record.render(),
            "09:30:05.000  WARN todo_core::controller: toggle requested for a task not in the list task_id=7"
        );
        assert_eq!(record.field("task_id"), Some("7"));
        assert_eq!(record.field("missing"), None);
    }
}
