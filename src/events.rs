use serde::{Deserialize, Serialize};

/// Reserved event type matching every event.
pub const WILDCARD: &str = "*";

/// Input to [`EventLogger::set_events`](crate::EventLogger::set_events):
/// either a comma-separated pattern or an explicit list.
///
/// The two forms are deliberately asymmetric. A pattern is split on commas
/// with each token trimmed, and empty tokens from doubled or trailing commas
/// are kept as empty strings. A list is stored exactly as given, whitespace
/// and all.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum EventSpec {
    Pattern(String),
    List(Vec<String>),
}

impl EventSpec {
    /// Resolves the spec into the event list a logger stores. Entries are
    /// not deduplicated in either form.
    pub fn into_events(self) -> Vec<String> {
        match self {
            EventSpec::Pattern(pattern) => pattern
                .split(',')
                .map(|token| token.trim().to_owned())
                .collect(),
            EventSpec::List(events) => events,
        }
    }
}

impl From<&str> for EventSpec {
    fn from(pattern: &str) -> Self {
        EventSpec::Pattern(pattern.to_owned())
    }
}

impl From<String> for EventSpec {
    fn from(pattern: String) -> Self {
        EventSpec::Pattern(pattern)
    }
}

impl From<Vec<String>> for EventSpec {
    fn from(events: Vec<String>) -> Self {
        EventSpec::List(events)
    }
}

impl From<&[&str]> for EventSpec {
    fn from(events: &[&str]) -> Self {
        EventSpec::List(events.iter().map(|e| (*e).to_owned()).collect())
    }
}
