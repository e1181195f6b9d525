use serde::{Deserialize, Serialize};

/// Source tag used when an ingest does not name one.
pub const DEFAULT_SOURCE: &str = "manual";

/// One piece of customer feedback, seeded or submitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackEntry {
    /// Where the feedback came from ("support", "github", "chat", ...).
    /// Free-form.
    pub source: String,

    /// The feedback itself. Never empty.
    pub text: String,

    /// Creation time, milliseconds since the Unix epoch.
    /// Stored as `ts` to stay readable by existing stores.
    #[serde(rename = "ts", alias = "timestamp")]
    pub timestamp: i64,
}

impl FeedbackEntry {
    pub fn new(source: impl Into<String>, text: impl Into<String>, timestamp: i64) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
            timestamp,
        }
    }
}

/// A generated (or fallback) briefing together with when it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Briefing {
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub generated_at: i64,
    /// Whether this was served from the cache
    pub cached: bool,
}
