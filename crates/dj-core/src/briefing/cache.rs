use crate::clock::Clock;
use crate::error::Result;
use crate::storage::KvStore;
use crate::types::Briefing;
use std::sync::Arc;
use std::time::Duration;

pub const BRIEFING_TEXT_KEY: &str = "briefing:latest";
pub const BRIEFING_TS_KEY: &str = "briefing:latest:ts";

/// Last briefing and its timestamp, kept as two independent keys.
///
/// The pair is not written atomically: a crash between the two puts leaves
/// the text and timestamp out of step until the next regeneration.
pub struct BriefingCache<S: KvStore + ?Sized> {
    storage: Arc<S>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl<S: KvStore + ?Sized> BriefingCache<S> {
    pub fn new(storage: Arc<S>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            storage,
            clock,
            ttl,
        }
    }

    /// Stored briefing, regardless of age.
    ///
    /// `None` when either key is missing, the text is empty, or the
    /// timestamp is not a decimal integer.
    pub fn get(&self) -> Result<Option<Briefing>> {
        let text = match self.storage.get(BRIEFING_TEXT_KEY)? {
            Some(t) if !t.is_empty() => t,
            _ => return Ok(None),
        };
        let generated_at = match self
            .storage
            .get(BRIEFING_TS_KEY)?
            .and_then(|ts| ts.trim().parse::<i64>().ok())
        {
            Some(ts) => ts,
            None => return Ok(None),
        };

        Ok(Some(Briefing {
            text,
            generated_at,
            cached: true,
        }))
    }

    /// True iff less than the TTL has passed since `generated_at`.
    pub fn is_fresh(&self, generated_at: i64) -> bool {
        let age = self.clock.now_ms().saturating_sub(generated_at);
        i128::from(age) < self.ttl.as_millis() as i128
    }

    /// Write `text` then stamp it with the current time.
    pub fn put(&self, text: &str) -> Result<Briefing> {
        let generated_at = self.clock.now_ms();
        self.storage.put(BRIEFING_TEXT_KEY, text)?;
        self.storage.put(BRIEFING_TS_KEY, &generated_at.to_string())?;
        Ok(Briefing {
            text: text.to_string(),
            generated_at,
            cached: false,
        })
    }
}
