use super::cache::BriefingCache;
use super::fallback::FALLBACK_BRIEFING;
use super::generator::BriefingGenerator;
use crate::clock::Clock;
use crate::error::Result;
use crate::feedback::FeedbackStore;
use crate::llm::TextGenerator;
use crate::storage::KvStore;
use crate::types::Briefing;
use std::sync::Arc;
use std::time::Duration;

/// Configuration for the briefing engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BriefingConfig {
    pub cache_ttl: Duration,
    pub max_prompt_entries: usize,
}

impl Default for BriefingConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(600),
            max_prompt_entries: 20,
        }
    }
}

/// Serves the cached briefing or regenerates it once stale.
///
/// Holds no state of its own between calls; everything lives in the store.
/// Two requests that both see a stale cache will both regenerate.
pub struct BriefingEngine<S: KvStore + ?Sized, G: TextGenerator + ?Sized> {
    feedback: Arc<FeedbackStore<S>>,
    cache: BriefingCache<S>,
    generator: BriefingGenerator<G>,
}

impl<S: KvStore + ?Sized, G: TextGenerator + ?Sized> BriefingEngine<S, G> {
    pub fn new(
        storage: Arc<S>,
        feedback: Arc<FeedbackStore<S>>,
        generator: Arc<G>,
        clock: Arc<dyn Clock>,
        config: BriefingConfig,
    ) -> Self {
        Self {
            feedback,
            cache: BriefingCache::new(storage, clock, config.cache_ttl),
            generator: BriefingGenerator::new(generator, config.max_prompt_entries),
        }
    }

    /// Fresh cached briefing if there is one, otherwise generate and cache.
    ///
    /// A failed generation is logged and replaced by the fallback text,
    /// which is then cached like any other result. Store errors propagate.
    pub async fn briefing(&self) -> Result<Briefing> {
        if let Some(cached) = self.cache.get()? {
            if self.cache.is_fresh(cached.generated_at) {
                log::debug!("Serving cached briefing from {}", cached.generated_at);
                return Ok(cached);
            }
        }

        let entries = self.feedback.list()?;
        let text = match self.generator.generate(&entries).await {
            Ok(text) => {
                log::info!(
                    "Generated briefing via {} from {} feedback entries",
                    self.generator.provider(),
                    entries.len()
                );
                text
            }
            Err(e) => {
                log::warn!("Briefing generation failed, using fallback: {}", e);
                FALLBACK_BRIEFING.to_string()
            }
        };

        self.cache.put(&text)
    }
}
