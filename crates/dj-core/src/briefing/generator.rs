use super::prompt::build_prompt;
use crate::error::GenerationError;
use crate::llm::TextGenerator;
use crate::types::FeedbackEntry;
use std::sync::Arc;

/// Turns recent feedback into briefing text via a [`TextGenerator`].
///
/// Errors are returned as-is; substituting the fallback is the caller's call.
pub struct BriefingGenerator<G: TextGenerator + ?Sized> {
    generator: Arc<G>,
    max_entries: usize,
}

impl<G: TextGenerator + ?Sized> BriefingGenerator<G> {
    pub fn new(generator: Arc<G>, max_entries: usize) -> Self {
        Self {
            generator,
            max_entries,
        }
    }

    pub fn provider(&self) -> &str {
        self.generator.name()
    }

    /// `entries` must be newest-first; only the first `max_entries` are used.
    pub async fn generate(&self, entries: &[FeedbackEntry]) -> Result<String, GenerationError> {
        let prompt = build_prompt(entries, self.max_entries);
        let text = self.generator.generate(&prompt).await?;
        if text.trim().is_empty() {
            return Err(GenerationError::Empty {
                provider: self.generator.name().to_string(),
            });
        }
        Ok(text)
    }
}
