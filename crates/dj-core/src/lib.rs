//! Feedback DJ core: the feedback list, the briefing cache and the
//! briefing generator, all on top of a plain string key-value store.

pub mod briefing;
pub mod clock;
pub mod error;
pub mod feedback;
pub mod llm;
pub mod storage;
pub mod types;

pub use briefing::{BriefingCache, BriefingConfig, BriefingEngine, FALLBACK_BRIEFING};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{DjError, GenerationError, Result};
pub use feedback::{CountMode, FeedbackConfig, FeedbackStore, IngestOutcome, MISSING_TEXT};
pub use llm::{build_generator, GeneratorConfig, ProviderKind, TextGenerator};
pub use storage::{KvStore, MemoryKvStore, RedbKvStore};
pub use types::*;
