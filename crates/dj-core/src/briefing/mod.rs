pub mod cache;
pub mod engine;
pub mod fallback;
pub mod generator;
pub mod prompt;

pub use cache::{BriefingCache, BRIEFING_TEXT_KEY, BRIEFING_TS_KEY};
pub use engine::{BriefingConfig, BriefingEngine};
pub use fallback::FALLBACK_BRIEFING;
pub use generator::BriefingGenerator;
pub use prompt::{build_prompt, format_feedback, SECTION_HEADERS};
