pub mod dedup;
pub mod engine;
pub mod extractor;
pub mod matches;
pub mod provider;
pub mod substitute;

pub use dedup::classify;
pub use engine::{EmbedEngine, EngineError};
pub use extractor::{extract_matches, normalize_anchors};
pub use matches::{Classification, ClassifiedMatch, MatchRecord, ProviderReport};
pub use provider::{build_anchor_pattern, build_url_pattern, IdentifierRule, Provider};
pub use substitute::{jump_link, named_anchor, substitute};
