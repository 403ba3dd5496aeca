use crate::core::{MatchRecord, Provider};
use regex::Captures;
use std::borrow::Cow;
use tracing::debug;

/// Replace every anchor tag linking to the provider with its bare `http://` URL.
///
/// Link text and any other attributes are dropped. Returns the input
/// untouched when no anchor matches.
pub fn normalize_anchors<'a>(document: &'a str, provider: &dyn Provider) -> Cow<'a, str> {
    let pattern = provider.anchor_pattern();
    let mut replaced = 0usize;

    let normalized = pattern.replace_all(document, |caps: &Captures| {
        replaced += 1;
        format!("http://{}", &caps[1])
    });

    if replaced > 0 {
        debug!("{}: reduced {} anchor tag(s) to bare URLs", provider.name(), replaced);
    }

    normalized
}

/// All non-overlapping provider URLs in the document, left to right.
pub fn extract_matches(document: &str, provider: &dyn Provider) -> Vec<MatchRecord> {
    let matches: Vec<MatchRecord> = provider
        .url_pattern()
        .captures_iter(document)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let id = caps.get(2)?;
            Some(MatchRecord {
                raw: whole.as_str().to_string(),
                identifier: id.as_str().to_string(),
                position: whole.start(),
            })
        })
        .collect();

    debug!("{}: found {} video URL(s)", provider.name(), matches.len());
    matches
}
