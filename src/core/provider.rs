use crate::config::PlayerDimensions;
use regex::Regex;

/// How a provider's video identifier is read out of its URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierRule {
    /// Exactly `n` characters, taken non-greedily.
    FixedLength(usize),
    /// One or more decimal digits.
    Numeric,
}

impl IdentifierRule {
    fn capture(&self) -> String {
        match self {
            IdentifierRule::FixedLength(len) => format!("(.{{{}}}?)", len),
            IdentifierRule::Numeric => "([0-9]+)".to_string(),
        }
    }
}

/// A video site whose links can be rewritten into an embedded player.
///
/// Both patterns capture the scheme-less host/path in group 1 and the
/// identifier in group 2.
pub trait Provider: Send + Sync {
    fn name(&self) -> &'static str;
    fn anchor_pattern(&self) -> &Regex;
    fn url_pattern(&self) -> &Regex;
    fn player_url(&self, id: &str) -> String;
    fn embed_markup(&self, id: &str, dimensions: PlayerDimensions) -> String;

    /// Named anchor target shared by the embed and its jump links.
    fn fragment_id(&self, id: &str) -> String {
        format!("{}_vid_{}", self.name(), id)
    }
}

// Optional scheme, then an optional short subdomain ("www.", "m.") before the domain
fn url_body(domain: &str, path: &str, rule: IdentifierRule) -> String {
    format!(
        r"(?:https?://)?((?:[a-z]{{1,4}}\.)?{}{}{})",
        regex::escape(domain),
        path,
        rule.capture()
    )
}

/// Bare URL pattern. The trailing run stops at whitespace, `<` or a period.
pub fn build_url_pattern(
    domain: &str,
    path: &str,
    rule: IdentifierRule,
) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?si){}[^\s<.]*", url_body(domain, path, rule)))
}

/// Whole anchor tag whose href points at the provider, link text included.
pub fn build_anchor_pattern(
    domain: &str,
    path: &str,
    rule: IdentifierRule,
) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r#"(?si)<a[^>]+href=['"]{}[^"']*['"][^>]*>[^<]*</a>"#,
        url_body(domain, path, rule)
    ))
}
