use crate::config::PlayerDimensions;
use crate::core::{Classification, ClassifiedMatch, Provider};
use tracing::debug;

pub const JUMP_LINK_TEXT: &str = "Jump to Video";

pub fn jump_link(provider: &dyn Provider, id: &str) -> String {
    format!(r##"<a href="#{}">{}</a>"##, provider.fragment_id(id), JUMP_LINK_TEXT)
}

pub fn named_anchor(provider: &dyn Provider, id: &str) -> String {
    format!(r#"<a name="{}"></a>"#, provider.fragment_id(id))
}

/// Rewrite each classified match in `document` into a jump link or a player embed.
///
/// `matches` must come from scanning this same `document`; replacement is
/// spliced at each recorded position, so a literal URL repeated back to back
/// still yields one embed followed by a jump link. This deliberately differs
/// from replacing every copy of the matched text at once.
pub fn substitute(
    document: &str,
    matches: &[ClassifiedMatch],
    provider: &dyn Provider,
    dimensions: PlayerDimensions,
) -> String {
    if matches.is_empty() {
        return document.to_string();
    }

    let mut output = String::with_capacity(document.len() + matches.len() * 512);
    let mut cursor = 0usize;

    for m in matches {
        let start = m.record.position;
        let end = start + m.record.raw.len();
        // Skip anything that doesn't line up with this document
        if start < cursor || document.get(start..end) != Some(m.record.raw.as_str()) {
            debug!("{}: stale match at {} skipped", provider.name(), start);
            continue;
        }

        output.push_str(&document[cursor..start]);
        let id = m.record.identifier.as_str();
        match m.classification {
            Classification::Repeat => output.push_str(&jump_link(provider, id)),
            Classification::First => {
                output.push_str(&named_anchor(provider, id));
                output.push_str(&provider.embed_markup(id, dimensions));
            }
        }
        cursor = end;
    }

    output.push_str(&document[cursor..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{classify, extract_matches};
    use crate::providers::{VimeoProvider, YouTubeProvider};

    fn run(doc: &str, provider: &dyn Provider) -> String {
        let matches = classify(extract_matches(doc, provider));
        substitute(doc, &matches, provider, PlayerDimensions::default())
    }

    #[test]
    fn test_first_occurrence_embeds() {
        let vimeo = VimeoProvider::new();
        let out = run("before vimeo.com/77 after", &vimeo);
        assert!(out.starts_with(
            r#"before <a name="vimeo_vid_77"></a><object width="516" height="344">"#
        ));
        assert!(out.ends_with("</object> after"));
    }

    #[test]
    fn test_identical_literal_back_to_back() {
        let youtube = YouTubeProvider::new();
        let url = "http://youtube.com/watch?v=abcdefghijk";
        let out = run(&format!("{} {}", url, url), &youtube);
        assert_eq!(out.matches(r#"<a name="youtube_vid_abcdefghijk"></a>"#).count(), 1);
        assert_eq!(out.matches("<object ").count(), 1);
        assert!(out.ends_with(r##" <a href="#youtube_vid_abcdefghijk">Jump to Video</a>"##));
    }

    #[test]
    fn test_stale_matches_are_ignored() {
        let vimeo = VimeoProvider::new();
        let matches = classify(extract_matches("vimeo.com/1", &vimeo));
        let out = substitute("short", &matches, &vimeo, PlayerDimensions::default());
        assert_eq!(out, "short");
    }
}
