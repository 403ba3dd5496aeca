use crate::config::PlayerDimensions;
use crate::core::{build_anchor_pattern, build_url_pattern, IdentifierRule, Provider};
use regex::Regex;
use std::sync::LazyLock;

const DOMAIN: &str = "youtube.com";
// "/watch?v=" or just "/?v="
const PATH: &str = r"/(?:watch)?\?v=";
const ID_RULE: IdentifierRule = IdentifierRule::FixedLength(11);

static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    build_anchor_pattern(DOMAIN, PATH, ID_RULE).expect("YouTube anchor pattern is valid")
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    build_url_pattern(DOMAIN, PATH, ID_RULE).expect("YouTube URL pattern is valid")
});

pub struct YouTubeProvider;

impl YouTubeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YouTubeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for YouTubeProvider {
    fn name(&self) -> &'static str {
        "youtube"
    }

    fn anchor_pattern(&self) -> &Regex {
        &ANCHOR_RE
    }

    fn url_pattern(&self) -> &Regex {
        &URL_RE
    }

    /// Classic player URL, already escaped for use in an attribute.
    fn player_url(&self, id: &str) -> String {
        format!("http://www.youtube.com/v/{}?hl=en&amp;fs=1", id)
    }

    fn embed_markup(&self, id: &str, dimensions: PlayerDimensions) -> String {
        let url = self.player_url(id);
        let PlayerDimensions { width, height } = dimensions;
        format!(
            concat!(
                r#"<object width="{w}" height="{h}">"#,
                r#"<param name="movie" value="{url}"></param>"#,
                r#"<param name="allowFullScreen" value="true"></param>"#,
                r#"<param name="allowscriptaccess" value="always"></param>"#,
                r#"<embed src="{url}" type="application/x-shockwave-flash" allowscriptaccess="always" allowfullscreen="true" width="{w}" height="{h}"></embed>"#,
                "</object>"
            ),
            url = url,
            w = width,
            h = height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_markup() {
        let markup = YouTubeProvider::new().embed_markup("dQw4w9WgXcQ", PlayerDimensions::new(640, 390));
        assert!(markup.starts_with(r#"<object width="640" height="390">"#));
        assert_eq!(markup.matches("http://www.youtube.com/v/dQw4w9WgXcQ?hl=en&amp;fs=1").count(), 2);
        assert!(markup.contains(r#"allowfullscreen="true""#));
        assert!(markup.contains(r#"allowscriptaccess="always""#));
    }

    #[test]
    fn test_embed_does_not_rematch() {
        let youtube = YouTubeProvider::new();
        let markup = youtube.embed_markup("dQw4w9WgXcQ", PlayerDimensions::default());
        assert!(!youtube.url_pattern().is_match(&markup));
    }

    #[test]
    fn test_fragment_id() {
        assert_eq!(YouTubeProvider::new().fragment_id("dQw4w9WgXcQ"), "youtube_vid_dQw4w9WgXcQ");
    }
}
