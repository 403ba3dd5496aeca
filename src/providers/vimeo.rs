use crate::config::PlayerDimensions;
use crate::core::{build_anchor_pattern, build_url_pattern, IdentifierRule, Provider};
use regex::Regex;
use std::sync::LazyLock;

const DOMAIN: &str = "vimeo.com";
const PATH: &str = "/";
const ID_RULE: IdentifierRule = IdentifierRule::Numeric;

static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    build_anchor_pattern(DOMAIN, PATH, ID_RULE).expect("Vimeo anchor pattern is valid")
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    build_url_pattern(DOMAIN, PATH, ID_RULE).expect("Vimeo URL pattern is valid")
});

pub struct VimeoProvider;

impl VimeoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VimeoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for VimeoProvider {
    fn name(&self) -> &'static str {
        "vimeo"
    }

    fn anchor_pattern(&self) -> &Regex {
        &ANCHOR_RE
    }

    fn url_pattern(&self) -> &Regex {
        &URL_RE
    }

    fn player_url(&self, id: &str) -> String {
        format!(
            "http://vimeo.com/moogaloop.swf?clip_id={}&amp;server=vimeo.com&amp;show_title=1&amp;show_byline=1&amp;show_portrait=0&amp;fullscreen=1",
            id
        )
    }

    fn embed_markup(&self, id: &str, dimensions: PlayerDimensions) -> String {
        let url = self.player_url(id);
        let PlayerDimensions { width, height } = dimensions;
        format!(
            concat!(
                r#"<object width="{w}" height="{h}">"#,
                r#"<param name="allowfullscreen" value="true" />"#,
                r#"<param name="allowscriptaccess" value="always" />"#,
                r#"<param name="movie" value="{url}" />"#,
                r#"<embed src="{url}" type="application/x-shockwave-flash" allowfullscreen="true" allowscriptaccess="always" width="{w}" height="{h}"></embed>"#,
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
    fn test_player_url() {
        let url = VimeoProvider::new().player_url("123456789");
        assert!(url.starts_with("http://vimeo.com/moogaloop.swf?clip_id=123456789&amp;server=vimeo.com"));
        assert!(url.ends_with("show_portrait=0&amp;fullscreen=1"));
    }

    #[test]
    fn test_embed_does_not_rematch() {
        let vimeo = VimeoProvider::new();
        let markup = vimeo.embed_markup("123456789", PlayerDimensions::new(800, 450));
        assert!(markup.contains(r#"width="800" height="450""#));
        assert!(!vimeo.url_pattern().is_match(&markup));
        assert!(!vimeo.anchor_pattern().is_match(&markup));
    }
}
