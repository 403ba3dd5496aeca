use crate::config::PlayerDimensions;
use crate::core::{
    classify, extract_matches, normalize_anchors, substitute, Provider, ProviderReport,
};
use crate::providers::{VimeoProvider, YouTubeProvider};
use crate::utils::is_edit_action;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Names prefix the `<name>_vid_<id>` anchors, so they must not collide.
    #[error("A provider named '{0}' is already registered")]
    DuplicateProvider(&'static str),
}

/// Runs every registered provider's pipeline over a document, in
/// registration order, each provider seeing the previous one's output.
pub struct EmbedEngine {
    providers: Vec<Box<dyn Provider>>,
}

impl EmbedEngine {
    /// YouTube, then Vimeo.
    pub fn new() -> Self {
        Self {
            providers: vec![
                Box::new(YouTubeProvider::new()),
                Box::new(VimeoProvider::new()),
            ],
        }
    }

    pub fn empty() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Append a provider; it runs after every provider already registered.
    pub fn register_provider(&mut self, provider: Box<dyn Provider>) -> Result<(), EngineError> {
        let name = provider.name();
        if self.providers.iter().any(|existing| existing.name() == name) {
            return Err(EngineError::DuplicateProvider(name));
        }

        self.providers.push(provider);
        Ok(())
    }

    pub fn providers(&self) -> &[Box<dyn Provider>] {
        &self.providers
    }

    pub fn transform(&self, document: &str, dimensions: PlayerDimensions) -> String {
        let mut current = document.to_string();
        for provider in &self.providers {
            let (next, _) = run_provider(&current, provider.as_ref(), dimensions);
            current = next;
        }
        current
    }

    /// Dry run of `transform`: what each provider would embed or link.
    ///
    /// Positions are byte offsets into the document as that provider sees
    /// it, after earlier providers and its own anchor normalization ran.
    pub fn scan(&self, document: &str) -> Vec<ProviderReport> {
        let mut current = document.to_string();
        let mut reports = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            let (next, report) =
                run_provider(&current, provider.as_ref(), PlayerDimensions::default());
            reports.push(report);
            current = next;
        }

        reports
    }

    /// Host entry point for a freshly compiled page.
    ///
    /// Edit views keep their raw links so they stay editable.
    pub fn filter_compiled_content(
        &self,
        content: &str,
        action: &str,
        dimensions: PlayerDimensions,
    ) -> String {
        if is_edit_action(action) {
            debug!("Skipping video embedding for action '{}'", action);
            return content.to_string();
        }

        let output = self.transform(content, dimensions);
        info!(
            "Embedded video links for action '{}' at {}x{}",
            action, dimensions.width, dimensions.height
        );
        output
    }
}

impl Default for EmbedEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn run_provider(
    document: &str,
    provider: &dyn Provider,
    dimensions: PlayerDimensions,
) -> (String, ProviderReport) {
    let normalized = normalize_anchors(document, provider);
    let matches = classify(extract_matches(&normalized, provider));

    let output = substitute(&normalized, &matches, provider, dimensions);
    let report = ProviderReport {
        provider: provider.name(),
        matches,
    };
    debug!(
        "{}: {} embed(s), {} jump link(s)",
        report.provider,
        report.embeds(),
        report.jump_links()
    );

    (output, report)
}
