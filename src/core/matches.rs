use serde::Serialize;

/// One occurrence of a provider URL in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// The exact matched text, scheme and trailing query included.
    pub raw: String,
    pub identifier: String,
    /// Byte offset of the match in the scanned document.
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Gets a named anchor and a full player embed.
    First,
    /// Same identifier as the match right before it; becomes a jump link.
    Repeat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedMatch {
    #[serde(flatten)]
    pub record: MatchRecord,
    pub classification: Classification,
}

/// Scan results for a single provider, in document order.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderReport {
    pub provider: &'static str,
    pub matches: Vec<ClassifiedMatch>,
}

impl ProviderReport {
    pub fn embeds(&self) -> usize {
        self.count(Classification::First)
    }

    pub fn jump_links(&self) -> usize {
        self.count(Classification::Repeat)
    }

    fn count(&self, classification: Classification) -> usize {
        self.matches
            .iter()
            .filter(|m| m.classification == classification)
            .count()
    }
}
