//! Lyrics extraction from provider HTML.
//!
//! The provider's markup has changed several times and differs between page
//! variants, so extraction is an ordered list of strategies. The first one
//! producing non-empty text wins.

use super::LyricsError;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

lazy_static! {
    static ref LEGACY_SELECTOR: Selector = Selector::parse("div.lyrics").unwrap();
    static ref DATA_ATTRIBUTE_SELECTOR: Selector =
        Selector::parse(r#"div[data-lyrics-container="true"]"#).unwrap();
    static ref DIV_WITH_CLASS_SELECTOR: Selector = Selector::parse("div[class]").unwrap();
    // e.g. "Lyrics__Container-sc-1ynbvzw-6"
    static ref VERSIONED_CLASS_PATTERN: Regex =
        Regex::new(r"^Lyrics__Container-sc-[0-9a-z]+-\d+$").unwrap();
}

/// One way of locating lyrics in a page.
pub trait ExtractionStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Lyrics text, or an empty string when this strategy finds nothing.
    fn attempt(&self, document: &Html) -> String;
}

/// Single `<div class="lyrics">` used by older pages.
pub struct LegacyClassStrategy;

impl ExtractionStrategy for LegacyClassStrategy {
    fn name(&self) -> &'static str {
        "legacy-class"
    }

    fn attempt(&self, document: &Html) -> String {
        document
            .select(&LEGACY_SELECTOR)
            .next()
            .map(text_content)
            .unwrap_or_default()
    }
}

/// Every `<div data-lyrics-container="true">`, joined by a blank line.
pub struct DataAttributeStrategy;

impl ExtractionStrategy for DataAttributeStrategy {
    fn name(&self) -> &'static str {
        "data-attribute"
    }

    fn attempt(&self, document: &Html) -> String {
        document
            .select(&DATA_ATTRIBUTE_SELECTOR)
            .map(text_content)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// First div whose generated class name looks like `Lyrics__Container-sc-<hash>-<n>`.
pub struct VersionedClassStrategy;

impl ExtractionStrategy for VersionedClassStrategy {
    fn name(&self) -> &'static str {
        "versioned-class"
    }

    fn attempt(&self, document: &Html) -> String {
        document
            .select(&DIV_WITH_CLASS_SELECTOR)
            .find(|div| div.value().classes().any(|c| VERSIONED_CLASS_PATTERN.is_match(c)))
            .map(text_content)
            .unwrap_or_default()
    }
}

/// Ordered chain of [`ExtractionStrategy`].
pub struct LyricsExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl LyricsExtractor {
    pub fn new(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    /// Append a strategy, tried after all existing ones.
    pub fn with_strategy(mut self, strategy: Box<dyn ExtractionStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Run the strategies in order on `html`.
    ///
    /// The first strategy with non-empty output wins and later ones are not
    /// tried. Its output is trimmed; whitespace-only output is `NotFound`.
    pub fn extract(&self, html: &str) -> Result<(String, &'static str), LyricsError> {
        let document = Html::parse_document(html);
        for strategy in &self.strategies {
            let text = strategy.attempt(&document);
            if text.is_empty() {
                debug!(strategy = strategy.name(), "Extraction strategy found nothing");
                continue;
            }

            let trimmed = text.trim();
            if trimmed.is_empty() {
                debug!(strategy = strategy.name(), "Lyrics container is blank");
                return Err(LyricsError::NotFound);
            }
            debug!(strategy = strategy.name(), chars = trimmed.len(), "Lyrics extracted");
            return Ok((trimmed.to_string(), strategy.name()));
        }
        Err(LyricsError::NotFound)
    }
}

impl Default for LyricsExtractor {
    fn default() -> Self {
        Self::new(vec![
            Box::new(LegacyClassStrategy),
            Box::new(DataAttributeStrategy),
            Box::new(VersionedClassStrategy),
        ])
    }
}

/// Extract lyrics with the default strategy chain.
pub fn extract_lyrics(html: &str) -> Result<String, LyricsError> {
    LyricsExtractor::default().extract(html).map(|(text, _)| text)
}

/// Strip any markup left in lyrics text, keeping only its text content.
pub fn clean_lyrics(text: &str) -> String {
    let fragment = Html::parse_fragment(text);
    text_content(fragment.root_element())
}

/// Concatenated text of all descendants; `<br>` becomes a newline.
fn text_content(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() == "br" => out.push('\n'),
            _ => {}
        }
    }
    out
}
