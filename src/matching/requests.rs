//! Explicit color and material requests in free-text requirements
//!
//! Words are matched case-insensitively on word boundaries against fixed
//! vocabularies. Inflected forms (`rosso`, `rossa`, `rossi`, `rosse`) are
//! separate vocabulary entries; there is no stemming.

use std::sync::OnceLock;

use regex::Regex;

use crate::constants::vocabulary;

static SHARED: OnceLock<RequestExtractor> = OnceLock::new();

/// Which vocabulary a request word comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Color,
    Material,
}

/// Keyword extractor with one precompiled pattern per vocabulary word
#[derive(Debug, Clone)]
pub struct RequestExtractor {
    colors: Vec<(&'static str, Regex)>,
    materials: Vec<(&'static str, Regex)>,
}

impl Default for RequestExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestExtractor {
    /// Extractor over the fixed vocabularies
    ///
    /// Patterns are compiled once per process and shared by every extractor.
    pub fn new() -> Self {
        Self::shared().clone()
    }

    /// Process-wide extractor, compiled on first use
    pub fn shared() -> &'static RequestExtractor {
        SHARED.get_or_init(|| Self {
            colors: compile(&vocabulary::COLOR_REQUESTS),
            materials: compile(&vocabulary::MATERIAL_REQUESTS),
        })
    }

    /// Color words mentioned in `text`, in vocabulary order, each at most once
    pub fn extract_color_requests(&self, text: &str) -> Vec<String> {
        find_words(&self.colors, text)
    }

    /// Material words mentioned in `text`, in vocabulary order, each at most once
    pub fn extract_material_requests(&self, text: &str) -> Vec<String> {
        find_words(&self.materials, text)
    }

    pub fn extract(&self, kind: RequestKind, text: &str) -> Vec<String> {
        match kind {
            RequestKind::Color => self.extract_color_requests(text),
            RequestKind::Material => self.extract_material_requests(text),
        }
    }
}

fn compile(words: &[&'static str]) -> Vec<(&'static str, Regex)> {
    words
        .iter()
        .map(|word| (*word, word_pattern(word)))
        .collect()
}

/// Case-insensitive whole-word pattern for a vocabulary entry
fn word_pattern(word: &str) -> Regex {
    // An escaped literal between word boundaries always parses
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word)))
        .expect("escaped vocabulary word is a valid pattern")
}

fn find_words(patterns: &[(&'static str, Regex)], text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    patterns
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(word, _)| word.to_string())
        .collect()
}

/// Color requests using the shared extractor
pub fn extract_color_requests(text: &str) -> Vec<String> {
    RequestExtractor::shared().extract_color_requests(text)
}

/// Material requests using the shared extractor
pub fn extract_material_requests(text: &str) -> Vec<String> {
    RequestExtractor::shared().extract_material_requests(text)
}
