//! Human-readable match explanations
//!
//! Template selection mirrors the strict-palette color gate so the reason
//! given always agrees with why a product was kept:
//! exact detected color, then neutral tones, then contrast.

use super::product::Product;
use crate::{color::ColorName, constants::vocabulary};

/// Which template explains a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonKind {
    /// Product text mentions this detected color
    ColorMatch(ColorName),
    /// Product text mentions this neutral label
    Neutral(&'static str),
    /// Neither; the product stands out against the palette
    Contrast,
}

/// Deterministic reason strings for matched products
#[derive(Debug, Clone, Copy, Default)]
pub struct ReasonGenerator;

impl ReasonGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Pick the template for a product; first matching rule wins
    pub fn classify(&self, product: &Product, detected_colors: &[ColorName]) -> ReasonKind {
        let text = product.text();

        if let Some(color) = detected_colors
            .iter()
            .find(|color| text.contains(color.as_str()))
        {
            return ReasonKind::ColorMatch(*color);
        }

        if let Some(neutral) = vocabulary::NEUTRAL_COLORS
            .iter()
            .find(|neutral| text.contains(*neutral))
        {
            return ReasonKind::Neutral(*neutral);
        }

        ReasonKind::Contrast
    }

    /// Explain why `product` fits a room with the given detected colors
    pub fn generate_product_reason(
        &self,
        product: &Product,
        detected_colors: &[ColorName],
        furniture_type: &str,
    ) -> String {
        let piece = if furniture_type.trim().is_empty() {
            "piece"
        } else {
            furniture_type.trim()
        };
        let dominant = detected_colors
            .first()
            .map(ColorName::as_str)
            .unwrap_or("palette");

        match self.classify(product, detected_colors) {
            ReasonKind::ColorMatch(color) => format!(
                "This {} matches the detected {} perfectly, picking up the main tone of your room.",
                piece, color
            ),
            ReasonKind::Neutral(neutral) => format!(
                "This {} brings {} neutral tones that complement the {} of your room.",
                piece, neutral, dominant
            ),
            ReasonKind::Contrast => format!(
                "This {} creates a contrasting focal point against the {} of your room.",
                piece, dominant
            ),
        }
    }
}
