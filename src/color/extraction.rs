//! Dominant palette extraction from room photos
//!
//! Reduces an RGBA image to at most a handful of representative colors:
//! - Samples a strided grid instead of every pixel
//! - Quantizes channels to multiples of 32 (8 levels per channel)
//! - Counts bucket frequency, skipping mostly transparent pixels
//! - Greedily keeps the most frequent buckets that are not near an accepted one

use std::collections::HashMap;

use image::RgbaImage;
use log::debug;

use super::conversion::ColorSample;
use crate::{config::ExtractionConfig, constants::extraction};

/// Histogram-based dominant color extractor
#[derive(Debug, Clone)]
pub struct PaletteExtractor {
    sample_step: u32,
    quantization_step: u8,
    min_alpha: u8,
    distance_threshold: f64,
    max_colors: usize,
}

impl Default for PaletteExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteExtractor {
    /// Create an extractor with default parameters
    pub fn new() -> Self {
        Self {
            sample_step: extraction::SAMPLE_STEP,
            quantization_step: extraction::QUANTIZATION_STEP,
            min_alpha: extraction::MIN_ALPHA,
            distance_threshold: extraction::DISTANCE_THRESHOLD,
            max_colors: extraction::MAX_COLORS,
        }
    }

    /// Create an extractor from configuration
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            sample_step: config.sample_step,
            quantization_step: config.quantization_step,
            min_alpha: config.min_alpha,
            distance_threshold: config.distance_threshold,
            max_colors: config.max_colors,
        }
    }

    /// Override the sampling stride (0 is treated as 1)
    pub fn with_sample_step(mut self, sample_step: u32) -> Self {
        self.sample_step = sample_step;
        self
    }

    /// Extract dominant colors as upper-case `#RRGGBB`, most frequent first
    pub fn extract_dominant_colors(&self, image: &RgbaImage) -> Vec<String> {
        self.extract_samples(image)
            .iter()
            .map(ColorSample::to_hex)
            .collect()
    }

    /// Extract dominant colors as samples, most frequent first
    ///
    /// Never returns more than the configured maximum, and no two returned
    /// colors are within the distance threshold of each other.
    pub fn extract_samples(&self, image: &RgbaImage) -> Vec<ColorSample> {
        let buckets = self.histogram(image);

        let mut accepted: Vec<ColorSample> = Vec::with_capacity(self.max_colors);
        for (candidate, _) in &buckets {
            if accepted.len() >= self.max_colors {
                break;
            }
            if accepted
                .iter()
                .all(|kept| kept.distance(candidate) > self.distance_threshold)
            {
                accepted.push(*candidate);
            }
        }

        debug!(
            "Palette: {} buckets from {}x{} image, kept {}",
            buckets.len(),
            image.width(),
            image.height(),
            accepted.len()
        );

        accepted
    }

    /// Quantized bucket counts, most frequent first
    ///
    /// Equal counts are ordered by ascending RGB so the result is deterministic.
    fn histogram(&self, image: &RgbaImage) -> Vec<(ColorSample, usize)> {
        let step = self.sample_step.max(1) as usize;
        let mut counts: HashMap<[u8; 3], usize> = HashMap::new();

        for y in (0..image.height()).step_by(step) {
            for x in (0..image.width()).step_by(step) {
                let [r, g, b, a] = image.get_pixel(x, y).0;
                if a < self.min_alpha {
                    continue;
                }
                let key = [self.quantize(r), self.quantize(g), self.quantize(b)];
                *counts.entry(key).or_insert(0) += 1;
            }
        }

        let mut buckets: Vec<([u8; 3], usize)> = counts.into_iter().collect();
        buckets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        buckets
            .into_iter()
            .map(|([r, g, b], count)| (ColorSample::from_rgb(r, g, b), count))
            .collect()
    }

    /// Round to the nearest multiple of the quantization step, clamped to 255
    fn quantize(&self, value: u8) -> u8 {
        let step = f64::from(self.quantization_step.max(1));
        ((f64::from(value) / step).round() * step).min(255.0) as u8
    }
}

/// Extract dominant colors with default parameters and a custom stride
pub fn extract_dominant_colors(image: &RgbaImage, sample_step: u32) -> Vec<String> {
    PaletteExtractor::new()
        .with_sample_step(sample_step)
        .extract_dominant_colors(image)
}
