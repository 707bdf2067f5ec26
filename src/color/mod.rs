//! Color measurement, naming and palette extraction
//!
//! This module turns raw RGB samples and room photos into the Italian
//! color labels the product matcher works with.

pub mod conversion;
pub mod extraction;
pub mod naming;

pub use conversion::{ColorMetrics, ColorSample};
pub use extraction::{extract_dominant_colors, PaletteExtractor};
pub use naming::{name_color, Classification, ColorName, ColorNamer, NamingRule, NAMING_RULES};
