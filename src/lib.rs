//! # Room Palette
//!
//! A Rust crate for matching furniture products to the colors of a room.
//!
//! This library recommends catalog products for a room photo by:
//! - Extracting the dominant colors of the photo
//! - Naming each color with a fixed Italian vocabulary
//! - Filtering and scoring products against those names and free-text requirements
//! - Explaining every recommendation with a short reason
//!
//! ## Example
//!
//! ```rust,no_run
//! use room_palette::{load_image, Product, RecommendationRequest, Recommender};
//! use std::path::Path;
//!
//! let room = load_image(Path::new("room.jpg"))?;
//! let catalog: Vec<Product> = serde_json::from_str(&std::fs::read_to_string("products.json")?)?;
//!
//! let request = RecommendationRequest::new("divano").with_requirements("in velluto");
//! let response = Recommender::new().recommend_from_image(&room, &request, &catalog)?;
//! for product in &response.products {
//!     println!("{} ({}): {}", product.product_name, product.compatibility_score, product.reason);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub mod constants;
pub mod config;
pub mod image_loader;
pub mod color;
pub mod matching;
pub mod recommendation;

pub use color::{
    extract_dominant_colors, name_color, ColorName, ColorNamer, ColorSample, PaletteExtractor,
};
pub use config::MatcherConfig;
pub use error::{MatchError, Result};
pub use image_loader::{decode_image, from_raw_rgba, load_image};
pub use matching::{
    extract_color_requests, extract_material_requests, find_matching_products, MatchPolicy,
    Product, ProductMatcher, ReasonGenerator, ScoredProduct,
};
pub use recommendation::{
    parse_detected_colors, Recommendation, RecommendationRequest, RecommendedProduct,
    Recommender,
};

/// A detected room color with its display and vocabulary representations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedColor {
    /// Upper-case `#RRGGBB`
    pub hex: String,
    /// Italian vocabulary label
    pub name: ColorName,
}

/// Extract the room palette from an image and name every color
///
/// Colors are ordered from most to least dominant. Uses the default
/// sampling and clustering parameters.
pub fn analyze_room(image: &image::RgbaImage) -> Result<Vec<NamedColor>> {
    let namer = ColorNamer::new();
    PaletteExtractor::new()
        .extract_dominant_colors(image)
        .into_iter()
        .map(|hex| {
            let name = namer.name_hex(&hex)?;
            Ok(NamedColor { hex, name })
        })
        .collect()
}
