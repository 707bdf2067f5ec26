//! Recommendation requests and responses
//!
//! Ties the pieces together for the recommendation endpoint:
//! furniture type mapping, candidate pre-filtering, color naming,
//! matching and reason generation. The endpoint itself (upload storage,
//! product store queries, HTTP status mapping) lives outside this crate.

use image::RgbaImage;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    color::{ColorNamer, PaletteExtractor},
    config::MatcherConfig,
    matching::{
        filter_by_category, map_furniture_type, MatchPolicy, ProductMatcher, Product,
        ReasonGenerator,
    },
    MatchError, Result,
};

/// Form fields of a recommendation request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    /// User-facing furniture keyword, e.g. `divano`
    pub furniture_type: String,

    /// Free-text requirements, may be empty
    #[serde(default)]
    pub requirements: String,

    /// Detected `#RRGGBB` colors, most dominant first
    #[serde(default)]
    pub detected_colors: Vec<String>,

    #[serde(default)]
    pub policy: MatchPolicy,

    /// Where the uploaded photo was stored, echoed back in the response
    #[serde(default)]
    pub image_url: Option<String>,
}

impl RecommendationRequest {
    pub fn new(furniture_type: impl Into<String>) -> Self {
        Self {
            furniture_type: furniture_type.into(),
            ..Self::default()
        }
    }

    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.requirements = requirements.into();
        self
    }

    pub fn with_detected_colors<S: Into<String>>(
        mut self,
        colors: impl IntoIterator<Item = S>,
    ) -> Self {
        self.detected_colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// One recommended product as returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedProduct {
    pub product_id: String,
    pub product_name: String,
    pub product_image: Option<String>,
    pub price: f64,
    pub description: String,
    pub compatibility_score: u32,
    pub reason: String,
}

/// Recommendation response
///
/// `message` is set only when `products` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub image_url: Option<String>,
    pub products: Vec<RecommendedProduct>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Recommendation {
    fn empty(image_url: Option<String>, message: String) -> Self {
        Self {
            image_url,
            products: Vec::new(),
            message: Some(message),
        }
    }
}

/// Decode the `detectedColors` form field (a JSON array of hex strings)
///
/// Blank input yields an empty list. Colors are validated later, when named.
pub fn parse_detected_colors(json: &str) -> Result<Vec<String>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(json).map_err(|e| MatchError::InvalidDetectedColors {
        message: e.to_string(),
        source: Some(e),
    })
}

/// Runs recommendation requests against an in-memory catalog
pub struct Recommender {
    config: MatcherConfig,
    namer: ColorNamer,
    extractor: PaletteExtractor,
    matcher: ProductMatcher,
    reasons: ReasonGenerator,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

impl Recommender {
    pub fn new() -> Self {
        Self::from_config(MatcherConfig::default())
    }

    pub fn from_config(config: MatcherConfig) -> Self {
        Self {
            namer: ColorNamer::new(),
            extractor: PaletteExtractor::from_config(&config.extraction),
            matcher: ProductMatcher::from_config(&config.scoring),
            reasons: ReasonGenerator::new(),
            config,
        }
    }

    /// Replace the matcher, e.g. to add scoring terms or an observer
    pub fn with_matcher(mut self, matcher: ProductMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Recommend products from `catalog` for the request
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidParameter` for a blank furniture type and
    /// `MatchError::InvalidColorFormat` for a malformed detected color. An
    /// empty category or no surviving product is reported through
    /// `Recommendation::message`.
    pub fn recommend(
        &self,
        request: &RecommendationRequest,
        catalog: &[Product],
    ) -> Result<Recommendation> {
        let furniture_type = request.furniture_type.trim();
        if furniture_type.is_empty() {
            return Err(MatchError::InvalidParameter {
                parameter: "furnitureType".into(),
                value: request.furniture_type.clone(),
            });
        }

        let detected = self.namer.name_all(&request.detected_colors)?;

        let category = map_furniture_type(&self.config.recommendation.category_map, furniture_type);
        let candidates = filter_by_category(
            catalog,
            &category,
            self.config.recommendation.candidate_limit,
        );
        debug!(
            "Category {:?}: {} candidates of {} catalog products",
            category,
            candidates.len(),
            catalog.len()
        );

        if candidates.is_empty() {
            return Ok(Recommendation::empty(
                request.image_url.clone(),
                format!("No products found in category {:?}", category),
            ));
        }

        let matches = self.matcher.match_named(
            &candidates,
            &detected,
            furniture_type,
            &request.requirements,
            request.policy,
        );

        if matches.is_empty() {
            let message = match request.policy {
                MatchPolicy::StrictPalette => {
                    "No products match the colors detected in your room".to_string()
                }
                MatchPolicy::RequirementDriven => {
                    "No products match your requirements".to_string()
                }
            };
            return Ok(Recommendation::empty(request.image_url.clone(), message));
        }

        let products: Vec<RecommendedProduct> = matches
            .into_iter()
            .map(|scored| {
                let reason = self.reasons.generate_product_reason(
                    &scored.product,
                    &detected,
                    furniture_type,
                );
                RecommendedProduct {
                    product_id: scored.product.id.clone(),
                    product_name: scored.product.name_or_empty().to_string(),
                    product_image: scored.product.cover_image().map(str::to_string),
                    price: scored.product.price,
                    description: scored.product.description_or_empty().to_string(),
                    compatibility_score: scored.compatibility_score,
                    reason,
                }
            })
            .collect();

        info!(
            "Recommended {} {} products for detected colors {:?}",
            products.len(),
            furniture_type,
            detected
        );

        Ok(Recommendation {
            image_url: request.image_url.clone(),
            products,
            message: None,
        })
    }

    /// Like [`recommend`](Self::recommend), extracting the palette from the room
    /// photo when the request carries no detected colors
    pub fn recommend_from_image(
        &self,
        image: &RgbaImage,
        request: &RecommendationRequest,
        catalog: &[Product],
    ) -> Result<Recommendation> {
        if !request.detected_colors.is_empty() {
            return self.recommend(request, catalog);
        }

        let mut request = request.clone();
        request.detected_colors = self.extractor.extract_dominant_colors(image);
        self.recommend(&request, catalog)
    }
}
