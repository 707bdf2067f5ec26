//! Product filtering and compatibility scoring
//!
//! Two policies share one entry point:
//!
//! - [`MatchPolicy::StrictPalette`]: category filter, then a hard color gate
//!   (detected or neutral color mentioned in name/description), then additive
//!   scoring where more dominant colors weigh more.
//! - [`MatchPolicy::RequirementDriven`]: category filter, then hard filters on
//!   colors and materials explicitly requested in the free-text requirements,
//!   then a flat base score plus any registered [`ScoringTerm`]s.
//!
//! Both are pure: inputs are never mutated, results are scored copies sorted
//! by descending score with ties kept in input order. Zero scores are dropped.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::category::matches_furniture_type;
use super::observer::{LogObserver, MatchEvent, MatchObserver};
use super::product::{Product, ScoredProduct};
use super::requests::{RequestExtractor, RequestKind};
use crate::{
    color::{ColorName, ColorNamer},
    config::ScoringConfig,
    constants::vocabulary,
    Result,
};

/// Matching strictness, selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// Detected colors come straight from palette extraction
    #[default]
    StrictPalette,
    /// Explicit color/material requests drive filtering
    RequirementDriven,
}

/// Inputs shared by every scoring step of one matching request
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'a> {
    pub detected_colors: &'a [ColorName],
    pub furniture_type: &'a str,
    pub requirements: &'a str,
    pub color_requests: &'a [String],
    pub material_requests: &'a [String],
}

/// Additional additive score for requirement-driven matching
pub trait ScoringTerm: Send + Sync {
    /// Short identifier used in diagnostics
    fn name(&self) -> &str;

    /// Points added to a product that survived every filter
    fn score(&self, product: &Product, context: &MatchContext<'_>) -> u32;
}

/// Whether `text` mentions any neutral color label
pub fn contains_neutral(text: &str) -> bool {
    vocabulary::NEUTRAL_COLORS
        .iter()
        .any(|neutral| text.contains(neutral))
}

/// Filters and scores products against detected colors and requirements
pub struct ProductMatcher {
    namer: ColorNamer,
    requests: RequestExtractor,
    scoring: ScoringConfig,
    terms: Vec<Box<dyn ScoringTerm>>,
    observer: Arc<dyn MatchObserver>,
}

impl Default for ProductMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductMatcher {
    /// Create a matcher with default weights, logging through `log`
    pub fn new() -> Self {
        Self::from_config(&ScoringConfig::default())
    }

    pub fn from_config(scoring: &ScoringConfig) -> Self {
        Self {
            namer: ColorNamer::new(),
            requests: RequestExtractor::new(),
            scoring: scoring.clone(),
            terms: Vec::new(),
            observer: Arc::new(LogObserver),
        }
    }

    /// Replace the diagnostic observer
    pub fn with_observer(mut self, observer: Arc<dyn MatchObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Register an extra term for requirement-driven scoring
    pub fn with_term(mut self, term: Box<dyn ScoringTerm>) -> Self {
        self.terms.push(term);
        self
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Match products against detected `#RRGGBB` colors (most dominant first)
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidColorFormat` if any detected color is
    /// malformed. Nothing matching is not an error: the result is empty.
    pub fn find_matching_products<S: AsRef<str>>(
        &self,
        products: &[Product],
        detected_colors: &[S],
        furniture_type: &str,
        requirements: &str,
        policy: MatchPolicy,
    ) -> Result<Vec<ScoredProduct>> {
        let names = self.namer.name_all(detected_colors)?;
        Ok(self.match_named(products, &names, furniture_type, requirements, policy))
    }

    /// Match products against already-named detected colors
    pub fn match_named(
        &self,
        products: &[Product],
        detected_colors: &[ColorName],
        furniture_type: &str,
        requirements: &str,
        policy: MatchPolicy,
    ) -> Vec<ScoredProduct> {
        self.observer.on_event(&MatchEvent::Started {
            policy,
            candidates: products.len(),
            detected_colors,
        });

        let mut results = match policy {
            MatchPolicy::StrictPalette => {
                self.strict_palette(products, detected_colors, furniture_type)
            }
            MatchPolicy::RequirementDriven => {
                self.requirement_driven(products, detected_colors, furniture_type, requirements)
            }
        };

        results.retain(|r| r.compatibility_score > 0);
        // Stable: equal scores keep input order
        results.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));

        self.observer.on_event(&MatchEvent::Finished {
            policy,
            matched: results.len(),
        });
        results
    }

    fn strict_palette(
        &self,
        products: &[Product],
        detected_colors: &[ColorName],
        furniture_type: &str,
    ) -> Vec<ScoredProduct> {
        let mut results = Vec::new();

        for product in products {
            if !matches_furniture_type(product, furniture_type) {
                self.observer.on_event(&MatchEvent::CategoryRejected { product });
                continue;
            }

            let text = product.text();
            let has_neutral = contains_neutral(&text);

            if !detected_colors.is_empty()
                && !has_neutral
                && !detected_colors.iter().any(|c| text.contains(c.as_str()))
            {
                self.observer.on_event(&MatchEvent::ColorGateRejected { product });
                continue;
            }

            let score = self.palette_score(
                product,
                &text,
                has_neutral,
                detected_colors,
                furniture_type,
            );
            self.observer.on_event(&MatchEvent::Scored { product, score });
            results.push(ScoredProduct {
                product: product.clone(),
                compatibility_score: score,
            });
        }

        results
    }

    fn palette_score(
        &self,
        product: &Product,
        text: &str,
        has_neutral: bool,
        detected_colors: &[ColorName],
        furniture_type: &str,
    ) -> u32 {
        // Weights come from configuration: saturate instead of overflowing
        let mut score: u32 = 0;

        // Repeats the category filter so every category match scores
        if !furniture_type.is_empty() && matches_furniture_type(product, furniture_type) {
            score = score.saturating_add(self.scoring.category_bonus);
        }

        let count = detected_colors.len();
        for (index, color) in detected_colors.iter().enumerate() {
            if text.contains(color.as_str()) {
                let rank = u32::try_from(count - index).unwrap_or(u32::MAX);
                score = score.saturating_add(rank.saturating_mul(self.scoring.color_weight));
            }
        }

        // Stacks with the color bonus above
        if has_neutral {
            score = score.saturating_add(self.scoring.neutral_bonus);
        }

        score
    }

    fn requirement_driven(
        &self,
        products: &[Product],
        detected_colors: &[ColorName],
        furniture_type: &str,
        requirements: &str,
    ) -> Vec<ScoredProduct> {
        let color_requests = self.requests.extract_color_requests(requirements);
        let material_requests = self.requests.extract_material_requests(requirements);
        let context = MatchContext {
            detected_colors,
            furniture_type,
            requirements,
            color_requests: &color_requests,
            material_requests: &material_requests,
        };

        let mut results = Vec::new();

        for product in products {
            if !matches_furniture_type(product, furniture_type) {
                self.observer.on_event(&MatchEvent::CategoryRejected { product });
                continue;
            }

            if !color_requests.is_empty()
                && !mentions_any(&product.text_with(product.color.as_deref()), &color_requests)
            {
                self.observer.on_event(&MatchEvent::RequestRejected {
                    product,
                    kind: RequestKind::Color,
                });
                continue;
            }

            if !material_requests.is_empty()
                && !mentions_any(
                    &product.text_with(product.material.as_deref()),
                    &material_requests,
                )
            {
                self.observer.on_event(&MatchEvent::RequestRejected {
                    product,
                    kind: RequestKind::Material,
                });
                continue;
            }

            let mut score = self.scoring.requirement_base_score;
            for term in &self.terms {
                let points = term.score(product, &context);
                self.observer.on_event(&MatchEvent::TermScored {
                    product,
                    term: term.name(),
                    points,
                });
                score = score.saturating_add(points);
            }

            self.observer.on_event(&MatchEvent::Scored { product, score });
            results.push(ScoredProduct {
                product: product.clone(),
                compatibility_score: score,
            });
        }

        results
    }
}

fn mentions_any(text: &str, words: &[String]) -> bool {
    words.iter().any(|word| text.contains(word.as_str()))
}

/// Strict-palette matching with default weights
pub fn find_matching_products<S: AsRef<str>>(
    products: &[Product],
    detected_colors: &[S],
    furniture_type: &str,
    requirements: &str,
) -> Result<Vec<ScoredProduct>> {
    ProductMatcher::new().find_matching_products(
        products,
        detected_colors,
        furniture_type,
        requirements,
        MatchPolicy::StrictPalette,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::observer::NoopObserver;
    use crate::MatchError;
    use std::sync::Mutex;

    fn product(id: &str, name: &str, description: &str, category: &str) -> Product {
        Product::new(id, name)
            .with_description(description)
            .with_category(category)
    }

    fn ids(results: &[ScoredProduct]) -> Vec<&str> {
        results.iter().map(|r| r.product.id.as_str()).collect()
    }

    fn matcher() -> ProductMatcher {
        ProductMatcher::new().with_observer(Arc::new(NoopObserver))
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    impl MatchObserver for Recorder {
        fn on_event(&self, event: &MatchEvent<'_>) {
            let line = match event {
                MatchEvent::Started { candidates, .. } => format!("start {}", candidates),
                MatchEvent::CategoryRejected { product } => format!("category {}", product.id),
                MatchEvent::ColorGateRejected { product } => format!("gate {}", product.id),
                MatchEvent::RequestRejected { product, kind } => {
                    format!("request {} {:?}", product.id, kind)
                }
                MatchEvent::TermScored {
                    product,
                    term,
                    points,
                } => format!("term {} {} {}", product.id, term, points),
                MatchEvent::Scored { product, score } => {
                    format!("scored {} {}", product.id, score)
                }
                MatchEvent::Finished { matched, .. } => format!("finish {}", matched),
            };
            self.events.lock().unwrap().push(line);
        }
    }

    #[test]
    fn test_strict_palette_scoring() {
        let products = vec![
            product("1", "Divano Grigio", "elegante divano grigio", "divani-letto"),
            product("2", "Tavolo Rosso", "tavolo rosso acceso", "tavoli"),
        ];
        let results = matcher()
            .find_matching_products(
                &products,
                &["#808080"],
                "divano",
                "",
                MatchPolicy::StrictPalette,
            )
            .unwrap();

        assert_eq!(ids(&results), vec!["1"]);
        assert_eq!(results[0].compatibility_score, 50 + 30 + 15);
    }

    #[test]
    fn test_dominant_colors_weigh_more() {
        let detected = [ColorName::Blu, ColorName::Giallo, ColorName::Verde];
        let products = vec![
            product("green", "Sedia verde", "", "sedie"),
            product("yellow", "Sedia gialla", "accenti giallo", "sedie"),
            product("blue", "Sedia blu", "", "sedie"),
            product("all", "Sedia blu", "giallo e verde", "sedie"),
        ];
        let results = matcher().match_named(
            &products,
            &detected,
            "sedia",
            "",
            MatchPolicy::StrictPalette,
        );

        assert_eq!(ids(&results), vec!["all", "blue", "yellow", "green"]);
        let scores: Vec<u32> = results.iter().map(|r| r.compatibility_score).collect();
        assert_eq!(scores, vec![50 + 90 + 60 + 30, 50 + 90, 50 + 60, 50 + 30]);
    }

    #[test]
    fn test_color_gate_excludes_regardless_of_category() {
        let products = vec![
            product("1", "Divano Verde", "velluto verde", "divani-letto"),
            product("2", "Divano Rosso", "tessuto rosso", "divani-letto"),
            product("3", "Divano Beige", "tessuto beige", "divani-letto"),
        ];
        let results = matcher().match_named(
            &products,
            &[ColorName::Rosso],
            "divano",
            "",
            MatchPolicy::StrictPalette,
        );

        assert_eq!(ids(&results), vec!["2", "3"]);
        assert_eq!(results[0].compatibility_score, 80);
        assert_eq!(results[1].compatibility_score, 65);
    }

    #[test]
    fn test_neutral_and_color_bonus_stack() {
        let products = vec![product("1", "Letto", "testiera blu e bianco", "letti")];
        let results = matcher().match_named(
            &products,
            &[ColorName::Blu],
            "letto",
            "",
            MatchPolicy::StrictPalette,
        );
        assert_eq!(results[0].compatibility_score, 50 + 30 + 15);
    }

    #[test]
    fn test_empty_furniture_type_disables_category_filter() {
        let products = vec![
            product("1", "Sedia", "nera", "sedie"),
            product("2", "Tavolo", "rosso", "tavoli"),
        ];
        let results = matcher().match_named(
            &products,
            &[ColorName::Rosso],
            "",
            "",
            MatchPolicy::StrictPalette,
        );
        // "nera" is not a neutral label and "sedia" has no red: only the table survives
        assert_eq!(ids(&results), vec!["2"]);
        assert_eq!(results[0].compatibility_score, 30);
    }

    #[test]
    fn test_no_detected_colors_skips_gate() {
        let products = vec![
            product("1", "Armadio Rovere", "", "guardaroba"),
            product("2", "Armadio Laccato", "anta bianco", "guardaroba"),
        ];
        let results = matcher().match_named(
            &products,
            &[],
            "armadio",
            "",
            MatchPolicy::StrictPalette,
        );
        assert_eq!(ids(&results), vec!["2", "1"]);
        assert_eq!(results[0].compatibility_score, 65);
        assert_eq!(results[1].compatibility_score, 50);
    }

    #[test]
    fn test_zero_scores_dropped() {
        let products = vec![product("1", "Cuscino", "fantasia", "tessili")];
        let results = matcher().match_named(&products, &[], "", "", MatchPolicy::StrictPalette);
        assert!(results.is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let products = vec![
            product("a", "Sedia Rosso", "", "sedie"),
            product("b", "Sedia Rosso", "", "sedie"),
            product("c", "Sedia Rosso", "", "sedie"),
        ];
        let results = matcher().match_named(
            &products,
            &[ColorName::Rosso],
            "sedia",
            "",
            MatchPolicy::StrictPalette,
        );
        assert_eq!(ids(&results), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_text_fields_do_not_fail() {
        let products = vec![
            Product::default(),
            Product {
                category: Some("divani-letto".into()),
                ..Product::default()
            },
        ];
        let results = matcher().match_named(
            &products,
            &[ColorName::Grigio],
            "divano",
            "",
            MatchPolicy::StrictPalette,
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_inputs_untouched() {
        let products = vec![product("1", "Divano Grigio", "", "divani-letto")];
        let before = products.clone();
        let _ = matcher().match_named(
            &products,
            &[ColorName::Grigio],
            "divano",
            "",
            MatchPolicy::StrictPalette,
        );
        assert_eq!(products, before);
    }

    #[test]
    fn test_invalid_detected_color() {
        let err = matcher()
            .find_matching_products(
                &[Product::default()],
                &["grey"],
                "",
                "",
                MatchPolicy::StrictPalette,
            )
            .unwrap_err();
        assert!(matches!(err, MatchError::InvalidColorFormat { .. }));
    }

    #[test]
    fn test_requirement_driven_color_filter() {
        let products = vec![
            product("1", "Divano Oslo", "tessuto morbido", "divani-letto").with_color("Rosso"),
            product("2", "Divano Rosso", "", "divani-letto"),
            product("3", "Divano Milano", "grigio", "divani-letto"),
        ];
        let results = matcher().match_named(
            &products,
            &[],
            "divano",
            "Lo vorrei rosso",
            MatchPolicy::RequirementDriven,
        );
        assert_eq!(ids(&results), vec!["1", "2"]);
        assert!(results.iter().all(|r| r.compatibility_score == 40));
    }

    #[test]
    fn test_requirement_driven_material_filter() {
        let products = vec![
            product("1", "Tavolo", "piano in vetro", "tavoli").with_material("metallo"),
            product("2", "Tavolo", "piano laminato", "tavoli").with_material("Legno"),
            product("3", "Tavolo Legno", "", "tavoli"),
        ];
        let results = matcher().match_named(
            &products,
            &[],
            "tavol",
            "tavolo in legno",
            MatchPolicy::RequirementDriven,
        );
        assert_eq!(ids(&results), vec!["2", "3"]);
    }

    #[test]
    fn test_requirement_driven_without_requests_keeps_category_matches() {
        let products = vec![
            product("1", "Libreria", "", "librerie"),
            product("2", "Sedia", "", "sedie"),
        ];
        let results = matcher().match_named(
            &products,
            &[ColorName::Rosso],
            "libreri",
            "",
            MatchPolicy::RequirementDriven,
        );
        assert_eq!(ids(&results), vec!["1"]);
        assert_eq!(results[0].compatibility_score, 40);
    }

    #[test]
    fn test_scoring_terms_extend_requirement_driven() {
        struct StyleTerm;
        impl ScoringTerm for StyleTerm {
            fn name(&self) -> &str {
                "style"
            }
            fn score(&self, product: &Product, context: &MatchContext<'_>) -> u32 {
                match product.style.as_deref() {
                    Some(style) if context.requirements.contains(style) => 25,
                    _ => 0,
                }
            }
        }

        let mut modern = product("1", "Mobile TV", "", "mobili-tv-moderni");
        modern.style = Some("moderno".into());
        let classic = product("2", "Mobile TV", "", "mobili-tv-moderni");

        let results = matcher().with_term(Box::new(StyleTerm)).match_named(
            &[classic, modern],
            &[],
            "mobile",
            "stile moderno",
            MatchPolicy::RequirementDriven,
        );
        assert_eq!(ids(&results), vec!["1", "2"]);
        assert_eq!(results[0].compatibility_score, 65);
        assert_eq!(results[1].compatibility_score, 40);
    }

    #[test]
    fn test_custom_weights() {
        let scoring = ScoringConfig {
            category_bonus: 10,
            color_weight: 5,
            neutral_bonus: 1,
            requirement_base_score: 0,
        };
        let matcher = ProductMatcher::from_config(&scoring).with_observer(Arc::new(NoopObserver));
        let products = vec![product("1", "Sedia grigio", "", "sedie")];

        let palette = matcher.match_named(
            &products,
            &[ColorName::Grigio],
            "sedia",
            "",
            MatchPolicy::StrictPalette,
        );
        assert_eq!(palette[0].compatibility_score, 16);

        // A zero base score drops everything without extra terms
        let required = matcher.match_named(
            &products,
            &[],
            "sedia",
            "",
            MatchPolicy::RequirementDriven,
        );
        assert!(required.is_empty());
    }

    #[test]
    fn test_observer_receives_decisions() {
        let recorder = Arc::new(Recorder::default());
        let matcher = ProductMatcher::new().with_observer(recorder.clone());
        let products = vec![
            product("1", "Divano", "blu", "divani-letto"),
            product("2", "Sedia", "blu", "sedie"),
            product("3", "Divano", "arancione", "divani-letto"),
        ];
        matcher.match_named(&products, &[ColorName::Blu], "divano", "", MatchPolicy::StrictPalette);

        let events = recorder.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec!["start 3", "scored 1 80", "category 2", "gate 3", "finish 1"]
        );
    }

    struct FlatTerm(u32);

    impl ScoringTerm for FlatTerm {
        fn name(&self) -> &str {
            "flat"
        }
        fn score(&self, _product: &Product, _context: &MatchContext<'_>) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_extreme_weights_saturate() {
        let scoring = ScoringConfig {
            color_weight: 2_000_000_000,
            ..ScoringConfig::default()
        };
        let matcher = ProductMatcher::from_config(&scoring).with_observer(Arc::new(NoopObserver));
        let products = vec![
            product("1", "Sedia blu", "", "sedie"),
            product("2", "Sedia verde", "", "sedie"),
        ];
        let detected = [ColorName::Blu, ColorName::Giallo, ColorName::Verde];

        let results = matcher.match_named(
            &products,
            &detected,
            "sedia",
            "",
            MatchPolicy::StrictPalette,
        );
        assert_eq!(ids(&results), vec!["1", "2"]);
        assert_eq!(results[0].compatibility_score, u32::MAX);
        assert_eq!(results[1].compatibility_score, 2_000_000_050);
    }

    #[test]
    fn test_extreme_terms_saturate() {
        let matcher = matcher()
            .with_term(Box::new(FlatTerm(u32::MAX - 10)))
            .with_term(Box::new(FlatTerm(u32::MAX)));
        let products = vec![product("1", "Sedia", "", "sedie")];

        let results = matcher.match_named(
            &products,
            &[],
            "sedia",
            "",
            MatchPolicy::RequirementDriven,
        );
        assert_eq!(results[0].compatibility_score, u32::MAX);
    }

    #[test]
    fn test_observer_receives_term_scores() {
        let recorder = Arc::new(Recorder::default());
        let matcher = ProductMatcher::new()
            .with_observer(recorder.clone())
            .with_term(Box::new(FlatTerm(5)));
        let products = vec![product("1", "Sedia", "", "sedie")];
        matcher.match_named(&products, &[], "sedia", "", MatchPolicy::RequirementDriven);

        let events = recorder.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec!["start 1", "term 1 flat 5", "scored 1 45", "finish 1"]
        );
    }

    #[test]
    fn test_policy_serde() {
        assert_eq!(
            serde_json::to_string(&MatchPolicy::RequirementDriven).unwrap(),
            "\"requirement-driven\""
        );
        let policy: MatchPolicy = serde_json::from_str("\"strict-palette\"").unwrap();
        assert_eq!(policy, MatchPolicy::StrictPalette);
    }
}
