//! Product matching against detected room colors
//!
//! This module filters and scores catalog products, extracts explicit
//! requests from free text, and explains each match.

pub mod category;
pub mod matcher;
pub mod observer;
pub mod product;
pub mod reason;
pub mod requests;

pub use category::{filter_by_category, map_furniture_type, matches_furniture_type};
pub use matcher::{
    contains_neutral, find_matching_products, MatchContext, MatchPolicy, ProductMatcher,
    ScoringTerm,
};
pub use observer::{LogObserver, MatchEvent, MatchObserver, NoopObserver};
pub use product::{Product, ScoredProduct};
pub use reason::{ReasonGenerator, ReasonKind};
pub use requests::{
    extract_color_requests, extract_material_requests, RequestExtractor, RequestKind,
};
