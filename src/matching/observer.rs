//! Diagnostic side channel for the matcher
//!
//! The matcher reports what it does through a [`MatchObserver`] instead of
//! logging inline. Observers see every decision but cannot influence it.

use log::{debug, trace};

use super::matcher::MatchPolicy;
use super::product::Product;
use super::requests::RequestKind;
use crate::color::ColorName;

/// A single matcher decision
#[derive(Debug, Clone, Copy)]
pub enum MatchEvent<'a> {
    /// Matching started over `candidates` products
    Started {
        policy: MatchPolicy,
        candidates: usize,
        detected_colors: &'a [ColorName],
    },
    /// Neither category nor name contains the furniture type
    CategoryRejected { product: &'a Product },
    /// Product text mentions neither a detected nor a neutral color
    ColorGateRejected { product: &'a Product },
    /// Product text mentions none of the explicitly requested words
    RequestRejected {
        product: &'a Product,
        kind: RequestKind,
    },
    /// A registered scoring term awarded `points` to a product
    TermScored {
        product: &'a Product,
        term: &'a str,
        points: u32,
    },
    /// Product received a final score (zero scores are dropped afterwards)
    Scored { product: &'a Product, score: u32 },
    /// Matching finished with `matched` results
    Finished { policy: MatchPolicy, matched: usize },
}

/// Receives matcher events
pub trait MatchObserver: Send + Sync {
    fn on_event(&self, event: &MatchEvent<'_>);
}

/// Forwards events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl MatchObserver for LogObserver {
    fn on_event(&self, event: &MatchEvent<'_>) {
        match event {
            MatchEvent::Started {
                policy,
                candidates,
                detected_colors,
            } => debug!(
                "Matching {} products ({:?}), detected colors: {:?}",
                candidates, policy, detected_colors
            ),
            MatchEvent::CategoryRejected { product } => {
                trace!("{:?}: category mismatch", product.name_or_empty())
            }
            MatchEvent::ColorGateRejected { product } => {
                trace!("{:?}: no matching or neutral color", product.name_or_empty())
            }
            MatchEvent::RequestRejected { product, kind } => {
                trace!("{:?}: missing requested {:?}", product.name_or_empty(), kind)
            }
            MatchEvent::TermScored {
                product,
                term,
                points,
            } => trace!("{:?}: term {} adds {}", product.name_or_empty(), term, points),
            MatchEvent::Scored { product, score } => {
                trace!("{:?}: score {}", product.name_or_empty(), score)
            }
            MatchEvent::Finished { policy, matched } => {
                debug!("Matching ({:?}) produced {} results", policy, matched)
            }
        }
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {
    fn on_event(&self, _event: &MatchEvent<'_>) {}
}
