//! Italian color naming from RGB samples
//!
//! Classification is an ordered cascade of rules evaluated top to bottom;
//! the first rule that produces a name wins. Thresholds overlap on purpose,
//! so the order of [`NAMING_RULES`] is part of the behavior:
//!
//! 1. `neutral-luminance`: saturation below 0.2, five luminance buckets
//! 2. `hue-table`: saturation above 0.25, hue ranges split by luminance
//! 3. `channel-dominance`: a channel clearly above the other two
//! 4. `strongest-channel`: a single strictly largest channel above 100
//! 5. `luminance-fallback`: dark, mid or light gray

use std::fmt;

use serde::{Deserialize, Serialize};

use super::conversion::{ColorMetrics, ColorSample};
use crate::{
    constants::{dominance, hue, luminance, saturation, vocabulary},
    Result,
};

/// Closed vocabulary of color labels produced by the namer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorName {
    #[serde(rename = "nero")]
    Nero,
    #[serde(rename = "grigio scuro")]
    GrigioScuro,
    #[serde(rename = "grigio")]
    Grigio,
    #[serde(rename = "grigio chiaro")]
    GrigioChiaro,
    #[serde(rename = "bianco")]
    Bianco,
    #[serde(rename = "rosso")]
    Rosso,
    #[serde(rename = "bordeaux")]
    Bordeaux,
    #[serde(rename = "rosa")]
    Rosa,
    #[serde(rename = "arancione")]
    Arancione,
    #[serde(rename = "giallo")]
    Giallo,
    #[serde(rename = "verde")]
    Verde,
    #[serde(rename = "verde scuro")]
    VerdeScuro,
    #[serde(rename = "verde chiaro")]
    VerdeChiaro,
    #[serde(rename = "turchese")]
    Turchese,
    #[serde(rename = "blu")]
    Blu,
    #[serde(rename = "blu scuro")]
    BluScuro,
    #[serde(rename = "azzurro")]
    Azzurro,
    #[serde(rename = "viola")]
    Viola,
}

impl ColorName {
    /// Every label the namer can produce
    pub const ALL: [ColorName; 18] = [
        ColorName::Nero,
        ColorName::GrigioScuro,
        ColorName::Grigio,
        ColorName::GrigioChiaro,
        ColorName::Bianco,
        ColorName::Rosso,
        ColorName::Bordeaux,
        ColorName::Rosa,
        ColorName::Arancione,
        ColorName::Giallo,
        ColorName::Verde,
        ColorName::VerdeScuro,
        ColorName::VerdeChiaro,
        ColorName::Turchese,
        ColorName::Blu,
        ColorName::BluScuro,
        ColorName::Azzurro,
        ColorName::Viola,
    ];

    /// Lower-case Italian label, as matched against product text
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Nero => "nero",
            ColorName::GrigioScuro => "grigio scuro",
            ColorName::Grigio => "grigio",
            ColorName::GrigioChiaro => "grigio chiaro",
            ColorName::Bianco => "bianco",
            ColorName::Rosso => "rosso",
            ColorName::Bordeaux => "bordeaux",
            ColorName::Rosa => "rosa",
            ColorName::Arancione => "arancione",
            ColorName::Giallo => "giallo",
            ColorName::Verde => "verde",
            ColorName::VerdeScuro => "verde scuro",
            ColorName::VerdeChiaro => "verde chiaro",
            ColorName::Turchese => "turchese",
            ColorName::Blu => "blu",
            ColorName::BluScuro => "blu scuro",
            ColorName::Azzurro => "azzurro",
            ColorName::Viola => "viola",
        }
    }

    /// Whether the label belongs to the neutral set
    pub fn is_neutral(&self) -> bool {
        vocabulary::NEUTRAL_COLORS.contains(&self.as_str())
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One step of the naming cascade
#[derive(Clone, Copy)]
pub struct NamingRule {
    /// Stable identifier reported by [`ColorNamer::classify`]
    pub id: &'static str,
    /// Returns a name when the rule fires
    pub apply: fn(&ColorMetrics) -> Option<ColorName>,
}

impl fmt::Debug for NamingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamingRule").field("id", &self.id).finish()
    }
}

/// The default cascade, in evaluation order
pub const NAMING_RULES: [NamingRule; 5] = [
    NamingRule {
        id: "neutral-luminance",
        apply: neutral_luminance,
    },
    NamingRule {
        id: "hue-table",
        apply: hue_table,
    },
    NamingRule {
        id: "channel-dominance",
        apply: channel_dominance,
    },
    NamingRule {
        id: "strongest-channel",
        apply: strongest_channel,
    },
    NamingRule {
        id: "luminance-fallback",
        apply: luminance_fallback,
    },
];

/// A name together with the rule that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub name: ColorName,
    pub rule: &'static str,
}

/// Converts color samples into Italian color labels
#[derive(Debug, Clone)]
pub struct ColorNamer {
    rules: &'static [NamingRule],
}

impl Default for ColorNamer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorNamer {
    /// Create a namer using the default cascade
    pub fn new() -> Self {
        Self {
            rules: &NAMING_RULES,
        }
    }

    /// Create a namer evaluating a custom rule list
    ///
    /// A sample no rule names falls back to `grigio`.
    pub fn with_rules(rules: &'static [NamingRule]) -> Self {
        Self { rules }
    }

    /// Name a `#RRGGBB` hex color
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidColorFormat` if `hex` is malformed.
    pub fn name_hex(&self, hex: &str) -> Result<ColorName> {
        Ok(self.name_sample(&ColorSample::from_hex(hex)?))
    }

    /// Name every hex color, keeping input order
    pub fn name_all<S: AsRef<str>>(&self, hexes: &[S]) -> Result<Vec<ColorName>> {
        hexes.iter().map(|hex| self.name_hex(hex.as_ref())).collect()
    }

    pub fn name_sample(&self, sample: &ColorSample) -> ColorName {
        self.classify(sample).name
    }

    /// Run the cascade and report which rule fired
    pub fn classify(&self, sample: &ColorSample) -> Classification {
        let metrics = sample.metrics();
        self.rules
            .iter()
            .find_map(|rule| {
                (rule.apply)(&metrics).map(|name| Classification {
                    name,
                    rule: rule.id,
                })
            })
            .unwrap_or(Classification {
                name: ColorName::Grigio,
                rule: "default",
            })
    }
}

/// Name a `#RRGGBB` color with the default cascade
pub fn name_color(hex: &str) -> Result<ColorName> {
    ColorNamer::new().name_hex(hex)
}

/// Five-bucket luminance classification used for neutral colors
pub fn luminance_bucket(lum: f64) -> ColorName {
    if lum < luminance::BLACK_MAX {
        ColorName::Nero
    } else if lum < luminance::DARK_GRAY_MAX {
        ColorName::GrigioScuro
    } else if lum < luminance::GRAY_MAX {
        ColorName::Grigio
    } else if lum < luminance::LIGHT_GRAY_MAX {
        ColorName::GrigioChiaro
    } else {
        ColorName::Bianco
    }
}

fn by_lightness(lum: f64, dark: ColorName, base: ColorName, light: ColorName) -> ColorName {
    if lum < luminance::DARK_VARIANT_MAX {
        dark
    } else if lum > luminance::LIGHT_VARIANT_MIN {
        light
    } else {
        base
    }
}

fn neutral_luminance(m: &ColorMetrics) -> Option<ColorName> {
    (m.saturation < saturation::NEUTRAL_MAX).then(|| luminance_bucket(m.luminance))
}

fn hue_table(m: &ColorMetrics) -> Option<ColorName> {
    if m.saturation <= saturation::HUE_TABLE_MIN {
        return None;
    }

    let h = m.hue;
    let name = if h >= hue::RED_WRAP_START || h < hue::ORANGE_START {
        by_lightness(m.luminance, ColorName::Bordeaux, ColorName::Rosso, ColorName::Rosa)
    } else if h < hue::YELLOW_START {
        ColorName::Arancione
    } else if h < hue::GREEN_START {
        ColorName::Giallo
    } else if h < hue::TURQUOISE_START {
        by_lightness(
            m.luminance,
            ColorName::VerdeScuro,
            ColorName::Verde,
            ColorName::VerdeChiaro,
        )
    } else if h < hue::BLUE_START {
        ColorName::Turchese
    } else if h < hue::VIOLET_START {
        by_lightness(m.luminance, ColorName::BluScuro, ColorName::Blu, ColorName::Azzurro)
    } else {
        ColorName::Viola
    };
    Some(name)
}

/// `secondary` is strong when it clearly exceeds `other` and reaches half of `primary`
fn strong_secondary(primary: u8, secondary: u8, other: u8) -> bool {
    let (p, s, o) = (f64::from(primary), f64::from(secondary), f64::from(other));
    s > o * dominance::SECONDARY_RATIO && s >= p * dominance::SECONDARY_SHARE
}

fn channel_dominance(m: &ColorMetrics) -> Option<ColorName> {
    let (r, g, b) = (m.red, m.green, m.blue);

    if m.red_dominance > dominance::RED_RATIO && r > dominance::MIN_CHANNEL {
        let name = if strong_secondary(r, g, b) {
            ColorName::Arancione
        } else if strong_secondary(r, b, g) {
            ColorName::Viola
        } else {
            by_lightness(m.luminance, ColorName::Bordeaux, ColorName::Rosso, ColorName::Rosa)
        };
        return Some(name);
    }

    if m.green_dominance > dominance::GREEN_RATIO && g > dominance::MIN_CHANNEL {
        let name = if strong_secondary(g, b, r) {
            ColorName::Turchese
        } else {
            by_lightness(
                m.luminance,
                ColorName::VerdeScuro,
                ColorName::Verde,
                ColorName::VerdeChiaro,
            )
        };
        return Some(name);
    }

    if m.blue_dominance > dominance::BLUE_RATIO && b > dominance::MIN_CHANNEL {
        let name = if strong_secondary(b, r, g) {
            ColorName::Viola
        } else if strong_secondary(b, g, r) {
            ColorName::Turchese
        } else {
            by_lightness(m.luminance, ColorName::BluScuro, ColorName::Blu, ColorName::Azzurro)
        };
        return Some(name);
    }

    None
}

fn strongest_channel(m: &ColorMetrics) -> Option<ColorName> {
    if m.saturation <= saturation::CHANNEL_FALLBACK_MIN {
        return None;
    }

    let (r, g, b) = (m.red, m.green, m.blue);
    let floor = dominance::FALLBACK_CHANNEL;
    if r > g && r > b && r > floor {
        Some(ColorName::Rosso)
    } else if g > r && g > b && g > floor {
        Some(ColorName::Verde)
    } else if b > r && b > g && b > floor {
        Some(ColorName::Blu)
    } else {
        None
    }
}

fn luminance_fallback(m: &ColorMetrics) -> Option<ColorName> {
    Some(by_lightness(
        m.luminance,
        ColorName::GrigioScuro,
        ColorName::Grigio,
        ColorName::GrigioChiaro,
    ))
}
