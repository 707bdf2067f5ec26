//! Classifier thresholds, scoring weights and fixed vocabularies
//!
//! The color classifier is a hand-tuned heuristic: every threshold here is
//! part of its observable behavior, so changing one changes which label
//! borderline colors receive.

/// Luminance buckets for achromatic colors (perceptual luminance in [0, 1])
pub mod luminance {
    /// Below this: nero
    pub const BLACK_MAX: f64 = 0.15;
    /// Below this: grigio scuro
    pub const DARK_GRAY_MAX: f64 = 0.35;
    /// Below this: grigio
    pub const GRAY_MAX: f64 = 0.65;
    /// Below this: grigio chiaro, otherwise bianco
    pub const LIGHT_GRAY_MAX: f64 = 0.85;

    /// Hue families split into a dark variant below this luminance
    pub const DARK_VARIANT_MAX: f64 = 0.3;
    /// Hue families split into a light variant above this luminance
    pub const LIGHT_VARIANT_MIN: f64 = 0.7;

    /// Rec. 601 channel weights
    pub const RED_WEIGHT: f64 = 0.299;
    pub const GREEN_WEIGHT: f64 = 0.587;
    pub const BLUE_WEIGHT: f64 = 0.114;
}

/// Saturation gates of the naming cascade
pub mod saturation {
    /// Below this the color is treated as neutral and named by luminance only
    pub const NEUTRAL_MAX: f64 = 0.2;
    /// Above this the hue table applies
    pub const HUE_TABLE_MIN: f64 = 0.25;
    /// Above this the strongest-channel fallback may apply
    pub const CHANNEL_FALLBACK_MIN: f64 = 0.15;
}

/// Hue table boundaries in degrees (half-open ranges, lower bound inclusive)
pub mod hue {
    pub const RED_WRAP_START: f64 = 340.0;
    pub const ORANGE_START: f64 = 20.0;
    pub const YELLOW_START: f64 = 50.0;
    pub const GREEN_START: f64 = 80.0;
    pub const TURQUOISE_START: f64 = 160.0;
    pub const BLUE_START: f64 = 200.0;
    pub const VIOLET_START: f64 = 270.0;
}

/// Channel dominance fallback
pub mod dominance {
    /// Red dominance ratio required to infer a red-family color
    pub const RED_RATIO: f64 = 1.15;
    /// Green dominance ratio required to infer a green-family color
    pub const GREEN_RATIO: f64 = 1.2;
    /// Blue dominance ratio required to infer a blue-family color
    pub const BLUE_RATIO: f64 = 1.2;
    /// Dominant channel must exceed this value
    pub const MIN_CHANNEL: u8 = 80;
    /// A secondary channel counts as strong when it exceeds the other by this ratio
    pub const SECONDARY_RATIO: f64 = 1.3;
    /// ...and reaches at least this fraction of the dominant channel
    pub const SECONDARY_SHARE: f64 = 0.5;
    /// Strongest-channel fallback requires the channel to exceed this value
    pub const FALLBACK_CHANNEL: u8 = 100;
}

/// Dominant palette extraction
pub mod extraction {
    /// Pixel stride on both axes
    pub const SAMPLE_STEP: u32 = 10;
    /// Channels are rounded to the nearest multiple of this value
    pub const QUANTIZATION_STEP: u8 = 32;
    /// Pixels with alpha below this are skipped
    pub const MIN_ALPHA: u8 = 128;
    /// Accepted colors must be further apart than this (Euclidean RGB)
    pub const DISTANCE_THRESHOLD: f64 = 40.0;
    /// Maximum number of dominant colors returned
    pub const MAX_COLORS: usize = 5;
}

/// Compatibility score weights
pub mod scoring {
    /// Category or name contains the requested furniture type
    pub const CATEGORY_BONUS: u32 = 50;
    /// Multiplied by (detected colors - index) for every matched color
    pub const COLOR_WEIGHT: u32 = 30;
    /// Product text mentions any neutral color
    pub const NEUTRAL_BONUS: u32 = 15;
    /// Flat score for products surviving requirement-driven matching
    pub const REQUIREMENT_BASE_SCORE: u32 = 40;
}

/// Recommendation request handling
pub mod recommendation {
    /// Maximum catalog candidates handed to the matcher
    pub const CANDIDATE_LIMIT: usize = 20;

    /// User-facing furniture keyword to catalog category slug
    pub const CATEGORY_MAP: [(&str, &str); 7] = [
        ("divano", "divani-letto"),
        ("tavolo", "tavoli-allungabili"),
        ("sedia", "sedie"),
        ("letto", "letti-matrimoniali"),
        ("armadio", "guardaroba"),
        ("libreria", "librerie"),
        ("mobile-tv", "mobili-tv-moderni"),
    ];
}

/// Fixed keyword vocabularies
pub mod vocabulary {
    /// Labels always considered compatible with any detected palette
    pub const NEUTRAL_COLORS: [&str; 23] = [
        "bianco",
        "nero",
        "grigio",
        "grigio chiaro",
        "grigio scuro",
        "antracite",
        "beige",
        "crema",
        "avorio",
        "tortora",
        "sabbia",
        "perla",
        "panna",
        "ecru",
        "greige",
        "cenere",
        "talpa",
        "fango",
        "corda",
        "argento",
        "naturale",
        "neutro",
        "bianco sporco",
    ];

    /// Color words recognized in free-text requirements, in output order
    pub const COLOR_REQUESTS: [&str; 26] = [
        "rosso", "rossa", "rossi", "rosse", "blu", "azzurro", "azzurra", "verde", "verdi",
        "giallo", "gialla", "nero", "nera", "neri", "bianco", "bianca", "bianchi", "grigio",
        "grigia", "marrone", "beige", "rosa", "viola", "arancione", "turchese", "bordeaux",
    ];

    /// Material words recognized in free-text requirements, in output order
    pub const MATERIAL_REQUESTS: [&str; 15] = [
        "legno", "metallo", "vetro", "pelle", "tessuto", "velluto", "marmo", "ceramica",
        "plastica", "acciaio", "rattan", "lino", "cotone", "noce", "rovere",
    ];
}
