//! Color sample value type and its derived attributes
//!
//! Provides the raw measurements the naming cascade works from:
//! - `#RRGGBB` parsing and formatting
//! - Perceptual luminance (Rec. 601 weights)
//! - HSV-style saturation and hue
//! - Per-channel dominance ratios
//! - Euclidean RGB distance for palette de-duplication

use palette::Srgb;
use crate::{constants::luminance, MatchError, Result};

/// An sRGB color sample with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    rgb: Srgb<u8>,
}

/// Attributes derived from a [`ColorSample`], computed once per classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMetrics {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Perceptual luminance in [0, 1]
    pub luminance: f64,
    /// (max - min) / max over normalized channels, 0 for black
    pub saturation: f64,
    /// Degrees in [0, 360), 0 when the color is achromatic
    pub hue: f64,
    pub red_dominance: f64,
    pub green_dominance: f64,
    pub blue_dominance: f64,
}

impl ColorSample {
    /// Create a sample from 8-bit channels
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            rgb: Srgb::new(red, green, blue),
        }
    }

    /// Parse a `#RRGGBB` hex string (digits in either case)
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidColorFormat` for anything else, including
    /// the 3-digit shorthand and strings without the leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| MatchError::invalid_color(hex))?;

        let rgb: Srgb<u8> = digits
            .parse()
            .map_err(|_| MatchError::invalid_color(hex))?;

        Ok(Self { rgb })
    }

    /// Upper-case `#RRGGBB` representation
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.rgb.red, self.rgb.green, self.rgb.blue)
    }

    pub fn red(&self) -> u8 {
        self.rgb.red
    }

    pub fn green(&self) -> u8 {
        self.rgb.green
    }

    pub fn blue(&self) -> u8 {
        self.rgb.blue
    }

    /// Underlying palette color
    pub fn srgb(&self) -> Srgb<u8> {
        self.rgb
    }

    /// Perceptual luminance `(0.299R + 0.587G + 0.114B) / 255`
    pub fn luminance(&self) -> f64 {
        (luminance::RED_WEIGHT * f64::from(self.rgb.red)
            + luminance::GREEN_WEIGHT * f64::from(self.rgb.green)
            + luminance::BLUE_WEIGHT * f64::from(self.rgb.blue))
            / 255.0
    }

    /// `(max - min) / max` over normalized channels; 0 when max is 0
    pub fn saturation(&self) -> f64 {
        let (r, g, b) = self.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        if max == 0.0 {
            0.0
        } else {
            (max - min) / max
        }
    }

    /// Hue in degrees, piecewise on the maximal channel
    ///
    /// Returns 0 when all channels are equal.
    pub fn hue(&self) -> f64 {
        let (r, g, b) = self.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        if delta == 0.0 {
            return 0.0;
        }

        let hue = if max == r {
            60.0 * ((g - b) / delta)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        if hue < 0.0 {
            hue + 360.0
        } else {
            hue
        }
    }

    /// `R / max(G, B, 1)`
    pub fn red_dominance(&self) -> f64 {
        dominance(self.rgb.red, self.rgb.green, self.rgb.blue)
    }

    /// `G / max(R, B, 1)`
    pub fn green_dominance(&self) -> f64 {
        dominance(self.rgb.green, self.rgb.red, self.rgb.blue)
    }

    /// `B / max(R, G, 1)`
    pub fn blue_dominance(&self) -> f64 {
        dominance(self.rgb.blue, self.rgb.red, self.rgb.green)
    }

    /// Euclidean distance in 8-bit RGB space
    pub fn distance(&self, other: &ColorSample) -> f64 {
        let dr = f64::from(self.rgb.red) - f64::from(other.rgb.red);
        let dg = f64::from(self.rgb.green) - f64::from(other.rgb.green);
        let db = f64::from(self.rgb.blue) - f64::from(other.rgb.blue);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Compute every derived attribute at once
    pub fn metrics(&self) -> ColorMetrics {
        ColorMetrics {
            red: self.rgb.red,
            green: self.rgb.green,
            blue: self.rgb.blue,
            luminance: self.luminance(),
            saturation: self.saturation(),
            hue: self.hue(),
            red_dominance: self.red_dominance(),
            green_dominance: self.green_dominance(),
            blue_dominance: self.blue_dominance(),
        }
    }

    fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.rgb.red) / 255.0,
            f64::from(self.rgb.green) / 255.0,
            f64::from(self.rgb.blue) / 255.0,
        )
    }
}

fn dominance(channel: u8, other_a: u8, other_b: u8) -> f64 {
    let floor = other_a.max(other_b).max(1);
    f64::from(channel) / f64::from(floor)
}
