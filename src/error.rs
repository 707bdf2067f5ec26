//! Error types for the room_palette library

use thiserror::Error;

/// Result type alias for room_palette operations
pub type Result<T> = std::result::Result<T, MatchError>;

/// Error types for color naming, palette extraction and product matching
///
/// "No data" conditions (empty catalog, empty requirement text, nothing
/// surviving the color gate) are not errors and never show up here.
#[derive(Error, Debug)]
pub enum MatchError {
    /// Hex color string does not match `#RRGGBB`
    #[error("Invalid color format: {value:?} (expected #RRGGBB)")]
    InvalidColorFormat { value: String },

    /// Raw RGBA buffer length does not match its declared dimensions
    #[error("Invalid pixel buffer: {width}x{height} RGBA needs {expected} bytes, got {actual}")]
    InvalidPixelBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Image file or uploaded bytes could not be decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `detectedColors` payload is not a JSON array of strings
    #[error("Invalid detected colors payload: {message}")]
    InvalidDetectedColors {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl MatchError {
    /// Create an invalid color error for the given input
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            value: value.into(),
        }
    }

    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error was caused by caller-supplied input
    ///
    /// Input errors map to a 400 response in the owning endpoint; everything
    /// else is an unexpected failure.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MatchError::InvalidColorFormat { .. }
                | MatchError::InvalidPixelBuffer { .. }
                | MatchError::ImageLoadError { .. }
                | MatchError::InvalidDetectedColors { .. }
                | MatchError::InvalidParameter { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            MatchError::InvalidColorFormat { value } => {
                format!("The color {:?} is not a valid #RRGGBB value.", value)
            }
            MatchError::InvalidPixelBuffer { .. } | MatchError::ImageLoadError { .. } => {
                "Could not read the room photo. Please upload a JPEG, PNG or WebP image.".to_string()
            }
            MatchError::InvalidDetectedColors { .. } => {
                "The detected colors could not be read. Please analyze the photo again.".to_string()
            }
            MatchError::InvalidParameter { parameter, .. } => {
                format!("Missing or invalid parameter: {}.", parameter)
            }
            MatchError::ConfigError { .. } => {
                "Recommendations are temporarily unavailable. Please try again later.".to_string()
            }
        }
    }
}
