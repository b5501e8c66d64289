//! Custom error types for atlas processing

use std::fmt;
use std::io;

use crate::extractor::Rect;

/// Error types raised while decoding atlases and unpacking sprites
#[derive(Debug)]
pub enum AtlasError {
    /// I/O error
    IoError(io::Error),
    /// Missing magic tag or broken compressed stream
    CorruptContainer(String),
    /// Header field outside the supported texture profile
    FormatError {
        /// Name of the offending header field
        field: &'static str,
        /// Value (or set of values) the profile accepts
        expected: String,
        /// Value found in the stream
        actual: String,
    },
    /// Decompressed buffer ends before the data the header declares;
    /// both counts are measured from the start of the buffer
    TruncatedData {
        needed: u64,
        available: u64,
    },
    /// Frame rectangle does not fit inside the atlas
    OutOfBounds {
        rect: Rect,
        atlas_width: u32,
        atlas_height: u32,
    },
    /// Sprite descriptor could not be read or is malformed
    DescriptorError(String),
    /// Invalid configuration
    ConfigError(String),
    /// Output image could not be built or written
    ImageError(String),
    /// Generic error with message
    GenericError(String),
}

impl AtlasError {
    /// Whether this error was caused by the caller's input (descriptor or
    /// frame selection) rather than by a corrupt texture
    pub fn is_caller_fault(&self) -> bool {
        matches!(self, AtlasError::OutOfBounds { .. } | AtlasError::DescriptorError(_))
    }

    /// Whether this error was caused by the texture container itself
    pub fn is_texture_fault(&self) -> bool {
        matches!(
            self,
            AtlasError::CorruptContainer(_)
                | AtlasError::FormatError { .. }
                | AtlasError::TruncatedData { .. }
        )
    }

    /// Short label for failure reports: "descriptor", "texture", or
    /// "I/O or other" for everything else
    pub fn fault_label(&self) -> &'static str {
        if self.is_caller_fault() {
            "descriptor"
        } else if self.is_texture_fault() {
            "texture"
        } else {
            "I/O or other"
        }
    }
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtlasError::IoError(e) => write!(f, "I/O error: {}", e),
            AtlasError::CorruptContainer(msg) => write!(f, "Corrupt container: {}", msg),
            AtlasError::FormatError { field, expected, actual } => write!(
                f,
                "Unsupported texture header: field '{}' is {} (expected {})",
                field, actual, expected
            ),
            AtlasError::TruncatedData { needed, available } => write!(
                f,
                "Truncated texture data: need {} bytes, only {} available",
                needed, available
            ),
            AtlasError::OutOfBounds { rect, atlas_width, atlas_height } => write!(
                f,
                "Frame x={}, y={}, w={}, h={} exceeds atlas bounds {}x{}",
                rect.x, rect.y, rect.w, rect.h, atlas_width, atlas_height
            ),
            AtlasError::DescriptorError(msg) => write!(f, "Descriptor error: {}", msg),
            AtlasError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AtlasError::ImageError(msg) => write!(f, "Image error: {}", msg),
            AtlasError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for AtlasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AtlasError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AtlasError {
    fn from(error: io::Error) -> Self {
        AtlasError::IoError(error)
    }
}

impl From<image::ImageError> for AtlasError {
    fn from(error: image::ImageError) -> Self {
        AtlasError::ImageError(error.to_string())
    }
}

/// Result type for atlas operations
pub type AtlasResult<T> = Result<T, AtlasError>;
