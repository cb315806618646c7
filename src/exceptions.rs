//! Error types for splashgen

use std::fmt;

/// Main error type for splashgen operations
#[derive(Debug)]
pub enum SplashError {
    /// No platform build directory detected under the project root
    MissingPlatform,

    /// Source splashscreen image not found
    MissingSourceImage(String),

    /// Project descriptor not found
    MissingDescriptor(String),

    /// Descriptor unreadable or not well-formed XML
    DescriptorParse(String),

    /// Descriptor has no `name` element under the `widget` root
    MissingNameField,

    /// Platform registry file is malformed
    Registry(String),

    /// Resize or encode failed for one splashscreen
    Resize {
        /// Splash filename the failure belongs to
        file_name: String,
        /// Underlying image error
        source: image::ImageError,
    },

    /// IO error
    Io(std::io::Error),

    /// Generic error with message
    Generic(String),
}

impl fmt::Display for SplashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplashError::MissingPlatform => write!(f, "no platforms added to the project"),
            SplashError::MissingSourceImage(name) => {
                write!(f, "source image '{name}' not found")
            }
            SplashError::MissingDescriptor(name) => {
                write!(f, "project descriptor '{name}' not found")
            }
            SplashError::DescriptorParse(msg) => write!(f, "descriptor parse error: {msg}"),
            SplashError::MissingNameField => {
                write!(f, "descriptor has no 'name' element under 'widget'")
            }
            SplashError::Registry(msg) => write!(f, "platform registry error: {msg}"),
            SplashError::Resize { file_name, source } => {
                write!(f, "resize failed for '{file_name}': {source}")
            }
            SplashError::Io(err) => write!(f, "IO error: {err}"),
            SplashError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SplashError {}

impl From<std::io::Error> for SplashError {
    fn from(err: std::io::Error) -> Self {
        SplashError::Io(err)
    }
}

impl From<serde_json::Error> for SplashError {
    fn from(err: serde_json::Error) -> Self {
        SplashError::Registry(err.to_string())
    }
}

impl From<roxmltree::Error> for SplashError {
    fn from(err: roxmltree::Error) -> Self {
        SplashError::DescriptorParse(err.to_string())
    }
}

/// Result type for splashgen operations
pub type Result<T> = std::result::Result<T, SplashError>;
