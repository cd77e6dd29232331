//! Error types for scope-sim.
//!
//! Motion commands are total and never fail. Errors only come out of
//! configuration loading and the alignment (sync point) database.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all scope-sim operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Alignment database error
    Alignment(AlignmentError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Observer latitude outside [-90, 90] degrees
    InvalidLatitude(f64),
    /// Observer longitude outside [-180, 360) degrees
    InvalidLongitude(f64),
    /// Slew rate must be > 0
    InvalidSlewRate(f64),
    /// Tick interval must be > 0
    InvalidTickInterval(u32),
    /// Sync tolerance must be > 0
    InvalidSyncTolerance(f64),
    /// A builder was missing a required component
    MissingComponent(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Alignment database errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AlignmentError {
    /// A sync point equal (per the model's policy) to the candidate is already stored
    DuplicateSyncPoint {
        /// Index of the stored point the candidate collided with
        index: usize,
    },
    /// The fixed-capacity database has no room left
    DatabaseFull,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Alignment(e) => write!(f, "Alignment error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidLatitude(v) => {
                write!(f, "Invalid latitude: {}. Must be within [-90, 90]", v)
            }
            ConfigError::InvalidLongitude(v) => {
                write!(f, "Invalid longitude: {}. Must be within [-180, 360)", v)
            }
            ConfigError::InvalidSlewRate(v) => write!(f, "Invalid slew rate: {}. Must be > 0", v),
            ConfigError::InvalidTickInterval(v) => {
                write!(f, "Invalid tick interval: {} ms. Must be > 0", v)
            }
            ConfigError::InvalidSyncTolerance(v) => {
                write!(f, "Invalid sync tolerance: {}%. Must be > 0", v)
            }
            ConfigError::MissingComponent(name) => write!(f, "{} is required", name),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for AlignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentError::DuplicateSyncPoint { index } => {
                write!(f, "Sync point duplicates stored point #{}", index)
            }
            AlignmentError::DatabaseFull => write!(f, "Alignment database is full"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<AlignmentError> for Error {
    fn from(e: AlignmentError) -> Self {
        Error::Alignment(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for AlignmentError {}
