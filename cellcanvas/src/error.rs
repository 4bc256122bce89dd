//! Error type shared by every fallible canvas and dither operation.
//!
//! Coordinate-based reads and writes never fail: out-of-bounds access
//! degrades to a no-op or a default value. Only structural changes and
//! configuration report errors.

use thiserror::Error;

/// Errors reported by canvas, display and dither operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Grid storage could not be allocated (zero size, overflow or OOM).
    #[error("cannot allocate a {width}x{height} canvas")]
    Allocation { width: usize, height: usize },

    /// Geometry that cannot be honored (bad mask size, short pixel buffer).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A display currently holds the canvas; structural changes are refused.
    #[error("canvas is attached to a display")]
    DriverAttached,

    /// Unsupported bitmap depth.
    #[error("unsupported bit depth: {0} bpp")]
    InvalidDepth(u32),

    /// Unrecognized mode or format identifier.
    #[error("unknown {kind} `{name}`")]
    UnknownMode { kind: &'static str, name: String },

    /// A value outside its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Serialized canvas data that cannot be decoded.
    #[error("malformed canvas data: {0}")]
    Import(String),

    /// Dither profile that is not valid TOML.
    #[error("invalid dither profile: {0}")]
    Config(#[from] toml::de::Error),

    /// Dither profile that could not be serialized.
    #[error("cannot serialize dither profile: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl Error {
    pub(crate) fn unknown_mode(kind: &'static str, name: &str) -> Self {
        Self::UnknownMode {
            kind,
            name: name.to_owned(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
