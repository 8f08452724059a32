use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while driving the lights.
#[derive(Error, Debug)]
pub enum Error {
    #[error("not a hex color: {0:?} (expected six hex digits)")]
    InvalidHexColor(String),

    #[error("channel {0} is outside 1..=512")]
    ChannelOutOfRange(u16),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("cannot resolve target address: {0}")]
    UnresolvableTarget(String),

    #[error("cannot read {}: {}", path.display(), reason)]
    Resource { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
