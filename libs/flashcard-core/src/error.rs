//! Error types for flashcard-core.

use crate::surface::RegionId;
use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LoadError.
pub type Result<T, E = LoadError> = std::result::Result<T, E>;

/// Errors that can occur while loading a deck file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read deck: {0}")]
    Read(#[from] io::Error),

    #[error("out of memory while building deck: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Errors raised by the presentation surface.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("terminal i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("region {0:?} does not exist")]
    RegionUnavailable(RegionId),

    #[error("failed to set up terminal: {0}")]
    Setup(String),
}

/// Scheduler call made in a state that does not accept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("card {0} is still waiting for a verdict")]
    VerdictPending(usize),

    #[error("no card is being presented")]
    NoCardPresented,
}

/// Errors that end a review session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Presentation(#[from] PresentationError),

    #[error(transparent)]
    Review(#[from] ReviewError),
}
