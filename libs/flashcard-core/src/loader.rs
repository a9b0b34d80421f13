//! Reading and writing deck files.

use crate::error::{LoadError, Result};
use crate::parser;
use crate::types::Deck;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;
use tracing::debug;

/// Load a deck from a file.
///
/// Nothing outside the returned value is touched, so a failure leaves any
/// previously loaded deck as it was.
pub fn load(path: impl AsRef<Path>) -> Result<Deck> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let deck = parser::parse(BufReader::new(file))?;
    debug!(path = %path.display(), cards = deck.len(), "loaded deck file");
    Ok(deck)
}

/// Write a deck in the line-pair format.
pub fn save(path: impl AsRef<Path>, deck: &Deck) -> io::Result<()> {
    fs::write(path, deck.to_text())
}
