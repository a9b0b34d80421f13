//! Line-pair parser for deck files.
//!
//! # Format
//! ```text
//! 2+2
//! 4
//! capital of france
//! paris
//! ```
//!
//! Odd lines are fronts, even lines are backs. A blank line is valid text.
//! An unterminated final line is ignored, as is a front with no back.

use crate::error::Result;
use crate::types::{Card, Deck};
use std::io::{self, BufRead};
use tracing::debug;

/// Capacity reserved before the first card is pushed.
const INITIAL_CAPACITY: usize = 64;

/// Parse deck text from any buffered reader.
pub fn parse<R: BufRead>(mut reader: R) -> Result<Deck> {
    let mut parser = Parser::new()?;
    let mut line = Vec::new();

    loop {
        line.clear();
        if read_line(&mut reader, &mut line)? == 0 {
            break;
        }
        if line.pop() != Some(b'\n') {
            debug!(bytes = line.len() + 1, "dropping unterminated final line");
            break;
        }
        parser.process_line(&line)?;
    }

    parser.finish()
}

/// Append bytes up to and including the next `\n` to `line`.
///
/// Works like `BufRead::read_until`, except that growing `line` is fallible.
fn read_line<R: BufRead>(reader: &mut R, line: &mut Vec<u8>) -> Result<usize> {
    let mut read = 0;
    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if chunk.is_empty() {
            return Ok(read);
        }
        let (taken, done) = match chunk.iter().position(|byte| *byte == b'\n') {
            Some(end) => (end + 1, true),
            None => (chunk.len(), false),
        };
        line.try_reserve(taken)?;
        line.extend_from_slice(&chunk[..taken]);
        reader.consume(taken);
        read += taken;
        if done {
            return Ok(read);
        }
    }
}

/// Parse deck text held in memory.
pub fn parse_str(content: &str) -> Result<Deck> {
    parse(content.as_bytes())
}

struct Parser {
    cards: Vec<Card>,
    front: Option<String>,
    lines: usize,
}

impl Parser {
    fn new() -> Result<Self> {
        let mut cards = Vec::new();
        cards.try_reserve_exact(INITIAL_CAPACITY)?;
        Ok(Self {
            cards,
            front: None,
            lines: 0,
        })
    }

    fn process_line(&mut self, raw: &[u8]) -> Result<()> {
        self.lines += 1;
        let text = decode_line(raw)?;

        match self.front.take() {
            None => self.front = Some(text),
            Some(front) => {
                self.grow()?;
                self.cards.push(Card { front, back: text });
            }
        }
        Ok(())
    }

    /// Double the capacity when full so reallocations stay logarithmic.
    fn grow(&mut self) -> Result<()> {
        if self.cards.len() == self.cards.capacity() {
            let additional = self.cards.capacity().max(INITIAL_CAPACITY);
            self.cards.try_reserve_exact(additional)?;
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Deck> {
        if let Some(front) = self.front.take() {
            debug!(line = self.lines, front = %front, "dropping front line with no back");
        }
        // A boxed slice holds exactly `len` cards.
        let cards = self.cards.into_boxed_slice().into_vec();
        debug!(cards = cards.len(), lines = self.lines, "parsed deck");
        Ok(Deck::from(cards))
    }
}

/// Turn one raw line (without its `\n`) into card text.
///
/// Strips a trailing `\r`, cuts the line at the first NUL byte and replaces
/// invalid UTF-8 with U+FFFD.
fn decode_line(raw: &[u8]) -> Result<String> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let raw = match raw.iter().position(|byte| *byte == 0) {
        Some(nul) => &raw[..nul],
        None => raw,
    };

    let mut text = String::new();
    text.try_reserve_exact(raw.len())?;
    for chunk in raw.utf8_chunks() {
        text.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            text.try_reserve(char::REPLACEMENT_CHARACTER.len_utf8())?;
            text.push(char::REPLACEMENT_CHARACTER);
        }
    }
    Ok(text)
}
