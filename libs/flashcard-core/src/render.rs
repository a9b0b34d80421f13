//! Drawing helpers for the review screen.

use crate::error::PresentationError;
use crate::surface::{Rect, RegionId, Surface};
use crate::types::ReviewCounters;
use std::borrow::Cow;
use unicode_width::UnicodeWidthChar;

/// What the info region shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoView<'a> {
    /// Index of the presented card, if one is presented.
    pub position: Option<usize>,
    pub total: usize,
    pub counters: ReviewCounters,
    pub status: Option<&'a str>,
}

impl InfoView<'_> {
    pub fn lines(&self) -> Vec<String> {
        let position = self.position.map_or(0, |index| index + 1);
        let mut lines = vec![
            format!("card {}/{}", position, self.total),
            format!("right: {}", self.counters.right),
            format!("wrong: {}", self.counters.wrong),
        ];
        if let Some(status) = self.status {
            lines.push(status.to_string());
        }
        lines
    }
}

pub fn render_info<S: Surface>(
    surface: &mut S,
    region: RegionId,
    view: &InfoView<'_>,
) -> Result<(), PresentationError> {
    for (row, line) in view.lines().iter().enumerate() {
        surface.write(region, row as u16, 0, line)?;
    }
    Ok(())
}

/// Write `text` wrapped to the region's width, cut at its height.
pub fn render_text<S: Surface>(
    surface: &mut S,
    region: RegionId,
    bounds: Rect,
    text: &str,
) -> Result<(), PresentationError> {
    let lines = wrap(text, bounds.width);
    for (row, line) in lines.iter().take(bounds.height as usize).enumerate() {
        surface.write(region, row as u16, 0, line)?;
    }
    Ok(())
}

/// Break text into rows no wider than `width` display cells.
///
/// Control characters are shown as in [`escape_controls`] and a `^X` pair is
/// never split across rows. A character wider than the whole row still gets
/// a row of its own.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut glyph = String::new();
    let mut used = 0;

    for ch in text.chars() {
        glyph.clear();
        push_visible(&mut glyph, ch);
        let cells: usize = glyph.chars().map(|c| c.width().unwrap_or(0)).sum();
        if used + cells > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            used = 0;
        }
        line.push_str(&glyph);
        used += cells;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Replace control characters with something that prints.
///
/// C0 controls and DEL use caret notation (`^[` for ESC, `^I` for TAB,
/// `^?` for DEL); the C1 range becomes U+FFFD.
pub fn escape_controls(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        push_visible(&mut escaped, ch);
    }
    Cow::Owned(escaped)
}

fn push_visible(out: &mut String, ch: char) {
    match ch {
        '\u{0}'..='\u{1f}' => {
            out.push('^');
            out.push(char::from(ch as u8 + 0x40));
        }
        '\u{7f}' => out.push_str("^?"),
        _ if ch.is_control() => out.push('\u{FFFD}'),
        _ => out.push(ch),
    }
}
