//! Crossterm implementation of the presentation surface.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use flashcard_core::render::escape_controls;
use flashcard_core::{InputEvent, PresentationError, Rect, RegionId, Size, Surface};
use std::io::{self, Stdout, Write};
use unicode_width::UnicodeWidthChar;

/// Raw-mode alternate screen. Restored on drop.
pub struct TerminalSurface {
    stdout: Stdout,
    regions: Vec<Rect>,
    active: bool,
}

impl TerminalSurface {
    /// Switch the terminal into raw mode and the alternate screen.
    pub fn enter() -> Result<Self, PresentationError> {
        enable_raw_mode().map_err(|e| PresentationError::Setup(format!("raw mode: {e}")))?;
        let mut surface = Self {
            stdout: io::stdout(),
            regions: Vec::new(),
            active: true,
        };
        execute!(surface.stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))
            .map_err(|e| PresentationError::Setup(format!("alternate screen: {e}")))?;
        Ok(surface)
    }

    /// Leave the alternate screen and raw mode. Safe to call twice.
    pub fn restore(&mut self) -> Result<(), PresentationError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let screen = execute!(self.stdout, Show, LeaveAlternateScreen);
        let raw = disable_raw_mode();
        screen?;
        raw?;
        Ok(())
    }

    fn rect(&self, region: RegionId) -> Result<Rect, PresentationError> {
        self.regions
            .get(region.0)
            .copied()
            .ok_or(PresentationError::RegionUnavailable(region))
    }

    fn blank(&mut self, rect: Rect) -> Result<(), PresentationError> {
        let spaces = " ".repeat(rect.width as usize);
        for row in 0..rect.height {
            queue!(self.stdout, MoveTo(rect.x, rect.y + row), Print(&spaces))?;
        }
        Ok(())
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

impl Surface for TerminalSurface {
    fn create_region(&mut self, rect: Rect) -> Result<RegionId, PresentationError> {
        self.regions.push(rect);
        Ok(RegionId(self.regions.len() - 1))
    }

    fn move_region(&mut self, region: RegionId, x: u16, y: u16) -> Result<(), PresentationError> {
        let old = self.rect(region)?;
        self.blank(old)?;
        self.regions[region.0] = Rect { x, y, ..old };
        Ok(())
    }

    fn write(
        &mut self,
        region: RegionId,
        row: u16,
        col: u16,
        text: &str,
    ) -> Result<(), PresentationError> {
        let rect = self.rect(region)?;
        if row >= rect.height || col >= rect.width {
            return Ok(());
        }
        let text = escape_controls(text);
        let visible = clip(&text, rect.width - col);
        queue!(self.stdout, MoveTo(rect.x + col, rect.y + row), Print(visible))?;
        Ok(())
    }

    fn clear(&mut self, region: RegionId) -> Result<(), PresentationError> {
        let rect = self.rect(region)?;
        self.blank(rect)
    }

    fn flush(&mut self, region: RegionId) -> Result<(), PresentationError> {
        self.rect(region)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn size(&self) -> Result<Size, PresentationError> {
        let (cols, rows) = terminal::size()?;
        Ok(Size::new(cols, rows))
    }

    fn next_event(&mut self) -> Result<InputEvent, PresentationError> {
        loop {
            let event = match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Press => continue,
                Event::Key(key) => map_key(key),
                Event::Resize(..) => InputEvent::Resize,
                _ => InputEvent::Other,
            };
            return Ok(event);
        }
    }
}

fn map_key(key: KeyEvent) -> InputEvent {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Cancel,
        KeyCode::Char(c) => InputEvent::Key(c),
        _ => InputEvent::Other,
    }
}

/// Longest prefix of `text` that fits in `width` cells.
fn clip(text: &str, width: u16) -> &str {
    let width = usize::from(width);
    let mut used = 0;
    for (offset, ch) in text.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > width {
            return &text[..offset];
        }
    }
    text
}
