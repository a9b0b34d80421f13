//! Scripted presentation surface for session tests.

use flashcard_core::{InputEvent, PresentationError, Rect, RegionId, Size, Surface};
use std::collections::VecDeque;
use std::io;

#[derive(Debug)]
struct Region {
    rect: Rect,
    rows: Vec<String>,
}

/// In-memory surface that replays queued input and keeps the written text.
#[derive(Debug)]
pub struct FakeSurface {
    size: Size,
    regions: Vec<Region>,
    script: VecDeque<(Option<Size>, InputEvent)>,
    pub flushes: usize,
}

impl FakeSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            regions: Vec::new(),
            script: VecDeque::new(),
            flushes: 0,
        }
    }

    /// Queue key presses, one per character.
    pub fn keys(mut self, keys: &str) -> Self {
        for key in keys.chars() {
            self.script.push_back((None, InputEvent::Key(key)));
        }
        self
    }

    pub fn event(mut self, event: InputEvent) -> Self {
        self.script.push_back((None, event));
        self
    }

    /// Queue a terminal resize.
    pub fn resize_to(mut self, size: Size) -> Self {
        self.script.push_back((Some(size), InputEvent::Resize));
        self
    }

    /// Non-empty rows of a region, in creation order (0 info, 1 front, 2 back).
    pub fn text(&self, region: usize) -> Vec<String> {
        self.regions[region]
            .rows
            .iter()
            .filter(|row| !row.is_empty())
            .cloned()
            .collect()
    }

    pub fn rect(&self, region: usize) -> Rect {
        self.regions[region].rect
    }

    fn region_mut(&mut self, region: RegionId) -> Result<&mut Region, PresentationError> {
        self.regions
            .get_mut(region.0)
            .ok_or(PresentationError::RegionUnavailable(region))
    }
}

impl Surface for FakeSurface {
    fn create_region(&mut self, rect: Rect) -> Result<RegionId, PresentationError> {
        self.regions.push(Region {
            rect,
            rows: vec![String::new(); rect.height as usize],
        });
        Ok(RegionId(self.regions.len() - 1))
    }

    fn move_region(&mut self, region: RegionId, x: u16, y: u16) -> Result<(), PresentationError> {
        let region = self.region_mut(region)?;
        region.rect.x = x;
        region.rect.y = y;
        Ok(())
    }

    fn write(
        &mut self,
        region: RegionId,
        row: u16,
        col: u16,
        text: &str,
    ) -> Result<(), PresentationError> {
        let region = self.region_mut(region)?;
        let width = region.rect.width.saturating_sub(col) as usize;
        if let Some(line) = region.rows.get_mut(row as usize) {
            *line = text.chars().take(width).collect();
        }
        Ok(())
    }

    fn clear(&mut self, region: RegionId) -> Result<(), PresentationError> {
        let region = self.region_mut(region)?;
        region.rows.iter_mut().for_each(String::clear);
        Ok(())
    }

    fn flush(&mut self, region: RegionId) -> Result<(), PresentationError> {
        self.region_mut(region)?;
        self.flushes += 1;
        Ok(())
    }

    fn size(&self) -> Result<Size, PresentationError> {
        Ok(self.size)
    }

    fn next_event(&mut self) -> Result<InputEvent, PresentationError> {
        let (size, event) = self.script.pop_front().ok_or_else(|| {
            PresentationError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input script exhausted",
            ))
        })?;
        if let Some(size) = size {
            self.size = size;
        }
        Ok(event)
    }
}
