//! Review session driver.
//!
//! Pulls due cards from the [`Scheduler`], draws them on a [`Surface`] and
//! turns key presses into scheduler calls. Runs until the user quits.

use crate::error::SessionError;
use crate::layout::Layout;
use crate::render::{self, InfoView};
use crate::scheduler::{Scheduler, Step};
use crate::surface::{InputEvent, RegionId, Surface};
use crate::types::Verdict;
use std::path::PathBuf;
use tracing::{debug, info};

/// Exit code used when the wait is cancelled (Ctrl-C).
pub const CANCEL_EXIT_CODE: i32 = 130;

const EMPTY_DECK_NOTICE: &str = "deck is empty";

/// The session is asking the process to exit with this code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitRequest {
    pub code: i32,
}

pub fn request_exit(code: i32) -> ExitRequest {
    ExitRequest { code }
}

/// What a key press means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleBack,
    Mark(Verdict),
    Reload,
    Redraw,
    Quit,
    Cancel,
    Ignore,
}

impl Command {
    /// Keys are case-insensitive: `j` flip, `k` wrong, `l` right, `r`
    /// reload, `q` quit.
    pub fn from_event(event: InputEvent) -> Self {
        match event {
            InputEvent::Resize => Self::Redraw,
            InputEvent::Cancel => Self::Cancel,
            InputEvent::Key(key) => match key.to_ascii_lowercase() {
                'j' => Self::ToggleBack,
                'k' => Self::Mark(Verdict::Wrong),
                'l' => Self::Mark(Verdict::Right),
                'r' => Self::Reload,
                'q' => Self::Quit,
                _ => Self::Ignore,
            },
            InputEvent::Other => Self::Ignore,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Regions {
    info: RegionId,
    front: RegionId,
    back: RegionId,
}

pub struct Session<S: Surface> {
    surface: S,
    scheduler: Scheduler,
    deck_path: Option<PathBuf>,
    layout: Layout,
    regions: Regions,
    status: Option<String>,
}

impl<S: Surface> Session<S> {
    /// Create the three review regions on `surface`.
    pub fn new(mut surface: S, scheduler: Scheduler) -> Result<Self, SessionError> {
        let layout = Layout::for_size(surface.size()?);
        let regions = Regions {
            info: surface.create_region(layout.info)?,
            front: surface.create_region(layout.front)?,
            back: surface.create_region(layout.back)?,
        };

        Ok(Self {
            surface,
            scheduler,
            deck_path: None,
            layout,
            regions,
            status: None,
        })
    }

    /// File to re-read when the user asks for a reload.
    pub fn with_deck_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.deck_path = Some(path.into());
        self
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn into_parts(self) -> (S, Scheduler) {
        (self.surface, self.scheduler)
    }

    /// Run the review loop until the user quits.
    pub fn run(&mut self) -> Result<ExitRequest, SessionError> {
        loop {
            match self.scheduler.advance()? {
                Step::Card(index) => {
                    debug!(index, "presenting card");
                }
                Step::RoundComplete { .. } if !self.scheduler.is_empty() => continue,
                Step::RoundComplete { .. } => {}
            }

            self.draw()?;
            if let Some(exit) = self.wait_for_change()? {
                let counters = self.scheduler.counters();
                info!(
                    code = exit.code,
                    right = counters.right,
                    wrong = counters.wrong,
                    "review session ending"
                );
                return Ok(exit);
            }
        }
    }

    /// Handle input until the scheduler needs to advance or the user quits.
    fn wait_for_change(&mut self) -> Result<Option<ExitRequest>, SessionError> {
        loop {
            let event = self.surface.next_event()?;
            match Command::from_event(event) {
                Command::ToggleBack if self.scheduler.current().is_some() => {
                    self.scheduler.toggle_back()?;
                    self.draw_back()?;
                }
                Command::Mark(verdict) if self.scheduler.current().is_some() => {
                    self.scheduler.mark(verdict)?;
                    self.status = None;
                    return Ok(None);
                }
                Command::Reload => {
                    if self.reload() {
                        return Ok(None);
                    }
                    self.draw_info()?;
                }
                Command::Redraw => self.relayout()?,
                Command::Quit => return Ok(Some(request_exit(0))),
                Command::Cancel => return Ok(Some(request_exit(CANCEL_EXIT_CODE))),
                Command::ToggleBack | Command::Mark(_) | Command::Ignore => {}
            }
        }
    }

    /// Returns true when the deck was replaced.
    fn reload(&mut self) -> bool {
        let Some(path) = self.deck_path.as_ref() else {
            self.status = Some("no deck file".to_string());
            return false;
        };

        match self.scheduler.reload(path) {
            Ok(()) => {
                self.status = Some("deck reloaded".to_string());
                true
            }
            Err(_) => {
                self.status = Some("reload failed".to_string());
                false
            }
        }
    }

    /// Recompute geometry after a resize and redraw without touching the
    /// scheduler.
    fn relayout(&mut self) -> Result<(), SessionError> {
        self.layout = Layout::for_size(self.surface.size()?);
        let Layout { front, back, .. } = self.layout;
        self.surface.move_region(self.regions.front, front.x, front.y)?;
        self.surface.move_region(self.regions.back, back.x, back.y)?;
        self.draw()
    }

    fn draw(&mut self) -> Result<(), SessionError> {
        self.draw_info()?;

        let region = self.regions.front;
        self.surface.clear(region)?;
        let front = match self.scheduler.current() {
            Some((_, card)) => card.front.as_str(),
            None if self.scheduler.is_empty() => EMPTY_DECK_NOTICE,
            None => "",
        };
        render::render_text(&mut self.surface, region, self.layout.front, front)?;
        self.surface.flush(region)?;

        self.draw_back()
    }

    fn draw_info(&mut self) -> Result<(), SessionError> {
        let view = InfoView {
            position: self.scheduler.current().map(|(index, _)| index),
            total: self.scheduler.deck().len(),
            counters: self.scheduler.counters(),
            status: self.status.as_deref(),
        };
        let region = self.regions.info;
        self.surface.clear(region)?;
        render::render_info(&mut self.surface, region, &view)?;
        self.surface.flush(region)?;
        Ok(())
    }

    fn draw_back(&mut self) -> Result<(), SessionError> {
        let region = self.regions.back;
        self.surface.clear(region)?;
        if self.scheduler.back_visible() {
            if let Some((_, card)) = self.scheduler.current() {
                render::render_text(&mut self.surface, region, self.layout.back, &card.back)?;
            }
        }
        self.surface.flush(region)?;
        Ok(())
    }
}
