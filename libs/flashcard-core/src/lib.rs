//! Core flashcard library used by the terminal trainer.
//!
//! Provides:
//! - Line-pair deck parser and file loader
//! - Deck store that keeps a deck and its due flags in step
//! - One-box review scheduler (wrong cards stay due, a perfect pass requeues all)
//! - Session driver over an abstract presentation surface

pub mod error;
pub mod layout;
pub mod loader;
pub mod parser;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod store;
pub mod surface;
pub mod types;

pub use error::{LoadError, PresentationError, Result, ReviewError, SessionError};
pub use layout::Layout;
pub use loader::{load, save};
pub use parser::{parse, parse_str};
pub use scheduler::{ReviewState, Scheduler, Step};
pub use session::{request_exit, Command, ExitRequest, Session};
pub use store::DeckStore;
pub use surface::{InputEvent, Rect, RegionId, Size, Surface};
pub use types::{Card, Deck, DueSet, ReviewCounters, Verdict};
