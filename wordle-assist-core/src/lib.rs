//! Wordle Assist guess-entry engine
//!
//! Platform-agnostic state for the guess input screen: the five-slot grid,
//! the serialized guess sent to the server, letter selection and the color
//! popup, preferences, and the timed transitions the page runs.
//! The browser crate owns rendering and event wiring; everything it needs to
//! decide lives here so it can be tested on the host.

pub mod color;
pub mod config;
pub mod constants;
pub mod controller;
pub mod easter_egg;
pub mod error;
pub mod guess;
pub mod keys;
pub mod letter;
pub mod message;
pub mod modal;
pub mod popup;
pub mod prefs;
pub mod selection;
pub mod theme;
pub mod timer;

// Re-export commonly used types
pub use color::ColorTag;
pub use config::UiConfig;
pub use controller::{ClickTarget, Effect, GuessController};
pub use easter_egg::{Bouncer, EasterEgg, SpriteSize, Viewport};
pub use error::InputError;
pub use guess::{FilledSlot, GuessSlots, SlotView, validate_serialized};
pub use keys::{KeyCommand, command_for_key};
pub use letter::Letter;
pub use message::TransientMessage;
pub use modal::ModalState;
pub use popup::{AnchorRect, PopupPosition};
pub use prefs::{MemoryStore, PrefWrite, PreferenceStore, Preferences, Theme};
pub use selection::{Selection, SelectionSource};
pub use theme::{IconEffect, IconTransition, ThemeIcon};
pub use timer::{Ticket, TicketIssuer, TimerKind, TimerRequest};
