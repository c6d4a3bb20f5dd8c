//! The five-slot guess grid and its serialized form.
use crate::color::ColorTag;
use crate::constants::{GUESS_PATTERN, SLOT_COUNT};
use crate::error::InputError;
use crate::letter::Letter;
use once_cell::sync::Lazy;
use regex::Regex;

static GUESS_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(GUESS_PATTERN).ok());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilledSlot {
    pub letter: Letter,
    pub tag: ColorTag,
}

/// What a grid position should render as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotView {
    Empty,
    Filled(FilledSlot),
    /// Removed from the guess, still fading out.
    Leaving(FilledSlot),
}

/// Filled slots form a contiguous prefix of the grid.
///
/// Removed slots stay in `leaving`, keyed by grid position, until the page
/// reports their fade-out finished or a new letter claims the position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessSlots {
    filled: Vec<FilledSlot>,
    leaving: Vec<(usize, FilledSlot)>,
}

impl GuessSlots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filled.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled.len() >= SLOT_COUNT
    }

    #[must_use]
    pub fn filled(&self) -> &[FilledSlot] {
        &self.filled
    }

    /// Slots still fading out, as `(position, slot)`.
    #[must_use]
    pub fn leaving(&self) -> &[(usize, FilledSlot)] {
        &self.leaving
    }

    /// Append a slot. Returns `false` and changes nothing when the grid is full.
    pub fn push(&mut self, letter: Letter, tag: ColorTag) -> bool {
        if self.is_full() {
            return false;
        }
        let position = self.filled.len();
        self.leaving.retain(|(idx, _)| *idx != position);
        self.filled.push(FilledSlot { letter, tag });
        true
    }

    /// Remove the last filled slot and start its fade-out.
    pub fn pop(&mut self) -> Option<FilledSlot> {
        let removed = self.filled.pop()?;
        self.leaving.push((self.filled.len(), removed));
        Some(removed)
    }

    /// The fade-out at `position` finished; it becomes a placeholder.
    pub fn finish_removal(&mut self, position: usize) -> bool {
        let before = self.leaving.len();
        self.leaving.retain(|(idx, _)| *idx != position);
        self.leaving.len() != before
    }

    pub fn views(&self) -> impl Iterator<Item = SlotView> + '_ {
        (0..SLOT_COUNT).map(move |idx| match self.filled.get(idx) {
            Some(slot) => SlotView::Filled(*slot),
            None => self
                .leaving
                .iter()
                .find(|(pos, _)| *pos == idx)
                .map_or(SlotView::Empty, |(_, slot)| SlotView::Leaving(*slot)),
        })
    }

    /// Letter/symbol pairs for the filled prefix, e.g. `a+b*c-`.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(self.filled.len() * 2);
        for slot in &self.filled {
            out.push(slot.letter.as_char());
            out.push(slot.tag.symbol());
        }
        out
    }
}

/// Check that a serialized guess is complete and well formed.
///
/// # Errors
///
/// Returns [`InputError::MalformedGuess`] unless the input is exactly five
/// lowercase letter/symbol pairs.
pub fn validate_serialized(guess: &str) -> Result<(), InputError> {
    if GUESS_RE.as_ref().is_some_and(|re| re.is_match(guess)) {
        Ok(())
    } else {
        Err(InputError::MalformedGuess)
    }
}
