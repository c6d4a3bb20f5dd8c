use std::fmt;

/// A single lowercase ASCII letter.
///
/// Construction normalizes case, so `Letter::new('Q')` and `Letter::new('q')`
/// are equal. Anything outside `a..=z` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    #[must_use]
    pub fn new(ch: char) -> Option<Self> {
        let lower = ch.to_ascii_lowercase();
        lower.is_ascii_lowercase().then_some(Self(lower))
    }

    /// Parse a `KeyboardEvent.key` value. Only single-character keys qualify.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::new(ch)
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Uppercase form shown in the guess grid and on the keyboard.
    #[must_use]
    pub const fn display_char(self) -> char {
        self.0.to_ascii_uppercase()
    }

    pub fn alphabet() -> impl Iterator<Item = Self> {
        ('a'..='z').map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_rejects_non_letters() {
        assert_eq!(Letter::new('Q'), Letter::new('q'));
        assert_eq!(Letter::new('q').map(Letter::as_char), Some('q'));
        assert!(Letter::new('1').is_none());
        assert!(Letter::new('é').is_none());
        assert!(Letter::new(' ').is_none());
    }

    #[test]
    fn key_names_are_not_letters() {
        assert_eq!(Letter::from_key("a").map(Letter::as_char), Some('a'));
        assert_eq!(Letter::from_key("Z").map(Letter::as_char), Some('z'));
        assert!(Letter::from_key("Enter").is_none());
        assert!(Letter::from_key("").is_none());
    }

    #[test]
    fn alphabet_has_twenty_six_letters() {
        assert_eq!(Letter::alphabet().count(), 26);
        assert_eq!(Letter::new('x').map(Letter::display_char), Some('X'));
    }
}
