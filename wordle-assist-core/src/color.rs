//! Per-letter feedback tags.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    /// Right letter, right position (`+`).
    Correct,
    /// Letter appears elsewhere in the word (`*`).
    Present,
    /// Letter is not in the word (`-`).
    Absent,
}

impl ColorTag {
    pub const ALL: [Self; 3] = [Self::Correct, Self::Present, Self::Absent];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => '+',
            Self::Present => '*',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Correct),
            '*' => Some(Self::Present),
            '-' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Correct => "#48bb78",
            Self::Present => "#ecc94b",
            Self::Absent => "#f56565",
        }
    }

    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}
