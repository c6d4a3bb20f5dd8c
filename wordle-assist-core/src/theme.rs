//! Theme toggle icon and its swap animation.
use crate::prefs::Theme;
use crate::timer::Ticket;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Moon,
    Sun,
}

impl ThemeIcon {
    /// The icon shows what the button switches away from: moon in light mode.
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Moon,
            Theme::Dark => Self::Sun,
        }
    }

    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Moon => "fa-moon",
            Self::Sun => "fa-sun",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconEffect {
    Rotate,
    Scale,
}

impl IconEffect {
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Rotate => "icon-transition-rotate",
            Self::Scale => "icon-transition-scale",
        }
    }
}

/// Icon currently drawn, plus the running swap effect if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTransition {
    icon: ThemeIcon,
    running: Option<(IconEffect, Ticket)>,
}

impl IconTransition {
    #[must_use]
    pub const fn settled(theme: Theme) -> Self {
        Self {
            icon: ThemeIcon::for_theme(theme),
            running: None,
        }
    }

    /// Begin swapping towards `theme`: rotate into dark, scale into light.
    pub fn start(&mut self, theme: Theme, ticket: Ticket) {
        let effect = match theme {
            Theme::Dark => IconEffect::Rotate,
            Theme::Light => IconEffect::Scale,
        };
        self.running = Some((effect, ticket));
    }

    /// Finish the swap started with `ticket`, landing on `theme`'s icon.
    pub fn finish(&mut self, theme: Theme, ticket: Ticket) -> bool {
        match self.running {
            Some((_, current)) if current == ticket => {
                self.icon = ThemeIcon::for_theme(theme);
                self.running = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub const fn icon(&self) -> ThemeIcon {
        self.icon
    }

    #[must_use]
    pub fn effect(&self) -> Option<IconEffect> {
        self.running.map(|(effect, _)| effect)
    }
}
