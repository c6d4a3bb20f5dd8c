//! Color popup placement.

/// Viewport-relative bounding box of the element the popup points at.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Document coordinates of the popup's bottom-center anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PopupPosition {
    pub top: f64,
    pub left: f64,
}

impl PopupPosition {
    /// Center the popup horizontally over `anchor`, `gap` pixels above it.
    ///
    /// The popup is drawn with `translateY(-100%)`, so `top` is where its
    /// bottom edge lands.
    #[must_use]
    pub fn above(anchor: AnchorRect, scroll_y: f64, popup_width: f64, gap: f64) -> Self {
        Self {
            top: anchor.top + scroll_y - gap,
            left: anchor.left + anchor.width / 2.0 - popup_width / 2.0,
        }
    }

    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "top: {}px; left: {}px; transform: translateY(-100%);",
            self.top, self.left
        )
    }
}
