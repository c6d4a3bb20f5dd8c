pub mod color_popup;
pub mod extended_checkbox;
pub mod guess_grid;
pub mod header;
pub mod help_modal;
pub mod keyboard;
pub mod message_popup;
pub mod moving_image;
pub mod theme_toggle;

pub use color_popup::ColorPopup;
pub use extended_checkbox::ExtendedCheckbox;
pub use guess_grid::GuessGrid;
pub use header::Header;
pub use help_modal::HelpModal;
pub use keyboard::Keyboard;
pub use message_popup::MessagePopup;
pub use moving_image::MovingImage;
pub use theme_toggle::ThemeToggle;
