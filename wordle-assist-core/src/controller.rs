//! The guess input controller.
//!
//! One object owns every piece of transient page state. Event handlers call
//! into it and then drain the [`Effect`]s it queued; the controller itself
//! never touches the browser.
use crate::color::ColorTag;
use crate::config::UiConfig;
use crate::easter_egg::EasterEgg;
use crate::error::InputError;
use crate::guess::{GuessSlots, validate_serialized};
use crate::keys::KeyCommand;
use crate::letter::Letter;
use crate::message::TransientMessage;
use crate::modal::ModalState;
use crate::popup::PopupPosition;
use crate::prefs::{PrefWrite, Preferences, Theme};
use crate::selection::{Selection, SelectionSource};
use crate::theme::IconTransition;
use crate::timer::{Ticket, TicketIssuer, TimerKind, TimerRequest};

/// Platform work requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Persist(PrefWrite),
    Navigate(String),
    /// Submit the guess form through its normal submit path, validation
    /// included.
    RequestSubmit,
    Schedule(TimerRequest),
}

/// Where a document-level click landed, as far as dismissal is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickTarget {
    pub inside_popup: bool,
    pub on_key: bool,
    pub inside_modal_content: bool,
}

#[derive(Debug, Clone)]
pub struct GuessController {
    config: UiConfig,
    slots: GuessSlots,
    selection: Selection,
    pressed: Option<Letter>,
    message: TransientMessage,
    prefs: Preferences,
    icon: IconTransition,
    modal: ModalState,
    easter_egg: EasterEgg,
    tickets: TicketIssuer,
    effects: Vec<Effect>,
}

impl GuessController {
    #[must_use]
    pub fn new(config: UiConfig, prefs: Preferences) -> Self {
        let easter_egg = EasterEgg::new(config.easter_egg_clicks);
        Self {
            config,
            slots: GuessSlots::new(),
            selection: Selection::Idle,
            pressed: None,
            message: TransientMessage::default(),
            prefs,
            icon: IconTransition::settled(prefs.theme),
            modal: ModalState::Hidden,
            easter_egg,
            tickets: TicketIssuer::default(),
            effects: Vec::new(),
        }
    }

    // Accessors -------------------------------------------------------------

    #[must_use]
    pub const fn config(&self) -> &UiConfig {
        &self.config
    }

    #[must_use]
    pub const fn slots(&self) -> &GuessSlots {
        &self.slots
    }

    #[must_use]
    pub fn serialized_guess(&self) -> String {
        self.slots.serialize()
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub const fn pressed(&self) -> Option<Letter> {
        self.pressed
    }

    #[must_use]
    pub const fn message(&self) -> &TransientMessage {
        &self.message
    }

    #[must_use]
    pub const fn preferences(&self) -> Preferences {
        self.prefs
    }

    #[must_use]
    pub const fn icon(&self) -> &IconTransition {
        &self.icon
    }

    #[must_use]
    pub const fn modal(&self) -> ModalState {
        self.modal
    }

    #[must_use]
    pub const fn easter_egg(&self) -> &EasterEgg {
        &self.easter_egg
    }

    /// Take every effect queued since the last drain, in request order.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    // Guess entry -------------------------------------------------------------

    /// Append a tagged letter. Silently ignored once five slots are filled.
    pub fn add_letter(&mut self, letter: Letter, tag: ColorTag) -> bool {
        let added = self.slots.push(letter, tag);
        if added {
            log::debug!("added {letter}{} -> {}", tag.symbol(), self.slots.serialize());
        }
        added
    }

    /// Remove the newest slot; it fades out until [`Self::finish_removal`].
    pub fn remove_last_letter(&mut self) -> bool {
        let removed = self.slots.pop().is_some();
        if removed {
            log::debug!("removed last letter -> {}", self.slots.serialize());
        }
        removed
    }

    pub fn finish_removal(&mut self, position: usize) -> bool {
        self.slots.finish_removal(position)
    }

    /// Select `letter` and anchor the popup at `position`.
    ///
    /// Activating the letter that is already selected closes the popup
    /// instead. Any other letter moves the popup to its own anchor.
    pub fn select_letter(&mut self, letter: Letter, source: SelectionSource, position: PopupPosition) {
        if self.selection.is_selected(letter) {
            log::debug!("deselected {letter} via {source:?}");
            self.selection = Selection::Idle;
            return;
        }
        log::debug!("selected {letter} via {source:?}");
        self.selection = Selection::Selected { letter, position };
    }

    /// Tag the selected letter and add it to the guess.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NoLetterSelected`] when nothing is selected; the
    /// message is also queued for display.
    pub fn confirm_color(&mut self, tag: ColorTag) -> Result<(), InputError> {
        let Some(letter) = self.selection.letter() else {
            return Err(self.report(InputError::NoLetterSelected));
        };
        self.add_letter(letter, tag);
        self.selection = Selection::Idle;
        Ok(())
    }

    /// Backspace closes an open popup first; only then does it delete.
    pub fn handle_backspace(&mut self) {
        if self.selection.is_open() {
            self.selection = Selection::Idle;
        } else {
            self.remove_last_letter();
        }
    }

    /// Validate the guess before the form is sent.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MalformedGuess`] unless all five slots are
    /// filled; the message is also queued for display.
    pub fn submit(&mut self) -> Result<String, InputError> {
        let guess = self.slots.serialize();
        match validate_serialized(&guess) {
            Ok(()) => {
                log::debug!("submitting {guess}");
                Ok(guess)
            }
            Err(err) => Err(self.report(err)),
        }
    }

    // Keyboard and pointer -----------------------------------------------------

    /// Apply a key press. `anchor` is where the popup goes if the key selects
    /// a letter; without one the selection is skipped.
    pub fn apply_key(&mut self, command: KeyCommand, anchor: Option<PopupPosition>) {
        match command {
            KeyCommand::Select(letter) => {
                self.pressed = Some(letter);
                if let Some(position) = anchor {
                    self.select_letter(letter, SelectionSource::Keyboard, position);
                }
            }
            KeyCommand::Backspace => self.handle_backspace(),
            KeyCommand::Submit => self.effects.push(Effect::RequestSubmit),
            KeyCommand::Reset => {
                let path = self.config.reset_path.clone();
                self.effects.push(Effect::Navigate(path));
            }
            KeyCommand::Color(tag) => {
                // Already surfaced as a message; nothing else to do with it.
                let _ = self.confirm_color(tag);
            }
        }
    }

    pub fn release_key(&mut self, letter: Letter) {
        if self.pressed == Some(letter) {
            self.pressed = None;
        }
    }

    /// Outside-click dismissal for the popup and the help modal.
    pub fn document_click(&mut self, target: ClickTarget) {
        if !target.inside_popup && !target.on_key && self.selection.is_open() {
            self.selection = Selection::Idle;
        }
        if !target.inside_modal_content {
            let ticket = self.tickets.issue();
            if let Some(next) = self.modal.close(ticket) {
                log::debug!("closing help modal");
                self.modal = next;
                self.schedule(TimerKind::ModalFadeOut, ticket, self.config.modal_fade_out_ms);
            }
        }
    }

    // Preferences ----------------------------------------------------------------

    pub fn toggle_theme(&mut self) {
        self.prefs.theme = self.prefs.theme.toggled();
        let ticket = self.tickets.issue();
        self.icon.start(self.prefs.theme, ticket);
        self.effects.push(Effect::Persist(self.prefs.theme_write()));
        self.schedule(TimerKind::ThemeIcon, ticket, self.config.icon_transition_ms);
        log::debug!("theme -> {}", self.prefs.theme.as_str());
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.prefs.theme
    }

    pub fn toggle_include_extended(&mut self) {
        self.prefs.include_extended = !self.prefs.include_extended;
        self.effects
            .push(Effect::Persist(self.prefs.include_extended_write()));
        log::debug!("include extended -> {}", self.prefs.include_extended);
    }

    // Help modal -----------------------------------------------------------------

    pub fn open_help(&mut self) {
        let ticket = self.tickets.issue();
        self.modal = self.modal.open(ticket);
        self.schedule(TimerKind::ModalFadeIn, ticket, self.config.modal_fade_in_ms);
    }

    // Easter egg -----------------------------------------------------------------

    /// Count a logo click. Returns `true` on the click that starts the
    /// animation.
    pub fn logo_clicked(&mut self) -> bool {
        let unlocked = self.easter_egg.register_click();
        if unlocked {
            log::debug!("easter egg unlocked after {} clicks", self.easter_egg.clicks());
        }
        unlocked
    }

    // Timers -----------------------------------------------------------------------

    /// A scheduled timer fired. Stale tickets are ignored.
    pub fn timer_elapsed(&mut self, kind: TimerKind, ticket: Ticket) {
        match kind {
            TimerKind::DismissMessage => {
                self.message.dismiss(ticket);
            }
            TimerKind::ThemeIcon => {
                self.icon.finish(self.prefs.theme, ticket);
            }
            TimerKind::ModalFadeIn => self.modal = self.modal.fade_in_elapsed(ticket),
            TimerKind::ModalFadeOut => self.modal = self.modal.fade_out_elapsed(ticket),
        }
    }

    fn report(&mut self, err: InputError) -> InputError {
        let ticket = self.tickets.issue();
        self.message.show(err.to_string(), ticket);
        self.schedule(TimerKind::DismissMessage, ticket, self.config.message_dismiss_ms);
        err
    }

    fn schedule(&mut self, kind: TimerKind, ticket: Ticket, delay_ms: u32) {
        self.effects.push(Effect::Schedule(TimerRequest {
            kind,
            ticket,
            delay_ms,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::ModalState;
    use crate::theme::{IconEffect, ThemeIcon};

    fn controller() -> GuessController {
        GuessController::new(UiConfig::default(), Preferences::default())
    }

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn scheduled(effects: &[Effect], kind: TimerKind) -> Option<TimerRequest> {
        effects.iter().find_map(|effect| match effect {
            Effect::Schedule(req) if req.kind == kind => Some(*req),
            _ => None,
        })
    }

    #[test]
    fn confirm_without_selection_reports_and_keeps_guess() {
        let mut ctl = controller();
        ctl.add_letter(letter('a'), ColorTag::Correct);
        assert_eq!(
            ctl.confirm_color(ColorTag::Absent),
            Err(InputError::NoLetterSelected)
        );
        assert_eq!(ctl.serialized_guess(), "a+");
        assert!(ctl.message().is_visible());
        assert_eq!(ctl.message().text(), "Please select a letter");

        let effects = ctl.drain_effects();
        let dismiss = scheduled(&effects, TimerKind::DismissMessage).unwrap();
        assert_eq!(dismiss.delay_ms, 2_000);
        ctl.timer_elapsed(dismiss.kind, dismiss.ticket);
        assert!(!ctl.message().is_visible());
    }

    #[test]
    fn confirm_adds_letter_and_closes_popup() {
        let mut ctl = controller();
        ctl.select_letter(letter('r'), SelectionSource::OnScreenKey, PopupPosition::default());
        assert!(ctl.selection().is_open());
        assert_eq!(ctl.confirm_color(ColorTag::Present), Ok(()));
        assert_eq!(ctl.serialized_guess(), "r*");
        assert_eq!(*ctl.selection(), Selection::Idle);
        assert!(ctl.drain_effects().is_empty());
    }

    #[test]
    fn reselecting_same_key_toggles_popup_closed() {
        let mut ctl = controller();
        let x = letter('x');
        ctl.select_letter(x, SelectionSource::OnScreenKey, PopupPosition::default());
        ctl.select_letter(x, SelectionSource::OnScreenKey, PopupPosition::default());
        assert_eq!(*ctl.selection(), Selection::Idle);
        assert_eq!(ctl.serialized_guess(), "");
    }

    #[test]
    fn selecting_another_letter_moves_the_popup() {
        let mut ctl = controller();
        let first = PopupPosition {
            top: 10.0,
            left: 20.0,
        };
        let second = PopupPosition {
            top: 10.0,
            left: 80.0,
        };
        ctl.select_letter(letter('a'), SelectionSource::OnScreenKey, first);
        ctl.select_letter(letter('s'), SelectionSource::Keyboard, second);
        assert_eq!(ctl.selection().letter(), Some(letter('s')));
        assert_eq!(ctl.selection().popup_position(), Some(second));
    }

    #[test]
    fn backspace_closes_popup_before_deleting() {
        let mut ctl = controller();
        ctl.add_letter(letter('a'), ColorTag::Correct);
        ctl.select_letter(letter('b'), SelectionSource::Keyboard, PopupPosition::default());

        ctl.handle_backspace();
        assert!(!ctl.selection().is_open());
        assert_eq!(ctl.serialized_guess(), "a+");

        ctl.handle_backspace();
        assert_eq!(ctl.serialized_guess(), "");
        ctl.handle_backspace();
        assert_eq!(ctl.serialized_guess(), "");
    }

    #[test]
    fn submit_checks_the_full_pattern() {
        let mut ctl = controller();
        for (ch, tag) in [
            ('a', ColorTag::Correct),
            ('b', ColorTag::Present),
            ('c', ColorTag::Absent),
            ('d', ColorTag::Correct),
        ] {
            ctl.add_letter(letter(ch), tag);
        }
        assert_eq!(ctl.submit(), Err(InputError::MalformedGuess));
        assert_eq!(ctl.message().text(), "ERROR: Incorrect format!");

        ctl.add_letter(letter('e'), ColorTag::Present);
        assert_eq!(ctl.submit().as_deref(), Ok("a+b*c-d+e*"));
    }

    #[test]
    fn digit_keys_need_a_selection() {
        let mut ctl = controller();
        ctl.apply_key(KeyCommand::Color(ColorTag::Correct), None);
        assert_eq!(ctl.serialized_guess(), "");
        assert!(ctl.message().is_visible());

        let anchor = Some(PopupPosition::default());
        ctl.apply_key(KeyCommand::Select(letter('k')), anchor);
        assert_eq!(ctl.pressed(), Some(letter('k')));
        ctl.apply_key(KeyCommand::Color(ColorTag::Absent), None);
        assert_eq!(ctl.serialized_guess(), "k-");

        ctl.release_key(letter('k'));
        assert_eq!(ctl.pressed(), None);
    }

    #[test]
    fn escape_navigates_and_enter_requests_submit() {
        let mut ctl = controller();
        ctl.select_letter(letter('q'), SelectionSource::Keyboard, PopupPosition::default());
        ctl.apply_key(KeyCommand::Reset, None);
        ctl.apply_key(KeyCommand::Submit, None);
        assert_eq!(
            ctl.drain_effects(),
            vec![Effect::Navigate("/reset".to_string()), Effect::RequestSubmit]
        );
        // Escape does not dismiss the popup.
        assert!(ctl.selection().is_open());
    }

    #[test]
    fn outside_click_dismisses_popup_but_key_clicks_do_not() {
        let mut ctl = controller();
        ctl.select_letter(letter('m'), SelectionSource::OnScreenKey, PopupPosition::default());
        ctl.document_click(ClickTarget {
            on_key: true,
            ..ClickTarget::default()
        });
        assert!(ctl.selection().is_open());
        ctl.document_click(ClickTarget {
            inside_popup: true,
            ..ClickTarget::default()
        });
        assert!(ctl.selection().is_open());
        ctl.document_click(ClickTarget::default());
        assert!(!ctl.selection().is_open());
    }

    #[test]
    fn theme_toggle_twice_restores_state_and_storage() {
        let mut ctl = controller();
        ctl.toggle_theme();
        let first = ctl.drain_effects();
        assert!(first.contains(&Effect::Persist(PrefWrite {
            key: "theme",
            value: "dark"
        })));
        assert_eq!(ctl.icon().effect(), Some(IconEffect::Rotate));
        assert_eq!(ctl.icon().icon(), ThemeIcon::Moon);

        let swap = scheduled(&first, TimerKind::ThemeIcon).unwrap();
        assert_eq!(swap.delay_ms, 250);
        ctl.timer_elapsed(swap.kind, swap.ticket);
        assert_eq!(ctl.icon().icon(), ThemeIcon::Sun);
        assert_eq!(ctl.icon().effect(), None);

        ctl.toggle_theme();
        let second = ctl.drain_effects();
        assert!(second.contains(&Effect::Persist(PrefWrite {
            key: "theme",
            value: "light"
        })));
        assert_eq!(ctl.icon().effect(), Some(IconEffect::Scale));
        let swap = scheduled(&second, TimerKind::ThemeIcon).unwrap();
        ctl.timer_elapsed(swap.kind, swap.ticket);
        assert_eq!(ctl.theme(), Theme::Light);
        assert_eq!(ctl.icon().icon(), ThemeIcon::Moon);
    }

    #[test]
    fn stale_icon_timer_is_ignored() {
        let mut ctl = controller();
        ctl.toggle_theme();
        let stale = scheduled(&ctl.drain_effects(), TimerKind::ThemeIcon).unwrap();
        ctl.toggle_theme();
        let fresh = scheduled(&ctl.drain_effects(), TimerKind::ThemeIcon).unwrap();

        ctl.timer_elapsed(stale.kind, stale.ticket);
        assert_eq!(ctl.icon().effect(), Some(IconEffect::Scale));
        ctl.timer_elapsed(fresh.kind, fresh.ticket);
        assert_eq!(ctl.icon().icon(), ThemeIcon::Moon);
    }

    #[test]
    fn extended_toggle_persists_flag() {
        let mut ctl = controller();
        ctl.toggle_include_extended();
        assert!(ctl.preferences().include_extended);
        assert_eq!(
            ctl.drain_effects(),
            vec![Effect::Persist(PrefWrite {
                key: "includeExtended",
                value: "true"
            })]
        );
    }

    #[test]
    fn help_modal_ignores_clicks_while_opening() {
        let mut ctl = controller();
        ctl.open_help();
        assert!(ctl.modal().guard_active());
        ctl.document_click(ClickTarget::default());
        assert!(matches!(ctl.modal(), ModalState::Opening(_)));

        let fade_in = scheduled(&ctl.drain_effects(), TimerKind::ModalFadeIn).unwrap();
        assert_eq!(fade_in.delay_ms, 10);
        ctl.timer_elapsed(fade_in.kind, fade_in.ticket);
        assert_eq!(ctl.modal(), ModalState::Visible);

        ctl.document_click(ClickTarget {
            inside_modal_content: true,
            ..ClickTarget::default()
        });
        assert_eq!(ctl.modal(), ModalState::Visible);

        ctl.document_click(ClickTarget::default());
        assert!(ctl.modal().is_fading_out());
        let fade_out = scheduled(&ctl.drain_effects(), TimerKind::ModalFadeOut).unwrap();
        assert_eq!(fade_out.delay_ms, 300);
        ctl.timer_elapsed(fade_out.kind, fade_out.ticket);
        assert_eq!(ctl.modal(), ModalState::Hidden);
    }

    #[test]
    fn reopening_during_fade_out_keeps_modal_open() {
        let mut ctl = controller();
        ctl.open_help();
        let fade_in = scheduled(&ctl.drain_effects(), TimerKind::ModalFadeIn).unwrap();
        ctl.timer_elapsed(fade_in.kind, fade_in.ticket);
        ctl.document_click(ClickTarget::default());
        let fade_out = scheduled(&ctl.drain_effects(), TimerKind::ModalFadeOut).unwrap();

        ctl.open_help();
        ctl.timer_elapsed(fade_out.kind, fade_out.ticket);
        assert!(ctl.modal().is_displayed());
    }

    #[test]
    fn newer_message_survives_older_dismissal() {
        let mut ctl = controller();
        let _ = ctl.confirm_color(ColorTag::Correct);
        let old = scheduled(&ctl.drain_effects(), TimerKind::DismissMessage).unwrap();
        let _ = ctl.submit();
        ctl.timer_elapsed(old.kind, old.ticket);
        assert!(ctl.message().is_visible());
        assert_eq!(ctl.message().text(), "ERROR: Incorrect format!");
    }

    #[test]
    fn logo_unlocks_after_configured_clicks() {
        let mut ctl = controller();
        for _ in 0..14 {
            assert!(!ctl.logo_clicked());
        }
        assert!(!ctl.easter_egg().is_active());
        assert!(ctl.logo_clicked());
        assert!(ctl.easter_egg().is_active());
        assert!(!ctl.logo_clicked());
    }
}
