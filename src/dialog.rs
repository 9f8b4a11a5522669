//! Duration picker dialog for Bubble Tea applications.
//!
//! The dialog wraps a [`durationpicker`](crate::durationpicker) in a bordered
//! box with a title and OK/Cancel actions. While visible it keeps the picker
//! focused and forwards every message to it except the confirm and cancel
//! keys.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_durationpicker::dialog::new;
//!
//! // Start at five minutes.
//! let mut dialog = new(5 * 60_000).with_title("Snooze for");
//! dialog.show();
//! assert!(dialog.visible());
//! assert_eq!(dialog.duration(), 300_000);
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Model as BubbleTeaModel, Msg, Cmd};
//! use bubbletea_durationpicker::dialog::{new, CancelMsg, DurationSetMsg, Model};
//!
//! struct App {
//!     dialog: Model,
//!     snooze: Option<u64>,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut dialog = new(0);
//!         dialog.show();
//!         (Self { dialog, snooze: None }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(set) = msg.downcast_ref::<DurationSetMsg>() {
//!             if set.id == self.dialog.id() {
//!                 self.snooze = Some(set.duration);
//!                 return None;
//!             }
//!         }
//!         if msg.downcast_ref::<CancelMsg>().is_some() {
//!             return None;
//!         }
//!         self.dialog.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.dialog.view()
//!     }
//! }
//! ```

use crate::durationpicker::{self, UnitMode};
use crate::key::{
    self, matches_binding, new_binding, render_short_help, with_help, with_keys_str, Binding,
};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

// Internal ID management for dialog instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Sent when the user confirms the dialog.
#[derive(Debug, Clone)]
pub struct DurationSetMsg {
    /// ID of the dialog that was confirmed.
    pub id: i64,
    /// The confirmed duration in milliseconds.
    pub duration: u64,
}

/// Sent when the user cancels the dialog.
#[derive(Debug, Clone)]
pub struct CancelMsg {
    /// ID of the dialog that was cancelled.
    pub id: i64,
}

/// Called with the confirmed duration in milliseconds.
pub type DurationSetListener = Box<dyn Fn(u64) + Send>;

/// Key bindings for the dialog actions.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Accept the entered duration.
    pub confirm: Binding,
    /// Close without accepting.
    pub cancel: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            confirm: new_binding(vec![with_keys_str(&["enter"]), with_help("enter", "ok")]),
            cancel: new_binding(vec![with_keys_str(&["esc"]), with_help("esc", "cancel")]),
        }
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.confirm, &self.cancel]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.confirm, &self.cancel]]
    }
}

/// A modal dialog around a duration picker.
pub struct Model {
    /// Title shown above the picker.
    pub title: String,
    /// Label of the confirm button.
    pub ok_label: String,
    /// Label of the cancel button.
    pub cancel_label: String,

    /// The wrapped picker. Style it directly.
    pub picker: durationpicker::Model,

    /// Dialog key bindings.
    pub key_map: KeyMap,

    /// Style of the surrounding box.
    pub box_style: Style,
    /// Style of the title line.
    pub title_style: Style,
    /// Style of the button and help lines.
    pub help_style: Style,

    visible: bool,
    id: i64,
    on_duration_set: Option<DurationSetListener>,
}

/// Creates a hidden dialog starting at `duration_ms` in h/m/s mode.
pub fn new(duration_ms: u64) -> Model {
    let mut picker = durationpicker::new();
    picker.set_duration(duration_ms);

    Model {
        title: "Duration".to_string(),
        ok_label: "OK".to_string(),
        cancel_label: "Cancel".to_string(),
        picker,
        key_map: KeyMap::default(),
        box_style: Style::new()
            .border_style(lipgloss::normal_border())
            .border_foreground(Color::from("#874BFD"))
            .padding(1, 2, 1, 2),
        title_style: Style::new().bold(true),
        help_style: Style::new().foreground(Color::from("240")),
        visible: false,
        id: next_id(),
        on_duration_set: None,
    }
}

/// Creates a hidden dialog starting at `duration_ms` in the given mode.
pub fn new_with_unit_mode(duration_ms: u64, mode: UnitMode) -> Model {
    let mut m = new(duration_ms);
    m.picker.set_unit_mode(mode);
    m
}

impl Default for Model {
    fn default() -> Self {
        new(0)
    }
}

impl Model {
    /// Sets the title, consuming and returning the dialog.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the button labels, consuming and returning the dialog.
    pub fn with_button_labels(mut self, ok: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.ok_label = ok.into();
        self.cancel_label = cancel.into();
        self
    }

    /// Unique identifier of this dialog, used to route messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Whether the dialog is shown and accepting input.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Shows the dialog and focuses its picker.
    pub fn show(&mut self) {
        self.visible = true;
        self.picker.focus();
    }

    /// Hides the dialog and blurs its picker.
    pub fn hide(&mut self) {
        self.visible = false;
        self.picker.blur();
    }

    /// Registers the listener called when the user confirms.
    pub fn set_on_duration_set(&mut self, listener: DurationSetListener) {
        self.on_duration_set = Some(listener);
    }

    /// The picker's duration in milliseconds.
    pub fn duration(&self) -> u64 {
        self.picker.duration()
    }

    /// Sets the picker's duration in milliseconds.
    pub fn set_duration(&mut self, duration_ms: u64) {
        self.picker.set_duration(duration_ms);
    }

    /// The value to persist across a suspend/resume boundary.
    pub fn save_state(&self) -> u64 {
        self.duration()
    }

    /// Restores a value returned by [`save_state`](Self::save_state).
    pub fn restore_state(&mut self, duration_ms: u64) {
        self.set_duration(duration_ms);
    }

    fn confirm(&mut self) -> Cmd {
        let duration = self.duration();
        debug!(id = self.id, duration, "duration dialog confirmed");
        if let Some(listener) = &self.on_duration_set {
            listener(duration);
        }
        self.hide();

        let msg = DurationSetMsg {
            id: self.id,
            duration,
        };
        Box::pin(async move { Some(Box::new(msg) as Msg) })
    }

    fn cancel(&mut self) -> Cmd {
        debug!(id = self.id, "duration dialog cancelled");
        self.hide();

        let msg = CancelMsg { id: self.id };
        Box::pin(async move { Some(Box::new(msg) as Msg) })
    }

    /// Handles confirm/cancel keys and forwards everything else to the picker.
    ///
    /// Hidden dialogs ignore all messages.
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        if !self.visible {
            return std::option::Option::None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if matches_binding(key_msg, &self.key_map.confirm) {
                return std::option::Option::Some(self.confirm());
            }
            if matches_binding(key_msg, &self.key_map.cancel) {
                return std::option::Option::Some(self.cancel());
            }
        }

        self.picker.update(msg)
    }

    /// Renders the dialog box, or nothing while hidden.
    pub fn view(&self) -> String {
        if !self.visible {
            return String::new();
        }

        let picker = self.picker.view();
        let buttons = format!("[ {} ]   [ {} ]", self.ok_label, self.cancel_label);
        let help = render_short_help(&[&self.key_map.confirm, &self.key_map.cancel]);

        let width = picker
            .lines()
            .map(|line| lipgloss::width_visible(line))
            .chain([self.title.width(), buttons.width(), help.width()])
            .max()
            .unwrap_or(0);

        let content = [
            self.title_style.clone().inline(true).render(&center(&self.title, width)),
            String::new(),
            picker,
            String::new(),
            self.help_style.clone().inline(true).render(&center(&buttons, width)),
            self.help_style.clone().inline(true).render(&center(&help, width)),
        ]
        .join("\n");

        self.box_style.render(&content)
    }
}

fn center(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width()) / 2;
    format!("{}{}", " ".repeat(pad), s)
}

/// Focusing a dialog shows it and blurring hides it, since a hidden dialog
/// takes no input.
impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.show();
        None
    }

    fn blur(&mut self) {
        self.hide();
    }

    fn focused(&self) -> bool {
        self.visible && self.picker.focused()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, std::option::Option<Cmd>) {
        let mut model = new(0);
        model.show();
        (model, std::option::Option::None)
    }

    fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::durationutil::duration_of;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::{Arc, Mutex};

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn shown(duration_ms: u64) -> Model {
        let mut dialog = new(duration_ms);
        dialog.show();
        dialog
    }

    #[test]
    fn test_new_sets_initial_duration() {
        let dialog = new(duration_of(0, 25, 0));
        assert_eq!(dialog.duration(), duration_of(0, 25, 0));
        assert_eq!(dialog.picker.unit_mode(), UnitMode::HoursMinutesSeconds);
        assert!(!dialog.visible());
        assert!(!dialog.picker.focused());
    }

    #[test]
    fn test_new_with_unit_mode() {
        let dialog = new_with_unit_mode(duration_of(1, 30, 15), UnitMode::MinutesSeconds);
        assert_eq!(dialog.picker.export_raw(), "9015");
        assert_eq!(dialog.duration(), duration_of(0, 90, 15));
    }

    #[test]
    fn test_unique_ids() {
        assert_ne!(new(0).id(), new(0).id());
    }

    #[test]
    fn test_show_and_hide() {
        let mut dialog = new(0);
        dialog.show();
        assert!(dialog.visible());
        assert!(dialog.picker.focused());

        dialog.hide();
        assert!(!dialog.visible());
        assert!(!dialog.picker.focused());
    }

    #[test]
    fn test_hidden_dialog_ignores_input() {
        let mut dialog = new(0);
        assert!(dialog.update(key(KeyCode::Char('4'))).is_none());
        assert!(dialog.update(key(KeyCode::Enter)).is_none());
        assert_eq!(dialog.duration(), 0);
        assert_eq!(dialog.view(), "");
    }

    #[test]
    fn test_digits_reach_the_picker() {
        let mut dialog = shown(0);
        assert!(dialog.update(key(KeyCode::Char('4'))).is_some());
        assert!(dialog.update(key(KeyCode::Char('5'))).is_some());
        assert_eq!(dialog.duration(), 45_000);

        dialog.update(key(KeyCode::Backspace));
        assert_eq!(dialog.duration(), 4_000);
    }

    #[test]
    fn test_confirm_calls_listener_and_hides() {
        let mut dialog = shown(duration_of(0, 1, 0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        dialog.set_on_duration_set(Box::new(move |d| sink.lock().unwrap().push(d)));

        dialog.update(key(KeyCode::Char('5')));
        assert!(dialog.update(key(KeyCode::Enter)).is_some());

        assert_eq!(*seen.lock().unwrap(), vec![duration_of(0, 10, 5)]);
        assert!(!dialog.visible());
    }

    #[test]
    fn test_cancel_hides_without_listener() {
        let mut dialog = shown(0);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        dialog.set_on_duration_set(Box::new(move |d| sink.lock().unwrap().push(d)));

        assert!(dialog.update(key(KeyCode::Esc)).is_some());
        assert!(seen.lock().unwrap().is_empty());
        assert!(!dialog.visible());
    }

    #[test]
    fn test_save_and_restore_state() {
        let mut dialog = shown(0);
        dialog.update(key(KeyCode::Char('9')));
        dialog.update(key(KeyCode::Char('0')));
        let saved = dialog.save_state();
        assert_eq!(saved, 90_000);

        let mut restored = new(0);
        restored.restore_state(saved);
        // 90 seconds is re-rendered as 1m 30s.
        assert_eq!(restored.picker.export_raw(), "000130");
        assert_eq!(restored.duration(), saved);
    }

    #[test]
    fn test_view_contents() {
        let dialog = shown(duration_of(2, 0, 30)).with_title("Snooze");
        let view = lipgloss::strip_ansi(&dialog.view());

        assert!(view.contains("Snooze"), "{view}");
        assert!(view.contains("02h 00m 30s"), "{view}");
        assert!(view.contains("[ OK ]"), "{view}");
        assert!(view.contains("[ Cancel ]"), "{view}");
        assert!(view.contains("enter ok • esc cancel"), "{view}");
    }

    #[test]
    fn test_custom_button_labels() {
        let dialog = shown(0).with_button_labels("Set", "Back");
        let view = lipgloss::strip_ansi(&dialog.view());
        assert!(view.contains("[ Set ]"), "{view}");
        assert!(view.contains("[ Back ]"), "{view}");
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab");
        assert_eq!(center("abcdef", 4), "abcdef");
    }

    #[test]
    fn test_component_focus_shows_dialog() {
        let mut dialog = new(0);
        assert!(!Component::focused(&dialog));

        assert!(Component::focus(&mut dialog).is_none());
        assert!(dialog.visible());
        assert!(Component::focused(&dialog));

        assert!(dialog.update(key(KeyCode::Char('5'))).is_some());
        assert_eq!(dialog.duration(), 5_000);

        Component::blur(&mut dialog);
        assert!(!dialog.visible());
        assert!(!Component::focused(&dialog));
        assert!(dialog.update(key(KeyCode::Char('5'))).is_none());
        assert_eq!(dialog.duration(), 5_000);
    }

    #[test]
    fn test_hidden_dialog_is_not_focused() {
        let mut dialog = new(0);
        dialog.picker.focus();
        assert!(!Component::focused(&dialog));
    }

    #[test]
    fn test_key_map_help() {
        use crate::key::KeyMap as _;
        let key_map = KeyMap::default();
        assert_eq!(key_map.short_help().len(), 2);
        assert_eq!(key_map.full_help().len(), 1);
    }

    #[tokio::test]
    async fn test_confirm_delivers_duration_set_msg() {
        let mut dialog = shown(duration_of(0, 0, 42));
        let cmd = dialog
            .update(key(KeyCode::Enter))
            .expect("enter should produce a command");
        let msg = cmd.await.expect("command should produce a message");
        let set = msg
            .downcast_ref::<DurationSetMsg>()
            .expect("expected DurationSetMsg");

        assert_eq!(set.id, dialog.id());
        assert_eq!(set.duration, 42_000);
    }

    #[tokio::test]
    async fn test_cancel_delivers_cancel_msg() {
        let mut dialog = shown(0);
        let cmd = dialog
            .update(key(KeyCode::Esc))
            .expect("esc should produce a command");
        let msg = cmd.await.expect("command should produce a message");
        let cancel = msg.downcast_ref::<CancelMsg>().expect("expected CancelMsg");
        assert_eq!(cancel.id, dialog.id());
    }
}
