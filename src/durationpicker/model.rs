//! Core model implementation for the durationpicker component.

use super::buffer::DurationString;
use super::keymap::{default_key_map, KeyMap};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{DurationChangedListener, PasteErrMsg, UnitMode};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for picker instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// A keypad-style duration entry field.
///
/// Digits typed by the user fill the display from the right, like a kitchen
/// timer: typing `1`, `3`, `0` shows `00h 01m 30s`. The picker reports every
/// change through an optional listener and, for key presses, through a
/// [`DurationChangedMsg`](super::DurationChangedMsg) command.
///
/// # Examples
///
/// ```rust
/// use bubbletea_durationpicker::durationpicker::{new, UnitMode};
///
/// let mut picker = new();
/// picker.focus();
/// picker.set_unit_mode(UnitMode::MinutesSeconds);
/// picker.push_number("230").unwrap();
///
/// assert_eq!(picker.minutes_field(), "02");
/// assert_eq!(picker.seconds_field(), "30");
/// assert_eq!(picker.duration(), 150_000);
/// ```
pub struct Model {
    /// Style of the two-digit field values.
    pub display_style: Style,
    /// Style of the unit labels after each field.
    pub unit_style: Style,
    /// Style of the on-screen keypad buttons.
    pub button_style: Style,

    /// Label shown after the hours field.
    pub hours_label: String,
    /// Label shown after the minutes field.
    pub minutes_label: String,
    /// Label shown after the seconds field.
    pub seconds_label: String,

    /// Whether `view()` renders the keypad below the display row.
    pub show_num_pad: bool,

    /// KeyMap encodes the keybindings.
    pub key_map: KeyMap,

    /// Last clipboard error, cleared by the next successful paste.
    pub err: Option<String>,

    pub(super) input: DurationString,
    pub(super) focus: bool,
    pub(super) id: i64,
    pub(super) on_change: Option<DurationChangedListener>,
}

/// Options accepted by [`new_with_options`].
pub enum PickerOption {
    /// Sets the unit mode.
    WithUnitMode(UnitMode),
    /// Sets the initial duration in milliseconds.
    WithDuration(u64),
    /// Shows or hides the on-screen keypad.
    WithNumPad(bool),
    /// Sets the style of the field values.
    WithDisplayStyle(Box<Style>),
}

impl PickerOption {
    fn apply(&self, m: &mut Model) {
        match self {
            PickerOption::WithUnitMode(mode) => m.input.set_unit_mode(*mode),
            PickerOption::WithDuration(duration) => m.input.set_duration(*duration),
            PickerOption::WithNumPad(show) => m.show_num_pad = *show,
            PickerOption::WithDisplayStyle(style) => m.display_style = style.as_ref().clone(),
        }
    }
}

/// Creates a PickerOption that sets the unit mode.
pub fn with_unit_mode(mode: UnitMode) -> PickerOption {
    PickerOption::WithUnitMode(mode)
}

/// Creates a PickerOption that sets the initial duration in milliseconds.
pub fn with_duration(duration_ms: u64) -> PickerOption {
    PickerOption::WithDuration(duration_ms)
}

/// Creates a PickerOption that shows or hides the keypad.
pub fn with_num_pad(show: bool) -> PickerOption {
    PickerOption::WithNumPad(show)
}

/// Creates a PickerOption that sets the style of the field values.
pub fn with_display_style(style: Style) -> PickerOption {
    PickerOption::WithDisplayStyle(Box::new(style))
}

/// Creates a picker at zero in [`UnitMode::HoursMinutesSeconds`].
///
/// The returned model is not focused. Call `focus()` to enable keyboard input.
pub fn new() -> Model {
    Model {
        display_style: Style::new().bold(true),
        unit_style: Style::new().foreground(Color::from("240")),
        button_style: Style::new().padding(0, 1, 0, 1),
        hours_label: "h".to_string(),
        minutes_label: "m".to_string(),
        seconds_label: "s".to_string(),
        show_num_pad: false,
        key_map: default_key_map(),
        err: None,
        input: DurationString::new(),
        focus: false,
        id: next_id(),
        on_change: None,
    }
}

/// Creates a picker and applies the options in order.
///
/// Options are applied before a listener can be registered, so they never
/// fire change notifications.
///
/// ```rust
/// use bubbletea_durationpicker::durationpicker::{new_with_options, with_duration, with_unit_mode, UnitMode};
///
/// let picker = new_with_options(&[
///     with_unit_mode(UnitMode::HoursMinutes),
///     with_duration(90 * 60_000),
/// ]);
/// assert_eq!(picker.export_raw(), "0130");
/// ```
pub fn new_with_options(opts: &[PickerOption]) -> Model {
    let mut m = new();
    for opt in opts {
        opt.apply(&mut m);
    }
    m
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Sets the unit mode, consuming and returning the picker.
    pub fn with_unit_mode(mut self, mode: UnitMode) -> Self {
        self.input.set_unit_mode(mode);
        self
    }

    /// Sets the duration, consuming and returning the picker.
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.input.set_duration(duration_ms);
        self
    }

    /// Shows or hides the keypad, consuming and returning the picker.
    pub fn with_num_pad(mut self, show: bool) -> Self {
        self.show_num_pad = show;
        self
    }

    /// Sets the unit labels, consuming and returning the picker.
    pub fn with_labels(
        mut self,
        hours: impl Into<String>,
        minutes: impl Into<String>,
        seconds: impl Into<String>,
    ) -> Self {
        self.hours_label = hours.into();
        self.minutes_label = minutes.into();
        self.seconds_label = seconds.into();
        self
    }
}

/// Reads the clipboard and delivers it as a paste message.
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, std::option::Option<Cmd>) {
        let mut model = new();
        model.focus();
        (model, std::option::Option::None)
    }

    fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
