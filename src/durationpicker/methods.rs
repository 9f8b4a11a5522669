//! Methods for the durationpicker component.

use super::buffer::DurationString;
use super::model::{paste, Model};
use super::types::{
    DurationChangedListener, DurationChangedMsg, Error, PasteErrMsg, PasteMsg, SetDurationMsg,
    UnitMode,
};
use crate::durationutil;
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::KeyCode;
use std::time::Duration;
use tracing::{debug, warn};

impl Model {
    /// Unique identifier of this picker, used to route messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Whether the picker accepts key input.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the picker keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Registers the listener called with the new duration after every change.
    ///
    /// Replaces any previously registered listener.
    ///
    /// ```rust
    /// use bubbletea_durationpicker::durationpicker::new;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    ///
    /// let mut picker = new();
    /// picker.set_on_duration_changed(Box::new(move |d| sink.lock().unwrap().push(d)));
    /// picker.push_digit('5').unwrap();
    ///
    /// assert_eq!(*seen.lock().unwrap(), vec![5_000]);
    /// ```
    pub fn set_on_duration_changed(&mut self, listener: DurationChangedListener) {
        self.on_change = Some(listener);
    }

    /// Removes the change listener.
    pub fn clear_on_duration_changed(&mut self) {
        self.on_change = None;
    }

    /// The underlying digit buffer.
    pub fn input(&self) -> &DurationString {
        &self.input
    }

    /// The active unit mode.
    pub fn unit_mode(&self) -> UnitMode {
        self.input.unit_mode()
    }

    /// Switches the unit mode, keeping the entered duration where it fits.
    pub fn set_unit_mode(&mut self, mode: UnitMode) {
        self.input.set_unit_mode(mode);
        self.notify();
    }

    /// Enters one digit. Fails with [`Error::InvalidInput`] for anything else.
    pub fn push_digit(&mut self, digit: char) -> Result<(), Error> {
        self.input.push_digit(digit)?;
        self.notify();
        Ok(())
    }

    /// Enters each character of `digits` in order.
    ///
    /// Stops at the first non-digit; the digits before it stay entered and
    /// the listener still fires.
    pub fn push_number(&mut self, digits: &str) -> Result<(), Error> {
        let res = self.input.push_number(digits);
        self.notify();
        res
    }

    /// Deletes the rightmost digit.
    pub fn pop_digit(&mut self) {
        self.input.pop_digit();
        self.notify();
    }

    /// Resets every field to zero.
    pub fn clear(&mut self) {
        self.input.clear();
        self.notify();
    }

    /// The entered duration in milliseconds.
    pub fn duration(&self) -> u64 {
        self.input.duration()
    }

    /// The entered duration as a [`Duration`].
    pub fn duration_std(&self) -> Duration {
        durationutil::to_std(self.duration())
    }

    /// Replaces the entry with a duration in milliseconds.
    ///
    /// Durations whose hours or minutes exceed two digits show `99` in every
    /// field.
    pub fn set_duration(&mut self, duration_ms: u64) {
        self.input.set_duration(duration_ms);
        self.notify();
    }

    /// Replaces the entry with a [`Duration`], truncated to milliseconds.
    pub fn set_duration_std(&mut self, duration: Duration) {
        self.set_duration(durationutil::from_std(duration));
    }

    /// Hours as two digits.
    pub fn hours_field(&self) -> &str {
        self.input.hours_field()
    }

    /// Minutes as two digits.
    pub fn minutes_field(&self) -> &str {
        self.input.minutes_field()
    }

    /// Seconds as two digits.
    pub fn seconds_field(&self) -> &str {
        self.input.seconds_field()
    }

    /// The entered fields formatted for the unit mode: `h:mm:ss`, `h:mm`
    /// or `m:ss`. The leading field drops its zero padding.
    ///
    /// Built from the fields as displayed, so a saturated buffer reads
    /// `99:99` rather than its normalized duration.
    pub fn formatted(&self) -> String {
        let leading = |field: &str| field.parse::<u64>().unwrap_or(0);
        match self.unit_mode() {
            UnitMode::HoursMinutesSeconds => format!(
                "{}:{}:{}",
                leading(self.hours_field()),
                self.minutes_field(),
                self.seconds_field()
            ),
            UnitMode::HoursMinutes => {
                format!("{}:{}", leading(self.hours_field()), self.minutes_field())
            }
            UnitMode::MinutesSeconds => {
                format!("{}:{}", leading(self.minutes_field()), self.seconds_field())
            }
        }
    }

    /// The raw digit string to persist across a suspend/resume boundary.
    pub fn export_raw(&self) -> &str {
        self.input.export_raw()
    }

    /// Restores a string saved with [`export_raw`](Self::export_raw).
    ///
    /// Never fails: the string is re-entered digit by digit and re-fitted to
    /// the current unit mode.
    pub fn import_raw(&mut self, raw: &str) {
        self.input.import_raw(raw);
        self.notify();
    }

    fn notify(&self) {
        if let Some(listener) = &self.on_change {
            listener(self.input.duration());
        }
    }

    fn changed_cmd(&self) -> Cmd {
        let msg = DurationChangedMsg {
            id: self.id,
            duration: self.duration(),
        };
        Box::pin(async move { Some(Box::new(msg) as Msg) })
    }

    /// Processes key presses, pastes and [`SetDurationMsg`]s.
    ///
    /// Key input is ignored unless the picker is focused. When a key press or
    /// paste changed the entry, the returned command delivers a
    /// [`DurationChangedMsg`].
    ///
    /// ```rust
    /// use bubbletea_durationpicker::durationpicker::new;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut picker = new();
    /// picker.focus();
    ///
    /// let cmd = picker.update(Box::new(KeyMsg {
    ///     key: KeyCode::Char('7'),
    ///     modifiers: KeyModifiers::NONE,
    /// }));
    /// assert!(cmd.is_some());
    /// assert_eq!(picker.seconds_field(), "07");
    /// ```
    pub fn update(&mut self, msg: Msg) -> std::option::Option<Cmd> {
        if let Some(set_msg) = msg.downcast_ref::<SetDurationMsg>() {
            if set_msg.id != 0 && set_msg.id != self.id {
                return std::option::Option::None;
            }
            self.set_duration(set_msg.duration);
            return std::option::Option::None;
        }

        if !self.focus {
            return std::option::Option::None;
        }

        let before = self.input.clone();

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if matches_binding(key_msg, &self.key_map.paste) {
                return std::option::Option::Some(paste());
            }
            self.handle_keys(key_msg);
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            self.err = None;
            let digits: String = paste_msg.0.chars().filter(char::is_ascii_digit).collect();
            debug!(id = self.id, digits = %digits, "pasting digits");
            if let Err(err) = self.push_number(&digits) {
                warn!(id = self.id, %err, "rejected pasted input");
            }
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            self.err = Some(paste_err.0.clone());
        }

        if self.input != before {
            std::option::Option::Some(self.changed_cmd())
        } else {
            std::option::Option::None
        }
    }

    fn handle_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.double_zero) {
            if let Err(err) = self.push_number("00") {
                warn!(id = self.id, %err, "double zero rejected");
            }
        } else if matches_binding(key_msg, &self.key_map.digit) {
            if let KeyCode::Char(ch) = key_msg.key {
                if let Err(err) = self.push_digit(ch) {
                    warn!(id = self.id, %err, "digit binding matched a non-digit key");
                }
            }
        } else if matches_binding(key_msg, &self.key_map.backspace) {
            self.pop_digit();
        } else if matches_binding(key_msg, &self.key_map.clear) {
            self.clear();
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        Model::focus(self);
        None
    }

    fn blur(&mut self) {
        Model::blur(self);
    }

    fn focused(&self) -> bool {
        Model::focused(self)
    }
}
