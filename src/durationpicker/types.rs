//! Core types for the durationpicker component.

use bubbletea_rs::Msg;

/// Errors raised by the picker's digit buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A character that is not an ASCII decimal digit was pushed.
    #[error("only decimal digits are allowed, got {0:?}")]
    InvalidInput(char),
    /// A legacy integer unit code outside `0..=2`.
    #[error("unknown time unit code {0}")]
    InvalidUnitMode(i32),
}

/// Which of the hour, minute and second fields the picker shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitMode {
    /// `hh mm ss`, six digits.
    #[default]
    HoursMinutesSeconds,
    /// `hh mm`, four digits. Seconds are always zero.
    HoursMinutes,
    /// `mm ss`, four digits. Minutes hold the total minute count, capped at 99.
    MinutesSeconds,
}

impl UnitMode {
    /// Number of digits in the buffer for this mode.
    pub fn field_width(self) -> usize {
        match self {
            UnitMode::HoursMinutesSeconds => 6,
            UnitMode::HoursMinutes | UnitMode::MinutesSeconds => 4,
        }
    }

    /// Whether the hours field is shown.
    pub fn has_hours(self) -> bool {
        matches!(self, UnitMode::HoursMinutesSeconds | UnitMode::HoursMinutes)
    }

    /// Whether the seconds field is shown.
    pub fn has_seconds(self) -> bool {
        matches!(self, UnitMode::HoursMinutesSeconds | UnitMode::MinutesSeconds)
    }
}

impl TryFrom<i32> for UnitMode {
    type Error = Error;

    /// Accepts the integer codes `0` (h/m/s), `1` (h/m) and `2` (m/s).
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(UnitMode::HoursMinutesSeconds),
            1 => Ok(UnitMode::HoursMinutes),
            2 => Ok(UnitMode::MinutesSeconds),
            other => Err(Error::InvalidUnitMode(other)),
        }
    }
}

/// Sent after a key press changed the entered duration.
#[derive(Debug, Clone)]
pub struct DurationChangedMsg {
    /// ID of the picker that changed.
    pub id: i64,
    /// The new duration in milliseconds.
    pub duration: u64,
}

/// Sets the duration of a picker from outside its owner.
///
/// An `id` of 0 targets every picker.
#[derive(Debug, Clone)]
pub struct SetDurationMsg {
    /// ID of the target picker, or 0 for all.
    pub id: i64,
    /// The duration in milliseconds.
    pub duration: u64,
}

/// Clipboard contents pasted into a picker.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard read failure.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// Called with the new duration in milliseconds after every change.
/// Add Send to satisfy bubbletea-rs Model:Send bound transitively.
pub type DurationChangedListener = Box<dyn Fn(u64) + Send>;

impl From<DurationChangedMsg> for Msg {
    fn from(msg: DurationChangedMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<SetDurationMsg> for Msg {
    fn from(msg: SetDurationMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}
