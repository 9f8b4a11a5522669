//! The digit buffer behind the picker.
//!
//! [`DurationString`] holds the digits the user typed as a fixed-width,
//! zero-padded string. New digits enter on the right and shift the existing
//! ones left, the way a microwave or kitchen timer keypad behaves:
//!
//! ```rust
//! use bubbletea_durationpicker::durationpicker::DurationString;
//!
//! let mut input = DurationString::new();
//! input.push_number("130").unwrap();
//! assert_eq!(input.export_raw(), "000130");
//! assert_eq!(input.minutes_field(), "01");
//! assert_eq!(input.seconds_field(), "30");
//! assert_eq!(input.duration(), 90_000);
//! ```

use std::fmt;

use tracing::{debug, trace};

use super::types::{Error, UnitMode};
use crate::durationutil::{
    duration_of, hours_of, minutes_in_hour_of, minutes_of, seconds_in_minute_of,
};

const ZERO_FIELD: &str = "00";
const MAX_FIELD: u64 = 99;

/// Fixed-width digit entry buffer that converts to and from milliseconds.
///
/// After every public method returns, the buffer holds exactly
/// [`UnitMode::field_width`] ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationString {
    unit_mode: UnitMode,
    digits: String,
}

impl Default for DurationString {
    fn default() -> Self {
        Self::new()
    }
}

impl DurationString {
    /// Creates an all-zero buffer in [`UnitMode::HoursMinutesSeconds`].
    pub fn new() -> Self {
        Self::with_unit_mode(UnitMode::default())
    }

    /// Creates an all-zero buffer for the given mode.
    pub fn with_unit_mode(unit_mode: UnitMode) -> Self {
        let mut input = Self {
            unit_mode,
            digits: String::with_capacity(UnitMode::HoursMinutesSeconds.field_width()),
        };
        input.pad_with_zeros();
        input
    }

    /// The active unit mode.
    pub fn unit_mode(&self) -> UnitMode {
        self.unit_mode
    }

    fn field_width(&self) -> usize {
        self.unit_mode.field_width()
    }

    /// Switches the unit mode and re-renders the current duration for it.
    ///
    /// The value carried over is the duration the buffer represents under the
    /// old mode, so `01h 02m 03s` becomes `62m 03s` in
    /// [`UnitMode::MinutesSeconds`].
    pub fn set_unit_mode(&mut self, unit_mode: UnitMode) {
        let duration = self.duration();
        debug!(from = ?self.unit_mode, to = ?unit_mode, duration, "switching unit mode");
        self.unit_mode = unit_mode;
        self.set_duration(duration);
    }

    /// Pushes each character of `digits` through [`push_digit`](Self::push_digit).
    ///
    /// Stops at the first non-digit; digits before it stay applied.
    pub fn push_number(&mut self, digits: &str) -> Result<(), Error> {
        for digit in digits.chars() {
            self.push_digit(digit)?;
        }
        Ok(())
    }

    /// Appends a digit on the right, shifting the others left.
    ///
    /// A leading `'0'` on an all-zero buffer is ignored, and once the buffer
    /// is full of significant digits further digits are dropped.
    pub fn push_digit(&mut self, digit: char) -> Result<(), Error> {
        if !digit.is_ascii_digit() {
            return Err(Error::InvalidInput(digit));
        }

        self.remove_leading_zeros();
        if self.digits.len() < self.field_width() && (!self.digits.is_empty() || digit != '0') {
            self.digits.push(digit);
        }
        self.pad_with_zeros();
        trace!(digit = %digit, raw = %self.digits, "pushed digit");
        Ok(())
    }

    /// Removes the rightmost digit. An all-zero buffer stays all zero.
    pub fn pop_digit(&mut self) {
        self.digits.pop();
        self.pad_with_zeros();
        trace!(raw = %self.digits, "popped digit");
    }

    /// Resets to an all-zero buffer of the current width.
    pub fn clear(&mut self) {
        self.digits.clear();
        self.pad_with_zeros();
    }

    /// Hours as two digits, `"00"` when the mode has no hours field.
    pub fn hours_field(&self) -> &str {
        match self.unit_mode {
            UnitMode::HoursMinutesSeconds | UnitMode::HoursMinutes => &self.digits[0..2],
            UnitMode::MinutesSeconds => ZERO_FIELD,
        }
    }

    /// Minutes as two digits.
    pub fn minutes_field(&self) -> &str {
        match self.unit_mode {
            UnitMode::HoursMinutesSeconds | UnitMode::HoursMinutes => &self.digits[2..4],
            UnitMode::MinutesSeconds => &self.digits[0..2],
        }
    }

    /// Seconds as two digits, `"00"` when the mode has no seconds field.
    pub fn seconds_field(&self) -> &str {
        match self.unit_mode {
            UnitMode::HoursMinutesSeconds => &self.digits[4..6],
            UnitMode::MinutesSeconds => &self.digits[2..4],
            UnitMode::HoursMinutes => ZERO_FIELD,
        }
    }

    /// The raw digit string, 4 or 6 characters long.
    pub fn export_raw(&self) -> &str {
        &self.digits
    }

    /// Restores a buffer saved with [`export_raw`](Self::export_raw).
    ///
    /// The string is replayed through the push logic rather than copied, so a
    /// value saved under a different unit mode is re-fitted to the current
    /// width. Characters that are not digits are skipped.
    pub fn import_raw(&mut self, raw: &str) {
        self.clear();
        for digit in raw.chars().filter(char::is_ascii_digit) {
            // Filtered to digits above, so this cannot fail.
            let _ = self.push_digit(digit);
        }
    }

    /// The entered duration in milliseconds.
    pub fn duration(&self) -> u64 {
        duration_of(
            field_value(self.hours_field()),
            field_value(self.minutes_field()),
            field_value(self.seconds_field()),
        )
    }

    /// Replaces the buffer with the given duration.
    ///
    /// If the hours or the minutes do not fit in two digits, every active
    /// field becomes `99`.
    pub fn set_duration(&mut self, duration_ms: u64) {
        let hours = hours_of(duration_ms);
        let minutes = match self.unit_mode {
            UnitMode::MinutesSeconds => minutes_of(duration_ms),
            UnitMode::HoursMinutesSeconds | UnitMode::HoursMinutes => {
                minutes_in_hour_of(duration_ms)
            }
        };
        let seconds = seconds_in_minute_of(duration_ms);

        if hours > MAX_FIELD || minutes > MAX_FIELD {
            debug!(duration_ms, hours, minutes, "duration out of range, saturating");
            self.set_fields(MAX_FIELD, MAX_FIELD, MAX_FIELD);
        } else {
            self.set_fields(hours, minutes, seconds);
        }
        trace!(duration_ms, raw = %self.digits, "set duration");
    }

    /// True when every digit is zero.
    pub fn is_zero(&self) -> bool {
        self.digits.bytes().all(|b| b == b'0')
    }

    fn set_fields(&mut self, hours: u64, minutes: u64, seconds: u64) {
        self.digits.clear();
        if self.unit_mode.has_hours() {
            self.digits.push_str(&format!("{hours:02}"));
        }
        self.digits.push_str(&format!("{minutes:02}"));
        if self.unit_mode.has_seconds() {
            self.digits.push_str(&format!("{seconds:02}"));
        }
    }

    fn remove_leading_zeros(&mut self) {
        let significant = self.digits.trim_start_matches('0').len();
        let zeros = self.digits.len() - significant;
        self.digits.replace_range(..zeros, "");
    }

    fn pad_with_zeros(&mut self) {
        let missing = self.field_width().saturating_sub(self.digits.len());
        if missing > 0 {
            self.digits.insert_str(0, &"0".repeat(missing));
        }
    }
}

impl fmt::Display for DurationString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

fn field_value(field: &str) -> u64 {
    field
        .bytes()
        .fold(0, |acc, b| acc * 10 + u64::from(b.wrapping_sub(b'0')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::durationutil::{MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};

    fn assert_well_formed(input: &DurationString) {
        let raw = input.export_raw();
        assert_eq!(raw.len(), input.unit_mode().field_width(), "raw = {raw:?}");
        assert!(raw.bytes().all(|b| b.is_ascii_digit()), "raw = {raw:?}");
    }

    #[test]
    fn test_new_is_all_zeros() {
        let input = DurationString::new();
        assert_eq!(input.export_raw(), "000000");
        assert_eq!(input.unit_mode(), UnitMode::HoursMinutesSeconds);
        assert_eq!(input.duration(), 0);
        assert!(input.is_zero());

        let input = DurationString::with_unit_mode(UnitMode::MinutesSeconds);
        assert_eq!(input.export_raw(), "0000");
    }

    #[test]
    fn test_leading_zero_is_ignored() {
        let mut input = DurationString::new();
        input.push_digit('0').unwrap();
        assert_eq!(input.export_raw(), "000000");

        input.push_digit('5').unwrap();
        assert_eq!(input.export_raw(), "000005");

        input.push_digit('0').unwrap();
        assert_eq!(input.export_raw(), "000050");
    }

    #[test]
    fn test_push_rejects_non_digits() {
        let mut input = DurationString::new();
        input.push_digit('4').unwrap();

        assert_eq!(input.push_digit('a'), Err(Error::InvalidInput('a')));
        assert_eq!(input.push_digit('٣'), Err(Error::InvalidInput('٣')));
        assert_eq!(input.export_raw(), "000004");
    }

    #[test]
    fn test_push_number_stops_at_first_error() {
        let mut input = DurationString::new();
        assert_eq!(input.push_number("12x3"), Err(Error::InvalidInput('x')));
        assert_eq!(input.export_raw(), "000012");
    }

    #[test]
    fn test_overflow_keeps_first_digits() {
        let mut input = DurationString::new();
        input.push_number("1234567").unwrap();
        assert_eq!(input.export_raw(), "123456");
        assert_well_formed(&input);
    }

    #[test]
    fn test_overflow_after_zero_prefix() {
        // The first digit was a zero, so it never took a slot.
        let mut input = DurationString::new();
        input.push_number("0234567").unwrap();
        assert_eq!(input.export_raw(), "234567");
    }

    #[test]
    fn test_push_double_zero() {
        let mut input = DurationString::new();
        input.push_number("00").unwrap();
        assert_eq!(input.export_raw(), "000000");

        input.push_number("1").unwrap();
        input.push_number("00").unwrap();
        assert_eq!(input.export_raw(), "000100");
        assert_eq!(input.duration(), MILLIS_PER_MINUTE);
    }

    #[test]
    fn test_pop_digit_to_floor() {
        let mut input = DurationString::new();
        input.push_number("123").unwrap();

        input.pop_digit();
        assert_eq!(input.export_raw(), "000012");

        for _ in 0..10 {
            input.pop_digit();
            assert_well_formed(&input);
        }
        assert_eq!(input.export_raw(), "000000");
    }

    #[test]
    fn test_clear() {
        let mut input = DurationString::with_unit_mode(UnitMode::HoursMinutes);
        input.push_number("4321").unwrap();
        input.clear();
        assert_eq!(input.export_raw(), "0000");
    }

    #[test]
    fn test_fields_per_mode() {
        let mut input = DurationString::new();
        input.push_number("123456").unwrap();
        assert_eq!(input.hours_field(), "12");
        assert_eq!(input.minutes_field(), "34");
        assert_eq!(input.seconds_field(), "56");

        let mut input = DurationString::with_unit_mode(UnitMode::HoursMinutes);
        input.push_number("1234").unwrap();
        assert_eq!(input.hours_field(), "12");
        assert_eq!(input.minutes_field(), "34");
        assert_eq!(input.seconds_field(), "00");

        let mut input = DurationString::with_unit_mode(UnitMode::MinutesSeconds);
        input.push_number("1234").unwrap();
        assert_eq!(input.hours_field(), "00");
        assert_eq!(input.minutes_field(), "12");
        assert_eq!(input.seconds_field(), "34");
    }

    #[test]
    fn test_typed_fields_are_not_normalized() {
        // 99 seconds is a valid entry and reads back as such.
        let mut input = DurationString::new();
        input.push_number("99").unwrap();
        assert_eq!(input.duration(), 99 * MILLIS_PER_SECOND);
    }

    #[test]
    fn test_round_trip_for_every_field_combination() {
        let mut input = DurationString::new();
        for h in 0..=MAX_FIELD {
            for m in 0..=MAX_FIELD {
                for s in 0..=MAX_FIELD {
                    let d = duration_of(h, m, s);
                    input.set_duration(d);
                    assert_well_formed(&input);
                    if hours_of(d) <= MAX_FIELD {
                        assert_eq!(input.duration(), d, "h={h} m={m} s={s}");
                    } else {
                        // Minutes or seconds past 59 carried the total to 100h.
                        assert_eq!(input.export_raw(), "999999", "h={h} m={m} s={s}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_carry_into_saturation() {
        let mut input = DurationString::new();
        input.set_duration(duration_of(99, 59, 60));
        assert_eq!(input.export_raw(), "999999");

        input.set_duration(duration_of(99, 59, 59));
        assert_eq!(input.export_raw(), "995959");
    }

    #[test]
    fn test_set_duration_drops_millis() {
        let mut input = DurationString::new();
        input.set_duration(duration_of(0, 1, 2) + 999);
        assert_eq!(input.export_raw(), "000102");
    }

    #[test]
    fn test_saturation() {
        let mut input = DurationString::new();
        input.set_duration(100 * MILLIS_PER_HOUR);
        assert_eq!(input.export_raw(), "999999");
        assert_eq!(input.duration(), duration_of(99, 99, 99));
    }

    #[test]
    fn test_saturation_is_whole_buffer() {
        // 100 minutes in m/s mode overflows the minutes, and the seconds
        // saturate with them even though 5 would fit.
        let mut input = DurationString::with_unit_mode(UnitMode::MinutesSeconds);
        input.set_duration(duration_of(0, 100, 5));
        assert_eq!(input.export_raw(), "9999");

        let mut input = DurationString::with_unit_mode(UnitMode::HoursMinutes);
        input.set_duration(duration_of(120, 0, 0));
        assert_eq!(input.export_raw(), "9999");
        assert_eq!(input.duration(), duration_of(99, 99, 0));
    }

    #[test]
    fn test_minutes_seconds_folds_hours() {
        let mut input = DurationString::with_unit_mode(UnitMode::MinutesSeconds);
        input.set_duration(duration_of(1, 39, 30));
        assert_eq!(input.export_raw(), "9930");
        assert_eq!(input.duration(), duration_of(0, 99, 30));
    }

    #[test]
    fn test_hours_minutes_drops_seconds() {
        let mut input = DurationString::with_unit_mode(UnitMode::HoursMinutes);
        input.set_duration(duration_of(3, 15, 45));
        assert_eq!(input.export_raw(), "0315");
        assert_eq!(input.duration(), duration_of(3, 15, 0));
    }

    #[test]
    fn test_mode_switch_re_renders() {
        let mut input = DurationString::new();
        input.push_number("10203").unwrap();
        assert_eq!(input.duration(), duration_of(1, 2, 3));

        input.set_unit_mode(UnitMode::MinutesSeconds);
        assert_eq!(input.export_raw(), "6203");
        assert_eq!(input.duration(), 62 * MILLIS_PER_MINUTE + 3 * MILLIS_PER_SECOND);

        input.set_unit_mode(UnitMode::HoursMinutesSeconds);
        assert_eq!(input.export_raw(), "010203");
    }

    #[test]
    fn test_mode_switch_saturates() {
        let mut input = DurationString::new();
        input.push_number("20000").unwrap();
        input.set_unit_mode(UnitMode::MinutesSeconds);
        assert_eq!(input.export_raw(), "9999");
    }

    #[test]
    fn test_export_import() {
        let mut input = DurationString::new();
        input.push_number("4530").unwrap();
        let saved = input.export_raw().to_string();

        let mut restored = DurationString::new();
        restored.import_raw(&saved);
        assert_eq!(restored, input);
    }

    #[test]
    fn test_import_refits_width() {
        let mut input = DurationString::with_unit_mode(UnitMode::MinutesSeconds);
        input.import_raw("123456");
        assert_eq!(input.export_raw(), "1234");

        input.import_raw("12:3x4");
        assert_eq!(input.export_raw(), "1234");

        input.import_raw("");
        assert_eq!(input.export_raw(), "0000");
    }

    #[test]
    fn test_invariants_hold_across_mixed_operations() {
        let mut input = DurationString::new();
        let modes = [
            UnitMode::HoursMinutesSeconds,
            UnitMode::HoursMinutes,
            UnitMode::MinutesSeconds,
        ];

        for (i, digit) in "9081726354".chars().enumerate() {
            input.push_digit(digit).unwrap();
            assert_well_formed(&input);
            if i % 3 == 0 {
                input.pop_digit();
                assert_well_formed(&input);
            }
            if i % 4 == 0 {
                input.set_unit_mode(modes[i % modes.len()]);
                assert_well_formed(&input);
            }
            input.set_duration(i as u64 * 7 * MILLIS_PER_MINUTE);
            assert_well_formed(&input);
        }

        input.clear();
        assert_well_formed(&input);
    }

    #[test]
    fn test_display() {
        let mut input = DurationString::new();
        input.push_number("42").unwrap();
        assert_eq!(input.to_string(), "000042");
    }
}
