//! Duration picker component for Bubble Tea applications.
//!
//! The picker lets the user type a duration on a numeric keypad. Digits fill
//! a fixed-width display from the right, so typing `1`, `3`, `0` reads
//! `00h 01m 30s`. Backspace removes the last digit and clear resets to zero.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_durationpicker::durationpicker::{new, UnitMode};
//!
//! let mut picker = new().with_unit_mode(UnitMode::HoursMinutes);
//! picker.focus();
//! picker.set_duration(90 * 60_000);
//! assert_eq!(picker.export_raw(), "0130");
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Model as BubbleTeaModel, Msg, Cmd};
//! use bubbletea_durationpicker::durationpicker::{new, DurationChangedMsg, Model};
//!
//! struct App {
//!     picker: Model,
//!     last: u64,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut picker = new().with_num_pad(true);
//!         picker.focus();
//!         (Self { picker, last: 0 }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(changed) = msg.downcast_ref::<DurationChangedMsg>() {
//!             if changed.id == self.picker.id() {
//!                 self.last = changed.duration;
//!             }
//!         }
//!         self.picker.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.picker.view()
//!     }
//! }
//! ```
//!
//! # Persistence
//!
//! [`Model::export_raw`] returns the raw digit string; [`Model::import_raw`]
//! re-enters it digit by digit, so it always fits the current unit mode.

pub mod buffer;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod types;
pub mod view;


// Re-export main types and functions for public API
pub use buffer::DurationString;
pub use keymap::{default_key_map, KeyMap};
pub use model::{
    new, new_with_options, paste, with_display_style, with_duration, with_num_pad,
    with_unit_mode, Model, PickerOption,
};
pub use types::{
    DurationChangedListener, DurationChangedMsg, Error, PasteErrMsg, PasteMsg, SetDurationMsg,
    UnitMode,
};
