#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-durationpicker/")]

//! # bubbletea-durationpicker
//!
//! A keypad-style duration picker for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs), plus a modal dialog
//! that wraps it.
//!
//! ## Overview
//!
//! The user types digits and they fill a fixed-width display from the right,
//! the way a kitchen timer keypad works. Typing `1`, `3`, `0` shows
//! `00h 01m 30s`. The picker follows the Elm Architecture pattern with
//! `update()` and `view()` methods, like every other bubbletea component.
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | `DurationPicker` | Digit entry field showing hours, minutes and seconds |
//! | `DurationDialog` | Bordered box with a title and OK/Cancel around a picker |
//!
//! Both are driven by [`durationpicker::DurationString`], a small digit-buffer
//! state machine that can also be used on its own.
//!
//! ## Unit Modes
//!
//! ```rust
//! use bubbletea_durationpicker::prelude::*;
//!
//! let mut picker = durationpicker_new();
//! picker.set_duration(3_723_000); // 1h 2m 3s
//! assert_eq!(picker.export_raw(), "010203");
//!
//! // Hours fold into the minutes.
//! picker.set_unit_mode(UnitMode::MinutesSeconds);
//! assert_eq!(picker.export_raw(), "6203");
//! ```
//!
//! ## Focus Management
//!
//! Both components implement the [`Component`] trait:
//!
//! ```rust
//! use bubbletea_durationpicker::prelude::*;
//!
//! fn toggle<T: Component>(component: &mut T) {
//!     if component.focused() {
//!         component.blur();
//!     } else {
//!         let _ = component.focus();
//!     }
//! }
//!
//! let mut picker = durationpicker_new();
//! toggle(&mut picker);
//! assert!(Component::focused(&picker));
//! ```
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! bubbletea-durationpicker = "0.1.0"
//! bubbletea-rs = "0.0.7"
//! crossterm = "0.29"
//! ```

pub mod dialog;
pub mod durationpicker;
pub mod durationutil;
pub mod key;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused component receives key input; a blurred one ignores it.
/// `focus()` may return a command to run when focus is gained.
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use dialog::{
    new as dialog_new, new_with_unit_mode as dialog_new_with_unit_mode,
    CancelMsg as DialogCancelMsg, DurationSetMsg, KeyMap as DialogKeyMap,
    Model as DurationDialog,
};
pub use durationpicker::{
    new as durationpicker_new, new_with_options as durationpicker_new_with_options,
    DurationChangedMsg, DurationString, Error, KeyMap as DurationPickerKeyMap,
    Model as DurationPicker, PickerOption, SetDurationMsg, UnitMode,
};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_durationpicker::prelude::*;
///
/// let dialog = dialog_new(0);
/// assert!(!dialog.visible());
/// ```
pub mod prelude {
    pub use crate::dialog::{
        new as dialog_new, new_with_unit_mode as dialog_new_with_unit_mode,
        CancelMsg as DialogCancelMsg, DurationSetMsg, KeyMap as DialogKeyMap,
        Model as DurationDialog,
    };
    pub use crate::durationpicker::{
        new as durationpicker_new, new_with_options as durationpicker_new_with_options,
        with_display_style, with_duration, with_num_pad, with_unit_mode, DurationChangedMsg,
        DurationString, Error, KeyMap as DurationPickerKeyMap, Model as DurationPicker,
        PickerOption, SetDurationMsg, UnitMode,
    };
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys,
        with_keys_str, Binding, Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::Component;
}
