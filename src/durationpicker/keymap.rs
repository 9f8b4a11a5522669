//! Key bindings for the durationpicker component.

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// KeyMap is the key bindings for the picker's keypad actions.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Enter a digit. The digit is taken from the key itself.
    pub digit: Binding,
    /// Enter two zeros at once, like the keypad's `00` button.
    pub double_zero: Binding,
    /// Delete the rightmost digit.
    pub backspace: Binding,
    /// Reset all fields to zero.
    pub clear: Binding,
    /// Paste digits from the clipboard.
    pub paste: Binding,
}

/// Default picker bindings: `0`-`9`, alt+0 for `00`, backspace, delete/ctrl+u
/// and ctrl+v.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        digit: new_binding(vec![
            with_keys_str(&["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]),
            with_help("0-9", "enter digit"),
        ]),
        double_zero: new_binding(vec![with_keys_str(&["alt+0"]), with_help("alt+0", "enter 00")]),
        backspace: new_binding(vec![
            with_keys_str(&["backspace", "ctrl+h"]),
            with_help("⌫", "delete digit"),
        ]),
        clear: new_binding(vec![
            with_keys_str(&["delete", "ctrl+u"]),
            with_help("del", "clear"),
        ]),
        paste: new_binding(vec![with_keys_str(&["ctrl+v"]), with_help("ctrl+v", "paste")]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.digit, &self.backspace, &self.clear]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.digit, &self.double_zero],
            vec![&self.backspace, &self.clear, &self.paste],
        ]
    }
}
