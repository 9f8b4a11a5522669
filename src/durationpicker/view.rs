//! View rendering for the durationpicker component.

use super::model::Model;
use lipgloss_extras::lipgloss;

/// Keypad layout, top row first. `00` enters two zeros and `⌫` deletes the
/// last digit.
pub(super) const NUM_PAD: [[&str; 3]; 4] = [
    ["1", "2", "3"],
    ["4", "5", "6"],
    ["7", "8", "9"],
    ["00", "0", "⌫"],
];

impl Model {
    /// Renders the active fields, e.g. `01h 02m 03s`, followed by the keypad
    /// when [`show_num_pad`](Model::show_num_pad) is set.
    pub fn view(&self) -> String {
        let display = self.display_view();
        if !self.show_num_pad {
            return display;
        }
        format!("{}\n\n{}", display, self.num_pad_view())
    }

    /// Renders only the display row.
    pub fn display_view(&self) -> String {
        let mode = self.unit_mode();
        let mut fields = Vec::with_capacity(3);

        if mode.has_hours() {
            fields.push(self.render_field(self.hours_field(), &self.hours_label));
        }
        fields.push(self.render_field(self.minutes_field(), &self.minutes_label));
        if mode.has_seconds() {
            fields.push(self.render_field(self.seconds_field(), &self.seconds_label));
        }

        fields.join(" ")
    }

    fn render_field(&self, value: &str, label: &str) -> String {
        format!(
            "{}{}",
            self.display_style.clone().inline(true).render(value),
            self.unit_style.clone().inline(true).render(label)
        )
    }

    /// Renders the on-screen keypad as a 3x4 grid.
    pub fn num_pad_view(&self) -> String {
        NUM_PAD
            .iter()
            .map(|row| {
                let buttons: Vec<String> = row
                    .iter()
                    .map(|label| self.button_style.render(&format!("{:^3}", label)))
                    .collect();
                let parts: Vec<&str> = buttons.iter().map(String::as_str).collect();
                lipgloss::join_horizontal(lipgloss::TOP, &parts)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
