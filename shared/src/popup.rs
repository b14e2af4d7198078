use core::fmt::{self, Display, Formatter, Write};

use html_escaper::HtmlEscaper;

use crate::building::Building;

/// Separator between the label and the count line in a popup.
pub const POPUP_SEPARATOR: &str = "<br>";

/// Display wrapper that HTML-escapes its contents.
struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        HtmlEscaper(f).write_str(self.0)
    }
}

/// Popup HTML for a marker. The label is escaped since feed messages are free text.
pub fn popup_html(label: &str, count: u32) -> String {
    format!("{}{POPUP_SEPARATOR}Attendance logs: {count}", Escaped(label))
}

/// Counter text written into a building's display element.
pub fn attendance_text(building: Building, count: u32) -> String {
    format!("{}: {count}", building.display_label())
}
