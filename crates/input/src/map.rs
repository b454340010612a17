//! Mapping from typed lines to menu selections.

use crate::types::MenuChoice;

/// One line of user input, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Menu(MenuChoice),
    /// Anything else, with the trimmed text as typed
    Invalid(String),
}

impl Selection {
    /// The menu choice, or `None` for invalid input
    pub fn choice(&self) -> Option<MenuChoice> {
        match self {
            Selection::Menu(choice) => Some(*choice),
            Selection::Invalid(_) => None,
        }
    }

    /// Numeric code for the journal; `None` when the input was not an integer menu code
    pub fn code(&self) -> Option<i64> {
        match self {
            Selection::Menu(choice) => Some(choice.code() as i64),
            Selection::Invalid(raw) => raw.parse().ok(),
        }
    }
}

/// Map a line of input to a selection.
pub fn parse_selection(line: &str) -> Selection {
    let trimmed = line.trim();
    match trimmed.parse::<i64>().ok().and_then(MenuChoice::from_code) {
        Some(choice) => Selection::Menu(choice),
        None => Selection::Invalid(trimmed.to_string()),
    }
}
