use std::fmt;

use serde::{Deserialize, Serialize};

use super::status_table::{DEFAULT_STATE, SUPPORT_STATUS_ITEMS};

/// Support state of a feature, as written in the data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupportStatus {
    Ok,
    No,
    Maybe,
    WontDo,
    Wip,
    MenuOption,
    Preview,
    Alpha,
    Beta,
    Ready,
}

impl SupportStatus {
    /// The tag used in data files.
    pub fn as_str(self) -> &'static str {
        match self {
            SupportStatus::Ok => "ok",
            SupportStatus::No => "no",
            SupportStatus::Maybe => "maybe",
            SupportStatus::WontDo => "wont-do",
            SupportStatus::Wip => "wip",
            SupportStatus::MenuOption => "menu-option",
            SupportStatus::Preview => "preview",
            SupportStatus::Alpha => "alpha",
            SupportStatus::Beta => "beta",
            SupportStatus::Ready => "ready",
        }
    }
}

/// The state of the built-in table's default entry.
impl Default for SupportStatus {
    fn default() -> Self {
        SUPPORT_STATUS_ITEMS[DEFAULT_STATE].state
    }
}

impl fmt::Display for SupportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
