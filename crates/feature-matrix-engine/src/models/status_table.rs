use std::collections::BTreeSet;

use super::support_status::SupportStatus;

/// Display data for one [`SupportStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportStatusItem {
    pub state: SupportStatus,
    /// Glyph shown in table cells. Some carry a trailing pad space.
    pub glyph: &'static str,
    pub short: &'static str,
    pub description: &'static str,
    /// Listed in the legend even when no table uses it.
    pub always_show: bool,
}

/// Index into [`SUPPORT_STATUS_ITEMS`] of the status used when data omits one.
pub const DEFAULT_STATE: usize = 1;

pub const SUPPORT_STATUS_ITEMS: [SupportStatusItem; 10] = [
    SupportStatusItem {
        state: SupportStatus::Ok,
        glyph: "✓ ",
        short: "Ok",
        description: "Ready, but evolving!",
        always_show: true,
    },
    SupportStatusItem {
        state: SupportStatus::No,
        glyph: "✗ ",
        short: "No",
        description: "Unknown, maybe in progress",
        always_show: true,
    },
    SupportStatusItem {
        state: SupportStatus::Maybe,
        glyph: "？",
        short: "Maybe",
        description: "In progress, either mod or KSA dev team",
        always_show: true,
    },
    SupportStatusItem {
        state: SupportStatus::WontDo,
        glyph: "⛔",
        short: "Won't Do",
        description: "KSA dev team wont implement it",
        always_show: true,
    },
    SupportStatusItem {
        state: SupportStatus::Wip,
        glyph: "⚠",
        short: "WIP",
        description: "Work in progress, but not ready for release",
        always_show: true,
    },
    SupportStatusItem {
        state: SupportStatus::MenuOption,
        glyph: "👁",
        short: "Via Menu",
        description: "Enabled only from menu",
        always_show: true,
    },
    SupportStatusItem {
        state: SupportStatus::Preview,
        glyph: "👀",
        short: "Preview",
        description: "Preview mode",
        always_show: false,
    },
    SupportStatusItem {
        state: SupportStatus::Alpha,
        glyph: "A",
        short: "Alpha",
        description: "Alpha testing phase",
        always_show: false,
    },
    SupportStatusItem {
        state: SupportStatus::Beta,
        glyph: "B",
        short: "Beta",
        description: "Beta testing phase",
        always_show: false,
    },
    SupportStatusItem {
        state: SupportStatus::Ready,
        glyph: "✅",
        short: "Ready",
        description: "Ready for release",
        always_show: false,
    },
];

/// Ordered status lookup used by rendering code.
///
/// `Default` is the built-in [`SUPPORT_STATUS_ITEMS`]; tests and callers can
/// inject their own list with [`StatusTable::from_items`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTable {
    items: Vec<SupportStatusItem>,
}

impl Default for StatusTable {
    fn default() -> Self {
        Self::from_items(SUPPORT_STATUS_ITEMS.to_vec())
    }
}

impl StatusTable {
    pub fn from_items(items: Vec<SupportStatusItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[SupportStatusItem] {
        &self.items
    }

    /// First item for `state`, if the table has one.
    pub fn get(&self, state: SupportStatus) -> Option<&SupportStatusItem> {
        self.items.iter().find(|item| item.state == state)
    }

    pub fn default_item(&self) -> Option<&SupportStatusItem> {
        self.items.get(DEFAULT_STATE)
    }

    /// Items to explain in a legend, in table order.
    ///
    /// Includes every `always_show` item and every item whose state is in
    /// `used`, or everything when `show_all` is set.
    pub fn legend(&self, used: &BTreeSet<SupportStatus>, show_all: bool) -> Vec<&SupportStatusItem> {
        self.items
            .iter()
            .filter(|item| show_all || item.always_show || used.contains(&item.state))
            .collect()
    }
}
