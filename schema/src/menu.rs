use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Entries of the top-level action menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, EnumCount)]
pub enum ActionEntry {
    Attack,
    Bag,
    Team,
    Run,
}

/// Number of slots of both selection menus. The attack menu has one slot per move.
pub const MENU_SLOTS: usize = ActionEntry::COUNT;

impl ActionEntry {
    /// Entries in display order.
    pub fn all() -> impl Iterator<Item = ActionEntry> {
        Self::iter()
    }

    pub fn from_index(index: usize) -> Option<ActionEntry> {
        match index {
            0 => Some(ActionEntry::Attack),
            1 => Some(ActionEntry::Bag),
            2 => Some(ActionEntry::Team),
            3 => Some(ActionEntry::Run),
            _ => None,
        }
    }

    /// Lookup key of the localized menu label.
    pub fn label_key(self) -> &'static str {
        match self {
            ActionEntry::Attack => "battle.menu.attack",
            ActionEntry::Bag => "battle.menu.bag",
            ActionEntry::Team => "battle.menu.team",
            ActionEntry::Run => "battle.menu.run",
        }
    }
}
