use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Elemental type of an attack, shown next to the PP counter in the attack menu.
///
/// The view only displays it; effectiveness is the resolver's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, AsRefStr, EnumIter)]
pub enum ElementType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Typeless,
}

impl ElementType {
    pub fn all() -> impl Iterator<Item = ElementType> {
        Self::iter()
    }

    /// Lookup key of the localized type label, e.g. `type.fire`.
    pub fn label_key(self) -> String {
        format!("type.{}", self.as_ref().to_lowercase())
    }
}
