use crate::ElementType;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MoveSlot {
    pub name: String,
    pub element: ElementType,
    pub pp: u8,
    pub max_pp: u8,
}

impl MoveSlot {
    pub fn new(name: &str, element: ElementType, max_pp: u8) -> Self {
        Self {
            name: name.to_string(),
            element,
            pp: max_pp,
            max_pp,
        }
    }
}

/// A creature as the view needs to see it: labels, level, HP and its four move slots.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Unit {
    pub nickname: String,
    pub species: String,
    pub level: u8,
    pub hp: u16,
    pub max_hp: u16,
    pub moves: [Option<MoveSlot>; 4],
}

impl Unit {
    pub fn new(nickname: &str, species: &str, level: u8, max_hp: u16) -> Self {
        Self {
            nickname: nickname.to_string(),
            species: species.to_string(),
            level,
            hp: max_hp,
            max_hp,
            moves: [const { None }; 4],
        }
    }

    pub fn with_moves(mut self, moves: Vec<MoveSlot>) -> Self {
        for (i, slot) in moves.into_iter().take(4).enumerate() {
            self.moves[i] = Some(slot);
        }
        self
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }
}

/// A roster of up to six units. Read-only from the view's perspective.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Team {
    pub trainer: String,
    pub units: Vec<Unit>,
}

impl Team {
    pub const MAX_UNITS: usize = 6;

    pub fn new(trainer: &str, units: Vec<Unit>) -> Self {
        Self {
            trainer: trainer.to_string(),
            units: units.into_iter().take(Self::MAX_UNITS).collect(),
        }
    }

    pub fn unit(&self, index: usize) -> Option<&Unit> {
        self.units.get(index)
    }

    /// Index of the first unit able to fight, if any.
    pub fn first_usable(&self) -> Option<usize> {
        self.units.iter().position(|unit| !unit.is_fainted())
    }
}
