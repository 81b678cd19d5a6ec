use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides of an encounter.
///
/// The attacker is the player's side (front sprite), the defender the opponent's.
/// `index()` is the turn number used by the view: 0 for the attacker, 1 for the defender.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actor {
    Attacker,
    Defender,
}

impl Actor {
    pub const BOTH: [Actor; 2] = [Actor::Attacker, Actor::Defender];

    pub fn index(self) -> usize {
        match self {
            Actor::Attacker => 0,
            Actor::Defender => 1,
        }
    }

    pub fn opposite(self) -> Actor {
        match self {
            Actor::Attacker => Actor::Defender,
            Actor::Defender => Actor::Attacker,
        }
    }

    /// The side that plays first in a round.
    pub fn first(atk_first: bool) -> Actor {
        if atk_first {
            Actor::Attacker
        } else {
            Actor::Defender
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Actor::Attacker => "attacker",
            Actor::Defender => "defender",
        };
        write!(f, "{}", display_name)
    }
}

/// Direction of a cursor move in a selection menu.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Previous,
    Next,
}

/// Interaction mode of the battle view.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// The player picks an action, then an attack.
    #[default]
    Selection,
    /// The resolved turn script is being played back.
    Execution,
}

/// Terminal results of an encounter, as announced by the resolver's script.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Won,
    Lost,
    Fled,
}

/// Value returned by the view every frame.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The encounter goes on, currently in the given phase.
    Continue(Phase),
    /// The encounter is over.
    Ended(BattleOutcome),
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Ended(_))
    }
}
