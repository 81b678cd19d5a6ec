use crate::{Actor, BattleOutcome};
use serde::{Deserialize, Serialize};

/// What one side committed to for the current round.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnChoice {
    /// Nothing chosen yet.
    #[default]
    Pending,
    // The index refers to the move's position (0-3) in the active unit's move list.
    Attack { move_index: usize },
    Item { item_index: usize },
    // The index refers to the unit's position (0-5) in the team.
    Switch { team_index: usize },
    Run,
}

/// Per-side record of the round's choice, produced by the resolver and read once per round.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnData {
    pub choice: TurnChoice,
}

impl TurnData {
    pub fn attack(move_index: usize) -> Self {
        Self {
            choice: TurnChoice::Attack { move_index },
        }
    }

    pub fn run() -> Self {
        Self {
            choice: TurnChoice::Run,
        }
    }
}

/// One animation step applied to a sprite. One step plays per frame.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Transformation {
    Move { dx: f32, dy: f32 },
    Rotate { degrees: f32 },
    Scale { x: f32, y: f32 },
    Wait,
}

/// The visual or state effect carried by a [`TurnAction`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum TurnEffect {
    /// Opens a dialog; the text is paged by the view.
    Message { text: String },
    /// Changes the target's HP by `delta` (negative for damage). The bar is animated.
    UpdateHp { target: Actor, delta: i32 },
    /// Plays an attack animation on the acting side. An empty list means the default lunge.
    Attack {
        #[serde(default)]
        anims: Vec<Transformation>,
    },
    /// The acting side sends out the unit at `team_index`.
    Switch { team_index: usize },
    /// The target's active unit faints.
    Faint { target: Actor },
    Victory,
    Defeat,
    Fled,
    /// Any effect this view does not know how to play. Skipped during playback.
    #[serde(other)]
    Unknown,
}

impl TurnEffect {
    /// The encounter result announced by this effect, if it is a terminal one.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self {
            TurnEffect::Victory => Some(BattleOutcome::Won),
            TurnEffect::Defeat => Some(BattleOutcome::Lost),
            TurnEffect::Fled => Some(BattleOutcome::Fled),
            _ => None,
        }
    }
}

/// One atomic instruction of the playback script.
///
/// `actor` is the side whose sub-turn produced the action.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TurnAction {
    pub actor: Actor,
    pub effect: TurnEffect,
}

impl TurnAction {
    pub fn new(actor: Actor, effect: TurnEffect) -> Self {
        Self { actor, effect }
    }

    pub fn message(actor: Actor, text: &str) -> Self {
        Self::new(
            actor,
            TurnEffect::Message {
                text: text.to_string(),
            },
        )
    }

    pub fn update_hp(actor: Actor, target: Actor, delta: i32) -> Self {
        Self::new(actor, TurnEffect::UpdateHp { target, delta })
    }

    pub fn attack(actor: Actor) -> Self {
        Self::new(actor, TurnEffect::Attack { anims: Vec::new() })
    }
}

/// A fully resolved round, as a resolver would hand it over.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoundScript {
    pub atk: TurnData,
    pub def: TurnData,
    pub atk_first: bool,
    pub actions: Vec<TurnAction>,
}

/// A recorded sequence of rounds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ActionScript {
    pub rounds: Vec<RoundScript>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_effect_type_deserializes_to_unknown() {
        let json = r#"{ "actor": "Defender", "effect": { "type": "WeatherChange" } }"#;
        let action: TurnAction = serde_json::from_str(json).unwrap();
        assert_eq!(action.actor, Actor::Defender);
        assert_eq!(action.effect, TurnEffect::Unknown);
    }

    #[test]
    fn test_attack_without_anims_uses_empty_list() {
        let json = r#"{ "actor": "Attacker", "effect": { "type": "Attack" } }"#;
        let action: TurnAction = serde_json::from_str(json).unwrap();
        assert_eq!(action, TurnAction::attack(Actor::Attacker));
    }

    #[test]
    fn test_terminal_effects_map_to_outcomes() {
        assert_eq!(TurnEffect::Victory.outcome(), Some(BattleOutcome::Won));
        assert_eq!(TurnEffect::Defeat.outcome(), Some(BattleOutcome::Lost));
        assert_eq!(TurnEffect::Fled.outcome(), Some(BattleOutcome::Fled));
        assert_eq!(TurnEffect::Unknown.outcome(), None);
    }
}
