use crate::battle::engine::BattleEngine;
use crate::battle::handshake::TurnHandshake;
use schema::{ElementType, GameStatus, MoveSlot, Phase, Team, TurnAction, TurnData, Unit};
use std::collections::VecDeque;

/// A builder for creating test units with common defaults.
///
/// # Example
/// ```ignore
/// let unit = TestUnitBuilder::new("Sparky", 30)
///     .with_hp(12)
///     .with_moves(vec!["Tackle"])
///     .build();
/// ```
pub struct TestUnitBuilder {
    nickname: String,
    max_hp: u16,
    hp: Option<u16>,
    level: u8,
    moves: Vec<String>,
}

impl TestUnitBuilder {
    /// Creates a new builder for a unit with the given nickname and max HP.
    pub fn new(nickname: &str, max_hp: u16) -> Self {
        Self {
            nickname: nickname.to_string(),
            max_hp,
            hp: None,
            level: 10,
            moves: vec!["Tackle".to_string()],
        }
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_moves(mut self, moves: Vec<&str>) -> Self {
        self.moves = moves.into_iter().map(str::to_string).collect();
        self
    }

    pub fn build(self) -> Unit {
        let moves = self
            .moves
            .iter()
            .map(|name| MoveSlot::new(name, ElementType::Normal, 35))
            .collect();
        let mut unit =
            Unit::new(&self.nickname, "Blob", self.level, self.max_hp).with_moves(moves);
        if let Some(hp) = self.hp {
            unit.hp = hp;
        }
        unit
    }
}

/// A one-unit team at full HP.
pub fn blob_team(trainer: &str, max_hp: u16) -> Team {
    Team::new(trainer, vec![TestUnitBuilder::new(trainer, max_hp).build()])
}

/// What happened while a round was played back.
#[derive(Debug, Default)]
pub struct RoundTrace {
    /// Turn numbers in the order they were seen during execution, consecutive duplicates removed.
    pub turn_numbers: Vec<usize>,
    /// How many times the handshake went from activated back to awaiting choices.
    pub handshake_clears: usize,
    /// Displayed HP of both sides after every frame.
    pub hp_frames: Vec<[i32; 2]>,
    pub dialogs_seen: usize,
    pub frames: usize,
    pub final_status: Option<GameStatus>,
}

/// Activates the handshake and steps the engine until it is back in selection or the
/// encounter ends, passing every dialog as soon as it shows up.
pub fn play_round(
    engine: &mut BattleEngine<'_, '_>,
    queue: &mut VecDeque<TurnAction>,
    handshake: &mut TurnHandshake,
    atk_first: bool,
) -> RoundTrace {
    let atk = TurnData::attack(0);
    let def = TurnData::attack(0);
    let mut trace = RoundTrace::default();
    handshake.activate();

    for _ in 0..10_000 {
        let was_activated = handshake.is_activated();
        let status = engine.step(&atk, &def, queue, handshake, atk_first);
        trace.frames += 1;
        if was_activated && !handshake.is_activated() {
            trace.handshake_clears += 1;
        }
        if engine.is_turn_launched() && trace.turn_numbers.last() != Some(&engine.turn_number()) {
            trace.turn_numbers.push(engine.turn_number());
        }
        trace.hp_frames.push([
            engine.displayed_hp(schema::Actor::Attacker),
            engine.displayed_hp(schema::Actor::Defender),
        ]);
        if engine.dialog().is_some_and(|d| !d.is_over()) {
            trace.dialogs_seen += 1;
            engine.pass_dialog();
            while engine.dialog().is_some_and(|d| !d.is_over()) {
                engine.pass_dialog();
            }
        }
        trace.final_status = Some(status);
        if status == GameStatus::Continue(Phase::Selection) || status.is_over() {
            return trace;
        }
    }
    panic!("round did not finish within 10000 frames");
}
