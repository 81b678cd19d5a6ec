//! Stand-ins for the external turn resolver, used to drive the view headlessly.
//!
//! The real resolver computes damage and outcomes; these only produce plausible
//! [`RoundScript`]s so the view has something to play back.

use crate::battle::data::BattleData;
use crate::errors::{ScriptError, ScriptResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schema::{
    ActionScript, Actor, RoundScript, TurnAction, TurnChoice, TurnData, TurnEffect,
};
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

/// Anything that can turn the player's choice into a resolved round.
pub trait Resolver {
    /// Returns `None` once no further round can be produced.
    fn resolve(&mut self, data: &BattleData<'_>, atk: TurnData) -> Option<RoundScript>;
}

/// Replays a recorded [`ActionScript`], ignoring the player's input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedResolver {
    rounds: VecDeque<RoundScript>,
}

impl ScriptedResolver {
    pub fn new(script: ActionScript) -> Self {
        Self {
            rounds: script.rounds.into(),
        }
    }

    pub fn from_json_str(content: &str) -> ScriptResult<Self> {
        let script: ActionScript = serde_json::from_str(content)?;
        Ok(Self::new(script))
    }

    pub fn load(path: &Path) -> ScriptResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let resolver = Self::from_json_str(&content)?;
        tracing::info!(path = %path.display(), rounds = resolver.remaining(), "action script loaded");
        Ok(resolver)
    }

    pub fn remaining(&self) -> usize {
        self.rounds.len()
    }
}

impl Resolver for ScriptedResolver {
    fn resolve(&mut self, _data: &BattleData<'_>, _atk: TurnData) -> Option<RoundScript> {
        self.rounds.pop_front()
    }
}

/// Seeded resolver that rolls damage, speed order and the opponent's move.
#[derive(Debug, Clone)]
pub struct RandomResolver {
    rng: StdRng,
    min_damage: i32,
    max_damage: i32,
    finished: bool,
}

impl RandomResolver {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            min_damage: 3,
            max_damage: 12,
            finished: false,
        }
    }

    fn opponent_choice(&mut self, data: &BattleData<'_>) -> TurnData {
        let known = data
            .active_unit(Actor::Defender)
            .map(|unit| unit.moves.iter().filter(|slot| slot.is_some()).count())
            .unwrap_or(0);
        if known == 0 {
            return TurnData::default();
        }
        TurnData::attack(self.rng.random_range(0..known))
    }

    /// Appends one side's sub-turn. Returns `true` when it ended the encounter.
    fn play_side(
        &mut self,
        data: &BattleData<'_>,
        hp: &mut [i32; 2],
        actor: Actor,
        choice: TurnData,
        actions: &mut Vec<TurnAction>,
    ) -> bool {
        let Some(unit) = data.active_unit(actor) else {
            return false;
        };
        let target = actor.opposite();
        match choice.choice {
            TurnChoice::Attack { move_index } => {
                let Some(slot) = unit.moves.get(move_index).and_then(Option::as_ref) else {
                    return false;
                };
                actions.push(TurnAction::message(
                    actor,
                    &format!("{} used {}!", unit.nickname, slot.name),
                ));
                actions.push(TurnAction::attack(actor));
                let damage = self.rng.random_range(self.min_damage..=self.max_damage);
                actions.push(TurnAction::update_hp(actor, target, -damage));
                hp[target.index()] = (hp[target.index()] - damage).max(0);
                if hp[target.index()] == 0 {
                    let fallen = data
                        .active_unit(target)
                        .map(|u| u.nickname.as_str())
                        .unwrap_or("The foe");
                    actions.push(TurnAction::message(actor, &format!("{} fainted!", fallen)));
                    actions.push(TurnAction::new(actor, TurnEffect::Faint { target }));
                    let end = match actor {
                        Actor::Attacker => TurnEffect::Victory,
                        Actor::Defender => TurnEffect::Defeat,
                    };
                    actions.push(TurnAction::new(actor, end));
                    return true;
                }
                false
            }
            TurnChoice::Item { .. } => {
                let healed = (data.max_hp(actor) - hp[actor.index()]).min(10);
                actions.push(TurnAction::message(
                    actor,
                    &format!("{} used a potion!", data.team(actor).trainer),
                ));
                actions.push(TurnAction::update_hp(actor, actor, healed));
                hp[actor.index()] += healed;
                false
            }
            TurnChoice::Switch { team_index } => {
                if let Some(next) = data.team(actor).unit(team_index) {
                    actions.push(TurnAction::message(actor, &format!("Go! {}!", next.nickname)));
                    actions.push(TurnAction::new(actor, TurnEffect::Switch { team_index }));
                    hp[actor.index()] = data
                        .unit_hp(actor, team_index)
                        .unwrap_or_else(|| i32::from(next.hp));
                }
                false
            }
            TurnChoice::Run => {
                actions.push(TurnAction::message(actor, "Got away safely!"));
                actions.push(TurnAction::new(actor, TurnEffect::Fled));
                true
            }
            TurnChoice::Pending => false,
        }
    }
}

impl Resolver for RandomResolver {
    fn resolve(&mut self, data: &BattleData<'_>, atk: TurnData) -> Option<RoundScript> {
        if self.finished {
            return None;
        }
        let def = self.opponent_choice(data);
        let atk_first = matches!(atk.choice, TurnChoice::Run) || self.rng.random_bool(0.5);
        let mut hp = [data.hp(Actor::Attacker), data.hp(Actor::Defender)];
        let mut actions = Vec::new();

        let first = Actor::first(atk_first);
        for actor in [first, first.opposite()] {
            let choice = match actor {
                Actor::Attacker => atk,
                Actor::Defender => def,
            };
            if self.play_side(data, &mut hp, actor, choice, &mut actions) {
                self.finished = true;
                break;
            }
        }

        tracing::debug!(atk_first, actions = actions.len(), "round resolved");
        Some(RoundScript {
            atk,
            def,
            atk_first,
            actions,
        })
    }
}
