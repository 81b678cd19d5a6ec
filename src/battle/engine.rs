use crate::battle::animation::{self, AnimationQueue, HpTween, SpriteTransform};
use crate::battle::data::BattleData;
use crate::battle::handshake::TurnHandshake;
use crate::config::BattleViewConfig;
use crate::utils::CycleCounter;
use crate::view::dialog::Dialog;
use schema::{
    Actor, BattleOutcome, CursorMove, GameStatus, Phase, TurnAction, TurnData, TurnEffect,
    MENU_SLOTS,
};
use std::collections::VecDeque;

/// The battle turn state machine, free of any rendering.
///
/// Two phases alternate:
/// - Selection: the player moves the cursor through the action and attack menus.
///   The engine waits for the resolver to activate the turn handshake.
/// - Execution: the resolved turn script is played back. The side that moves first
///   plays its whole sub-turn (every action, animation and dialog) before the other
///   side's sub-turn starts. Once both are done the handshake is finished and the
///   engine goes back to selection.
///
/// Everything that waits (menus, dialogs, animations) does so by returning from
/// [`BattleEngine::step`] and picking up where it left off on the next frame.
#[derive(Debug)]
pub struct BattleEngine<'a, 't> {
    data: &'a mut BattleData<'t>,
    config: BattleViewConfig,
    phase: Phase,
    turn: Actor,
    turn_launched: bool,
    first_sub_turn_done: bool,
    // None until synced from BattleData at the first executed round.
    hp_shown: [Option<i32>; 2],
    hp_tweens: [Option<HpTween>; 2],
    anims: [AnimationQueue; 2],
    // Team slot sent out once the recalled unit has left the screen.
    pending_switch: [Option<usize>; 2],
    transforms: [SpriteTransform; 2],
    cursor: CycleCounter,
    attack_choice: bool,
    dialog: Option<Dialog>,
    choices: [TurnData; 2],
    pending_outcome: Option<BattleOutcome>,
    outcome: Option<BattleOutcome>,
}

impl<'a, 't> BattleEngine<'a, 't> {
    pub fn new(data: &'a mut BattleData<'t>, config: BattleViewConfig) -> Self {
        Self {
            data,
            config,
            phase: Phase::Selection,
            turn: Actor::Attacker,
            turn_launched: false,
            first_sub_turn_done: false,
            hp_shown: [None, None],
            hp_tweens: [None, None],
            anims: Default::default(),
            pending_switch: [None, None],
            transforms: Default::default(),
            cursor: CycleCounter::new(MENU_SLOTS),
            attack_choice: false,
            dialog: None,
            choices: [TurnData::default(); 2],
            pending_outcome: None,
            outcome: None,
        }
    }

    /// Advances the encounter by one frame.
    pub fn step(
        &mut self,
        atk: &TurnData,
        def: &TurnData,
        action_queue: &mut VecDeque<TurnAction>,
        handshake: &mut TurnHandshake,
        atk_first: bool,
    ) -> GameStatus {
        if let Some(outcome) = self.outcome {
            return GameStatus::Ended(outcome);
        }

        if self.phase == Phase::Selection {
            if !handshake.is_activated() {
                return GameStatus::Continue(Phase::Selection);
            }
            tracing::debug!("turn activated, entering execution phase");
            self.phase = Phase::Execution;
        }

        // The round launch gets a frame of its own; playback starts on the next one.
        if !self.turn_launched {
            self.launch_round(atk, def, atk_first);
            return GameStatus::Continue(Phase::Execution);
        }

        self.play(action_queue, handshake)
    }

    fn launch_round(&mut self, atk: &TurnData, def: &TurnData, atk_first: bool) {
        self.turn_launched = true;
        self.first_sub_turn_done = false;
        self.turn = Actor::first(atk_first);
        self.choices = [*atk, *def];
        for actor in Actor::BOTH {
            let i = actor.index();
            if self.hp_shown[i].is_none() {
                self.hp_shown[i] = Some(self.data.hp(actor));
            }
        }
        tracing::debug!(
            turn_number = self.turn_number(),
            atk = ?atk.choice,
            def = ?def.choice,
            "round launched"
        );
    }

    fn play(
        &mut self,
        action_queue: &mut VecDeque<TurnAction>,
        handshake: &mut TurnHandshake,
    ) -> GameStatus {
        if self.advance_animations() {
            return GameStatus::Continue(Phase::Execution);
        }

        loop {
            if self.dialog_blocks() {
                return GameStatus::Continue(Phase::Execution);
            }

            if let Some(outcome) = self.pending_outcome.take() {
                tracing::info!(?outcome, "encounter over");
                self.outcome = Some(outcome);
                return GameStatus::Ended(outcome);
            }

            match self.next_action(action_queue) {
                Some(action) => {
                    self.dispatch(action);
                    if self.is_animating() {
                        return GameStatus::Continue(Phase::Execution);
                    }
                }
                None => return self.finish_sub_turn(handshake),
            }
        }
    }

    /// Plays one step of every pending animation. Returns whether anything was pending.
    fn advance_animations(&mut self) -> bool {
        let mut pending = false;
        for actor in Actor::BOTH {
            let i = actor.index();
            if let Some(step) = self.anims[i].pop() {
                self.transforms[i].apply(step);
                pending = true;
                if self.anims[i].is_empty() {
                    if let Some(team_index) = self.pending_switch[i].take() {
                        self.send_out(actor, team_index);
                    }
                }
            }
            if let Some(tween) = self.hp_tweens[i] {
                let current = self.hp_shown[i].unwrap_or_else(|| self.data.hp(actor));
                let next = tween.step(current);
                self.hp_shown[i] = Some(next);
                if tween.is_done(next) {
                    self.hp_tweens[i] = None;
                }
                pending = true;
            }
        }
        pending
    }

    fn is_animating(&self) -> bool {
        self.anims.iter().any(|queue| !queue.is_empty())
            || self.hp_tweens.iter().any(Option::is_some)
    }

    /// Whether an open dialog still waits to be passed. Finished dialogs are dropped.
    fn dialog_blocks(&mut self) -> bool {
        let Some(dialog) = &self.dialog else {
            return false;
        };
        if !dialog.is_over() {
            return true;
        }
        self.dialog = None;
        false
    }

    /// Pops the next action of the current sub-turn.
    ///
    /// The first sub-turn stops at the first action produced by the other side; the
    /// second sub-turn plays whatever is left, so nothing is ever reordered.
    fn next_action(&mut self, action_queue: &mut VecDeque<TurnAction>) -> Option<TurnAction> {
        let front = action_queue.front()?;
        if !self.first_sub_turn_done && front.actor != self.turn {
            return None;
        }
        action_queue.pop_front()
    }

    fn dispatch(&mut self, action: TurnAction) {
        let actor = action.actor;
        tracing::debug!(%actor, effect = ?action.effect, "dispatching turn action");
        match action.effect {
            TurnEffect::Message { text } => {
                let dialog = Dialog::from_text(
                    &text,
                    self.config.dialog_line_width,
                    self.config.dialog_lines_per_page,
                );
                self.dialog = Some(dialog);
            }
            TurnEffect::UpdateHp { target, delta } => {
                let new_hp = self.data.apply_hp_delta(target, delta);
                let tween = HpTween::new(
                    new_hp,
                    self.data.max_hp(target),
                    self.config.hp_tween_frames,
                );
                let i = target.index();
                if self.hp_shown[i] != Some(new_hp) {
                    self.hp_tweens[i] = Some(tween);
                }
            }
            TurnEffect::Attack { anims } => {
                let steps = if anims.is_empty() {
                    animation::lunge(actor, &self.config.attack_lunge)
                } else {
                    anims
                };
                self.anims[actor.index()].extend(steps);
            }
            TurnEffect::Switch { team_index } => {
                if self.data.team(actor).unit(team_index).is_none() {
                    tracing::warn!(%actor, team_index, "switch to an empty team slot, skipping");
                    return;
                }
                let recall = animation::slide_out(actor, &self.config.switch_slide);
                if recall.is_empty() {
                    self.send_out(actor, team_index);
                } else {
                    self.anims[actor.index()].extend(recall);
                    self.pending_switch[actor.index()] = Some(team_index);
                }
            }
            TurnEffect::Faint { target } => {
                self.anims[target.index()].extend(animation::faint_drop(&self.config.faint_drop));
            }
            effect @ (TurnEffect::Victory | TurnEffect::Defeat | TurnEffect::Fled) => {
                self.pending_outcome = effect.outcome();
            }
            TurnEffect::Unknown => {
                tracing::warn!(%actor, "unknown turn action, skipping");
            }
        }
    }

    /// Makes `team_index` active and slides its sprite in from offscreen.
    fn send_out(&mut self, actor: Actor, team_index: usize) {
        if !self.data.switch_to(actor, team_index) {
            return;
        }
        let i = actor.index();
        let spec = self.config.switch_slide;
        self.hp_shown[i] = Some(self.data.hp(actor));
        self.hp_tweens[i] = None;
        self.transforms[i] = animation::slide_in_origin(actor, &spec);
        self.anims[i].extend(animation::slide_in(actor, &spec));
    }

    fn finish_sub_turn(&mut self, handshake: &mut TurnHandshake) -> GameStatus {
        if !self.first_sub_turn_done {
            self.first_sub_turn_done = true;
            self.turn = self.turn.opposite();
            tracing::debug!(turn_number = self.turn_number(), "second sub-turn");
            return GameStatus::Continue(Phase::Execution);
        }

        self.turn_launched = false;
        self.first_sub_turn_done = false;
        self.phase = Phase::Selection;
        handshake.finish();
        tracing::debug!("round over, back to selection");
        GameStatus::Continue(Phase::Selection)
    }

    /// Moves the menu cursor. Ignored outside the selection phase.
    pub fn move_cur(&mut self, direction: CursorMove) {
        if self.phase != Phase::Selection {
            return;
        }
        match direction {
            CursorMove::Previous => self.cursor.decrement(),
            CursorMove::Next => self.cursor.increment(),
        }
    }

    /// Switches between the action menu and the attack menu.
    ///
    /// Both menus have the same four slots, so the cursor keeps its position.
    pub fn toggle_attack_choice(&mut self) {
        self.attack_choice = !self.attack_choice;
    }

    pub fn pass_dialog(&mut self) {
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.pass();
        }
    }

    pub fn cur_pos(&self) -> usize {
        self.cursor.value()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_attack_choice(&self) -> bool {
        self.attack_choice
    }

    /// 0 while the attacker's sub-turn plays, 1 for the defender's.
    pub fn turn_number(&self) -> usize {
        self.turn.index()
    }

    pub fn turn(&self) -> Actor {
        self.turn
    }

    pub fn is_turn_launched(&self) -> bool {
        self.turn_launched
    }

    /// HP shown in `actor`'s info box. Never negative.
    pub fn displayed_hp(&self, actor: Actor) -> i32 {
        self.hp_shown[actor.index()]
            .unwrap_or_else(|| self.data.hp(actor))
            .max(0)
    }

    pub fn sprite_transform(&self, actor: Actor) -> SpriteTransform {
        self.transforms[actor.index()]
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// The choice `actor` committed to for the round being played.
    pub fn choice(&self, actor: Actor) -> TurnData {
        self.choices[actor.index()]
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    pub fn data(&self) -> &BattleData<'t> {
        &*self.data
    }

    pub fn config(&self) -> &BattleViewConfig {
        &self.config
    }
}
