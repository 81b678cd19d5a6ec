use crate::battle::animation::SpriteTransform;
use crate::battle::data::BattleData;
use crate::battle::engine::BattleEngine;
use crate::battle::handshake::TurnHandshake;
use crate::config::BattleViewConfig;
use crate::i18n::{LangRegistry, Localizer, Registration};
use crate::view::dialog::Dialog;
use crate::view::frame::Frame;
use crate::view::scene::BattleScene;
use schema::{Actor, BattleOutcome, CursorMove, GameStatus, Phase, TurnAction, TurnData};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// One battle encounter as seen by the render loop.
///
/// Call [`Battle::step`] once per frame. It advances the engine and then draws the
/// result onto the given frame.
pub struct Battle<'a, 't> {
    engine: BattleEngine<'a, 't>,
    scene: Rc<RefCell<BattleScene>>,
    _registration: Registration,
}

impl<'a, 't> Battle<'a, 't> {
    pub fn new(
        data: &'a mut BattleData<'t>,
        config: BattleViewConfig,
        localizer: Rc<RefCell<Localizer>>,
        registry: &LangRegistry,
    ) -> Self {
        let scene = Rc::new(RefCell::new(BattleScene::new(localizer)));
        let registration = registry.register(&scene);
        tracing::info!(
            trainer = %data.trainer_label,
            background = %data.background,
            "battle started"
        );
        Self {
            engine: BattleEngine::new(data, config),
            scene,
            _registration: registration,
        }
    }

    pub fn step(
        &mut self,
        frame: &mut dyn Frame,
        atk: &TurnData,
        def: &TurnData,
        action_queue: &mut VecDeque<TurnAction>,
        handshake: &mut TurnHandshake,
        atk_first: bool,
    ) -> GameStatus {
        let status = self
            .engine
            .step(atk, def, action_queue, handshake, atk_first);
        self.scene.borrow().draw(&self.engine, frame);
        status
    }

    pub fn move_cur(&mut self, direction: CursorMove) {
        self.engine.move_cur(direction);
    }

    pub fn toggle_attack_choice(&mut self) {
        self.engine.toggle_attack_choice();
    }

    pub fn pass_dialog(&mut self) {
        self.engine.pass_dialog();
    }

    pub fn cur_pos(&self) -> usize {
        self.engine.cur_pos()
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn is_attack_choice(&self) -> bool {
        self.engine.is_attack_choice()
    }

    pub fn turn_number(&self) -> usize {
        self.engine.turn_number()
    }

    pub fn displayed_hp(&self, actor: Actor) -> i32 {
        self.engine.displayed_hp(actor)
    }

    pub fn sprite_transform(&self, actor: Actor) -> SpriteTransform {
        self.engine.sprite_transform(actor)
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.engine.dialog()
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.engine.outcome()
    }

    pub fn engine(&self) -> &BattleEngine<'a, 't> {
        &self.engine
    }
}
