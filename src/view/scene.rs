use crate::battle::engine::BattleEngine;
use crate::i18n::{Localizer, Translatable};
use crate::view::frame::{Frame, InfoBox, MenuEntry};
use schema::{ActionEntry, Actor, ElementType, MoveSlot, Phase, MENU_SLOTS};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Draws a [`BattleEngine`] onto a [`Frame`].
///
/// Labels are looked up once and cached; they are refreshed when the language
/// changes through [`Translatable::on_lang_changed`].
#[derive(Debug)]
pub struct BattleScene {
    localizer: Rc<RefCell<Localizer>>,
    action_labels: Vec<String>,
    type_labels: HashMap<ElementType, String>,
    pp_label: String,
    empty_label: String,
}

impl BattleScene {
    pub fn new(localizer: Rc<RefCell<Localizer>>) -> Self {
        let mut scene = Self {
            localizer,
            action_labels: Vec::new(),
            type_labels: HashMap::new(),
            pp_label: String::new(),
            empty_label: String::new(),
        };
        scene.reload();
        scene
    }

    /// Re-reads every cached label from the localizer.
    pub fn reload(&mut self) {
        let Ok(localizer) = self.localizer.try_borrow() else {
            tracing::warn!("localizer busy during reload, keeping previous labels");
            return;
        };
        self.action_labels = ActionEntry::all()
            .map(|entry| localizer.get(entry.label_key()))
            .collect();
        self.type_labels = ElementType::all()
            .map(|element| (element, localizer.get(&element.label_key())))
            .collect();
        self.pp_label = localizer.get("battle.pp");
        self.empty_label = localizer.get("battle.menu.empty");
        tracing::debug!(language = localizer.language(), "scene labels reloaded");
    }

    pub fn action_labels(&self) -> &[String] {
        &self.action_labels
    }

    pub fn draw(&self, engine: &BattleEngine<'_, '_>, frame: &mut dyn Frame) {
        let data = engine.data();
        frame.clear();
        frame.draw_background(&data.background);
        frame.draw_trainer(&data.trainer_label);

        for side in Actor::BOTH {
            let Some(unit) = data.active_unit(side) else {
                continue;
            };
            frame.draw_unit(side, &unit.species, &engine.sprite_transform(side));
            frame.draw_info_box(
                side,
                &InfoBox {
                    name: &unit.nickname,
                    level: unit.level,
                    hp: engine.displayed_hp(side),
                    max_hp: data.max_hp(side),
                },
            );
        }

        match engine.phase() {
            Phase::Selection => self.draw_selection(engine, frame),
            Phase::Execution => {
                if let Some(page) = engine.dialog().and_then(|dialog| dialog.current_page()) {
                    let more = engine.dialog().is_some_and(|dialog| dialog.has_next_page());
                    frame.draw_dialog(page, more);
                }
            }
        }
    }

    fn draw_selection(&self, engine: &BattleEngine<'_, '_>, frame: &mut dyn Frame) {
        let player = engine.data().active_unit(Actor::Attacker);
        if let Some(unit) = player {
            frame.draw_caption(&self.wait_caption(&unit.nickname));
        }

        let entries: Vec<MenuEntry> = if engine.is_attack_choice() {
            let moves = player.map(|unit| unit.moves.as_slice()).unwrap_or(&[]);
            (0..MENU_SLOTS)
                .map(|i| match moves.get(i).and_then(Option::as_ref) {
                    Some(slot) => self.move_entry(slot),
                    None => MenuEntry::plain(self.empty_label.clone()),
                })
                .collect()
        } else {
            self.action_labels
                .iter()
                .map(|label| MenuEntry::plain(label.clone()))
                .collect()
        };
        frame.draw_menu(&entries, engine.cur_pos());
    }

    fn wait_caption(&self, name: &str) -> String {
        match self.localizer.try_borrow() {
            Ok(localizer) => localizer.format("battle.wait", &[("name", name)]),
            Err(_) => name.to_string(),
        }
    }

    fn move_entry(&self, slot: &MoveSlot) -> MenuEntry {
        let element = self
            .type_labels
            .get(&slot.element)
            .map(String::as_str)
            .unwrap_or_default();
        MenuEntry::with_detail(
            slot.name.clone(),
            format!("{} {}/{} {}", self.pp_label, slot.pp, slot.max_pp, element),
        )
    }
}

impl Translatable for BattleScene {
    fn on_lang_changed(&mut self) {
        self.reload();
    }
}
