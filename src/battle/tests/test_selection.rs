#[cfg(test)]
mod tests {
    use crate::battle::data::BattleData;
    use crate::battle::engine::BattleEngine;
    use crate::battle::handshake::TurnHandshake;
    use crate::battle::tests::common::blob_team;
    use crate::config::BattleViewConfig;
    use pretty_assertions::assert_eq;
    use schema::{Actor, CursorMove, GameStatus, Phase, TurnAction, TurnData};
    use std::collections::VecDeque;

    #[test]
    fn test_cursor_wraps_over_four_entries() {
        // Arrange
        let atk = blob_team("Red", 30);
        let def = blob_team("Blue", 30);
        let mut data = BattleData::new(&atk, &def, "Ace", "grass");
        let mut engine = BattleEngine::new(&mut data, BattleViewConfig::default());

        // Act & Assert
        engine.move_cur(CursorMove::Previous);
        assert_eq!(engine.cur_pos(), 3);
        for _ in 0..5 {
            engine.move_cur(CursorMove::Next);
        }
        assert_eq!(engine.cur_pos(), 0);
    }

    // Cursor persistence across menus is the observed behaviour, kept until product
    // confirms whether each menu should open on its first entry.
    #[test]
    fn test_toggle_twice_restores_menu_and_keeps_cursor() {
        // Arrange
        let atk = blob_team("Red", 30);
        let def = blob_team("Blue", 30);
        let mut data = BattleData::new(&atk, &def, "Ace", "grass");
        let mut engine = BattleEngine::new(&mut data, BattleViewConfig::default());
        engine.move_cur(CursorMove::Next);
        engine.move_cur(CursorMove::Next);

        // Act
        engine.toggle_attack_choice();
        let cursor_in_attack_menu = engine.cur_pos();
        let in_attack_menu = engine.is_attack_choice();
        engine.toggle_attack_choice();

        // Assert
        assert!(in_attack_menu);
        assert_eq!(cursor_in_attack_menu, 2);
        assert!(!engine.is_attack_choice());
        assert_eq!(engine.cur_pos(), 2);
    }

    #[test]
    fn test_selection_waits_for_the_handshake() {
        // Arrange
        let atk = blob_team("Red", 30);
        let def = blob_team("Blue", 30);
        let mut data = BattleData::new(&atk, &def, "Ace", "grass");
        let mut engine = BattleEngine::new(&mut data, BattleViewConfig::default());
        let mut queue = VecDeque::from(vec![TurnAction::update_hp(
            Actor::Attacker,
            Actor::Defender,
            -5,
        )]);
        let mut handshake = TurnHandshake::default();
        let choice = TurnData::default();

        // Act
        let statuses: Vec<GameStatus> = (0..10)
            .map(|_| engine.step(&choice, &choice, &mut queue, &mut handshake, true))
            .collect();

        // Assert
        assert!(statuses
            .iter()
            .all(|status| *status == GameStatus::Continue(Phase::Selection)));
        assert_eq!(queue.len(), 1);
        assert!(!engine.is_turn_launched());

        // Act: the resolver commits the round.
        handshake.activate();
        let status = engine.step(&choice, &choice, &mut queue, &mut handshake, true);

        // Assert
        assert_eq!(status, GameStatus::Continue(Phase::Execution));
        assert_eq!(engine.phase(), Phase::Execution);
        assert_eq!(engine.turn_number(), 0);
    }

    #[test]
    fn test_cursor_is_frozen_during_execution() {
        // Arrange
        let atk = blob_team("Red", 30);
        let def = blob_team("Blue", 30);
        let mut data = BattleData::new(&atk, &def, "Ace", "grass");
        let mut engine = BattleEngine::new(&mut data, BattleViewConfig::default());
        let mut queue = VecDeque::from(vec![TurnAction::message(Actor::Attacker, "Wait!")]);
        let mut handshake = TurnHandshake::default();
        let choice = TurnData::attack(1);
        engine.move_cur(CursorMove::Next);
        handshake.activate();
        engine.step(&choice, &choice, &mut queue, &mut handshake, true);

        // Act
        engine.move_cur(CursorMove::Next);
        engine.move_cur(CursorMove::Next);

        // Assert
        assert_eq!(engine.cur_pos(), 1);
        assert_eq!(engine.choice(Actor::Attacker), TurnData::attack(1));
    }
}
