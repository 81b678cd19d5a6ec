#[cfg(test)]
mod tests {
    use crate::battle::data::BattleData;
    use crate::battle::engine::BattleEngine;
    use crate::battle::handshake::TurnHandshake;
    use crate::battle::tests::common::{blob_team, play_round, TestUnitBuilder};
    use crate::config::BattleViewConfig;
    use pretty_assertions::assert_eq;
    use schema::{Actor, Team, Transformation, TurnAction, TurnData, TurnEffect};
    use std::collections::VecDeque;

    #[test]
    fn test_one_animation_step_per_frame() {
        // Arrange
        let atk = blob_team("Red", 30);
        let def = blob_team("Blue", 30);
        let mut data = BattleData::new(&atk, &def, "Ace", "grass");
        let mut engine = BattleEngine::new(&mut data, BattleViewConfig::default());
        let step = Transformation::Move { dx: 1.0, dy: 0.0 };
        let mut queue = VecDeque::from(vec![
            TurnAction::new(
                Actor::Attacker,
                TurnEffect::Attack {
                    anims: vec![step; 3],
                },
            ),
            TurnAction::message(Actor::Attacker, "Done."),
        ]);
        let mut handshake = TurnHandshake::default();
        let choice = TurnData::attack(0);
        handshake.activate();

        // Act: launch, then dispatch the attack.
        engine.step(&choice, &choice, &mut queue, &mut handshake, true);
        engine.step(&choice, &choice, &mut queue, &mut handshake, true);

        // Assert
        let mut xs = vec![engine.sprite_transform(Actor::Attacker).x];
        for _ in 0..3 {
            engine.step(&choice, &choice, &mut queue, &mut handshake, true);
            xs.push(engine.sprite_transform(Actor::Attacker).x);
            assert_eq!(queue.len(), 1, "message dequeued while animating");
        }
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);

        engine.step(&choice, &choice, &mut queue, &mut handshake, true);
        assert!(queue.is_empty());
        assert_eq!(engine.dialog().and_then(|d| d.current_page()), Some("Done."));
    }

    #[test]
    fn test_switch_brings_in_the_new_unit() {
        // Arrange
        let atk = Team::new(
            "Red",
            vec![
                TestUnitBuilder::new("Sparky", 30).with_hp(3).build(),
                TestUnitBuilder::new("Pebble", 50).with_hp(44).build(),
            ],
        );
        let def = blob_team("Blue", 30);
        let mut data = BattleData::new(&atk, &def, "Ace", "grass");
        let mut engine = BattleEngine::new(&mut data, BattleViewConfig::default());
        let mut queue = VecDeque::from(vec![TurnAction::new(
            Actor::Attacker,
            TurnEffect::Switch { team_index: 1 },
        )]);
        let mut handshake = TurnHandshake::default();

        // Act
        play_round(&mut engine, &mut queue, &mut handshake, true);

        // Assert
        assert_eq!(engine.data().active_index(Actor::Attacker), 1);
        assert_eq!(engine.displayed_hp(Actor::Attacker), 44);
        assert!(engine.sprite_transform(Actor::Attacker).x.abs() < 1e-3);
    }

    #[test]
    fn test_recalled_unit_slides_out_before_the_new_one_comes_in() {
        // Arrange
        let atk = Team::new(
            "Red",
            vec![
                TestUnitBuilder::new("Sparky", 30).build(),
                TestUnitBuilder::new("Pebble", 50).build(),
            ],
        );
        let def = blob_team("Blue", 30);
        let mut data = BattleData::new(&atk, &def, "Ace", "grass");
        let config = BattleViewConfig::default();
        let slide = config.switch_slide;
        let mut engine = BattleEngine::new(&mut data, config);
        let mut queue = VecDeque::from(vec![TurnAction::new(
            Actor::Attacker,
            TurnEffect::Switch { team_index: 1 },
        )]);
        let mut handshake = TurnHandshake::default();
        let choice = TurnData::attack(0);
        handshake.activate();

        // Act: launch, dispatch, then every recall step but the last.
        for _ in 0..(slide.frames + 1) {
            engine.step(&choice, &choice, &mut queue, &mut handshake, true);
        }

        // Assert
        assert_eq!(engine.data().active_index(Actor::Attacker), 0);
        let x = engine.sprite_transform(Actor::Attacker).x;
        let expected = -slide.distance * (slide.frames - 1) as f32 / slide.frames as f32;
        assert!((x - expected).abs() < 1e-3, "recalled sprite at {}", x);

        engine.step(&choice, &choice, &mut queue, &mut handshake, true);
        assert_eq!(engine.data().active_index(Actor::Attacker), 1);
        assert!((engine.sprite_transform(Actor::Attacker).x + slide.distance).abs() < 1e-3);
        assert_eq!(engine.displayed_hp(Actor::Attacker), 50);
    }

    #[test]
    fn test_switched_out_unit_keeps_its_damage() {
        // Arrange
        let atk = Team::new(
            "Red",
            vec![
                TestUnitBuilder::new("Sparky", 30).build(),
                TestUnitBuilder::new("Pebble", 50).build(),
            ],
        );
        let def = blob_team("Blue", 30);
        let mut data = BattleData::new(&atk, &def, "Ace", "grass");
        let mut engine = BattleEngine::new(&mut data, BattleViewConfig::default());
        let mut handshake = TurnHandshake::default();

        // Act: Sparky faints, Pebble comes in, then Sparky is sent back.
        let mut queue = VecDeque::from(vec![
            TurnAction::update_hp(Actor::Defender, Actor::Attacker, -30),
            TurnAction::new(Actor::Attacker, TurnEffect::Switch { team_index: 1 }),
        ]);
        play_round(&mut engine, &mut queue, &mut handshake, false);
        let mut queue = VecDeque::from(vec![TurnAction::new(
            Actor::Attacker,
            TurnEffect::Switch { team_index: 0 },
        )]);
        play_round(&mut engine, &mut queue, &mut handshake, true);

        // Assert
        assert_eq!(engine.data().active_index(Actor::Attacker), 0);
        assert_eq!(engine.data().hp(Actor::Attacker), 0);
        assert!(engine.data().is_fainted(Actor::Attacker));
        assert_eq!(engine.displayed_hp(Actor::Attacker), 0);
        assert_eq!(engine.data().unit_hp(Actor::Attacker, 1), Some(50));
    }

    #[test]
    fn test_switch_to_empty_slot_is_skipped() {
        // Arrange
        let atk = blob_team("Red", 30);
        let def = blob_team("Blue", 30);
        let mut data = BattleData::new(&atk, &def, "Ace", "grass");
        let mut engine = BattleEngine::new(&mut data, BattleViewConfig::default());
        let mut queue = VecDeque::from(vec![
            TurnAction::new(Actor::Defender, TurnEffect::Switch { team_index: 4 }),
            TurnAction::update_hp(Actor::Defender, Actor::Attacker, -3),
        ]);
        let mut handshake = TurnHandshake::default();

        // Act
        let trace = play_round(&mut engine, &mut queue, &mut handshake, false);

        // Assert
        assert_eq!(trace.handshake_clears, 1);
        assert_eq!(engine.data().active_index(Actor::Defender), 0);
        assert_eq!(engine.displayed_hp(Actor::Attacker), 27);
    }

    #[test]
    fn test_faint_drops_the_target_sprite() {
        // Arrange
        let atk = blob_team("Red", 30);
        let def = blob_team("Blue", 30);
        let mut data = BattleData::new(&atk, &def, "Ace", "grass");
        let config = BattleViewConfig::default();
        let drop = config.faint_drop.distance;
        let mut engine = BattleEngine::new(&mut data, config);
        let mut queue = VecDeque::from(vec![
            TurnAction::update_hp(Actor::Attacker, Actor::Defender, -30),
            TurnAction::new(
                Actor::Attacker,
                TurnEffect::Faint {
                    target: Actor::Defender,
                },
            ),
        ]);
        let mut handshake = TurnHandshake::default();

        // Act
        play_round(&mut engine, &mut queue, &mut handshake, true);

        // Assert
        let transform = engine.sprite_transform(Actor::Defender);
        assert!((transform.y - drop).abs() < 1e-3);
        assert!(engine.sprite_transform(Actor::Attacker).is_at_rest());
    }

    #[test]
    fn test_unknown_action_is_skipped_and_the_round_goes_on() {
        // Arrange
        let atk = blob_team("Red", 30);
        let def = blob_team("Blue", 30);
        let mut data = BattleData::new(&atk, &def, "Ace", "grass");
        let mut engine = BattleEngine::new(&mut data, BattleViewConfig::default());
        let mut queue = VecDeque::from(vec![
            TurnAction::new(Actor::Attacker, TurnEffect::Unknown),
            TurnAction::update_hp(Actor::Attacker, Actor::Defender, -2),
            TurnAction::new(Actor::Defender, TurnEffect::Unknown),
        ]);
        let mut handshake = TurnHandshake::default();

        // Act
        let trace = play_round(&mut engine, &mut queue, &mut handshake, true);

        // Assert
        assert!(queue.is_empty());
        assert_eq!(trace.handshake_clears, 1);
        assert_eq!(engine.displayed_hp(Actor::Defender), 28);
    }
}
