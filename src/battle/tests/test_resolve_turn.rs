#[cfg(test)]
mod tests {
    use crate::battle::action_stack::BattleAction;
    use crate::battle::engine::BattleEngine;
    use crate::battle::rng::{ScriptedRng, StdBattleRng};
    use crate::battle::state::{EventKind, Outcome, Side};
    use crate::battle::tests::common::{
        create_test_engine, events_of, init_logger, predictable_rng, print_turn, TestPokemonBuilder,
    };
    use crate::config::BattleConfig;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{Move, Species};

    fn move_order(result: &crate::battle::state::TurnResult) -> Vec<Side> {
        result
            .events
            .iter()
            .filter(|e| e.kind == EventKind::MoveUsed)
            .filter_map(|e| e.battler)
            .collect()
    }

    #[test]
    fn test_faster_battler_moves_first() {
        // Arrange: Zigzagoon (speed 29) outpaces Poochyena (speed 19) at level 20.
        let player = TestPokemonBuilder::new(Species::Zigzagoon, 20)
            .with_moves(vec![Move::Tackle])
            .build();
        let enemy = TestPokemonBuilder::new(Species::Poochyena, 20)
            .with_moves(vec![Move::Tackle])
            .build();
        let mut engine = create_test_engine(player, enemy, predictable_rng());

        // Act
        let result = engine.execute_turn(BattleAction::fight(Move::Tackle, 0));
        print_turn(&result, "Events for speed order:");

        // Assert
        assert!(result.consumed_turn);
        assert_eq!(move_order(&result), vec![Side::Player, Side::Enemy]);
        assert_eq!(result.outcome, None);
        assert_eq!(engine.turn_counter(), 1);
    }

    #[test]
    fn test_priority_beats_speed() {
        let player = TestPokemonBuilder::new(Species::Zigzagoon, 5)
            .with_moves(vec![Move::QuickAttack])
            .build();
        let enemy = TestPokemonBuilder::new(Species::Zigzagoon, 50)
            .with_moves(vec![Move::Growl])
            .build();
        let mut engine = create_test_engine(player, enemy, predictable_rng());

        let result = engine.execute_turn(BattleAction::fight(Move::QuickAttack, 0));

        assert_eq!(move_order(&result), vec![Side::Player, Side::Enemy]);
    }

    #[rstest]
    #[case(0.0, vec![Side::Player, Side::Enemy])]
    #[case(0.75, vec![Side::Enemy, Side::Player])]
    fn test_speed_tie_is_a_coin_flip(#[case] coin: f64, #[case] expected: Vec<Side>) {
        // Arrange: identical battlers; draws are AI choice, coin flip, then one accuracy roll each.
        let player = TestPokemonBuilder::new(Species::Zigzagoon, 20)
            .with_moves(vec![Move::Growl])
            .build();
        let enemy = TestPokemonBuilder::new(Species::Zigzagoon, 20)
            .with_moves(vec![Move::Growl])
            .build();
        let rng = ScriptedRng::new(vec![0.0, coin, 0.0, 0.0]);
        let mut engine = create_test_engine(player, enemy, rng);

        // Act
        let result = engine.execute_turn(BattleAction::fight(Move::Growl, 0));

        // Assert
        assert_eq!(move_order(&result), expected);
    }

    #[test]
    fn test_minimum_rolls_give_reproducible_damage() {
        // With every draw at its minimum the Pound is a critical hit with the 85% factor:
        // base 15, doubled to 30, STAB to 45, then 45 * 85 / 100 = 38.
        let run = || {
            let player = TestPokemonBuilder::new(Species::Zigzagoon, 50)
                .with_moves(vec![Move::Pound])
                .build();
            let enemy = TestPokemonBuilder::new(Species::Zigzagoon, 50)
                .with_moves(vec![Move::Growl])
                .build();
            let mut engine = create_test_engine(player, enemy, ScriptedRng::always_min());
            let result = engine.execute_turn(BattleAction::fight(Move::Pound, 0));
            (result, engine.enemy().current_hp)
        };

        let (first, first_hp) = run();
        let (second, second_hp) = run();

        assert_eq!(first, second);
        assert_eq!(first_hp, second_hp);
        assert!(first.has_event(EventKind::Critical, Some(Side::Enemy)));
        let damage = events_of(&first, EventKind::Damage, Side::Enemy);
        assert_eq!(damage.len(), 1);
        assert_eq!(damage[0].value, Some(38));
        assert_eq!(first_hp, 98 - 38);
    }

    #[test]
    fn test_switch_action_is_refused_inside_the_core() {
        let player = TestPokemonBuilder::new(Species::Zigzagoon, 20)
            .with_moves(vec![Move::Growl])
            .build();
        let enemy = TestPokemonBuilder::new(Species::Poochyena, 20)
            .with_moves(vec![Move::Growl])
            .build();
        let mut engine = create_test_engine(player, enemy, predictable_rng());

        let result = engine.execute_turn(BattleAction::Switch { party_index: 1 });

        assert!(result.consumed_turn);
        assert!(result.messages().contains(&"But it failed!"));
        assert!(result.has_event(EventKind::MoveUsed, Some(Side::Enemy)));
    }

    #[test]
    fn test_finished_battle_returns_an_empty_delta() {
        // Arrange: the player's Explosion takes out a 1 HP foe and the user with it.
        let player = TestPokemonBuilder::new(Species::Zigzagoon, 50)
            .with_moves(vec![Move::Explosion])
            .build();
        let enemy = TestPokemonBuilder::new(Species::Zigzagoon, 5)
            .with_moves(vec![Move::Growl])
            .with_hp(1)
            .build();
        let mut engine = create_test_engine(player, enemy, predictable_rng());
        let first = engine.execute_turn(BattleAction::fight(Move::Explosion, 0));
        assert_eq!(first.outcome, Some(Outcome::Draw));
        let turns = engine.turn_counter();

        // Act
        let again = engine.execute_turn(BattleAction::fight(Move::Explosion, 0));

        // Assert
        assert!(again.events.is_empty());
        assert!(!again.consumed_turn);
        assert_eq!(again.outcome, Some(Outcome::Draw));
        assert_eq!(engine.turn_counter(), turns);
    }

    #[test]
    fn test_enemy_never_acts_after_fainting() {
        let player = TestPokemonBuilder::new(Species::Zigzagoon, 50)
            .with_moves(vec![Move::Tackle])
            .build();
        let enemy = TestPokemonBuilder::new(Species::Zigzagoon, 5)
            .with_moves(vec![Move::Tackle])
            .build();
        let mut engine = create_test_engine(player, enemy, predictable_rng());

        let result = engine.execute_turn(BattleAction::fight(Move::Tackle, 0));

        assert_eq!(result.outcome, Some(Outcome::Win));
        assert!(result.has_event(EventKind::Faint, Some(Side::Enemy)));
        assert_eq!(move_order(&result), vec![Side::Player]);
    }

    fn seeded_engine(seed: u64) -> BattleEngine {
        init_logger();
        let player = TestPokemonBuilder::new(Species::Treecko, 12)
            .with_moves(vec![Move::Pound, Move::Leer, Move::Absorb])
            .build();
        let enemy = TestPokemonBuilder::new(Species::Poochyena, 12)
            .with_moves(vec![Move::Tackle, Move::Growl, Move::Bite])
            .build();
        BattleEngine::new(
            BattleConfig::wild(),
            &player,
            &enemy,
            Box::new(StdBattleRng::from_seed_u64(seed)),
        )
    }

    #[test]
    fn test_same_seed_same_battle() {
        let mut first = seeded_engine(42);
        let mut second = seeded_engine(42);

        for _ in 0..20 {
            let a = first.execute_turn(BattleAction::fight(Move::Pound, 0));
            let b = second.execute_turn(BattleAction::fight(Move::Pound, 0));
            assert_eq!(a, b);
        }
        assert_eq!(first.snapshot(), second.snapshot());
    }

    #[test]
    fn test_restored_snapshot_continues_identically() {
        // Arrange: play a few turns, then fork the battle through a serialized snapshot.
        let mut original = seeded_engine(7);
        original.execute_turn(BattleAction::fight(Move::Leer, 1));
        let bytes = match original.snapshot().to_bytes() {
            Ok(bytes) => bytes,
            Err(err) => panic!("snapshot failed to encode: {}", err),
        };
        let snapshot = match crate::battle::engine::BattleSnapshot::from_bytes(&bytes) {
            Ok(snapshot) => snapshot,
            Err(err) => panic!("snapshot failed to decode: {}", err),
        };
        original.set_rng(Box::new(ScriptedRng::repeating(vec![0.3, 0.8])));
        let mut restored = BattleEngine::restore(snapshot, Box::new(ScriptedRng::repeating(vec![0.3, 0.8])));

        // Act
        let a = original.execute_turn(BattleAction::fight(Move::Pound, 0));
        let b = restored.execute_turn(BattleAction::fight(Move::Pound, 0));

        // Assert
        assert_eq!(a, b);
        assert_eq!(original.snapshot(), restored.snapshot());
    }
}
