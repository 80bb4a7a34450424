#[cfg(test)]
mod tests {
    use crate::battle::action_stack::BattleAction;
    use crate::battle::rng::ScriptedRng;
    use crate::battle::state::{EventKind, Outcome, Side};
    use crate::battle::tests::common::{
        create_test_engine, create_trainer_engine, predictable_rng, print_turn, TestPokemonBuilder,
    };
    use crate::config::BattleConfig;
    use crate::battle::engine::BattleEngine;
    use pretty_assertions::assert_eq;
    use schema::{Item, Move, Species};

    fn slow_player() -> crate::pokemon::PartyPokemon {
        TestPokemonBuilder::new(Species::Zigzagoon, 5)
            .with_moves(vec![Move::Tackle])
            .build()
    }

    fn fast_enemy() -> crate::pokemon::PartyPokemon {
        TestPokemonBuilder::new(Species::Zigzagoon, 50)
            .with_moves(vec![Move::Growl])
            .build()
    }

    #[test]
    fn test_failed_escape_lets_the_enemy_act() {
        // Arrange: speeds 11 vs 65 give 11 * 128 / 65 = 21 against a roll of 200.
        // Draws: escape roll, AI choice, Growl accuracy.
        let rng = ScriptedRng::new(vec![
            ScriptedRng::unit_for(200, 0, 255),
            0.0,
            ScriptedRng::unit_for(1, 1, 100),
        ]);
        let mut engine = create_test_engine(slow_player(), fast_enemy(), rng);

        // Act
        let result = engine.execute_turn(BattleAction::Run);
        print_turn(&result, "Events for failed escape:");

        // Assert
        assert!(result.consumed_turn);
        assert_eq!(result.outcome, None);
        assert!(result.messages().contains(&"Can't escape!"));
        assert!(result.has_event(EventKind::MoveUsed, Some(Side::Enemy)));
        assert_eq!(engine.escape_attempts(), 1);
        assert_eq!(engine.player().stages.attack, -1);
    }

    #[test]
    fn test_each_attempt_adds_to_the_escape_chance() {
        let rng = ScriptedRng::new(vec![
            ScriptedRng::unit_for(50, 0, 255),
            0.0,
            ScriptedRng::unit_for(1, 1, 100),
            ScriptedRng::unit_for(50, 0, 255),
        ]);
        let mut engine = create_test_engine(slow_player(), fast_enemy(), rng);

        // 21 is not above 50.
        let first = engine.execute_turn(BattleAction::Run);
        assert_eq!(first.outcome, None);

        // 21 + 30 is.
        let second = engine.execute_turn(BattleAction::Run);
        assert_eq!(second.outcome, Some(Outcome::Flee));
        assert!(second.messages().contains(&"Got away safely!"));
        assert_eq!(engine.escape_attempts(), 2);
    }

    #[test]
    fn test_faster_player_escapes_without_a_roll() {
        let player = TestPokemonBuilder::new(Species::Zigzagoon, 50)
            .with_moves(vec![Move::Tackle])
            .build();
        let enemy = TestPokemonBuilder::new(Species::Zigzagoon, 5)
            .with_moves(vec![Move::Growl])
            .build();
        let mut engine = create_test_engine(player, enemy, ScriptedRng::new(vec![]));

        let result = engine.execute_turn(BattleAction::Run);

        assert_eq!(result.outcome, Some(Outcome::Flee));
        assert!(result.consumed_turn);
        assert!(!result.has_event(EventKind::MoveUsed, None));
    }

    #[test]
    fn test_run_away_always_escapes() {
        // Poochyena's first ability slot is Run Away.
        let player = TestPokemonBuilder::new(Species::Poochyena, 5)
            .with_moves(vec![Move::Tackle])
            .build();
        let mut engine = create_test_engine(player, fast_enemy(), ScriptedRng::new(vec![]));

        let result = engine.execute_turn(BattleAction::Run);

        assert_eq!(result.outcome, Some(Outcome::Flee));
    }

    #[test]
    fn test_single_ability_species_keeps_run_away_in_either_slot() {
        let player = TestPokemonBuilder::new(Species::Poochyena, 5)
            .with_moves(vec![Move::Tackle])
            .with_ability_slot(1)
            .build();
        let mut engine = create_test_engine(player, fast_enemy(), ScriptedRng::new(vec![]));

        let result = engine.execute_turn(BattleAction::Run);

        assert_eq!(engine.player().ability, schema::Ability::RunAway);
        assert_eq!(result.outcome, Some(Outcome::Flee));
    }

    #[test]
    fn test_smoke_ball_always_escapes() {
        let player = TestPokemonBuilder::new(Species::Zigzagoon, 5)
            .with_moves(vec![Move::Tackle])
            .with_item(Item::SmokeBall)
            .build();
        let mut engine = create_test_engine(player, fast_enemy(), ScriptedRng::new(vec![]));

        let result = engine.execute_turn(BattleAction::Run);

        assert_eq!(result.outcome, Some(Outcome::Flee));
    }

    #[test]
    fn test_trapped_player_cannot_escape() {
        let mut engine = create_test_engine(slow_player(), fast_enemy(), predictable_rng());
        engine.player_mut().volatile.escape_blocked_by = Some(Side::Enemy);

        let result = engine.execute_turn(BattleAction::Run);

        assert_eq!(result.outcome, None);
        assert!(result.messages().contains(&"Can't escape!"));
        assert_eq!(engine.escape_attempts(), 1);
    }

    #[test]
    fn test_trainer_battle_refuses_to_run() {
        // Arrange: an empty script proves nothing is drawn.
        let mut engine = create_trainer_engine(slow_player(), fast_enemy(), ScriptedRng::new(vec![]));

        // Act
        let result = engine.execute_turn(BattleAction::Run);

        // Assert
        assert!(!result.consumed_turn);
        assert_eq!(result.outcome, None);
        assert_eq!(result.messages(), vec!["No! There's no running from this battle!"]);
        assert_eq!(engine.escape_attempts(), 0);
        assert_eq!(engine.turn_counter(), 0);
    }

    #[test]
    fn test_first_battle_refuses_to_run() {
        let config = BattleConfig {
            first_battle: true,
            ..BattleConfig::wild()
        };
        let mut engine = BattleEngine::new(
            config,
            &slow_player(),
            &fast_enemy(),
            Box::new(ScriptedRng::new(vec![])),
        );

        let result = engine.execute_turn(BattleAction::Run);

        assert!(!result.consumed_turn);
        assert_eq!(result.outcome, None);
    }
}
