#[cfg(test)]
mod tests {
    use crate::battle::action_stack::BattleAction;
    use crate::battle::state::{EventKind, Side};
    use crate::battle::tests::common::{
        create_test_engine, events_of, predictable_rng, print_turn, TestPokemonBuilder,
    };
    use crate::battle::weather::{WeatherKind, WeatherState};
    use crate::pokemon::PrimaryStatus;
    use pretty_assertions::assert_eq;
    use schema::{Move, Species};

    fn growl_engine(player_level: u8) -> crate::battle::engine::BattleEngine {
        let player = TestPokemonBuilder::new(Species::Zigzagoon, player_level)
            .with_moves(vec![Move::Growl])
            .build();
        let enemy = TestPokemonBuilder::new(Species::Poochyena, 20)
            .with_moves(vec![Move::Growl])
            .build();
        create_test_engine(player, enemy, predictable_rng())
    }

    #[test]
    fn test_toxic_damage_escalates_each_turn() {
        // Arrange: a carried-in toxic counter restarts at zero. Max HP 98 gives 6 per step.
        let player = TestPokemonBuilder::new(Species::Zigzagoon, 50)
            .with_moves(vec![Move::Growl])
            .with_status(PrimaryStatus::Toxic(4))
            .build();
        let enemy = TestPokemonBuilder::new(Species::Poochyena, 20)
            .with_moves(vec![Move::Growl])
            .build();
        let mut engine = create_test_engine(player, enemy, predictable_rng());
        assert_eq!(engine.player().status(), PrimaryStatus::Toxic(0));

        // Act
        let first = engine.execute_turn(BattleAction::fight(Move::Growl, 0));
        let second = engine.execute_turn(BattleAction::fight(Move::Growl, 0));
        print_turn(&second, "Events for second toxic turn:");

        // Assert
        let first_tick = events_of(&first, EventKind::Damage, Side::Player);
        let second_tick = events_of(&second, EventKind::Damage, Side::Player);
        assert_eq!(first_tick[0].value, Some(6));
        assert_eq!(second_tick[0].value, Some(12));
        assert_eq!(second_tick[0].message.as_deref(), Some("ZIGZAGOON is hurt by poison!"));
        assert_eq!(engine.player().current_hp, 98 - 18);
        assert_eq!(engine.player().status(), PrimaryStatus::Toxic(2));
    }

    #[test]
    fn test_leech_seed_heals_the_opponent() {
        // Arrange: max HP 45 drains 5; the foe is only missing 3.
        let mut engine = growl_engine(20);
        engine.player_mut().volatile.leech_seed = true;
        let enemy_max = engine.enemy().max_hp;
        engine.enemy_mut().current_hp = enemy_max - 3;

        // Act
        let result = engine.execute_turn(BattleAction::fight(Move::Growl, 0));

        // Assert
        let drain = events_of(&result, EventKind::Drain, Side::Player);
        assert_eq!(drain.len(), 1);
        assert_eq!(drain[0].value, Some(5));
        assert_eq!(
            drain[0].message.as_deref(),
            Some("ZIGZAGOON's health is sapped by Leech Seed!")
        );
        assert_eq!(engine.player().current_hp, 40);
        assert_eq!(engine.enemy().current_hp, enemy_max);
    }

    #[test]
    fn test_sandstorm_chips_then_subsides() {
        let mut engine = growl_engine(20);
        engine.set_weather(WeatherState::with_turns(WeatherKind::Sandstorm, 1));

        let result = engine.execute_turn(BattleAction::fight(Move::Growl, 0));

        assert!(result.has_event(EventKind::WeatherDamage, Some(Side::Player)));
        assert!(result.has_event(EventKind::WeatherDamage, Some(Side::Enemy)));
        assert!(result.messages().contains(&"The sandstorm subsided."));
        assert_eq!(engine.weather(), WeatherState::default());
    }

    #[test]
    fn test_ability_weather_never_expires() {
        let mut engine = growl_engine(20);
        engine.set_weather(WeatherState::permanent(WeatherKind::Rain));

        for _ in 0..8 {
            engine.execute_turn(BattleAction::fight(Move::Growl, 0));
        }

        assert_eq!(engine.weather().kind, WeatherKind::Rain);
    }

    #[test]
    fn test_disable_wears_off_at_end_of_turn() {
        let player = TestPokemonBuilder::new(Species::Zigzagoon, 20)
            .with_moves(vec![Move::Tackle, Move::Growl])
            .build();
        let enemy = TestPokemonBuilder::new(Species::Poochyena, 20)
            .with_moves(vec![Move::Growl])
            .build();
        let mut engine = create_test_engine(player, enemy, predictable_rng());
        engine.player_mut().volatile.disable_turns = 1;
        engine.player_mut().volatile.disabled_move = Some(Move::Tackle);

        let result = engine.execute_turn(BattleAction::fight(Move::Tackle, 0));

        assert!(!result.has_event(EventKind::Damage, Some(Side::Enemy)));
        assert!(result.messages().contains(&"ZIGZAGOON's TACKLE is disabled no more!"));
        assert_eq!(engine.player().volatile.disabled_move, None);
    }

    #[test]
    fn test_screens_expire_with_a_message() {
        let mut engine = growl_engine(20);
        engine.side_state_mut(Side::Enemy).reflect_turns = 1;
        engine.side_state_mut(Side::Player).mist_turns = 2;

        let result = engine.execute_turn(BattleAction::fight(Move::Growl, 0));

        assert!(result.messages().contains(&"Foe's Reflect wore off!"));
        assert_eq!(engine.side_state(Side::Player).mist_turns, 1);
    }
}
