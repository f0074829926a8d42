//! Property-based tests for turn resolution and opponent decisions.
//!
//! Run with: cargo test --release properties

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use duel_core::core::{GameRng, Move, MoveCosts, MoveHistory, RulesConfig, ScriptedRolls, Side};
use duel_core::policy::{Archetype, PolicyContext, PolicyTable};
use duel_core::rules::{Resolver, SideInput};

fn any_choice() -> impl Strategy<Value = Move> {
    prop_oneof![
        Just(Move::Strike),
        Just(Move::Shield),
        Just(Move::Observe),
        Just(Move::Gamble),
    ]
}

fn any_input() -> impl Strategy<Value = SideInput> {
    (any_choice(), any::<bool>(), 0i32..=100).prop_map(|(mv, focused, will)| SideInput::new(mv, focused, will))
}

fn any_archetype() -> impl Strategy<Value = Archetype> {
    prop_oneof![
        proptest::sample::select(Archetype::BUILT_IN.to_vec()),
        any::<u16>().prop_map(Archetype::Custom),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig { max_global_rejects: 65536, ..ProptestConfig::with_cases(2000) })]

    /// Affordable moves cost exactly their price; willpower stays in range.
    #[test]
    fn prop_willpower_accounting(player in any_input(), ai in any_input(), roll in 0.0f64..1.0) {
        let config = RulesConfig::default();
        let outcome = Resolver::default().resolve(player, ai, &mut ScriptedRolls::constant(roll));

        for (side, input) in [(Side::Player, player), (Side::Ai, ai)] {
            let result = outcome.side(side);
            prop_assert!((0..=config.max_will).contains(&result.will));

            if input.requested == Move::Observe {
                prop_assert_eq!(result.will, (input.willpower + config.will_regen).min(config.max_will));
            } else if input.willpower >= config.costs.cost(input.requested) {
                prop_assert!(!result.exhausted);
                prop_assert_eq!(result.will, input.willpower - config.costs.cost(input.requested));
            }
        }
    }

    /// Unaffordable moves burn out, whatever the other side does.
    #[test]
    fn prop_burnout(
        mv in prop_oneof![Just(Move::Strike), Just(Move::Shield), Just(Move::Gamble)],
        will in 0i32..100,
        ai in any_input(),
        roll in 0.0f64..1.0,
    ) {
        let costs = MoveCosts::default();
        prop_assume!(will < costs.cost(mv));

        let outcome = Resolver::default().resolve(
            SideInput::new(mv, false, will),
            ai,
            &mut ScriptedRolls::constant(roll),
        );

        prop_assert_eq!(outcome.effective_move(Side::Player), Move::None);
        prop_assert!(outcome.player_exhausted());
        prop_assert_eq!(outcome.player().will, will);

        // Only the ai's own hits add to the burnout damage
        let ai_result = outcome.ai();
        let incoming = match ai_result.effective {
            Move::Strike if ai_result.critical => 25,
            Move::Strike => 15,
            Move::Gamble if ai_result.gamble_won => 35,
            _ => 0,
        };
        prop_assert_eq!(outcome.player().damage, 10 + incoming);
    }

    /// Strike into Shield hurts nobody.
    #[test]
    fn prop_strike_into_shield(focused in any::<bool>(), striker_will in 25i32..=100, shield_will in 15i32..=100) {
        let mut rng = ScriptedRolls::new([]);
        let outcome = Resolver::default().resolve(
            SideInput::new(Move::Strike, focused, striker_will),
            SideInput::new(Move::Shield, focused, shield_will),
            &mut rng,
        );

        prop_assert_eq!(outcome.player().damage, 0);
        prop_assert_eq!(outcome.ai().damage, 0);
        prop_assert!(!outcome.is_critical());
        prop_assert_eq!(rng.taken(), 0);
    }

    /// Gamble into Shield always reflects, without a draw.
    #[test]
    fn prop_gamble_into_shield(focused in any::<bool>(), gambler_will in 35i32..=100, shield_will in 15i32..=100) {
        let mut rng = ScriptedRolls::new([]);
        let outcome = Resolver::default().resolve(
            SideInput::new(Move::Shield, false, shield_will),
            SideInput::new(Move::Gamble, focused, gambler_will),
            &mut rng,
        );

        prop_assert_eq!(outcome.ai().damage, 8);
        prop_assert_eq!(outcome.player().damage, 0);
        prop_assert!(!outcome.is_gamble_success());
        prop_assert_eq!(rng.taken(), 0);
    }

    /// Focused strikes are critical.
    #[test]
    fn prop_focused_strike_is_critical(defender in prop_oneof![Just(Move::Strike), Just(Move::Observe), Just(Move::Gamble)], roll in 0.0f64..1.0) {
        let outcome = Resolver::default().resolve(
            SideInput::new(Move::Strike, true, 75),
            SideInput::new(defender, false, 75),
            &mut ScriptedRolls::constant(roll),
        );

        prop_assert!(outcome.player().critical);
        prop_assert!(outcome.is_critical());
    }

    /// No delta ever heals more than one Observe.
    #[test]
    fn prop_heal_floor(player in any_input(), ai in any_input(), roll in 0.0f64..1.0) {
        let outcome = Resolver::default().resolve(player, ai, &mut ScriptedRolls::constant(roll));
        prop_assert!(outcome.player().damage >= -10);
        prop_assert!(outcome.ai().damage >= -10);
    }

    /// Without Strike or Shield in reach, every archetype observes.
    #[test]
    fn prop_policy_floor(
        archetype in any_archetype(),
        own_will in 0i32..15,
        opponent_will in 0i32..=100,
        history in proptest::collection::vec(any_choice(), 0..20),
        roll in 0.0f64..1.0,
    ) {
        let own = MoveHistory::from(history.clone());
        let opponent = MoveHistory::from(history);
        let ctx = PolicyContext::new(&own, &opponent, own_will, opponent_will, MoveCosts::default());

        let mut rng = ScriptedRolls::new([roll]);
        prop_assert_eq!(PolicyTable::default().choose_move(archetype, &ctx, &mut rng), Move::Observe);
        prop_assert_eq!(rng.taken(), 1);
    }
}

/// A focused Gamble never fails and never draws.
#[test]
fn test_focused_gamble_always_succeeds() {
    let resolver = Resolver::default();
    let mut rng = GameRng::new(2024);

    for i in 0..1000 {
        let defender = [Move::Strike, Move::Observe, Move::Gamble][i % 3];
        let outcome = resolver.resolve(
            SideInput::new(Move::Gamble, true, 75),
            SideInput::new(defender, true, 75),
            &mut rng,
        );
        assert!(outcome.player().gamble_won, "trial {i}");
        assert!(outcome.is_gamble_success());
    }

    // Only focused gambles ran, so the stream is untouched
    assert_eq!(rng.state(), GameRng::new(2024).state());
}
