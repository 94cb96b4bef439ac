//! Property-based tests for payments, sets, and the win check.

use proptest::prelude::*;

use property_deal::cards::{Card, Color};
use property_deal::core::IdAllocator;
use property_deal::game::{Player, WINNING_SET_COUNT};
use property_deal::piles::PropertySet;

fn color() -> impl Strategy<Value = Color> {
    proptest::sample::select(Color::ALL.to_vec())
}

fn player_with(cash: &[u32], props: &[Color]) -> Player {
    let mut ids = IdAllocator::new();
    let mut player = Player::new("payer");
    for &v in cash {
        player.give_card(Card::cash(&mut ids, v)).unwrap();
    }
    for &c in props {
        player.give_card(Card::property(&mut ids, c)).unwrap();
    }
    player
}

proptest! {
    /// A charge covers the demand whenever the player can afford it,
    /// and otherwise strips the player bare.
    #[test]
    fn prop_charge_covers_or_takes_everything(
        cash in prop::collection::vec(1u32..=10, 0..8),
        props in prop::collection::vec(color(), 0..6),
        amount in 0u32..40,
    ) {
        let mut player = player_with(&cash, &props);
        let before = player.total_value();

        let payment = player.charge(amount);
        let paid: u32 = payment.cards.iter().map(Card::value).sum();

        prop_assert_eq!(paid, payment.total);
        prop_assert_eq!(player.total_value() + paid, before);
        if before >= amount {
            prop_assert!(payment.covers(amount));
        } else {
            prop_assert_eq!(player.total_value(), 0);
            prop_assert_eq!(paid, before);
        }
    }

    /// Bank cards are always spent before properties.
    #[test]
    fn prop_charge_spends_bank_first(
        cash in prop::collection::vec(1u32..=10, 0..8),
        props in prop::collection::vec(color(), 0..6),
        amount in 0u32..40,
    ) {
        let mut player = player_with(&cash, &props);
        let payment = player.charge(amount);

        if let Some(first_prop) = payment.cards.iter().position(Card::is_property) {
            prop_assert!(payment.cards[first_prop..].iter().all(Card::is_property));
            prop_assert!(player.cash_pile().is_empty());
        }
    }

    /// No card is surrendered once the demand is met.
    #[test]
    fn prop_charge_stops_at_first_sufficient_card(
        cash in prop::collection::vec(1u32..=10, 1..8),
        amount in 1u32..40,
    ) {
        let mut player = player_with(&cash, &[]);
        let payment = player.charge(amount);

        let before_last: u32 = payment.cards.iter().rev().skip(1).map(Card::value).sum();
        prop_assert!(before_last < amount);
    }

    /// A set fills after exactly its ladder length and then refuses more.
    #[test]
    fn prop_set_fills_at_ladder_length(c in color()) {
        let ladder = c.charge_ladder();
        let mut set = PropertySet::new(c);
        for n in 1..ladder.len() {
            prop_assert!(!set.is_full());
            prop_assert_eq!(set.charge_value(), ladder[n - 1]);
            set.add().unwrap();
        }

        prop_assert!(set.is_full());
        prop_assert_eq!(set.count(), ladder.len());
        prop_assert_eq!(set.charge_value(), ladder[ladder.len() - 1]);
        prop_assert!(set.add().is_err());
        prop_assert_eq!(set.count(), ladder.len());
    }

    /// Winning is exactly holding enough full sets.
    #[test]
    fn prop_has_won_iff_enough_full_sets(props in prop::collection::vec(color(), 0..30)) {
        let player = player_with(&[], &props);
        let full = player.property_pile().full_set_count();

        prop_assert_eq!(player.has_won(), full >= WINNING_SET_COUNT);
        let listed = player.property_pile().sets().iter().filter(|s| s.is_full()).count();
        prop_assert_eq!(full, listed);
    }
}
