//! Standard deck composition.
//!
//! Counts are listed in the order cards are created, which fixes the id
//! each card receives before the shuffle.

use crate::cards::{ActionCard, ActionKind, Card, CardKind, Color, RentColors, WildColors};
use crate::core::IdAllocator;

/// Wild property cards per kind.
pub const WILD_PROPERTY_COUNTS: [(WildColors, usize); 8] = [
    (WildColors::BlueGreen, 1),
    (WildColors::TealBrown, 1),
    (WildColors::OrangePink, 2),
    (WildColors::GreenBlack, 1),
    (WildColors::TealBlack, 1),
    (WildColors::WaterBlack, 1),
    (WildColors::YellowRed, 2),
    (WildColors::Any, 2),
];

/// Non-rent action cards per kind.
pub const ACTION_COUNTS: [(ActionKind, usize); 10] = [
    (ActionKind::DealBreaker, 2),
    (ActionKind::DoubleTheRent, 2),
    (ActionKind::JustSayNo, 3),
    (ActionKind::Birthday, 3),
    (ActionKind::DebtCollector, 3),
    (ActionKind::SlyDeal, 3),
    (ActionKind::House, 3),
    (ActionKind::Hotel, 3),
    (ActionKind::ForcedDeal, 4),
    (ActionKind::PassGo, 10),
];

pub const WILD_RENT_COUNT: usize = 3;

/// Copies of each two-color rent card.
pub const RENT_PAIR_COUNT: usize = 2;

/// Cash cards as (denomination, copies).
pub const CASH_COUNTS: [(u32, usize); 6] = [(1, 6), (2, 5), (3, 3), (4, 3), (5, 2), (10, 1)];

/// Total cards in a standard deck.
#[must_use]
pub fn standard_deck_size() -> usize {
    let properties: usize = Color::ALL.iter().map(|c| c.set_size()).sum();
    let wilds: usize = WILD_PROPERTY_COUNTS.iter().map(|(_, n)| n).sum();
    let actions: usize = ACTION_COUNTS.iter().map(|(_, n)| n).sum();
    let rents = WILD_RENT_COUNT + RENT_PAIR_COUNT * RentColors::PAIRS.len();
    let cash: usize = CASH_COUNTS.iter().map(|(_, n)| n).sum();
    properties + wilds + actions + rents + cash
}

/// Create every card of a standard deck, unshuffled.
pub fn standard_cards(ids: &mut IdAllocator) -> Vec<Card> {
    let mut cards = Vec::with_capacity(standard_deck_size());

    // One property per ladder step
    for color in Color::ALL {
        for _ in 0..color.set_size() {
            cards.push(Card::property(ids, color));
        }
    }

    for (colors, count) in WILD_PROPERTY_COUNTS {
        for _ in 0..count {
            cards.push(Card::wild_property(ids, colors));
        }
    }

    for (kind, count) in ACTION_COUNTS {
        for _ in 0..count {
            cards.push(Card::new(ids, CardKind::Action(ActionCard::Basic(kind))));
        }
    }

    for _ in 0..WILD_RENT_COUNT {
        cards.push(Card::rent(ids, RentColors::Any));
    }
    for colors in RentColors::PAIRS {
        for _ in 0..RENT_PAIR_COUNT {
            cards.push(Card::rent(ids, colors));
        }
    }

    for (denomination, count) in CASH_COUNTS {
        for _ in 0..count {
            cards.push(Card::cash(ids, denomination));
        }
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_size() {
        assert_eq!(standard_deck_size(), 108);

        let mut ids = IdAllocator::new();
        let cards = standard_cards(&mut ids);
        assert_eq!(cards.len(), 108);
        assert_eq!(ids.allocated(), 108);
    }

    #[test]
    fn test_category_counts() {
        let mut ids = IdAllocator::new();
        let cards = standard_cards(&mut ids);

        let count = |pred: fn(&Card) -> bool| cards.iter().filter(|c| pred(c)).count();

        assert_eq!(count(|c| matches!(c.kind(), CardKind::Property(_))), 28);
        assert_eq!(count(|c| matches!(c.kind(), CardKind::WildProperty(_))), 11);
        assert_eq!(count(|c| c.is_action() && !c.action_kind().unwrap().is_rent()), 36);
        assert_eq!(count(|c| c.action_kind().is_some_and(ActionKind::is_rent)), 13);
        assert_eq!(count(Card::is_cash), 20);
    }

    #[test]
    fn test_rent_cards_carry_colors() {
        let mut ids = IdAllocator::new();
        for card in standard_cards(&mut ids) {
            if let CardKind::Action(action) = card.kind() {
                assert_eq!(action.kind().is_rent(), action.rent_colors().is_some(), "{card}");
            }
        }
    }

    #[test]
    fn test_cash_total() {
        let mut ids = IdAllocator::new();
        let total: u32 = standard_cards(&mut ids)
            .iter()
            .filter(|c| c.is_cash())
            .map(Card::value)
            .sum();
        assert_eq!(total, 6 + 10 + 9 + 12 + 10 + 10);
    }

    #[test]
    fn test_pass_go_count() {
        let mut ids = IdAllocator::new();
        let pass_go = standard_cards(&mut ids)
            .iter()
            .filter(|c| c.action_kind() == Some(ActionKind::PassGo))
            .count();
        assert_eq!(pass_go, 10);
    }
}
