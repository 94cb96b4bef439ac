//! Deck construction and drawing.

use std::collections::HashSet;

use property_deal::cards::{ActionKind, CardKind, Color};
use property_deal::core::{GameRng, IdAllocator, DRAW_CONTEXT, SHUFFLE_CONTEXT};
use property_deal::deck::{standard_cards, standard_deck_size, Deck};

fn shuffled(seed: u64) -> Deck {
    let rng = GameRng::new(seed);
    Deck::standard(&mut IdAllocator::new(), &mut rng.for_context(SHUFFLE_CONTEXT))
}

#[test]
fn test_standard_deck_has_108_distinct_cards() {
    let deck = shuffled(1);
    assert_eq!(deck.len(), 108);
    assert_eq!(standard_deck_size(), 108);

    let ids: HashSet<_> = deck.iter().map(|c| c.id()).collect();
    assert_eq!(ids.len(), 108);
}

#[test]
fn test_standard_composition() {
    let cards = standard_cards(&mut IdAllocator::new());

    let cash = cards.iter().filter(|c| matches!(c.kind(), CardKind::Cash)).count();
    let plain = cards.iter().filter(|c| matches!(c.kind(), CardKind::Property(_))).count();
    let wild = cards.iter().filter(|c| matches!(c.kind(), CardKind::WildProperty(_))).count();
    assert_eq!((cash, plain, wild), (20, 28, 11));

    let actions: Vec<_> = cards.iter().filter_map(|c| c.action_kind()).collect();
    assert_eq!(actions.len(), 49);
    assert_eq!(actions.iter().filter(|k| k.is_rent()).count(), 13);
    assert_eq!(actions.iter().filter(|&&k| k == ActionKind::PassGo).count(), 10);

    let blacks = cards.iter().filter(|c| c.color() == Some(Color::Black)).count();
    assert_eq!(blacks, Color::Black.set_size());
}

#[test]
fn test_draws_never_repeat_and_end_with_none() {
    let mut deck = shuffled(7);
    let mut rng = GameRng::new(7).for_context(DRAW_CONTEXT);
    let mut seen = HashSet::new();

    for remaining in (0..108).rev() {
        let card = deck.draw_card(&mut rng).unwrap();
        assert!(seen.insert(card.id()), "{} drawn twice", card.id());
        assert!(!deck.contains(card.id()));
        assert_eq!(deck.len(), remaining);
    }

    assert!(deck.is_empty());
    assert!(deck.draw_card(&mut rng).is_none());
    assert!(deck.draw_card(&mut rng).is_none());
}

#[test]
fn test_seed_determines_order() {
    let order = |deck: &Deck| deck.iter().map(|c| c.id()).collect::<Vec<_>>();

    assert_eq!(order(&shuffled(11)), order(&shuffled(11)));
    assert_ne!(order(&shuffled(11)), order(&shuffled(12)));
}
