//! The shared draw deck.

use tracing::debug;

use super::composition::standard_cards;
use crate::cards::Card;
use crate::core::{CardId, GameRng, IdAllocator};

/// Cards not yet drawn.
///
/// Drawing picks a uniformly random remaining card, on top of the shuffle
/// done at construction. The deck is never refilled.
///
/// ```
/// use property_deal::core::{GameRng, IdAllocator};
/// use property_deal::deck::Deck;
///
/// let rng = GameRng::new(42);
/// let mut deck = Deck::standard(&mut IdAllocator::new(), &mut rng.for_context("deck-shuffle"));
/// let mut draws = rng.for_context("deck-draw");
///
/// assert_eq!(deck.len(), 108);
/// assert!(deck.draw_card(&mut draws).is_some());
/// assert_eq!(deck.len(), 107);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build and shuffle the standard 108-card deck.
    pub fn standard(ids: &mut IdAllocator, shuffle_rng: &mut GameRng) -> Self {
        let mut cards = standard_cards(ids);
        shuffle_rng.shuffle(&mut cards);
        debug!(cards = cards.len(), "built standard deck");
        Self { cards }
    }

    /// A deck holding exactly these cards, in this order, unshuffled.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Remove and return a random remaining card, or `None` once empty.
    pub fn draw_card(&mut self, rng: &mut GameRng) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let index = rng.gen_range_usize(0..self.cards.len());
        Some(self.cards.remove(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id() == id)
    }
}
