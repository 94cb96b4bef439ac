//! Property pile with derived sets.
//!
//! ## Set derivation
//!
//! Each added card bumps the first non-full set of its color, or opens a
//! new set when there is none. Full sets are never topped up, so an extra
//! card of a completed color opens a second set of that color.
//!
//! ## Stale sets
//!
//! `remove` takes the card out of the raw pile but leaves the sets as they
//! were. A set can report full after its cards were paid away. Callers that
//! need the live picture should look at `cards()`; `sets()` is the
//! history of what was committed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pile::{Pile, PileRole};
use super::set::PropertySet;
use crate::cards::Card;
use crate::core::GameError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyPile {
    cards: Pile,
    sets: Vec<PropertySet>,
}

impl Default for PropertyPile {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyPile {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Pile::new(PileRole::Property),
            sets: Vec::new(),
        }
    }

    /// Commit a property card.
    ///
    /// Non-property cards and wild cards without a color are rejected and
    /// the pile is left unchanged.
    pub fn add(&mut self, card: Card) -> Result<(), GameError> {
        if !card.is_property() {
            return Err(GameError::NotAProperty { card: card.id() });
        }
        let color = card.color().ok_or(GameError::UnassignedWild { card: card.id() })?;

        self.cards.add(card);
        match self.sets.iter_mut().find(|s| s.color() == color && !s.is_full()) {
            Some(set) => set.add()?,
            None => {
                debug!(%color, "opening new set");
                self.sets.push(PropertySet::new(color));
            }
        }
        Ok(())
    }

    /// Take a card out of the raw pile. Sets are not updated.
    pub fn remove(&mut self, index: usize) -> Result<Card, GameError> {
        self.cards.remove(index)
    }

    pub(crate) fn take_front(&mut self) -> Option<Card> {
        self.cards.take_front()
    }

    pub fn peek(&self, index: usize) -> Result<&Card, GameError> {
        self.cards.peek(index)
    }

    #[must_use]
    pub fn cards(&self) -> &Pile {
        &self.cards
    }

    #[must_use]
    pub fn sets(&self) -> &[PropertySet] {
        &self.sets
    }

    #[must_use]
    pub fn full_set_count(&self) -> usize {
        self.sets.iter().filter(|s| s.is_full()).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn total_value(&self) -> u32 {
        self.cards.total_value()
    }
}

impl std::fmt::Display for PropertyPile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cards)?;
        for set in &self.sets {
            writeln!(f, "\t{set}")?;
        }
        Ok(())
    }
}
