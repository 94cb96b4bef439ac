//! Ordered card piles.
//!
//! Storage is an `im::Vector` so cloning a pile (and a whole game) shares
//! structure instead of copying every card.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::GameError;

/// What a pile is used for. Carried into error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileRole {
    /// Drawn, not yet played.
    Hand,
    /// Bank: cash and banked action cards.
    Cash,
    /// Spent action cards.
    Discard,
    /// Committed properties.
    Property,
}

impl PileRole {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            PileRole::Hand => "HAND",
            PileRole::Cash => "CASH PILE",
            PileRole::Discard => "DISCARD PILE",
            PileRole::Property => "PROPERTY PILE",
        }
    }
}

impl std::fmt::Display for PileRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PileRole::Hand => "hand",
            PileRole::Cash => "cash pile",
            PileRole::Discard => "discard pile",
            PileRole::Property => "property pile",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    role: PileRole,
    cards: Vector<Card>,
}

impl Pile {
    #[must_use]
    pub fn new(role: PileRole) -> Self {
        Self { role, cards: Vector::new() }
    }

    #[must_use]
    pub fn role(&self) -> PileRole {
        self.role
    }

    /// Append to the end.
    pub fn add(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove the card at `index`, shifting later cards down.
    pub fn remove(&mut self, index: usize) -> Result<Card, GameError> {
        self.check_index(index)?;
        Ok(self.cards.remove(index))
    }

    /// Remove the first card, if any.
    pub fn take_front(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Look at the card at `index` without removing it.
    pub fn peek(&self, index: usize) -> Result<&Card, GameError> {
        self.cards.get(index).ok_or(GameError::IndexOutOfRange {
            role: self.role,
            index,
            len: self.cards.len(),
        })
    }

    pub fn peek_mut(&mut self, index: usize) -> Result<&mut Card, GameError> {
        let (role, len) = (self.role, self.cards.len());
        self.cards
            .get_mut(index)
            .ok_or(GameError::IndexOutOfRange { role, index, len })
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

    /// Sum of face values.
    #[must_use]
    pub fn total_value(&self) -> u32 {
        self.cards.iter().map(Card::value).sum()
    }

    fn check_index(&self, index: usize) -> Result<(), GameError> {
        if index < self.cards.len() {
            Ok(())
        } else {
            Err(GameError::IndexOutOfRange {
                role: self.role,
                index,
                len: self.cards.len(),
            })
        }
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}: ", self.role.title())?;
        for (i, card) in self.cards.iter().enumerate() {
            if self.role == PileRole::Hand {
                writeln!(f, "\t{i}. {card}")?;
            } else {
                writeln!(f, "\t{card}")?;
            }
        }
        Ok(())
    }
}
