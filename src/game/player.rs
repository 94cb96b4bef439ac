//! A seat at the table: hand, bank, and committed properties.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{Card, CardKind, Color};
use crate::core::GameError;
use crate::piles::{Pile, PileRole, PropertyPile};

/// Full sets needed to win.
pub const WINNING_SET_COUNT: usize = 3;

/// Cards surrendered by a charge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Payment {
    /// Cards in the order they were taken.
    pub cards: SmallVec<[Card; 4]>,
    /// Summed face value.
    pub total: u32,
}

impl Payment {
    /// True when the payment met the demand.
    #[must_use]
    pub fn covers(&self, amount: u32) -> bool {
        self.total >= amount
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Pile,
    cash: Pile,
    properties: PropertyPile,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Pile::new(PileRole::Hand),
            cash: Pile::new(PileRole::Cash),
            properties: PropertyPile::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &Pile {
        &self.hand
    }

    #[must_use]
    pub fn cash_pile(&self) -> &Pile {
        &self.cash
    }

    #[must_use]
    pub fn property_pile(&self) -> &PropertyPile {
        &self.properties
    }

    /// Put a drawn card in the hand.
    pub fn deal_card(&mut self, card: Card) {
        self.hand.add(card);
    }

    /// Route a received card by kind: properties to the property pile,
    /// cash and actions to the bank.
    pub fn give_card(&mut self, card: Card) -> Result<(), GameError> {
        match card.kind() {
            CardKind::Property(_) | CardKind::WildProperty(_) => self.properties.add(card),
            CardKind::Cash | CardKind::Action(_) => {
                self.cash.add(card);
                Ok(())
            }
        }
    }

    pub fn give_cards(&mut self, cards: impl IntoIterator<Item = Card>) -> Result<(), GameError> {
        for card in cards {
            self.give_card(card)?;
        }
        Ok(())
    }

    /// Move a hand card into the property pile.
    ///
    /// The card is checked before it leaves the hand, so a rejected move
    /// changes nothing.
    pub fn move_card_to_properties(&mut self, index: usize) -> Result<(), GameError> {
        let card = self.hand.peek(index)?;
        if !card.is_property() {
            return Err(GameError::NotAProperty { card: card.id() });
        }
        if card.color().is_none() {
            return Err(GameError::UnassignedWild { card: card.id() });
        }
        let card = self.hand.remove(index)?;
        self.properties.add(card)
    }

    /// Bank a hand card, whatever its kind.
    pub fn move_card_to_cash(&mut self, index: usize) -> Result<(), GameError> {
        let card = self.hand.remove(index)?;
        self.cash.add(card);
        Ok(())
    }

    /// Take a card out of the hand.
    pub fn take_card(&mut self, index: usize) -> Result<Card, GameError> {
        self.hand.remove(index)
    }

    /// Pick the color of a wild card in hand.
    ///
    /// A color the card does not allow is ignored, as with
    /// [`WildProperty::assign`](crate::cards::WildProperty::assign).
    pub fn assign_wild(&mut self, index: usize, color: Color) -> Result<(), GameError> {
        let card = self.hand.peek_mut(index)?;
        let id = card.id();
        let wild = card.wild_mut().ok_or(GameError::NotAWildProperty { card: id })?;
        wild.assign(color);
        Ok(())
    }

    /// Surrender cards worth at least `amount`.
    ///
    /// Takes from the front of the bank, then the front of the property
    /// pile, stopping as soon as the running total reaches `amount`. Cards
    /// are never split, so the payment can overshoot. If everything is not
    /// enough, everything is returned.
    ///
    /// Properties leave through the raw pile, so the derived sets keep
    /// their counts. See the stale-set note on [`PropertyPile`].
    pub fn charge(&mut self, amount: u32) -> Payment {
        let mut payment = Payment::default();

        while payment.total < amount {
            let Some(card) = self.cash.take_front().or_else(|| self.properties.take_front()) else {
                break;
            };
            payment.total += card.value();
            payment.cards.push(card);
        }

        debug!(
            player = %self.name,
            amount,
            paid = payment.total,
            cards = payment.cards.len(),
            "charged"
        );
        payment
    }

    /// Three or more full sets, of any colors.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.properties.full_set_count() >= WINNING_SET_COUNT
    }

    /// Value available in the bank.
    #[must_use]
    pub fn bank_value(&self) -> u32 {
        self.cash.total_value()
    }

    /// Value available to a charge: bank plus properties.
    #[must_use]
    pub fn total_value(&self) -> u32 {
        self.cash.total_value() + self.properties.total_value()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}:", self.name)?;
        write!(f, "{}{}{}", self.hand, self.cash, self.properties)
    }
}
