//! Card instances.
//!
//! A `Card` is one physical card: a unique id, a face value used for
//! payments, and a `CardKind` payload. Cards are created once, when the deck
//! is built, and afterwards only move between piles.

use serde::{Deserialize, Serialize};

use super::action::{ActionCard, ActionKind, RentColors};
use super::color::{Color, WildColors};
use crate::core::{CardId, GameError, IdAllocator};

/// A wild property card and its current color choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WildProperty {
    colors: WildColors,
    assigned: Option<Color>,
}

impl WildProperty {
    #[must_use]
    pub const fn new(colors: WildColors) -> Self {
        Self { colors, assigned: None }
    }

    #[must_use]
    pub const fn colors(&self) -> WildColors {
        self.colors
    }

    #[must_use]
    pub const fn assigned(&self) -> Option<Color> {
        self.assigned
    }

    #[must_use]
    pub fn can_assign(&self, color: Color) -> bool {
        self.colors.allows(color)
    }

    /// Choose the color this card counts as.
    ///
    /// A color outside the card's pair is ignored without error; check
    /// `can_assign` or re-read `assigned` to tell the two apart.
    pub fn assign(&mut self, color: Color) {
        if self.can_assign(color) {
            self.assigned = Some(color);
        }
    }
}

/// What kind of card this is, with its variant data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Cash,
    Property(Color),
    WildProperty(WildProperty),
    Action(ActionCard),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    value: u32,
    kind: CardKind,
}

impl Card {
    /// Build a card whose value comes from the catalog tables.
    ///
    /// Cash has no table entry, so use [`Card::cash`] for it.
    pub fn new(ids: &mut IdAllocator, kind: CardKind) -> Self {
        let value = match kind {
            CardKind::Cash => 0,
            CardKind::Property(color) => color.card_value(),
            CardKind::WildProperty(wild) => wild.colors().card_value(),
            CardKind::Action(action) => action.kind().card_value(),
        };
        Self { id: ids.alloc(), value, kind }
    }

    pub fn cash(ids: &mut IdAllocator, value: u32) -> Self {
        Self { id: ids.alloc(), value, kind: CardKind::Cash }
    }

    pub fn property(ids: &mut IdAllocator, color: Color) -> Self {
        Self::new(ids, CardKind::Property(color))
    }

    pub fn wild_property(ids: &mut IdAllocator, colors: WildColors) -> Self {
        Self::new(ids, CardKind::WildProperty(WildProperty::new(colors)))
    }

    /// An action card of the given kind.
    ///
    /// Two-color rent cards carry their colors, so `ActionKind::Rent` is
    /// rejected here; build those with [`Card::rent`].
    pub fn action(ids: &mut IdAllocator, kind: ActionKind) -> Result<Self, GameError> {
        let action = match kind {
            ActionKind::Rent => return Err(GameError::UncoloredRent { kind }),
            ActionKind::WildRent => ActionCard::Rent(RentColors::Any),
            other => ActionCard::Basic(other),
        };
        Ok(Self::new(ids, CardKind::Action(action)))
    }

    pub fn rent(ids: &mut IdAllocator, colors: RentColors) -> Self {
        Self::new(ids, CardKind::Action(ActionCard::Rent(colors)))
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn kind(&self) -> &CardKind {
        &self.kind
    }

    #[must_use]
    pub fn is_cash(&self) -> bool {
        matches!(self.kind, CardKind::Cash)
    }

    /// Plain or wild property.
    #[must_use]
    pub fn is_property(&self) -> bool {
        matches!(self.kind, CardKind::Property(_) | CardKind::WildProperty(_))
    }

    #[must_use]
    pub fn is_action(&self) -> bool {
        matches!(self.kind, CardKind::Action(_))
    }

    #[must_use]
    pub fn action_kind(&self) -> Option<ActionKind> {
        match self.kind {
            CardKind::Action(action) => Some(action.kind()),
            _ => None,
        }
    }

    /// The color this card counts toward, if it has one yet.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self.kind {
            CardKind::Property(color) => Some(color),
            CardKind::WildProperty(wild) => wild.assigned(),
            _ => None,
        }
    }

    #[must_use]
    pub fn wild(&self) -> Option<&WildProperty> {
        match &self.kind {
            CardKind::WildProperty(wild) => Some(wild),
            _ => None,
        }
    }

    pub fn wild_mut(&mut self) -> Option<&mut WildProperty> {
        match &mut self.kind {
            CardKind::WildProperty(wild) => Some(wild),
            _ => None,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CardKind::Cash => write!(f, "CASH: ${}M", self.value),
            CardKind::Property(color) => write!(f, "PROPERTY: {color}"),
            CardKind::WildProperty(wild) => match (wild.colors().is_any(), wild.assigned()) {
                (true, None) => f.write_str("PROPERTY: Magic Rainbow Wild Card"),
                (true, Some(color)) => {
                    write!(f, "PROPERTY: Magic Rainbow Wild Card - assigned as {color}")
                }
                (false, Some(color)) => {
                    write!(f, "PROPERTY: Wild Card {} - assigned as {color}", wild.colors())
                }
                (false, None) => write!(f, "PROPERTY: Wild Card {} - unassigned", wild.colors()),
            },
            CardKind::Action(action) => write!(f, "{action}"),
        }
    }
}
