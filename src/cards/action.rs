//! Action card kinds and rent cards.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// The twelve action kinds. Rent and WildRent are the two rent sub-kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    JustSayNo,
    DealBreaker,
    Birthday,
    DebtCollector,
    DoubleTheRent,
    ForcedDeal,
    SlyDeal,
    House,
    Hotel,
    PassGo,
    Rent,
    WildRent,
}

impl ActionKind {
    pub const ALL: [ActionKind; 12] = [
        ActionKind::JustSayNo,
        ActionKind::DealBreaker,
        ActionKind::Birthday,
        ActionKind::DebtCollector,
        ActionKind::DoubleTheRent,
        ActionKind::ForcedDeal,
        ActionKind::SlyDeal,
        ActionKind::House,
        ActionKind::Hotel,
        ActionKind::PassGo,
        ActionKind::Rent,
        ActionKind::WildRent,
    ];

    /// Bank value of an action card of this kind.
    #[must_use]
    pub const fn card_value(self) -> u32 {
        match self {
            ActionKind::JustSayNo => 4,
            ActionKind::DealBreaker => 5,
            ActionKind::Birthday => 2,
            ActionKind::DebtCollector => 3,
            ActionKind::DoubleTheRent => 1,
            ActionKind::ForcedDeal => 3,
            ActionKind::SlyDeal => 3,
            ActionKind::House => 3,
            ActionKind::Hotel => 4,
            ActionKind::PassGo => 1,
            ActionKind::Rent => 1,
            ActionKind::WildRent => 3,
        }
    }

    #[must_use]
    pub const fn is_rent(self) -> bool {
        matches!(self, ActionKind::Rent | ActionKind::WildRent)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::JustSayNo => "JSN",
            ActionKind::DealBreaker => "DEALBRK",
            ActionKind::Birthday => "BIRTHDAY",
            ActionKind::DebtCollector => "DEBT",
            ActionKind::DoubleTheRent => "DOUBLE",
            ActionKind::ForcedDeal => "FORCED",
            ActionKind::SlyDeal => "SLY",
            ActionKind::House => "HOUSE",
            ActionKind::Hotel => "HOTEL",
            ActionKind::PassGo => "PASSGO",
            ActionKind::Rent => "RENT",
            ActionKind::WildRent => "WILDRENT",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Colors a rent card charges for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RentColors {
    Pair(Color, Color),
    Any,
}

impl RentColors {
    /// The five two-color rent cards in the deck.
    pub const PAIRS: [RentColors; 5] = [
        RentColors::Pair(Color::Green, Color::Blue),
        RentColors::Pair(Color::Brown, Color::Teal),
        RentColors::Pair(Color::Pink, Color::Orange),
        RentColors::Pair(Color::Black, Color::Water),
        RentColors::Pair(Color::Red, Color::Yellow),
    ];
}

/// Payload of an action card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionCard {
    /// Any non-rent action.
    Basic(ActionKind),
    /// A rent card, two-color or wild.
    Rent(RentColors),
}

impl ActionCard {
    #[must_use]
    pub const fn kind(self) -> ActionKind {
        match self {
            ActionCard::Basic(kind) => kind,
            ActionCard::Rent(RentColors::Pair(..)) => ActionKind::Rent,
            ActionCard::Rent(RentColors::Any) => ActionKind::WildRent,
        }
    }

    #[must_use]
    pub const fn rent_colors(self) -> Option<RentColors> {
        match self {
            ActionCard::Rent(colors) => Some(colors),
            ActionCard::Basic(_) => None,
        }
    }
}

impl std::fmt::Display for ActionCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionCard::Basic(kind) => write!(f, "ACTION: {kind}"),
            ActionCard::Rent(RentColors::Pair(a, b)) => write!(f, "RENT: {a} or {b}"),
            ActionCard::Rent(RentColors::Any) => f.write_str("RENT: Wild Rent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rent_kinds() {
        let pair = ActionCard::Rent(RentColors::Pair(Color::Red, Color::Yellow));
        let wild = ActionCard::Rent(RentColors::Any);

        assert_eq!(pair.kind(), ActionKind::Rent);
        assert_eq!(wild.kind(), ActionKind::WildRent);
        assert_eq!(pair.kind().card_value(), 1);
        assert_eq!(wild.kind().card_value(), 3);
        assert!(wild.kind().is_rent());
        assert_eq!(ActionCard::Basic(ActionKind::Hotel).rent_colors(), None);
    }

    #[test]
    fn test_rent_pairs_cover_all_colors() {
        let mut covered: Vec<Color> = RentColors::PAIRS
            .iter()
            .flat_map(|r| match r {
                RentColors::Pair(a, b) => vec![*a, *b],
                RentColors::Any => vec![],
            })
            .collect();
        covered.sort();
        let mut all = Color::ALL.to_vec();
        all.sort();
        assert_eq!(covered, all);
    }

    #[test]
    fn test_display() {
        assert_eq!(ActionCard::Basic(ActionKind::Birthday).to_string(), "ACTION: BIRTHDAY");
        assert_eq!(
            ActionCard::Rent(RentColors::Pair(Color::Green, Color::Blue)).to_string(),
            "RENT: GREEN or BLUE"
        );
    }
}
