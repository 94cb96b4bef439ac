//! Property colors, wild-card color pairs, and their value tables.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One of the ten property colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Brown,
    Teal,
    Black,
    Water,
    Green,
    Blue,
    Red,
    Yellow,
    Pink,
    Orange,
}

impl Color {
    pub const ALL: [Color; 10] = [
        Color::Brown,
        Color::Teal,
        Color::Black,
        Color::Water,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Yellow,
        Color::Pink,
        Color::Orange,
    ];

    /// Payment value of a set by size: entry `n - 1` is the value of an
    /// `n`-card set, and the last entry is the full-set value.
    #[must_use]
    pub const fn charge_ladder(self) -> &'static [u32] {
        match self {
            Color::Brown => &[1, 2],
            Color::Water => &[1, 2],
            Color::Blue => &[3, 8],
            Color::Teal => &[1, 2, 3],
            Color::Green => &[2, 4, 7],
            Color::Red => &[2, 3, 6],
            Color::Yellow => &[2, 4, 6],
            Color::Pink => &[1, 2, 4],
            Color::Orange => &[1, 3, 5],
            Color::Black => &[1, 2, 3, 4],
        }
    }

    /// Cards needed to complete a set of this color.
    #[must_use]
    pub const fn set_size(self) -> usize {
        self.charge_ladder().len()
    }

    /// Face value of a single property card of this color.
    #[must_use]
    pub const fn card_value(self) -> u32 {
        match self {
            Color::Brown => 1,
            Color::Water => 2,
            Color::Blue => 4,
            Color::Teal => 1,
            Color::Green => 4,
            Color::Red => 3,
            Color::Yellow => 3,
            Color::Pink => 2,
            Color::Orange => 2,
            Color::Black => 2,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Brown => "BROWN",
            Color::Teal => "TEAL",
            Color::Black => "BLACK",
            Color::Water => "WATER",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
            Color::Red => "RED",
            Color::Yellow => "YELLOW",
            Color::Pink => "PINK",
            Color::Orange => "ORANGE",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color: {0}")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// Colors a wild property card may take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WildColors {
    BlueGreen,
    TealBrown,
    OrangePink,
    GreenBlack,
    TealBlack,
    WaterBlack,
    YellowRed,
    /// Fully wild: any color.
    Any,
}

impl WildColors {
    /// The seven two-color pairs, in deck order.
    pub const PAIRS: [WildColors; 7] = [
        WildColors::BlueGreen,
        WildColors::TealBrown,
        WildColors::OrangePink,
        WildColors::GreenBlack,
        WildColors::TealBlack,
        WildColors::WaterBlack,
        WildColors::YellowRed,
    ];

    /// The two colors of a pair, `None` when fully wild.
    #[must_use]
    pub const fn colors(self) -> Option<(Color, Color)> {
        match self {
            WildColors::BlueGreen => Some((Color::Blue, Color::Green)),
            WildColors::TealBrown => Some((Color::Teal, Color::Brown)),
            WildColors::OrangePink => Some((Color::Orange, Color::Pink)),
            WildColors::GreenBlack => Some((Color::Green, Color::Black)),
            WildColors::TealBlack => Some((Color::Teal, Color::Black)),
            WildColors::WaterBlack => Some((Color::Water, Color::Black)),
            WildColors::YellowRed => Some((Color::Yellow, Color::Red)),
            WildColors::Any => None,
        }
    }

    #[must_use]
    pub fn allows(self, color: Color) -> bool {
        match self.colors() {
            Some((a, b)) => color == a || color == b,
            None => true,
        }
    }

    #[must_use]
    pub const fn is_any(self) -> bool {
        matches!(self, WildColors::Any)
    }

    /// Face value of a wild card of this kind. Fully wild cards are worth 0.
    #[must_use]
    pub const fn card_value(self) -> u32 {
        match self {
            WildColors::BlueGreen => 4,
            WildColors::TealBrown => 1,
            WildColors::OrangePink => 2,
            WildColors::GreenBlack => 4,
            WildColors::TealBlack => 4,
            WildColors::WaterBlack => 4,
            WildColors::YellowRed => 3,
            WildColors::Any => 0,
        }
    }
}

impl std::fmt::Display for WildColors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.colors() {
            Some((a, b)) => write!(f, "{a}_{b}"),
            None => f.write_str("WILD"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_lengths() {
        assert_eq!(Color::Brown.set_size(), 2);
        assert_eq!(Color::Water.set_size(), 2);
        assert_eq!(Color::Blue.set_size(), 2);
        assert_eq!(Color::Black.set_size(), 4);
        for color in [Color::Teal, Color::Green, Color::Red, Color::Yellow, Color::Pink, Color::Orange] {
            assert_eq!(color.set_size(), 3, "{color}");
        }
    }

    #[test]
    fn test_full_set_values() {
        assert_eq!(Color::Blue.charge_ladder().last(), Some(&8));
        assert_eq!(Color::Green.charge_ladder().last(), Some(&7));
        assert_eq!(Color::Black.charge_ladder().last(), Some(&4));
        assert_eq!(Color::Brown.charge_ladder(), &[1, 2]);
    }

    #[test]
    fn test_property_card_total() {
        let cards: usize = Color::ALL.iter().map(|c| c.set_size()).sum();
        let value: u32 = Color::ALL.iter().map(|c| c.card_value() * c.set_size() as u32).sum();
        assert_eq!(cards, 28);
        assert_eq!(value, 2 + 4 + 8 + 3 + 12 + 9 + 9 + 6 + 6 + 8);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!("green".parse::<Color>(), Ok(Color::Green));
        assert_eq!("BLACK".parse::<Color>(), Ok(Color::Black));
        assert_eq!(" Teal ".parse::<Color>(), Ok(Color::Teal));
        assert!("purple".parse::<Color>().is_err());
    }

    #[test]
    fn test_wild_pairs() {
        assert!(WildColors::TealBrown.allows(Color::Brown));
        assert!(WildColors::TealBrown.allows(Color::Teal));
        assert!(!WildColors::TealBrown.allows(Color::Black));
        assert!(WildColors::Any.allows(Color::Pink));
        assert!(WildColors::Any.is_any());
        assert_eq!(WildColors::Any.card_value(), 0);
        assert_eq!(WildColors::YellowRed.card_value(), 3);
    }

    #[test]
    fn test_wild_display() {
        assert_eq!(WildColors::BlueGreen.to_string(), "BLUE_GREEN");
        assert_eq!(WildColors::Any.to_string(), "WILD");
    }
}
