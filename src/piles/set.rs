//! Property sets derived from a property pile.

use serde::{Deserialize, Serialize};

use crate::cards::Color;
use crate::core::GameError;

/// Running aggregate of same-colored properties.
///
/// `count` only grows. Once it reaches the color's ladder length the set is
/// full and refuses further cards.
///
/// ```
/// use property_deal::cards::Color;
/// use property_deal::piles::PropertySet;
///
/// let mut set = PropertySet::new(Color::Brown);
/// assert_eq!(set.charge_value(), 1);
/// set.add().unwrap();
/// assert!(set.is_full());
/// assert_eq!(set.charge_value(), 2);
/// assert!(set.add().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySet {
    color: Color,
    count: usize,
    charge_value: u32,
    full: bool,
}

impl PropertySet {
    /// A set holding its first card.
    #[must_use]
    pub fn new(color: Color) -> Self {
        let ladder = color.charge_ladder();
        Self {
            color,
            count: 1,
            charge_value: ladder[0],
            full: ladder.len() == 1,
        }
    }

    /// Count one more card. Fails without change when already full.
    pub fn add(&mut self) -> Result<(), GameError> {
        if self.full {
            return Err(GameError::SetFull { color: self.color });
        }
        let ladder = self.color.charge_ladder();
        self.count += 1;
        self.charge_value = ladder[self.count - 1];
        self.full = self.count == ladder.len();
        Ok(())
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn charge_value(&self) -> u32 {
        self.charge_value
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.full
    }
}

impl std::fmt::Display for PropertySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.full {
            write!(f, "FULL SET! - {}", self.color)
        } else {
            write!(f, "SET - {} - {} properties", self.color, self.count)
        }
    }
}
