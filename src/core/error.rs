//! Rule violations and illegal-state errors.
//!
//! Soft outcomes (an empty deck, a partial payment, a rejected wild color)
//! are not errors and never appear here.

use thiserror::Error;

use super::entity::CardId;
use crate::cards::{ActionKind, Color};
use crate::piles::PileRole;

/// Broad category of a [`GameError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A data-structure rule was broken. The attempted call had no effect.
    InvariantViolation,
    /// The game is not in a state that allows the call.
    IllegalState,
    /// The game could not be set up.
    Config,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{color} set is full, cannot add another card")]
    SetFull { color: Color },
    #[error("index {index} out of range for {role} with {len} cards")]
    IndexOutOfRange { role: PileRole, index: usize, len: usize },
    #[error("card {card} is not a property and cannot go in a property pile")]
    NotAProperty { card: CardId },
    #[error("wild card {card} has no assigned color")]
    UnassignedWild { card: CardId },
    #[error("card {card} is not a wild property")]
    NotAWildProperty { card: CardId },
    #[error("{kind} card needs its two colors")]
    UncoloredRent { kind: ActionKind },
    #[error("game over - cannot start new turn")]
    GameOver,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl GameError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::SetFull { .. }
            | GameError::IndexOutOfRange { .. }
            | GameError::NotAProperty { .. }
            | GameError::UnassignedWild { .. }
            | GameError::NotAWildProperty { .. }
            | GameError::UncoloredRent { .. } => ErrorKind::InvariantViolation,
            GameError::GameOver => ErrorKind::IllegalState,
            GameError::InvalidConfig(_) => ErrorKind::Config,
        }
    }

    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        self.kind() == ErrorKind::InvariantViolation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(GameError::SetFull { color: Color::Brown }.kind(), ErrorKind::InvariantViolation);
        assert_eq!(GameError::GameOver.kind(), ErrorKind::IllegalState);
        assert_eq!(GameError::InvalidConfig("x".into()).kind(), ErrorKind::Config);
        assert!(GameError::NotAProperty { card: CardId(3) }.is_invariant_violation());
    }

    #[test]
    fn test_messages() {
        let err = GameError::IndexOutOfRange { role: PileRole::Hand, index: 7, len: 2 };
        assert_eq!(err.to_string(), "index 7 out of range for hand with 2 cards");
        assert_eq!(
            GameError::SetFull { color: Color::Black }.to_string(),
            "BLACK set is full, cannot add another card"
        );
    }
}
