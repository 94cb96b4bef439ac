//! Players, the turn engine, and action effects.
//!
//! ## Key Types
//!
//! - `Player`: Hand, bank, and property pile, with payment and win check
//! - `Game`: Deck, discard pile, seats, and the turn state machine
//! - `EffectRegistry`: Action effects looked up by kind

pub mod effects;
pub mod engine;
pub mod player;

pub use effects::{ActionEffect, CollectFromOpponents, DrawCards, EffectContext, EffectRegistry};
pub use engine::{Game, PlayOutcome, TurnEnd, TurnPhase};
pub use player::{Payment, Player, WINNING_SET_COUNT};
