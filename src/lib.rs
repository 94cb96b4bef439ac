//! # property-deal
//!
//! Rules engine for a property-trading card game: players bank cash, lay
//! down colored properties into sets, and play action cards until someone
//! holds three full sets.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows from the config seed through
//!    `GameRng`. The same seed deals the same game.
//!
//! 2. **N-Player**: Seats are `PlayerId`s in a `PlayerMap`; nothing assumes
//!    two players.
//!
//! 3. **Open Effects**: Action cards resolve through an `EffectRegistry`, so
//!    new effects are registered rather than hardcoded in the turn engine.
//!
//! ## Modules
//!
//! - `core`: Card ids, players, RNG, configuration, errors
//! - `cards`: Colors, action kinds, value tables, card instances
//! - `deck`: Standard deck composition and drawing
//! - `piles`: Hand, bank, discard, and property piles with derived sets
//! - `game`: Players, the turn engine, action effects
//! - `turn_loop`: Text command driver

pub mod core;
pub mod cards;
pub mod deck;
pub mod piles;
pub mod game;
pub mod turn_loop;

// Re-export commonly used types
pub use crate::core::{
    CardId, IdAllocator,
    PlayerId, PlayerMap,
    GameRng,
    GameConfig,
    ErrorKind, GameError,
};

pub use crate::cards::{ActionCard, ActionKind, Card, CardKind, Color, RentColors, WildColors, WildProperty};

pub use crate::deck::Deck;

pub use crate::piles::{Pile, PileRole, PropertyPile, PropertySet};

pub use crate::game::{
    ActionEffect, EffectContext, EffectRegistry,
    Game, PlayOutcome, TurnEnd, TurnPhase,
    Payment, Player,
};

pub use crate::turn_loop::{Command, CommandError, LoopEnd, LoopError, TurnLoop};
