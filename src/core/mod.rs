//! Core engine types: card ids, players, RNG, configuration, errors.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{CardId, IdAllocator};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, DRAW_CONTEXT, SHUFFLE_CONTEXT};
pub use config::GameConfig;
pub use error::{ErrorKind, GameError};
