//! Card catalog: colors, action kinds, value tables, and card instances.
//!
//! ## Key Types
//!
//! - `Color`: The ten property colors, with charge ladders and card values
//! - `WildColors`: The seven wild pairs plus the fully wild card
//! - `ActionKind`: The twelve action kinds, with bank values
//! - `ActionCard`: Action payload, basic or rent
//! - `Card` / `CardKind`: A physical card and its variant data

pub mod action;
pub mod card;
pub mod color;

pub use action::{ActionCard, ActionKind, RentColors};
pub use card::{Card, CardKind, WildProperty};
pub use color::{Color, ParseColorError, WildColors};
