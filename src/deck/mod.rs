//! Deck construction and drawing.
//!
//! - `composition`: Standard card counts and unshuffled card creation
//! - `draw_pile`: The `Deck` players draw from

pub mod composition;
pub mod draw_pile;

pub use composition::{standard_cards, standard_deck_size};
pub use draw_pile::Deck;
