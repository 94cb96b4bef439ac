//! Card piles and property sets.
//!
//! ## Key Types
//!
//! - `Pile`: Ordered cards with a `PileRole` (hand, cash, discard, property)
//! - `PropertySet`: Same-colored properties counted against the color's ladder
//! - `PropertyPile`: Committed properties plus the sets derived from them

pub mod pile;
pub mod property;
pub mod set;

pub use pile::{Pile, PileRole};
pub use property::PropertyPile;
pub use set::PropertySet;
