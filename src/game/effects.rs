//! Action card effects.
//!
//! Effects are looked up by `ActionKind` in an `EffectRegistry`. A kind with
//! no entry is legal to play but does nothing, so new effects can be added
//! by registering them without touching the turn engine.
//!
//! ```
//! use property_deal::cards::{ActionKind, Card};
//! use property_deal::core::{GameConfig, GameError};
//! use property_deal::game::{ActionEffect, EffectContext, EffectRegistry};
//!
//! #[derive(Debug)]
//! struct DrawOne;
//!
//! impl ActionEffect for DrawOne {
//!     fn resolve(&self, ctx: &mut EffectContext<'_>, _card: &Card) -> Result<(), GameError> {
//!         ctx.draw_to_hand(ctx.active, 1);
//!         Ok(())
//!     }
//! }
//!
//! let mut registry = EffectRegistry::standard(&GameConfig::default());
//! assert!(!registry.contains(ActionKind::DebtCollector));
//! registry.register(ActionKind::DebtCollector, DrawOne);
//! assert!(registry.contains(ActionKind::DebtCollector));
//! ```

use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::debug;

use super::player::Player;
use crate::cards::{ActionKind, Card};
use crate::core::{GameConfig, GameError, GameRng, PlayerId, PlayerMap};
use crate::deck::Deck;

/// Mutable view of the table handed to an effect.
pub struct EffectContext<'a> {
    /// All players in seat order.
    pub players: &'a mut PlayerMap<Player>,
    /// Whose turn it is.
    pub active: PlayerId,
    /// Shared draw deck.
    pub deck: &'a mut Deck,
    /// Stream used for per-draw selection.
    pub draw_rng: &'a mut GameRng,
    pub config: &'a GameConfig,
}

impl EffectContext<'_> {
    /// Draw up to `count` cards into a player's hand.
    ///
    /// Stops early when the deck runs out. Returns how many were drawn.
    pub fn draw_to_hand(&mut self, player: PlayerId, count: usize) -> usize {
        let Some(seat) = self.players.get_mut(player) else {
            return 0;
        };
        let mut drawn = 0;
        for _ in 0..count {
            match self.deck.draw_card(self.draw_rng) {
                Some(card) => {
                    seat.deal_card(card);
                    drawn += 1;
                }
                None => {
                    debug!(%player, "deck exhausted");
                    break;
                }
            }
        }
        drawn
    }

    /// Seats other than the active one.
    pub fn opponents(&self) -> Vec<PlayerId> {
        self.players.player_ids().filter(|&p| p != self.active).collect()
    }
}

/// Behavior of an action card played for effect.
pub trait ActionEffect: Send + Sync + std::fmt::Debug {
    fn resolve(&self, ctx: &mut EffectContext<'_>, card: &Card) -> Result<(), GameError>;
}

/// Every opponent pays the active player (Birthday).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectFromOpponents {
    pub amount: u32,
}

impl ActionEffect for CollectFromOpponents {
    fn resolve(&self, ctx: &mut EffectContext<'_>, _card: &Card) -> Result<(), GameError> {
        for payer_id in ctx.opponents() {
            let Some((payer, collector)) = ctx.players.pair_mut(payer_id, ctx.active) else {
                continue;
            };
            let payment = payer.charge(self.amount);
            debug!(
                from = %payer.name(),
                to = %collector.name(),
                paid = payment.total,
                demanded = self.amount,
                "collected payment"
            );
            collector.give_cards(payment.cards)?;
        }
        Ok(())
    }
}

/// The active player draws more cards (Pass Go).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawCards {
    pub count: usize,
}

impl ActionEffect for DrawCards {
    fn resolve(&self, ctx: &mut EffectContext<'_>, _card: &Card) -> Result<(), GameError> {
        let active = ctx.active;
        ctx.draw_to_hand(active, self.count);
        Ok(())
    }
}

/// Effect lookup by action kind.
#[derive(Clone, Debug, Default)]
pub struct EffectRegistry {
    effects: FxHashMap<ActionKind, Arc<dyn ActionEffect>>,
}

impl EffectRegistry {
    /// An empty registry: every action is inert.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Birthday and Pass Go, with amounts from the config.
    #[must_use]
    pub fn standard(config: &GameConfig) -> Self {
        let mut registry = Self::new();
        registry.register(
            ActionKind::Birthday,
            CollectFromOpponents { amount: config.birthday_charge },
        );
        registry.register(ActionKind::PassGo, DrawCards { count: config.pass_go_draw });
        registry
    }

    /// Set the effect for a kind, returning the one it replaces.
    pub fn register(
        &mut self,
        kind: ActionKind,
        effect: impl ActionEffect + 'static,
    ) -> Option<Arc<dyn ActionEffect>> {
        self.effects.insert(kind, Arc::new(effect))
    }

    pub fn unregister(&mut self, kind: ActionKind) -> Option<Arc<dyn ActionEffect>> {
        self.effects.remove(&kind)
    }

    #[must_use]
    pub fn get(&self, kind: ActionKind) -> Option<Arc<dyn ActionEffect>> {
        self.effects.get(&kind).cloned()
    }

    #[must_use]
    pub fn contains(&self, kind: ActionKind) -> bool {
        self.effects.contains_key(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;
    use crate::core::IdAllocator;

    struct Table {
        players: PlayerMap<Player>,
        deck: Deck,
        rng: GameRng,
        config: GameConfig,
        ids: IdAllocator,
    }

    impl Table {
        fn new(player_count: usize) -> Self {
            let mut ids = IdAllocator::new();
            let deck = Deck::from_cards((1..=6).map(|v| Card::cash(&mut ids, v)).collect());
            Self {
                players: PlayerMap::new(player_count, |p| Player::new(format!("p{}", p.0))),
                deck,
                rng: GameRng::new(1),
                config: GameConfig::default(),
                ids,
            }
        }

        fn ctx(&mut self) -> EffectContext<'_> {
            EffectContext {
                players: &mut self.players,
                active: PlayerId::new(0),
                deck: &mut self.deck,
                draw_rng: &mut self.rng,
                config: &self.config,
            }
        }
    }

    #[test]
    fn test_standard_registry() {
        let registry = EffectRegistry::standard(&GameConfig::default());
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(ActionKind::Birthday));
        assert!(registry.contains(ActionKind::PassGo));
        for kind in ActionKind::ALL {
            if !matches!(kind, ActionKind::Birthday | ActionKind::PassGo) {
                assert!(registry.get(kind).is_none(), "{kind} should be inert");
            }
        }
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = EffectRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.register(ActionKind::Hotel, DrawCards { count: 1 }).is_none());
        assert!(registry.register(ActionKind::Hotel, DrawCards { count: 2 }).is_some());
        assert_eq!(registry.len(), 1);
        assert!(registry.unregister(ActionKind::Hotel).is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_draw_cards() {
        let mut table = Table::new(2);
        let card = Card::action(&mut table.ids, ActionKind::PassGo).unwrap();

        DrawCards { count: 2 }.resolve(&mut table.ctx(), &card).unwrap();

        assert_eq!(table.players[PlayerId::new(0)].hand().len(), 2);
        assert_eq!(table.deck.len(), 4);
    }

    #[test]
    fn test_draw_to_hand_stops_at_empty_deck() {
        let mut table = Table::new(2);
        let drawn = table.ctx().draw_to_hand(PlayerId::new(1), 10);

        assert_eq!(drawn, 6);
        assert!(table.deck.is_empty());
        assert_eq!(table.players[PlayerId::new(1)].hand().len(), 6);
    }

    #[test]
    fn test_collect_from_opponents() {
        let mut table = Table::new(3);
        for seat in [PlayerId::new(1), PlayerId::new(2)] {
            let card = Card::cash(&mut table.ids, 2);
            table.players[seat].give_card(card).unwrap();
        }
        let birthday = Card::action(&mut table.ids, ActionKind::Birthday).unwrap();

        CollectFromOpponents { amount: 2 }.resolve(&mut table.ctx(), &birthday).unwrap();

        assert_eq!(table.players[PlayerId::new(0)].bank_value(), 4);
        assert_eq!(table.players[PlayerId::new(1)].bank_value(), 0);
        assert_eq!(table.players[PlayerId::new(2)].bank_value(), 0);
    }

    #[test]
    fn test_collect_routes_properties_to_property_pile() {
        let mut table = Table::new(2);
        let prop = Card::property(&mut table.ids, Color::Green);
        table.players[PlayerId::new(1)].give_card(prop).unwrap();
        let birthday = Card::action(&mut table.ids, ActionKind::Birthday).unwrap();

        CollectFromOpponents { amount: 2 }.resolve(&mut table.ctx(), &birthday).unwrap();

        let collector = &table.players[PlayerId::new(0)];
        assert_eq!(collector.property_pile().len(), 1);
        assert_eq!(collector.bank_value(), 0);
    }
}
