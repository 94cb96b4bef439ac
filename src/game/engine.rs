//! The turn engine.
//!
//! ## States
//!
//! - `AwaitingTurnStart`: between turns
//! - `InTurn`: the active player has drawn and may play cards
//! - `Ended`: someone won; no further turns start
//!
//! `start_turn` draws for the active player, `play_card` banks, places, or
//! resolves a hand card, and `end_turn` either declares the active player
//! the winner or passes play to the next seat.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::effects::{EffectContext, EffectRegistry};
use super::player::Player;
use crate::cards::{ActionKind, Card, CardKind, Color};
use crate::core::{
    GameConfig, GameError, GameRng, IdAllocator, PlayerId, PlayerMap, DRAW_CONTEXT,
    SHUFFLE_CONTEXT,
};
use crate::deck::Deck;
use crate::piles::{Pile, PileRole};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitingTurnStart,
    InTurn,
    Ended,
}

/// What happened to a played card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Moved to the bank, no effect.
    Banked,
    /// Moved to the property pile.
    Placed,
    /// Effect resolved, card discarded.
    Resolved(ActionKind),
    /// No effect registered for this kind; card discarded anyway.
    Inert(ActionKind),
}

/// Result of ending a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnEnd {
    /// The active player won. The game is over.
    Winner(PlayerId),
    /// Play passed to this seat.
    Next(PlayerId),
}

/// A game in progress.
///
/// ```
/// use property_deal::core::GameConfig;
/// use property_deal::game::{Game, TurnEnd, TurnPhase};
///
/// let mut game = Game::new(GameConfig::new(["adam", "devin"]).with_seed(42)).unwrap();
/// assert_eq!(game.deck().len(), 108 - 10);
///
/// game.start_turn().unwrap();
/// assert_eq!(game.phase(), TurnPhase::InTurn);
/// assert_eq!(game.active().hand().len(), 7);
///
/// assert!(matches!(game.end_turn(), TurnEnd::Next(_)));
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    deck: Deck,
    draw_rng: GameRng,
    discard: Pile,
    players: PlayerMap<Player>,
    active: PlayerId,
    phase: TurnPhase,
    winner: Option<PlayerId>,
    turn_number: u32,
    effects: EffectRegistry,
}

impl Game {
    /// Build the standard deck from the config seed and deal opening hands.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let rng = GameRng::new(config.seed);
        let deck = Deck::standard(&mut IdAllocator::new(), &mut rng.for_context(SHUFFLE_CONTEXT));
        Self::with_deck(config, deck)
    }

    /// Play with a prepared deck instead of the standard one.
    ///
    /// Opening hands are still dealt from it.
    pub fn with_deck(config: GameConfig, deck: Deck) -> Result<Self, GameError> {
        config.validate()?;
        let names = config.players.clone();
        let draw_rng = GameRng::new(config.seed).for_context(DRAW_CONTEXT);
        let effects = EffectRegistry::standard(&config);

        let mut game = Self {
            players: PlayerMap::new(names.len(), |p| Player::new(names[p.index()].clone())),
            config,
            deck,
            draw_rng,
            discard: Pile::new(PileRole::Discard),
            active: PlayerId::new(0),
            phase: TurnPhase::AwaitingTurnStart,
            winner: None,
            turn_number: 1,
            effects,
        };
        game.initial_deal();
        Ok(game)
    }

    /// One card per player per round, `starting_hand_size` rounds.
    fn initial_deal(&mut self) {
        let seats: Vec<PlayerId> = self.players.player_ids().collect();
        let mut ctx = self.context();
        for _ in 0..ctx.config.starting_hand_size {
            for &seat in &seats {
                ctx.draw_to_hand(seat, 1);
            }
        }
        debug!(
            players = seats.len(),
            deck = self.deck.len(),
            "dealt opening hands"
        );
    }

    fn context(&mut self) -> EffectContext<'_> {
        EffectContext {
            players: &mut self.players,
            active: self.active,
            deck: &mut self.deck,
            draw_rng: &mut self.draw_rng,
            config: &self.config,
        }
    }

    /// Draw the turn's cards for the active player.
    pub fn start_turn(&mut self) -> Result<(), GameError> {
        if self.phase == TurnPhase::Ended {
            return Err(GameError::GameOver);
        }
        let active = self.active;
        let count = self.config.draw_per_turn;
        let drawn = self.context().draw_to_hand(active, count);
        self.phase = TurnPhase::InTurn;
        info!(
            turn = self.turn_number,
            player = %self.players[active].name(),
            drawn,
            "turn started"
        );
        Ok(())
    }

    /// Play the active player's hand card at `index`.
    ///
    /// Cash, and actions when `as_cash` is set, go to the bank. Properties go
    /// to the property pile. Other actions are resolved through the effect
    /// registry and then discarded.
    pub fn play_card(&mut self, index: usize, as_cash: bool) -> Result<PlayOutcome, GameError> {
        let active = self.active;
        let player = &mut self.players[active];
        let kind = *player.hand().peek(index)?.kind();

        let outcome = match kind {
            CardKind::Cash => {
                player.move_card_to_cash(index)?;
                PlayOutcome::Banked
            }
            CardKind::Action(_) if as_cash => {
                player.move_card_to_cash(index)?;
                PlayOutcome::Banked
            }
            CardKind::Property(_) | CardKind::WildProperty(_) => {
                player.move_card_to_properties(index)?;
                PlayOutcome::Placed
            }
            CardKind::Action(action) => {
                let card = player.take_card(index)?;
                let resolved = self.resolve_action(action.kind(), &card);
                self.discard.add(card);
                resolved?
            }
        };

        debug!(player = %self.players[active].name(), ?outcome, "card played");
        Ok(outcome)
    }

    fn resolve_action(&mut self, kind: ActionKind, card: &Card) -> Result<PlayOutcome, GameError> {
        let Some(effect) = self.effects.get(kind) else {
            debug!(%kind, "no effect registered");
            return Ok(PlayOutcome::Inert(kind));
        };
        effect.resolve(&mut self.context(), card)?;
        Ok(PlayOutcome::Resolved(kind))
    }

    /// Choose a color for a wild card in the active player's hand.
    pub fn assign_wild(&mut self, index: usize, color: Color) -> Result<(), GameError> {
        let active = self.active;
        self.players[active].assign_wild(index, color)
    }

    /// Finish the active player's turn.
    ///
    /// A player holding three full sets wins and the game ends with them
    /// still active. Otherwise play passes to the next seat.
    pub fn end_turn(&mut self) -> TurnEnd {
        if let Some(winner) = self.winner {
            return TurnEnd::Winner(winner);
        }

        let active = self.active;
        if self.players[active].has_won() {
            self.winner = Some(active);
            self.phase = TurnPhase::Ended;
            info!(player = %self.players[active].name(), turn = self.turn_number, "has won");
            return TurnEnd::Winner(active);
        }

        self.active = active.next(self.players.player_count());
        self.phase = TurnPhase::AwaitingTurnStart;
        self.turn_number += 1;
        TurnEnd::Next(self.active)
    }

    pub fn effects_mut(&mut self) -> &mut EffectRegistry {
        &mut self.effects
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Pile {
        &self.discard
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Direct access to a seat, for setting up positions.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id)
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// The active player's seat.
    #[must_use]
    pub fn active(&self) -> &Player {
        &self.players[self.active]
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == TurnPhase::Ended
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Starts at 1 and counts every `end_turn` that passes play.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }
}
