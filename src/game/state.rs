//! Round phase and action types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// Accepting bets; hands are empty.
    #[default]
    Betting,
    /// Waiting for the player to hit, stand or double.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled; call `new_game` to bet again.
    RoundOver,
}

/// A user intent a presentation layer can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Deal the opening cards.
    Deal,
    /// Draw one card.
    Hit,
    /// Stop drawing and let the dealer play.
    Stand,
    /// Double the stake, draw one card and stand.
    Double,
    /// Clear the table for the next round.
    NewGame,
}
