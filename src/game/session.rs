//! The session record read by presentation layers.

use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hand::{DealerHand, Hand};
use crate::result::RoundResult;

use super::Phase;

pub(crate) const WELCOME: &str = "Welcome! Place your bet and click \"Deal\" to start.";

/// Bankroll, stake, tallies and both hands of a single-player session.
///
/// The session lives as long as its [`Game`](super::Game). Bankroll and
/// tallies persist across rounds; everything else is cleared by
/// [`Game::new_game`](super::Game::new_game).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Session {
    pub(crate) bankroll: usize,
    pub(crate) current_bet: usize,
    pub(crate) wins: u32,
    pub(crate) losses: u32,
    pub(crate) player_hand: Hand,
    pub(crate) dealer_hand: DealerHand,
    pub(crate) player_score: u8,
    pub(crate) dealer_score: u8,
    pub(crate) phase: Phase,
    pub(crate) message: String,
    pub(crate) last_result: Option<RoundResult>,
}

impl Session {
    pub(crate) fn new(bankroll: usize) -> Self {
        Self {
            bankroll,
            current_bet: 0,
            wins: 0,
            losses: 0,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            player_score: 0,
            dealer_score: 0,
            phase: Phase::Betting,
            message: String::from(WELCOME),
            last_result: None,
        }
    }

    /// Money not currently staked.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Stake riding on the current round, 0 when no bet is active.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Rounds won.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Rounds lost. Pushes count as neither.
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    /// The player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// The dealer's hand, including the hole card.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Value of the player's hand.
    #[must_use]
    pub const fn player_score(&self) -> u8 {
        self.player_score
    }

    /// Value of the dealer's cards the player can see.
    #[must_use]
    pub const fn dealer_score(&self) -> u8 {
        self.dealer_score
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Human-readable status line.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Result of the most recently settled round, until the next `new_game`.
    #[must_use]
    pub const fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }

    pub(crate) fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub(crate) fn refresh_scores(&mut self) {
        self.player_score = self.player_hand.value();
        self.dealer_score = self.dealer_hand.visible_value();
    }
}
