//! Round result types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Loss,
    /// Push (tie). The stake is returned.
    Push,
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundResult {
    /// The outcome.
    pub outcome: Outcome,
    /// The stake that was riding on the round.
    pub bet: usize,
    /// Amount credited back to the bankroll.
    pub payout: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Net change to the bankroll over the whole round.
    ///
    /// Clamped to the `isize` range.
    #[must_use]
    pub fn net(&self) -> isize {
        if self.payout >= self.bet {
            isize::try_from(self.payout - self.bet).unwrap_or(isize::MAX)
        } else {
            isize::try_from(self.bet - self.payout).map_or(isize::MIN, |loss| -loss)
        }
    }
}
