//! Error types for game operations.
//!
//! A rejected operation leaves the session untouched apart from its advisory
//! message, which is set to the error's `Display` text.

use thiserror::Error;

/// Errors that can occur while betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets are only accepted before the cards are dealt.
    #[error("Bets can only be placed before the deal.")]
    InvalidState,
    /// Bet amount is zero.
    #[error("Bet amount must be positive.")]
    ZeroBet,
    /// Bet exceeds the bankroll.
    #[error("Insufficient funds for that bet.")]
    InsufficientFunds,
    /// No chip at the requested position.
    #[error("No such chip.")]
    UnknownChip,
}

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is already in progress or has not been cleared.
    #[error("Cards have already been dealt.")]
    InvalidState,
    /// No bet has been placed.
    #[error("Please place a bet first!")]
    NoBet,
}

/// Errors that can occur during player and dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not available in the current phase.
    #[error("That action is not available right now.")]
    InvalidState,
    /// Doubling is disabled or the hand no longer has exactly two cards.
    #[error("You cannot double down on this hand.")]
    CannotDouble,
    /// Bankroll cannot cover the additional stake.
    #[error("Insufficient funds to double down.")]
    InsufficientFunds,
}
