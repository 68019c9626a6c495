use alloc::format;
use alloc::vec::Vec;

use crate::deck::CardSource;
use crate::error::{BetError, DealError};
use crate::event::Event;

use super::{Game, Phase};

impl<S: CardSource> Game<S> {
    /// Adds `amount` to the current stake, debiting the bankroll.
    ///
    /// Bets accumulate until the cards are dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase, the amount
    /// is zero, or the bankroll cannot cover it. The bankroll and stake are
    /// left unchanged.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.session.phase != Phase::Betting {
            return Err(self.reject(BetError::InvalidState));
        }

        if amount == 0 {
            return Err(self.reject(BetError::ZeroBet));
        }

        if amount > self.session.bankroll {
            return Err(self.reject(BetError::InsufficientFunds));
        }

        self.session.bankroll -= amount;
        self.session.current_bet += amount;
        self.session.set_message(format!("Bet placed: ${amount}. Click Deal to start!"));

        log::debug!(
            "bet {amount}, stake {}, bankroll {}",
            self.session.current_bet,
            self.session.bankroll
        );
        self.emit(Event::BetPlaced(amount));
        Ok(())
    }

    /// Bets the chip at `index` in [`GameOptions::chips`](crate::GameOptions::chips).
    ///
    /// # Errors
    ///
    /// Returns [`BetError::UnknownChip`] for an index past the last chip, and
    /// otherwise the same errors as [`place_bet`](Self::place_bet).
    pub fn place_chip(&mut self, index: usize) -> Result<(), BetError> {
        match self.options.chips.get(index).copied() {
            Some(value) => self.place_bet(value),
            None => Err(self.reject(BetError::UnknownChip)),
        }
    }

    /// Returns the chip denominations the bankroll can currently cover.
    #[must_use]
    pub fn available_chips(&self) -> Vec<usize> {
        if self.session.phase != Phase::Betting {
            return Vec::new();
        }

        self.options
            .chips
            .iter()
            .copied()
            .filter(|&chip| chip <= self.session.bankroll)
            .collect()
    }

    /// Deals two cards to the player, then two to the dealer.
    ///
    /// The dealer's first card is the hole card; only the second counts
    /// towards the visible dealer score.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase or no bet
    /// has been placed.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.session.phase != Phase::Betting {
            return Err(self.reject(DealError::InvalidState));
        }

        if self.session.current_bet == 0 {
            return Err(self.reject(DealError::NoBet));
        }

        self.session.player_hand.clear();
        self.session.dealer_hand.clear();

        for _ in 0..2 {
            let card = self.draw();
            self.session.player_hand.add_card(card);
        }

        for _ in 0..2 {
            let card = self.draw();
            self.session.dealer_hand.add_card(card);
        }

        self.session.refresh_scores();
        self.session.phase = Phase::PlayerTurn;
        self.session.set_message(format!(
            "Game started! Your score: {}. Hit or Stand?",
            self.session.player_score
        ));

        log::debug!(
            "dealt, player {} vs dealer showing {}",
            self.session.player_score,
            self.session.dealer_score
        );
        self.emit(Event::Dealt);
        Ok(())
    }
}
