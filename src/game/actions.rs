use alloc::format;

use crate::card::Card;
use crate::deck::CardSource;
use crate::error::ActionError;
use crate::event::Event;
use crate::result::{Outcome, RoundResult};

use super::{DealerStep, Game, Phase};

impl<S: CardSource> Game<S> {
    fn ensure_player_turn(&mut self) -> Result<(), ActionError> {
        if self.session.phase == Phase::PlayerTurn {
            Ok(())
        } else {
            Err(self.reject(ActionError::InvalidState))
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Busting settles the round as a loss.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw();
        self.session.player_hand.add_card(card);
        self.session.refresh_scores();
        self.emit(Event::PlayerDrew(card));

        if self.session.player_hand.is_bust() {
            self.resolve(Outcome::Loss);
        } else {
            self.session.set_message(format!(
                "Score: {}. Hit again or Stand?",
                self.session.player_score
            ));
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer draws until reaching the stand value, then the round is
    /// settled.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        self.begin_dealer_turn()?;
        self.finish_dealer_turn()
    }

    /// Returns whether [`double_down`](Self::double_down) would be accepted.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.session.phase == Phase::PlayerTurn
            && self.options.allow_double
            && self.session.player_hand.len() == 2
            && self.session.bankroll >= self.session.current_bet
    }

    /// Player action: Double down (double the stake, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, doubling is disabled,
    /// the hand does not have exactly two cards, or the bankroll cannot match
    /// the current stake.
    pub fn double_down(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;

        if !self.options.allow_double || self.session.player_hand.len() != 2 {
            return Err(self.reject(ActionError::CannotDouble));
        }

        let bet = self.session.current_bet;
        if self.session.bankroll < bet {
            return Err(self.reject(ActionError::InsufficientFunds));
        }

        self.session.bankroll -= bet;
        self.session.current_bet += bet;
        log::debug!("doubled, stake {}", self.session.current_bet);
        self.emit(Event::Doubled(self.session.current_bet));

        let card = self.draw();
        self.session.player_hand.add_card(card);
        self.session.refresh_scores();
        self.emit(Event::PlayerDrew(card));

        if self.session.player_hand.is_bust() {
            return Ok(self.resolve(Outcome::Loss));
        }

        self.begin_dealer_turn()?;
        self.finish_dealer_turn()
    }

    fn finish_dealer_turn(&mut self) -> Result<RoundResult, ActionError> {
        loop {
            if let DealerStep::Finished(result) = self.dealer_draw_one()? {
                return Ok(result);
            }
        }
    }
}
