use alloc::format;
use alloc::string::String;

use crate::card::Card;
use crate::deck::CardSource;
use crate::error::ActionError;
use crate::event::Event;
use crate::hand::BLACKJACK;
use crate::result::{Outcome, RoundResult};

use super::{Game, Phase};

/// Progress of an incrementally played dealer turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer drew a card and may draw again.
    Drew(Card),
    /// The dealer stood or busted and the round was settled.
    Finished(RoundResult),
}

impl<S: CardSource> Game<S> {
    /// Ends the player's turn and reveals the hole card without drawing.
    ///
    /// Follow with [`dealer_draw_one`](Self::dealer_draw_one) until it
    /// returns [`DealerStep::Finished`]. This lets a presentation layer
    /// animate the dealer one card at a time; [`stand`](Self::stand) does
    /// the whole turn in one call.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn begin_dealer_turn(&mut self) -> Result<(), ActionError> {
        if self.session.phase != Phase::PlayerTurn {
            return Err(self.reject(ActionError::InvalidState));
        }

        self.session.dealer_hand.reveal_hole();
        self.session.refresh_scores();
        self.session.phase = Phase::DealerTurn;
        self.session.set_message("Dealer's turn.");

        log::debug!("dealer reveals {}", self.session.dealer_score);
        self.emit(Event::DealerTurnStarted);
        Ok(())
    }

    /// Draws one dealer card, or settles the round once the dealer is done.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer is not playing.
    pub fn dealer_draw_one(&mut self) -> Result<DealerStep, ActionError> {
        if self.session.phase != Phase::DealerTurn {
            return Err(self.reject(ActionError::InvalidState));
        }

        if !self.dealer_should_draw() {
            return Ok(DealerStep::Finished(self.settle_against_dealer()));
        }

        let card = self.draw();
        self.session.dealer_hand.add_card(card);
        self.session.refresh_scores();
        self.emit(Event::DealerDrew(card));
        Ok(DealerStep::Drew(card))
    }

    /// Dealer draws below the stand value, and on a soft stand value when
    /// `stand_on_soft_17` is off. A busted dealer never draws.
    fn dealer_should_draw(&self) -> bool {
        let dealer = &self.session.dealer_hand;
        let value = dealer.value();
        let stands_on = self.options.dealer_stands_on;

        if value > BLACKJACK {
            return false;
        }
        if value < stands_on {
            return true;
        }
        value == stands_on && dealer.is_soft() && !self.options.stand_on_soft_17
    }

    fn settle_against_dealer(&mut self) -> RoundResult {
        let player = self.session.player_hand.value();
        let dealer = self.session.dealer_hand.value();

        let outcome = if dealer > BLACKJACK || player > dealer {
            Outcome::Win
        } else if player < dealer {
            Outcome::Loss
        } else {
            Outcome::Push
        };

        self.resolve(outcome)
    }

    /// Settles the current stake and ends the round.
    pub(super) fn resolve(&mut self, outcome: Outcome) -> RoundResult {
        let bet = self.session.current_bet;
        let player_bust = self.session.player_hand.is_bust();

        let (payout, message) = match outcome {
            Outcome::Win => {
                self.session.wins = self.session.wins.saturating_add(1);
                let payout = bet.saturating_mul(2);
                (payout, format!("You win ${payout}!"))
            }
            Outcome::Loss => {
                self.session.losses = self.session.losses.saturating_add(1);
                let message = if player_bust {
                    "Bust! You went over 21. Dealer wins!"
                } else {
                    "Dealer wins!"
                };
                (0, String::from(message))
            }
            Outcome::Push => (bet, String::from("Push! Your bet is returned.")),
        };

        // Saturates on very large bankrolls.
        self.session.bankroll = self.session.bankroll.saturating_add(payout);
        self.session.current_bet = 0;
        self.session.dealer_hand.reveal_hole();
        self.session.refresh_scores();
        self.session.phase = Phase::RoundOver;
        self.session.set_message(message);

        let result = RoundResult {
            outcome,
            bet,
            payout,
            player_value: self.session.player_score,
            dealer_value: self.session.dealer_score,
            player_bust,
            dealer_bust: self.session.dealer_hand.is_bust(),
        };
        self.session.last_result = Some(result);

        log::info!(
            "round over: {outcome:?} on {bet}, player {} dealer {}, bankroll {}",
            result.player_value,
            result.dealer_value,
            self.session.bankroll
        );
        self.emit(Event::RoundResolved(result));
        result
    }
}
