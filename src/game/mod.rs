//! Round engine and session management.

use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::deck::{CardSource, RandomSource};
use crate::event::{Event, Observer, Rejection};
use crate::options::GameOptions;

mod actions;
mod bet;
mod dealer;
pub mod session;
pub mod state;

pub use dealer::DealerStep;
pub use session::Session;
use session::WELCOME;
pub use state::{Action, Phase};

/// A single-player blackjack engine that owns the session and its card source.
///
/// Every operation runs to completion before returning. Refused operations
/// return an error and only update [`Session::message`].
pub struct Game<S = RandomSource> {
    /// Game options.
    options: GameOptions,
    /// Bankroll, hands and phase.
    session: Session,
    /// Where cards come from.
    source: S,
    /// Notified after every change.
    observers: Vec<Box<dyn Observer>>,
}

impl Game<RandomSource> {
    /// Creates a new game drawing random cards seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.session().bankroll(), 1000);
    /// assert_eq!(game.phase(), Phase::Betting);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_source(options, RandomSource::new(seed))
    }
}

impl<S: CardSource> Game<S> {
    /// Creates a new game drawing from `source`.
    #[must_use]
    pub fn with_source(options: GameOptions, source: S) -> Self {
        let session = Session::new(options.starting_bankroll);
        log::debug!("new session with bankroll {}", options.starting_bankroll);
        Self {
            options,
            session,
            source,
            observers: Vec::new(),
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the session for rendering.
    ///
    /// Clone it for a snapshot that outlives the borrow.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.session.phase
    }

    /// Returns the card source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the card source mutably, e.g. to stack upcoming cards.
    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Registers an observer notified after every change to the session.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Returns the actions that make sense in the current phase.
    #[must_use]
    pub fn available_actions(&self) -> Vec<Action> {
        match self.session.phase {
            Phase::Betting => alloc::vec![Action::Deal],
            Phase::PlayerTurn => {
                let mut actions = alloc::vec![Action::Hit, Action::Stand];
                if self.can_double() {
                    actions.push(Action::Double);
                }
                actions
            }
            Phase::DealerTurn => Vec::new(),
            Phase::RoundOver => alloc::vec![Action::NewGame],
        }
    }

    /// Clears round-scoped state and returns to betting.
    ///
    /// Allowed in any phase. Bankroll, wins and losses persist; a stake that
    /// was never settled is forfeited.
    pub fn new_game(&mut self) {
        let forfeited = self.session.current_bet;
        if forfeited > 0 {
            log::debug!("abandoning round, {forfeited} forfeited");
        }

        let session = &mut self.session;
        session.player_hand.clear();
        session.dealer_hand.clear();
        session.player_score = 0;
        session.dealer_score = 0;
        session.current_bet = 0;
        session.last_result = None;
        session.phase = Phase::Betting;
        session.set_message(WELCOME);

        log::debug!("new game, bankroll {}", self.session.bankroll);
        self.emit(Event::NewGame);
    }

    /// Draws a card from the source.
    fn draw(&mut self) -> Card {
        let card = self.source.draw();
        log::debug!("drew {card}");
        card
    }

    fn emit(&mut self, event: Event) {
        for observer in &mut self.observers {
            observer.notify(&event, &self.session);
        }
    }

    /// Records a refused operation and hands the error back.
    fn reject<E>(&mut self, err: E) -> E
    where
        E: Into<Rejection> + fmt::Display + Copy,
    {
        log::debug!("rejected in {:?}: {err}", self.session.phase);
        self.session.set_message(err.to_string());
        self.emit(Event::Rejected(err.into()));
        err
    }
}
