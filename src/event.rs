//! State-change notifications for presentation layers.
//!
//! A renderer can either poll [`Game::session`](crate::Game::session) after
//! each call or subscribe an [`Observer`] and redraw when notified.

use crate::card::Card;
use crate::error::{ActionError, BetError, DealError};
use crate::game::Session;
use crate::result::RoundResult;

/// Something that happened to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A bet was added to the current stake.
    BetPlaced(usize),
    /// The opening cards were dealt.
    Dealt,
    /// The player drew a card.
    PlayerDrew(Card),
    /// The player doubled the stake.
    Doubled(usize),
    /// The hole card was revealed and the dealer is playing.
    DealerTurnStarted,
    /// The dealer drew a card.
    DealerDrew(Card),
    /// The round was settled.
    RoundResolved(RoundResult),
    /// Round-scoped state was cleared.
    NewGame,
    /// An operation was refused; only the message changed.
    Rejected(Rejection),
}

/// Why an operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Invalid bet.
    Bet(BetError),
    /// Deal attempted without a bet or mid-round.
    Deal(DealError),
    /// Player or dealer action outside its phase.
    Action(ActionError),
}

impl From<BetError> for Rejection {
    fn from(err: BetError) -> Self {
        Self::Bet(err)
    }
}

impl From<DealError> for Rejection {
    fn from(err: DealError) -> Self {
        Self::Deal(err)
    }
}

impl From<ActionError> for Rejection {
    fn from(err: ActionError) -> Self {
        Self::Action(err)
    }
}

/// Receives a notification after every change to the session.
pub trait Observer {
    /// Called with the event and the session as it stands afterwards.
    fn notify(&mut self, event: &Event, session: &Session);
}

impl<F> Observer for F
where
    F: FnMut(&Event, &Session),
{
    fn notify(&mut self, event: &Event, session: &Session) {
        self(event, session);
    }
}
