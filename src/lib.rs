//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns a [`Session`] (bankroll,
//! stake, tallies, both hands and the round [`Phase`]) and runs the round
//! flow: betting, dealing, hitting, standing or doubling, dealer play and
//! settlement. Presentation layers drive it through method calls and read
//! the session back, either by polling or through an [`Observer`].
//!
//! # Example
//!
//! ```
//! use bjsolo::{Card, Game, GameOptions, Outcome, Phase, StackedSource, Suit};
//!
//! let deck = StackedSource::new(
//!     [
//!         Card::new(Suit::Spades, 1),   // player
//!         Card::new(Suit::Hearts, 13),  // player
//!         Card::new(Suit::Clubs, 10),   // dealer hole
//!         Card::new(Suit::Diamonds, 7), // dealer up
//!     ],
//!     42,
//! );
//! let mut game = Game::with_source(GameOptions::default(), deck);
//!
//! game.place_bet(100).unwrap();
//! game.deal().unwrap();
//! assert_eq!(game.session().player_score(), 21);
//!
//! let result = game.stand().unwrap();
//! assert_eq!(result.outcome, Outcome::Win);
//! assert_eq!(game.session().bankroll(), 1100);
//! assert_eq!(game.phase(), Phase::RoundOver);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, RANKS, SUITS, Suit};
pub use deck::{CardSource, RandomSource, StackedSource};
pub use error::{ActionError, BetError, DealError};
pub use event::{Event, Observer, Rejection};
pub use game::{Action, DealerStep, Game, Phase, Session};
pub use hand::{DealerHand, Hand, score};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult};
