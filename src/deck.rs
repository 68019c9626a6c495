//! Card sources.
//!
//! The engine never runs out of cards: every draw picks a uniform rank and a
//! uniform suit independently of history, as if drawing with replacement from
//! an infinite shoe.

use alloc::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, RANKS, SUITS};

/// Something the engine can draw cards from.
///
/// Implementations must always produce a card.
pub trait CardSource {
    /// Draws the next card.
    fn draw(&mut self) -> Card;
}

/// Pseudo-random card source with replacement.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Creates a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl CardSource for RandomSource {
    fn draw(&mut self) -> Card {
        let rank = RANKS[self.rng.random_range(0..RANKS.len())];
        let suit = SUITS[self.rng.random_range(0..SUITS.len())];
        Card::new(suit, rank)
    }
}

/// A source that plays a scripted sequence of cards before falling back to
/// a [`RandomSource`].
///
/// Useful for reproducing a specific round.
///
/// ```
/// use bjsolo::{Card, CardSource, StackedSource, Suit};
///
/// let mut source = StackedSource::new([Card::new(Suit::Spades, 1)], 7);
/// assert_eq!(source.draw(), Card::new(Suit::Spades, 1));
/// assert_eq!(source.remaining(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct StackedSource {
    stacked: VecDeque<Card>,
    fallback: RandomSource,
}

impl StackedSource {
    /// Creates a source that yields `cards` in order, then random cards
    /// seeded with `seed`.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>, seed: u64) -> Self {
        Self {
            stacked: cards.into_iter().collect(),
            fallback: RandomSource::new(seed),
        }
    }

    /// Appends cards to the end of the script.
    pub fn push(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.stacked.extend(cards);
    }

    /// Returns the number of scripted cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.stacked.len()
    }
}

impl CardSource for StackedSource {
    fn draw(&mut self) -> Card {
        self.stacked
            .pop_front()
            .unwrap_or_else(|| self.fallback.draw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn random_source_is_reproducible_and_valid() {
        let mut a = RandomSource::new(42);
        let mut b = RandomSource::new(42);

        for _ in 0..500 {
            let card = a.draw();
            assert_eq!(card, b.draw());
            assert!((1..=13).contains(&card.rank));
        }
    }

    #[test]
    fn random_source_covers_every_rank() {
        let mut source = RandomSource::new(3);
        let mut seen = [false; 13];
        for _ in 0..2000 {
            seen[source.draw().rank as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn stacked_source_falls_back_when_empty() {
        let scripted = [Card::new(Suit::Hearts, 5), Card::new(Suit::Clubs, 9)];
        let mut source = StackedSource::new(scripted, 1);
        assert_eq!(source.draw(), scripted[0]);
        assert_eq!(source.draw(), scripted[1]);

        let mut fallback = RandomSource::new(1);
        assert_eq!(source.draw(), fallback.draw());
    }
}
