//! Player and dealer hands, and the scorer.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Hand values above this bust.
pub const BLACKJACK: u8 = 21;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces = aces.saturating_add(1);
        }
        value = value.saturating_add(card_value(card.rank));
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Scores a sequence of cards.
///
/// Number cards count at face value, faces count 10 and every ace starts at
/// 11. While the total is over 21, one ace at a time is demoted to 1.
/// An empty slice scores 0.
///
/// ```
/// use bjsolo::{Card, Suit, hand::score};
///
/// let aces = [Card::new(Suit::Spades, 1); 3];
/// assert_eq!(score(&aces), 13);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the cards hold an ace still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// The first card dealt is the hole card and stays face down until
/// [`reveal_hole`](Self::reveal_hole); the second card is the up card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand, including a hidden hole card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-down card (first card).
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the face-up card (second card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Returns the cards a player may see.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        if self.hole_revealed {
            &self.cards
        } else {
            self.cards.get(1..).unwrap_or_default()
        }
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only the up card if the hole is hidden).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        score(self.visible_cards())
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(Suit::Spades, r)).collect()
    }

    #[test]
    fn no_aces_sum_face_values() {
        assert_eq!(score(&cards(&[2, 3, 4])), 9);
        assert_eq!(score(&cards(&[11, 12, 13])), 30);
        assert_eq!(score(&cards(&[10, 13])), 20);
    }

    #[test]
    fn aces_are_demoted_one_at_a_time() {
        assert_eq!(score(&cards(&[1, 13])), 21);
        assert_eq!(score(&cards(&[1, 1, 9])), 21);
        assert_eq!(score(&cards(&[1, 1, 1])), 13);
        assert_eq!(score(&cards(&[1, 1, 1, 1, 1])), 15);
        assert_eq!(score(&cards(&[1, 10, 10])), 21);
    }

    #[test]
    fn empty_hand_scores_zero() {
        assert_eq!(score(&[]), 0);
        assert!(!is_soft(&[]));
    }

    #[test]
    fn score_ignores_order() {
        let hand = cards(&[1, 7, 1, 5, 13]);
        let mut reversed = hand.clone();
        reversed.reverse();
        assert_eq!(score(&hand), score(&reversed));

        let mut rotated = hand.clone();
        rotated.rotate_left(2);
        assert_eq!(score(&hand), score(&rotated));
    }

    #[test]
    fn softness() {
        assert!(is_soft(&cards(&[1, 6])));
        assert!(!is_soft(&cards(&[1, 6, 10])));
        assert!(!is_soft(&cards(&[10, 7])));
    }

    #[test]
    fn dealer_hides_first_card_until_revealed() {
        let mut dealer = DealerHand::new();
        dealer.add_card(Card::new(Suit::Hearts, 10));
        dealer.add_card(Card::new(Suit::Clubs, 1));

        assert_eq!(dealer.visible_value(), 11);
        assert_eq!(dealer.visible_cards().len(), 1);
        assert_eq!(dealer.hole_card(), Some(&Card::new(Suit::Hearts, 10)));

        dealer.reveal_hole();
        assert_eq!(dealer.visible_value(), 21);

        dealer.clear();
        assert!(dealer.is_empty());
        assert!(!dealer.is_hole_revealed());
    }

    #[test]
    fn player_hand_flags() {
        let mut hand = Hand::new();
        hand.add_card(Card::new(Suit::Hearts, 1));
        hand.add_card(Card::new(Suit::Spades, 12));
        assert!(hand.is_blackjack());
        assert!(!hand.is_bust());

        hand.add_card(Card::new(Suit::Spades, 12));
        assert!(!hand.is_blackjack());
        assert_eq!(hand.value(), 21);

        hand.add_card(Card::new(Suit::Spades, 2));
        assert!(hand.is_bust());
    }
}
