//! The 52-card deck model.
//!
//! Membership is a pure lookup: nothing here is ever dealt or consumed, so the
//! same card may appear in any number of independently evaluated hands.

use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HAND_SIZE};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::str::FromStr;

/// Number of legal cards.
pub const DECK_SIZE: usize = 52;

/// Every legal card, exactly one per (rank, suit) pair, grouped by suit.
pub const FULL_DECK: [Card; DECK_SIZE] = build_full_deck();

const fn build_full_deck() -> [Card; DECK_SIZE] {
    let mut cards = [Card::new(Rank::Two, Suit::Hearts); DECK_SIZE];
    let mut s = 0;
    while s < Suit::ALL.len() {
        let mut r = 0;
        while r < Rank::ALL.len() {
            cards[s * Rank::ALL.len() + r] = Card::new(Rank::ALL[r], Suit::ALL[s]);
            r += 1;
        }
        s += 1;
    }
    cards
}

/// Comparison value of a rank, `2..=14`.
///
/// ```
/// use poker_classify::cards::Rank;
/// use poker_classify::deck::rank_value;
///
/// assert_eq!(rank_value(Rank::Ten), 10);
/// assert_eq!(rank_value(Rank::Ace), 14);
/// ```
pub const fn rank_value(rank: Rank) -> u8 {
    rank.value()
}

/// True if `card` is one of the 52 legal cards.
pub fn contains(card: Card) -> bool {
    FULL_DECK.contains(&card)
}

/// True iff `token` decomposes into a known rank and a known suit.
/// `"10h"` and `"Th"` give the same answer.
///
/// ```
/// use poker_classify::deck::is_legal_card;
///
/// assert!(is_legal_card("Qs"));
/// assert!(is_legal_card("10d"));
/// assert!(!is_legal_card("1d"));
/// assert!(!is_legal_card("Qx"));
/// ```
pub fn is_legal_card(token: &str) -> bool {
    Card::from_str(token).is_ok_and(contains)
}

/// Iterate every distinct five-card hand: C(52,5) = 2,598,960 of them,
/// in lexicographic order of deck positions.
pub fn five_card_hands() -> FiveCardHands {
    FiveCardHands::new()
}

/// Lexicographic index combinations of 5 positions out of [`DECK_SIZE`].
#[derive(Debug, Clone)]
pub struct FiveCardHands {
    indices: [usize; HAND_SIZE],
    done: bool,
}

impl FiveCardHands {
    pub const TOTAL: usize = 2_598_960;

    pub fn new() -> Self {
        Self { indices: [0, 1, 2, 3, 4], done: false }
    }
}

impl Default for FiveCardHands {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FiveCardHands {
    type Item = Hand;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let idx = self.indices;
        let hand = Hand::from_distinct([
            FULL_DECK[idx[0]],
            FULL_DECK[idx[1]],
            FULL_DECK[idx[2]],
            FULL_DECK[idx[3]],
            FULL_DECK[idx[4]],
        ]);

        // Find rightmost index that can be incremented
        let mut i = HAND_SIZE - 1;
        loop {
            if self.indices[i] < DECK_SIZE - (HAND_SIZE - i) {
                self.indices[i] += 1;
                for j in (i + 1)..HAND_SIZE {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(hand)
    }
}

/// Pick five distinct cards at random. The deck itself is left untouched.
pub fn sample_hand<R: Rng + ?Sized>(rng: &mut R) -> Hand {
    let mut picked = [FULL_DECK[0]; HAND_SIZE];
    for (slot, card) in picked.iter_mut().zip(FULL_DECK.choose_multiple(rng, HAND_SIZE)) {
        *slot = *card;
    }
    Hand::from_distinct(picked)
}

/// Reproducible variant of [`sample_hand`].
///
/// ```
/// use poker_classify::deck::sample_hand_seeded;
///
/// assert_eq!(sample_hand_seeded(7), sample_hand_seeded(7));
/// ```
pub fn sample_hand_seeded(seed: u64) -> Hand {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    sample_hand(&mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn full_deck_has_52_unique_cards() {
        let set: HashSet<Card> = FULL_DECK.iter().copied().collect();
        assert_eq!(set.len(), DECK_SIZE);
        for r in Rank::ALL {
            for s in Suit::ALL {
                assert!(contains(Card::new(r, s)));
            }
        }
    }

    #[test]
    fn rank_value_is_injective() {
        let values: HashSet<u8> = Rank::ALL.iter().map(|&r| rank_value(r)).collect();
        assert_eq!(values.len(), 13);
        assert!(values.iter().all(|v| (2..=14).contains(v)));
    }

    #[test]
    fn legal_tokens() {
        assert!(is_legal_card("2c"));
        assert!(is_legal_card("Ah"));
        assert!(is_legal_card("Th"));
        assert!(is_legal_card("10h"));
        assert!(!is_legal_card("1h"));
        assert!(!is_legal_card("ah"));
        assert!(!is_legal_card("Ahh"));
        assert!(!is_legal_card(""));
    }

    #[test]
    fn five_card_hands_starts_in_order_and_has_distinct_cards() {
        let mut it = five_card_hands();
        let first = it.next().unwrap();
        assert_eq!(first.cards(), &FULL_DECK[..5]);
        let second = it.next().unwrap();
        assert_eq!(second.cards()[4], FULL_DECK[5]);
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let a = sample_hand_seeded(42);
        let b = sample_hand_seeded(42);
        assert_eq!(a, b);
        let set: HashSet<Card> = a.cards().iter().copied().collect();
        assert_eq!(set.len(), HAND_SIZE);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let hands: HashSet<Hand> = (0..16).map(sample_hand_seeded).collect();
        assert!(hands.len() > 1);
    }
}
