use crate::cards::{Card, Suit};

/// Whether all cards share the same suit (flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let first_suit = cards[0].suit();
        let all_same = cards.iter().all(|c| c.suit() == first_suit);
        SuitInfo { flush_suit: all_same.then_some(first_suit) }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}
