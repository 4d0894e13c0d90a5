use crate::cards::{tokens, Card};
use crate::deck;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Cards in a hand. Other counts are rejected.
pub const HAND_SIZE: usize = 5;

/// Why a raw hand was rejected. Validation is all-or-nothing, so no partial
/// hand ever accompanies one of these.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    WrongCardCount(usize),
    #[error("unknown card: '{0}'")]
    UnknownCard(String),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

/// Five distinct legal cards, in the order the caller supplied them.
///
/// ```
/// use poker_classify::hand::Hand;
///
/// let hand: Hand = "Ah Kd 10d 5c 2h".parse().unwrap();
/// assert_eq!(hand.to_string(), "Ah Kd Td 5c 2h");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Build a hand from five cards, rejecting repeats.
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        let mut seen = HashSet::with_capacity(HAND_SIZE);
        for card in cards {
            if !seen.insert(card) {
                return Err(HandError::DuplicateCard(card));
            }
        }
        Ok(Self { cards })
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::WrongCardCount(slice.len()))?;
        Self::try_new(cards)
    }

    /// Caller guarantees the cards are pairwise distinct.
    pub(crate) const fn from_distinct(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

/// Rewrite the `"10"` alias to the canonical `"T"`.
///
/// ```
/// use poker_classify::hand::normalize;
///
/// assert_eq!(normalize("Ah Kd 10d 5c 2h"), "Ah Kd Td 5c 2h");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.replace("10", "T")
}

/// Validate raw hand text into a [`Hand`].
///
/// Tokens are separated by whitespace or commas. Checks run in order: the
/// `"10"` alias is normalized, the token count must be exactly five, every
/// token must be a legal card, and no token may repeat.
///
/// ```
/// use poker_classify::hand::{validate, HandError};
///
/// assert!(validate("Ah Kh Qh Jh Th").is_ok());
/// assert!(matches!(validate("Ah Kh Qh Jh"), Err(HandError::WrongCardCount(4))));
/// assert!(matches!(validate("Ah Kh Qh Jh Xh"), Err(HandError::UnknownCard(_))));
/// assert!(matches!(validate("4d 4d 5c 2h 8s"), Err(HandError::DuplicateCard(_))));
/// ```
pub fn validate(raw: &str) -> Result<Hand, HandError> {
    let result = validate_normalized(&normalize(raw));
    if let Err(err) = &result {
        log::debug!("rejected hand {raw:?}: {err}");
    }
    result
}

fn validate_normalized(text: &str) -> Result<Hand, HandError> {
    let toks: Vec<&str> = tokens(text).collect();
    if toks.len() != HAND_SIZE {
        return Err(HandError::WrongCardCount(toks.len()));
    }

    let mut cards = [deck::FULL_DECK[0]; HAND_SIZE];
    for (slot, tok) in cards.iter_mut().zip(&toks) {
        *slot = Card::from_str(tok)
            .ok()
            .filter(|&c| deck::contains(c))
            .ok_or_else(|| HandError::UnknownCard((*tok).to_string()))?;
    }

    Hand::try_new(cards)
}
