pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{validate, Hand, HandError};
use core::cmp::Ordering;
use std::fmt;

/// Hand category, weakest to strongest. Derived ordering follows poker
/// strength; two `HighCard`s compare by their rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No other pattern; carries the highest rank present.
    HighCard(Rank),
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandCategory {
    pub const fn ordinal(self) -> u8 {
        match self {
            HandCategory::HighCard(_) => 0,
            HandCategory::OnePair => 1,
            HandCategory::TwoPair => 2,
            HandCategory::ThreeOfAKind => 3,
            HandCategory::Straight => 4,
            HandCategory::Flush => 5,
            HandCategory::FullHouse => 6,
            HandCategory::FourOfAKind => 7,
            HandCategory::StraightFlush => 8,
            HandCategory::RoyalFlush => 9,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard(_) => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::HighCard(rank) => write!(f, "{}: {rank}", self.name()),
            other => f.write_str(other.name()),
        }
    }
}

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u64);

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and up to five tiebreak ranks (most significant first).
    pub fn from_parts(category: HandCategory, tiebreak: &[Rank]) -> Self {
        // [ category (8 bits) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 10 zero bits ]
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        let mut v = u64::from(category.ordinal()) << CAT_SHIFT;
        for (i, r) in tiebreak.iter().take(5).enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= u64::from(r.value()) << offset;
        }
        HandValue(v)
    }
}

/// Detailed evaluation result. `value` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: HandCategory,
    /// The hand's cards, rank descending.
    pub sorted_cards: [Card; 5],
    value: HandValue,
}

impl Evaluation {
    pub const fn value(&self) -> HandValue {
        self.value
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

/// Classify a validated hand. Total: every [`Hand`] has exactly one category.
///
/// ```
/// use poker_classify::evaluator::{evaluate, HandCategory};
/// use poker_classify::hand::validate;
///
/// let hand = validate("Ah 2d 3c 4s 5h").unwrap();
/// assert_eq!(evaluate(&hand), HandCategory::Straight);
/// ```
pub fn evaluate(hand: &Hand) -> HandCategory {
    evaluate_detailed(hand).category
}

/// Like [`evaluate`], also producing the sorted cards and a strength score.
pub fn evaluate_detailed(hand: &Hand) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(hand.cards());

    // first match wins; the high-card detector always matches
    let eval = DETECTORS
        .iter()
        .find_map(|detector| detector.detect(&analysis))
        .unwrap_or_else(|| analysis.high_card());

    log::trace!("{hand} => {}", eval.category);
    eval
}

/// Validate raw hand text, then classify it.
///
/// ```
/// use poker_classify::evaluator::{classify, HandCategory};
/// use poker_classify::hand::HandError;
///
/// assert_eq!(classify("Ah Kh Qh Jh Th"), Ok(HandCategory::RoyalFlush));
/// assert!(matches!(classify("6h 6h 6d 6s 6c"), Err(HandError::DuplicateCard(_))));
/// ```
pub fn classify(raw: &str) -> Result<HandCategory, HandError> {
    let hand = validate(raw)?;
    Ok(evaluate(&hand))
}
