use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Evaluation, HandCategory};

/// Strategy pattern: each detector recognises one category and builds its
/// evaluation, or declines with `None`.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: Ten through Ace, all same suit
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        let royal = a.suit_info.is_flush()
            && a.straight_info.is_straight()
            && a.has_rank(Rank::Ace)
            && a.has_rank(Rank::King);
        royal.then(|| a.build_evaluation(HandCategory::RoyalFlush, &[Rank::Ace]))
    }
}

/// Straight Flush: Five consecutive ranks, all same suit, including the steel wheel
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        a.suit_info.flush_suit?;
        let top = a.straight_info.top_rank?;
        Some(a.build_evaluation(HandCategory::StraightFlush, &[top]))
    }
}

/// Four of a Kind: some rank held four times
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        a.rank_groups.quad()?;
        Some(a.build_evaluation(HandCategory::FourOfAKind, &a.rank_groups.ranks()))
    }
}

/// Full House: Three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        a.rank_groups
            .has_full_house()
            .then(|| a.build_evaluation(HandCategory::FullHouse, &a.rank_groups.ranks()))
    }
}

/// Flush: All five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        a.suit_info.flush_suit?;
        Some(a.build_evaluation(HandCategory::Flush, &a.ranks_desc()))
    }
}

/// Straight: Five consecutive ranks, Ace high or low
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        let top = a.straight_info.top_rank?;
        Some(a.build_evaluation(HandCategory::Straight, &[top]))
    }
}

/// Three of a Kind: Three cards of the same rank, other two unmatched
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        a.rank_groups.trips()?;
        if a.rank_groups.has_full_house() {
            return None;
        }
        Some(a.build_evaluation(HandCategory::ThreeOfAKind, &a.rank_groups.ranks()))
    }
}

/// Two Pair: exactly two ranks held twice
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        (a.rank_groups.pairs().len() == 2)
            .then(|| a.build_evaluation(HandCategory::TwoPair, &a.rank_groups.ranks()))
    }
}

/// One Pair: exactly one rank held twice, nothing stronger
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        let single_pair = a.rank_groups.pairs().len() == 1
            && a.rank_groups.trips().is_none()
            && a.rank_groups.quad().is_none();
        single_pair.then(|| a.build_evaluation(HandCategory::OnePair, &a.rank_groups.ranks()))
    }
}

/// High Card: No matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        Some(a.high_card())
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
