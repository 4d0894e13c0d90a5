use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Evaluation, HandCategory, HandValue};

/// Derived facts of a 5-card hand, computed once and shared by all detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Rank descending, then suit descending.
    pub sorted_cards: [Card; 5],
    /// Rank ascending.
    pub ranks: [Rank; 5],
    pub rank_counts: [u8; 15],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let mut ranks = cards.map(Card::rank);
        ranks.sort();

        let mut rank_counts = [0u8; 15];
        for rank in ranks {
            rank_counts[rank.value() as usize] += 1;
        }

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { sorted_cards, ranks, rank_counts, rank_groups, suit_info, straight_info }
    }

    pub fn has_rank(&self, rank: Rank) -> bool {
        self.rank_counts[rank.value() as usize] > 0
    }

    pub fn highest_rank(&self) -> Rank {
        self.ranks[4]
    }

    /// Ranks highest first, for categories where every card is a kicker.
    pub fn ranks_desc(&self) -> [Rank; 5] {
        let mut desc = self.ranks;
        desc.reverse();
        desc
    }

    /// Fallback when no pattern matches.
    pub fn high_card(&self) -> Evaluation {
        self.build_evaluation(HandCategory::HighCard(self.highest_rank()), &self.ranks_desc())
    }

    pub fn build_evaluation(&self, category: HandCategory, tiebreak: &[Rank]) -> Evaluation {
        let value = HandValue::from_parts(category, tiebreak);
        Evaluation { category, sorted_cards: self.sorted_cards, value }
    }
}
