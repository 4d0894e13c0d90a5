use crate::cards::Rank;

/// Rank multiplicities of a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Build from a count array indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .map(|&rank| (rank, rank_counts[rank.value() as usize]))
            .filter(|&(_, count)| count > 0)
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, count)| *count == n).map(|(rank, _)| *rank)
    }

    /// Rank held four times, if any.
    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    /// Rank held three times, if any.
    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Every rank held exactly twice, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Singleton ranks, highest first.
    #[cfg(test)]
    pub fn kickers(&self) -> Vec<Rank> {
        self.with_count(1).collect()
    }

    /// Three of one rank and two of another.
    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && self.with_count(2).next().is_some()
    }

    /// Ranks in group order. For every category built from multiplicities
    /// this is exactly its tiebreak sequence.
    pub fn ranks(&self) -> Vec<Rank> {
        self.groups.iter().map(|(rank, _)| *rank).collect()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
