use crate::cards::Rank;

const WHEEL: [Rank; 5] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];

/// Whether five ranks form a straight, and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    /// Top rank of the straight. Five for the wheel, where the Ace plays low.
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// `ranks_asc` must be sorted ascending.
    pub fn detect(ranks_asc: &[Rank; 5]) -> Self {
        let distinct = ranks_asc.windows(2).all(|w| w[0] != w[1]);
        let (low, high) = (ranks_asc[0], ranks_asc[4]);

        let top_rank = if distinct && high.value() - low.value() == 4 {
            Some(high)
        } else if *ranks_asc == WHEEL {
            Some(Rank::Five)
        } else {
            None
        };

        StraightInfo { top_rank }
    }

    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut ranks: [Rank; 5]) -> [Rank; 5] {
        ranks.sort();
        ranks
    }

    #[test]
    fn regular_straight() {
        let info = StraightInfo::detect(&sorted([
            Rank::Eight,
            Rank::Four,
            Rank::Seven,
            Rank::Five,
            Rank::Six,
        ]));
        assert!(info.is_straight());
        assert_eq!(info.top_rank, Some(Rank::Eight));
    }

    #[test]
    fn broadway() {
        let info = StraightInfo::detect(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]);
        assert_eq!(info.top_rank, Some(Rank::Ace));
    }

    #[test]
    fn wheel_plays_ace_low() {
        let info = StraightInfo::detect(&WHEEL);
        assert!(info.is_straight());
        assert_eq!(info.top_rank, Some(Rank::Five));
    }

    #[test]
    fn six_high_is_not_a_wheel() {
        let info = StraightInfo::detect(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]);
        assert_eq!(info.top_rank, Some(Rank::Six));
    }

    #[test]
    fn no_wraparound() {
        let info = StraightInfo::detect(&[Rank::Two, Rank::Three, Rank::Queen, Rank::King, Rank::Ace]);
        assert!(!info.is_straight());
    }

    #[test]
    fn gap_is_not_straight() {
        let info = StraightInfo::detect(&[Rank::Two, Rank::Five, Rank::Eight, Rank::Jack, Rank::King]);
        assert!(!info.is_straight());
    }

    #[test]
    fn pair_spanning_four_is_not_straight() {
        // max - min == 4 but only four distinct ranks
        let info = StraightInfo::detect(&[Rank::Four, Rank::Four, Rank::Five, Rank::Six, Rank::Eight]);
        assert!(!info.is_straight());
    }
}
