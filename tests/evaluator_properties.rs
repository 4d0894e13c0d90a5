use poker_classify::cards::{Card, Rank};
use poker_classify::deck::{is_legal_card, FULL_DECK};
use poker_classify::evaluator::{evaluate, HandCategory};
use poker_classify::hand::{normalize, validate, Hand, HandError};
use proptest::prelude::*;

fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(FULL_DECK.to_vec(), n).prop_shuffle()
}

fn any_hand() -> impl Strategy<Value = Hand> {
    distinct_cards(5).prop_map(|cards| Hand::from_slice(&cards).expect("distinct deck cards"))
}

fn render(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}

/// Straightforward classification from multiplicity shape, used as an oracle.
fn reference_category(cards: &[Card; 5]) -> HandCategory {
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank().value()).collect();
    values.sort_unstable();

    let mut shape: Vec<usize> = Vec::new();
    let mut run = 1;
    for i in 1..=values.len() {
        if i < values.len() && values[i] == values[i - 1] {
            run += 1;
        } else {
            shape.push(run);
            run = 1;
        }
    }
    shape.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight = shape.len() == 5 && (values[4] - values[0] == 4 || values == [2, 3, 4, 5, 14]);

    match shape.as_slice() {
        _ if flush && straight && values[0] == 10 => HandCategory::RoyalFlush,
        _ if flush && straight => HandCategory::StraightFlush,
        [4, 1] => HandCategory::FourOfAKind,
        [3, 2] => HandCategory::FullHouse,
        _ if flush => HandCategory::Flush,
        _ if straight => HandCategory::Straight,
        [3, 1, 1] => HandCategory::ThreeOfAKind,
        [2, 2, 1] => HandCategory::TwoPair,
        [2, 1, 1, 1] => HandCategory::OnePair,
        _ => HandCategory::HighCard(Rank::from_value(values[4]).expect("rank value")),
    }
}

fn illegal_token() -> impl Strategy<Value = String> {
    "[0-9A-Za-z]{1,3}".prop_filter("must not be a legal card", |t| !is_legal_card(&normalize(t)))
}

proptest! {
    #[test]
    fn distinct_hands_validate_and_classify(hand in any_hand()) {
        let raw = hand.to_string();
        let validated = validate(&raw);
        prop_assert_eq!(validated.as_ref(), Ok(&hand));
        prop_assert_eq!(evaluate(&hand), reference_category(hand.cards()));
    }

    #[test]
    fn classification_is_idempotent(hand in any_hand()) {
        prop_assert_eq!(evaluate(&hand), evaluate(&hand));
    }

    #[test]
    fn card_order_does_not_matter(cards in distinct_cards(5), rotate in 0usize..5) {
        let mut rotated = cards.clone();
        rotated.rotate_left(rotate);
        let a = Hand::from_slice(&cards).unwrap();
        let b = Hand::from_slice(&rotated).unwrap();
        prop_assert_eq!(evaluate(&a), evaluate(&b));
    }

    #[test]
    fn illegal_tokens_are_unknown_cards(
        cards in distinct_cards(4),
        bad in illegal_token(),
        at in 0usize..5,
    ) {
        let mut toks: Vec<String> = cards.iter().map(Card::to_string).collect();
        toks.insert(at, bad);
        let result = validate(&toks.join(" "));
        prop_assert!(matches!(result, Err(HandError::UnknownCard(_))), "{:?}", result);
    }

    #[test]
    fn repeated_tokens_are_duplicates(cards in distinct_cards(4), pick in 0usize..4, at in 0usize..5) {
        let mut with_dup = cards.clone();
        with_dup.insert(at, cards[pick]);
        prop_assert_eq!(validate(&render(&with_dup)), Err(HandError::DuplicateCard(cards[pick])));
    }

    #[test]
    fn wrong_counts_are_rejected(n in (0usize..=9).prop_filter("not five", |n| *n != 5), seed in any::<u64>()) {
        let cards: Vec<Card> = FULL_DECK.iter().copied().cycle().skip((seed % 52) as usize).take(n).collect();
        prop_assert_eq!(validate(&render(&cards)), Err(HandError::WrongCardCount(n)));
    }

    #[test]
    fn ten_alias_is_equivalent(hand in any_hand()) {
        let canonical = hand.to_string();
        let aliased = canonical.replace('T', "10");
        prop_assert_eq!(validate(&aliased), validate(&canonical));
    }
}
