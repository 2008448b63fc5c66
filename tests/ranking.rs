//! Hand ranking tests.

use core::cmp::Ordering;

use elimdeck::ranking::{compare, compare_snapshots, has_sequence};
use elimdeck::{Card, Hand, Rank};
use proptest::prelude::*;

fn hand(ranks: &[Rank]) -> Hand {
    ranks.iter().copied().map(Card::new).collect()
}

#[test]
fn triplet_beats_scattered_cards() {
    let triplet = hand(&[Rank::Queen, Rank::Queen, Rank::Queen]);
    let scattered = hand(&[Rank::Ace, Rank::King, Rank::Two]);
    assert_eq!(compare(&triplet, &scattered), Ordering::Greater);
    assert_eq!(compare(&scattered, &triplet), Ordering::Less);
}

#[test]
fn triplet_beats_sequence() {
    let triplet = hand(&[Rank::King, Rank::King, Rank::King]);
    let sequence = hand(&[Rank::Ace, Rank::King, Rank::Queen]);
    assert_eq!(compare(&triplet, &sequence), Ordering::Greater);
}

#[test]
fn higher_triplet_wins() {
    let kings = hand(&[Rank::King, Rank::King, Rank::King]);
    let aces = hand(&[Rank::Ace, Rank::Ace, Rank::Ace]);
    assert_eq!(compare(&kings, &aces), Ordering::Less);
}

#[test]
fn sequence_beats_pair() {
    let sequence = hand(&[Rank::Ace, Rank::King, Rank::Queen]);
    let pair = hand(&[Rank::Ace, Rank::King, Rank::King]);
    assert_eq!(compare(&sequence, &pair), Ordering::Greater);

    // A pair next to single cards is not a sequence, even with a high card.
    let pair_with_run = hand(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Queen]);
    let low_sequence = hand(&[Rank::Nine, Rank::Eight, Rank::Seven]);
    assert_eq!(compare(&pair_with_run, &low_sequence), Ordering::Less);
}

#[test]
fn higher_sequence_wins() {
    let high = hand(&[Rank::Ace, Rank::King, Rank::Queen]);
    let low = hand(&[Rank::King, Rank::Queen, Rank::Ten]);
    assert_eq!(compare(&high, &low), Ordering::Greater);
}

#[test]
fn pair_beats_high_cards() {
    let pair = hand(&[Rank::Two, Rank::Two, Rank::Three]);
    let high = hand(&[Rank::Ace, Rank::King, Rank::Ten]);
    assert_eq!(compare(&pair, &high), Ordering::Greater);
}

#[test]
fn higher_pair_wins() {
    let aces = hand(&[Rank::Ace, Rank::Ace, Rank::Two]);
    let kings = hand(&[Rank::King, Rank::King, Rank::Queen]);
    assert_eq!(compare(&aces, &kings), Ordering::Greater);
}

#[test]
fn high_card_decides_without_pattern() {
    let ace_high = hand(&[Rank::Ace, Rank::Ten, Rank::Eight]);
    let king_high = hand(&[Rank::King, Rank::Queen, Rank::Nine]);
    assert_eq!(compare(&ace_high, &king_high), Ordering::Greater);

    let ten = hand(&[Rank::Ten]);
    let two = hand(&[Rank::Two]);
    assert_eq!(compare(&ten, &two), Ordering::Greater);
}

#[test]
fn identical_hands_are_equal() {
    let first = hand(&[Rank::Ace, Rank::Five, Rank::Five]);
    let second = hand(&[Rank::Five, Rank::Ace, Rank::Five]);
    assert_eq!(compare(&first, &second), Ordering::Equal);
    assert_eq!(
        compare_snapshots(first.snapshot(), second.snapshot()),
        Ordering::Equal
    );
    assert_eq!(compare(&Hand::new(), &Hand::new()), Ordering::Equal);
}

#[test]
fn sequence_detection() {
    assert!(has_sequence(hand(&[Rank::King, Rank::Queen, Rank::Ten]).snapshot()));
    assert!(has_sequence(
        hand(&[Rank::Four, Rank::Three, Rank::Two, Rank::Ace]).snapshot()
    ));
    assert!(!has_sequence(
        hand(&[Rank::Ace, Rank::King, Rank::King, Rank::Queen]).snapshot()
    ));
    assert!(!has_sequence(hand(&[Rank::Ace, Rank::Queen, Rank::Nine]).snapshot()));
}

fn any_hand() -> impl Strategy<Value = Hand> {
    proptest::collection::vec(0u8..12, 0..7).prop_map(|ids| {
        ids.into_iter()
            .filter_map(Rank::from_id)
            .map(Card::new)
            .collect()
    })
}

proptest! {
    #[test]
    fn comparison_is_antisymmetric(first in any_hand(), second in any_hand()) {
        prop_assert_eq!(compare(&first, &second), compare(&second, &first).reverse());
    }

    #[test]
    fn comparison_with_itself_is_equal(first in any_hand()) {
        prop_assert_eq!(compare(&first, &first.clone()), Ordering::Equal);
    }

    #[test]
    fn only_identical_snapshots_are_equal(first in any_hand(), second in any_hand()) {
        let equal = compare(&first, &second) == Ordering::Equal;
        prop_assert_eq!(equal, first.snapshot() == second.snapshot());
    }
}
