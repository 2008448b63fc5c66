//! Hand ranking.
//!
//! Two hands are compared by a fixed precedence of patterns. A pattern
//! decides the comparison as soon as it appears in either hand:
//!
//! 1. Three or more cards of one rank. The hand with the larger group wins;
//!    equal group sizes fall back to snapshot order.
//! 2. A sequence: three consecutive rank ids holding exactly one card each.
//!    A lone sequence wins; two sequences fall back to snapshot order.
//! 3. A pair. Same rule as the first step with a group size of exactly two.
//! 4. Snapshot order.
//!
//! Snapshot order is the lexicographic order of [`HandSnapshot`]. The result
//! is [`Ordering::Equal`] only for identical snapshots.

use core::cmp::Ordering;

use crate::hand::{Hand, HandSnapshot};

/// Compares two hands from the point of view of `first`.
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use elimdeck::{Card, Hand, Rank, ranking};
///
/// let triplet: Hand = [Rank::Queen; 3].map(Card::new).into_iter().collect();
/// let mixed: Hand = [Rank::Ace, Rank::King, Rank::Two].map(Card::new).into_iter().collect();
/// assert_eq!(ranking::compare(&triplet, &mixed), Ordering::Greater);
/// ```
#[must_use]
pub fn compare(first: &Hand, second: &Hand) -> Ordering {
    compare_snapshots(first.snapshot(), second.snapshot())
}

/// Compares two hand snapshots from the point of view of `first`.
#[must_use]
pub fn compare_snapshots(first: &HandSnapshot, second: &HandSnapshot) -> Ordering {
    if first == second {
        return Ordering::Equal;
    }

    check_group_size(first, second, |largest| largest >= 3)
        .or_else(|| check_sequence(first, second))
        .or_else(|| check_group_size(first, second, |largest| largest == 2))
        .unwrap_or_else(|| by_snapshot(first, second))
}

/// Returns whether the hand holds three consecutive ranks, one card each.
#[must_use]
pub fn has_sequence(hand: &HandSnapshot) -> bool {
    hand.counts().windows(3).any(|run| run == [1, 1, 1])
}

fn by_snapshot(first: &HandSnapshot, second: &HandSnapshot) -> Ordering {
    if first > second {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

fn check_group_size(
    first: &HandSnapshot,
    second: &HandSnapshot,
    fires: impl Fn(usize) -> bool,
) -> Option<Ordering> {
    let count1 = first.largest_group();
    let count2 = second.largest_group();
    if !fires(count1.max(count2)) {
        return None;
    }

    if count1 == count2 {
        Some(by_snapshot(first, second))
    } else {
        Some(count1.cmp(&count2))
    }
}

fn check_sequence(first: &HandSnapshot, second: &HandSnapshot) -> Option<Ordering> {
    match (has_sequence(first), has_sequence(second)) {
        (true, true) => Some(by_snapshot(first, second)),
        (true, false) => Some(Ordering::Greater),
        (false, true) => Some(Ordering::Less),
        (false, false) => None,
    }
}
