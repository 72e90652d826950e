// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranking.
//!
//! A hand is first checked for straights and flushes, if it is neither the
//! cards are grouped by rank and the group sizes are classified as a whole,
//! so that a full house is found whatever order the groups are visited.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use fivedraw_cards::{Card, Rank};

/// The minimum number of cards for a straight or a flush.
pub const MIN_MADE_HAND: usize = 5;

/// A hand ranking from the weakest to the strongest.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Ranking {
    /// The hand has not been evaluated.
    #[default]
    None = 0,
    /// High card.
    HighCard,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Ten to ace straight flush.
    RoyalFlush,
}

impl Ranking {
    /// The ranking position, 0 for [Ranking::None] up to 10 for a royal flush.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Returns all the rankings an evaluated hand can have.
    pub fn rankings() -> impl DoubleEndedIterator<Item = Ranking> {
        use Ranking::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ranking::None => "None",
            Ranking::HighCard => "High Card",
            Ranking::OnePair => "One Pair",
            Ranking::TwoPair => "Two Pair",
            Ranking::ThreeOfAKind => "Three of a Kind",
            Ranking::Straight => "Straight",
            Ranking::Flush => "Flush",
            Ranking::FullHouse => "Full House",
            Ranking::FourOfAKind => "Four of a Kind",
            Ranking::StraightFlush => "Straight Flush",
            Ranking::RoyalFlush => "Royal Flush",
        };

        // Use pad so callers can align names.
        f.pad(name)
    }
}

/// The result of a hand evaluation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The hand ranking.
    pub ranking: Ranking,
    /// The cards that make the ranking, in hand order.
    pub keepers: Vec<Card>,
}

/// Evaluates a hand.
///
/// The result only depends on the cards and not on their order, an empty
/// hand evaluates to [Ranking::None].
pub fn evaluate(cards: &[Card]) -> Evaluation {
    if cards.is_empty() {
        return Evaluation::default();
    }

    let mut hand = cards.to_vec();
    Card::sort_desc(&mut hand);

    let is_made = hand.len() >= MIN_MADE_HAND;
    let is_flush = is_made && hand.iter().all(|c| c.suit() == hand[0].suit());
    // In hand order each card must be one rank below the previous one.
    let is_straight = is_made
        && hand
            .windows(2)
            .all(|w| w[0].rank().value() == w[1].rank().value() + 1);

    let lowest = hand[hand.len() - 1].rank();
    let ranking = match (is_straight, is_flush) {
        (true, true) if lowest == Rank::Ten => Ranking::RoyalFlush,
        (true, true) => Ranking::StraightFlush,
        (false, true) => Ranking::Flush,
        (true, false) => Ranking::Straight,
        (false, false) => return evaluate_groups(hand),
    };

    Evaluation {
        ranking,
        keepers: hand,
    }
}

/// Classifies a hand that is neither a straight or a flush.
fn evaluate_groups(hand: Vec<Card>) -> Evaluation {
    let mut groups = AHashMap::<Rank, usize>::with_capacity(hand.len());
    for card in &hand {
        *groups.entry(card.rank()).or_default() += 1;
    }

    let mut sizes = groups
        .values()
        .copied()
        .filter(|&n| n > 1)
        .collect::<Vec<_>>();
    sizes.sort_unstable_by(|a, b| b.cmp(a));

    let ranking = match sizes.as_slice() {
        [] => Ranking::HighCard,
        [n, ..] if *n >= 4 => Ranking::FourOfAKind,
        [3, _, ..] => Ranking::FullHouse,
        [3] => Ranking::ThreeOfAKind,
        [2, _, ..] => Ranking::TwoPair,
        _ => Ranking::OnePair,
    };

    let keepers = if ranking == Ranking::HighCard {
        // The hand is sorted so the first card is the highest.
        vec![hand[0]]
    } else {
        hand.into_iter()
            .filter(|c| groups.get(&c.rank()).is_some_and(|&n| n > 1))
            .collect()
    };

    Evaluation { ranking, keepers }
}
