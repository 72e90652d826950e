// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Discard selection.
use fivedraw_cards::{Card, Rank};

/// The maximum number of cards a player can discard.
pub const MAX_DISCARDS: usize = 3;

/// Selects up to [MAX_DISCARDS] cards to discard from a hand in hand order.
///
/// Candidates are the cards that are not keepers starting from the weakest,
/// face cards and aces are only discarded when there are more than two
/// keepers.
pub fn select_discards(hand: &[Card], keepers: &[Card]) -> Vec<Card> {
    let strong_keepers = keepers.len() > 2;

    hand.iter()
        .rev()
        .filter(|c| !keepers.contains(c))
        .filter(|c| strong_keepers || c.rank() < Rank::Jack)
        .take(MAX_DISCARDS)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate;
    use fivedraw_cards::Suit;

    fn discards(hand: &[Card]) -> Vec<Card> {
        let eval = evaluate(hand);
        select_discards(hand, &eval.keepers)
    }

    #[test]
    fn two_pair_discards_king() {
        let hand = [
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Spades),
            Card::new(Rank::Trey, Suit::Clubs),
            Card::new(Rank::Trey, Suit::Diamonds),
        ];
        assert_eq!(discards(&hand), vec![Card::new(Rank::King, Suit::Clubs)]);
    }

    #[test]
    fn high_card_keeps_faces() {
        let hand = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Clubs),
            Card::new(Rank::Six, Suit::Diamonds),
            Card::new(Rank::Deuce, Suit::Clubs),
        ];

        // The ace is the keeper, the queen is never discarded.
        assert_eq!(
            discards(&hand),
            vec![
                Card::new(Rank::Deuce, Suit::Clubs),
                Card::new(Rank::Six, Suit::Diamonds),
                Card::new(Rank::Nine, Suit::Clubs),
            ]
        );

        let hand = [
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Clubs),
            Card::new(Rank::Ten, Suit::Diamonds),
            Card::new(Rank::Eight, Suit::Clubs),
        ];
        assert_eq!(
            discards(&hand),
            vec![
                Card::new(Rank::Eight, Suit::Clubs),
                Card::new(Rank::Ten, Suit::Diamonds),
            ]
        );
    }

    #[test]
    fn one_pair_discards() {
        let hand = [
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Spades),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Four, Suit::Diamonds),
        ];
        assert_eq!(
            discards(&hand),
            vec![
                Card::new(Rank::Four, Suit::Diamonds),
                Card::new(Rank::Five, Suit::Clubs),
            ]
        );
    }

    #[test]
    fn three_of_a_kind_discards_faces() {
        let hand = [
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Deuce, Suit::Clubs),
            Card::new(Rank::Deuce, Suit::Diamonds),
            Card::new(Rank::Deuce, Suit::Spades),
        ];
        assert_eq!(
            discards(&hand),
            vec![
                Card::new(Rank::Queen, Suit::Hearts),
                Card::new(Rank::Ace, Suit::Clubs),
            ]
        );
    }

    #[test]
    fn made_hands_have_no_discards() {
        let hand = [
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Hearts),
        ];
        assert!(discards(&hand).is_empty());
    }

    #[test]
    fn at_most_three_discards() {
        let hand = [
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::Six, Suit::Spades),
            Card::new(Rank::Four, Suit::Hearts),
            Card::new(Rank::Trey, Suit::Diamonds),
            Card::new(Rank::Deuce, Suit::Clubs),
        ];
        let keepers = [Card::new(Rank::Nine, Suit::Hearts)];
        let discards = select_discards(&hand, &keepers);
        assert_eq!(discards.len(), MAX_DISCARDS);
        assert_eq!(discards[0], Card::new(Rank::Deuce, Suit::Clubs));
        assert!(!discards.contains(&keepers[0]));
    }
}
