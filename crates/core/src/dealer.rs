// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Shuffle, cut, and deal the cards to the players.
use log::debug;
use rand::Rng;
use serde::Serialize;
use std::ops::Range;

use fivedraw_eval::{Card, Deck};

use crate::{
    config::{Config, ConfigError, DealPolicy},
    hand::Hand,
};

/// The range the cut position is drawn from.
pub const CUT_RANGE: Range<usize> = 15..35;

/// The result of dealing a round.
#[derive(Debug, Clone, Serialize)]
pub struct Deal {
    /// The deck order after the shuffle.
    pub shuffled: Vec<Card>,
    /// The cut position.
    pub cut: usize,
    /// The deck order after the cut.
    pub cut_deck: Vec<Card>,
    /// The players hands, not evaluated.
    pub hands: Vec<Hand>,
    /// The cards left after dealing.
    pub remaining: Vec<Card>,
}

/// Shuffles and cuts the deck and then deals a hand to each player.
///
/// The config is checked before touching the deck, with the
/// [DealPolicy::Blocks] policy the dealt cards are removed from the deck.
pub fn deal_round<R: Rng>(
    deck: &mut Deck,
    config: &Config,
    rng: &mut R,
) -> Result<Deal, ConfigError> {
    config.validate()?;

    let needed = config.dealt_cards();
    if needed > deck.count() {
        return Err(ConfigError::NotEnoughCards {
            needed,
            available: deck.count(),
        });
    }

    deck.shuffle(rng);
    let shuffled = deck.cards().to_vec();

    let cut = rng.random_range(CUT_RANGE);
    deck.cut(cut);
    let cut_deck = deck.cards().to_vec();

    debug!(
        "Dealing {} cards to {} players, cut at {cut}",
        config.cards_in_hand, config.players
    );

    let (cards, remaining) = match config.deal {
        DealPolicy::RoundRobin => {
            let mut cards = vec![Vec::with_capacity(config.cards_in_hand); config.players];
            for (idx, card) in deck.cards()[..needed].iter().enumerate() {
                cards[idx % config.players].push(*card);
            }

            (cards, deck.cards()[needed..].to_vec())
        }
        DealPolicy::Blocks => {
            let cards = (0..config.players)
                .map(|_| deck.take_front(config.cards_in_hand))
                .collect::<Vec<_>>();

            (cards, deck.cards().to_vec())
        }
    };

    let hands = cards
        .into_iter()
        .enumerate()
        .map(|(idx, cards)| Hand::new(idx + 1, cards))
        .collect();

    Ok(Deal {
        shuffled,
        cut,
        cut_deck,
        hands,
        remaining,
    })
}
