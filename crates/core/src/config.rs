// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Session configuration.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fivedraw_eval::Deck;

/// How the cards are split between players.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealPolicy {
    /// One card at a time to each player, the deck keeps all its cards.
    #[default]
    RoundRobin,
    /// A block of cards to each player, dealt cards are removed from the deck.
    Blocks,
}

/// How a round win is credited when more than one player has the best hand.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditPolicy {
    /// Each winner gets an equal share of one win.
    #[default]
    Shared,
    /// Each winner gets a full win.
    Full,
}

/// Configuration errors, these are checked before any card is dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The session has no players.
    #[error("the number of players must be positive")]
    NoPlayers,
    /// Hands have no cards.
    #[error("the number of cards in a hand must be positive")]
    EmptyHand,
    /// The players hands need more cards than a full deck.
    #[error("{players} players with {cards_in_hand} cards each need more than {} cards", Deck::SIZE)]
    TooManyCards {
        /// The number of players.
        players: usize,
        /// The number of cards per hand.
        cards_in_hand: usize,
    },
    /// The deck has fewer cards than the deal needs.
    #[error("dealing needs {needed} cards but the deck has {available}")]
    NotEnoughCards {
        /// Cards needed for the deal.
        needed: usize,
        /// Cards left in the deck.
        available: usize,
    },
}

/// Session config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The number of players.
    pub players: usize,
    /// The number of cards dealt to each player.
    pub cards_in_hand: usize,
    /// The dealing policy.
    pub deal: DealPolicy,
    /// The tie credit policy.
    pub credit: CreditPolicy,
}

impl Config {
    /// Checks that the hands can be dealt from a single deck.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players == 0 {
            return Err(ConfigError::NoPlayers);
        }

        if self.cards_in_hand == 0 {
            return Err(ConfigError::EmptyHand);
        }

        if self.dealt_cards() > Deck::SIZE {
            return Err(ConfigError::TooManyCards {
                players: self.players,
                cards_in_hand: self.cards_in_hand,
            });
        }

        Ok(())
    }

    /// The number of cards dealt in a round.
    pub fn dealt_cards(&self) -> usize {
        self.players.saturating_mul(self.cards_in_hand)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 4,
            cards_in_hand: 5,
            deal: DealPolicy::default(),
            credit: CreditPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(players: usize, cards_in_hand: usize) -> Config {
        Config {
            players,
            cards_in_hand,
            ..Config::default()
        }
    }

    #[test]
    fn valid_configs() {
        assert!(Config::default().validate().is_ok());
        assert!(config(1, 1).validate().is_ok());
        assert!(config(10, 5).validate().is_ok());
        assert!(config(4, 13).validate().is_ok());
        assert!(config(1, 52).validate().is_ok());
    }

    #[test]
    fn invalid_configs() {
        assert_eq!(config(0, 5).validate(), Err(ConfigError::NoPlayers));
        assert_eq!(config(4, 0).validate(), Err(ConfigError::EmptyHand));
        assert_eq!(
            config(11, 5).validate(),
            Err(ConfigError::TooManyCards {
                players: 11,
                cards_in_hand: 5
            })
        );
        assert!(config(usize::MAX, 2).validate().is_err());

        let err = config(53, 1).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "53 players with 1 cards each need more than 52 cards"
        );
    }
}
