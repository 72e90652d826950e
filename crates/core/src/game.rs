// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A game session that plays rounds and keeps the win statistics.
use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;

use fivedraw_eval::{Card, Deck};

use crate::{
    config::{Config, ConfigError},
    dealer::{Deal, deal_round},
    hand::Hand,
    stats::WinStats,
};

/// A played round.
#[derive(Debug, Clone, Serialize)]
pub struct Round {
    /// The round number starting from 1.
    pub number: u64,
    /// The deck order after the shuffle.
    pub shuffled: Vec<Card>,
    /// The cut position.
    pub cut: usize,
    /// The deck order after the cut.
    pub cut_deck: Vec<Card>,
    /// The evaluated hands.
    pub hands: Vec<Hand>,
    /// The cards left after dealing.
    pub remaining: Vec<Card>,
    /// The players with the best hand.
    pub winners: Vec<usize>,
}

/// A game session.
#[derive(Debug)]
pub struct Game<R = StdRng> {
    config: Config,
    deck: Deck,
    stats: WinStats,
    rng: R,
}

impl Game<StdRng> {
    /// Creates a new game with OS seeded randomness.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new game with user initialized randomness.
    pub fn with_rng(config: Config, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            deck: Deck::default(),
            stats: WinStats::new(config.credit),
            rng,
        })
    }

    /// Plays a round, deals and evaluates the hands and registers the winners.
    pub fn play_round(&mut self) -> Result<Round, ConfigError> {
        // A blocks deal removes cards from the deck.
        if self.deck.count() < Deck::SIZE {
            self.deck.reset();
        }

        let Deal {
            shuffled,
            cut,
            cut_deck,
            mut hands,
            remaining,
        } = deal_round(&mut self.deck, &self.config, &mut self.rng)?;

        for hand in hands.iter_mut() {
            let ranking = hand.evaluate();
            debug!(
                "Player {} {ranking} keepers {:?} discards {:?}",
                hand.player(),
                hand.keepers(),
                hand.discards()
            );
        }

        let winners = self.stats.register_round(&hands);
        let number = self.stats.rounds();
        info!("Round {number} winners {winners:?}");

        Ok(Round {
            number,
            shuffled,
            cut,
            cut_deck,
            hands,
            remaining,
            winners,
        })
    }

    /// The session config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The session deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The win statistics.
    pub fn stats(&self) -> &WinStats {
        &self.stats
    }

    /// Clears the win statistics.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CreditPolicy, DealPolicy};
    use fivedraw_eval::Ranking;

    const EPSILON: f64 = 1e-9;

    // Creates a `Game` with seeded randomness.
    fn new_game(config: Config) -> Game {
        Game::with_rng(config, StdRng::seed_from_u64(13)).unwrap()
    }

    #[test]
    fn invalid_config() {
        let config = Config {
            players: 6,
            cards_in_hand: 10,
            ..Config::default()
        };
        assert!(matches!(
            Game::new(config),
            Err(ConfigError::TooManyCards { .. })
        ));
    }

    #[test]
    fn play_rounds() {
        let mut game = new_game(Config::default());

        for n in 1..=50 {
            let round = game.play_round().unwrap();
            assert_eq!(round.number, n);
            assert_eq!(round.hands.len(), 4);
            assert_eq!(round.remaining.len(), Deck::SIZE - 20);
            assert!(!round.winners.is_empty());

            let best = round.hands.iter().map(|h| h.score()).max().unwrap();
            for hand in &round.hands {
                assert_ne!(hand.score(), Ranking::None);
                assert!(hand.discards().len() <= 3);
                assert_eq!(round.winners.contains(&hand.player()), hand.score() == best);
            }
        }

        let stats = game.stats();
        assert_eq!(stats.rounds(), 50);
        assert!((stats.total_credits() - 50.0).abs() < EPSILON);

        let total = (1..=4).map(|p| stats.win_percentage(p)).sum::<f64>();
        assert!((total - 100.0).abs() < EPSILON);

        game.reset_stats();
        assert_eq!(game.stats().rounds(), 0);
    }

    #[test]
    fn full_credit_rounds() {
        let config = Config {
            credit: CreditPolicy::Full,
            ..Config::default()
        };
        let mut game = new_game(config);

        let mut tie_sizes = 0;
        for _ in 0..50 {
            tie_sizes += game.play_round().unwrap().winners.len();
        }

        let stats = game.stats();
        assert_eq!(stats.total_credits(), tie_sizes as f64);
        for player in 1..=4 {
            let pct = stats.win_percentage(player);
            assert!((0.0..=100.0).contains(&pct));
        }
    }

    #[test]
    fn blocks_rounds_restore_deck() {
        let config = Config {
            players: 5,
            cards_in_hand: 10,
            deal: DealPolicy::Blocks,
            credit: CreditPolicy::Shared,
        };
        let mut game = new_game(config);

        for _ in 0..3 {
            let round = game.play_round().unwrap();
            assert_eq!(round.remaining.len(), 2);
            assert_eq!(game.deck().count(), 2);
        }

        assert_eq!(game.stats().rounds(), 3);
    }

    #[test]
    fn independent_sessions() {
        let mut g1 = new_game(Config::default());
        let g2 = new_game(Config::default());

        g1.play_round().unwrap();
        assert_eq!(g1.stats().rounds(), 1);
        assert_eq!(g2.stats().rounds(), 0);
        assert_eq!(g2.config(), &Config::default());
    }
}
