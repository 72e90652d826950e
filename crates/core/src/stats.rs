// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Win statistics across rounds.
use ahash::AHashMap;
use log::debug;

use fivedraw_eval::Ranking;

use crate::{config::CreditPolicy, hand::Hand};

/// Accumulates the round winners for each player.
#[derive(Debug, Default, Clone)]
pub struct WinStats {
    policy: CreditPolicy,
    rounds: u64,
    credits: AHashMap<usize, f64>,
}

impl WinStats {
    /// Creates empty statistics with the given tie credit policy.
    pub fn new(policy: CreditPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Registers a round and returns the winning players in hand order.
    ///
    /// The winners are the players with the best ranking, a round where no
    /// hand has been evaluated has no winners but is still counted.
    pub fn register_round(&mut self, hands: &[Hand]) -> Vec<usize> {
        self.rounds += 1;

        let best = hands
            .iter()
            .map(|h| h.score())
            .max()
            .unwrap_or(Ranking::None);
        if best == Ranking::None {
            debug!("Round {} has no winners", self.rounds);
            return Vec::new();
        }

        let winners = hands
            .iter()
            .filter(|h| h.score() == best)
            .map(|h| h.player())
            .collect::<Vec<_>>();

        let credit = match self.policy {
            CreditPolicy::Shared => 1.0 / winners.len() as f64,
            CreditPolicy::Full => 1.0,
        };

        for player in &winners {
            *self.credits.entry(*player).or_default() += credit;
        }

        winners
    }

    /// The win percentage for a player, 0 if no rounds have been played.
    pub fn win_percentage(&self, player: usize) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }

        let pct = 100.0 * self.credits(player) / self.rounds as f64;
        pct.clamp(0.0, 100.0)
    }

    /// The wins credited to a player.
    pub fn credits(&self, player: usize) -> f64 {
        self.credits.get(&player).copied().unwrap_or_default()
    }

    /// The sum of credits of all players.
    pub fn total_credits(&self) -> f64 {
        self.credits.values().sum()
    }

    /// The number of rounds played.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// The tie credit policy.
    pub fn policy(&self) -> CreditPolicy {
        self.policy
    }

    /// Clears all rounds and credits.
    pub fn reset(&mut self) {
        self.rounds = 0;
        self.credits.clear();
    }
}
