// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A player hand.
use serde::{Deserialize, Serialize};

use fivedraw_eval::{Card, Evaluation, Ranking, evaluate, select_discards};

/// The cards dealt to a player with their evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    player: usize,
    cards: Vec<Card>,
    score: Ranking,
    keepers: Vec<Card>,
    discards: Vec<Card>,
}

impl Hand {
    /// Creates a hand for a player, players are numbered from 1.
    ///
    /// The cards are sorted by descending rank and suit.
    pub fn new(player: usize, mut cards: Vec<Card>) -> Self {
        Card::sort_desc(&mut cards);
        Self {
            player,
            cards,
            score: Ranking::None,
            keepers: Vec::new(),
            discards: Vec::new(),
        }
    }

    /// Evaluates this hand, computes the keepers and the discards.
    pub fn evaluate(&mut self) -> Ranking {
        let Evaluation { ranking, keepers } = evaluate(&self.cards);
        self.discards = select_discards(&self.cards, &keepers);
        self.keepers = keepers;
        self.score = ranking;
        ranking
    }

    /// The player this hand belongs to.
    pub fn player(&self) -> usize {
        self.player
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The hand ranking, [Ranking::None] until evaluated.
    pub fn score(&self) -> Ranking {
        self.score
    }

    /// The cards that make the hand ranking.
    pub fn keepers(&self) -> &[Card] {
        &self.keepers
    }

    /// The cards the player should discard.
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// The highest card.
    pub fn best_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// The lowest card, the first in hand order if more than one.
    pub fn worst_card(&self) -> Option<Card> {
        self.cards.iter().min_by_key(|c| c.rank()).copied()
    }
}
