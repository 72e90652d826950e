// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivedraw Poker core types.
//!
//! A [Game] deals a hand to each player from a shuffled and cut deck,
//! evaluates the hands, and keeps the win statistics across rounds:
//!
//! ```
//! # use fivedraw_core::{Config, Game};
//! let mut game = Game::new(Config::default()).unwrap();
//! let round = game.play_round().unwrap();
//! assert_eq!(round.hands.len(), 4);
//!
//! let pct = game.stats().win_percentage(1);
//! assert!((0.0..=100.0).contains(&pct));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod config;
pub mod dealer;
pub mod game;
pub mod hand;
pub mod stats;

pub use config::{Config, ConfigError, CreditPolicy, DealPolicy};
pub use dealer::{CUT_RANGE, Deal, deal_round};
pub use game::{Game, Round};
pub use hand::Hand;
pub use stats::WinStats;

// Reexport cards and evaluation types.
pub use fivedraw_eval::{Card, CardError, Deck, Evaluation, Rank, Ranking, Suit};
