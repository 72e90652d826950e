// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivedraw Poker hand evaluator.
//!
//! Classifies a five cards hand into one of ten [Ranking] categories and
//! returns the keeper cards that make the category, these are then used to
//! select the cards a player should discard:
//!
//! ```
//! # use fivedraw_eval::*;
//! let hand = [
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::Seven, Suit::Hearts),
//!     Card::new(Rank::Seven, Suit::Spades),
//!     Card::new(Rank::Trey, Suit::Clubs),
//!     Card::new(Rank::Trey, Suit::Diamonds),
//! ];
//!
//! let eval = evaluate(&hand);
//! assert_eq!(eval.ranking, Ranking::TwoPair);
//! assert_eq!(eval.keepers.len(), 4);
//!
//! let discards = select_discards(&hand, &eval.keepers);
//! assert_eq!(discards, vec![Card::new(Rank::King, Suit::Clubs)]);
//! ```
//!
//! There is no low ace straight, the ace always plays as the highest card.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod discard;
pub mod ranking;

pub use discard::{MAX_DISCARDS, select_discards};
pub use ranking::{Evaluation, MIN_MADE_HAND, Ranking, evaluate};

// Reexport cards types.
pub use fivedraw_cards::{Card, CardError, Deck, Rank, Suit};
