// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivedraw Poker cards types.
//!
//! This crate define types to create cards, either from the typed [Rank] and
//! [Suit] enums or from raw face values that are validated:
//!
//! ```
//! # use fivedraw_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let th = Card::numeric(Suit::Hearts, 10).unwrap();
//! assert!(ah.rank() > th.rank());
//! assert_eq!(th.to_string(), "10♥");
//!
//! assert!(Card::numeric(Suit::Clubs, 11).is_err());
//! assert!(Card::face(Suit::Clubs, 'X').is_err());
//! ```
//!
//! and a [Deck] type for shuffling, cutting, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use fivedraw_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, CardError, Deck, Rank, Suit};
