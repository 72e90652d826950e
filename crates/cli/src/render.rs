// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text and JSON rendering of rounds.
use anyhow::Result;
use crossterm::style::Stylize;
use serde::Serialize;
use std::io::{self, Write};

use fivedraw_core::{Card, Hand, Round, WinStats};

const SEPARATOR: &str = "--------------------";

/// Formats a card with its rank value.
pub fn card_label(card: &Card) -> String {
    format!("{}({})", card, card.rank().value())
}

fn cards_list(cards: &[Card]) -> String {
    let labels = cards.iter().map(card_label).collect::<Vec<_>>();
    format!("[{}]", labels.join(", "))
}

/// Prints cards on the given number of rows, earlier rows get the extra
/// cards if the cards cannot be split evenly.
pub fn print_cards<W: Write>(
    out: &mut W,
    cards: &[Card],
    desc: Option<&str>,
    rows: usize,
    color: bool,
) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    if let Some(desc) = desc {
        writeln!(out, "{desc}")?;
    }

    let rows = rows.max(1);
    let (per_row, extra) = (cards.len() / rows, cards.len() % rows);

    let mut start = 0;
    for row in 0..rows {
        let end = start + per_row + usize::from(row < extra);
        if start == end {
            break;
        }

        for card in &cards[start..end] {
            let label = card_label(card);
            if color && card.suit().is_red() {
                write!(out, "{} ", label.red())?;
            } else {
                write!(out, "{label} ")?;
            }
        }

        writeln!(out)?;
        start = end;
    }

    Ok(())
}

/// Formats a hand summary line.
pub fn hand_line(hand: &Hand, win_percentage: f64) -> String {
    let best = hand.best_card().map(|c| card_label(&c)).unwrap_or_default();
    let worst = hand.worst_card().map(|c| card_label(&c)).unwrap_or_default();
    let discards = if hand.discards().is_empty() {
        String::new()
    } else {
        format!(" Discards: {}", cards_list(hand.discards()))
    };

    format!(
        "{}. {:<15} Rank:{} Hand: {:<40} Best:{} Worst:{}{} Win%: {:.2}%",
        hand.player(),
        hand.score(),
        hand.score().ordinal(),
        cards_list(hand.cards()),
        best,
        worst,
        discards,
        win_percentage,
    )
}

/// Prints a round as text.
pub fn print_round<W: Write>(
    out: &mut W,
    round: &Round,
    stats: &WinStats,
    color: bool,
) -> io::Result<()> {
    writeln!(out, "Round {}", round.number)?;
    print_cards(out, &round.shuffled, Some("Shuffled Deck"), 4, color)?;

    let desc = format!("Deck Cut at {}", round.cut);
    print_cards(out, &round.cut_deck, Some(&desc), 4, color)?;

    writeln!(out, "{SEPARATOR}")?;
    for hand in &round.hands {
        let line = hand_line(hand, stats.win_percentage(hand.player()));
        writeln!(out, "{line}")?;
    }

    print_cards(out, &round.remaining, Some("Remaining Cards"), 2, color)
}

/// A player win statistics.
#[derive(Debug, Serialize)]
struct PlayerWins {
    player: usize,
    credits: f64,
    percentage: f64,
}

/// A round report with the running statistics.
#[derive(Debug, Serialize)]
struct RoundReport<'a> {
    round: &'a Round,
    wins: Vec<PlayerWins>,
}

/// Prints a round as a JSON line.
pub fn print_json<W: Write>(out: &mut W, round: &Round, stats: &WinStats) -> Result<()> {
    let wins = round
        .hands
        .iter()
        .map(|h| PlayerWins {
            player: h.player(),
            credits: stats.credits(h.player()),
            percentage: stats.win_percentage(h.player()),
        })
        .collect();

    let report = RoundReport { round, wins };
    serde_json::to_writer(&mut *out, &report)?;
    writeln!(out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivedraw_core::{Config, Game, Rank, Suit};
    use rand::{SeedableRng, rngs::StdRng};

    fn rendered(cards: &[Card], desc: Option<&str>, rows: usize) -> Vec<String> {
        let mut out = Vec::new();
        print_cards(&mut out, cards, desc, rows, false).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn card_labels() {
        let card = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(card_label(&card), "10♥(8)");

        let card = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(card_label(&card), "A♠(12)");
    }

    #[test]
    fn cards_rows() {
        let cards = fivedraw_core::Deck::default().into_iter().collect::<Vec<_>>();

        let lines = rendered(&cards, Some("Current Deck"), 4);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], SEPARATOR);
        assert_eq!(lines[1], "Current Deck");
        assert!(lines[2].starts_with("2♣(0) 3♣(1) "));
        assert_eq!(lines[2].split_whitespace().count(), 13);

        // 7 cards on 2 rows, the first row gets the extra card.
        let lines = rendered(&cards[..7], None, 2);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].split_whitespace().count(), 4);
        assert_eq!(lines[2].split_whitespace().count(), 3);

        // Fewer cards than rows.
        let lines = rendered(&cards[..2], None, 4);
        assert_eq!(lines.len(), 3);

        let lines = rendered(&[], Some("Remaining Cards"), 2);
        assert_eq!(lines, vec![SEPARATOR, "Remaining Cards"]);
    }

    #[test]
    fn hand_summary() {
        let mut hand = Hand::new(
            3,
            vec![
                Card::new(Rank::Trey, Suit::Clubs),
                Card::new(Rank::Trey, Suit::Diamonds),
                Card::new(Rank::Seven, Suit::Hearts),
                Card::new(Rank::Seven, Suit::Spades),
                Card::new(Rank::King, Suit::Clubs),
            ],
        );
        hand.evaluate();

        let line = hand_line(&hand, 12.5);
        assert!(line.starts_with("3. Two Pair        Rank:3 Hand: [K♣(11), 7♥(5), 7♠(5), 3♣(1), 3♦(1)]"));
        assert!(line.contains("Best:K♣(11) Worst:3♣(1) Discards: [K♣(11)]"));
        assert!(line.ends_with("Win%: 12.50%"));
    }

    #[test]
    fn round_reports() {
        let rng = StdRng::seed_from_u64(13);
        let mut game = Game::with_rng(Config::default(), rng).unwrap();
        let round = game.play_round().unwrap();

        let mut out = Vec::new();
        print_round(&mut out, &round, game.stats(), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Round 1\n"));
        assert!(text.contains("Shuffled Deck"));
        assert!(text.contains("Remaining Cards"));
        assert_eq!(text.lines().filter(|l| l.contains("Win%:")).count(), 4);

        let mut out = Vec::new();
        print_json(&mut out, &round, game.stats()).unwrap();
        let json = serde_json::from_slice::<serde_json::Value>(&out).unwrap();
        assert_eq!(json["round"]["number"], 1);
        assert_eq!(json["round"]["hands"].as_array().unwrap().len(), 4);
        assert_eq!(json["wins"].as_array().unwrap().len(), 4);
    }
}
