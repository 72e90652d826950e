// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivedraw CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::io::{self, Write};

use fivedraw_core::{Config, CreditPolicy, DealPolicy, Game};

pub mod render;

/// How cards are dealt to the players.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Deal {
    /// One card at a time to each player.
    RoundRobin,
    /// A block of cards to each player.
    Blocks,
}

impl From<Deal> for DealPolicy {
    fn from(deal: Deal) -> Self {
        match deal {
            Deal::RoundRobin => DealPolicy::RoundRobin,
            Deal::Blocks => DealPolicy::Blocks,
        }
    }
}

/// How ties are credited.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Credit {
    /// Tied winners share one win.
    Shared,
    /// Each tied winner gets a full win.
    Full,
}

impl From<Credit> for CreditPolicy {
    fn from(credit: Credit) -> Self {
        match credit {
            Credit::Shared => CreditPolicy::Shared,
            Credit::Full => CreditPolicy::Full,
        }
    }
}

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=10))]
    players: u8,
    /// Number of cards per hand.
    #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
    cards: u8,
    /// Number of rounds to play.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,
    /// Seed for a reproducible session.
    #[clap(long)]
    seed: Option<u64>,
    /// The dealing policy.
    #[clap(long, value_enum, default_value_t = Deal::RoundRobin)]
    deal: Deal,
    /// The tie credit policy.
    #[clap(long, value_enum, default_value_t = Credit::Shared)]
    credit: Credit,
    /// Print a JSON report for each round.
    #[clap(long)]
    json: bool,
    /// Disable colors.
    #[clap(long)]
    plain: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = Config {
        players: cli.players as usize,
        cards_in_hand: cli.cards as usize,
        deal: cli.deal.into(),
        credit: cli.credit.into(),
    };

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut game = Game::with_rng(config, rng)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for _ in 0..cli.rounds {
        let round = game.play_round()?;
        if cli.json {
            render::print_json(&mut out, &round, game.stats())?;
        } else {
            render::print_round(&mut out, &round, game.stats(), !cli.plain)?;
        }
    }

    out.flush()?;

    let stats = game.stats();
    info!("Played {} rounds", stats.rounds());
    for player in 1..=config.players {
        info!(
            "Player {player} wins {:.2} ({:.2}%)",
            stats.credits(player),
            stats.win_percentage(player)
        );
    }

    Ok(())
}
