#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives the Cookie Crunch board core.
//!
//! The adapter plays the role a scene layer plays in a graphical build:
//! it asks the level for a population, keeps its own render handles
//! keyed by cookie identity, validates candidate swaps before
//! submitting them, and draws the board after every mutation.

use anyhow::{bail, Context, Result};
use clap::Parser;
use cookie_crunch_board::{query, Level, LevelConfig, SpriteTable, DEFAULT_COLUMNS, DEFAULT_ROWS};
use cookie_crunch_core::{CookieType, Swap};

#[derive(Debug, Parser)]
#[command(
    name = "cookie-crunch",
    about = "Populate a cookie board and optionally apply one swap"
)]
struct Args {
    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: u32,

    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u32,

    /// Seed for the board's random number generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Swap to apply after population, written as `COL,ROW:COL,ROW`.
    #[arg(long, value_name = "COL,ROW:COL,ROW")]
    swap: Option<String>,
}

/// Entry point for the Cookie Crunch command-line interface.
fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = LevelConfig::new(args.columns, args.rows, args.seed);
    let mut level = Level::new(config).context("failed to construct the level")?;

    let cookies = level.shuffle();
    let mut sprites = SpriteTable::new();
    for cookie in &cookies {
        sprites.attach(cookie.id(), glyph(cookie.cookie_type()));
    }

    println!("{}", render(&level, &sprites));

    if let Some(candidate) = args.swap.as_deref() {
        let (from, to) = parse_swap(candidate)?;
        let swap = build_swap(&level, from, to)?;
        println!("{swap}");
        level.perform_swap(swap);
        println!("{}", render(&level, &sprites));
    }

    Ok(())
}

/// Validates a candidate exchange the way an input layer must: both
/// cells in range, both occupied, and the two cells adjacent. The
/// level itself applies any swap of two occupied cells; adjacency is
/// this collaborator's responsibility.
fn build_swap(level: &Level, from: (u32, u32), to: (u32, u32)) -> Result<Swap> {
    let (columns, rows) = query::dimensions(level);
    for (column, row) in [from, to] {
        if column >= columns || row >= rows {
            bail!("cell ({column}, {row}) is outside the {columns}x{rows} board");
        }
    }

    if from.0.abs_diff(to.0) + from.1.abs_diff(to.1) != 1 {
        bail!(
            "cells ({}, {}) and ({}, {}) are not adjacent",
            from.0,
            from.1,
            to.0,
            to.1
        );
    }

    let Some(cookie_a) = query::cookie_at(level, from.0, from.1) else {
        bail!("no cookie at ({}, {})", from.0, from.1);
    };
    let Some(cookie_b) = query::cookie_at(level, to.0, to.1) else {
        bail!("no cookie at ({}, {})", to.0, to.1);
    };

    Ok(Swap::new(cookie_a.id(), cookie_b.id()))
}

fn parse_swap(candidate: &str) -> Result<((u32, u32), (u32, u32))> {
    let (from, to) = candidate
        .split_once(':')
        .with_context(|| format!("swap `{candidate}` must be written as COL,ROW:COL,ROW"))?;
    Ok((parse_cell(from)?, parse_cell(to)?))
}

fn parse_cell(cell: &str) -> Result<(u32, u32)> {
    let (column, row) = cell
        .split_once(',')
        .with_context(|| format!("cell `{cell}` must be written as COL,ROW"))?;
    let column = column
        .trim()
        .parse()
        .with_context(|| format!("invalid column in `{cell}`"))?;
    let row = row
        .trim()
        .parse()
        .with_context(|| format!("invalid row in `{cell}`"))?;
    Ok((column, row))
}

/// Single-character stand-in for the sprite a graphical adapter would
/// load via [`CookieType::sprite_name`].
fn glyph(cookie_type: CookieType) -> char {
    match cookie_type {
        CookieType::Croissant => 'C',
        CookieType::Cupcake => 'U',
        CookieType::Danish => 'D',
        CookieType::Donut => 'O',
        CookieType::Macaroon => 'M',
        CookieType::SugarCookie => 'S',
    }
}

/// Draws the board with row zero at the bottom, matching the layout a
/// scene would use.
fn render(level: &Level, sprites: &SpriteTable<char>) -> String {
    let (columns, rows) = query::dimensions(level);
    let mut output = String::new();

    for row in (0..rows).rev() {
        for column in 0..columns {
            let symbol = query::cookie_at(level, column, row)
                .and_then(|cookie| sprites.handle(cookie.id()).copied())
                .unwrap_or('.');
            output.push(symbol);
            if column + 1 < columns {
                output.push(' ');
            }
        }
        if row > 0 {
            output.push('\n');
        }
    }

    output
}
