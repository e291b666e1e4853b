/*
application.rs

Copyright 2026 Wordseek contributors

This file is part of Wordseek.

Wordseek is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordseek is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordseek. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Wire the game session to the terminal.
//!
//! The loop renders the grid, reads one cell pick per line from standard
//! input, and feeds picks and clock ticks to the [`Game`] session. Ticks are
//! caught up from the wall clock before each pick, so picks and ticks run to
//! completion in one context, in order.

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::cli_options::Args;
use crate::config;
use crate::draw;
use crate::game::{ClickOutcome, Game, TickOutcome};
use crate::saver::LeaderboardStore;
use crate::saver::leaderboard::SaverLeaderboard;

/// Run the application and return the process exit code.
pub fn run(args: &Args) -> u8 {
    let data_dir: PathBuf = args
        .data_dir
        .clone()
        .unwrap_or_else(config::default_data_dir);
    if let Err(e) = fs::create_dir_all(&data_dir) {
        warn!("Cannot create the data directory {data_dir:?}: {e}");
    }
    let saver: SaverLeaderboard = SaverLeaderboard::new(data_dir);

    if args.scores {
        return print_scores(&saver);
    }

    let mut rng: StdRng = match args.seed {
        Some(seed) => {
            debug!("Using the grid seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut game: Game = match Game::new(
        &config::TARGET_WORDS,
        config::GRID_SIZE,
        config::TIME_BUDGET_SECS,
        Box::new(saver),
        &mut rng,
    ) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Cannot generate the grid: {e:?}");
            return 1;
        }
    };

    play(&mut game)
}

/// Print the persisted leaderboard.
fn print_scores(saver: &SaverLeaderboard) -> u8 {
    match saver.load() {
        Ok(Some(board)) if !board.is_empty() => {
            print!("{}", draw::leaderboard(&board));
            0
        }
        Ok(_) => {
            println!("No completed game yet.");
            0
        }
        Err(e) => {
            eprintln!("Cannot read the leaderboard: {e}");
            1
        }
    }
}

/// Interactive game loop.
fn play(game: &mut Game) -> u8 {
    let stdin: io::Stdin = io::stdin();
    let start: Instant = Instant::now();
    let mut ticked: u64 = 0;

    println!("Find the hidden words. Pick cells with \"row column\" (for");
    println!("example \"3 7\"), pick a selected cell again to deselect it,");
    println!("and enter \"q\" to give up.");

    loop {
        println!();
        print!("{}", draw::grid(game));
        print!("{}", draw::word_list(game));
        println!("{}", draw::timer(game.remaining()));
        print!("> ");
        let _ = io::stdout().flush();

        let mut line: String = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => (),
            Err(e) => {
                eprintln!("Cannot read the input: {e}");
                return 1;
            }
        }

        // Catch the countdown up with the time spent waiting for input.
        let due: u64 = start.elapsed().as_secs();
        while ticked < due && game.tick() != TickOutcome::Over {
            ticked += 1;
        }
        if game.is_over() {
            println!("Time is up!");
            break;
        }

        let line: &str = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "q" {
            break;
        }

        let index: usize = match parse_pick(line, game.size()) {
            Some(index) => index,
            None => {
                println!("Enter a row and a column between 1 and {}.", game.size());
                continue;
            }
        };

        match game.click_cell(index) {
            ClickOutcome::Selected | ClickOutcome::Deselected => (),
            ClickOutcome::Rejected => {
                println!("The selected cells must stay on one straight line.");
            }
            ClickOutcome::WordFound(word) => println!("You found {word}!"),
            ClickOutcome::Completed { elapsed, position } => {
                println!(
                    "All words found in {} (#{position} on the leaderboard).",
                    draw::format_time(elapsed)
                );
                break;
            }
            ClickOutcome::Ignored => break,
        }
    }

    if game.is_solved() {
        print!("{}", draw::leaderboard(game.leaderboard()));
    }
    0
}

/// Parse a 1-based "row column" pick into a linear cell index.
fn parse_pick(line: &str, size: usize) -> Option<usize> {
    let mut parts = line.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;

    if parts.next().is_some() || row == 0 || col == 0 || row > size || col > size {
        return None;
    }
    Some((row - 1) * size + (col - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pick_is_one_based() {
        assert_eq!(parse_pick("1 1", 10), Some(0));
        assert_eq!(parse_pick("3 7", 10), Some(26));
        assert_eq!(parse_pick("10 10", 10), Some(99));
    }

    #[test]
    fn test_parse_pick_rejects_bad_input() {
        assert_eq!(parse_pick("0 5", 10), None);
        assert_eq!(parse_pick("11 5", 10), None);
        assert_eq!(parse_pick("3", 10), None);
        assert_eq!(parse_pick("3 7 9", 10), None);
        assert_eq!(parse_pick("a b", 10), None);
    }
}
