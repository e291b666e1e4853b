/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Print the leaderboard without starting a game:
//!
//! ```text
//! $ wordseek --scores
//! #1: 0:45
//! #2: 2:00
//! ```
//!
//! Play with a reproducible grid layout:
//!
//! ```text
//! $ wordseek --seed 42
//! ```

use clap::Parser;
use std::env;
use std::path::PathBuf;

use crate::config::COPYRIGHT_NOTICE;

/// Find the hidden words in the grid before the clock runs out.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
pub struct Args {
    /// Print the leaderboard and exit
    #[arg(short, long, default_value_t = false)]
    pub scores: bool,

    /// Seed for the grid layout (random when not provided)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory where the leaderboard is saved
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

/// Parse the command-line options and initialize logging.
pub fn parse() -> Args {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    args
}
