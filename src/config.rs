/*
config.rs

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

//! Game parameters and file locations.

use std::env;
use std::path::PathBuf;

/// Width and height of the letter grid.
pub const GRID_SIZE: usize = 10;

/// Countdown budget for one game, in seconds.
pub const TIME_BUDGET_SECS: u64 = 300;

/// Words hidden in the grid.
pub const TARGET_WORDS: [&str; 4] = ["CAT", "DOG", "BIRD", "FISH"];

/// Notice that `wordseek --version` prints.
pub const COPYRIGHT_NOTICE: &str = "wordseek 0.1.0
Copyright 2026 Wordseek contributors
License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>";

/// Directory where the leaderboard is saved.
///
/// The function follows the XDG convention and falls back to the current
/// directory when the environment provides no home.
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = env::var_os("XDG_DATA_HOME") {
        let mut path: PathBuf = PathBuf::from(dir);
        path.push("wordseek");
        return path;
    }
    if let Some(home) = env::var_os("HOME") {
        let mut path: PathBuf = PathBuf::from(home);
        path.push(".local");
        path.push("share");
        path.push("wordseek");
        return path;
    }
    PathBuf::from(".")
}
