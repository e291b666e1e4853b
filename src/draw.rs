/*
draw.rs

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

//! Render the game in the terminal.
//!
//! The functions return strings instead of printing, so that the rendering
//! can be verified in tests. Selected cells are shown in brackets and cells
//! of found words in parentheses.

use std::fmt::Write;

use crate::game::{CellStatus, Game};
use crate::leaderboard::Leaderboard;

/// Format a number of seconds as `M:SS`.
pub fn format_time(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Render the grid with 1-based row and column guides.
pub fn grid(game: &Game) -> String {
    let size: usize = game.size();
    let mut out: String = String::new();

    out.push_str("    ");
    for col in 1..=size {
        let _ = write!(out, "{col:2} ");
    }
    out.push('\n');

    for row in 0..size {
        let _ = write!(out, "{:2}  ", row + 1);
        for col in 0..size {
            let cell: CellStatus = game.cell(row * size + col);
            if cell.selected {
                let _ = write!(out, "[{}]", cell.letter);
            } else if cell.found {
                let _ = write!(out, "({})", cell.letter);
            } else {
                let _ = write!(out, " {} ", cell.letter);
            }
        }
        out.push('\n');
    }
    out
}

/// Render the list of the words to find, marking the found ones.
pub fn word_list(game: &Game) -> String {
    let mut out: String = String::new();

    out.push_str("Words: ");
    for (i, (word, found)) in game.word_status().iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        if *found {
            let _ = write!(out, "({word})");
        } else {
            out.push_str(word);
        }
    }
    out.push('\n');
    out
}

/// Render the remaining time.
pub fn timer(remaining: u64) -> String {
    format!("Time left: {}", format_time(remaining))
}

/// Render the leaderboard as a ranked list, best time first.
pub fn leaderboard(board: &Leaderboard) -> String {
    let mut out: String = String::new();

    for (i, &secs) in board.times().iter().enumerate() {
        let _ = writeln!(out, "#{}: {}", i + 1, format_time(secs));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_zero_pads_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(300), "5:00");
    }

    #[test]
    fn test_timer_line() {
        assert_eq!(timer(299), "Time left: 4:59");
    }

    #[test]
    fn test_leaderboard_is_ranked_from_one() {
        let mut board: Leaderboard = Leaderboard::new();
        board.add_time(120);
        board.add_time(45);

        assert_eq!(leaderboard(&board), "#1: 0:45\n#2: 2:00\n");
    }

    #[test]
    fn test_empty_leaderboard_renders_nothing() {
        assert_eq!(leaderboard(&Leaderboard::new()), "");
    }
}
