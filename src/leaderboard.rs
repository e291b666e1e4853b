/*
leaderboard.rs

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

//! Manage the best completion times.
//!
//! The main object, [`Leaderboard`], keeps every completion time, fastest
//! first, with no cap on the number of entries.
//! This object is saved when the player completes a game and is restored when
//! Wordseek starts.
//! See the [`crate::saver::leaderboard`] module that saves and restores the
//! [`Leaderboard`] object.

use serde::{Deserialize, Serialize};

/// Sorted list of completion times.
///
/// The object serializes as a bare JSON array of seconds, which is the
/// format of the save file.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct Leaderboard {
    /// Completion times in seconds, fastest first.
    times: Vec<u64>,
}

impl Leaderboard {
    /// Create an empty [`Leaderboard`] object.
    pub fn new() -> Self {
        Self { times: Vec::new() }
    }

    /// Add a completion time, keeping the list sorted, and return the
    /// position in the leaderboard.
    ///
    /// The returned position starts at 1 (best time). A time that equals
    /// existing entries is ranked after them.
    pub fn add_time(&mut self, secs: u64) -> usize {
        let position: usize = self.times.partition_point(|&t| t <= secs);
        self.times.insert(position, secs);
        position + 1
    }

    /// Return the completion times, fastest first.
    pub fn times(&self) -> &[u64] {
        &self.times
    }

    /// Whether the leaderboard has no entry.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_time_keeps_ascending_order() {
        let mut board: Leaderboard = Leaderboard::new();
        board.add_time(45);
        board.add_time(120);

        let position: usize = board.add_time(30);
        assert_eq!(position, 1);
        assert_eq!(board.times(), &[30, 45, 120]);
    }

    #[test]
    fn test_equal_times_rank_after_existing_entries() {
        let mut board: Leaderboard = Leaderboard::new();
        board.add_time(45);

        assert_eq!(board.add_time(45), 2);
        assert_eq!(board.times(), &[45, 45]);
    }

    #[test]
    fn test_no_entry_is_ever_dropped() {
        let mut board: Leaderboard = Leaderboard::new();
        for secs in 0..50 {
            board.add_time(secs);
        }
        assert_eq!(board.times().len(), 50);
    }

    #[test]
    fn test_serializes_as_a_bare_array() {
        let mut board: Leaderboard = Leaderboard::new();
        board.add_time(45);
        board.add_time(30);

        let json: String = serde_json::to_string(&board).expect("serialization");
        assert_eq!(json, "[30,45]");
    }
}
