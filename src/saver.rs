/*
saver.rs

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

//! Save and restore the leaderboard.

pub mod leaderboard;

use std::error::Error;

use crate::leaderboard::Leaderboard;

/// Load and store the leaderboard.
///
/// The game session receives this capability when it is created, so that
/// tests can substitute an in-memory store for the save file.
pub trait LeaderboardStore {
    /// Retrieve the persisted leaderboard, or None when nothing was saved
    /// yet.
    fn load(&self) -> Result<Option<Leaderboard>, Box<dyn Error>>;

    /// Persist the leaderboard.
    fn save(&self, leaderboard: &Leaderboard) -> Result<(), Box<dyn Error>>;
}
