/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object owns the grid, the cell selection, the countdown
//! clock, and the leaderboard. The presentation layer feeds it cell picks
//! through [`Game::click_cell`] and clock ticks through [`Game::tick`], and
//! reads the grid, word, and time status back for rendering.

use log::{debug, warn};
use rand::Rng;
use std::collections::HashSet;

use crate::clock::GameClock;
use crate::generator::grid::Grid;
use crate::generator::placement::{self, PlacementError};
use crate::leaderboard::Leaderboard;
use crate::saver::LeaderboardStore;
use crate::selection::Selection;

/// Result of one cell pick.
#[derive(Debug, PartialEq)]
pub enum ClickOutcome {
    /// The cell was added to the selection.
    Selected,

    /// The cell was already selected and has been removed.
    Deselected,

    /// The cell breaks the straight-line invariant; nothing changed.
    Rejected,

    /// The selection spelled this word; the selection is now empty.
    WordFound(String),

    /// The last word was found. The completion time was added to the
    /// leaderboard at the given position (starting at 1).
    Completed { elapsed: u64, position: usize },

    /// The game is already over; picks are ignored.
    Ignored,
}

/// Result of one clock tick.
#[derive(Debug, PartialEq)]
pub enum TickOutcome {
    /// The game goes on; the remaining time is attached.
    Running(u64),

    /// The countdown just reached zero; the game is over and no leaderboard
    /// entry is recorded.
    Expired,

    /// The game was already over; ticks are ignored.
    Over,
}

/// Status of one cell, for rendering.
pub struct CellStatus {
    /// Letter displayed in the cell.
    pub letter: char,

    /// Whether the cell belongs to a placed word. The presentation layer
    /// must not reveal this flag before the word is found.
    pub occupied: bool,

    /// Whether the cell is part of the current selection.
    pub selected: bool,

    /// Whether the cell is part of a found word.
    pub found: bool,
}

/// Manage the status of the game in progress.
pub struct Game {
    /// The letter grid with the placed words.
    grid: Grid,

    /// Words to find, in display order.
    words: Vec<String>,

    /// Current cell selection.
    selection: Selection,

    /// Words that the player found.
    found_words: HashSet<String>,

    /// Cells of the found words. Those cells stay highlighted and remain
    /// selectable, since placed words may sit next to each other.
    found_cells: HashSet<usize>,

    /// Countdown clock.
    clock: GameClock,

    /// Whether a terminal transition fired (all words found, or timeout).
    /// The transition is one-way: picks and ticks are ignored afterwards.
    over: bool,

    /// Whether the player found all the words before the timeout.
    solved: bool,

    /// Leaderboard, loaded from the store when the game is created.
    leaderboard: Leaderboard,

    /// Store that persists the leaderboard on completion.
    store: Box<dyn LeaderboardStore>,
}

impl Game {
    /// Create a [`Game`] object with a freshly generated grid.
    ///
    /// The leaderboard is loaded from the store once. A corrupt save file is
    /// not fatal: the game starts with an empty leaderboard.
    ///
    /// # Errors
    ///
    /// The method returns an error when the word list cannot be placed in a
    /// grid of the given size.
    pub fn new(
        words: &[&str],
        size: usize,
        budget: u64,
        store: Box<dyn LeaderboardStore>,
        rng: &mut impl Rng,
    ) -> Result<Self, PlacementError> {
        let grid: Grid = placement::generate(words, size, rng)?;
        let leaderboard: Leaderboard = match store.load() {
            Ok(Some(board)) => board,
            Ok(None) => Leaderboard::new(),
            Err(e) => {
                warn!("Cannot read the saved leaderboard, starting empty: {e}");
                Leaderboard::new()
            }
        };

        Ok(Self {
            grid,
            words: words.iter().map(|w| w.to_string()).collect(),
            selection: Selection::new(),
            found_words: HashSet::new(),
            found_cells: HashSet::new(),
            clock: GameClock::new(budget),
            over: false,
            solved: false,
            leaderboard,
            store,
        })
    }

    /// Process one cell pick.
    ///
    /// Picking a selected cell deselects it. Picking a new cell adds it to
    /// the selection when the straight-line invariant holds. Either way the
    /// selection is then checked against the unfound words: the letters must
    /// spell a word in click order (selecting a word backwards does not
    /// match).
    pub fn click_cell(&mut self, index: usize) -> ClickOutcome {
        if self.over {
            return ClickOutcome::Ignored;
        }
        if index >= self.grid.len() {
            return ClickOutcome::Rejected;
        }

        if self.selection.contains(index) {
            self.selection.remove(index);
            match self.check_word() {
                Some(outcome) => outcome,
                None => ClickOutcome::Deselected,
            }
        } else if self.selection.try_add(index, self.grid.size()) {
            match self.check_word() {
                Some(outcome) => outcome,
                None => ClickOutcome::Selected,
            }
        } else {
            ClickOutcome::Rejected
        }
    }

    /// Advance the countdown by one second.
    ///
    /// When the countdown reaches zero, the game ends without a leaderboard
    /// entry.
    pub fn tick(&mut self) -> TickOutcome {
        if self.over {
            return TickOutcome::Over;
        }
        match self.clock.tick() {
            0 => {
                debug!("Time is up, {}/{} words found", self.found_words.len(), self.words.len());
                self.over = true;
                TickOutcome::Expired
            }
            remaining => TickOutcome::Running(remaining),
        }
    }

    /// Verify whether the selected cells spell one of the unfound words.
    fn check_word(&mut self) -> Option<ClickOutcome> {
        let candidate: String = self
            .selection
            .get()
            .iter()
            .map(|&index| self.grid.letter(index))
            .collect();

        if !self.words.contains(&candidate) || self.found_words.contains(&candidate) {
            return None;
        }

        debug!("Found the word {candidate}");
        for &index in self.selection.get() {
            self.found_cells.insert(index);
        }
        self.selection.clear();
        self.found_words.insert(candidate.clone());

        if self.found_words.len() == self.words.len() {
            Some(self.complete())
        } else {
            Some(ClickOutcome::WordFound(candidate))
        }
    }

    /// End the game after the last word: stop the clock and record the
    /// completion time.
    fn complete(&mut self) -> ClickOutcome {
        self.clock.stop();
        self.over = true;
        self.solved = true;

        let elapsed: u64 = self.clock.elapsed();
        let position: usize = self.leaderboard.add_time(elapsed);
        debug!("All words found in {elapsed}s, leaderboard position {position}");
        if let Err(e) = self.store.save(&self.leaderboard) {
            warn!("Cannot save the leaderboard: {e}");
        }
        ClickOutcome::Completed { elapsed, position }
    }

    /// Return the number of rows (and columns) of the grid.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Return the status of the cell at the given linear index.
    pub fn cell(&self, index: usize) -> CellStatus {
        CellStatus {
            letter: self.grid.letter(index),
            occupied: self.grid.is_occupied(index),
            selected: self.selection.contains(index),
            found: self.found_cells.contains(&index),
        }
    }

    /// Return the words to find and whether each one was found, in display
    /// order.
    pub fn word_status(&self) -> Vec<(&str, bool)> {
        self.words
            .iter()
            .map(|w| (w.as_str(), self.found_words.contains(w)))
            .collect()
    }

    /// Return the remaining time, in seconds.
    pub fn remaining(&self) -> u64 {
        self.clock.remaining()
    }

    /// Whether a terminal transition fired.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Whether the player found all the words before the timeout.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Return the leaderboard.
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }
}
