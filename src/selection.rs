/*
selection.rs

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

//! Manage the player's cell selection.
//!
//! The module keeps the cells that the player selected, in click order, and
//! maintains the invariant that all of them lie on one straight line: the
//! four word directions are rows, columns, and the two diagonals through the
//! first selected cell.

use log::debug;

/// Ordered list of selected cells.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Linear indexes of the selected cells, in click order.
    indexes: Vec<usize>,
}

impl Selection {
    /// Create an empty [`Selection`] object.
    pub fn new() -> Self {
        Self {
            indexes: Vec::new(),
        }
    }

    /// Reset the object.
    pub fn clear(&mut self) {
        self.indexes.clear();
    }

    /// Whether the given cell is selected.
    pub fn contains(&self, index: usize) -> bool {
        self.indexes.contains(&index)
    }

    /// Return the selected cells in click order.
    pub fn get(&self) -> &[usize] {
        &self.indexes
    }

    /// Remove the given cell from the selection.
    ///
    /// Removal is by identity: deselecting a middle cell leaves the rest of
    /// the sequence intact.
    pub fn remove(&mut self, index: usize) {
        self.indexes.retain(|&i| i != index);
        debug!("Deselected cell {index}");
    }

    /// Add a cell to the selection if the result stays on one straight line.
    ///
    /// Return `false`, leaving the selection untouched, when the candidate
    /// cell breaks the line.
    pub fn try_add(&mut self, index: usize, size: usize) -> bool {
        if !self.is_straight_line(index, size) {
            debug!("Cell {index} breaks the selected line, ignoring it");
            return false;
        }
        self.indexes.push(index);
        debug!("Selected cell {index}");
        true
    }

    /// Whether the candidate cell keeps the selection on one straight line.
    ///
    /// The slope is taken between the candidate and the first selected cell,
    /// and every selected cell's offset from the last selected cell must be
    /// proportional to it. The cross-multiplied form `row * col_diff ==
    /// col * row_diff` avoids dividing by a zero row or column difference.
    fn is_straight_line(&self, index: usize, size: usize) -> bool {
        let (first, last) = match (self.indexes.first(), self.indexes.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return true,
        };

        let row_diff: i64 = (index / size) as i64 - (first / size) as i64;
        let col_diff: i64 = (index % size) as i64 - (first % size) as i64;
        let row_last: i64 = (last / size) as i64;
        let col_last: i64 = (last % size) as i64;

        self.indexes.iter().all(|&i| {
            let row: i64 = (i / size) as i64 - row_last;
            let col: i64 = (i % size) as i64 - col_last;
            row * col_diff == col * row_diff
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: usize = 10;

    #[test]
    fn test_first_and_second_cells_are_always_accepted() {
        let mut selection: Selection = Selection::new();

        assert!(selection.try_add(55, SIZE));
        // Any second cell defines a line with the first one.
        assert!(selection.try_add(12, SIZE));
        assert_eq!(selection.get(), &[55, 12]);
    }

    #[test]
    fn test_cell_off_the_line_is_rejected() {
        let mut selection: Selection = Selection::new();

        // Cells 0 and 1 are on the first row; cell 21 is not.
        assert!(selection.try_add(0, SIZE));
        assert!(selection.try_add(1, SIZE));
        assert!(!selection.try_add(21, SIZE));
        assert_eq!(selection.get(), &[0, 1]);
    }

    #[test]
    fn test_row_column_and_diagonal_lines_are_accepted() {
        // One case per word direction, plus the continuation cell.
        let lines: [[usize; 3]; 4] = [
            [33, 34, 35], // row
            [33, 43, 53], // column
            [33, 44, 55], // diagonal down right
            [33, 42, 51], // diagonal down left
        ];

        for line in lines {
            let mut selection: Selection = Selection::new();
            for index in line {
                assert!(selection.try_add(index, SIZE), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_remove_only_affects_the_given_cell() {
        let mut selection: Selection = Selection::new();
        selection.try_add(10, SIZE);
        selection.try_add(11, SIZE);
        selection.try_add(12, SIZE);

        selection.remove(11);
        assert_eq!(selection.get(), &[10, 12]);

        // Removing an unselected cell is a no-op.
        selection.remove(99);
        assert_eq!(selection.get(), &[10, 12]);
    }

    #[test]
    fn test_clear_empties_the_selection() {
        let mut selection: Selection = Selection::new();
        selection.try_add(10, SIZE);
        selection.try_add(11, SIZE);

        selection.clear();
        assert!(selection.get().is_empty());
    }
}
