/*
grid.rs

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

//! The square letter grid.

use rand::Rng;

/// One cell of the letter grid.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    /// Uppercase letter displayed in the cell.
    pub letter: char,

    /// Whether the cell belongs to a placed target word.
    /// Once set, the letter is fixed and no other word may claim the cell.
    pub occupied: bool,
}

/// Square letter grid, addressed by the linear index `row * size + column`.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with an independent random uppercase letter in every
    /// cell and no cell occupied.
    pub fn random(size: usize, rng: &mut impl Rng) -> Self {
        let cells: Vec<Cell> = (0..size * size)
            .map(|_| Cell {
                letter: random_letter(rng),
                occupied: false,
            })
            .collect();
        Self { size, cells }
    }

    /// Return the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Return the letter at the given linear index.
    pub fn letter(&self, index: usize) -> char {
        self.cells[index].letter
    }

    /// Whether the cell at the given linear index belongs to a placed word.
    pub fn is_occupied(&self, index: usize) -> bool {
        self.cells[index].occupied
    }

    /// Write one letter of a placed word and mark the cell as occupied.
    pub(super) fn set_word_cell(&mut self, index: usize, letter: char) {
        self.cells[index] = Cell {
            letter,
            occupied: true,
        };
    }
}

/// Return a random uppercase letter.
fn random_letter(rng: &mut impl Rng) -> char {
    (b'A' + rng.random_range(0..26)) as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_grid_dimensions() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let grid: Grid = Grid::random(10, &mut rng);

        assert_eq!(grid.size(), 10);
        assert_eq!(grid.len(), 100);
    }

    #[test]
    fn test_random_grid_letters_are_uppercase() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let grid: Grid = Grid::random(10, &mut rng);

        for index in 0..grid.len() {
            assert!(grid.letter(index).is_ascii_uppercase());
            assert!(!grid.is_occupied(index));
        }
    }

    #[test]
    fn test_set_word_cell_marks_occupied() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let mut grid: Grid = Grid::random(10, &mut rng);

        grid.set_word_cell(42, 'Z');
        assert_eq!(grid.letter(42), 'Z');
        assert!(grid.is_occupied(42));
    }
}
