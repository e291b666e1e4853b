/*
placement.rs

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

//! Place the target words in the grid.

use log::debug;
use rand::Rng;
use strum_macros::FromRepr;

use super::grid::Grid;

/// Number of placement attempts for a single word before the whole grid is
/// discarded.
const WORD_ATTEMPTS: usize = 100;

/// Number of whole-grid rounds before generation gives up.
const GRID_ATTEMPTS: usize = 100;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum PlacementError {
    /// A word is longer than the grid size.
    WordTooLong,

    /// No conflict-free layout was found within the retry bounds.
    Exhausted,
}

/// Directions along which a word can be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(usize)]
pub enum Direction {
    /// Left to right.
    Horizontal,

    /// Top to bottom.
    Vertical,

    /// Down and to the right.
    DiagonalRight,

    /// Down and to the left.
    DiagonalLeft,
}

impl Direction {
    /// Row and column steps between two consecutive letters.
    pub fn steps(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalRight => (1, 1),
            Direction::DiagonalLeft => (1, -1),
        }
    }

    /// Pick a direction at random.
    fn random(rng: &mut impl Rng) -> Self {
        Self::from_repr(rng.random_range(0..4)).unwrap_or(Direction::Horizontal)
    }
}

/// Anchor position and direction of one placed word.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    /// Row of the first letter.
    pub row: usize,

    /// Column of the first letter.
    pub col: usize,

    /// Direction of the word from its first letter.
    pub direction: Direction,
}

impl Placement {
    /// Return the linear indexes of the cells that a word of the given length
    /// occupies, or None when the run leaves the grid.
    pub fn indexes(&self, word_len: usize, size: usize) -> Option<Vec<usize>> {
        let (row_step, col_step) = self.direction.steps();
        let mut run: Vec<usize> = Vec::with_capacity(word_len);

        for i in 0..word_len {
            let r: isize = self.row as isize + row_step * i as isize;
            let c: isize = self.col as isize + col_step * i as isize;
            if r < 0 || r >= size as isize || c < 0 || c >= size as isize {
                return None;
            }
            run.push((r * size as isize + c) as usize);
        }
        Some(run)
    }

    /// Pick a random anchor and direction for a word of the given length.
    ///
    /// The column range is constrained by the word length, except for
    /// vertical placements where the run extends along rows only. The
    /// extent check in [`Placement::indexes`] rejects the runs that still
    /// leave the grid.
    fn random(word_len: usize, size: usize, rng: &mut impl Rng) -> Self {
        let direction: Direction = Direction::random(rng);
        let row: usize = rng.random_range(0..size);
        let col: usize = match direction {
            Direction::Vertical => rng.random_range(0..size),
            _ => rng.random_range(0..(size - word_len).max(1)),
        };
        Self {
            row,
            col,
            direction,
        }
    }
}

/// Generate a grid with every target word placed.
///
/// # Errors
///
/// The function returns an error when a word does not fit in the grid, or
/// when no conflict-free layout is found within [`GRID_ATTEMPTS`] rounds.
pub fn generate(words: &[&str], size: usize, rng: &mut impl Rng) -> Result<Grid, PlacementError> {
    for word in words {
        if word.len() > size {
            debug!("The word {word} does not fit in a grid of size {size}");
            return Err(PlacementError::WordTooLong);
        }
    }

    for round in 0..GRID_ATTEMPTS {
        let mut grid: Grid = Grid::random(size, rng);
        if place_words(&mut grid, words, rng) {
            debug!("Grid generated in {} round(s)", round + 1);
            return Ok(grid);
        }
    }
    Err(PlacementError::Exhausted)
}

/// Try to place every word in the grid.
///
/// Return `false` when a word exhausts its placement attempts. In that case
/// the caller discards the whole grid, including the words already placed,
/// and starts over.
fn place_words(grid: &mut Grid, words: &[&str], rng: &mut impl Rng) -> bool {
    for word in words {
        let mut placed: bool = false;

        for _ in 0..WORD_ATTEMPTS {
            let placement: Placement = Placement::random(word.len(), grid.size(), rng);

            // A run is valid when it stays in the grid and crosses no cell
            // already claimed by another word. Random filler letters may be
            // overwritten.
            if let Some(run) = placement.indexes(word.len(), grid.size())
                && run.iter().all(|&index| !grid.is_occupied(index))
            {
                for (letter, &index) in word.chars().zip(run.iter()) {
                    grid.set_word_cell(index, letter);
                }
                debug!(
                    "Placed {word} at row {} column {} going {:?}",
                    placement.row, placement.col, placement.direction
                );
                placed = true;
                break;
            }
        }

        if !placed {
            debug!("No valid placement for {word}, discarding the grid");
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: [&str; 4] = ["CAT", "DOG", "BIRD", "FISH"];

    /// Return every (row, column, direction) where the word reads along
    /// occupied cells.
    fn find_word(grid: &Grid, word: &str) -> Vec<(usize, usize, Direction)> {
        let mut hits: Vec<(usize, usize, Direction)> = Vec::new();
        let directions: [Direction; 4] = [
            Direction::Horizontal,
            Direction::Vertical,
            Direction::DiagonalRight,
            Direction::DiagonalLeft,
        ];

        for row in 0..grid.size() {
            for col in 0..grid.size() {
                for direction in directions {
                    let placement: Placement = Placement {
                        row,
                        col,
                        direction,
                    };
                    if let Some(run) = placement.indexes(word.len(), grid.size())
                        && run.iter().all(|&i| grid.is_occupied(i))
                        && word.chars().zip(run.iter()).all(|(l, &i)| grid.letter(i) == l)
                    {
                        hits.push((row, col, direction));
                    }
                }
            }
        }
        hits
    }

    #[test]
    fn test_every_word_is_placed() {
        for seed in 0..20 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let grid: Grid = generate(&WORDS, 10, &mut rng).expect("generation must terminate");

            for word in WORDS {
                assert!(
                    !find_word(&grid, word).is_empty(),
                    "{word} not found with seed {seed}"
                );
            }
        }
    }

    #[test]
    fn test_placed_words_never_overlap() {
        // The four words claim 14 cells. Fewer occupied cells would mean
        // that two placements share a cell.
        for seed in 0..20 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let grid: Grid = generate(&WORDS, 10, &mut rng).expect("generation must terminate");

            let occupied: usize = (0..grid.len()).filter(|&i| grid.is_occupied(i)).count();
            let expected: usize = WORDS.iter().map(|w| w.len()).sum();
            assert_eq!(occupied, expected, "overlap with seed {seed}");
        }
    }

    #[test]
    fn test_generation_is_deterministic_under_a_seed() {
        let mut rng1: StdRng = StdRng::seed_from_u64(99);
        let mut rng2: StdRng = StdRng::seed_from_u64(99);
        let grid1: Grid = generate(&WORDS, 10, &mut rng1).expect("generation must terminate");
        let grid2: Grid = generate(&WORDS, 10, &mut rng2).expect("generation must terminate");

        for index in 0..grid1.len() {
            assert_eq!(grid1.letter(index), grid2.letter(index));
            assert_eq!(grid1.is_occupied(index), grid2.is_occupied(index));
        }
    }

    #[test]
    fn test_word_longer_than_grid_is_rejected() {
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        let result: Result<Grid, PlacementError> = generate(&["ELEPHANT"], 4, &mut rng);

        assert_eq!(result.unwrap_err(), PlacementError::WordTooLong);
    }

    #[test]
    fn test_impossible_layout_is_exhausted() {
        // Three words of two letters need six cells, but a 2x2 grid only
        // has four, so no layout can ever succeed.
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        let result: Result<Grid, PlacementError> = generate(&["AB", "CD", "EF"], 2, &mut rng);

        assert_eq!(result.unwrap_err(), PlacementError::Exhausted);
    }

    #[test]
    fn test_indexes_rejects_out_of_bounds_runs() {
        let placement: Placement = Placement {
            row: 8,
            col: 0,
            direction: Direction::Vertical,
        };
        assert!(placement.indexes(4, 10).is_none());

        let placement: Placement = Placement {
            row: 0,
            col: 1,
            direction: Direction::DiagonalLeft,
        };
        assert!(placement.indexes(3, 10).is_none());
    }

    #[test]
    fn test_indexes_follows_the_direction_steps() {
        let placement: Placement = Placement {
            row: 2,
            col: 3,
            direction: Direction::DiagonalRight,
        };
        assert_eq!(placement.indexes(3, 10), Some(vec![23, 34, 45]));

        let placement: Placement = Placement {
            row: 2,
            col: 3,
            direction: Direction::DiagonalLeft,
        };
        assert_eq!(placement.indexes(3, 10), Some(vec![23, 32, 41]));
    }
}
