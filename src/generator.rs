/*
generator.rs

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

//! Generate letter grids with the target words hidden in them.
//!
//! A [`grid::Grid`] object is a square matrix of uppercase letters, addressed
//! by the linear index `row * size + column`.
//!
//! The [`placement::generate`] function builds a grid filled with random
//! letters and embeds each target word along one of four directions: left to
//! right, top to bottom, or down either diagonal.
//! Placement is randomized and retried on conflicts.
//! When a word cannot be placed after a bounded number of attempts, the whole
//! grid is discarded and generation starts over.
//! The number of whole-grid rounds is bounded as well, and the function
//! returns a [`placement::PlacementError`] when the bound is reached.

pub mod grid;
pub mod placement;
