/*
clock.rs

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

//! Countdown clock that bounds one game.

/// Countdown from a fixed budget of seconds to zero.
#[derive(Debug, Clone)]
pub struct GameClock {
    /// Time budget for one game, in seconds.
    budget: u64,

    /// Remaining time, in seconds.
    remaining: u64,

    /// Whether the clock still counts down. The clock stops when the budget
    /// is spent or when the game ends, and never restarts.
    running: bool,
}

impl GameClock {
    /// Create a running [`GameClock`] object with the given budget.
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            remaining: budget,
            running: budget > 0,
        }
    }

    /// Advance the clock by one second and return the remaining time.
    ///
    /// The clock stops by itself when it reaches zero. Ticks on a stopped
    /// clock are ignored.
    pub fn tick(&mut self) -> u64 {
        if self.running {
            self.remaining -= 1;
            if self.remaining == 0 {
                self.running = false;
            }
        }
        self.remaining
    }

    /// Stop the clock.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Return the remaining time, in seconds.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Return the time spent since the start of the game, in seconds.
    pub fn elapsed(&self) -> u64 {
        self.budget - self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_counts_down() {
        let mut clock: GameClock = GameClock::new(300);

        assert_eq!(clock.tick(), 299);
        assert_eq!(clock.tick(), 298);
        assert_eq!(clock.elapsed(), 2);
    }

    #[test]
    fn test_clock_stops_at_zero() {
        let mut clock: GameClock = GameClock::new(2);

        assert_eq!(clock.tick(), 1);
        assert_eq!(clock.tick(), 0);

        // Further ticks are ignored.
        assert_eq!(clock.tick(), 0);
    }

    #[test]
    fn test_stopped_clock_keeps_its_remaining_time() {
        let mut clock: GameClock = GameClock::new(300);
        clock.tick();
        clock.stop();

        assert_eq!(clock.tick(), 299);
        assert_eq!(clock.elapsed(), 1);
    }
}
