/*
main.rs

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

mod application;
mod cli_options;
mod clock;
mod config;
mod draw;
mod game;
mod generator;
mod leaderboard;
mod saver;
mod selection;

use std::process::ExitCode;

fn main() -> ExitCode {
    let args: cli_options::Args = cli_options::parse();
    ExitCode::from(application::run(&args))
}
