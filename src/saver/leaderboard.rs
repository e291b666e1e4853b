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

//! Save and restore the leaderboard file.
//!
//! The saved object is a serialization of the [`Leaderboard`] object in JSON
//! format by using [`serde`]: a bare array of completion times in seconds.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::leaderboard::Leaderboard;
use crate::saver::LeaderboardStore;

/// Object to save and restore the leaderboard.
pub struct SaverLeaderboard {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverLeaderboard {
    /// Create a [`SaverLeaderboard`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the
    /// leaderboard must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("leaderboard.json");
        debug!("Leaderboard file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`Leaderboard`] object from the save file.
    ///
    /// Return the [`Leaderboard`] object or None if the save file does not
    /// exist.
    pub fn get_leaderboard(&self) -> Result<Option<Leaderboard>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let leaderboard: Leaderboard = serde_json::from_reader(reader)?;
        Ok(Some(leaderboard))
    }

    /// Save the provided [`Leaderboard`] object.
    pub fn save_leaderboard(&self, leaderboard: &Leaderboard) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, leaderboard)?;
        writer.flush()?;
        Ok(())
    }
}

impl LeaderboardStore for SaverLeaderboard {
    fn load(&self) -> Result<Option<Leaderboard>, Box<dyn Error>> {
        self.get_leaderboard()
    }

    fn save(&self, leaderboard: &Leaderboard) -> Result<(), Box<dyn Error>> {
        self.save_leaderboard(leaderboard)
    }
}
