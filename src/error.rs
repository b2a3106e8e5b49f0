// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/error.rs - Error type for the pinsheet library.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use std::path::PathBuf;

/// Everything that can go wrong between reading a pin map and saving its
/// datasheet.
///
/// [Error::InputNotFound], [Error::EmptyInput], [Error::Config] and the I/O
/// variants are fatal to a run. Missing images and failed font fetches are
/// logged by their callers and never surface past the glue code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input file {} not found, there should be a comma delimited csv file with the pin data in it", .0.display())]
    InputNotFound(PathBuf),

    #[error("input file {} contains no records", .0.display())]
    EmptyInput(PathBuf),

    #[error("csv decoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse failed: {0}")]
    Config(#[from] serde_json::Error),

    #[error("web font fetch failed: {0}")]
    FontFetch(#[from] reqwest::Error),
}
