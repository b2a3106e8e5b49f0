// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/record.rs - CSV source reader for pin datasheets.
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

/*!
 * # `record` Module
 *
 * Reads a pin map into [Record]s, one per input line.
 *
 * The input is plain comma separated text. There is no quoting or escaping, so
 * a comma inside a label shifts every following column of that row.
 *
 * ## Usage Example
 *
 * ```no_run
 * use pinsheet::record::PinMapSource;
 *
 * fn main() -> Result<(), pinsheet::Error> {
 *     let source = PinMapSource::from_filename("ESP8266/Thing.csv")?;
 *     println!("Output root: {}", source.root.display());
 *     for record in &source.records {
 *         println!("{:?}", record.fields());
 *     }
 *     Ok(())
 * }
 * ```
 */

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::Error;

/// Extension expected on pin map files.
pub const INPUT_EXTENSION: &str = "csv";

/// The fields of one input line, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record(Vec<String>);

impl Record {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// The first field, where directives live. Empty for an empty record.
    pub fn first(&self) -> &str {
        self.0.first().map_or("", String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All fields joined without a separator.
    pub fn concat(&self) -> String {
        self.0.concat()
    }

    /// Iterates over `(column, value)` for every non-empty field.
    pub fn values(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, field)| !field.is_empty())
            .map(|(column, field)| (column, field.as_str()))
    }
}

/// Parses comma separated pin map text into records.
///
/// # Arguments
///
/// * `reader` - Source of the raw text.
///
/// # Returns
///
/// A `Result` containing one [Record] per non-blank line, or a CSV error.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<Record>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .quoting(false)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.byte_records() {
        let record = result?;
        records.push(Record::new(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).to_string()),
        ));
    }

    Ok(records)
}

/// A loaded pin map and the root name its outputs are derived from.
#[derive(Debug)]
pub struct PinMapSource {
    /// The file the records were read from.
    pub path: PathBuf,
    /// Input path with the `.csv` extension removed.
    pub root: PathBuf,
    pub records: Vec<Record>,
}

impl PinMapSource {
    /// Reads a pin map from disk.
    ///
    /// A missing or unreadable file is reported as [Error::InputNotFound].
    pub fn from_filename<P: AsRef<Path>>(filename: P) -> Result<Self, Error> {
        let filename = filename.as_ref();
        let file = File::open(filename).map_err(|_| Error::InputNotFound(filename.to_path_buf()))?;
        info!(path = %filename.display(), "file opened");

        let records = parse_records(BufReader::new(file))?;
        Ok(Self {
            path: filename.to_path_buf(),
            root: filename.with_extension(""),
            records,
        })
    }

    /// Asks for a filename root on `output`, reads the answer from `input`,
    /// and loads `<root>.csv`.
    pub fn from_prompt<R: BufRead, W: Write>(input: R, output: W) -> Result<Self, Error> {
        let root = prompt_for_root(input, output)?;
        let mut filename = root.into_os_string();
        filename.push(".");
        filename.push(INPUT_EXTENSION);
        Self::from_filename(PathBuf::from(filename))
    }

    /// Same as [PinMapSource::from_prompt] on the terminal.
    pub fn from_stdin() -> Result<Self, Error> {
        Self::from_prompt(io::stdin().lock(), io::stdout().lock())
    }
}

fn prompt_for_root<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<PathBuf, Error> {
    writeln!(output, "Make sure the pin map is in the current folder or give a path to it.")?;
    write!(output, "Enter file name without the .csv extension (eg. ESP8266/Thing): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PathBuf::from(line.trim_end_matches(['\r', '\n'])))
}

/// Returns true if `path` ends in `.extension`, ignoring case.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
}
