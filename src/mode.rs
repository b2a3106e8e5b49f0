// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/mode.rs - Row mode directives for pin datasheets.
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
 * # `mode` Module
 *
 * Decides whether a record is a directive (`Left`, `Right`, `Top`, `Text`,
 * `Extras`, or `EOF`) or a row of data.
 *
 * A record is a directive when its first field is one of the keywords and all
 * of its other fields are empty. One trailing artifact, `1` by default, is
 * tolerated both on the first field and on the whole row, so `Left,,,1` and
 * `Left1` are both read as `Left`.
 *
 * ## Usage Example
 *
 * ```
 * use pinsheet::mode::{Directive, Mode, classify};
 * use pinsheet::record::Record;
 *
 * let directive = classify(&Record::new(["Left", "", "", "1"]), Some("1"));
 * assert_eq!(directive, Some(Directive::Switch(Mode::Left)));
 *
 * assert_eq!(classify(&Record::new(["Left", "VCC"]), Some("1")), None);
 * ```
 */

use std::fmt;

use crate::record::Record;

/// How data rows are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Tags flow left to right from the left edge.
    #[default]
    Right,
    /// Tags flow right to left from the right edge of the ribbon.
    Left,
    /// Tags flow left to right, like [Mode::Right].
    Top,
    /// Every field is a line of free text.
    Text,
    /// Every field names an image.
    Extras,
}

impl Mode {
    /// True for the modes that draw tags.
    pub fn places_tags(self) -> bool {
        matches!(self, Mode::Right | Mode::Left | Mode::Top)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Right => "Right",
            Mode::Left => "Left",
            Mode::Top => "Top",
            Mode::Text => "Text",
            Mode::Extras => "Extras",
        };
        f.write_str(name)
    }
}

/// What a directive record asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Lay out the following records under a new mode.
    Switch(Mode),
    /// Stop reading. Nothing after this record is drawn.
    Eof,
}

fn keyword(word: &str) -> Option<Directive> {
    match word {
        "Left" => Some(Directive::Switch(Mode::Left)),
        "Right" => Some(Directive::Switch(Mode::Right)),
        "Top" => Some(Directive::Switch(Mode::Top)),
        "Text" => Some(Directive::Switch(Mode::Text)),
        "Extras" => Some(Directive::Switch(Mode::Extras)),
        "EOF" => Some(Directive::Eof),
        _ => None,
    }
}

fn strip_artifact<'a>(s: &'a str, artifact: Option<&str>) -> &'a str {
    match artifact {
        Some(suffix) if !suffix.is_empty() => s.strip_suffix(suffix).unwrap_or(s),
        _ => s,
    }
}

/// Classifies a record.
///
/// # Arguments
///
/// * `record` - The record to inspect.
/// * `artifact` - Trailing text to ignore, or `None` to require an exact
///   match.
///
/// # Returns
///
/// The directive carried by the record, or `None` for a data row.
pub fn classify(record: &Record, artifact: Option<&str>) -> Option<Directive> {
    let first = strip_artifact(record.first(), artifact);
    let whole = record.concat();
    if first != strip_artifact(&whole, artifact) {
        return None;
    }
    keyword(first)
}
