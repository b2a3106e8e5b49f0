// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/palette.rs - Per-column tag colors for pin datasheets.
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
 * # `palette` Module
 *
 * Maps the column index of a tag to the colors it is drawn with.
 *
 * The default theme follows the usual pin map column order:
 *
 * | Column | Meaning  | Fill   |
 * |--------|----------|--------|
 * | 0      | Name     | white  |
 * | 1      | Power    | red    |
 * | 2      | GND      | black  |
 * | 3      | Control  | yellow |
 * | 4      | Arduino  | green  |
 * | 5      | Port     | blue   |
 * | 6      | Analog   | purple |
 * | 7      | PWM      | yellow |
 * | 8      | Serial   | grey   |
 * | 9      | ExtInt   | purple |
 * | 10     | PCInt    | orange |
 * | 11     | Misc     | blue   |
 *
 * ## Usage Example
 *
 * ```
 * use pinsheet::palette::{ColorOverride, Palette};
 *
 * let palette = Palette::with_overrides(
 *     &[None, Some(ColorOverride::Single("crimson".into()))],
 *     "black",
 * );
 *
 * assert_eq!(palette.resolve(1).background, "crimson");
 * // Columns past the end of the table reuse the last entry.
 * assert_eq!(palette.resolve(40), palette.resolve(palette.len() - 1));
 * ```
 */

use serde::Deserialize;

/// Colors used to draw a single tag.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    /// Fill color of the tag rectangle.
    pub background: String,
    /// Stroke color of the tag rectangle.
    pub outline: String,
    /// Color of the tag label.
    pub text: String,
    /// Opacity of the tag rectangle, from 0.0 to 1.0.
    pub opacity: f32,
}

impl ColorEntry {
    pub fn new(background: &str, outline: &str, text: &str, opacity: f32) -> Self {
        Self {
            background: background.to_string(),
            outline: outline.to_string(),
            text: text.to_string(),
            opacity,
        }
    }

    /// Builds a theme entry from a single fill color.
    ///
    /// White tags get a black outline so they stay visible, and black tags get
    /// white text so the label stays readable.
    fn themed(color: &str, opacity: f32) -> Self {
        let outline = if color == "white" { "black" } else { color };
        let text = if color == "black" { "white" } else { "black" };
        Self::new(color, outline, text, opacity)
    }
}

/// A user supplied replacement for one entry of the default theme.
///
/// In JSON this is either a bare color string, a two element array
/// (background, outline), or a three element array (background, outline,
/// text).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorOverride {
    Single(String),
    Pair(String, String),
    Triple(String, String, String),
}

const DEFAULT_THEME: [(&str, f32); 12] = [
    ("white", 0.3),
    ("red", 0.8),
    ("black", 0.9),
    ("yellow", 0.7),
    ("green", 0.3),
    ("blue", 0.4),
    ("purple", 0.4),
    ("yellow", 0.3),
    ("grey", 0.3),
    ("purple", 0.2),
    ("orange", 0.5),
    ("blue", 0.1),
];

/// The column color table.
///
/// The table is never empty. Lookups past its end resolve to the last entry,
/// which is the same as lazily extending the table by repeating that entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<ColorEntry>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entries: DEFAULT_THEME
                .iter()
                .map(|&(color, opacity)| ColorEntry::themed(color, opacity))
                .collect(),
        }
    }
}

impl Palette {
    /// Creates the default palette with user overrides applied.
    ///
    /// # Arguments
    ///
    /// * `overrides` - One optional override per column. `None` keeps the
    ///   default entry for that column.
    /// * `default_text` - Label color used by overrides that don't name one.
    pub fn with_overrides(overrides: &[Option<ColorOverride>], default_text: &str) -> Self {
        let mut palette = Self::default();
        palette.extend_to(overrides.len());

        for (entry, slot) in palette.entries.iter_mut().zip(overrides) {
            let Some(color) = slot else {
                continue;
            };
            let (background, outline, text) = match color {
                ColorOverride::Single(c) => (c.as_str(), c.as_str(), default_text),
                ColorOverride::Pair(bg, ol) => (bg.as_str(), ol.as_str(), default_text),
                ColorOverride::Triple(bg, ol, tx) => (bg.as_str(), ol.as_str(), tx.as_str()),
            };
            *entry = ColorEntry::new(background, outline, text, entry.opacity);
        }

        palette
    }

    /// Grows the table to at least `len` entries by repeating the last one.
    pub fn extend_to(&mut self, len: usize) {
        if let Some(last) = self.entries.last().cloned() {
            if self.entries.len() < len {
                self.entries.resize(len, last);
            }
        }
    }

    /// Returns the colors for the tag in column `column`.
    pub fn resolve(&self, column: usize) -> &ColorEntry {
        let index = column.min(self.entries.len() - 1);
        &self.entries[index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_entries() -> Vec<ColorEntry> {
        ["white", "red", "black", "yellow", "green"]
            .iter()
            .map(|c| ColorEntry::themed(c, 1.0))
            .collect()
    }

    #[test]
    fn test_default_theme() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 12);

        let name = palette.resolve(0);
        assert_eq!(name.background, "white");
        assert_eq!(name.outline, "black");
        assert_eq!(name.text, "black");

        let gnd = palette.resolve(2);
        assert_eq!(gnd.background, "black");
        assert_eq!(gnd.text, "white");
        assert_eq!(gnd.opacity, 0.9);
    }

    #[test]
    fn test_extra_columns_reuse_last_entry() {
        let palette = Palette { entries: five_entries() };
        for column in 5..8 {
            assert_eq!(palette.resolve(column), palette.resolve(4));
        }
        assert_eq!(palette.resolve(7).background, "green");
    }

    #[test]
    fn test_extend_to() {
        let mut palette = Palette { entries: five_entries() };
        palette.extend_to(8);
        assert_eq!(palette.len(), 8);
        assert_eq!(palette.resolve(7), &ColorEntry::themed("green", 1.0));

        palette.extend_to(3);
        assert_eq!(palette.len(), 8);
    }

    #[test]
    fn test_override_forms() {
        let overrides = [
            Some(ColorOverride::Single("teal".into())),
            None,
            Some(ColorOverride::Pair("pink".into(), "navy".into())),
            Some(ColorOverride::Triple("gold".into(), "brown".into(), "white".into())),
        ];
        let palette = Palette::with_overrides(&overrides, "black");

        assert_eq!(palette.resolve(0), &ColorEntry::new("teal", "teal", "black", 0.3));
        assert_eq!(palette.resolve(1), &ColorEntry::themed("red", 0.8));
        assert_eq!(palette.resolve(2), &ColorEntry::new("pink", "navy", "black", 0.9));
        assert_eq!(palette.resolve(3), &ColorEntry::new("gold", "brown", "white", 0.7));
    }

    #[test]
    fn test_overrides_past_defaults_extend_first() {
        let mut overrides = vec![None; 14];
        overrides[13] = Some(ColorOverride::Single("lime".into()));
        let palette = Palette::with_overrides(&overrides, "black");

        assert_eq!(palette.len(), 14);
        // Column 12 is a copy of the last default entry.
        assert_eq!(palette.resolve(12), &ColorEntry::themed("blue", 0.1));
        assert_eq!(palette.resolve(13).background, "lime");
        assert_eq!(palette.resolve(13).opacity, 0.1);
    }

    #[test]
    fn test_override_json_forms() {
        let parsed: Vec<Option<ColorOverride>> =
            serde_json::from_str(r#"["red", null, ["red", "black"], ["a", "b", "c"]]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                Some(ColorOverride::Single("red".into())),
                None,
                Some(ColorOverride::Pair("red".into(), "black".into())),
                Some(ColorOverride::Triple("a".into(), "b".into(), "c".into())),
            ]
        );
    }
}
