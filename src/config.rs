// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/config.rs - Layout and output settings for pin datasheets.
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
 * # `config` Module
 *
 * Settings shared by the layout engine, the SVG canvas, and the writer.
 *
 * A [Config] is built once, optionally loaded from a JSON file, and then
 * handed to the layout engine by reference. Nothing mutates it afterwards.
 *
 * ## Usage Example
 *
 * ```no_run
 * use pinsheet::config::Config;
 *
 * fn main() -> Result<(), pinsheet::Error> {
 *     let config = Config::from_filename("pinsheet.json")?;
 *     println!("Tag pitch: {}", config.tag_pitch());
 *     Ok(())
 * }
 * ```
 */

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::Error;
use crate::palette::{ColorOverride, Palette};

/// Every dimension is in SVG user units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Width of a tag rectangle.
    pub tag_width: f32,
    /// Height of a tag rectangle.
    pub tag_height: f32,
    /// Horizontal space between neighboring tags.
    pub tag_gap: f32,
    /// Vertical advance of a row of tags.
    pub tag_row_height: f32,
    /// Vertical advance of a directive row, and the extra space before each
    /// row of free text.
    pub row_gap: f32,
    /// Vertical advance of one line of free text.
    pub text_line_height: f32,
    /// Corner radius of tag rectangles.
    pub corner_radius: f32,
    /// Moves tag labels to the right.
    pub label_indent: f32,
    /// Moves tag labels down (negative for up) from the tag's bottom edge.
    pub label_adjust: f32,
    pub font_size: f32,
    pub font_family: String,
    /// Label color used by color overrides that don't name one.
    pub default_text_color: String,
    pub image_width: f32,
    pub image_height: f32,
    /// Directory searched for `<name>.png` images in `Extras` rows.
    pub image_dir: PathBuf,
    /// Fixed document width. Computed from the content when unset.
    pub document_width: Option<f32>,
    /// Fixed document height. Computed from the content when unset.
    pub document_height: Option<f32>,
    /// Per-column replacements for the default color theme.
    pub colors: Vec<Option<ColorOverride>>,
    /// Trailing artifact tolerated after a directive keyword, for example the
    /// `1` some spreadsheet exports leave in the last column. `None` disables
    /// the tolerance.
    pub directive_suffix: Option<String>,
    /// Web font to fetch and embed. `None` disables the fetch.
    pub web_font: Option<String>,
    /// Stylesheet embedded into every document when it exists.
    pub global_stylesheet: Option<PathBuf>,
    /// Replace existing output files instead of picking a new name.
    pub overwrite: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag_width: 45.0,
            tag_height: 12.0,
            tag_gap: 3.0,
            tag_row_height: 15.0,
            row_gap: 15.0,
            text_line_height: 17.0,
            corner_radius: 1.0,
            label_indent: 1.0,
            label_adjust: -2.0,
            font_size: 12.0,
            font_family: "Montserrat".to_string(),
            default_text_color: "black".to_string(),
            image_width: 250.0,
            image_height: 250.0,
            image_dir: PathBuf::from("Images"),
            document_width: None,
            document_height: None,
            colors: Vec::new(),
            directive_suffix: Some("1".to_string()),
            web_font: Some("Montserrat".to_string()),
            global_stylesheet: Some(PathBuf::from("pinsheet.css")),
            overwrite: false,
        }
    }
}

impl Config {
    /// Loads a config from a JSON file. Missing keys keep their defaults.
    pub fn from_filename<P: AsRef<Path>>(filename: P) -> Result<Self, Error> {
        let file = File::open(filename)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Horizontal distance between the left edges of neighboring tags.
    pub fn tag_pitch(&self) -> f32 {
        self.tag_width + self.tag_gap
    }

    /// Builds the column color table with this config's overrides applied.
    pub fn palette(&self) -> Palette {
        Palette::with_overrides(&self.colors, &self.default_text_color)
    }
}
