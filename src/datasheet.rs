// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/datasheet.rs - End to end rendering of pin datasheets.
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
 * # `datasheet` Module
 *
 * Glues the pieces together: a loaded pin map goes in, a styled SVG document
 * comes out.
 *
 * ## Usage Example
 *
 * ```no_run
 * use pinsheet::config::Config;
 * use pinsheet::datasheet::Datasheet;
 * use pinsheet::images::ImageDir;
 * use pinsheet::record::PinMapSource;
 * use pinsheet::writer::OutputFormat;
 *
 * fn main() -> Result<(), pinsheet::Error> {
 *     let config = Config::default();
 *     let source = PinMapSource::from_filename("ESP8266/Thing.csv")?;
 *     let images = ImageDir::new(&config.image_dir).linked_from("ESP8266");
 *
 *     let datasheet = Datasheet::render(&source, &config, &images)?;
 *     let path = datasheet.save(&source.root, OutputFormat::Svg, config.overwrite)?;
 *     println!("The output is located at {}", path.display());
 *
 *     Ok(())
 * }
 * ```
 */

use std::path::{Path, PathBuf};

use tracing::info;

use crate::Error;
use crate::canvas::SvgCanvas;
use crate::config::Config;
use crate::images::ImageSource;
use crate::layout::{LayoutSummary, layout};
use crate::record::PinMapSource;
use crate::style::embed_styles;
use crate::writer::{OutputFormat, save};

/// A rendered document, ready to be saved.
#[derive(Debug)]
pub struct Datasheet {
    pub canvas: SvgCanvas,
    pub summary: LayoutSummary,
}

impl Datasheet {
    /// Lays out a pin map on a fresh SVG canvas.
    ///
    /// The web font and stylesheets from `config` are embedded first, on a
    /// best-effort basis.
    ///
    /// # Returns
    ///
    /// A `Result` containing the rendered [Datasheet], or
    /// [Error::EmptyInput] if the pin map has no records.
    pub fn render<I>(source: &PinMapSource, config: &Config, images: &I) -> Result<Self, Error>
    where
        I: ImageSource + ?Sized,
    {
        if source.records.is_empty() {
            return Err(Error::EmptyInput(source.path.clone()));
        }

        let mut canvas = SvgCanvas::new();
        let name = source
            .path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy();
        let today = chrono::Utc::now().format("%Y-%m-%d");
        canvas.describe(&format!("Pin map generated from {name} on {today}"));
        embed_styles(&mut canvas, config, &source.root);

        let summary = layout(config, &source.records, images, &mut canvas);
        info!(
            tags = summary.tags,
            texts = summary.texts,
            images = summary.images,
            width = summary.size.width,
            height = summary.size.height,
            "pin map laid out"
        );

        Ok(Self { canvas, summary })
    }

    /// Writes the document to the first free name derived from `root`.
    pub fn save(&self, root: &Path, format: OutputFormat, overwrite: bool) -> Result<PathBuf, Error> {
        save(&self.canvas, root, format, overwrite)
    }
}
