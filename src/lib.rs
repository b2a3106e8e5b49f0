// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - Library for rendering CSV pin maps into SVG datasheets.
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
 * # `pinsheet` Crate
 *
 * A library for turning a microcontroller pin map, written as a simple comma
 * separated file, into an SVG "datasheet" graphic: rows of colored tags around
 * a central ribbon, free text notes, and optional images.
 *
 * The pipeline:
 *
 * 1. [record]: Reads the pin map into records.
 * 2. [mode]: Tells directive rows (`Left`, `Right`, `Top`, `Text`, `Extras`,
 *    `EOF`) apart from data rows.
 * 3. [layout]: Places tags, text, and images with a running cursor.
 * 4. [canvas]: Builds the SVG document.
 * 5. [writer]: Saves it without clobbering earlier output.
 *
 * ## Input Example
 *
 * ```text
 * Right,
 * D0,RX,PD0,,,,,,Serial
 * D1,TX,PD1,,,,,,Serial
 * Left,
 * A0,,,,,,Analog
 * Text,
 * ATmega328P pin map
 * EOF
 * ```
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
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let config = Config::default();
 *
 *     // Read the pin map
 *     let source = PinMapSource::from_filename("uno.csv")?;
 *
 *     // Lay it out
 *     let images = ImageDir::new(&config.image_dir);
 *     let datasheet = Datasheet::render(&source, &config, &images)?;
 *
 *     // Save it as uno.svg, or uno_02.svg if that exists
 *     let path = datasheet.save(&source.root, OutputFormat::Svg, config.overwrite)?;
 *     println!("Tags: {} in {}", datasheet.summary.tags, path.display());
 *
 *     Ok(())
 * }
 * ```
 */

pub mod canvas;
pub mod config;
pub mod datasheet;
mod error;
pub mod images;
pub mod layout;
pub mod mode;
pub mod palette;
pub mod record;
pub mod style;
pub mod surface;
pub mod writer;

pub use error::Error;
