// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/main.rs - Command line tool for rendering CSV pin maps into SVG.
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

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use pinsheet::Error;
use pinsheet::config::Config;
use pinsheet::datasheet::Datasheet;
use pinsheet::images::ImageDir;
use pinsheet::record::{INPUT_EXTENSION, PinMapSource, has_extension};
use pinsheet::writer::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The pin map to read. Prompts for a name when omitted.
    #[arg(value_parser = parse_input)]
    input: Option<PathBuf>,

    /// The SVG (or SVGZ) file to write. Defaults to the input name.
    #[arg(value_parser = parse_output)]
    output: Option<PathBuf>,

    /// JSON file with layout settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Replace an existing output file instead of picking a new name.
    #[arg(long)]
    overwrite: bool,

    /// Fixed document width.
    #[arg(long)]
    width: Option<f32>,

    /// Fixed document height.
    #[arg(long)]
    height: Option<f32>,

    /// Web font to fetch and embed.
    #[arg(long, conflicts_with = "no_font")]
    font: Option<String>,

    /// Don't fetch a web font.
    #[arg(long)]
    no_font: bool,

    /// Directory with the images named in Extras rows.
    #[arg(long)]
    images: Option<PathBuf>,

    /// Stylesheet embedded into the document.
    #[arg(long)]
    stylesheet: Option<PathBuf>,

    /// Only accept directive keywords without a trailing "1".
    #[arg(long)]
    strict_directives: bool,

    /// Log every placed element.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    /// Loads the config file, if any, and applies the command line overrides.
    fn config(&self) -> Result<Config, Error> {
        let mut config = match &self.config {
            Some(path) => Config::from_filename(path)?,
            None => Config::default(),
        };

        config.overwrite |= self.overwrite;
        if let Some(width) = self.width {
            config.document_width = Some(width);
        }
        if let Some(height) = self.height {
            config.document_height = Some(height);
        }
        if let Some(font) = &self.font {
            config.web_font = Some(font.clone());
        }
        if self.no_font {
            config.web_font = None;
        }
        if let Some(images) = &self.images {
            config.image_dir = images.clone();
        }
        if let Some(stylesheet) = &self.stylesheet {
            config.global_stylesheet = Some(stylesheet.clone());
        }
        if self.strict_directives {
            config.directive_suffix = None;
        }

        Ok(config)
    }

    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}

fn parse_input(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if has_extension(&path, INPUT_EXTENSION) {
        Ok(path)
    } else {
        Err(format!("expected a .{INPUT_EXTENSION} file"))
    }
}

fn parse_output(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    match OutputFormat::from_path(&path) {
        Some(_) => Ok(path),
        None => Err("expected a .svg or .svgz file".to_string()),
    }
}

fn run(args: &Args) -> Result<PathBuf, Error> {
    let config = args.config()?;

    let source = match &args.input {
        Some(path) => PinMapSource::from_filename(path)?,
        None => PinMapSource::from_stdin()?,
    };

    let (root, format) = match &args.output {
        Some(path) => (
            path.with_extension(""),
            OutputFormat::from_path(path).unwrap_or_default(),
        ),
        None => (source.root.clone(), OutputFormat::Svg),
    };

    let document_dir = root.parent().unwrap_or(Path::new("")).to_path_buf();
    let images = ImageDir::new(&config.image_dir).linked_from(document_dir);
    let datasheet = Datasheet::render(&source, &config, &images)?;
    datasheet.save(&root, format, config.overwrite)
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(path) => {
            println!("The output is located at {}", path.display());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}
