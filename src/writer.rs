// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/writer.rs - Output naming and persistence for pin datasheets.
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
 * # `writer` Module
 *
 * Picks a file name for a finished document and writes it out.
 *
 * Unless overwriting is enabled, an existing `thing.svg` is left alone and the
 * document goes to `thing_02.svg`, or `thing_03.svg` if that exists too, and
 * so on.
 *
 * ## Usage Example
 *
 * ```no_run
 * use std::path::Path;
 *
 * use pinsheet::canvas::SvgCanvas;
 * use pinsheet::writer::{OutputFormat, save};
 *
 * fn main() -> Result<(), pinsheet::Error> {
 *     let canvas = SvgCanvas::new();
 *     let path = save(&canvas, Path::new("ESP8266/Thing"), OutputFormat::Svg, false)?;
 *     println!("The output is located at {}", path.display());
 *     Ok(())
 * }
 * ```
 */

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use tracing::info;

use crate::Error;
use crate::canvas::SvgCanvas;
use crate::record::has_extension;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain SVG.
    #[default]
    Svg,
    /// Gzip compressed SVG.
    Svgz,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Svgz => "svgz",
        }
    }

    /// Detects the format from a file name, or `None` if it isn't a vector
    /// graphic.
    pub fn from_path(path: &Path) -> Option<Self> {
        [OutputFormat::Svg, OutputFormat::Svgz]
            .into_iter()
            .find(|format| has_extension(path, format.extension()))
    }
}

fn with_suffix(root: &Path, suffix: &str, format: OutputFormat) -> PathBuf {
    let mut name = OsString::from(root.as_os_str());
    name.push(suffix);
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

/// Returns the path a document derived from `root` should be written to.
///
/// # Arguments
///
/// * `root` - Output path without its extension.
/// * `format` - Decides the extension.
/// * `overwrite` - If true, the plain name is returned even when it exists.
pub fn output_path(root: &Path, format: OutputFormat, overwrite: bool) -> PathBuf {
    let path = with_suffix(root, "", format);
    if overwrite || !path.exists() {
        return path;
    }

    (2u32..)
        .map(|i| with_suffix(root, &format!("_{i:02}"), format))
        .find(|candidate| !candidate.exists())
        .unwrap_or(path)
}

/// Writes `canvas` to the first free name derived from `root`.
///
/// # Returns
///
/// A `Result` containing the path that was written, or an I/O error.
pub fn save(canvas: &SvgCanvas, root: &Path, format: OutputFormat, overwrite: bool) -> Result<PathBuf, Error> {
    let path = output_path(root, format, overwrite);
    let mut file = BufWriter::new(File::create(&path)?);

    match format {
        OutputFormat::Svg => {
            canvas.write_to(&mut file)?;
            file.flush()?;
        }
        OutputFormat::Svgz => {
            let mut encoder = GzEncoder::new(file, Compression::default());
            canvas.write_to(&mut encoder)?;
            encoder.finish()?.flush()?;
        }
    }

    info!(path = %path.display(), "end of file, output written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Read;

    use flate2::read::GzDecoder;

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("a.svg")), Some(OutputFormat::Svg));
        assert_eq!(OutputFormat::from_path(Path::new("a.SVGZ")), Some(OutputFormat::Svgz));
        assert_eq!(OutputFormat::from_path(Path::new("a.png")), None);
    }

    #[test]
    fn test_output_path_numbered_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("thing");

        assert_eq!(output_path(&root, OutputFormat::Svg, false), dir.path().join("thing.svg"));

        std::fs::write(dir.path().join("thing.svg"), "").unwrap();
        assert_eq!(output_path(&root, OutputFormat::Svg, false), dir.path().join("thing_02.svg"));

        std::fs::write(dir.path().join("thing_02.svg"), "").unwrap();
        assert_eq!(output_path(&root, OutputFormat::Svg, false), dir.path().join("thing_03.svg"));

        assert_eq!(output_path(&root, OutputFormat::Svg, true), dir.path().join("thing.svg"));
        assert_eq!(output_path(&root, OutputFormat::Svgz, false), dir.path().join("thing.svgz"));
    }

    #[test]
    fn test_save_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("board");
        let canvas = SvgCanvas::new();

        let first = save(&canvas, &root, OutputFormat::Svg, false).unwrap();
        let second = save(&canvas, &root, OutputFormat::Svg, false).unwrap();
        assert_eq!(first, dir.path().join("board.svg"));
        assert_eq!(second, dir.path().join("board_02.svg"));
        assert!(std::fs::read_to_string(&second).unwrap().contains("<svg"));

        let again = save(&canvas, &root, OutputFormat::Svg, true).unwrap();
        assert_eq!(again, first);
    }

    #[test]
    fn test_save_svgz() {
        let dir = tempfile::tempdir().unwrap();
        let canvas = SvgCanvas::new();
        let path = save(&canvas, &dir.path().join("board"), OutputFormat::Svgz, false).unwrap();

        let mut decoder = GzDecoder::new(File::open(path).unwrap());
        let mut content = String::new();
        decoder.read_to_string(&mut content).unwrap();
        assert_eq!(content, canvas.to_string());
    }
}
