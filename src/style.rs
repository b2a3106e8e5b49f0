// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/style.rs - Web font and stylesheet embedding for pin datasheets.
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
 * # `style` Module
 *
 * Best-effort styling for generated documents. Everything in here logs and
 * carries on when something is missing or the network is down.
 */

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::Error;
use crate::canvas::SvgCanvas;
use crate::config::Config;

const WEB_FONT_CSS_URL: &str = "https://fonts.googleapis.com/css";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// URL of the `@font-face` stylesheet for `family`.
pub fn web_font_url(family: &str) -> String {
    format!("{WEB_FONT_CSS_URL}?family={}", family.trim().replace(' ', "+"))
}

/// Downloads the `@font-face` stylesheet for a web font.
pub fn fetch_web_font(family: &str) -> Result<String, Error> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let css = client
        .get(web_font_url(family))
        .send()?
        .error_for_status()?
        .text()?;
    Ok(css)
}

/// Reads a local stylesheet. Returns `None` if it doesn't exist or can't be
/// read.
pub fn load_stylesheet(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(css) => {
            info!(path = %path.display(), "embedding stylesheet");
            Some(css)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no stylesheet");
            None
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read stylesheet");
            None
        }
    }
}

/// Stylesheets that apply to the document derived from `root`: the global one
/// from the config, then `<root>.css`.
pub fn stylesheet_paths(config: &Config, root: &Path) -> Vec<PathBuf> {
    let mut per_document = root.as_os_str().to_owned();
    per_document.push(".css");

    config
        .global_stylesheet
        .iter()
        .cloned()
        .chain([PathBuf::from(per_document)])
        .collect()
}

/// Embeds the web font and every stylesheet that exists into `canvas`.
///
/// # Returns
///
/// The number of `<style>` elements added.
pub fn embed_styles(canvas: &mut SvgCanvas, config: &Config, root: &Path) -> usize {
    let mut embedded = 0;

    if let Some(family) = &config.web_font {
        match fetch_web_font(family) {
            Ok(css) => {
                info!(family = %family, "embedding web font");
                canvas.embed_stylesheet(&css);
                embedded += 1;
            }
            Err(e) => warn!(family = %family, error = %e, "web font not embedded"),
        }
    }

    for path in stylesheet_paths(config, root) {
        if let Some(css) = load_stylesheet(&path) {
            canvas.embed_stylesheet(&css);
            embedded += 1;
        }
    }

    embedded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_font_url() {
        assert_eq!(
            web_font_url("Open Sans"),
            "https://fonts.googleapis.com/css?family=Open+Sans"
        );
    }

    #[test]
    fn test_stylesheet_paths() {
        let config = Config::default();
        assert_eq!(
            stylesheet_paths(&config, Path::new("boards/thing")),
            vec![PathBuf::from("pinsheet.css"), PathBuf::from("boards/thing.css")]
        );

        let config = Config {
            global_stylesheet: None,
            ..Config::default()
        };
        assert_eq!(
            stylesheet_paths(&config, Path::new("thing")),
            vec![PathBuf::from("thing.css")]
        );
    }

    #[test]
    fn test_embed_local_stylesheets() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.css");
        std::fs::write(&global, ".tag { rx: 2; }").unwrap();
        std::fs::write(dir.path().join("thing.css"), ".note { font-style: italic; }").unwrap();

        let config = Config {
            web_font: None,
            global_stylesheet: Some(global),
            ..Config::default()
        };
        let mut canvas = SvgCanvas::new();
        let embedded = embed_styles(&mut canvas, &config, &dir.path().join("thing"));

        assert_eq!(embedded, 2);
        let output = canvas.to_string();
        assert!(output.contains(".tag { rx: 2; }"));
        assert!(output.contains(".note { font-style: italic; }"));
    }

    #[test]
    fn test_missing_stylesheets_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            web_font: None,
            global_stylesheet: Some(dir.path().join("absent.css")),
            ..Config::default()
        };
        let mut canvas = SvgCanvas::new();
        assert_eq!(embed_styles(&mut canvas, &config, &dir.path().join("thing")), 0);
        assert_eq!(load_stylesheet(&dir.path().join("absent.css")), None);
    }
}
