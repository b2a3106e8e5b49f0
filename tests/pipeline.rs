// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  tests/pipeline.rs - End to end tests for pin datasheet rendering.
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

use std::fs;

use pretty_assertions::assert_eq;

use pinsheet::config::Config;
use pinsheet::datasheet::Datasheet;
use pinsheet::images::ImageDir;
use pinsheet::layout::layout;
use pinsheet::record::PinMapSource;
use pinsheet::surface::{Drawing, Point};
use pinsheet::writer::OutputFormat;

const UNO: &str = "\
Right,
D0,RX,,,,PD0,,,Serial
D1,TX,,,,PD1,,,Serial
Left,,,,,,,,1
A0,,,,,PC0,Analog
Extras,
isp,nosuchimage
Text,
ATmega328P pin map
EOF,
ignored,row
";

fn offline(dir: &std::path::Path) -> Config {
    Config {
        web_font: None,
        global_stylesheet: None,
        image_dir: dir.join("Images"),
        ..Config::default()
    }
}

#[test]
fn test_render_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("uno.csv");
    fs::write(&input, UNO).unwrap();
    fs::create_dir(dir.path().join("Images")).unwrap();
    fs::write(dir.path().join("Images").join("isp.png"), b"\x89PNG").unwrap();

    let config = offline(dir.path());
    let source = PinMapSource::from_filename(&input).unwrap();
    let images = ImageDir::new(&config.image_dir);
    let datasheet = Datasheet::render(&source, &config, &images).unwrap();

    assert_eq!(datasheet.summary.tags, 4 + 4 + 3);
    assert_eq!(datasheet.summary.images, 1);
    assert_eq!(datasheet.summary.texts, 1);
    assert!(datasheet.summary.stopped_at_eof);

    let first = datasheet.save(&source.root, OutputFormat::Svg, false).unwrap();
    let second = datasheet.save(&source.root, OutputFormat::Svg, false).unwrap();
    assert_eq!(first, dir.path().join("uno.svg"));
    assert_eq!(second, dir.path().join("uno_02.svg"));

    let svg = fs::read_to_string(&first).unwrap();
    assert!(svg.contains("ATmega328P pin map"));
    assert!(svg.contains("isp.png"));
    assert!(!svg.contains("ignored"));
}

#[test]
fn test_layout_positions() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("uno.csv");
    fs::write(&input, UNO).unwrap();

    let config = offline(dir.path());
    let source = PinMapSource::from_filename(&input).unwrap();
    let mut drawing = Drawing::new();
    let images = ImageDir::new(&config.image_dir);
    let summary = layout(&config, &source.records, &images, &mut drawing);

    // Widest tag row has 9 columns, so the ribbon is 10 pitches wide.
    let placed: Vec<(f32, f32)> = drawing
        .rectangles()
        .map(|r| (r.position.x, r.position.y))
        .collect();
    assert_eq!(
        placed,
        vec![
            (0.0, 15.0),
            (48.0, 15.0),
            (96.0, 15.0),
            (144.0, 15.0),
            (0.0, 30.0),
            (48.0, 30.0),
            (96.0, 30.0),
            (144.0, 30.0),
            (432.0, 60.0),
            (384.0, 60.0),
            (336.0, 60.0),
        ]
    );

    // No images are found, so the Extras row adds nothing.
    let note = drawing.texts().last().unwrap();
    assert_eq!(note.content, "ATmega328P pin map");
    assert_eq!(note.position, Point::new(0.0, 75.0 + 15.0 + 15.0 + 15.0));
    assert_eq!(summary.size.width, 480.0);
    assert_eq!(summary.size.height, 120.0 + 17.0);
}

#[test]
fn test_image_links_resolve_from_saved_document() {
    let dir = tempfile::tempdir().unwrap();
    let board = dir.path().join("ESP8266");
    fs::create_dir(&board).unwrap();
    fs::create_dir(dir.path().join("Images")).unwrap();
    fs::write(dir.path().join("Images").join("isp.png"), b"\x89PNG").unwrap();
    let input = board.join("Thing.csv");
    fs::write(&input, "Extras,\nisp\n").unwrap();

    let config = offline(dir.path());
    let source = PinMapSource::from_filename(&input).unwrap();
    let images = ImageDir::new(&config.image_dir).linked_from(&board);
    let datasheet = Datasheet::render(&source, &config, &images).unwrap();
    let out = datasheet.save(&source.root, OutputFormat::Svg, false).unwrap();
    assert_eq!(out, board.join("Thing.svg"));

    let svg = fs::read_to_string(&out).unwrap();
    let href = svg
        .split("href=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .unwrap();
    assert_eq!(href, "../Images/isp.png");
    assert!(out.parent().unwrap().join(href).exists());
}
