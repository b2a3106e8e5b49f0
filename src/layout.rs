// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/layout.rs - Layout engine for pin datasheets.
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
 * # `layout` Module
 *
 * Turns records into drawing calls.
 *
 * The engine makes a single pass over the records with a vertical cursor that
 * only ever moves down:
 *
 * 1. A directive record switches the [Mode] and moves the cursor down by one
 *    row gap. `EOF` stops the pass.
 * 2. In `Right`/`Top` mode every non-empty field becomes a tag, packed from
 *    the left edge. In `Left` mode the tags are packed from the right edge of
 *    the ribbon instead.
 * 3. In `Text` mode every non-empty field becomes a line of text.
 * 4. In `Extras` mode every non-empty field names an image.
 * 5. After each data row the cursor moves down by the tallest advance that
 *    row asked for.
 *
 * ## Usage Example
 *
 * ```
 * use pinsheet::config::Config;
 * use pinsheet::images::NoImages;
 * use pinsheet::layout::layout;
 * use pinsheet::record::parse_records;
 * use pinsheet::surface::Drawing;
 *
 * let records = parse_records("Right,\nVCC,GND,D0\n".as_bytes()).unwrap();
 * let mut drawing = Drawing::new();
 * let summary = layout(&Config::default(), &records, &NoImages, &mut drawing);
 *
 * assert_eq!(summary.tags, 3);
 * assert_eq!(drawing.size.height, 30.0);
 * ```
 */

use std::ops::ControlFlow;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::images::ImageSource;
use crate::mode::{Directive, Mode, classify};
use crate::palette::Palette;
use crate::record::Record;
use crate::surface::{Image, Point, Rectangle, Size, Surface, Text};

/// What a finished layout pass produced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutSummary {
    /// Final document size, as passed to the surface.
    pub size: Size,
    /// Number of tags drawn.
    pub tags: usize,
    /// Number of free text lines drawn.
    pub texts: usize,
    /// Number of images drawn.
    pub images: usize,
    /// Number of records consumed, including directives and the `EOF` record.
    pub records: usize,
    /// Whether the pass was stopped by an `EOF` directive.
    pub stopped_at_eof: bool,
}

/// Widest tag row, in columns, among the records that will be laid out.
///
/// Only data rows under a tag mode count, and nothing after `EOF` does.
pub fn tag_columns(records: &[Record], artifact: Option<&str>) -> usize {
    let mut mode = Mode::default();
    let mut columns = 0;
    for record in records {
        match classify(record, artifact) {
            Some(Directive::Eof) => break,
            Some(Directive::Switch(next)) => mode = next,
            None if mode.places_tags() => columns = columns.max(record.len()),
            None => (),
        }
    }
    columns
}

/// Width of the tag ribbon, which is also where `Left` rows start from.
pub fn ribbon_width(config: &Config, columns: usize) -> f32 {
    config
        .document_width
        .unwrap_or((columns + 1) as f32 * config.tag_pitch())
}

/// Lays out `records` on `surface` and sets the document size.
///
/// # Arguments
///
/// * `config` - Dimensions, fonts, and colors.
/// * `records` - The whole pin map. Records after `EOF` are ignored.
/// * `images` - Resolver for the names in `Extras` rows.
/// * `surface` - Where the primitives go.
///
/// # Returns
///
/// A [LayoutSummary] of what was drawn.
pub fn layout<S, I>(config: &Config, records: &[Record], images: &I, surface: &mut S) -> LayoutSummary
where
    S: Surface,
    I: ImageSource + ?Sized,
{
    let columns = tag_columns(records, config.directive_suffix.as_deref());
    let mut engine = LayoutEngine::new(config, ribbon_width(config, columns), images, surface);
    for record in records {
        if engine.feed(record).is_break() {
            break;
        }
    }
    engine.finish()
}

/// The state of one layout pass.
///
/// Owns the cursor and the palette for the lifetime of one document.
pub struct LayoutEngine<'a, S, I>
where
    S: Surface,
    I: ImageSource + ?Sized,
{
    config: &'a Config,
    palette: Palette,
    images: &'a I,
    surface: &'a mut S,
    ribbon_width: f32,
    mode: Mode,
    cursor: f32,
    max_columns: usize,
    image_extent: f32,
    summary: LayoutSummary,
}

impl<'a, S, I> LayoutEngine<'a, S, I>
where
    S: Surface,
    I: ImageSource + ?Sized,
{
    pub fn new(config: &'a Config, ribbon_width: f32, images: &'a I, surface: &'a mut S) -> Self {
        Self {
            config,
            palette: config.palette(),
            images,
            surface,
            ribbon_width,
            mode: Mode::default(),
            cursor: 0.0,
            max_columns: 0,
            image_extent: 0.0,
            summary: LayoutSummary::default(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Lays out one record.
    ///
    /// Returns [ControlFlow::Break] on `EOF`; the caller must not feed any
    /// more records after that.
    pub fn feed(&mut self, record: &Record) -> ControlFlow<()> {
        self.summary.records += 1;

        match classify(record, self.config.directive_suffix.as_deref()) {
            Some(Directive::Eof) => {
                debug!(cursor = self.cursor, "end of pin map");
                self.summary.stopped_at_eof = true;
                return ControlFlow::Break(());
            }
            Some(Directive::Switch(mode)) => {
                debug!(%mode, cursor = self.cursor, "switching mode");
                self.mode = mode;
                self.cursor += self.config.row_gap;
                return ControlFlow::Continue(());
            }
            None => (),
        }

        let advance = match self.mode {
            Mode::Right | Mode::Top => self.place_tags(record, false),
            Mode::Left => self.place_tags(record, true),
            Mode::Text => self.place_text(record),
            Mode::Extras => self.place_images(record),
        };
        self.cursor += advance;

        ControlFlow::Continue(())
    }

    /// Computes the document size, hands it to the surface, and returns the
    /// summary.
    pub fn finish(mut self) -> LayoutSummary {
        let content_width =
            ((self.max_columns + 1) as f32 * self.config.tag_pitch()).max(self.image_extent);
        let size = Size::new(
            self.config.document_width.unwrap_or(content_width),
            self.config.document_height.unwrap_or(self.cursor),
        );
        self.surface.set_document_size(size);
        self.summary.size = size;
        self.summary
    }

    fn place_tags(&mut self, record: &Record, mirrored: bool) -> f32 {
        let pitch = self.config.tag_pitch();
        let mut advance = 0.0f32;

        self.max_columns = self.max_columns.max(record.len());
        for (placed, (column, value)) in record.values().enumerate() {
            let x = if mirrored {
                self.ribbon_width - (placed + 1) as f32 * pitch
            } else {
                placed as f32 * pitch
            };
            self.draw_tag(column, value, Point::new(x, self.cursor));
            advance = advance.max(self.config.tag_row_height);
        }

        advance
    }

    fn draw_tag(&mut self, column: usize, value: &str, position: Point) {
        let config = self.config;
        let colors = self.palette.resolve(column);
        debug!(column, value, x = position.x, y = position.y, "placing tag");

        self.surface.add_rectangle(Rectangle {
            position,
            size: Size::new(config.tag_width, config.tag_height),
            corner_radius: config.corner_radius,
            stroke: colors.outline.clone(),
            fill: colors.background.clone(),
            opacity: colors.opacity,
            style: format!("tag col-{column}"),
        });
        self.surface.add_text(Text {
            position: position
                + Point::new(config.label_indent, config.tag_height + config.label_adjust),
            font_size: config.font_size,
            font_family: config.font_family.clone(),
            color: colors.text.clone(),
            content: value.to_string(),
            style: format!("label col-{column}"),
        });
        self.summary.tags += 1;
    }

    fn place_text(&mut self, record: &Record) -> f32 {
        let config = self.config;
        self.cursor += config.row_gap;

        for (_, value) in record.values() {
            debug!(value, y = self.cursor, "placing text");
            self.surface.add_text(Text {
                position: Point::new(0.0, self.cursor),
                font_size: config.font_size,
                font_family: config.font_family.clone(),
                color: config.default_text_color.clone(),
                content: value.to_string(),
                style: "note".to_string(),
            });
            self.cursor += config.text_line_height;
            self.summary.texts += 1;
        }

        0.0
    }

    fn place_images(&mut self, record: &Record) -> f32 {
        let config = self.config;
        let mut advance = 0.0f32;

        for (column, name) in record.values() {
            let Some(href) = self.images.resolve(name) else {
                warn!(name, "could not find image");
                continue;
            };
            info!(name, %href, "adding image");

            let x = column as f32 * config.image_width;
            self.surface.add_image(Image {
                position: Point::new(x, self.cursor),
                size: Size::new(config.image_width, config.image_height),
                href,
            });
            self.image_extent = self.image_extent.max(x + config.image_width);
            advance = advance.max(config.image_height);
            self.summary.images += 1;
        }

        advance
    }
}
