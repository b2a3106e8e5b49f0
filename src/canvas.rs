// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/canvas.rs - SVG drawing surface for pin datasheets.
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
 * # `canvas` Module
 *
 * A [Surface] that builds an SVG document.
 *
 * ## Usage Example
 *
 * ```
 * use pinsheet::canvas::SvgCanvas;
 * use pinsheet::surface::{Point, Size, Surface, Text};
 *
 * let mut canvas = SvgCanvas::new();
 * canvas.add_text(Text {
 *     position: Point::new(0.0, 15.0),
 *     font_size: 12.0,
 *     font_family: "Montserrat".into(),
 *     color: "black".into(),
 *     content: "ATmega328P".into(),
 *     style: "note".into(),
 * });
 * canvas.set_document_size(Size::new(200.0, 40.0));
 *
 * assert!(canvas.to_string().contains("ATmega328P"));
 * ```
 */

use std::fmt;
use std::io::Write;

use svg::Document;
use svg::Node;
use svg::node::element::{self, Element};

use crate::surface::{Image, Rectangle, Size, Surface, Text};

/// Escapes the characters that would otherwise end up as markup. The `svg`
/// crate writes text and attribute values as they are.
fn escape(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[derive(Debug)]
pub struct SvgCanvas {
    document: Document,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
        }
    }

    /// Adds a `<desc>` element, shown by some viewers as the document title.
    pub fn describe(&mut self, description: &str) {
        let mut desc = Element::new("desc");
        desc.append(svg::node::Text::new(escape(description)));
        self.document.append(desc);
    }

    /// Embeds a CSS stylesheet in a `<style>` element.
    pub fn embed_stylesheet(&mut self, css: &str) {
        self.document.append(element::Style::new(css));
    }

    /// Writes the serialized document to `target`.
    pub fn write_to<W: Write>(&self, target: W) -> std::io::Result<()> {
        svg::write(target, &self.document)
    }
}

impl fmt::Display for SvgCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.document, f)
    }
}

impl Surface for SvgCanvas {
    fn add_rectangle(&mut self, rectangle: Rectangle) {
        let node = element::Rectangle::new()
            .set("x", rectangle.position.x)
            .set("y", rectangle.position.y)
            .set("width", rectangle.size.width)
            .set("height", rectangle.size.height)
            .set("rx", rectangle.corner_radius)
            .set("ry", rectangle.corner_radius)
            .set("stroke", escape(&rectangle.stroke))
            .set("fill", escape(&rectangle.fill))
            .set("opacity", rectangle.opacity)
            .set("class", escape(&rectangle.style));
        self.document.append(node);
    }

    fn add_text(&mut self, text: Text) {
        let node = element::Text::new()
            .add(svg::node::Text::new(escape(&text.content)))
            .set("x", text.position.x)
            .set("y", text.position.y)
            .set("font-size", text.font_size)
            .set("font-family", escape(&text.font_family))
            .set("fill", escape(&text.color))
            .set("class", escape(&text.style));
        self.document.append(node);
    }

    fn add_image(&mut self, image: Image) {
        let node = element::Image::new()
            .set("x", image.position.x)
            .set("y", image.position.y)
            .set("width", image.size.width)
            .set("height", image.size.height)
            .set("href", escape(&image.href));
        self.document.append(node);
    }

    fn set_document_size(&mut self, size: Size) {
        self.document.assign("width", size.width);
        self.document.assign("height", size.height);
        self.document
            .assign("viewBox", (0.0f32, 0.0f32, size.width, size.height));
    }
}
