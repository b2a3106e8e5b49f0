// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/surface.rs - Drawing primitives and the surface they are drawn on.
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
 * # `surface` Module
 *
 * The small set of drawing calls the layout engine makes, and [Drawing], a
 * surface that simply records them.
 *
 * [crate::canvas::SvgCanvas] is the surface used for real output.
 */

use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A filled, stroked rectangle with rounded corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub position: Point,
    pub size: Size,
    pub corner_radius: f32,
    pub stroke: String,
    pub fill: String,
    pub opacity: f32,
    /// CSS class list.
    pub style: String,
}

/// A single line of text. `position` is the start of the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub position: Point,
    pub font_size: f32,
    pub font_family: String,
    pub color: String,
    pub content: String,
    /// CSS class list.
    pub style: String,
}

/// A linked raster image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub position: Point,
    pub size: Size,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rectangle(Rectangle),
    Text(Text),
    Image(Image),
}

/// Something the layout engine can draw on.
pub trait Surface {
    fn add_rectangle(&mut self, rectangle: Rectangle);
    fn add_text(&mut self, text: Text);
    fn add_image(&mut self, image: Image);
    fn set_document_size(&mut self, size: Size);
}

/// A surface that keeps every primitive in drawing order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Drawing {
    pub primitives: Vec<Primitive>,
    pub size: Size,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rectangles(&self) -> impl Iterator<Item = &Rectangle> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Rectangle(r) => Some(r),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &Image> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Image(i) => Some(i),
            _ => None,
        })
    }
}

impl Surface for Drawing {
    fn add_rectangle(&mut self, rectangle: Rectangle) {
        self.primitives.push(Primitive::Rectangle(rectangle));
    }

    fn add_text(&mut self, text: Text) {
        self.primitives.push(Primitive::Text(text));
    }

    fn add_image(&mut self, image: Image) {
        self.primitives.push(Primitive::Image(image));
    }

    fn set_document_size(&mut self, size: Size) {
        self.size = size;
    }
}
