// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/images.rs - Image lookup for the Extras rows of pin datasheets.
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

#[cfg(test)]
use std::collections::HashMap;
use std::fs::File;
use std::path::{Component, Path, PathBuf};

/// Turns the base name written in an `Extras` row into a link to an image.
pub trait ImageSource {
    /// Returns the link for `name`, or `None` if there is no such image.
    fn resolve(&self, name: &str) -> Option<String>;
}

/// Returns `target` as seen from the directory `base`, or `None` if either
/// can't be resolved or they share no common ancestor.
fn relative_link(target: &Path, base: &Path) -> Option<PathBuf> {
    let base = if base.as_os_str().is_empty() { Path::new(".") } else { base };
    let target = target.canonicalize().ok()?;
    let base = base.canonicalize().ok()?;

    let common = target
        .components()
        .zip(base.components())
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return None;
    }

    let mut link = PathBuf::new();
    for _ in base.components().skip(common) {
        link.push(Component::ParentDir);
    }
    for component in target.components().skip(common) {
        link.push(component);
    }
    Some(link)
}

/// Looks for readable `<dir>/<name>.png` files.
///
/// Links are written relative to the directory of the document that will
/// contain them when one is given with [ImageDir::linked_from], and as
/// `<dir>/<name>.png` otherwise.
#[derive(Debug, Clone)]
pub struct ImageDir {
    dir: PathBuf,
    document_dir: Option<PathBuf>,
}

impl ImageDir {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            document_dir: None,
        }
    }

    /// Makes links relative to `document_dir`, the directory the document
    /// is saved in. An empty path means the working directory.
    pub fn linked_from<P: Into<PathBuf>>(mut self, document_dir: P) -> Self {
        self.document_dir = Some(document_dir.into());
        self
    }

    fn candidate(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.png"))
    }
}

impl ImageSource for ImageDir {
    fn resolve(&self, name: &str) -> Option<String> {
        let path = self.candidate(name);
        File::open(&path).ok()?;

        let link = self
            .document_dir
            .as_deref()
            .and_then(|base| relative_link(&path, base))
            .unwrap_or(path);
        Some(link.to_string_lossy().replace('\\', "/"))
    }
}

/// A fixed name to link table. Never touches the filesystem.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct ImageTable(pub HashMap<String, String>);

#[cfg(test)]
impl ImageSource for ImageTable {
    fn resolve(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

/// Resolves nothing. Used when images are not wanted at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageSource for NoImages {
    fn resolve(&self, _name: &str) -> Option<String> {
        None
    }
}
