// Dweve HGSS - Hierarchical Geospatial Style Sheets
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Event-based reader producing a typed view of a KML document.
//!
//! Only the elements the converter uses are kept; everything else is
//! skipped. Elements are matched on their local name, so prefixed
//! (`kml:Placemark`) and default-namespace documents read the same. When a
//! single-valued element repeats, the last occurrence wins.

use crate::error::KmlError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::trace;

/// The `Document` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KmlDocument {
    pub name: String,
    pub styles: Vec<KmlStyle>,
    pub folders: Vec<KmlFolder>,
    /// Placemarks directly under `Document`.
    pub placemarks: Vec<KmlPlacemark>,
}

/// A `Style` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KmlStyle {
    /// The `id` attribute.
    pub id: String,
    pub poly_style: Option<KmlPolyStyle>,
    pub line_style: Option<KmlLineStyle>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KmlPolyStyle {
    pub color: String,
    pub fill: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KmlLineStyle {
    pub color: String,
    pub width: String,
}

/// A `Folder` element; placemarks and sub-folders keep their own order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KmlFolder {
    pub name: String,
    pub placemarks: Vec<KmlPlacemark>,
    pub folders: Vec<KmlFolder>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KmlPlacemark {
    pub name: String,
    pub description: String,
    pub style_url: String,
    /// Raw `Point/coordinates` text.
    pub point: Option<String>,
    /// Raw `Polygon/outerBoundaryIs/LinearRing/coordinates` text.
    pub polygon: Option<String>,
}

/// Read a KML document.
///
/// The root element must be `kml`; a `kml` without `Document` yields an
/// empty document. Folders nested deeper than `max_folder_depth` are
/// rejected.
pub fn read_kml(kml: &str, max_folder_depth: usize) -> Result<KmlDocument, KmlError> {
    let mut reader = KmlReader {
        reader: Reader::from_str(kml),
        max_folder_depth,
    };
    reader.reader.trim_text(false);
    reader.read_root()
}

struct KmlReader<'i> {
    reader: Reader<&'i [u8]>,
    max_folder_depth: usize,
}

impl<'i> KmlReader<'i> {
    fn next(&mut self) -> Result<Event<'i>, KmlError> {
        let event = self.reader.read_event();
        event.map_err(|e| self.parse_error(e.to_string()))
    }

    fn parse_error(&self, message: impl Into<String>) -> KmlError {
        KmlError::Parse {
            pos: self.reader.buffer_position(),
            message: message.into(),
        }
    }

    fn read_root(&mut self) -> Result<KmlDocument, KmlError> {
        loop {
            match self.next()? {
                Event::Start(e) => {
                    check_root(&e)?;
                    return self.read_kml_children();
                }
                Event::Empty(e) => {
                    check_root(&e)?;
                    return Ok(KmlDocument::default());
                }
                Event::Eof => return Err(KmlError::EmptyDocument),
                _ => {}
            }
        }
    }

    fn read_kml_children(&mut self) -> Result<KmlDocument, KmlError> {
        let mut document = KmlDocument::default();
        self.read_children("kml", |r, start, empty| {
            match start.local_name().as_ref() {
                b"Document" if !empty => document = r.read_document()?,
                b"Document" => document = KmlDocument::default(),
                _ => r.skip(start, empty)?,
            }
            Ok(())
        })?;
        Ok(document)
    }

    fn read_document(&mut self) -> Result<KmlDocument, KmlError> {
        let mut document = KmlDocument::default();
        self.read_children("Document", |r, start, empty| {
            match start.local_name().as_ref() {
                b"name" => document.name = r.read_text(start, empty)?,
                b"Style" => document.styles.push(r.read_style(start, empty)?),
                b"Folder" => document.folders.push(r.read_folder(empty, 1)?),
                b"Placemark" => document.placemarks.push(r.read_placemark(empty)?),
                _ => r.skip(start, empty)?,
            }
            Ok(())
        })?;
        trace!(
            styles = document.styles.len(),
            folders = document.folders.len(),
            "read KML document"
        );
        Ok(document)
    }

    fn read_style(&mut self, start: &BytesStart<'i>, empty: bool) -> Result<KmlStyle, KmlError> {
        let id = match start.try_get_attribute("id") {
            Ok(Some(attr)) => attr
                .unescape_value()
                .map_err(|e| self.parse_error(e.to_string()))?
                .into_owned(),
            Ok(None) => String::new(),
            Err(e) => return Err(self.parse_error(e.to_string())),
        };

        let mut style = KmlStyle {
            id,
            ..KmlStyle::default()
        };
        if empty {
            return Ok(style);
        }

        self.read_children("Style", |r, start, empty| {
            match start.local_name().as_ref() {
                b"PolyStyle" => {
                    let mut poly = KmlPolyStyle::default();
                    r.read_children_of(empty, "PolyStyle", |r, start, empty| {
                        match start.local_name().as_ref() {
                            b"color" => poly.color = r.read_text(start, empty)?,
                            b"fill" => poly.fill = r.read_text(start, empty)?,
                            _ => r.skip(start, empty)?,
                        }
                        Ok(())
                    })?;
                    style.poly_style = Some(poly);
                }
                b"LineStyle" => {
                    let mut line = KmlLineStyle::default();
                    r.read_children_of(empty, "LineStyle", |r, start, empty| {
                        match start.local_name().as_ref() {
                            b"color" => line.color = r.read_text(start, empty)?,
                            b"width" => line.width = r.read_text(start, empty)?,
                            _ => r.skip(start, empty)?,
                        }
                        Ok(())
                    })?;
                    style.line_style = Some(line);
                }
                _ => r.skip(start, empty)?,
            }
            Ok(())
        })?;
        Ok(style)
    }

    fn read_folder(&mut self, empty: bool, depth: usize) -> Result<KmlFolder, KmlError> {
        if depth > self.max_folder_depth {
            return Err(KmlError::FolderDepthExceeded {
                max: self.max_folder_depth,
            });
        }

        let mut folder = KmlFolder::default();
        self.read_children_of(empty, "Folder", |r, start, empty| {
            match start.local_name().as_ref() {
                b"name" => folder.name = r.read_text(start, empty)?,
                b"Placemark" => folder.placemarks.push(r.read_placemark(empty)?),
                b"Folder" => folder.folders.push(r.read_folder(empty, depth + 1)?),
                _ => r.skip(start, empty)?,
            }
            Ok(())
        })?;
        Ok(folder)
    }

    fn read_placemark(&mut self, empty: bool) -> Result<KmlPlacemark, KmlError> {
        let mut placemark = KmlPlacemark::default();
        self.read_children_of(empty, "Placemark", |r, start, empty| {
            match start.local_name().as_ref() {
                b"name" => placemark.name = r.read_text(start, empty)?,
                b"description" => placemark.description = r.read_text(start, empty)?,
                b"styleUrl" => placemark.style_url = r.read_text(start, empty)?,
                b"Point" => placemark.point = Some(r.read_coordinates(empty, &["Point"])?),
                b"Polygon" => {
                    placemark.polygon = Some(r.read_coordinates(
                        empty,
                        &["Polygon", "outerBoundaryIs", "LinearRing"],
                    )?)
                }
                _ => r.skip(start, empty)?,
            }
            Ok(())
        })?;
        Ok(placemark)
    }

    /// Read the `coordinates` text found by descending `path`, the first
    /// entry of which is the element just opened.
    fn read_coordinates(&mut self, empty: bool, path: &[&str]) -> Result<String, KmlError> {
        let mut coordinates = String::new();
        let Some((element, rest)) = path.split_first() else {
            return Ok(coordinates);
        };
        self.read_children_of(empty, element, |r, start, empty| {
            let name = start.local_name();
            match rest.first() {
                Some(next) if name.as_ref() == next.as_bytes() => {
                    coordinates = r.read_coordinates(empty, rest)?;
                }
                None if name.as_ref() == b"coordinates" => {
                    coordinates = r.read_text(start, empty)?;
                }
                _ => r.skip(start, empty)?,
            }
            Ok(())
        })?;
        Ok(coordinates)
    }

    /// Call `on_child` for each child element until the parent's end tag.
    ///
    /// The callback must consume the child's content.
    fn read_children<F>(&mut self, parent: &str, mut on_child: F) -> Result<(), KmlError>
    where
        F: FnMut(&mut Self, &BytesStart<'i>, bool) -> Result<(), KmlError>,
    {
        loop {
            match self.next()? {
                Event::Start(e) => on_child(self, &e, false)?,
                Event::Empty(e) => on_child(self, &e, true)?,
                Event::End(_) => return Ok(()),
                Event::Eof => {
                    return Err(self.parse_error(format!(
                        "unexpected end of input inside <{}>",
                        parent
                    )))
                }
                _ => {}
            }
        }
    }

    /// [`read_children`](Self::read_children) for an element that may be
    /// self-closing.
    fn read_children_of<F>(&mut self, empty: bool, parent: &str, on_child: F) -> Result<(), KmlError>
    where
        F: FnMut(&mut Self, &BytesStart<'i>, bool) -> Result<(), KmlError>,
    {
        if empty {
            return Ok(());
        }
        self.read_children(parent, on_child)
    }

    /// Character data of a text element, CDATA included, untrimmed.
    fn read_text(&mut self, start: &BytesStart<'i>, empty: bool) -> Result<String, KmlError> {
        let mut text = String::new();
        if empty {
            return Ok(text);
        }
        loop {
            match self.next()? {
                Event::Text(e) => {
                    let unescaped = e.unescape().map_err(|e| self.parse_error(e.to_string()))?;
                    text.push_str(&unescaped);
                }
                Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e)),
                Event::Start(e) => self.skip(&e, false)?,
                Event::End(_) => return Ok(text),
                Event::Eof => {
                    return Err(self.parse_error(format!(
                        "unexpected end of input inside <{}>",
                        String::from_utf8_lossy(start.name().as_ref())
                    )))
                }
                _ => {}
            }
        }
    }

    fn skip(&mut self, start: &BytesStart<'i>, empty: bool) -> Result<(), KmlError> {
        if empty {
            return Ok(());
        }
        trace!(element = %String::from_utf8_lossy(start.name().as_ref()), "skipping");
        self.reader
            .read_to_end(start.name())
            .map(|_| ())
            .map_err(|e| self.parse_error(e.to_string()))
    }
}

fn check_root(start: &BytesStart<'_>) -> Result<(), KmlError> {
    if start.local_name().as_ref() == b"kml" {
        Ok(())
    } else {
        Err(KmlError::UnexpectedRoot {
            found: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
        })
    }
}
