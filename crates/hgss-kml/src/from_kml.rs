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

//! KML to HGSS conversion

use crate::error::KmlError;
use crate::helpers::{generate_id, kml_color_to_hex, parse_coordinates};
use crate::reader::{read_kml, KmlDocument, KmlFolder, KmlPlacemark, KmlStyle};
use hgss_core::{Document, Geometry, Node, StyleProperties, HGSS_VERSION, ROOT_ID};
use serde_json::json;
use tracing::{debug, trace, warn};

/// Maximum `Folder` nesting accepted by default.
pub const DEFAULT_MAX_FOLDER_DEPTH: usize = 1000;

/// Configuration for KML import
#[derive(Debug, Clone)]
pub struct FromKmlConfig {
    /// Version string written into the document
    pub version: String,
    /// Deepest accepted `Folder` nesting (top-level folders are depth 1)
    pub max_folder_depth: usize,
}

impl Default for FromKmlConfig {
    fn default() -> Self {
        Self {
            version: HGSS_VERSION.to_string(),
            max_folder_depth: DEFAULT_MAX_FOLDER_DEPTH,
        }
    }
}

/// Convert KML text to an HGSS document
///
/// # Errors
///
/// Fails on malformed XML, a root element other than `kml`, input without
/// any element, or folders nested deeper than
/// [`max_folder_depth`](FromKmlConfig::max_folder_depth). Malformed
/// coordinates, colors and widths are dropped instead.
pub fn from_kml(kml: &str, config: &FromKmlConfig) -> Result<Document, KmlError> {
    let kml_doc = read_kml(kml, config.max_folder_depth)?;
    let doc = convert_document(&kml_doc, config);
    debug!(
        styles = doc.styles.len(),
        folders = kml_doc.folders.len(),
        "converted KML to HGSS"
    );
    Ok(doc)
}

fn convert_document(kml_doc: &KmlDocument, config: &FromKmlConfig) -> Document {
    if !kml_doc.placemarks.is_empty() {
        warn!(
            count = kml_doc.placemarks.len(),
            "skipping placemarks outside of any Folder"
        );
    }

    let mut root = Node::group(ROOT_ID, kml_doc.name.as_str());
    root.children = kml_doc.folders.iter().map(folder_to_node).collect();

    let mut doc = Document::with_root(root);
    doc.version = config.version.clone();
    for style in &kml_doc.styles {
        doc.styles
            .insert(format!("#{}", style.id), style_properties(style));
    }
    doc
}

/// Style properties of a KML `Style`
///
/// `PolyStyle` gives `fill` and, when `fill` is `1`, `fill-opacity`;
/// `LineStyle` gives `stroke` and `stroke-width`. Empty colors and
/// non-numeric widths are left out.
pub fn style_properties(style: &KmlStyle) -> StyleProperties {
    let mut props = StyleProperties::new();

    if let Some(poly) = &style.poly_style {
        if !poly.color.is_empty() {
            props.insert("fill".to_string(), json!(kml_color_to_hex(&poly.color)));
        }
        if poly.fill == "1" {
            props.insert("fill-opacity".to_string(), json!(1.0));
        }
    }

    if let Some(line) = &style.line_style {
        if !line.color.is_empty() {
            props.insert("stroke".to_string(), json!(kml_color_to_hex(&line.color)));
        }
        match line.width.parse::<f64>() {
            Ok(width) if width.is_finite() => {
                props.insert("stroke-width".to_string(), json!(width));
            }
            _ if !line.width.is_empty() => {
                trace!(style = %style.id, width = %line.width, "dropping unparsable width");
            }
            _ => {}
        }
    }

    props
}

fn folder_to_node(folder: &KmlFolder) -> Node {
    let mut node = Node::group(generate_id(&folder.name), folder.name.as_str());
    node.children = folder
        .placemarks
        .iter()
        .map(placemark_to_node)
        .chain(folder.folders.iter().map(folder_to_node))
        .collect();
    node
}

fn placemark_to_node(placemark: &KmlPlacemark) -> Node {
    let mut node = Node::new(generate_id(&placemark.name), "")
        .with_name(placemark.name.as_str())
        .with_description(placemark.description.as_str());

    let geometry = if let Some(point) = &placemark.point {
        parse_coordinates(point)
            .first()
            .map(|&[lon, lat]| Geometry::point(lon, lat))
    } else if let Some(ring) = &placemark.polygon {
        let ring = parse_coordinates(ring);
        (!ring.is_empty()).then(|| Geometry::polygon(&ring))
    } else {
        None
    };

    match geometry {
        Some(geometry) => {
            node.node_type = geometry.geometry_type.clone();
            node.geometry = Some(geometry);
        }
        None => trace!(placemark = %placemark.name, "placemark without usable geometry"),
    }

    if !placemark.style_url.is_empty() {
        let mut style = StyleProperties::new();
        style.insert("styleUrl".to_string(), json!(placemark.style_url));
        node.style = Some(style);
    }

    node
}
