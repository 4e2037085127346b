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

//! HGSS document fixtures, as JSON text and as built trees.

use hgss_core::{Document, Geometry, Node, StyleProperties};
use serde_json::json;

/// A complete HGSS document: one style, a group with a polygon and a point.
pub const SAMPLE_HGSS: &str = r##"{
  "type": "HGSS",
  "version": "1.0",
  "name": "Krakow Zones",
  "styles": {
    "#zoneStyle": {"fill": "#cccccc", "fill-opacity": 1.0, "stroke": "#444444", "stroke-width": 2.0}
  },
  "root": {
    "id": "root",
    "type": "Group",
    "name": "Krakow Zones",
    "children": [
      {
        "id": "zones",
        "type": "Group",
        "name": "Zones",
        "children": [
          {
            "id": "zone_a",
            "type": "Polygon",
            "name": "Zone A",
            "description": "First zone",
            "geometry": {
              "type": "Polygon",
              "coordinates": [[[19.938, 50.0], [19.95, 50.0], [19.95, 50.01], [19.938, 50.0]]]
            },
            "style": {"styleUrl": "#zoneStyle"}
          },
          {
            "id": "point_of_interest",
            "type": "Point",
            "name": "Point of Interest",
            "coordinates": [19.945, 50.006],
            "geometry": {"type": "Point", "coordinates": [19.944, 50.005]}
          }
        ]
      }
    ]
  }
}"##;

pub fn sample_hgss() -> &'static str {
    SAMPLE_HGSS
}

/// The tree of [`SAMPLE_HGSS`], built in code.
pub fn sample_document() -> Document {
    let mut style = StyleProperties::new();
    style.insert("fill".to_string(), json!("#cccccc"));
    style.insert("fill-opacity".to_string(), json!(1.0));
    style.insert("stroke".to_string(), json!("#444444"));
    style.insert("stroke-width".to_string(), json!(2.0));

    let mut style_url = StyleProperties::new();
    style_url.insert("styleUrl".to_string(), json!("#zoneStyle"));

    let zone = Node::feature(
        "zone_a",
        Geometry::polygon(&[[19.938, 50.0], [19.95, 50.0], [19.95, 50.01], [19.938, 50.0]]),
    )
    .with_name("Zone A")
    .with_description("First zone")
    .with_style(style_url);

    let poi = Node::feature("point_of_interest", Geometry::point(19.944, 50.005))
        .with_name("Point of Interest")
        .with_coordinates(vec![19.945, 50.006]);

    let mut zones = Node::group("zones", "Zones");
    zones.add_child(zone);
    zones.add_child(poi);

    let mut root = Node::group("root", "Krakow Zones");
    root.add_child(zones);

    let mut doc = Document::with_root(root);
    doc.name = "Krakow Zones".to_string();
    doc.styles.insert("#zoneStyle".to_string(), style);
    doc
}

/// Three levels of groups with features at every level, including a
/// feature that also owns children and an unclassified leaf.
pub fn nested_document() -> Document {
    let mut parent_feature =
        Node::feature("city", Geometry::point(19.94, 50.06)).with_name("City");
    parent_feature.add_child(
        Node::feature("district", Geometry::point(19.95, 50.07)).with_name("District"),
    );

    let mut inner = Node::group("inner", "Inner");
    inner.add_child(Node::feature("deep", Geometry::point(1.0, 2.0)).with_name("Deep"));
    inner.add_child(Node::new("note", "").with_name("Note"));

    let mut outer = Node::group("outer", "Outer");
    outer.add_child(parent_feature);
    outer.add_child(inner);

    let mut root = Node::group("root", "Nested");
    root.add_child(outer);
    root.add_child(Node::feature("top", Geometry::point(0.0, 0.0)).with_name("Top"));

    Document::with_root(root)
}
