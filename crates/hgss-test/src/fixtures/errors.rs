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

//! Error test fixtures.
//!
//! Malformed or invalid inputs for every source format, used to check that
//! each converter fails with a parse error instead of producing output.

use hgss_core::{Document, Node};

/// Text that is not a GeoJSON feature collection at all.
pub fn invalid_geojson_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("whitespace_only", "  \n\t "),
        ("truncated", r#"{"type": "FeatureCollection", "features": ["#),
        ("not_json", "type: FeatureCollection"),
        ("features_not_array", r#"{"type": "FeatureCollection", "features": 5}"#),
        ("feature_not_object", r#"{"type": "FeatureCollection", "features": ["x"]}"#),
        ("geometry_not_object", r#"{"type": "FeatureCollection", "features": [{"type": "Feature", "geometry": 3}]}"#),
    ]
}

/// Text the KML reader must reject.
pub fn invalid_kml_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("whitespace_only", "   \n  "),
        ("wrong_root", "<gpx><Document/></gpx>"),
        ("unclosed_tag", "<kml><Document><name>x</name>"),
        ("mismatched_tag", "<kml><Document></Folder></kml>"),
        ("not_xml", "this is not xml"),
    ]
}

/// HGSS JSON text that parses but fails validation.
pub fn invalid_hgss_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("wrong_type", r#"{"type": "GeoJSON", "version": "1.0", "root": {"id": "root", "type": "Group"}}"#),
        ("missing_type", r#"{"version": "1.0", "root": {"id": "root", "type": "Group"}}"#),
        ("empty_version", r#"{"type": "HGSS", "version": "", "root": {"id": "root", "type": "Group"}}"#),
        ("null_root", r#"{"type": "HGSS", "version": "1.0", "styles": {}, "root": null}"#),
        ("missing_root", r#"{"type": "HGSS", "version": "1.0"}"#),
    ]
}

/// Documents that validate but carry repeated node ids.
pub fn duplicate_id_document() -> Document {
    let mut group = Node::group("places", "Places");
    group.add_child(Node::new("cafe", "").with_name("Cafe"));
    group.add_child(Node::new("cafe", "").with_name("Cafe"));
    group.add_child(Node::new("places", "").with_name("Places"));

    let mut root = Node::group("root", "");
    root.add_child(group);
    Document::with_root(root)
}
