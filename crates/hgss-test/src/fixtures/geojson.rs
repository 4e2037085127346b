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

//! GeoJSON feature-collection fixtures.

/// Two features: a named Point with a string id and label coordinates, and a
/// Polygon without id.
pub const SAMPLE_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "id": "sample_point",
      "geometry": {"type": "Point", "coordinates": [19.938, 50.061]},
      "properties": {
        "name": "Sample Point",
        "description": "Main square",
        "label_coordinates": [19.94, 50.062],
        "category": "landmark"
      }
    },
    {
      "type": "Feature",
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[19.938, 50.0], [19.95, 50.0], [19.95, 50.01], [19.938, 50.0]]]
      },
      "properties": {"name": "Zone A"}
    }
  ]
}"#;

/// Features whose properties have the wrong types, are null, or are missing.
pub const MIXED_PROPERTIES_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "id": 42,
      "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
      "properties": {"name": 7, "description": ["not", "text"], "label_coordinates": [1.5, "x", null, 2]}
    },
    {
      "type": "Feature",
      "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]},
      "properties": null
    },
    {
      "type": "Feature",
      "geometry": {"type": "Circle", "coordinates": [0.0, 0.0]},
      "properties": {"label_coordinates": "0,0"}
    },
    {
      "type": "Feature",
      "geometry": null,
      "properties": {"name": "No geometry"}
    }
  ]
}"#;

/// One feature per recognized geometry type.
pub const ALL_GEOMETRIES_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}, "properties": {}},
    {"type": "Feature", "geometry": {"type": "MultiPoint", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}, "properties": {}},
    {"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}, "properties": {}},
    {"type": "Feature", "geometry": {"type": "MultiLineString", "coordinates": [[[0.0, 0.0], [1.0, 1.0]]]}, "properties": {}},
    {"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]]}, "properties": {}},
    {"type": "Feature", "geometry": {"type": "MultiPolygon", "coordinates": [[[[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]]]}, "properties": {}},
    {"type": "Feature", "geometry": {"type": "GeometryCollection", "coordinates": null}, "properties": {}}
  ]
}"#;

/// An empty feature collection.
pub const EMPTY_GEOJSON: &str = r#"{"type": "FeatureCollection", "features": []}"#;

pub fn sample_geojson() -> &'static str {
    SAMPLE_GEOJSON
}

pub fn mixed_properties_geojson() -> &'static str {
    MIXED_PROPERTIES_GEOJSON
}

pub fn all_geometries_geojson() -> &'static str {
    ALL_GEOMETRIES_GEOJSON
}
