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

//! Geometry representation and geometry-type classification.

use crate::document::{null_as_default, GROUP_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use std::fmt;

/// A GeoJSON-style geometry.
///
/// `coordinates` is kept as an untyped JSON value because its nesting depth
/// depends on `geometry_type`. Unrecognized type tags are carried verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub geometry_type: String,
    #[serde(default)]
    pub coordinates: JsonValue,
}

impl Geometry {
    /// Create a geometry from a type tag and raw coordinates.
    pub fn new(geometry_type: impl Into<String>, coordinates: JsonValue) -> Self {
        Self {
            geometry_type: geometry_type.into(),
            coordinates,
        }
    }

    /// A `Point` at `[lon, lat]`.
    pub fn point(lon: f64, lat: f64) -> Self {
        Self::new(GeometryKind::Point.as_str(), json!([lon, lat]))
    }

    /// A `Polygon` with a single outer ring and no holes.
    pub fn polygon(ring: &[[f64; 2]]) -> Self {
        Self::new(GeometryKind::Polygon.as_str(), json!([ring]))
    }

    /// The recognized geometry kind, if the type tag is one of the seven
    /// GeoJSON geometry types.
    pub fn kind(&self) -> Option<GeometryKind> {
        GeometryKind::from_tag(&self.geometry_type)
    }
}

/// The seven GeoJSON geometry type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 7] = [
        GeometryKind::Point,
        GeometryKind::MultiPoint,
        GeometryKind::LineString,
        GeometryKind::MultiLineString,
        GeometryKind::Polygon,
        GeometryKind::MultiPolygon,
        GeometryKind::GeometryCollection,
    ];

    /// Match a type tag exactly (case-sensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Point" => Some(Self::Point),
            "MultiPoint" => Some(Self::MultiPoint),
            "LineString" => Some(Self::LineString),
            "MultiLineString" => Some(Self::MultiLineString),
            "Polygon" => Some(Self::Polygon),
            "MultiPolygon" => Some(Self::MultiPolygon),
            "GeometryCollection" => Some(Self::GeometryCollection),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::MultiPoint => "MultiPoint",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node type for a source geometry type: the tag itself when recognized,
/// `"Group"` otherwise.
pub fn node_type_for(geometry_type: &str) -> String {
    match GeometryKind::from_tag(geometry_type) {
        Some(kind) => kind.as_str().to_string(),
        None => GROUP_TYPE.to_string(),
    }
}
