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

//! Builders for GeoJSON test input.
//!
//! Builders produce `serde_json::Value` so that tests can also express
//! features the typed model would reject or normalize.

use serde_json::{json, Map, Value as JsonValue};

/// Builder for one GeoJSON feature.
///
/// # Examples
///
/// ```
/// use hgss_test::fixtures::builders::FeatureBuilder;
///
/// let feature = FeatureBuilder::point(1.0, 2.0)
///     .id("a")
///     .name("Alpha")
///     .label_coordinates(vec![1.5, 2.5])
///     .build();
///
/// assert_eq!(feature["id"], "a");
/// assert_eq!(feature["geometry"]["type"], "Point");
/// ```
#[derive(Debug, Clone)]
pub struct FeatureBuilder {
    id: Option<JsonValue>,
    geometry: JsonValue,
    properties: Option<Map<String, JsonValue>>,
}

impl FeatureBuilder {
    /// A feature with an arbitrary geometry value (may be `null`).
    pub fn new(geometry: JsonValue) -> Self {
        Self {
            id: None,
            geometry,
            properties: Some(Map::new()),
        }
    }

    pub fn point(lon: f64, lat: f64) -> Self {
        Self::new(json!({"type": "Point", "coordinates": [lon, lat]}))
    }

    /// A polygon with a single ring.
    pub fn polygon(ring: &[[f64; 2]]) -> Self {
        Self::new(json!({"type": "Polygon", "coordinates": [ring]}))
    }

    /// Any JSON value as id, including numbers.
    pub fn id(mut self, id: impl Into<JsonValue>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.property("name", name.into())
    }

    pub fn description(self, description: impl Into<String>) -> Self {
        self.property("description", description.into())
    }

    pub fn label_coordinates(self, coordinates: Vec<f64>) -> Self {
        self.property("label_coordinates", coordinates)
    }

    /// Set an arbitrary property.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.properties
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Serialize `properties` as `null`.
    pub fn null_properties(mut self) -> Self {
        self.properties = None;
        self
    }

    pub fn build(self) -> JsonValue {
        let mut feature = Map::new();
        feature.insert("type".to_string(), json!("Feature"));
        if let Some(id) = self.id {
            feature.insert("id".to_string(), id);
        }
        feature.insert("geometry".to_string(), self.geometry);
        feature.insert(
            "properties".to_string(),
            self.properties.map_or(JsonValue::Null, JsonValue::Object),
        );
        JsonValue::Object(feature)
    }
}

/// Builder for a GeoJSON feature collection.
///
/// # Examples
///
/// ```
/// use hgss_test::fixtures::builders::{CollectionBuilder, FeatureBuilder};
///
/// let text = CollectionBuilder::new()
///     .feature(FeatureBuilder::point(0.0, 0.0).build())
///     .to_json_string();
///
/// assert!(text.contains("FeatureCollection"));
/// ```
#[derive(Debug, Clone)]
pub struct CollectionBuilder {
    collection_type: String,
    features: Vec<JsonValue>,
}

impl Default for CollectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionBuilder {
    pub fn new() -> Self {
        Self {
            collection_type: "FeatureCollection".to_string(),
            features: Vec::new(),
        }
    }

    /// Override the top-level `type` member.
    pub fn collection_type(mut self, collection_type: impl Into<String>) -> Self {
        self.collection_type = collection_type.into();
        self
    }

    pub fn feature(mut self, feature: JsonValue) -> Self {
        self.features.push(feature);
        self
    }

    pub fn features(mut self, features: impl IntoIterator<Item = JsonValue>) -> Self {
        self.features.extend(features);
        self
    }

    pub fn build(self) -> JsonValue {
        json!({
            "type": self.collection_type,
            "features": self.features,
        })
    }

    pub fn to_json_string(self) -> String {
        self.build().to_string()
    }
}
