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

//! GeoJSON feature-collection model.

use hgss_core::{null_as_default, Geometry};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// `type` of a feature collection.
pub const FEATURE_COLLECTION_TYPE: &str = "FeatureCollection";
/// `type` of a feature.
pub const FEATURE_TYPE: &str = "Feature";

/// Free-form feature properties.
pub type Properties = Map<String, JsonValue>;

/// A GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub collection_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<Feature>,
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            collection_type: FEATURE_COLLECTION_TYPE.to_string(),
            features,
        }
    }
}

/// A GeoJSON `Feature`.
///
/// `id` may be any JSON scalar; `geometry` and `properties` may be `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub feature_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Properties>,
}

impl Feature {
    pub fn new(geometry: Option<Geometry>, properties: Properties) -> Self {
        Self {
            feature_type: FEATURE_TYPE.to_string(),
            id: None,
            geometry,
            properties: Some(properties),
        }
    }

    /// A property by key, treating `null` properties as empty.
    pub fn property(&self, key: &str) -> Option<&JsonValue> {
        self.properties.as_ref().and_then(|props| props.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feature_null_members() {
        let feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "id": null,
            "geometry": null,
            "properties": null
        }))
        .unwrap();

        assert!(feature.id.is_none());
        assert!(feature.geometry.is_none());
        assert!(feature.property("name").is_none());
    }

    #[test]
    fn test_feature_missing_members() {
        let feature: Feature = serde_json::from_value(json!({"type": "Feature"})).unwrap();
        assert!(feature.geometry.is_none());
        assert!(feature.properties.is_none());
    }

    #[test]
    fn test_numeric_id_is_kept_as_json() {
        let feature: Feature = serde_json::from_value(json!({"type": "Feature", "id": 7})).unwrap();
        assert_eq!(feature.id, Some(json!(7)));
    }

    #[test]
    fn test_serialize_omits_missing_id() {
        let feature = Feature::new(Some(Geometry::point(1.0, 2.0)), Properties::new());
        let value = serde_json::to_value(&feature).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["geometry"]["coordinates"], json!([1.0, 2.0]));
        assert_eq!(value["properties"], json!({}));
    }

    #[test]
    fn test_null_collection_members_read_as_empty() {
        let collection: FeatureCollection =
            serde_json::from_value(json!({"type": null, "features": null})).unwrap();
        assert_eq!(collection.collection_type, "");
        assert!(collection.features.is_empty());
    }

    #[test]
    fn test_collection_shape() {
        let value = serde_json::to_value(FeatureCollection::default()).unwrap();
        assert_eq!(value, json!({"type": "FeatureCollection", "features": []}));
    }
}
