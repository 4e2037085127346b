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

//! GeoJSON to HGSS conversion

use crate::error::GeoJsonError;
use crate::model::{Feature, FeatureCollection, FEATURE_COLLECTION_TYPE};
use hgss_core::{node_type_for, Document, Node, GROUP_TYPE, HGSS_VERSION, ROOT_ID};
use serde_json::Value as JsonValue;
use tracing::{debug, trace, warn};

/// Configuration for GeoJSON import
///
/// # Examples
///
/// ```rust
/// use hgss_geojson::FromGeoJsonConfig;
///
/// let config = FromGeoJsonConfig::default();
/// assert_eq!(config.version, "1.0");
///
/// let config = FromGeoJsonConfig::builder().version("2.0").build();
/// assert_eq!(config.version, "2.0");
/// ```
#[derive(Debug, Clone)]
pub struct FromGeoJsonConfig {
    /// Version string written into the document
    pub version: String,
}

impl Default for FromGeoJsonConfig {
    fn default() -> Self {
        Self {
            version: HGSS_VERSION.to_string(),
        }
    }
}

impl FromGeoJsonConfig {
    /// Create a new builder for configuring GeoJSON import
    pub fn builder() -> FromGeoJsonConfigBuilder {
        FromGeoJsonConfigBuilder::default()
    }
}

/// Builder for `FromGeoJsonConfig`
#[derive(Debug, Clone, Default)]
pub struct FromGeoJsonConfigBuilder {
    config: FromGeoJsonConfig,
}

impl FromGeoJsonConfigBuilder {
    /// Set the HGSS version to write
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> FromGeoJsonConfig {
        self.config
    }
}

/// Parse GeoJSON text and convert it to an HGSS document
///
/// # Errors
///
/// Returns [`GeoJsonError::Parse`] when the text is not a feature collection.
pub fn from_geojson_str(
    geojson: &str,
    config: &FromGeoJsonConfig,
) -> Result<Document, GeoJsonError> {
    let collection: FeatureCollection =
        serde_json::from_str(geojson).map_err(|e| GeoJsonError::Parse(e.to_string()))?;
    from_geojson(&collection, config)
}

/// Convert a feature collection to an HGSS document
///
/// The root is a `"Group"` node with id `"root"` holding one child per
/// feature, in input order. Property values of the wrong type are ignored
/// rather than reported, so a well-formed collection always converts.
pub fn from_geojson(
    collection: &FeatureCollection,
    config: &FromGeoJsonConfig,
) -> Result<Document, GeoJsonError> {
    if collection.collection_type != FEATURE_COLLECTION_TYPE {
        warn!(
            found = %collection.collection_type,
            "GeoJSON type is not FeatureCollection, converting anyway"
        );
    }

    let mut root = Node::new(ROOT_ID, GROUP_TYPE);
    root.children = collection
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| feature_to_node(index, feature))
        .collect();

    debug!(features = root.children.len(), "converted GeoJSON to HGSS");

    let mut doc = Document::with_root(root);
    doc.version = config.version.clone();
    Ok(doc)
}

/// Convert one feature at position `index` to an HGSS node
///
/// Only a string `id` is kept; anything else is replaced by
/// `feature_<index>`.
pub fn feature_to_node(index: usize, feature: &Feature) -> Node {
    let id = match &feature.id {
        Some(JsonValue::String(id)) => id.clone(),
        _ => format!("feature_{}", index),
    };

    let node_type = feature
        .geometry
        .as_ref()
        .map_or_else(|| GROUP_TYPE.to_string(), |g| node_type_for(&g.geometry_type));

    trace!(index, id = %id, node_type = %node_type, "feature");

    Node {
        id,
        node_type,
        name: string_property(feature, "name"),
        description: string_property(feature, "description"),
        coordinates: feature.property("label_coordinates").and_then(label_coordinates),
        geometry: feature.geometry.clone(),
        ..Node::default()
    }
}

fn string_property(feature: &Feature, key: &str) -> String {
    match feature.property(key) {
        Some(JsonValue::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Numeric entries are kept, anything else becomes `0.0`.
fn label_coordinates(value: &JsonValue) -> Option<Vec<f64>> {
    value
        .as_array()
        .map(|items| items.iter().map(|v| v.as_f64().unwrap_or(0.0)).collect())
}
