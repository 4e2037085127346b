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

//! HGSS to GeoJSON conversion

use crate::error::GeoJsonError;
use crate::model::{Feature, FeatureCollection, Properties};
use hgss_core::traverse::{traverse, DocumentVisitor, VisitorContext};
use hgss_core::{Document, Node};
use serde_json::{json, Value as JsonValue};
use std::convert::Infallible;
use tracing::{debug, trace};

/// Configuration for GeoJSON output
#[derive(Debug, Clone)]
pub struct ToGeoJsonConfig {
    /// Indent the output (default: true)
    pub pretty: bool,
}

impl Default for ToGeoJsonConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Flatten an HGSS document into a feature collection
///
/// Every node with a geometry yields one feature, parents before their
/// descendants. Group nodes without geometry produce nothing themselves. The
/// document is not validated; a document without root gives an empty
/// collection.
pub fn to_geojson(doc: &Document) -> FeatureCollection {
    let mut emitter = FeatureEmitter::default();
    match traverse(doc, &mut emitter) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    debug!(features = emitter.features.len(), "flattened HGSS to GeoJSON");
    FeatureCollection::new(emitter.features)
}

/// Serialize a feature collection to GeoJSON text
pub fn to_geojson_string(
    collection: &FeatureCollection,
    config: &ToGeoJsonConfig,
) -> Result<String, GeoJsonError> {
    let result = if config.pretty {
        serde_json::to_string_pretty(collection)
    } else {
        serde_json::to_string(collection)
    };
    result.map_err(|e| GeoJsonError::Serialize(e.to_string()))
}

/// The feature for a node, if it carries a geometry
pub fn node_to_feature(node: &Node) -> Option<Feature> {
    let geometry = node.geometry.clone()?;

    let mut properties = Properties::new();
    properties.insert("name".to_string(), json!(node.name));
    properties.insert("description".to_string(), json!(node.description));
    if let Some(coordinates) = &node.coordinates {
        properties.insert("label_coordinates".to_string(), json!(coordinates));
    }

    let mut feature = Feature::new(Some(geometry), properties);
    if !node.id.is_empty() {
        feature.id = Some(JsonValue::String(node.id.clone()));
    }
    Some(feature)
}

#[derive(Default)]
struct FeatureEmitter {
    features: Vec<Feature>,
}

impl<'a> DocumentVisitor<'a> for FeatureEmitter {
    type Error = Infallible;

    fn visit_node(&mut self, node: &'a Node, ctx: &VisitorContext<'a>) -> Result<(), Infallible> {
        if let Some(feature) = node_to_feature(node) {
            trace!(id = %node.id, path = %ctx.path_string(), "feature");
            self.features.push(feature);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hgss_core::Geometry;

    #[test]
    fn test_missing_root_gives_empty_collection() {
        let collection = to_geojson(&Document::new());
        assert_eq!(collection.collection_type, "FeatureCollection");
        assert!(collection.features.is_empty());
    }

    #[test]
    fn test_groups_are_skipped() {
        let mut group = Node::group("g", "Group");
        group.add_child(Node::feature("a", Geometry::point(1.0, 2.0)));
        let mut root = Node::group("root", "");
        root.add_child(group);

        let collection = to_geojson(&Document::with_root(root));
        assert_eq!(collection.features.len(), 1);
        assert_eq!(collection.features[0].id, Some(json!("a")));
    }

    #[test]
    fn test_preorder_with_feature_owning_children() {
        let mut parent = Node::feature("parent", Geometry::point(0.0, 0.0));
        parent.add_child(Node::feature("child", Geometry::point(1.0, 1.0)));
        let mut root = Node::group("root", "");
        root.add_child(parent);
        root.add_child(Node::feature("sibling", Geometry::point(2.0, 2.0)));

        let ids: Vec<_> = to_geojson(&Document::with_root(root))
            .features
            .into_iter()
            .map(|f| f.id.unwrap())
            .collect();
        assert_eq!(ids, vec![json!("parent"), json!("child"), json!("sibling")]);
    }

    #[test]
    fn test_properties_always_have_name_and_description() {
        let feature = node_to_feature(&Node::feature("a", Geometry::point(0.0, 0.0))).unwrap();
        let props = feature.properties.unwrap();
        assert_eq!(props["name"], "");
        assert_eq!(props["description"], "");
        assert!(!props.contains_key("label_coordinates"));
    }

    #[test]
    fn test_label_coordinates_written_when_present() {
        let node = Node::feature("a", Geometry::point(0.0, 0.0)).with_coordinates(vec![3.0, 4.0]);
        let props = node_to_feature(&node).unwrap().properties.unwrap();
        assert_eq!(props["label_coordinates"], json!([3.0, 4.0]));
    }

    #[test]
    fn test_empty_id_omitted() {
        let feature = node_to_feature(&Node::feature("", Geometry::point(0.0, 0.0))).unwrap();
        assert!(feature.id.is_none());
        let text = to_geojson_string(
            &FeatureCollection::new(vec![feature]),
            &ToGeoJsonConfig { pretty: false },
        )
        .unwrap();
        assert!(!text.contains("\"id\""));
    }

    #[test]
    fn test_pretty_and_compact_output() {
        let collection = FeatureCollection::default();
        let pretty = to_geojson_string(&collection, &ToGeoJsonConfig::default()).unwrap();
        let compact = to_geojson_string(&collection, &ToGeoJsonConfig { pretty: false }).unwrap();
        assert!(pretty.contains('\n'));
        assert!(!compact.contains('\n'));
    }
}
