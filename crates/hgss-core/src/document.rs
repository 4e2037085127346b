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

//! Document structure for HGSS.

use crate::error::ValidationError;
use crate::geometry::Geometry;
use crate::traverse::{traverse, DocumentVisitor, VisitorContext};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::collections::{BTreeMap, HashSet};
use std::convert::Infallible;

/// The literal document `type` of every HGSS document.
pub const HGSS_TYPE: &str = "HGSS";
/// The version written by the converters.
pub const HGSS_VERSION: &str = "1.0";
/// Node type of container nodes.
pub const GROUP_TYPE: &str = "Group";
/// Id of the synthetic root node built by the converters.
pub const ROOT_ID: &str = "root";

/// Style-property name to value (e.g. `fill`, `stroke-width`, `styleUrl`).
pub type StyleProperties = Map<String, JsonValue>;

/// A node in the HGSS tree.
///
/// Group nodes own an ordered list of children; leaf features carry a
/// geometry. The model does not forbid a node having both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// A geometry type tag, `"Group"`, or empty for an unclassified leaf.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub node_type: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,
    /// Secondary label coordinates, distinct from the geometry.
    #[serde(default, skip_serializing_if = "is_absent_or_empty")]
    pub coordinates: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(default, skip_serializing_if = "is_absent_or_empty_map")]
    pub style: Option<StyleProperties>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node with an id and a type.
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            ..Self::default()
        }
    }

    /// Create an empty `"Group"` node.
    pub fn group(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new(id, GROUP_TYPE)
        }
    }

    /// Create a leaf feature typed after its geometry.
    pub fn feature(id: impl Into<String>, geometry: Geometry) -> Self {
        let node_type = geometry.geometry_type.clone();
        Self {
            geometry: Some(geometry),
            ..Self::new(id, node_type)
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_coordinates(mut self, coordinates: Vec<f64>) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn with_style(mut self, style: StyleProperties) -> Self {
        self.style = Some(style);
        self
    }

    /// Append a child node.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn is_group(&self) -> bool {
        self.node_type == GROUP_TYPE
    }

    pub fn has_geometry(&self) -> bool {
        self.geometry.is_some()
    }
}

/// An HGSS document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub doc_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,
    /// Style key (e.g. `#zoneStyle`) to style properties.
    #[serde(default, deserialize_with = "null_as_default")]
    pub styles: BTreeMap<String, StyleProperties>,
    /// Serialized as `null` when absent so it round-trips into
    /// [`ValidationError::MissingRoot`].
    #[serde(default)]
    pub root: Option<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty `HGSS` document at the current version, without root.
    pub fn new() -> Self {
        Self {
            doc_type: HGSS_TYPE.to_string(),
            version: HGSS_VERSION.to_string(),
            name: String::new(),
            description: String::new(),
            styles: BTreeMap::new(),
            root: None,
        }
    }

    /// Create a document owning `root`.
    pub fn with_root(root: Node) -> Self {
        Self {
            root: Some(root),
            ..Self::new()
        }
    }

    /// Check the document-level invariants, in order: type, version, root.
    ///
    /// Only the first failure is returned. Node contents (id uniqueness,
    /// type tags) are not checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.doc_type != HGSS_TYPE {
            return Err(ValidationError::InvalidType {
                found: self.doc_type.clone(),
            });
        }
        if self.version.is_empty() {
            return Err(ValidationError::MissingVersion);
        }
        if self.root.is_none() {
            return Err(ValidationError::MissingRoot);
        }
        Ok(())
    }

    /// Ids that occur more than once in the tree, in order of first repeat.
    ///
    /// The converters never call this; it is an explicit post-pass for
    /// callers that need unique ids.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut collector = DuplicateIds::default();
        match traverse(self, &mut collector) {
            Ok(()) => collector.duplicates,
            Err(never) => match never {},
        }
    }

    /// Look up a style by key.
    pub fn get_style(&self, key: &str) -> Option<&StyleProperties> {
        self.styles.get(key)
    }
}

#[derive(Default)]
struct DuplicateIds<'a> {
    seen: HashSet<&'a str>,
    reported: HashSet<&'a str>,
    duplicates: Vec<String>,
}

impl<'a> DocumentVisitor<'a> for DuplicateIds<'a> {
    type Error = Infallible;

    fn visit_node(&mut self, node: &'a Node, _ctx: &VisitorContext<'a>) -> Result<(), Infallible> {
        let id = node.id.as_str();
        if !self.seen.insert(id) && self.reported.insert(id) {
            self.duplicates.push(id.to_string());
        }
        Ok(())
    }
}

/// Deserialize a field so that JSON `null` reads as the type's default.
///
/// Use with `#[serde(default, deserialize_with = "hgss_core::null_as_default")]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_absent_or_empty(coordinates: &Option<Vec<f64>>) -> bool {
    coordinates.as_ref().map_or(true, Vec::is_empty)
}

fn is_absent_or_empty_map(style: &Option<StyleProperties>) -> bool {
    style.as_ref().map_or(true, Map::is_empty)
}
