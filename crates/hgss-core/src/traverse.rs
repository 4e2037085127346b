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

//! Pre-order traversal of the HGSS node tree.
//!
//! Converters and analysis passes implement [`DocumentVisitor`] and let
//! [`traverse`] drive the recursion. Nodes are visited before their
//! children, and children in document order.
//!
//! # Example
//!
//! ```rust
//! use hgss_core::traverse::{traverse, DocumentVisitor, VisitorContext};
//! use hgss_core::{Document, Node};
//! use std::convert::Infallible;
//!
//! #[derive(Default)]
//! struct Ids(Vec<String>);
//!
//! impl<'a> DocumentVisitor<'a> for Ids {
//!     type Error = Infallible;
//!
//!     fn visit_node(&mut self, node: &'a Node, _ctx: &VisitorContext<'a>) -> Result<(), Infallible> {
//!         self.0.push(node.id.clone());
//!         Ok(())
//!     }
//! }
//!
//! let mut root = Node::group("root", "");
//! root.add_child(Node::new("a", "Point"));
//! let mut ids = Ids::default();
//! traverse(&Document::with_root(root), &mut ids).unwrap();
//! assert_eq!(ids.0, vec!["root", "a"]);
//! ```

use crate::{Document, Node};
use std::convert::Infallible;

/// Position of the node being visited.
#[derive(Debug, Clone, Default)]
pub struct VisitorContext<'a> {
    /// Nesting depth (0 = root node).
    pub depth: usize,
    /// Ids of the ancestors of the current node, outermost first.
    pub path: Vec<&'a str>,
}

impl<'a> VisitorContext<'a> {
    /// Context for the root node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a child of the node with id `parent_id`.
    pub fn child(&self, parent_id: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(parent_id);
        Self {
            depth: self.depth + 1,
            path,
        }
    }

    /// The ancestor path as a string (for diagnostics).
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            "root".to_string()
        } else {
            self.path.join("/")
        }
    }
}

/// Visitor over the nodes of an HGSS document.
///
/// Only [`visit_node`](DocumentVisitor::visit_node) is required.
pub trait DocumentVisitor<'a> {
    /// Error type returned by visitor methods.
    type Error;

    /// Called before the root node is visited.
    fn begin_document(&mut self, _doc: &'a Document) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after the whole tree has been visited.
    fn end_document(&mut self, _doc: &'a Document) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for every node, parents before children.
    fn visit_node(&mut self, node: &'a Node, ctx: &VisitorContext<'a>) -> Result<(), Self::Error>;

    /// Called before the children of a node with at least one child.
    fn begin_children(
        &mut self,
        _node: &'a Node,
        _ctx: &VisitorContext<'a>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after the children of a node with at least one child.
    fn end_children(
        &mut self,
        _node: &'a Node,
        _ctx: &VisitorContext<'a>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Walk every node of `doc` in pre-order.
///
/// A document without root only sees `begin_document` / `end_document`.
pub fn traverse<'a, V: DocumentVisitor<'a>>(
    doc: &'a Document,
    visitor: &mut V,
) -> Result<(), V::Error> {
    visitor.begin_document(doc)?;
    if let Some(root) = &doc.root {
        traverse_node(root, visitor, &VisitorContext::new())?;
    }
    visitor.end_document(doc)
}

/// Walk the subtree rooted at `node` in pre-order.
pub fn traverse_node<'a, V: DocumentVisitor<'a>>(
    node: &'a Node,
    visitor: &mut V,
    ctx: &VisitorContext<'a>,
) -> Result<(), V::Error> {
    visitor.visit_node(node, ctx)?;

    if !node.children.is_empty() {
        visitor.begin_children(node, ctx)?;
        let child_ctx = ctx.child(&node.id);
        for child in &node.children {
            traverse_node(child, visitor, &child_ctx)?;
        }
        visitor.end_children(node, ctx)?;
    }

    Ok(())
}

/// Node counts of a document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatsCollector {
    /// All nodes, including the root.
    pub node_count: usize,
    /// Nodes typed `"Group"`.
    pub group_count: usize,
    /// Nodes carrying a geometry (what HGSS → GeoJSON emits).
    pub feature_count: usize,
    /// Nodes with an empty type.
    pub unclassified_count: usize,
    /// Deepest node depth (root = 0).
    pub max_depth: usize,
}

impl StatsCollector {
    /// Collect statistics for `doc`.
    pub fn collect(doc: &Document) -> Self {
        let mut stats = Self::default();
        match traverse(doc, &mut stats) {
            Ok(()) => stats,
            Err(never) => match never {},
        }
    }
}

impl<'a> DocumentVisitor<'a> for StatsCollector {
    type Error = Infallible;

    fn visit_node(&mut self, node: &'a Node, ctx: &VisitorContext<'a>) -> Result<(), Infallible> {
        self.node_count += 1;
        if node.is_group() {
            self.group_count += 1;
        }
        if node.has_geometry() {
            self.feature_count += 1;
        }
        if node.node_type.is_empty() {
            self.unclassified_count += 1;
        }
        self.max_depth = self.max_depth.max(ctx.depth);
        Ok(())
    }
}
