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

//! Core data model for HGSS documents.
//!
//! HGSS is a hierarchical document format for geographic data: a single root
//! group node owns nested group nodes and typed geometry leaves. This crate
//! defines that model, its JSON shape, the structural validation rules, and a
//! visitor-based traversal shared by the format converters.
//!
//! # Example
//!
//! ```rust
//! use hgss_core::{Document, Geometry, Node};
//!
//! let mut root = Node::group("root", "");
//! root.add_child(Node::feature("poi", Geometry::point(19.94, 50.06)).with_name("POI"));
//!
//! let doc = Document::with_root(root);
//! assert!(doc.validate().is_ok());
//! ```

mod document;
mod error;
mod geometry;
pub mod traverse;

pub use document::{
    null_as_default, Document, Node, StyleProperties, GROUP_TYPE, HGSS_TYPE, HGSS_VERSION,
    ROOT_ID,
};
pub use error::{HgssError, HgssErrorKind, HgssResult, ValidationError};
pub use geometry::{node_type_for, Geometry, GeometryKind};
pub use traverse::{traverse, DocumentVisitor, StatsCollector, VisitorContext};
