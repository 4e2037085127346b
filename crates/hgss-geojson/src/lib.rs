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

//! HGSS GeoJSON Conversion
//!
//! Converts between a flat GeoJSON `FeatureCollection` and the hierarchical
//! HGSS document model.
//!
//! - **GeoJSON → HGSS**: every feature becomes one child of a `"Group"` root
//! - **HGSS → GeoJSON**: every node carrying a geometry becomes one feature,
//!   in pre-order
//!
//! Only `name`, `description` and `label_coordinates` survive the trip through
//! HGSS; other feature properties are dropped.
//!
//! # Examples
//!
//! ```rust
//! use hgss_geojson::{geojson_to_hgss, hgss_to_geojson};
//!
//! let geojson = r#"{
//!     "type": "FeatureCollection",
//!     "features": [{
//!         "type": "Feature",
//!         "id": "poi",
//!         "geometry": {"type": "Point", "coordinates": [19.94, 50.06]},
//!         "properties": {"name": "POI"}
//!     }]
//! }"#;
//!
//! let doc = geojson_to_hgss(geojson).unwrap();
//! let root = doc.root.as_ref().unwrap();
//! assert_eq!(root.children[0].id, "poi");
//! assert_eq!(root.children[0].node_type, "Point");
//!
//! let back = hgss_to_geojson(&doc).unwrap();
//! assert!(back.contains("\"poi\""));
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use hgss_geojson::{from_geojson_str, to_geojson, to_geojson_string, FromGeoJsonConfig, ToGeoJsonConfig};
//!
//! let config = FromGeoJsonConfig::builder().version("1.1").build();
//! let doc = from_geojson_str(r#"{"type": "FeatureCollection", "features": []}"#, &config).unwrap();
//! assert_eq!(doc.version, "1.1");
//!
//! let compact = to_geojson_string(&to_geojson(&doc), &ToGeoJsonConfig { pretty: false }).unwrap();
//! assert_eq!(compact, r#"{"type":"FeatureCollection","features":[]}"#);
//! ```

mod error;
mod from_geojson;
mod model;
mod to_geojson;

pub use error::GeoJsonError;
pub use from_geojson::{
    feature_to_node, from_geojson, from_geojson_str, FromGeoJsonConfig, FromGeoJsonConfigBuilder,
};
pub use model::{Feature, FeatureCollection, Properties, FEATURE_COLLECTION_TYPE, FEATURE_TYPE};
pub use to_geojson::{node_to_feature, to_geojson, to_geojson_string, ToGeoJsonConfig};

use hgss_core::Document;

/// Convert GeoJSON text to an HGSS document.
pub fn geojson_to_hgss(geojson: &str) -> Result<Document, GeoJsonError> {
    from_geojson_str(geojson, &FromGeoJsonConfig::default())
}

/// Validate an HGSS document and flatten it into pretty-printed GeoJSON.
pub fn hgss_to_geojson(doc: &Document) -> Result<String, GeoJsonError> {
    doc.validate()?;
    to_geojson_string(&to_geojson(doc), &ToGeoJsonConfig::default())
}
