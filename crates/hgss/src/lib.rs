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

//! # HGSS - Hierarchical Geospatial Style Sheets
//!
//! HGSS is a tree-shaped JSON document format for geographic data: named
//! groups nest other groups and typed geometry leaves, and a shared style
//! table maps style keys to style properties.
//!
//! ## Quick Start
//!
//! ```rust
//! use hgss::{convert, ConvertOptions, Format};
//!
//! let geojson = br#"{"type": "FeatureCollection", "features": [
//!     {"type": "Feature", "geometry": {"type": "Point", "coordinates": [4.9, 52.37]},
//!      "properties": {"name": "Amsterdam"}}
//! ]}"#;
//!
//! let hgss = convert(geojson, Format::GeoJson, Format::Hgss, &ConvertOptions::default()).unwrap();
//! let back = convert(&hgss, Format::Hgss, Format::GeoJson, &ConvertOptions::default()).unwrap();
//! assert!(String::from_utf8(back).unwrap().contains("Amsterdam"));
//! ```
//!
//! ## Supported conversions
//!
//! | From      | To        |
//! |-----------|-----------|
//! | `geojson` | `hgss`    |
//! | `kml`     | `hgss`    |
//! | `hgss`    | `geojson` |
//!
//! Any other pairing is rejected with
//! [`HgssErrorKind::UnsupportedConversion`] before the input is read.
//!
//! ## Modules
//!
//! - [`geojson`]: GeoJSON conversion
//! - [`kml`]: KML conversion

pub use hgss_core::{
    // Model
    node_type_for,
    Document,
    Geometry,
    GeometryKind,
    Node,
    StyleProperties,
    // Errors
    HgssError,
    HgssErrorKind,
    HgssResult,
    ValidationError,
    // Traversal
    traverse,
    DocumentVisitor,
    StatsCollector,
    VisitorContext,
};

mod conversion;

pub use conversion::{convert, Conversion, ConvertOptions, Format};

/// GeoJSON conversion
pub mod geojson {
    pub use hgss_geojson::{
        from_geojson, from_geojson_str, geojson_to_hgss, hgss_to_geojson, to_geojson,
        to_geojson_string, Feature, FeatureCollection, FromGeoJsonConfig, GeoJsonError,
        ToGeoJsonConfig,
    };
}

/// KML conversion
pub mod kml {
    pub use hgss_kml::{
        from_kml, generate_id, kml_color_to_hex, kml_to_hgss, parse_coordinates, FromKmlConfig,
        KmlError, DEFAULT_MAX_FOLDER_DEPTH,
    };
}

/// Parse HGSS JSON text into a document.
///
/// The document is not validated.
///
/// # Examples
///
/// ```rust
/// use hgss::parse_hgss;
///
/// let doc = parse_hgss(r#"{"type": "HGSS", "version": "1.0", "root": null}"#).unwrap();
/// assert!(doc.validate().is_err());
/// ```
pub fn parse_hgss(text: &str) -> Result<Document, HgssError> {
    serde_json::from_str(text)
        .map_err(|e| HgssError::parse_failure(format!("HGSS parse error: {}", e)))
}

/// Serialize a document to HGSS JSON text.
pub fn to_hgss_string(doc: &Document, pretty: bool) -> Result<String, HgssError> {
    let result = if pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    };
    result.map_err(|e| HgssError::invalid_document(format!("HGSS serialization error: {}", e)))
}

/// Parse and validate HGSS JSON text.
///
/// # Examples
///
/// ```rust
/// use hgss::{validate, HgssErrorKind};
///
/// let err = validate(r#"{"type": "KML", "version": "1.0", "root": {"id": "root", "type": "Group"}}"#).unwrap_err();
/// assert_eq!(err.kind, HgssErrorKind::InvalidDocument);
/// ```
pub fn validate(text: &str) -> Result<Document, HgssError> {
    let doc = parse_hgss(text)?;
    doc.validate()?;
    Ok(doc)
}
