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

//! HGSS KML Conversion
//!
//! Converts KML documents into HGSS. The conversion is one-directional.
//!
//! - Every top-level `Folder` becomes a `"Group"` child of the root
//! - Placemarks become `Point` or `Polygon` leaves
//! - `Style` elements become entries of the document `styles` map, keyed
//!   `#<id>`, with KML `AABBGGRR` colors rewritten as `#RRGGBB`
//!
//! # Examples
//!
//! ```rust
//! use hgss_kml::{from_kml, FromKmlConfig};
//!
//! let kml = r#"<kml><Document><name>Demo</name>
//!   <Folder><name>My Places</name>
//!     <Placemark><name>Home</name><Point><coordinates>4.9,52.37,0</coordinates></Point></Placemark>
//!   </Folder>
//! </Document></kml>"#;
//!
//! let doc = from_kml(kml, &FromKmlConfig::default()).unwrap();
//! let root = doc.root.as_ref().unwrap();
//! assert_eq!(root.name, "Demo");
//! assert_eq!(root.children[0].id, "my_places");
//! assert_eq!(root.children[0].children[0].node_type, "Point");
//! ```

mod error;
mod from_kml;
mod helpers;
pub mod reader;

pub use error::KmlError;
pub use from_kml::{from_kml, style_properties, FromKmlConfig, DEFAULT_MAX_FOLDER_DEPTH};
pub use helpers::{generate_id, kml_color_to_hex, parse_coordinates, FALLBACK_COLOR};

use hgss_core::Document;

/// Convert KML text to an HGSS document with the default configuration.
pub fn kml_to_hgss(kml: &str) -> Result<Document, KmlError> {
    from_kml(kml, &FromKmlConfig::default())
}
