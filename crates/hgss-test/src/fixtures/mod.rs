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

//! Canonical test fixtures.
//!
//! - **geojson**: GeoJSON feature collections as text
//! - **kml**: KML documents as text
//! - **hgss**: HGSS documents, as text and as built trees
//! - **errors**: malformed inputs for every source format
//! - **builders**: builders for GeoJSON features and collections

pub mod builders;
pub mod errors;
mod geojson;
mod hgss;
mod kml;

pub use geojson::*;
pub use hgss::*;
pub use kml::*;

use crate::TextFixtureList;

/// All KML fixtures, for running one assertion across every sample.
pub fn all_kml() -> TextFixtureList {
    vec![
        ("sample_kml", SAMPLE_KML),
        ("nested_kml", NESTED_KML),
        ("styled_kml", STYLED_KML),
        ("namespaced_kml", NAMESPACED_KML),
    ]
}

/// All GeoJSON fixtures.
pub fn all_geojson() -> TextFixtureList {
    vec![
        ("sample_geojson", SAMPLE_GEOJSON),
        ("mixed_properties_geojson", MIXED_PROPERTIES_GEOJSON),
        ("all_geometries_geojson", ALL_GEOMETRIES_GEOJSON),
    ]
}
