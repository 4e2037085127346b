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

//! Shared test fixtures for the HGSS format converters.
//!
//! # Quick Start
//!
//! ```rust
//! use hgss_test::fixtures;
//!
//! let geojson = fixtures::sample_geojson();     // two features, string + missing ids
//! let kml = fixtures::sample_kml();             // "Zones" folder with two placemarks
//! let doc = fixtures::nested_document();        // HGSS tree with groups and leaves
//!
//! use hgss_test::fixtures::builders::FeatureBuilder;
//!
//! let feature = FeatureBuilder::point(19.94, 50.06).name("POI").build();
//! assert_eq!(feature["properties"]["name"], "POI");
//! ```

pub mod fixtures;

/// Type alias for a list of named text fixtures.
pub type TextFixtureList = Vec<(&'static str, &'static str)>;
