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

//! End-to-end tests for the byte-level conversion driver.

use hgss::{convert, parse_hgss, validate, ConvertOptions, Format, HgssErrorKind};
use hgss_test::fixtures::{self, errors};
use proptest::prelude::*;
use serde_json::Value as JsonValue;

fn run(input: &str, from: Format, to: Format) -> Result<JsonValue, hgss::HgssError> {
    let bytes = convert(input.as_bytes(), from, to, &ConvertOptions::default())?;
    Ok(serde_json::from_slice(&bytes).unwrap())
}

// ===== Pairings =====

#[test]
fn test_unsupported_pairings_rejected_before_parsing() {
    let unsupported = [
        (Format::GeoJson, Format::GeoJson),
        (Format::GeoJson, Format::Kml),
        (Format::Kml, Format::GeoJson),
        (Format::Kml, Format::Kml),
        (Format::Hgss, Format::Hgss),
        (Format::Hgss, Format::Kml),
    ];
    for (from, to) in unsupported {
        let err = convert(b"\xff not even utf-8", from, to, &ConvertOptions::default()).unwrap_err();
        assert_eq!(err.kind, HgssErrorKind::UnsupportedConversion, "{} -> {}", from, to);
    }
}

#[test]
fn test_geojson_to_hgss() {
    let value = run(fixtures::sample_geojson(), Format::GeoJson, Format::Hgss).unwrap();

    assert_eq!(value["type"], "HGSS");
    assert_eq!(value["version"], "1.0");
    assert_eq!(value["styles"], serde_json::json!({}));
    assert_eq!(value["root"]["id"], "root");
    assert_eq!(value["root"]["children"][0]["id"], "sample_point");
    assert_eq!(value["root"]["children"][1]["id"], "feature_1");
}

#[test]
fn test_kml_to_hgss() {
    let value = run(fixtures::sample_kml(), Format::Kml, Format::Hgss).unwrap();

    let zones = &value["root"]["children"][0];
    assert_eq!(zones["name"], "Zones");
    assert_eq!(zones["children"][0]["type"], "Polygon");
    assert_eq!(zones["children"][1]["type"], "Point");
    assert_eq!(value["styles"]["#zoneStyle"]["fill"], "#cccccc");
}

#[test]
fn test_hgss_to_geojson() {
    let value = run(fixtures::sample_hgss(), Format::Hgss, Format::GeoJson).unwrap();

    assert_eq!(value["type"], "FeatureCollection");
    let features = value["features"].as_array().unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["id"], "zone_a");
    assert_eq!(features[1]["properties"]["name"], "Point of Interest");
}

#[test]
fn test_kml_through_hgss_to_geojson() {
    let hgss = convert(
        fixtures::sample_kml().as_bytes(),
        Format::Kml,
        Format::Hgss,
        &ConvertOptions::default(),
    )
    .unwrap();
    let geojson = convert(&hgss, Format::Hgss, Format::GeoJson, &ConvertOptions::default()).unwrap();
    let value: JsonValue = serde_json::from_slice(&geojson).unwrap();

    let ids: Vec<_> = value["features"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["zone_a", "point_of_interest"]);
}

// ===== Errors =====

#[test]
fn test_invalid_hgss_is_invalid_document() {
    for (name, text) in errors::invalid_hgss_samples() {
        let err = run(text, Format::Hgss, Format::GeoJson).unwrap_err();
        assert_eq!(err.kind, HgssErrorKind::InvalidDocument, "{}", name);
        assert!(validate(text).is_err(), "{}", name);
    }
}

#[test]
fn test_malformed_inputs_are_parse_failures() {
    for (name, text) in errors::invalid_geojson_samples() {
        let err = run(text, Format::GeoJson, Format::Hgss).unwrap_err();
        assert_eq!(err.kind, HgssErrorKind::ParseFailure, "geojson {}", name);
    }
    for (name, text) in errors::invalid_kml_samples() {
        let err = run(text, Format::Kml, Format::Hgss).unwrap_err();
        assert_eq!(err.kind, HgssErrorKind::ParseFailure, "kml {}", name);
    }
    let err = run("{\"type\": \"HGSS\",", Format::Hgss, Format::GeoJson).unwrap_err();
    assert_eq!(err.kind, HgssErrorKind::ParseFailure);
}

// ===== Options =====

#[test]
fn test_compact_output() {
    let options = ConvertOptions { pretty: false };
    let pretty = convert(
        fixtures::sample_geojson().as_bytes(),
        Format::GeoJson,
        Format::Hgss,
        &ConvertOptions::default(),
    )
    .unwrap();
    let compact = convert(
        fixtures::sample_geojson().as_bytes(),
        Format::GeoJson,
        Format::Hgss,
        &options,
    )
    .unwrap();

    assert!(!compact.contains(&b'\n'));
    assert!(compact.len() < pretty.len());
    assert_eq!(
        serde_json::from_slice::<JsonValue>(&compact).unwrap(),
        serde_json::from_slice::<JsonValue>(&pretty).unwrap()
    );
}

#[test]
fn test_converted_hgss_parses_back_into_same_document() {
    let bytes = convert(
        fixtures::sample_kml().as_bytes(),
        Format::Kml,
        Format::Hgss,
        &ConvertOptions::default(),
    )
    .unwrap();
    let doc = parse_hgss(std::str::from_utf8(&bytes).unwrap()).unwrap();
    assert_eq!(doc, hgss::kml::kml_to_hgss(fixtures::sample_kml()).unwrap());
}

proptest! {
    #[test]
    fn prop_unknown_formats_rejected(name in "[a-z]{1,10}") {
        prop_assume!(!["geojson", "kml", "hgss"].contains(&name.as_str()));
        let err = name.parse::<Format>().unwrap_err();
        prop_assert_eq!(err.kind, HgssErrorKind::UnsupportedConversion);
    }
}
