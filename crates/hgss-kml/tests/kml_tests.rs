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

//! KML → HGSS conversion tests against the shared fixtures.

use hgss_core::{Geometry, HgssError, HgssErrorKind, StatsCollector};
use hgss_kml::{from_kml, kml_to_hgss, FromKmlConfig, KmlError};
use hgss_test::fixtures::{self, errors};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_all_kml_fixtures_convert_to_valid_documents() {
    for (name, text) in fixtures::all_kml() {
        let doc = kml_to_hgss(text).unwrap_or_else(|e| panic!("{}: {}", name, e));
        assert!(doc.validate().is_ok(), "{}", name);
        assert_eq!(doc.version, "1.0", "{}", name);
    }
}

#[test]
fn test_sample_kml_tree() {
    let doc = kml_to_hgss(fixtures::sample_kml()).unwrap();
    let root = doc.root.as_ref().unwrap();

    assert_eq!(root.id, "root");
    assert_eq!(root.node_type, "Group");
    assert_eq!(root.name, "Krakow Zones");
    assert!(doc.name.is_empty());
    assert_eq!(root.children.len(), 1);

    let zones = &root.children[0];
    assert_eq!(zones.id, "zones");
    assert_eq!(zones.node_type, "Group");
    assert_eq!(zones.name, "Zones");
    assert_eq!(zones.children.len(), 2);

    let zone_a = &zones.children[0];
    assert_eq!(zone_a.id, "zone_a");
    assert_eq!(zone_a.node_type, "Polygon");
    assert_eq!(zone_a.description, "First zone");
    assert_eq!(
        zone_a.geometry,
        Some(Geometry::polygon(&[
            [19.938, 50.0],
            [19.95, 50.0],
            [19.95, 50.01],
            [19.938, 50.0]
        ]))
    );
    assert_eq!(zone_a.style.as_ref().unwrap()["styleUrl"], "#zoneStyle");

    let poi = &zones.children[1];
    assert_eq!(poi.id, "point_of_interest");
    assert_eq!(poi.node_type, "Point");
    assert_eq!(poi.geometry, Some(Geometry::point(19.944, 50.005)));
}

#[test]
fn test_sample_kml_styles() {
    let doc = kml_to_hgss(fixtures::sample_kml()).unwrap();

    assert_eq!(
        serde_json::to_value(doc.get_style("#zoneStyle").unwrap()).unwrap(),
        json!({"fill": "#cccccc", "fill-opacity": 1.0, "stroke": "#444444", "stroke-width": 2.0})
    );
    assert_eq!(
        serde_json::to_value(doc.get_style("#poiStyle").unwrap()).unwrap(),
        json!({"stroke": "#ff0000"})
    );
}

#[test]
fn test_styled_kml() {
    let doc = kml_to_hgss(fixtures::styled_kml()).unwrap();

    assert_eq!(doc.styles.len(), 3);
    let full = doc.get_style("#full").unwrap();
    assert_eq!(full["fill"], "#0080ff");
    assert_eq!(full["fill-opacity"], 1.0);
    assert_eq!(full["stroke"], "#00ff00");
    assert_eq!(full["stroke-width"], 3.5);

    let no_fill = doc.get_style("#noFill").unwrap();
    assert_eq!(no_fill["fill"], "#000000");
    assert!(no_fill.get("fill-opacity").is_none());

    assert!(doc.get_style("#empty").unwrap().is_empty());
    assert!(doc.root.unwrap().children.is_empty());
}

#[test]
fn test_nested_kml_order_and_skipped_placemarks() {
    let doc = kml_to_hgss(fixtures::nested_kml()).unwrap();
    let root = doc.root.as_ref().unwrap();

    let top: Vec<_> = root.children.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(top, vec!["outer_folder", "second"]);

    let outer = &root.children[0];
    let ids: Vec<_> = outer.children.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["outer_point", "no_geometry", "inner_folder"]);

    let no_geometry = &outer.children[1];
    assert_eq!(no_geometry.node_type, "");
    assert!(no_geometry.geometry.is_none());
    assert_eq!(no_geometry.description, "Just text");

    let deep = &outer.children[2].children[0];
    assert_eq!(deep.geometry, Some(Geometry::point(1.5, 2.5)));

    let stats = StatsCollector::collect(&doc);
    assert_eq!(stats.node_count, 7);
    assert_eq!(stats.group_count, 4);
    assert_eq!(stats.feature_count, 2);
    assert_eq!(stats.unclassified_count, 1);
    assert_eq!(stats.max_depth, 3);
}

#[test]
fn test_namespaced_kml() {
    let doc = kml_to_hgss(fixtures::NAMESPACED_KML).unwrap();
    let root = doc.root.as_ref().unwrap();
    assert_eq!(root.name, "Prefixed");

    let station = &root.children[0].children[0];
    assert_eq!(root.children[0].id, "layer_one");
    assert_eq!(station.description, "<b>Bold</b> text");
    assert_eq!(station.geometry, Some(Geometry::point(10.5, 20.25)));
}

#[test]
fn test_serialized_shape() {
    let doc = kml_to_hgss(fixtures::sample_kml()).unwrap();
    let value = serde_json::to_value(&doc).unwrap();

    assert_eq!(value["type"], "HGSS");
    assert!(value.get("name").is_none());
    let poi = &value["root"]["children"][0]["children"][1];
    assert!(poi.get("description").is_none());
    assert!(poi.get("children").is_none());
    assert_eq!(poi["geometry"]["coordinates"], json!([19.944, 50.005]));
}

#[test]
fn test_invalid_kml_samples_fail() {
    for (name, text) in errors::invalid_kml_samples() {
        let err = kml_to_hgss(text).expect_err(name);
        assert_eq!(HgssError::from(err).kind, HgssErrorKind::ParseFailure, "{}", name);
    }
}

#[test]
fn test_configured_depth_and_version() {
    let config = FromKmlConfig {
        version: "2.0".to_string(),
        max_folder_depth: 1,
    };
    assert_eq!(
        from_kml(fixtures::nested_kml(), &config).unwrap_err(),
        KmlError::FolderDepthExceeded { max: 1 }
    );

    let doc = from_kml(fixtures::sample_kml(), &config).unwrap();
    assert_eq!(doc.version, "2.0");
}

fn nested_folders(depth: usize) -> String {
    format!(
        "<kml><Document>{}<Placemark><name>Leaf</name></Placemark>{}</Document></kml>",
        "<Folder><name>f</name>".repeat(depth),
        "</Folder>".repeat(depth)
    )
}

#[test]
fn test_deep_folders_accepted_by_default() {
    let doc = kml_to_hgss(&nested_folders(101)).unwrap();
    let stats = StatsCollector::collect(&doc);
    assert_eq!(stats.group_count, 102);
    assert_eq!(stats.max_depth, 102);
}

#[test]
fn test_deep_folders_rejected_by_default() {
    // Recursion at this depth needs more than the default test thread stack
    let handle = std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(|| kml_to_hgss(&nested_folders(1001)))
        .unwrap();
    assert!(matches!(
        handle.join().unwrap(),
        Err(KmlError::FolderDepthExceeded { max: 1000 })
    ));
}

#[test]
fn test_non_finite_values_never_serialize_as_null() {
    let kml = r#"<kml><Document>
        <Style id="s"><LineStyle><color>ff444444</color><width>inf</width></LineStyle></Style>
        <Folder><name>F</name>
            <Placemark><name>Bad</name><Point><coordinates>NaN,50</coordinates></Point></Placemark>
        </Folder>
    </Document></kml>"#;
    let doc = kml_to_hgss(kml).unwrap();
    let value = serde_json::to_value(&doc).unwrap();

    assert_eq!(value["styles"]["#s"], json!({"stroke": "#444444"}));
    let bad = &value["root"]["children"][0]["children"][0];
    assert_eq!(bad["id"], "bad");
    assert!(bad.get("geometry").is_none());
}

proptest! {
    #[test]
    fn prop_points_survive(points in proptest::collection::vec(
        ("[A-Za-z][A-Za-z ]{0,10}", -180.0f64..180.0, -90.0f64..90.0),
        1..10,
    )) {
        let placemarks: String = points
            .iter()
            .map(|(name, lon, lat)| format!(
                "<Placemark><name>{}</name><Point><coordinates>{},{},0</coordinates></Point></Placemark>",
                name, lon, lat
            ))
            .collect();
        let kml = format!("<kml><Document><Folder><name>F</name>{}</Folder></Document></kml>", placemarks);

        let doc = kml_to_hgss(&kml).unwrap();
        let folder = &doc.root.as_ref().unwrap().children[0];
        prop_assert_eq!(folder.children.len(), points.len());
        for (node, (name, lon, lat)) in folder.children.iter().zip(&points) {
            prop_assert_eq!(&node.name, name);
            prop_assert_eq!(node.geometry.clone(), Some(Geometry::point(*lon, *lat)));
        }
    }
}
