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

//! Coordinate, color and id helpers.

/// Color used for any KML color that is not 8 characters long.
pub const FALLBACK_COLOR: &str = "#000000";

/// Parse a KML `coordinates` string into `[lon, lat]` pairs.
///
/// Tuples are separated by whitespace and their members by commas. Altitude
/// is ignored. A tuple with fewer than two members, or whose first two
/// members are not finite numbers, is dropped.
///
/// ```rust
/// use hgss_kml::parse_coordinates;
///
/// let coords = parse_coordinates("19.938,50.000,0 bad 19.950,50.000");
/// assert_eq!(coords, vec![[19.938, 50.0], [19.95, 50.0]]);
/// ```
pub fn parse_coordinates(text: &str) -> Vec<[f64; 2]> {
    text.split_whitespace()
        .filter_map(|tuple| {
            let mut parts = tuple.split(',');
            let lon = parts.next()?.parse::<f64>().ok()?;
            let lat = parts.next()?.parse::<f64>().ok()?;
            (lon.is_finite() && lat.is_finite()).then_some([lon, lat])
        })
        .collect()
}

/// Convert a KML `AABBGGRR` color to `#RRGGBB`; alpha is dropped.
///
/// ```rust
/// use hgss_kml::kml_color_to_hex;
///
/// assert_eq!(kml_color_to_hex("ff0000ff"), "#ff0000");
/// assert_eq!(kml_color_to_hex("red"), "#000000");
/// ```
pub fn kml_color_to_hex(color: &str) -> String {
    if color.len() != 8 {
        return FALLBACK_COLOR.to_string();
    }
    match (color.get(6..8), color.get(4..6), color.get(2..4)) {
        (Some(red), Some(green), Some(blue)) => format!("#{}{}{}", red, green, blue),
        _ => FALLBACK_COLOR.to_string(),
    }
}

/// Derive a node id from a display name: lower case, spaces become `_`.
///
/// Distinct names may map to the same id.
pub fn generate_id(name: &str) -> String {
    name.replace(' ', "_").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== parse_coordinates =====

    #[test]
    fn test_parse_three_pairs() {
        assert_eq!(
            parse_coordinates("19.938,50.000 19.950,50.000 19.950,50.010"),
            vec![[19.938, 50.0], [19.95, 50.0], [19.95, 50.01]]
        );
    }

    #[test]
    fn test_parse_ignores_altitude_and_newlines() {
        assert_eq!(
            parse_coordinates("\n  1,2,100\n\t3,4,200  \n"),
            vec![[1.0, 2.0], [3.0, 4.0]]
        );
    }

    #[test]
    fn test_parse_drops_malformed_tuples() {
        assert_eq!(
            parse_coordinates("1 a,2 3,b 5,6 ,7"),
            vec![[5.0, 6.0]]
        );
    }

    #[test]
    fn test_parse_drops_non_finite_tuples() {
        assert_eq!(
            parse_coordinates("nan,inf 1,2 NaN,50 3,-Infinity 4,5,inf"),
            vec![[1.0, 2.0], [4.0, 5.0]]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_coordinates("").is_empty());
        assert!(parse_coordinates("   ").is_empty());
    }

    // ===== kml_color_to_hex =====

    #[test]
    fn test_color_reorder() {
        assert_eq!(kml_color_to_hex("ffcccccc"), "#cccccc");
        assert_eq!(kml_color_to_hex("ff444444"), "#444444");
        assert_eq!(kml_color_to_hex("80ff8000"), "#0080ff");
    }

    #[test]
    fn test_color_fallback() {
        assert_eq!(kml_color_to_hex("invalid"), "#000000");
        assert_eq!(kml_color_to_hex(""), "#000000");
        assert_eq!(kml_color_to_hex("ffcccccc00"), "#000000");
    }

    #[test]
    fn test_color_multibyte_fallback() {
        // 8 bytes, but "é" straddles a slice boundary
        assert_eq!("aéaaaaa".len(), 8);
        assert_eq!(kml_color_to_hex("aéaaaaa"), "#000000");
    }

    // ===== generate_id =====

    #[test]
    fn test_generate_id() {
        assert_eq!(generate_id("Zone A"), "zone_a");
        assert_eq!(generate_id("Point of Interest"), "point_of_interest");
        assert_eq!(generate_id(""), "");
        assert_eq!(generate_id("Tab\tKept"), "tab\tkept");
    }

    proptest! {
        #[test]
        fn prop_parse_formatted_pairs(pairs in proptest::collection::vec((-180.0f64..180.0, -90.0f64..90.0), 0..20)) {
            let text = pairs
                .iter()
                .map(|(lon, lat)| format!("{},{},0", lon, lat))
                .collect::<Vec<_>>()
                .join(" ");
            let expected: Vec<[f64; 2]> = pairs.iter().map(|&(lon, lat)| [lon, lat]).collect();
            prop_assert_eq!(parse_coordinates(&text), expected);
        }

        #[test]
        fn prop_color_is_always_seven_chars(color in ".{0,12}") {
            let hex = kml_color_to_hex(&color);
            prop_assert!(hex.starts_with('#'));
            prop_assert_eq!(hex.len(), 7);
            if color.len() != 8 {
                prop_assert_eq!(hex, FALLBACK_COLOR);
            }
        }

        #[test]
        fn prop_generate_id_has_no_spaces(name in "[A-Za-z ]{0,20}") {
            prop_assert!(!generate_id(&name).contains(' '));
        }
    }
}
