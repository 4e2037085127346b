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

//! Format identifiers and the byte-level conversion driver.

use crate::{parse_hgss, to_hgss_string};
use hgss_core::{HgssError, HgssResult};
use hgss_geojson::{geojson_to_hgss, to_geojson, to_geojson_string, ToGeoJsonConfig};
use hgss_kml::kml_to_hgss;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A document format known to the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    GeoJson,
    Kml,
    Hgss,
}

impl Format {
    /// Every format, in display order.
    pub const ALL: [Format; 3] = [Format::GeoJson, Format::Kml, Format::Hgss];

    /// The lower-case name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::GeoJson => "geojson",
            Format::Kml => "kml",
            Format::Hgss => "hgss",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = HgssError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| HgssError::unknown_format(s))
    }
}

/// Output options for [`convert`].
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Indent the JSON output (default: true)
    pub pretty: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// A supported source/target pairing.
///
/// Only `geojson → hgss`, `kml → hgss` and `hgss → geojson` can be
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    from: Format,
    to: Format,
}

impl Conversion {
    /// Check a pairing.
    ///
    /// # Errors
    ///
    /// Returns an `UnsupportedConversion` error for any other pairing.
    pub fn new(from: Format, to: Format) -> HgssResult<Self> {
        match (from, to) {
            (Format::GeoJson, Format::Hgss)
            | (Format::Kml, Format::Hgss)
            | (Format::Hgss, Format::GeoJson) => Ok(Self { from, to }),
            _ => Err(HgssError::unsupported_conversion(format!(
                "conversion from {} to {} is not supported",
                from, to
            ))),
        }
    }

    pub fn from(&self) -> Format {
        self.from
    }

    pub fn to(&self) -> Format {
        self.to
    }

    /// Convert `input` (UTF-8 text in the source format) to the target
    /// format.
    pub fn run(&self, input: &[u8], options: &ConvertOptions) -> HgssResult<Vec<u8>> {
        let text = std::str::from_utf8(input)
            .map_err(|e| HgssError::parse_failure(format!("input is not valid UTF-8: {}", e)))?;
        debug!(from = %self.from, to = %self.to, bytes = input.len(), "converting");

        let output = match self.from {
            Format::GeoJson => to_hgss_string(&geojson_to_hgss(text)?, options.pretty)?,
            Format::Kml => to_hgss_string(&kml_to_hgss(text)?, options.pretty)?,
            Format::Hgss => {
                let doc = parse_hgss(text)?;
                doc.validate()?;
                let config = ToGeoJsonConfig {
                    pretty: options.pretty,
                };
                to_geojson_string(&to_geojson(&doc), &config)?
            }
        };

        Ok(output.into_bytes())
    }
}

/// Convert `input` from one format to another.
///
/// The pairing is checked before the input is looked at.
///
/// # Errors
///
/// - `UnsupportedConversion` for a pairing other than `geojson → hgss`,
///   `kml → hgss` or `hgss → geojson`
/// - `ParseFailure` for input that is not valid UTF-8 or not well-formed in
///   the source format
/// - `InvalidDocument` for HGSS input that fails validation
pub fn convert(
    input: &[u8],
    from: Format,
    to: Format,
    options: &ConvertOptions,
) -> HgssResult<Vec<u8>> {
    Conversion::new(from, to)?.run(input, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hgss_core::HgssErrorKind;

    #[test]
    fn test_format_parse_case_insensitive() {
        assert_eq!("geojson".parse::<Format>().unwrap(), Format::GeoJson);
        assert_eq!("GeoJSON".parse::<Format>().unwrap(), Format::GeoJson);
        assert_eq!("KML".parse::<Format>().unwrap(), Format::Kml);
        assert_eq!("Hgss".parse::<Format>().unwrap(), Format::Hgss);
    }

    #[test]
    fn test_format_parse_unknown() {
        let err = "topojson".parse::<Format>().unwrap_err();
        assert_eq!(err.kind, HgssErrorKind::UnsupportedConversion);
        assert!(err.message.contains("topojson"));
    }

    #[test]
    fn test_format_display_round_trips() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
    }

    #[test]
    fn test_valid_pairings() {
        let valid = [
            (Format::GeoJson, Format::Hgss),
            (Format::Kml, Format::Hgss),
            (Format::Hgss, Format::GeoJson),
        ];
        for from in Format::ALL {
            for to in Format::ALL {
                let result = Conversion::new(from, to);
                if valid.contains(&(from, to)) {
                    let conversion = result.unwrap();
                    assert_eq!((conversion.from(), conversion.to()), (from, to));
                } else {
                    assert_eq!(
                        result.unwrap_err().kind,
                        HgssErrorKind::UnsupportedConversion,
                        "{} -> {}",
                        from,
                        to
                    );
                }
            }
        }
    }

    #[test]
    fn test_invalid_utf8_is_parse_failure() {
        let err = convert(
            &[0xff, 0xfe, b'{'],
            Format::GeoJson,
            Format::Hgss,
            &ConvertOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind, HgssErrorKind::ParseFailure);
    }
}
