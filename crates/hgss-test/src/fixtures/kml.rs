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

//! KML document fixtures.

/// A document with two styles and one folder "Zones" holding a Polygon
/// placemark followed by a Point placemark.
pub const SAMPLE_KML: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>Krakow Zones</name>
    <Style id="zoneStyle">
      <LineStyle>
        <color>ff444444</color>
        <width>2</width>
      </LineStyle>
      <PolyStyle>
        <color>ffcccccc</color>
        <fill>1</fill>
        <outline>1</outline>
      </PolyStyle>
    </Style>
    <Style id="poiStyle">
      <LineStyle>
        <color>ff0000ff</color>
        <width>wide</width>
      </LineStyle>
    </Style>
    <Folder>
      <name>Zones</name>
      <Placemark>
        <name>Zone A</name>
        <description>First zone</description>
        <styleUrl>#zoneStyle</styleUrl>
        <Polygon>
          <outerBoundaryIs>
            <LinearRing>
              <coordinates>
                19.938,50.000,0 19.950,50.000,0 19.950,50.010,0 19.938,50.000,0
              </coordinates>
            </LinearRing>
          </outerBoundaryIs>
        </Polygon>
      </Placemark>
      <Placemark>
        <name>Point of Interest</name>
        <styleUrl>#poiStyle</styleUrl>
        <Point>
          <coordinates>19.944,50.005,0</coordinates>
        </Point>
      </Placemark>
    </Folder>
  </Document>
</kml>
"##;

/// Sub-folders listed before placemarks, an empty placemark and a
/// placemark directly under `Document`.
pub const NESTED_KML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>Nested</name>
    <Placemark>
      <name>Top Level</name>
      <Point><coordinates>0,0</coordinates></Point>
    </Placemark>
    <Folder>
      <name>Outer Folder</name>
      <Folder>
        <name>Inner Folder</name>
        <Placemark>
          <name>Deep Point</name>
          <Point><coordinates>1.5,2.5 3,4</coordinates></Point>
        </Placemark>
      </Folder>
      <Placemark>
        <name>Outer Point</name>
        <Point><coordinates>5,6</coordinates></Point>
      </Placemark>
      <Placemark>
        <name>No Geometry</name>
        <description>Just text</description>
      </Placemark>
    </Folder>
    <Folder>
      <name>Second</name>
    </Folder>
  </Document>
</kml>
"#;

/// Styles exercising every color and width rule.
pub const STYLED_KML: &str = r#"<kml>
  <Document>
    <Style id="full">
      <PolyStyle><color>80ff8000</color><fill>1</fill></PolyStyle>
      <LineStyle><color>ff00ff00</color><width>3.5</width></LineStyle>
    </Style>
    <Style id="noFill">
      <PolyStyle><color>fff</color><fill>0</fill></PolyStyle>
    </Style>
    <Style id="empty"/>
  </Document>
</kml>
"#;

/// Prefixed element names and CDATA text.
pub const NAMESPACED_KML: &str = r#"<?xml version="1.0"?>
<kml:kml xmlns:kml="http://www.opengis.net/kml/2.2">
  <kml:Document>
    <kml:name>Prefixed</kml:name>
    <kml:Folder>
      <kml:name>Layer One</kml:name>
      <kml:Placemark>
        <kml:name>Station</kml:name>
        <kml:description><![CDATA[<b>Bold</b> text]]></kml:description>
        <kml:Point><kml:coordinates>10.5,20.25,100</kml:coordinates></kml:Point>
      </kml:Placemark>
    </kml:Folder>
  </kml:Document>
</kml:kml>
"#;

pub fn sample_kml() -> &'static str {
    SAMPLE_KML
}

pub fn nested_kml() -> &'static str {
    NESTED_KML
}

pub fn styled_kml() -> &'static str {
    STYLED_KML
}
