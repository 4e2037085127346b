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

//! GeoJSON conversion benchmarks.
//!
//! Measures GeoJSON → HGSS and HGSS → GeoJSON over growing collections.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hgss_geojson::{
    from_geojson_str, to_geojson, to_geojson_string, FromGeoJsonConfig, ToGeoJsonConfig,
};
use hgss_test::fixtures::builders::{CollectionBuilder, FeatureBuilder};

const SIZES: [usize; 3] = [10, 1_000, 10_000];

fn generate_collection(size: usize) -> String {
    CollectionBuilder::new()
        .features((0..size).map(|i| {
            let x = (i % 360) as f64 - 180.0;
            FeatureBuilder::polygon(&[[x, 0.0], [x + 0.5, 0.0], [x + 0.5, 0.5], [x, 0.0]])
                .id(format!("zone_{}", i))
                .name(format!("Zone {}", i))
                .description("benchmark zone")
                .label_coordinates(vec![x + 0.25, 0.25])
                .property("population", i as u64)
                .build()
        }))
        .to_json_string()
}

fn bench_geojson_to_hgss(c: &mut Criterion) {
    let mut group = c.benchmark_group("geojson_to_hgss");
    let config = FromGeoJsonConfig::default();

    for &size in &SIZES {
        let text = generate_collection(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| from_geojson_str(black_box(text), &config))
        });
    }

    group.finish();
}

fn bench_hgss_to_geojson(c: &mut Criterion) {
    let mut group = c.benchmark_group("hgss_to_geojson");
    let config = ToGeoJsonConfig { pretty: false };

    for &size in &SIZES {
        let text = generate_collection(size);
        let doc = from_geojson_str(&text, &FromGeoJsonConfig::default()).unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| to_geojson_string(&to_geojson(black_box(doc)), &config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_geojson_to_hgss, bench_hgss_to_geojson);
criterion_main!(benches);
