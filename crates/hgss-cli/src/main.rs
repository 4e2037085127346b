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

//! HGSS Command Line Interface

use clap::Parser;
use hgss_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// HGSS - Hierarchical Geospatial Style Sheets toolkit
///
/// Converts GeoJSON and KML into HGSS documents, flattens HGSS back into
/// GeoJSON, and validates or inspects HGSS files.
///
/// # Examples
///
/// ```bash
/// # Convert GeoJSON to HGSS
/// hgss convert -i places.geojson -o places.hgss.json
///
/// # Convert KML to HGSS
/// hgss convert -i zones.kml -f kml -o zones.hgss.json
///
/// # Flatten HGSS back to GeoJSON
/// hgss convert -i zones.hgss.json -f hgss -t geojson
///
/// # Validate an HGSS file
/// hgss validate zones.hgss.json --strict
/// ```
#[derive(Parser)]
#[command(name = "hgss")]
#[command(author, version, about = "HGSS - Hierarchical Geospatial Style Sheets toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    // Logging goes to stderr so converted output on stdout stays clean
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hgss=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
