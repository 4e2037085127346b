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

//! Format conversion command.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Format conversion commands.
///
/// Supported pairings: `geojson → hgss`, `kml → hgss`, `hgss → geojson`.
#[derive(Subcommand)]
pub enum ConversionCommands {
    /// Convert between GeoJSON, KML and HGSS
    Convert {
        /// Input file path
        #[arg(short, long, value_name = "FILE")]
        input: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,

        /// Source format (geojson, kml, hgss)
        #[arg(short, long, default_value = "geojson")]
        from: String,

        /// Target format (geojson, hgss)
        #[arg(short, long, default_value = "hgss")]
        to: String,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

impl ConversionCommands {
    /// Execute the conversion command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ConversionCommands::Convert {
                input,
                output,
                from,
                to,
                compact,
            } => commands::convert(&input, output.as_deref(), &from, &to, compact),
        }
    }
}
