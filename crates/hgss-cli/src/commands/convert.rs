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

//! Convert command - format conversion between GeoJSON, KML and HGSS

use super::{read_file_bytes, write_output};
use crate::error::CliError;
use hgss::{Conversion, ConvertOptions, Format};
use tracing::info;

/// Convert `input` from format `from` to format `to`.
///
/// Format names and their pairing are checked before the input file is
/// opened. Output goes to `output`, or to stdout when `None`; when writing a
/// file, a completion line is printed to stderr.
///
/// # Errors
///
/// Returns `Err` if:
/// - A format name is unknown or the pairing is unsupported
/// - The input cannot be read or is larger than `HGSS_MAX_FILE_SIZE`
/// - The input cannot be parsed, or an HGSS input fails validation
/// - The output cannot be written
pub fn convert(
    input: &str,
    output: Option<&str>,
    from: &str,
    to: &str,
    compact: bool,
) -> Result<(), CliError> {
    let from: Format = from.parse()?;
    let to: Format = to.parse()?;
    let conversion = Conversion::new(from, to)?;

    let content = read_file_bytes(input)?;
    let options = ConvertOptions { pretty: !compact };
    let converted = conversion.run(&content, &options)?;
    info!(input, %from, %to, bytes = converted.len(), "converted");

    write_output(&converted, output)?;
    if let Some(output) = output {
        eprintln!("Conversion completed: {} -> {}", input, output);
    }
    Ok(())
}
