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

//! CLI command implementations

mod convert;
mod inspect;
mod validate;

pub use convert::convert;
pub use inspect::inspect;
pub use validate::validate;

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};

/// Default maximum input file size (1 GB).
///
/// Can be overridden with the `HGSS_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("HGSS_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

fn check_file_size(path: &str) -> Result<(), CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }
    Ok(())
}

/// Read a file's bytes, rejecting files above the size limit before
/// reading.
///
/// # Examples
///
/// ```no_run
/// use hgss_cli::commands::read_file_bytes;
///
/// std::env::set_var("HGSS_MAX_FILE_SIZE", "1000");
/// assert!(read_file_bytes("large.geojson").is_err());
/// ```
pub fn read_file_bytes(path: &str) -> Result<Vec<u8>, CliError> {
    check_file_size(path)?;
    fs::read(path).map_err(|e| CliError::io_error(path, e))
}

/// Read a UTF-8 text file with the same size limit as
/// [`read_file_bytes`].
pub fn read_file(path: &str) -> Result<String, CliError> {
    check_file_size(path)?;
    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file, or to stdout followed by a newline.
pub fn write_output(content: &[u8], path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content)
                .and_then(|()| stdout.write_all(b"\n"))
                .and_then(|()| stdout.flush())
                .map_err(|e| CliError::io_error("<stdout>", e))
        }
    }
}
