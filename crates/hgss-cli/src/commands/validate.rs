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

//! Validate command - HGSS document rules and id uniqueness

use super::read_file;
use crate::error::CliError;
use colored::Colorize;
use hgss::{parse_hgss, StatsCollector};

/// Validate an HGSS file.
///
/// Prints `✓` or `✗` followed by the file name, and for documents that pass,
/// a summary of the tree. Repeated node ids are a warning, or an error when
/// `strict` is set.
///
/// # Examples
///
/// ```no_run
/// use hgss_cli::commands::validate;
///
/// # fn main() -> Result<(), hgss_cli::error::CliError> {
/// validate("zones.json", false)?;
/// # Ok(())
/// # }
/// ```
pub fn validate(file: &str, strict: bool) -> Result<(), CliError> {
    let content = read_file(file)?;

    let doc = match parse_hgss(&content).and_then(|doc| {
        doc.validate()?;
        Ok(doc)
    }) {
        Ok(doc) => doc,
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            return Err(e.into());
        }
    };

    let duplicates = doc.duplicate_ids();
    if strict && !duplicates.is_empty() {
        println!("{} {}", "✗".red().bold(), file);
        return Err(CliError::DuplicateIds(duplicates));
    }

    let stats = StatsCollector::collect(&doc);
    println!("{} {}", "✓".green().bold(), file);
    println!("  Version: {}", doc.version);
    println!("  Styles: {}", doc.styles.len());
    println!("  Nodes: {}", stats.node_count);
    println!("  Groups: {}", stats.group_count);
    println!("  Features: {}", stats.feature_count);
    println!("  Unclassified: {}", stats.unclassified_count);
    println!("  Max depth: {}", stats.max_depth);
    if !duplicates.is_empty() {
        println!(
            "  {} duplicate node ids: {}",
            "Warning:".yellow().bold(),
            duplicates.join(", ")
        );
    }
    if strict {
        println!("  Mode: strict (node ids must be unique)");
    }
    Ok(())
}
