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

//! Inspect command - HGSS tree visualization

use super::read_file;
use crate::error::CliError;
use colored::Colorize;
use hgss::{parse_hgss, Document, Node, StyleProperties};

/// Print an HGSS document as a tree.
///
/// The document does not have to be valid. With `verbose`, node
/// descriptions, geometry types, label coordinates and styles are shown too.
pub fn inspect(file: &str, verbose: bool) -> Result<(), CliError> {
    let content = read_file(file)?;
    let doc = parse_hgss(&content)?;
    print_document(&doc, verbose);
    Ok(())
}

fn print_document(doc: &Document, verbose: bool) {
    println!("{}", "HGSS Document".bold().underline());
    println!();
    println!("{}  {}", "Type:".cyan(), doc.doc_type);
    println!("{}  {}", "Version:".cyan(), doc.version);
    if !doc.name.is_empty() {
        println!("{}  {}", "Name:".cyan(), doc.name);
    }
    if verbose && !doc.description.is_empty() {
        println!("{}  {}", "Description:".cyan(), doc.description);
    }

    if !doc.styles.is_empty() {
        println!();
        println!("{}", "Styles:".cyan());
        for (key, props) in &doc.styles {
            if verbose {
                println!("  {}: {}", key.green(), format_style(props));
            } else {
                println!("  {}", key.green());
            }
        }
    }

    println!();
    println!("{}", "Root:".cyan());
    match &doc.root {
        Some(root) => print_node(root, 1, verbose),
        None => println!("  {}", "(none)".dimmed()),
    }
}

fn print_node(node: &Node, indent: usize, verbose: bool) {
    let prefix = "  ".repeat(indent);
    let node_type = if node.node_type.is_empty() {
        "unclassified"
    } else {
        node.node_type.as_str()
    };

    if node.name.is_empty() {
        println!("{}{} ({})", prefix, node.id.yellow(), node_type);
    } else {
        println!("{}{} ({}) \"{}\"", prefix, node.id.yellow(), node_type, node.name);
    }

    if verbose {
        let detail = "  ".repeat(indent + 1);
        if !node.description.is_empty() {
            println!("{}description: {}", detail, node.description);
        }
        if let Some(geometry) = &node.geometry {
            println!("{}geometry: {} {}", detail, geometry.geometry_type, geometry.coordinates);
        }
        if let Some(coordinates) = &node.coordinates {
            println!("{}label: {:?}", detail, coordinates);
        }
        if let Some(style) = &node.style {
            println!("{}style: {}", detail, format_style(style));
        }
    }

    for child in &node.children {
        print_node(child, indent + 1, verbose);
    }
}

fn format_style(props: &StyleProperties) -> String {
    serde_json::to_string(props).unwrap_or_else(|_| "{}".to_string())
}
