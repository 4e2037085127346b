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

//! HGSS CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **convert**: GeoJSON → HGSS, KML → HGSS and HGSS → GeoJSON
//! - **validate**: Check an HGSS file against the document rules
//! - **inspect**: Print an HGSS document as a tree
//!
//! # Examples
//!
//! ```no_run
//! use hgss_cli::commands::{convert, validate};
//!
//! # fn main() -> Result<(), hgss_cli::error::CliError> {
//! // KML to HGSS, written to a file
//! convert("zones.kml", Some("zones.json"), "kml", "hgss", false)?;
//!
//! // Strict validation also rejects repeated node ids
//! validate("zones.json", true)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
