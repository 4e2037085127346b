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

//! CLI command definitions and argument parsing.
//!
//! - [`core`]: commands on HGSS files (validate, inspect)
//! - [`conversion`]: format conversion (convert)

mod conversion;
mod core;

use crate::error::CliError;
use clap::Subcommand;

pub use conversion::ConversionCommands;
pub use core::CoreCommands;

/// Top-level CLI commands.
///
/// ```text
/// Commands
/// ├── Core (validate, inspect)
/// └── Conversion (convert)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Flattened so every command appears at top level
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Conversion(ConversionCommands),
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Conversion(cmd) => cmd.execute(),
        }
    }
}
