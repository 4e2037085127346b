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

//! Commands that operate on a single HGSS file.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Core HGSS commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Validate an HGSS file
    ///
    /// Checks the document type, version and root. Repeated node ids are
    /// reported as a warning, or as an error in strict mode.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Fail on repeated node ids
        #[arg(short, long)]
        strict: bool,
    },

    /// Print the node tree of an HGSS file
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Show descriptions, geometries and styles
        #[arg(short, long)]
        verbose: bool,
    },
}

impl CoreCommands {
    /// Execute the core command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Validate { file, strict } => commands::validate(&file, strict),
            CoreCommands::Inspect { file, verbose } => commands::inspect(&file, verbose),
        }
    }
}
