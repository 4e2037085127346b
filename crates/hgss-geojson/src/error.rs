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

//! GeoJSON conversion errors.

use hgss_core::{HgssError, HgssErrorKind, ValidationError};
use thiserror::Error;

/// Errors that can occur during GeoJSON conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoJsonError {
    /// The input is not a GeoJSON feature collection.
    #[error("GeoJSON parse error: {0}")]
    Parse(String),

    /// The HGSS document failed validation before export.
    #[error("invalid HGSS document: {0}")]
    InvalidDocument(#[from] ValidationError),

    /// The output could not be encoded.
    #[error("GeoJSON serialization error: {0}")]
    Serialize(String),
}

impl GeoJsonError {
    /// The shared error kind.
    pub fn kind(&self) -> HgssErrorKind {
        match self {
            Self::Parse(_) => HgssErrorKind::ParseFailure,
            Self::InvalidDocument(_) | Self::Serialize(_) => HgssErrorKind::InvalidDocument,
        }
    }
}

impl From<GeoJsonError> for HgssError {
    fn from(err: GeoJsonError) -> Self {
        HgssError::new(err.kind(), err.to_string())
    }
}
