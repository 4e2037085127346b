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

//! Error types shared by the HGSS converters.

use std::fmt;
use thiserror::Error;

/// The kind of error that stopped a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HgssErrorKind {
    /// Malformed source text; no partial output is produced.
    ParseFailure,
    /// An HGSS document failed structural validation.
    InvalidDocument,
    /// The requested source/target format pairing is not supported.
    UnsupportedConversion,
    /// Reading or writing a file failed.
    Io,
}

impl fmt::Display for HgssErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseFailure => write!(f, "ParseFailure"),
            Self::InvalidDocument => write!(f, "InvalidDocument"),
            Self::UnsupportedConversion => write!(f, "UnsupportedConversion"),
            Self::Io => write!(f, "IOError"),
        }
    }
}

/// An error raised by one of the HGSS conversion entry points.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct HgssError {
    /// The kind of error.
    pub kind: HgssErrorKind,
    /// Human-readable error message.
    pub message: String,
}

impl HgssError {
    /// Create a new error.
    pub fn new(kind: HgssErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn parse_failure(message: impl Into<String>) -> Self {
        Self::new(HgssErrorKind::ParseFailure, message)
    }

    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::new(HgssErrorKind::InvalidDocument, message)
    }

    pub fn unsupported_conversion(message: impl Into<String>) -> Self {
        Self::new(HgssErrorKind::UnsupportedConversion, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(HgssErrorKind::Io, message)
    }

    /// A format name that is none of `geojson`, `kml` or `hgss`.
    pub fn unknown_format(name: &str) -> Self {
        Self::unsupported_conversion(format!("unknown format '{}'", name))
    }
}

impl From<ValidationError> for HgssError {
    fn from(err: ValidationError) -> Self {
        Self::invalid_document(err.to_string())
    }
}

/// Result type for HGSS operations.
pub type HgssResult<T> = Result<T, HgssError>;

/// Structural validation failure of an HGSS document.
///
/// Only the first failing check is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The document `type` is not `"HGSS"`.
    #[error("invalid type {found:?}, must be HGSS")]
    InvalidType { found: String },

    /// The document `version` is empty.
    #[error("missing version")]
    MissingVersion,

    /// The document has no `root` node.
    #[error("missing root node")]
    MissingRoot,
}
