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

//! Error types for KML conversion

use hgss_core::{HgssError, HgssErrorKind};
use thiserror::Error;

/// Errors that can occur while reading a KML document.
///
/// Every variant is fatal: no partial document is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KmlError {
    /// The input is not well-formed XML.
    ///
    /// ```text
    /// KML parse error at position 42: unexpected end of input inside <Folder>
    /// ```
    #[error("KML parse error at position {pos}: {message}")]
    Parse {
        /// Byte offset in the input
        pos: usize,
        message: String,
    },

    /// The root element is not `kml`.
    #[error("unexpected root element <{found}>, expected <kml>")]
    UnexpectedRoot { found: String },

    /// The input holds no root element at all.
    #[error("no root element found")]
    EmptyDocument,

    /// `Folder` elements are nested deeper than the configured limit.
    #[error("KML folder nesting exceeds maximum depth of {max}")]
    FolderDepthExceeded { max: usize },
}

impl KmlError {
    /// The shared error kind; always [`HgssErrorKind::ParseFailure`].
    pub fn kind(&self) -> HgssErrorKind {
        HgssErrorKind::ParseFailure
    }
}

impl From<KmlError> for HgssError {
    fn from(err: KmlError) -> Self {
        HgssError::new(err.kind(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = KmlError::Parse {
            pos: 42,
            message: "unexpected end of input".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "KML parse error at position 42: unexpected end of input"
        );
    }

    #[test]
    fn test_unexpected_root_display() {
        let err = KmlError::UnexpectedRoot {
            found: "gpx".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected root element <gpx>, expected <kml>");
    }

    #[test]
    fn test_all_variants_are_parse_failures() {
        let errors = [
            KmlError::Parse {
                pos: 0,
                message: String::new(),
            },
            KmlError::UnexpectedRoot {
                found: "x".to_string(),
            },
            KmlError::EmptyDocument,
            KmlError::FolderDepthExceeded { max: 1 },
        ];
        for err in errors {
            let hgss: HgssError = err.into();
            assert_eq!(hgss.kind, HgssErrorKind::ParseFailure);
        }
    }
}
