// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use aptdat::fields::RecordKind;
use aptdat::Line;

#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A bucket name that isn't of the form `w080n40`.
    MalformedBucket(String),
    /// A record that was decoded as runway but is none.
    UnsupportedRunwayType(RecordKind),
    /// A type code of a facility or runway that has no variant.
    UnknownTypeCode(u16),
    /// A record that could not be parsed.
    ///
    /// The line number is 1-based and known if the record was read from a
    /// file.
    InvalidRecord {
        line: Option<usize>,
        error: aptdat::Error,
    },
    /// A facility identifier that can't be used as file name.
    InvalidIdent(String),
    /// A DEM file name without the `N40W080` style tile prefix.
    MalformedDemName(String),
    /// A coordinate outside of the valid range.
    OutOfRange { what: &'static str, value: f64 },
    Io(String),
    Xml(String),
    Json(String),
}

impl Error {
    /// Attaches the number of the line that caused this error.
    pub(crate) fn at(self, line: &Line<'_>) -> Self {
        match self {
            Self::InvalidRecord { line: None, error } => Self::InvalidRecord {
                line: line.number(),
                error,
            },
            e => e,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBucket(name) => {
                write!(f, "bucket should look like w080n40 but is \"{name}\"")
            }
            Self::UnsupportedRunwayType(kind) => write!(f, "{kind:?} is no runway type"),
            Self::UnknownTypeCode(code) => write!(f, "unknown type code {code}"),
            Self::InvalidRecord {
                line: Some(line),
                error,
            } => write!(f, "invalid record on line {line}: {error}"),
            Self::InvalidRecord { line: None, error } => write!(f, "invalid record: {error}"),
            Self::InvalidIdent(ident) => {
                write!(f, "identifier should be alphanumeric but is \"{ident}\"")
            }
            Self::MalformedDemName(name) => {
                write!(f, "DEM file name should start like N40W080 but is \"{name}\"")
            }
            Self::OutOfRange { what, value } => write!(f, "{what} {value} is out of range"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Xml(e) => write!(f, "XML error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<aptdat::Error> for Error {
    fn from(error: aptdat::Error) -> Self {
        Self::InvalidRecord { line: None, error }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<walkdir::Error> for Error {
    fn from(e: walkdir::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Self::Xml(e.to_string())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
