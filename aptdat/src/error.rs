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

use std::error;
use std::fmt;

use crate::RecordKind;

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The record ends before a field its row code requires.
    TruncatedRecord {
        kind: RecordKind,
        expected: usize,
        actual: usize,
    },
    NotANumber {
        bytes: Vec<u8>,
    },
    OutOfRange {
        field: &'static str,
        bytes: Vec<u8>,
        expected: &'static str,
    },
    InvalidVariant {
        field: &'static str,
        bytes: Vec<u8>,
        expected: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedRecord {
                kind,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{kind:?} record should have at least {expected} fields but has {actual}"
                )
            }
            Self::NotANumber { bytes } => {
                let s = String::from_utf8_lossy(bytes);
                write!(f, "field should be a number but is \"{s}\"")
            }
            Self::OutOfRange {
                field,
                bytes,
                expected,
            } => {
                let s = String::from_utf8_lossy(bytes);
                write!(f, "{field} is {s} but should be {expected}")
            }
            Self::InvalidVariant {
                field,
                bytes,
                expected,
            } => {
                let s = String::from_utf8_lossy(bytes);
                write!(f, "found \"{s}\" in {field} but should be {expected}")
            }
        }
    }
}

impl error::Error for Error {}
