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

use crate::fields::RecordKind;
use crate::{Error, Field, Line, Rest};

/// An apt.dat record type.
pub trait Record<'a>: Sized {
    /// Parse this record type from a field cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is truncated or contains invalid data.
    fn parse(fields: Fields<'a>) -> Result<Self, Error>;

    /// Parse this record type from a line.
    ///
    /// # Errors
    ///
    /// Returns any error returned by [`parse`][Record::parse].
    fn from_line(line: &'a Line<'a>) -> Result<Self, Error> {
        Self::parse(Fields::new(line))
    }
}

/// A cursor over the fields of a line.
pub struct Fields<'a> {
    tokens: &'a [&'a [u8]],
    kind: RecordKind,
    index: usize,
}

impl<'a> Fields<'a> {
    pub fn new(line: &'a Line<'a>) -> Self {
        Self {
            tokens: line.tokens(),
            kind: line.kind(),
            index: 0,
        }
    }

    /// Reads the next field, and advances the position by one.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing the field fails or if a required field is
    /// missing.
    #[inline]
    pub fn next<F>(&mut self) -> Result<F, Error>
    where
        F: Field<'a>,
    {
        let tokens = self.tokens;
        let field = match tokens.get(self.index) {
            Some(&token) => F::from_token(token)?,
            None => F::missing().ok_or(Error::TruncatedRecord {
                kind: self.kind,
                expected: self.index + 1,
                actual: self.tokens.len(),
            })?,
        };
        self.index += 1;
        Ok(field)
    }

    /// Jumps to the position and get the field.
    ///
    /// The next field will be the one following this field's position.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing the field fails or if a required field is
    /// missing.
    #[inline]
    pub fn get<F>(&mut self, position: usize) -> Result<F, Error>
    where
        F: Field<'a>,
    {
        self.index = position;
        self.next()
    }

    /// Returns all remaining fields and moves to the end.
    #[inline]
    pub fn rest(&mut self) -> Rest<'a> {
        let tokens = self.tokens;
        let start = self.index.min(tokens.len());
        self.index = tokens.len();
        Rest(&tokens[start..])
    }
}
