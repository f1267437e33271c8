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

/// A single line of an apt.dat file, split into its fields.
///
/// Fields are separated by runs of ASCII whitespace. The first field is the
/// row code which determines the [`RecordKind`]. Splitting works on bytes
/// only, so text in any single byte encoding passes through untouched.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Line<'a> {
    raw: &'a [u8],
    tokens: Vec<&'a [u8]>,
    kind: RecordKind,
    index: usize,
}

impl<'a> Line<'a> {
    /// Tokenizes a line from the body of a file.
    ///
    /// Header lines are not recognized, see [`Line::at`].
    pub fn new(raw: &'a [u8]) -> Self {
        Self::at(raw, usize::MAX)
    }

    /// Tokenizes the line at the zero-based `index` of its file.
    pub fn at(raw: &'a [u8], index: usize) -> Self {
        let tokens: Vec<&'a [u8]> = raw
            .split(|b| b.is_ascii_whitespace())
            .filter(|token| !token.is_empty())
            .collect();
        let kind = RecordKind::classify(tokens.first().copied(), index);

        Self {
            raw,
            tokens,
            kind,
            index,
        }
    }

    /// Returns the kind of record on this line.
    #[inline]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Returns the line as read, including its line terminator.
    #[inline]
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    /// Returns all fields of this line including the row code.
    #[inline]
    pub fn tokens(&self) -> &[&'a [u8]] {
        &self.tokens
    }

    /// Returns the field at `position`, where position 0 is the row code.
    #[inline]
    pub fn get(&self, position: usize) -> Option<&'a [u8]> {
        self.tokens.get(position).copied()
    }

    /// Returns the number of fields on this line.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the line has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the one-based line number, if the line was read from a file.
    pub fn number(&self) -> Option<usize> {
        (self.index != usize::MAX).then_some(self.index + 1)
    }
}
