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

use crate::{Error, Field, Text};

/// A `|` separated list, e.g. the aircraft types allowed at a parking
/// position (`heavy|jets|turboprops`).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Usage<'a>(Text<'a>);

impl<'a> Usage<'a> {
    /// Returns an iterator over the entries of the list.
    pub fn entries(&self) -> impl Iterator<Item = Text<'a>> {
        self.0.as_bytes().split(|&b| b == b'|').map(Text)
    }
}

impl<'a> Field<'a> for Usage<'a> {
    fn from_token(token: &'a [u8]) -> Result<Self, Error> {
        Text::from_token(token).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_entries() {
        let usage = Usage::from_token(b"heavy|jets|turboprops").expect("usage should parse");
        let entries: Vec<String> = usage.entries().map(String::from).collect();
        assert_eq!(entries, ["heavy", "jets", "turboprops"]);
    }

    #[test]
    fn keeps_single_entry() {
        let usage = Usage::from_token(b"all").expect("usage should parse");
        assert_eq!(usage.entries().count(), 1);
    }
}
