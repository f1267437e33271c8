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

use crate::fields::*;
use crate::{Record, Rest};

/// A communication frequency (`50` to `56` or `1050` to `1056`).
#[derive(Record)]
pub struct Frequency<'a> {
    pub kind: RecordKind,
    pub frequency: FrequencyValue<'a>,
    #[apt(rest)]
    pub name: Rest<'a>,
}

impl Frequency<'_> {
    /// Returns the usage of the frequency, regardless of the row code's
    /// length.
    pub fn frequency_kind(&self) -> Option<FrequencyKind> {
        match self.kind {
            RecordKind::Frequency(kind) | RecordKind::LegacyFrequency(kind) => Some(kind),
            _ => None,
        }
    }
}
