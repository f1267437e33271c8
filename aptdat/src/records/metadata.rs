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
use crate::{Record, Rest, Text};

/// An airport metadata entry (`1302`), e.g. `1302 city New York`.
#[derive(Record)]
pub struct Metadata<'a> {
    pub kind: RecordKind,
    pub key: Option<Text<'a>>,
    #[apt(rest)]
    pub value: Rest<'a>,
}
