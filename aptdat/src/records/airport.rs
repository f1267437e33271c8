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

/// The header of an airport (`1`), seaplane base (`16`) or heliport (`17`).
#[derive(Record)]
pub struct Airport<'a> {
    pub kind: RecordKind,
    pub elevation: Elevation<'a>,
    #[apt(field = 4)]
    pub ident: Ident<'a>,
    #[apt(rest)]
    pub name: Rest<'a>,
}
