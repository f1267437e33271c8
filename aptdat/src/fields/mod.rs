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

use crate::{Numeric, Text};

mod coordinate;
mod record_kind;
mod usage;

pub use coordinate::{Latitude, Longitude};
pub use record_kind::{FrequencyKind, RecordKind, VERSIONS};
pub use usage::Usage;

pub type Ident<'a> = Text<'a>;
pub type Elevation<'a> = Numeric<'a>;
pub type Heading<'a> = Numeric<'a>;
pub type Distance<'a> = Numeric<'a>;
pub type SurfaceCode<'a> = Numeric<'a>;
pub type FrequencyValue<'a> = Numeric<'a>;
