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

/// A startup location for the ground network (`1300`).
#[derive(Record)]
pub struct Parking<'a> {
    pub kind: RecordKind,
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
    pub heading: Heading<'a>,
    /// One of `gate`, `hangar`, `tie_down` or `misc`.
    pub location_type: Text<'a>,
    pub usage: Usage<'a>,
    #[apt(rest)]
    pub name: Rest<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Line;

    #[test]
    fn parking_record() {
        let line = Line::new(b"1300 40.64533958 -073.78198393 152.43 gate heavy|jets Gate  B23\n");
        let park = Parking::try_from(&line).expect("parking should parse");

        assert_eq!(park.kind, RecordKind::Parking);
        assert_eq!(park.latitude.as_decimal(), Ok(40.64533958));
        assert_eq!(park.heading.as_f64(), Ok(152.43));
        assert_eq!(park.location_type.to_string(), "gate");
        assert_eq!(park.usage.entries().count(), 2);
        assert_eq!(park.name.to_string(), "Gate B23");
    }
}
