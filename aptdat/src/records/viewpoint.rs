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

/// A tower viewpoint (`14`).
#[derive(Record)]
pub struct Viewpoint<'a> {
    pub kind: RecordKind,
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
    /// Height of the viewpoint in meters.
    pub height: Distance<'a>,
    #[apt(rest)]
    pub name: Rest<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Line;

    #[test]
    fn viewpoint_record() {
        let line = Line::new(b"14   40.64140000 -073.77220000   97 0 Tower Viewpoint\n");
        let view = Viewpoint::try_from(&line).expect("viewpoint should parse");

        assert_eq!(view.kind, RecordKind::Viewpoint);
        assert_eq!(view.longitude.as_decimal(), Ok(-73.7722));
        assert_eq!(view.height.as_f64(), Ok(97.0));
        assert_eq!(view.name.to_string(), "0 Tower Viewpoint");
    }
}
