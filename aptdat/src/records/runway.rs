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
use crate::Record;

/// A land runway (`100`) with both of its ends.
///
/// Lighting, markings and shoulder fields are not read.
#[derive(Record)]
pub struct LandRunway<'a> {
    pub kind: RecordKind,
    /// Runway width in meters.
    pub width: Distance<'a>,
    pub surface: SurfaceCode<'a>,
    #[apt(field = 8)]
    pub le_ident: Ident<'a>,
    pub le_latitude: Latitude<'a>,
    pub le_longitude: Longitude<'a>,
    /// Displaced threshold length in meters.
    pub le_displaced: Distance<'a>,
    /// Overrun (blastpad) length in meters.
    pub le_overrun: Distance<'a>,
    #[apt(field = 17)]
    pub he_ident: Ident<'a>,
    pub he_latitude: Latitude<'a>,
    pub he_longitude: Longitude<'a>,
    pub he_displaced: Distance<'a>,
    pub he_overrun: Distance<'a>,
}

/// A water runway (`101`) with both of its ends.
#[derive(Record)]
pub struct WaterRunway<'a> {
    pub kind: RecordKind,
    pub width: Distance<'a>,
    /// The perimeter buoys flag, which takes the place of a surface code.
    pub surface: SurfaceCode<'a>,
    pub le_ident: Ident<'a>,
    pub le_latitude: Latitude<'a>,
    pub le_longitude: Longitude<'a>,
    pub he_ident: Ident<'a>,
    pub he_latitude: Latitude<'a>,
    pub he_longitude: Longitude<'a>,
}

/// A helipad (`102`).
#[derive(Record)]
pub struct Helipad<'a> {
    pub kind: RecordKind,
    pub ident: Ident<'a>,
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
    /// True heading in degrees.
    pub heading: Heading<'a>,
    pub length: Distance<'a>,
    pub width: Distance<'a>,
    pub surface: SurfaceCode<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Line};

    const LAND_RUNWAY: &[u8] = b"100   60.96   1   1 0.25 1 2 1 04L  40.62203850 -073.78574917    0.00  100.58 3 10 0 1 22R  40.64323436 -073.75384117  274.93    0.00 3 8 1 1\n";

    #[test]
    fn land_runway_record() {
        let line = Line::new(LAND_RUNWAY);
        let rwy = LandRunway::try_from(&line).expect("runway should parse");

        assert_eq!(rwy.kind, RecordKind::LandRunway);
        assert_eq!(rwy.width.as_f64(), Ok(60.96));
        assert_eq!(rwy.surface.as_u16(), Ok(1));
        assert_eq!(rwy.le_ident.to_string(), "04L");
        assert_eq!(rwy.le_latitude.as_decimal(), Ok(40.6220385));
        assert_eq!(rwy.le_longitude.as_decimal(), Ok(-73.78574917));
        assert_eq!(rwy.le_displaced.as_f64(), Ok(0.0));
        assert_eq!(rwy.le_overrun.as_f64(), Ok(100.58));
        assert_eq!(rwy.he_ident.to_string(), "22R");
        assert_eq!(rwy.he_displaced.as_f64(), Ok(274.93));
        assert_eq!(rwy.he_overrun.as_f64(), Ok(0.0));
    }

    #[test]
    fn truncated_land_runway() {
        let line = Line::new(b"100 60.96 1 1 0.25 1 2 1 04L 40.62203850 -073.78574917 0.00 100.58\n");
        assert_eq!(
            LandRunway::try_from(&line).err(),
            Some(Error::TruncatedRecord {
                kind: RecordKind::LandRunway,
                expected: 18,
                actual: 13,
            })
        );
    }

    #[test]
    fn water_runway_record() {
        let line = Line::new(b"101 49 1 08 35.04420900 -106.59542000 26 35.04420911 -106.57540000");
        let rwy = WaterRunway::try_from(&line).expect("water runway should parse");

        assert_eq!(rwy.kind, RecordKind::WaterRunway);
        assert_eq!(rwy.le_ident.to_string(), "08");
        assert_eq!(rwy.he_ident.to_string(), "26");
        assert_eq!(rwy.he_longitude.as_decimal(), Ok(-106.5754));
    }

    #[test]
    fn helipad_record() {
        let line = Line::new(b"102 H1 47.53918248 -122.30722302 2.00 10.06 10.06 1 0 0 0.25 0");
        let pad = Helipad::try_from(&line).expect("helipad should parse");

        assert_eq!(pad.kind, RecordKind::Helipad);
        assert_eq!(pad.ident.to_string(), "H1");
        assert_eq!(pad.heading.as_f64(), Ok(2.0));
        assert_eq!(pad.length.as_f64(), Ok(10.06));
        assert_eq!(pad.surface.as_u16(), Ok(1));
    }
}
