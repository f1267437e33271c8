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

use aptdat::fields::{Latitude, Longitude, RecordKind};
use aptdat::{records, Line};

use super::*;
use crate::geom::{initial_bearing, reciprocal};

fn lat_lon(lat: Latitude, lon: Longitude) -> Result<(f64, f64), aptdat::Error> {
    Ok((lat.as_decimal()?, lon.as_decimal()?))
}

impl<'a> TryFrom<records::Airport<'a>> for Facility {
    type Error = aptdat::Error;

    fn try_from(arpt: records::Airport) -> Result<Self, Self::Error> {
        let facility_type = match arpt.kind {
            RecordKind::LandAirport => FacilityType::Airport,
            RecordKind::SeaplaneBase => FacilityType::SeaplaneBase,
            RecordKind::Heliport => FacilityType::Heliport,
            _ => {
                return Err(aptdat::Error::InvalidVariant {
                    field: "row code",
                    bytes: format!("{:?}", arpt.kind).into_bytes(),
                    expected: "1, 16 or 17",
                })
            }
        };

        Ok(Facility::new(
            facility_type,
            arpt.elevation.as_i32()?,
            arpt.ident.to_string(),
            arpt.name.to_string(),
        ))
    }
}

impl Runway {
    /// Decodes a land runway, water runway or helipad record.
    ///
    /// Land and water runways don't list their headings, so the heading of
    /// the first end is the initial bearing towards the second end and the
    /// second end gets its reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedRunwayType`] if the line is no runway and
    /// [`Error::InvalidRecord`] if a field is missing or malformed.
    pub fn decode(line: &Line<'_>) -> Result<Self, Error> {
        let rwy = match line.kind() {
            RecordKind::LandRunway => Self::try_from(records::LandRunway::try_from(line)?),
            RecordKind::WaterRunway => Self::try_from(records::WaterRunway::try_from(line)?),
            RecordKind::Helipad => Self::try_from(records::Helipad::try_from(line)?),
            kind => return Err(Error::UnsupportedRunwayType(kind)),
        };

        Ok(rwy?)
    }
}

/// Returns both thresholds of a runway with reciprocal headings.
fn threshold_pair(
    (le_ident, le_lat, le_lon): (String, f64, f64),
    (he_ident, he_lat, he_lon): (String, f64, f64),
) -> [Threshold; 2] {
    let threshold = |ident, latitude, longitude| Threshold {
        ident,
        latitude,
        longitude,
        heading: 0.0,
        displaced: None,
        stopway: None,
    };

    let mut le = threshold(le_ident, le_lat, le_lon);
    let mut he = threshold(he_ident, he_lat, he_lon);

    le.heading = initial_bearing(le.position(), he.position());
    he.heading = reciprocal(le.heading);

    [le, he]
}

impl<'a> TryFrom<records::LandRunway<'a>> for Runway {
    type Error = aptdat::Error;

    fn try_from(rwy: records::LandRunway) -> Result<Self, Self::Error> {
        let (le_lat, le_lon) = lat_lon(rwy.le_latitude, rwy.le_longitude)?;
        let (he_lat, he_lon) = lat_lon(rwy.he_latitude, rwy.he_longitude)?;

        let [mut le, mut he] = threshold_pair(
            (rwy.le_ident.to_string(), le_lat, le_lon),
            (rwy.he_ident.to_string(), he_lat, he_lon),
        );

        le.displaced = Some(rwy.le_displaced.as_f64()?);
        le.stopway = Some(rwy.le_overrun.as_f64()?);
        he.displaced = Some(rwy.he_displaced.as_f64()?);
        he.stopway = Some(rwy.he_overrun.as_f64()?);

        Ok(Runway {
            runway_type: RunwayType::Land,
            width: rwy.width.as_f64()?,
            length: None,
            surface: rwy.surface.as_u16()?,
            thresholds: vec![le, he],
        })
    }
}

impl<'a> TryFrom<records::WaterRunway<'a>> for Runway {
    type Error = aptdat::Error;

    fn try_from(rwy: records::WaterRunway) -> Result<Self, Self::Error> {
        let (le_lat, le_lon) = lat_lon(rwy.le_latitude, rwy.le_longitude)?;
        let (he_lat, he_lon) = lat_lon(rwy.he_latitude, rwy.he_longitude)?;

        Ok(Runway {
            runway_type: RunwayType::Water,
            width: rwy.width.as_f64()?,
            length: None,
            surface: rwy.surface.as_u16()?,
            thresholds: threshold_pair(
                (rwy.le_ident.to_string(), le_lat, le_lon),
                (rwy.he_ident.to_string(), he_lat, he_lon),
            )
            .into(),
        })
    }
}

impl<'a> TryFrom<records::Helipad<'a>> for Runway {
    type Error = aptdat::Error;

    fn try_from(pad: records::Helipad) -> Result<Self, Self::Error> {
        let (latitude, longitude) = lat_lon(pad.latitude, pad.longitude)?;

        Ok(Runway {
            runway_type: RunwayType::Helipad,
            width: pad.width.as_f64()?,
            length: Some(pad.length.as_f64()?),
            surface: pad.surface.as_u16()?,
            thresholds: vec![Threshold {
                ident: pad.ident.to_string(),
                latitude,
                longitude,
                heading: pad.heading.as_f64()?,
                displaced: None,
                stopway: None,
            }],
        })
    }
}

impl<'a> TryFrom<records::Frequency<'a>> for Frequency {
    type Error = aptdat::Error;

    fn try_from(freq: records::Frequency) -> Result<Self, Self::Error> {
        let kind = freq
            .frequency_kind()
            .ok_or_else(|| aptdat::Error::InvalidVariant {
                field: "row code",
                bytes: format!("{:?}", freq.kind).into_bytes(),
                expected: "50 to 56 or 1050 to 1056",
            })?;

        Ok(Frequency {
            code: kind.code(),
            frequency: freq.frequency.as_u32()?,
            name: freq.name.to_string(),
        })
    }
}

impl<'a> TryFrom<records::Parking<'a>> for ParkingPosition {
    type Error = aptdat::Error;

    fn try_from(park: records::Parking) -> Result<Self, Self::Error> {
        let (latitude, longitude) = lat_lon(park.latitude, park.longitude)?;

        Ok(ParkingPosition {
            location_type: park.location_type.to_string(),
            latitude,
            longitude,
            heading: park.heading.as_f64()?,
            usage: park.usage.entries().map(String::from).collect(),
            name: park.name.to_string(),
        })
    }
}

impl<'a> TryFrom<records::Viewpoint<'a>> for Viewpoint {
    type Error = aptdat::Error;

    fn try_from(vp: records::Viewpoint) -> Result<Self, Self::Error> {
        let (latitude, longitude) = lat_lon(vp.latitude, vp.longitude)?;

        Ok(Viewpoint {
            latitude,
            longitude,
            height: vp.height.as_f64()?,
            name: vp.name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAND_RUNWAY: &[u8] = b"100 60.96 1 1 0.25 1 2 1 04L 40.62203850 -073.78574917 0.00 100.58 3 10 0 1 22R 40.64323436 -073.75384117 274.93 0.00 3 8 1 1\n";

    #[test]
    fn decodes_land_runway() {
        let rwy = Runway::decode(&Line::new(LAND_RUNWAY)).expect("runway should decode");

        assert_eq!(rwy.runway_type, RunwayType::Land);
        assert_eq!(rwy.width, 60.96);
        assert_eq!(rwy.surface, 1);
        assert_eq!(rwy.length, None);

        let [le, he] = rwy.thresholds.as_slice() else {
            panic!("land runway should have two thresholds");
        };
        assert_eq!(le.ident, "04L");
        assert_eq!(le.latitude, 40.6220385);
        assert_eq!(le.longitude, -73.78574917);
        assert_eq!(le.displaced, Some(0.0));
        assert_eq!(le.stopway, Some(100.58));
        assert_eq!(he.ident, "22R");
        assert_eq!(he.displaced, Some(274.93));
        assert_eq!(he.stopway, Some(0.0));

        assert!((le.heading - 48.793).abs() < 0.001, "heading is {}", le.heading);
        assert_eq!(he.heading, (le.heading + 180.0) % 360.0);
    }

    #[test]
    fn decodes_water_runway() {
        let line = Line::new(b"101 49 1 08 35.04420900 -106.59855700 26 35.04420911 -106.55920000\n");
        let rwy = Runway::decode(&line).expect("water runway should decode");

        assert_eq!(rwy.runway_type, RunwayType::Water);
        assert_eq!(rwy.thresholds.len(), 2);
        assert_eq!(rwy.thresholds[0].displaced, None);
        assert!((rwy.thresholds[0].heading - 90.0).abs() < 0.1);
        assert_eq!(
            rwy.thresholds[1].heading,
            (rwy.thresholds[0].heading + 180.0) % 360.0
        );
    }

    #[test]
    fn decodes_helipad_heading_as_given() {
        let line = Line::new(b"102 H1 47.53918248 -122.30722302 2.00 10.06 10.06 1 0 0 0.25 0\n");
        let rwy = Runway::decode(&line).expect("helipad should decode");

        assert_eq!(rwy.runway_type, RunwayType::Helipad);
        assert_eq!(rwy.length, Some(10.06));
        assert_eq!(rwy.thresholds.len(), 1);
        assert_eq!(rwy.thresholds[0].ident, "H1");
        assert_eq!(rwy.thresholds[0].heading, 2.0);
    }

    #[test]
    fn rejects_other_records() {
        let line = Line::new(b"1302 city New York\n");
        assert_eq!(
            Runway::decode(&line),
            Err(Error::UnsupportedRunwayType(RecordKind::Metadata))
        );
    }

    #[test]
    fn rejects_truncated_runway() {
        let line = Line::new(b"100 60.96 1 1 0.25 1 2 1\n");
        assert!(matches!(
            Runway::decode(&line),
            Err(Error::InvalidRecord {
                error: aptdat::Error::TruncatedRecord { .. },
                ..
            })
        ));
    }

    #[test]
    fn normalizes_legacy_frequencies() {
        let line = Line::new(b"54 11970 TWR\n");
        let record = records::Frequency::try_from(&line).expect("frequency should parse");
        let freq = Frequency::try_from(record).expect("frequency should convert");

        assert_eq!(freq.code, 1054);
        assert_eq!(freq.frequency, 11970);
        assert_eq!(freq.name, "TWR");
    }

    #[test]
    fn splits_parking_usage() {
        let line = Line::new(b"1300 40.64 -73.79 121.5 gate heavy|jets A 1\n");
        let record = records::Parking::try_from(&line).expect("parking should parse");
        let park = ParkingPosition::try_from(record).expect("parking should convert");

        assert_eq!(park.location_type, "gate");
        assert_eq!(park.usage, ["heavy", "jets"]);
        assert_eq!(park.name, "A 1");
        assert_eq!(park.heading, 121.5);
    }
}
