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

use std::io::BufRead;
use std::mem;

use aptdat::fields::RecordKind;
use aptdat::records::{self, Reader};
use aptdat::Line;
use log::{debug, warn};

use super::*;

#[derive(Debug, Default)]
enum State {
    /// No facility header was read yet.
    #[default]
    Idle,
    /// Records are added to the current facility.
    Accumulating(Facility),
    /// The last facility header was invalid and its records are dropped.
    ///
    /// The facility before it is still pending, as it was complete when the
    /// invalid header was read.
    Rejecting(Option<Facility>),
}

/// Builds facilities from the lines of an apt.dat file.
///
/// Every line is [`push`]ed in order. A facility is complete when the next
/// facility header is pushed or the input [`finish`]es, and is returned
/// exactly once.
///
/// [`push`]: Accumulator::push
/// [`finish`]: Accumulator::finish
///
/// # Examples
///
/// ```
/// use aptdat::records::Records;
/// use scenery::facility::Accumulator;
///
/// # fn main() -> Result<(), scenery::Error> {
/// let data = b"1 13 1 0 KJFK John F Kennedy Intl\n1302 city New York\n";
/// let mut acc = Accumulator::new();
///
/// for line in Records::new(data) {
///     assert!(acc.push(&line)?.is_none());
/// }
///
/// let jfk = acc.finish().expect("KJFK should be complete");
/// assert_eq!(jfk.ident, "KJFK");
/// assert_eq!(jfk.metadata["city"], "New York");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Accumulator {
    state: State,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the facility that records are currently added to.
    pub fn current(&self) -> Option<&Facility> {
        match &self.state {
            State::Accumulating(facility) => Some(facility),
            _ => None,
        }
    }

    /// Adds a line to the current facility.
    ///
    /// Returns the previous facility if the line starts a new one.
    ///
    /// # Errors
    ///
    /// Returns an error if a record of the facility can't be decoded. The
    /// record is dropped and the facility stays current. If the facility
    /// header itself is invalid, all records up to the next header are
    /// dropped.
    pub fn push(&mut self, line: &Line<'_>) -> Result<Option<Facility>, Error> {
        if line.kind().is_facility() {
            return self.start(line);
        }

        let State::Accumulating(facility) = &mut self.state else {
            match line.kind() {
                RecordKind::Blank
                | RecordKind::Origin
                | RecordKind::Version(_)
                | RecordKind::End
                | RecordKind::Unknown => {}
                kind => debug!("ignoring {kind:?} record outside of a facility"),
            }
            return Ok(None);
        };

        add_record(facility, line).map_err(|e| {
            warn!("dropping record of {}: {e}", facility.ident);
            e.at(line)
        })?;

        Ok(None)
    }

    /// Completes the last facility at the end of the input.
    pub fn finish(&mut self) -> Option<Facility> {
        match mem::take(&mut self.state) {
            State::Idle => None,
            State::Accumulating(facility) => Some(facility),
            State::Rejecting(pending) => pending,
        }
    }

    fn start(&mut self, line: &Line<'_>) -> Result<Option<Facility>, Error> {
        let previous = self.finish();

        let header = records::Airport::try_from(line)
            .and_then(Facility::try_from)
            .map_err(|e| Error::from(e).at(line));

        match header {
            Ok(facility) => {
                debug!("reading {} {}", facility.ident, facility.name);
                self.state = State::Accumulating(facility);
                Ok(previous)
            }
            Err(e) => {
                warn!("dropping facility: {e}");
                self.state = State::Rejecting(previous);
                Err(e)
            }
        }
    }
}

fn add_record(facility: &mut Facility, line: &Line<'_>) -> Result<(), Error> {
    match line.kind() {
        RecordKind::LandRunway | RecordKind::WaterRunway | RecordKind::Helipad => {
            facility.runways.push(Runway::decode(line)?);
        }
        RecordKind::Parking => {
            let park = records::Parking::try_from(line)?;
            facility.parking.push(park.try_into()?);
        }
        RecordKind::Metadata => {
            let meta = records::Metadata::try_from(line)?;
            if let Some(key) = meta.key.filter(|_| !meta.value.is_empty()) {
                facility.metadata.insert(key.to_string(), meta.value.to_string());
            }
        }
        RecordKind::Frequency(_) | RecordKind::LegacyFrequency(_) => {
            let freq = records::Frequency::try_from(line)?;
            facility.frequencies.push(freq.try_into()?);
        }
        RecordKind::Viewpoint => {
            let vp = records::Viewpoint::try_from(line)?;
            facility.viewpoints.push(vp.try_into()?);
        }
        RecordKind::Blank
        | RecordKind::Origin
        | RecordKind::Version(_)
        | RecordKind::End
        | RecordKind::LandAirport
        | RecordKind::SeaplaneBase
        | RecordKind::Heliport
        | RecordKind::Pavement
        | RecordKind::LinearFeature
        | RecordKind::AirportBoundary
        | RecordKind::Node
        | RecordKind::BezierNode
        | RecordKind::CloseLoopNode
        | RecordKind::CloseLoopBezierNode
        | RecordKind::EndNode
        | RecordKind::EndBezierNode
        | RecordKind::StartupLocation
        | RecordKind::LightBeacon
        | RecordKind::Windsock
        | RecordKind::Sign
        | RecordKind::LightingObject
        | RecordKind::TrafficFlow
        | RecordKind::WindRule
        | RecordKind::CeilingRule
        | RecordKind::VisibilityRule
        | RecordKind::TimeRule
        | RecordKind::RunwayInUse
        | RecordKind::VfrPattern
        | RecordKind::TaxiRouteNetwork
        | RecordKind::TaxiRouteNode
        | RecordKind::TaxiRouteEdge
        | RecordKind::ActiveZone
        | RecordKind::ParkingMetadata
        | RecordKind::Unknown => {}
    }

    Ok(())
}

/// Iterator over the facilities of an apt.dat file.
///
/// Invalid records are returned as error and reading continues with the next
/// line, so callers decide whether to skip or stop.
///
/// # Examples
///
/// ```no_run
/// # use std::fs::File;
/// # use std::io::BufReader;
/// use scenery::facility::Facilities;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let file = File::open("apt.dat")?;
///
/// for facility in Facilities::new(BufReader::new(file)) {
///     let facility = facility?;
///     println!("{} has {} runways", facility.ident, facility.runways.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct Facilities<R> {
    reader: Reader<R>,
    accumulator: Accumulator,
    done: bool,
}

impl<R: BufRead> Facilities<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: Reader::new(inner),
            accumulator: Accumulator::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Facilities<R> {
    type Item = Result<Facility, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            match self.reader.next_line() {
                Ok(Some(line)) => match self.accumulator.push(&line) {
                    Ok(Some(facility)) => return Some(Ok(facility)),
                    Ok(None) => continue,
                    Err(e) => return Some(Err(e)),
                },
                Ok(None) => {
                    self.done = true;
                    return self.accumulator.finish().map(Ok);
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aptdat::records::Records;

    const APT_DAT: &[u8] = b"I
1100 Version - data cycle 2013.10

1 13 1 0 KJFK John F Kennedy Intl
100 60.96 1 1 0.25 1 2 1 04L 40.62203850 -073.78574917 0.00 100.58 3 10 0 1 22R 40.64323436 -073.75384117 274.93 0.00 3 8 1 1
14 40.64928 -073.78281 105 0 ATC Tower
14 40.64 -073.78 10 0 Second
1050 128725 KENNEDY ATIS
54 11970 TWR
1300 40.64 -73.79 121.5 gate heavy|jets A 1
1302 city New York
1302 city Jamaica
1302 state
1302 country United States

17 500 0 0 XHEL Test Heliport
102 H1 47.53918248 -122.30722302 2.00 10.06 10.06 1 0 0 0.25 0
99
";

    fn accumulate(data: &[u8]) -> Vec<Result<Facility, Error>> {
        let mut acc = Accumulator::new();
        let mut out: Vec<_> = Records::new(data)
            .filter_map(|line| acc.push(&line).transpose())
            .collect();
        out.extend(acc.finish().map(Ok));
        out
    }

    #[test]
    fn builds_facilities() {
        let facilities: Vec<Facility> = accumulate(APT_DAT)
            .into_iter()
            .collect::<Result<_, _>>()
            .expect("all records should be valid");

        assert_eq!(facilities.len(), 2);

        let jfk = &facilities[0];
        assert_eq!(jfk.facility_type, FacilityType::Airport);
        assert_eq!(jfk.elevation, 13);
        assert_eq!(jfk.ident, "KJFK");
        assert_eq!(jfk.name, "John F Kennedy Intl");
        assert_eq!(jfk.runways.len(), 1);
        assert_eq!(jfk.viewpoints.len(), 2);
        assert_eq!(jfk.tower().map(|vp| vp.name.as_str()), Some("0 ATC Tower"));
        assert_eq!(
            jfk.frequencies.iter().map(|f| f.code).collect::<Vec<_>>(),
            [1050, 1054]
        );
        assert_eq!(jfk.parking.len(), 1);

        let heli = &facilities[1];
        assert_eq!(heli.facility_type, FacilityType::Heliport);
        assert_eq!(heli.runways[0].runway_type, RunwayType::Helipad);
    }

    #[test]
    fn later_metadata_overwrites() {
        let facilities = accumulate(APT_DAT);
        let jfk = facilities[0].as_ref().expect("KJFK should be valid");

        assert_eq!(jfk.metadata.get("city").map(String::as_str), Some("Jamaica"));
        assert_eq!(
            jfk.metadata.get("country").map(String::as_str),
            Some("United States")
        );
        // no value
        assert!(!jfk.metadata.contains_key("state"));
    }

    #[test]
    fn ignores_records_before_first_facility() {
        let data = b"I\n1100 Version\n100 60.96 1 1 0.25 1 2 1 04L\n1 13 1 0 KJFK JFK\n";
        let facilities = accumulate(data);

        assert_eq!(facilities.len(), 1);
        assert_eq!(
            facilities[0].as_ref().map(|f| f.runways.len()),
            Ok(0)
        );
    }

    #[test]
    fn drops_invalid_record_only() {
        let data = b"1 13 1 0 KJFK JFK\n100 60.96 1 1 0.25 1 2 1 04L\n1302 city New York\n";
        let results = accumulate(data);

        assert_eq!(results.len(), 2);
        assert!(matches!(
            results[0],
            Err(Error::InvalidRecord { line: Some(2), .. })
        ));
        let jfk = results[1].as_ref().expect("KJFK should be complete");
        assert!(jfk.runways.is_empty());
        assert_eq!(jfk.metadata.len(), 1);
    }

    #[test]
    fn invalid_header_keeps_previous_facility() {
        let data = b"1 13 1 0 KJFK JFK\n1 xx 1 0 KBAD Bad\n1302 city Nowhere\n16 0 0 0 KSEA Seaplane\n";
        let results = accumulate(data);

        assert_eq!(results.len(), 3);
        assert!(matches!(
            results[0],
            Err(Error::InvalidRecord { line: Some(2), .. })
        ));
        let jfk = results[1].as_ref().expect("KJFK should be complete");
        assert_eq!(jfk.ident, "KJFK");
        assert!(jfk.metadata.is_empty());

        let sea = results[2].as_ref().expect("KSEA should be complete");
        assert_eq!(sea.facility_type, FacilityType::SeaplaneBase);
    }

    #[test]
    fn emits_each_facility_once() {
        let mut acc = Accumulator::new();
        for line in Records::new(b"1 13 1 0 KJFK JFK\n") {
            acc.push(&line).expect("header should be valid");
        }

        assert!(acc.current().is_some());
        assert!(acc.finish().is_some());
        assert!(acc.finish().is_none());
        assert!(acc.current().is_none());
    }

    #[test]
    fn iterates_reader() {
        let facilities: Vec<String> = Facilities::new(APT_DAT)
            .map(|f| f.expect("all records should be valid").ident)
            .collect();

        assert_eq!(facilities, ["KJFK", "XHEL"]);
    }
}
