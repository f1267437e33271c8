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

//! Reduces apt.dat files to the records of the 1000 version.
//!
//! Airports, runways and positioned objects always pass. Pavements,
//! traffic flows and taxi route networks pass together with their
//! components. Components that don't follow their parent are dropped.

use std::io::{BufRead, Write};

use aptdat::fields::RecordKind;
use aptdat::records::Reader;
use log::info;

use crate::Error;

/// The version line and the blank line written before the downgraded
/// records.
pub const PREAMBLE: &[u8] = b"1000 version (downgraded) - \
    Copyright \xa9 2013, Robin A. Peel (robin@x-plane.com).   \
    This data is free software; you can redistribute it and/or modify it under the terms of \
    the GNU General Public License as published by the Free Software Foundation; either \
    version 2 of the License, or (at your option) any later version.  \
    This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; \
    without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR \
    PURPOSE.  See the GNU General Public License for more details.  \
    You should have received a copy of the GNU General Public License along with this \
    program (\"AptNavGNULicence.txt\"); if not, write to the Free Software Foundation, \
    Inc., 59 Temple Place, Suite 330, Boston, MA 02111-1307, USA.\n\n";

/// The line that ends the downgraded file.
pub const END: &[u8] = b"99\n";

/// The parent record that components may follow.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Context {
    #[default]
    None,
    /// A pavement, linear feature or boundary.
    Feature,
    Traffic,
    Taxi,
}

/// Decides which records to keep.
///
/// # Examples
///
/// ```
/// use aptdat::fields::RecordKind;
/// use scenery::downgrade::Downgrade;
///
/// let mut downgrade = Downgrade::new();
///
/// assert!(downgrade.keep(RecordKind::Pavement));
/// assert!(downgrade.keep(RecordKind::Node));
/// assert!(!downgrade.keep(RecordKind::Metadata));
/// assert!(!downgrade.keep(RecordKind::Node));
/// ```
#[derive(Debug, Default)]
pub struct Downgrade {
    context: Context,
}

impl Downgrade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(&self) -> Context {
        self.context
    }

    /// Returns `true` if a record of the kind is kept in the current
    /// context.
    pub fn keep(&mut self, kind: RecordKind) -> bool {
        use RecordKind::*;

        match kind {
            Origin | Version(_) | End => false,

            LandAirport | SeaplaneBase | Heliport | LandRunway | WaterRunway | Helipad
            | Viewpoint | StartupLocation | LightBeacon | Windsock | Sign | LightingObject
            | Parking | LegacyFrequency(_) => self.enter(Context::None),

            Pavement | LinearFeature | AirportBoundary => self.enter(Context::Feature),
            TrafficFlow => self.enter(Context::Traffic),
            TaxiRouteNetwork => self.enter(Context::Taxi),

            Node | BezierNode | CloseLoopNode | CloseLoopBezierNode | EndNode | EndBezierNode => {
                self.within(Context::Feature)
            }
            WindRule | CeilingRule | VisibilityRule | TimeRule | RunwayInUse | VfrPattern => {
                self.within(Context::Traffic)
            }
            TaxiRouteNode | TaxiRouteEdge | ActiveZone => self.within(Context::Taxi),

            Blank | Frequency(_) | ParkingMetadata | Metadata | Unknown => {
                self.context = Context::None;
                false
            }
        }
    }

    /// Writes the kept lines of the input to the output.
    ///
    /// Neither the [`PREAMBLE`] nor the [`END`] are written, so several
    /// files can be appended to one output.
    ///
    /// Returns the number of lines written.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn downgrade<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<usize, Error> {
        let mut reader = Reader::new(input);
        let mut count = 0;

        while let Some(line) = reader.next_line()? {
            if self.keep(line.kind()) {
                output.write_all(line.raw())?;
                count += 1;
            }
        }

        info!("kept {count} lines");
        Ok(count)
    }

    fn enter(&mut self, context: Context) -> bool {
        self.context = context;
        true
    }

    fn within(&mut self, context: Context) -> bool {
        if self.context == context {
            true
        } else {
            self.context = Context::None;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aptdat::Line;

    #[test]
    fn preamble_is_version_line_with_license() {
        assert_eq!(PREAMBLE.len(), 782);
        assert_eq!(Line::at(PREAMBLE, 1).kind(), RecordKind::Version(1000));
        assert!(PREAMBLE.starts_with(b"1000 version (downgraded) - Copyright \xa9 2013, Robin A. Peel"));
        assert!(PREAMBLE.ends_with(b"Boston, MA 02111-1307, USA.\n\n"));
    }

    fn downgrade(data: &[u8]) -> String {
        let mut output = Vec::new();
        Downgrade::new()
            .downgrade(data, &mut output)
            .expect("downgrading in memory");
        String::from_utf8(output).expect("test data is ASCII")
    }

    #[test]
    fn keeps_components_after_parent() {
        let data = b"I\n1100 Version\n1 13 1 0 KJFK JFK\n110 1 0.25 0 Taxiway\n111 40.6 -73.7\n113 40.7 -73.7\n1000 West flow\n1001 KJFK 270 360 5\n1100 04L 11920 arr heavy 0 360 0 999\n1200\n1201 40.6 -73.7 both 0 A\n1202 0 1 twoway taxiway A\n99\n";

        assert_eq!(
            downgrade(data),
            "1 13 1 0 KJFK JFK\n110 1 0.25 0 Taxiway\n111 40.6 -73.7\n113 40.7 -73.7\n1000 West flow\n1001 KJFK 270 360 5\n1100 04L 11920 arr heavy 0 360 0 999\n1200\n1201 40.6 -73.7 both 0 A\n1202 0 1 twoway taxiway A\n"
        );
    }

    #[test]
    fn drops_orphaned_components() {
        let data = b"1 13 1 0 KJFK JFK\n110 1 0.25 0 Taxiway\n1302 city New York\n111 40.6 -73.7\n1000 West flow\n1201 40.6 -73.7 both 0 A\n1001 KJFK 270 360 5\n";

        assert_eq!(
            downgrade(data),
            "1 13 1 0 KJFK JFK\n110 1 0.25 0 Taxiway\n1000 West flow\n"
        );
    }

    #[test]
    fn drops_new_frequencies_and_blank_lines() {
        let data = b"1 13 1 0 KJFK JFK\n\n1050 128725 ATIS\n54 11970 TWR\n1300 40.64 -73.79 121.5 gate heavy A1\n1301 E airline\n";

        assert_eq!(
            downgrade(data),
            "1 13 1 0 KJFK JFK\n54 11970 TWR\n1300 40.64 -73.79 121.5 gate heavy A1\n"
        );
    }

    #[test]
    fn header_keeps_context() {
        let mut downgrade = Downgrade::new();

        assert!(downgrade.keep(RecordKind::Pavement));
        assert!(!downgrade.keep(RecordKind::End));
        assert_eq!(downgrade.context(), Context::Feature);
        assert!(downgrade.keep(RecordKind::BezierNode));
    }
}
