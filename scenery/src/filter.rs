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

//! Selects the facilities within a box, keeping their lines verbatim.

use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::mem;

use aptdat::fields::{Latitude, Longitude, RecordKind};
use aptdat::records::{self, Reader};
use aptdat::Line;
use log::{debug, info};

use crate::geom::{Bounds, Bucket};
use crate::Error;

/// The origin line written before the filtered facilities.
pub const ORIGIN: &[u8] = b"I\n";

/// The version line written before the filtered facilities.
pub const VERSION: &[u8] = b"1200 version - \
    Copyright \xa9 2013, Robin A. Peel (robin@x-plane.com).   \
    This data is free software; you can redistribute it and/or modify it under the terms of \
    the GNU General Public License as published by the Free Software Foundation; either \
    version 2 of the License, or (at your option) any later version.  \
    This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; \
    without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR \
    PURPOSE.  See the GNU General Public License for more details.  \
    You should have received a copy of the GNU General Public License along with this \
    program (\"AptNavGNULicence.txt\"); if not, write to the Free Software Foundation, \
    Inc., 59 Temple Place, Suite 330, Boston, MA 02111-1307, USA.\n";

/// The line that ends the filtered file.
pub const END: &[u8] = b"99\n";

/// The raw lines of one facility.
#[derive(Debug)]
struct Block {
    ident: Vec<u8>,
    text: Vec<u8>,
    matched: bool,
}

#[derive(Debug, Default)]
enum State {
    /// Before the first facility header.
    #[default]
    Idle,
    Collecting(Block),
    /// The last facility header was invalid. The block before it is pending.
    Rejecting(Option<Block>),
}

/// Passes the facilities with at least one position inside of a box.
///
/// A facility matches if any runway end, pavement node or other positioned
/// record lies inside of the box or on its edge. Matching facilities are
/// returned with their lines exactly as read. Each identifier is returned
/// only once, even when several files are pushed through the same filter.
///
/// # Examples
///
/// ```
/// use aptdat::records::Records;
/// use scenery::filter::SpatialFilter;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut filter = SpatialFilter::for_bucket(&"w080n40".parse()?);
/// let data = b"1 50 0 0 KXYZ Test Airport\n\
///     100 30 1 0 0 0 0 0 09 45.0 -75.0 0 0 0 0 0 0 27 45.5 -75.5 0 0 0 0 0 0\n";
///
/// for line in Records::new(data) {
///     assert!(filter.push(&line)?.is_none());
/// }
///
/// assert_eq!(filter.finish().as_deref(), Some(data.as_slice()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SpatialFilter {
    bounds: Bounds,
    seen: HashSet<Vec<u8>>,
    state: State,
}

impl SpatialFilter {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            seen: HashSet::new(),
            state: State::default(),
        }
    }

    /// Creates a filter for the facilities within a bucket.
    pub fn for_bucket(bucket: &Bucket) -> Self {
        Self::new(bucket.bounds())
    }

    /// Adds a line to the current facility.
    ///
    /// Returns the lines of the previous facility if the line starts a new
    /// one and the previous facility matched.
    ///
    /// # Errors
    ///
    /// Returns an error if a position of the line can't be parsed.
    pub fn push(&mut self, line: &Line<'_>) -> Result<Option<Vec<u8>>, Error> {
        match line.kind() {
            RecordKind::Origin | RecordKind::Version(_) | RecordKind::End => return Ok(None),
            kind if kind.is_facility() => return self.start(line),
            _ => {}
        }

        let State::Collecting(block) = &mut self.state else {
            return Ok(None);
        };

        block.text.extend_from_slice(line.raw());

        if !block.matched {
            block.matched = any_inside(&self.bounds, line).map_err(|e| Error::from(e).at(line))?;
        }

        Ok(None)
    }

    /// Completes the last facility at the end of the input.
    ///
    /// The same filter can then be used for the next input.
    pub fn finish(&mut self) -> Option<Vec<u8>> {
        let block = self.take_block();
        self.complete(block)
    }

    /// Filters all facilities of the input to the output.
    ///
    /// Returns the number of facilities written.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails or a position can't be
    /// parsed.
    pub fn filter<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<usize, Error> {
        let mut reader = Reader::new(input);
        let mut count = 0;

        while let Some(line) = reader.next_line()? {
            if let Some(block) = self.push(&line)? {
                output.write_all(&block)?;
                count += 1;
            }
        }

        if let Some(block) = self.finish() {
            output.write_all(&block)?;
            count += 1;
        }

        info!("{count} facilities within {}", self.bounds);
        Ok(count)
    }

    fn start(&mut self, line: &Line<'_>) -> Result<Option<Vec<u8>>, Error> {
        let previous = self.take_block();

        match records::Airport::try_from(line) {
            Ok(arpt) => {
                self.state = State::Collecting(Block {
                    ident: arpt.ident.as_bytes().to_vec(),
                    text: line.raw().to_vec(),
                    matched: false,
                });
                Ok(self.complete(previous))
            }
            Err(e) => {
                self.state = State::Rejecting(previous);
                Err(Error::from(e).at(line))
            }
        }
    }

    fn take_block(&mut self) -> Option<Block> {
        match mem::take(&mut self.state) {
            State::Idle => None,
            State::Collecting(block) => Some(block),
            State::Rejecting(pending) => pending,
        }
    }

    /// Returns the lines of a completed block if it matched and wasn't
    /// returned before.
    fn complete(&mut self, block: Option<Block>) -> Option<Vec<u8>> {
        let block = block.filter(|block| block.matched)?;

        if !self.seen.insert(block.ident.clone()) {
            debug!(
                "skipping duplicate {}",
                String::from_utf8_lossy(&block.ident)
            );
            return None;
        }

        Some(block.text)
    }
}

/// Returns `true` if any position of the record is inside of the bounds.
fn any_inside(bounds: &Bounds, line: &Line<'_>) -> Result<bool, aptdat::Error> {
    match line.kind() {
        RecordKind::LandRunway => {
            let rwy = records::LandRunway::try_from(line)?;
            Ok(inside(bounds, rwy.le_latitude, rwy.le_longitude)?
                || inside(bounds, rwy.he_latitude, rwy.he_longitude)?)
        }
        RecordKind::WaterRunway => {
            let rwy = records::WaterRunway::try_from(line)?;
            Ok(inside(bounds, rwy.le_latitude, rwy.le_longitude)?
                || inside(bounds, rwy.he_latitude, rwy.he_longitude)?)
        }
        RecordKind::Helipad => {
            let pad = records::Helipad::try_from(line)?;
            inside(bounds, pad.latitude, pad.longitude)
        }
        kind if kind.is_point() => {
            let pos = records::Position::try_from(line)?;
            inside(bounds, pos.latitude, pos.longitude)
        }
        _ => Ok(false),
    }
}

fn inside(bounds: &Bounds, lat: Latitude<'_>, lon: Longitude<'_>) -> Result<bool, aptdat::Error> {
    Ok(bounds.contains(lon.as_decimal()?, lat.as_decimal()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aptdat::records::Records;

    #[test]
    fn version_line_carries_license() {
        assert_eq!(VERSION.len(), 768);
        assert_eq!(Line::at(VERSION, 1).kind(), RecordKind::Version(1200));
        assert!(VERSION.starts_with(b"1200 version - Copyright \xa9 2013, Robin A. Peel"));
        assert!(VERSION.ends_with(b"Boston, MA 02111-1307, USA.\n"));
        assert_eq!(VERSION.iter().filter(|&&b| b == b'\n').count(), 1);
    }

    const KXYZ: &[u8] = b"1 50 0 0 KXYZ Test Airport
100 30 1 0 0 0 0 0 09 45.0 -75.0 0 0 0 0 0 0 27 45.5 -75.5 0 0 0 0 0 0
";

    fn run(filter: &mut SpatialFilter, data: &[u8]) -> Vec<Vec<u8>> {
        let mut out: Vec<Vec<u8>> = Records::new(data)
            .filter_map(|line| filter.push(&line).expect("records should be valid"))
            .collect();
        out.extend(filter.finish());
        out
    }

    fn w080n40() -> SpatialFilter {
        SpatialFilter::for_bucket(&"w080n40".parse().expect("bucket should parse"))
    }

    #[test]
    fn emits_matching_block_verbatim() {
        assert_eq!(run(&mut w080n40(), KXYZ), [KXYZ.to_vec()]);
    }

    #[test]
    fn skips_facilities_outside() {
        let data = b"1 50 0 0 KOUT Outside\n14 30.0 -75.0 10 0 Tower\n";
        assert!(run(&mut w080n40(), data).is_empty());
    }

    #[test]
    fn matches_on_edges() {
        let on_edge = b"1 0 0 0 KMIN Min\n1300 40.0 -80.0 0 gate all A\n";
        assert_eq!(run(&mut w080n40(), on_edge).len(), 1);

        let outside = b"1 0 0 0 KOUT Out\n1300 40.0 -80.0001 0 gate all A\n";
        assert!(run(&mut w080n40(), outside).is_empty());
    }

    #[test]
    fn matches_any_point_record() {
        let node = b"1 0 0 0 KNOD Node\n110 1 0.25 0 Taxiway\n111 10.0 10.0\n111 45.0 -75.0\n";
        assert_eq!(run(&mut w080n40(), node), [node.to_vec()]);
    }

    #[test]
    fn removes_duplicates_across_inputs() {
        let mut filter = w080n40();
        let second = b"1 50 0 0 KXYZ Test Airport Copy\n14 45.0 -75.0 10 0 Tower\n";

        assert_eq!(run(&mut filter, KXYZ), [KXYZ.to_vec()]);
        assert!(run(&mut filter, second).is_empty());
    }

    #[test]
    fn keeps_blank_lines_but_not_header() {
        let data = b"I\n1100 Version\n1 50 0 0 KXYZ Test\n\n14 45.0 -75.0 10 0 Tower\n99\n";
        assert_eq!(
            run(&mut w080n40(), data),
            [b"1 50 0 0 KXYZ Test\n\n14 45.0 -75.0 10 0 Tower\n".to_vec()]
        );
    }

    #[test]
    fn emits_previous_block_on_next_header() {
        let mut filter = w080n40();
        let data = [KXYZ, b"1 0 0 0 KNXT Next\n"].concat();
        let mut emitted = Vec::new();
        for line in Records::new(&data) {
            if let Some(block) = filter.push(&line).expect("records should be valid") {
                emitted.push(block);
            }
        }

        assert_eq!(emitted, [KXYZ.to_vec()]);
        assert_eq!(filter.finish(), None);
    }

    #[test]
    fn reports_malformed_positions() {
        let mut filter = w080n40();
        let mut lines = Records::new(b"1 0 0 0 KBAD Bad\n14 north -75.0 10 0 Tower\n");

        let header = lines.next().expect("header line");
        assert_eq!(filter.push(&header), Ok(None));

        let viewpoint = lines.next().expect("viewpoint line");
        assert!(matches!(
            filter.push(&viewpoint),
            Err(Error::InvalidRecord { line: Some(2), .. })
        ));
    }

    #[test]
    fn filters_to_writer() {
        let mut output = Vec::new();
        let data = [b"I\n1100 Version\n".as_slice(), KXYZ, b"99\n"].concat();
        let count = w080n40()
            .filter(data.as_slice(), &mut output)
            .expect("filtering from memory");

        assert_eq!(count, 1);
        assert_eq!(output, KXYZ);
    }
}
