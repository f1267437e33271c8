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

mod airport;
mod frequency;
mod metadata;
mod parking;
mod position;
mod runway;
mod viewpoint;

pub use airport::Airport;
pub use frequency::Frequency;
pub use metadata::Metadata;
pub use parking::Parking;
pub use position::Position;
pub use runway::{Helipad, LandRunway, WaterRunway};
pub use viewpoint::Viewpoint;

use std::io::{self, BufRead};

use log::{debug, trace};

use crate::fields::RecordKind;
use crate::Line;

/// Iterator over the lines of an apt.dat file held in memory.
pub struct Records<'a> {
    data: &'a [u8],
    pos: usize,
    index: usize,
}

impl<'a> Records<'a> {
    /// Creates a new record iterator from a byte slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use aptdat::records::{Airport, Records};
    /// #
    /// # fn parse_records(data: &[u8]) -> Result<(), aptdat::Error> {
    /// for line in Records::new(data) {
    ///     if line.kind().is_facility() {
    ///         let arpt = Airport::try_from(&line)?;
    ///         // now you can read the airport's fields or convert it
    ///         // to some other type
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            index: 0,
        }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }

        let rest = &self.data[self.pos..];
        let end = rest
            .iter()
            .position(|&b| b == b'\n')
            .map_or(rest.len(), |i| i + 1);

        let line = Line::at(&rest[..end], self.index);
        self.pos += end;
        self.index += 1;
        Some(line)
    }
}

/// Streaming reader of apt.dat lines.
///
/// Only the current line is kept in memory. Each line is returned with its
/// line terminator and without any decoding, so it can be written out
/// verbatim.
pub struct Reader<R> {
    inner: R,
    buf: Vec<u8>,
    index: usize,
}

impl<R: BufRead> Reader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            index: 0,
        }
    }

    /// Reads the next line, or `None` at the end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error of the underlying reader.
    pub fn next_line(&mut self) -> io::Result<Option<Line<'_>>> {
        self.buf.clear();

        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        let line = Line::at(&self.buf, self.index);
        self.index += 1;

        match line.kind() {
            RecordKind::Version(version) => debug!("reading apt.dat version {version}"),
            RecordKind::Unknown => trace!("unknown row code on line {}", self.index),
            _ => {}
        }

        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APT_DAT: &[u8] = b"I\n1100 Version - data cycle 2013.10\n\n1 13 1 0 KJFK John F Kennedy Intl\n1302 city New York\n99";

    fn kinds(data: &[u8]) -> Vec<RecordKind> {
        Records::new(data).map(|line| line.kind()).collect()
    }

    #[test]
    fn classifies_lines() {
        assert_eq!(
            kinds(APT_DAT),
            [
                RecordKind::Origin,
                RecordKind::Version(1100),
                RecordKind::Blank,
                RecordKind::LandAirport,
                RecordKind::Metadata,
                RecordKind::End,
            ]
        );
    }

    #[test]
    fn keeps_line_terminators() {
        let lines: Vec<&[u8]> = Records::new(b"I\r\n1 13 1 0 KJFK\n").map(|l| l.raw()).collect();
        assert_eq!(lines, [b"I\r\n".as_slice(), b"1 13 1 0 KJFK\n".as_slice()]);
    }

    #[test]
    fn reader_matches_records() {
        let mut reader = Reader::new(APT_DAT);
        let mut read = Vec::new();

        while let Some(line) = reader.next_line().expect("reading from memory") {
            read.push((line.kind(), line.raw().to_vec(), line.number()));
        }

        let expected: Vec<_> = Records::new(APT_DAT)
            .map(|line| (line.kind(), line.raw().to_vec(), line.number()))
            .collect();
        assert_eq!(read, expected);
    }
}
