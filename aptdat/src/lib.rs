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

//! X-Plane apt.dat airport data parser.
//!
//! This crate provides a tokenizer for the line oriented apt.dat format and
//! parsers for its [records] with their [fields]. Each line is split into
//! whitespace separated fields, where the first field is the row code that
//! determines the [`RecordKind`]. Records reference the line's bytes and
//! parse numbers only when asked to.
//!
//! apt.dat files are ISO-8859-1 encoded. No field is ever decoded unless
//! requested, so lines can be passed through byte for byte.
//!
//! # Examples
//!
//! Lets parse John F Kennedy Intl airport and print its name:
//!
//! ```
//! use aptdat::records::Airport;
//! use aptdat::Line;
//!
//! # fn main() -> Result<(), aptdat::Error> {
//! let line = Line::new(b"1 13 1 0 KJFK John F Kennedy Intl");
//! let airport = Airport::try_from(&line)?;
//!
//! let ident = airport.ident;
//! let elevation = airport.elevation.as_i32()?;
//! println!("{ident} at {elevation}"); // => "KJFK at 13"
//! #     Ok(())
//! # }
//! ```
//!
//! Files are read line by line with the [`Reader`], which keeps only the
//! current line in memory:
//!
//! ```no_run
//! # use std::fs::File;
//! # use std::io::BufReader;
//! # use aptdat::records::Reader;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = File::open("apt.dat")?;
//! let mut reader = Reader::new(BufReader::new(file));
//!
//! while let Some(line) = reader.next_line()? {
//!     if line.kind().is_runway() {
//!         println!("runway on line {:?}", line.number());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [records]: crate::records
//! [fields]: crate::fields
//! [`RecordKind`]: crate::fields::RecordKind
//! [`Reader`]: crate::records::Reader

#[macro_use]
mod macros;

mod error;
mod field;
mod line;
mod record;

pub use field::*;
pub use line::Line;
// Re-export the derive macro for convenience
pub(crate) use aptdat_derive::Record;

pub mod fields;
pub mod records;
pub use error::Error;
pub(crate) use fields::RecordKind;
