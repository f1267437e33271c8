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

//! Airport facilities and scenery buckets from X-Plane apt.dat files.
//!
//! The [`facility`] module builds an airport model from the records that the
//! [`aptdat`] crate parses. Runway headings aren't part of the apt.dat data
//! for land and water runways, so they are derived from the runway ends with
//! the [`initial_bearing`](geom::initial_bearing) of the great circle.
//!
//! Scenery is cut into [`Bucket`](geom::Bucket)s of 10x10 degrees. The
//! [`filter`] passes the facilities of a bucket through unchanged, and the
//! [`output`] module writes the FlightGear files of a facility.
//!
//! # Examples
//!
//! ```
//! use scenery::facility::Facilities;
//!
//! # fn main() -> Result<(), scenery::Error> {
//! let data = b"1 13 1 0 KJFK John F Kennedy Intl
//! 100 60.96 1 1 0.25 1 2 1 04L 40.62203850 -073.78574917 0.00 100.58 3 10 0 1 22R 40.64323436 -073.75384117 274.93 0.00 3 8 1 1
//! ";
//!
//! for facility in Facilities::new(data.as_slice()) {
//!     let facility = facility?;
//!     for threshold in facility.thresholds() {
//!         println!("{} {:.0}", threshold.ident, threshold.heading);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

mod error;

pub mod dem;
pub mod downgrade;
pub mod facility;
pub mod filter;
pub mod geom;
pub mod output;
pub mod split;

pub use error::Error;
pub use facility::{Accumulator, Facilities, Facility};
