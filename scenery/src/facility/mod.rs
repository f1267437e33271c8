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

//! The airport facility model.
//!
//! A [`Facility`] is an airport, seaplane base or heliport with everything
//! that follows its header in an apt.dat file. Facilities are built line by
//! line by the [`Accumulator`].

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::Point;

use crate::Error;

mod accumulator;
mod convert;

pub use accumulator::{Accumulator, Facilities};

/// The kind of a facility by its row code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u16", try_from = "u16"))]
pub enum FacilityType {
    Airport,
    SeaplaneBase,
    Heliport,
}

impl From<FacilityType> for u16 {
    fn from(value: FacilityType) -> Self {
        match value {
            FacilityType::Airport => 1,
            FacilityType::SeaplaneBase => 16,
            FacilityType::Heliport => 17,
        }
    }
}

impl TryFrom<u16> for FacilityType {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Airport),
            16 => Ok(Self::SeaplaneBase),
            17 => Ok(Self::Heliport),
            code => Err(Error::UnknownTypeCode(code)),
        }
    }
}

/// An airport, seaplane base or heliport.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Facility {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub facility_type: FacilityType,
    /// Elevation in meters.
    #[cfg_attr(feature = "serde", serde(rename = "elev-m"))]
    pub elevation: i32,
    pub ident: String,
    pub name: String,
    pub runways: Vec<Runway>,
    pub frequencies: Vec<Frequency>,
    pub parking: Vec<ParkingPosition>,
    pub viewpoints: Vec<Viewpoint>,
    pub metadata: BTreeMap<String, String>,
}

impl Facility {
    pub fn new(facility_type: FacilityType, elevation: i32, ident: String, name: String) -> Self {
        Self {
            facility_type,
            elevation,
            ident,
            name,
            runways: Vec::new(),
            frequencies: Vec::new(),
            parking: Vec::new(),
            viewpoints: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Returns the control tower, which is the first viewpoint.
    pub fn tower(&self) -> Option<&Viewpoint> {
        self.viewpoints.first()
    }

    /// Returns the thresholds of all runways in order.
    pub fn thresholds(&self) -> impl Iterator<Item = &Threshold> {
        self.runways.iter().flat_map(|rwy| rwy.thresholds.iter())
    }
}

/// The kind of a runway by its row code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u16", try_from = "u16"))]
pub enum RunwayType {
    Land,
    Water,
    Helipad,
}

impl From<RunwayType> for u16 {
    fn from(value: RunwayType) -> Self {
        match value {
            RunwayType::Land => 100,
            RunwayType::Water => 101,
            RunwayType::Helipad => 102,
        }
    }
}

impl TryFrom<u16> for RunwayType {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            100 => Ok(Self::Land),
            101 => Ok(Self::Water),
            102 => Ok(Self::Helipad),
            code => Err(Error::UnknownTypeCode(code)),
        }
    }
}

/// A land runway, water runway or helipad.
///
/// Land and water runways have two thresholds, whose headings are exact
/// reciprocals. A helipad has a single threshold.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Runway {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub runway_type: RunwayType,
    /// Width in meters.
    pub width: f64,
    /// Length in meters, known for helipads only.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub length: Option<f64>,
    pub surface: u16,
    pub thresholds: Vec<Threshold>,
}

/// A runway end.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Threshold {
    #[cfg_attr(feature = "serde", serde(rename = "rwy"))]
    pub ident: String,
    #[cfg_attr(feature = "serde", serde(rename = "lat"))]
    pub latitude: f64,
    #[cfg_attr(feature = "serde", serde(rename = "lon"))]
    pub longitude: f64,
    /// True heading in degrees within `[0, 360)`.
    #[cfg_attr(feature = "serde", serde(rename = "hdg-deg"))]
    pub heading: f64,
    /// Displaced threshold in meters.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "displ-m", default, skip_serializing_if = "Option::is_none")
    )]
    pub displaced: Option<f64>,
    /// Stopway in meters.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "stopw-m", default, skip_serializing_if = "Option::is_none")
    )]
    pub stopway: Option<f64>,
}

impl Threshold {
    /// Returns the position of the runway end.
    pub fn position(&self) -> Point<f64> {
        coord!(self.latitude, self.longitude)
    }
}

/// A communication frequency.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frequency {
    /// The four digit row code, `1050` to `1056`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub code: u16,
    /// Frequency in kHz (or in 10 kHz for legacy records).
    pub frequency: u32,
    pub name: String,
}

/// A startup location at a gate, ramp or hangar.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParkingPosition {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub location_type: String,
    #[cfg_attr(feature = "serde", serde(rename = "lat"))]
    pub latitude: f64,
    #[cfg_attr(feature = "serde", serde(rename = "lon"))]
    pub longitude: f64,
    #[cfg_attr(feature = "serde", serde(rename = "hdg-deg"))]
    pub heading: f64,
    /// Aircraft types that may use the position, e.g. `heavy` or `jets`.
    pub usage: Vec<String>,
    pub name: String,
}

/// A tower viewpoint.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Viewpoint {
    #[cfg_attr(feature = "serde", serde(rename = "lat"))]
    pub latitude: f64,
    #[cfg_attr(feature = "serde", serde(rename = "lon"))]
    pub longitude: f64,
    /// Height of the viewpoint in meters.
    #[cfg_attr(feature = "serde", serde(rename = "elev-m"))]
    pub height: f64,
    pub name: String,
}
