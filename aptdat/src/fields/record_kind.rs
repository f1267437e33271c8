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

use crate::{Error, Field};

/// Version numbers that identify the version line of a file.
pub const VERSIONS: [u16; 6] = [1000, 1050, 1100, 1130, 1150, 1200];

/// The kind of a record, determined by its row code.
///
/// Row codes this crate doesn't know are [`Unknown`](RecordKind::Unknown) and
/// meant to be skipped, so newer files can still be read.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum RecordKind {
    /// An empty or whitespace only line.
    Blank,
    /// The `I` or `A` line at the start of a file.
    Origin,
    /// The version and copyright line following the origin.
    Version(u16),
    /// End of file marker `99`.
    End,

    // facilities
    LandAirport,
    SeaplaneBase,
    Heliport,

    // landing and takeoff surfaces
    LandRunway,
    WaterRunway,
    Helipad,

    // taxiways, ramps and boundaries
    Pavement,
    LinearFeature,
    AirportBoundary,
    Node,
    BezierNode,
    CloseLoopNode,
    CloseLoopBezierNode,
    EndNode,
    EndBezierNode,

    // positions
    Viewpoint,
    StartupLocation,
    LightBeacon,
    Windsock,
    Sign,
    LightingObject,

    // traffic flow
    TrafficFlow,
    WindRule,
    CeilingRule,
    VisibilityRule,
    TimeRule,
    RunwayInUse,
    VfrPattern,

    // taxi routing
    TaxiRouteNetwork,
    TaxiRouteNode,
    TaxiRouteEdge,
    ActiveZone,

    // ramp starts and metadata
    Parking,
    ParkingMetadata,
    Metadata,

    /// A communication frequency with two digit row code (`50` to `56`).
    LegacyFrequency(FrequencyKind),
    /// A communication frequency with four digit row code (`1050` to `1056`).
    Frequency(FrequencyKind),

    Unknown,
}

/// Communication frequency usage.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum FrequencyKind {
    Recorded,
    Unicom,
    ClearanceDelivery,
    Ground,
    Tower,
    Approach,
    Departure,
}

impl FrequencyKind {
    fn from_offset(offset: u16) -> Option<Self> {
        match offset {
            0 => Some(Self::Recorded),
            1 => Some(Self::Unicom),
            2 => Some(Self::ClearanceDelivery),
            3 => Some(Self::Ground),
            4 => Some(Self::Tower),
            5 => Some(Self::Approach),
            6 => Some(Self::Departure),
            _ => None,
        }
    }

    /// Returns the four digit row code of this frequency.
    pub fn code(&self) -> u16 {
        1050 + *self as u16
    }
}

impl RecordKind {
    /// Returns the kind for a row code.
    ///
    /// The file header can't be identified by the row code alone, use
    /// [`classify`](RecordKind::classify) when the line position is known.
    pub fn from_code(code: &[u8]) -> Self {
        let Some(code) = std::str::from_utf8(code)
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
        else {
            return Self::Unknown;
        };

        match code {
            1 => Self::LandAirport,
            16 => Self::SeaplaneBase,
            17 => Self::Heliport,
            100 => Self::LandRunway,
            101 => Self::WaterRunway,
            102 => Self::Helipad,
            110 => Self::Pavement,
            120 => Self::LinearFeature,
            130 => Self::AirportBoundary,
            111 => Self::Node,
            112 => Self::BezierNode,
            113 => Self::CloseLoopNode,
            114 => Self::CloseLoopBezierNode,
            115 => Self::EndNode,
            116 => Self::EndBezierNode,
            14 => Self::Viewpoint,
            15 => Self::StartupLocation,
            18 => Self::LightBeacon,
            19 => Self::Windsock,
            20 => Self::Sign,
            21 => Self::LightingObject,
            1000 => Self::TrafficFlow,
            1001 => Self::WindRule,
            1002 => Self::CeilingRule,
            1003 => Self::VisibilityRule,
            1004 => Self::TimeRule,
            1100 => Self::RunwayInUse,
            1101 => Self::VfrPattern,
            1200 => Self::TaxiRouteNetwork,
            1201 => Self::TaxiRouteNode,
            1202 => Self::TaxiRouteEdge,
            1204 => Self::ActiveZone,
            1300 => Self::Parking,
            1301 => Self::ParkingMetadata,
            1302 => Self::Metadata,
            50..=56 => FrequencyKind::from_offset(code - 50)
                .map_or(Self::Unknown, Self::LegacyFrequency),
            1050..=1056 => {
                FrequencyKind::from_offset(code - 1050).map_or(Self::Unknown, Self::Frequency)
            }
            99 => Self::End,
            _ => Self::Unknown,
        }
    }

    /// Returns the kind of a line with the first token `code` at the
    /// zero-based line `index` of its file.
    ///
    /// The origin is only recognized on the first line and the version only
    /// within the first three lines, as the version numbers are valid row
    /// codes of traffic flow and taxi route records too.
    pub fn classify(code: Option<&[u8]>, index: usize) -> Self {
        let Some(code) = code else {
            return Self::Blank;
        };

        if index == 0 && matches!(code, b"I" | b"A") {
            return Self::Origin;
        }

        if index <= 2 {
            if let Some(version) = std::str::from_utf8(code)
                .ok()
                .and_then(|s| s.parse::<u16>().ok())
                .filter(|v| VERSIONS.contains(v))
            {
                return Self::Version(version);
            }
        }

        Self::from_code(code)
    }

    /// Returns `true` if the record starts a new airport, seaplane base or
    /// heliport.
    pub fn is_facility(&self) -> bool {
        matches!(self, Self::LandAirport | Self::SeaplaneBase | Self::Heliport)
    }

    /// Returns `true` for land runways, water runways and helipads.
    pub fn is_runway(&self) -> bool {
        matches!(self, Self::LandRunway | Self::WaterRunway | Self::Helipad)
    }

    /// Returns `true` for nodes of a pavement, linear feature or boundary.
    pub fn is_node(&self) -> bool {
        matches!(
            self,
            Self::Node
                | Self::BezierNode
                | Self::CloseLoopNode
                | Self::CloseLoopBezierNode
                | Self::EndNode
                | Self::EndBezierNode
        )
    }

    /// Returns `true` for records that are a single point with latitude and
    /// longitude in token 1 and 2.
    pub fn is_point(&self) -> bool {
        self.is_node()
            || matches!(
                self,
                Self::Viewpoint
                    | Self::StartupLocation
                    | Self::LightBeacon
                    | Self::Windsock
                    | Self::Sign
                    | Self::LightingObject
                    | Self::TaxiRouteNode
                    | Self::Parking
            )
    }
}

impl Field<'_> for RecordKind {
    fn from_token(token: &[u8]) -> Result<Self, Error> {
        Ok(Self::from_code(token))
    }
}
