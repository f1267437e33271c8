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

use crate::Error;

/// Latitude bands and the tile width within them, from the equator.
const TILE_WIDTHS: [(f64, f64); 6] = [
    (22.0, 0.125),
    (62.0, 0.25),
    (76.0, 0.5),
    (83.0, 1.0),
    (86.0, 2.0),
    (89.0, 4.0),
];

/// Width of the polar tiles.
const POLAR_TILE_WIDTH: f64 = 12.0;

/// Returns the width in degrees of a FlightGear tile at the latitude.
pub fn tile_width(lat: f64) -> f64 {
    let lat = lat.abs();

    TILE_WIDTHS
        .iter()
        .find(|(band, _)| lat < *band)
        .map_or(POLAR_TILE_WIDTH, |(_, width)| *width)
}

/// Returns the index of the FlightGear scenery tile at a position.
///
/// A degree of latitude holds eight tile rows. The number of columns per
/// degree of longitude shrinks towards the poles, see [`tile_width`].
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the latitude or longitude is outside of
/// the world.
///
/// # Examples
///
/// ```
/// use scenery::geom::tile_index;
///
/// // San Francisco Intl
/// assert_eq!(tile_index(37.6189, -122.375), Ok(942050));
/// ```
pub fn tile_index(lat: f64, lon: f64) -> Result<u32, Error> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(Error::OutOfRange {
            what: "latitude",
            value: lat,
        });
    }

    if !(-180.0..180.0).contains(&lon) {
        return Err(Error::OutOfRange {
            what: "longitude",
            value: lon,
        });
    }

    let width = tile_width(lat);

    let base_y = lat.floor();
    let y = ((lat - base_y) * 8.0).trunc() as u32;

    let base_x = ((lon / width).floor() * width).floor();
    let x = ((lon - base_x) / width).floor() as u32;

    let lon_index = (lon.floor() + 180.0) as u32;
    let lat_index = (lat.floor() + 90.0) as u32;

    Ok((lon_index << 14) + (lat_index << 6) + (y << 3) + x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_widths_by_band() {
        assert_eq!(tile_width(0.0), 0.125);
        assert_eq!(tile_width(-21.9), 0.125);
        assert_eq!(tile_width(22.0), 0.25);
        assert_eq!(tile_width(61.0), 0.25);
        assert_eq!(tile_width(70.0), 0.5);
        assert_eq!(tile_width(-80.0), 1.0);
        assert_eq!(tile_width(85.0), 2.0);
        assert_eq!(tile_width(88.0), 4.0);
        assert_eq!(tile_width(89.5), 12.0);
    }

    #[test]
    fn tile_of_known_airports() {
        assert_eq!(tile_index(37.6189, -122.375), Ok(942050));
        assert_eq!(tile_index(0.0, 0.0), Ok((180 << 14) + (90 << 6)));
    }

    #[test]
    fn rejects_positions_outside_of_the_world() {
        assert_eq!(
            tile_index(91.0, 0.0),
            Err(Error::OutOfRange {
                what: "latitude",
                value: 91.0
            })
        );
        assert!(tile_index(0.0, 180.0).is_err());
    }
}
