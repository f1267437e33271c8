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

use geo::{Bearing, Haversine, Point};

/// Returns the initial great-circle bearing in degrees from `from` to `to`.
///
/// The bearing is computed on a sphere and lies within `[0, 360)`.
///
/// # Examples
///
/// ```
/// use scenery::coord;
/// use scenery::geom::initial_bearing;
///
/// let bearing = initial_bearing(coord!(45.0, -75.0), coord!(45.1, -75.0));
/// assert!(bearing.abs() < 1e-9);
/// ```
#[inline]
pub fn initial_bearing(from: Point<f64>, to: Point<f64>) -> f64 {
    Haversine.bearing(from, to)
}

/// Returns the opposite direction of a heading within `[0, 360)`.
#[inline]
pub fn reciprocal(heading: f64) -> f64 {
    (heading + 180.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn bearing_due_north() {
        let bearing = initial_bearing(coord!(45.0, -75.0), coord!(45.1, -75.0));
        assert!(bearing.abs() < EPSILON);
        assert!((reciprocal(bearing) - 180.0).abs() < EPSILON);
    }

    #[test]
    fn bearing_due_south_and_west() {
        let south = initial_bearing(coord!(45.1, -75.0), coord!(45.0, -75.0));
        assert!((south - 180.0).abs() < EPSILON);

        let west = initial_bearing(coord!(0.0, 10.0), coord!(0.0, 9.0));
        assert!((west - 270.0).abs() < EPSILON);
    }

    #[test]
    fn bearing_across_antimeridian() {
        let east = initial_bearing(coord!(0.0, 179.5), coord!(0.0, -179.5));
        assert!((east - 90.0).abs() < EPSILON);
    }

    #[test]
    fn reciprocal_stays_in_range() {
        assert_eq!(reciprocal(0.0), 180.0);
        assert_eq!(reciprocal(180.0), 0.0);
        assert_eq!(reciprocal(270.5), 90.5);
        assert!(reciprocal(359.999) < 360.0);
    }
}
