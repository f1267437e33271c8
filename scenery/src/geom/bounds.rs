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

use std::fmt;

/// A box of longitudes and latitudes in decimal degrees.
///
/// All four sides belong to the box. The corners are kept as given, so a
/// box whose minimum exceeds its maximum contains nothing.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Bounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl Bounds {
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Returns `true` if the position is inside or on the edge of the box.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        self.min_lon <= lon && lon <= self.max_lon && self.min_lat <= lat && lat <= self.max_lat
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_inside() {
        let bounds = Bounds::new(-80.0, 40.0, -70.0, 50.0);

        assert!(bounds.contains(-80.0, 40.0));
        assert!(bounds.contains(-70.0, 50.0));
        assert!(bounds.contains(-75.0, 45.0));
        assert!(!bounds.contains(-80.0001, 40.0));
        assert!(!bounds.contains(-75.0, 50.0001));
    }

    #[test]
    fn inverted_box_is_empty() {
        let bounds = Bounds::new(169.0, 0.0, 1.0, 10.0);
        assert!(!bounds.contains(100.0, 5.0));
        assert!(!bounds.contains(169.0, 5.0));
    }
}
