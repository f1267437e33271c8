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
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::Bounds;
use crate::Error;

static BUCKET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([eEwW])([0-9]{3})([nNsS])([0-9]{2})$").expect("bucket pattern is valid")
});

/// The size of a bucket in degrees.
pub const BUCKET_SIZE: i32 = 10;

/// A 10x10 degree scenery bucket, named after its south-west corner like
/// `w080n40`.
///
/// # Examples
///
/// ```
/// use scenery::geom::Bucket;
///
/// # fn main() -> Result<(), scenery::Error> {
/// let bucket: Bucket = "w080n40".parse()?;
/// let bounds = bucket.bounds();
///
/// assert_eq!((bounds.min_lon, bounds.min_lat), (-80.0, 40.0));
/// assert_eq!((bounds.max_lon, bounds.max_lat), (-70.0, 50.0));
/// assert_eq!(Bucket::containing(-75.3, 45.1).to_string(), "w080n40");
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Bucket {
    lon: i32,
    lat: i32,
}

impl Bucket {
    /// Returns the bucket that contains the position.
    ///
    /// Both coordinates are floored to the next lower multiple of ten.
    pub fn containing(lon: f64, lat: f64) -> Self {
        let floor = |deg: f64| (deg / BUCKET_SIZE as f64).floor() as i32 * BUCKET_SIZE;

        Self {
            lon: floor(lon),
            lat: floor(lat),
        }
    }

    /// The longitude of the west edge.
    pub fn min_lon(&self) -> i32 {
        self.lon
    }

    /// The latitude of the south edge.
    pub fn min_lat(&self) -> i32 {
        self.lat
    }

    /// Returns the 10x10 degree box of this bucket.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.lon as f64,
            self.lat as f64,
            (self.lon + BUCKET_SIZE) as f64,
            (self.lat + BUCKET_SIZE) as f64,
        )
    }

    /// Returns the box of elevation tiles needed for this bucket.
    ///
    /// The box overlaps the bucket by one degree on every side. Latitudes are
    /// clamped at the poles and longitudes past 180 are shifted back by 180,
    /// which can shrink the box near the antimeridian.
    pub fn dem_bounds(&self) -> Bounds {
        let min_lon = norm_lon(self.lon);
        let min_lat = norm_lat(self.lat);

        Bounds::new(
            norm_lon(min_lon - 1) as f64,
            norm_lat(min_lat - 1) as f64,
            norm_lon(min_lon + BUCKET_SIZE + 1) as f64,
            norm_lat(min_lat + BUCKET_SIZE + 1) as f64,
        )
    }

    /// Returns the names of the one degree SRTM tiles that cover this bucket,
    /// e.g. `N40W080.hgt`.
    pub fn hgt_tiles(&self) -> impl Iterator<Item = String> + '_ {
        (self.lat..self.lat + BUCKET_SIZE).flat_map(move |lat| {
            (self.lon..self.lon + BUCKET_SIZE).map(move |lon| {
                format!(
                    "{}{:02}{}{:03}.hgt",
                    if lat < 0 { 'S' } else { 'N' },
                    lat.abs(),
                    if lon < 0 { 'W' } else { 'E' },
                    lon.abs()
                )
            })
        })
    }
}

fn norm_lon(lon: i32) -> i32 {
    if lon < -180 {
        -180
    } else if lon > 180 {
        lon - 180
    } else {
        lon
    }
}

fn norm_lat(lat: i32) -> i32 {
    lat.clamp(-90, 90)
}

impl FromStr for Bucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = BUCKET
            .captures(s)
            .ok_or_else(|| Error::MalformedBucket(s.to_string()))?;

        let magnitude = |i: usize| -> Result<i32, Error> {
            caps[i]
                .parse()
                .map_err(|_| Error::MalformedBucket(s.to_string()))
        };

        let lon = magnitude(2)?;
        let lat = magnitude(4)?;

        Ok(Self {
            lon: if caps[1].eq_ignore_ascii_case("w") { -lon } else { lon },
            lat: if caps[3].eq_ignore_ascii_case("s") { -lat } else { lat },
        })
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:03}{}{:02}",
            if self.lon < 0 { 'w' } else { 'e' },
            self.lon.abs(),
            if self.lat < 0 { 's' } else { 'n' },
            self.lat.abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(s: &str) -> Bucket {
        s.parse().expect("bucket should parse")
    }

    #[test]
    fn parses_bucket_names() {
        assert_eq!(bucket("w080n40").bounds(), Bounds::new(-80.0, 40.0, -70.0, 50.0));
        assert_eq!(bucket("E010S20").bounds(), Bounds::new(10.0, -20.0, 20.0, -10.0));
        assert_eq!(bucket("e000n00").to_string(), "e000n00");
    }

    #[test]
    fn takes_magnitudes_literally() {
        let b = bucket("e185n00");
        assert_eq!(b.min_lon(), 185);
        assert_eq!(b.bounds().max_lon, 195.0);
    }

    #[test]
    fn rejects_malformed_names() {
        let names = [
            "w80n40",
            "x080n40",
            "w080n40x",
            "",
            "w080 n40",
            "w080\u{17f}40",
            "w\u{664}80n40",
        ];

        for name in names {
            assert_eq!(
                name.parse::<Bucket>(),
                Err(Error::MalformedBucket(name.to_string()))
            );
        }
    }

    #[test]
    fn buckets_containing_points() {
        assert_eq!(Bucket::containing(-75.3, 45.1).to_string(), "w080n40");
        assert_eq!(Bucket::containing(0.0, 0.0).to_string(), "e000n00");
        assert_eq!(Bucket::containing(-0.5, -0.5).to_string(), "w010s10");
        assert_eq!(Bucket::containing(8.55, 47.45).to_string(), "e000n40");
        assert_eq!(Bucket::containing(-80.0, 40.0).to_string(), "w080n40");
    }

    #[test]
    fn bucket_bounds_contain_point() {
        for (lon, lat) in [(-75.3, 45.1), (179.9, -89.9), (-180.0, 0.0), (12.5, 3.25)] {
            assert!(Bucket::containing(lon, lat).bounds().contains(lon, lat));
        }
    }

    #[test]
    fn dem_bounds_overlap() {
        assert_eq!(
            bucket("w080n40").dem_bounds(),
            Bounds::new(-81.0, 39.0, -69.0, 51.0)
        );
        assert_eq!(
            bucket("e000s90").dem_bounds(),
            Bounds::new(-1.0, -90.0, 11.0, -79.0)
        );
        // shifted past the antimeridian
        assert_eq!(bucket("e170n80").dem_bounds().max_lon, 1.0);
    }

    #[test]
    fn hgt_tile_names() {
        let tiles: Vec<String> = bucket("w080n40").hgt_tiles().collect();

        assert_eq!(tiles.len(), 100);
        assert_eq!(tiles[0], "N40W080.hgt");
        assert_eq!(tiles[1], "N40W079.hgt");
        assert_eq!(tiles[99], "N49W071.hgt");

        let south: Vec<String> = bucket("e000s10").hgt_tiles().collect();
        assert_eq!(south[0], "S10E000.hgt");
        assert_eq!(south[99], "S01E009.hgt");
    }
}
