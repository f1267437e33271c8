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

//! Digital elevation model tiles.

use std::path::{self, Path, PathBuf};
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use walkdir::WalkDir;

use crate::geom::Bounds;
use crate::Error;

static DEM_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([NS])([0-9]{2})([EW])([0-9]{3}).*\.(TIF|HGT)$").expect("DEM name pattern is valid")
});

/// File extensions of elevation tiles.
const EXTENSIONS: [&str; 2] = ["tif", "hgt"];

/// A one degree elevation tile, named after its south-west corner.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DemTile {
    pub latitude: i32,
    pub longitude: i32,
}

impl DemTile {
    /// Reads the tile corner from a file name like `N40W080.hgt` or
    /// `n40_w080_1arc_v3.tif`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDemName`] if the name doesn't start with the
    /// tile corner or is no GeoTIFF or HGT file.
    pub fn from_file_name(name: &str) -> Result<Self, Error> {
        let upper = name.to_ascii_uppercase();
        let malformed = || Error::MalformedDemName(name.to_string());

        let caps = DEM_NAME.captures(&upper).ok_or_else(malformed)?;
        let latitude: i32 = caps[2].parse().map_err(|_| malformed())?;
        let longitude: i32 = caps[4].parse().map_err(|_| malformed())?;

        Ok(Self {
            latitude: if &caps[1] == "S" { -latitude } else { latitude },
            longitude: if &caps[3] == "W" { -longitude } else { longitude },
        })
    }
}

/// Finds the elevation tiles below `dir` whose south-west corner is within
/// the bounds.
///
/// Returns the absolute paths of the tiles, sorted.
///
/// # Errors
///
/// Returns an error if a directory can't be read or a `.tif` or `.hgt` file
/// isn't named after its tile.
pub fn find_dem_files(dir: impl AsRef<Path>, bounds: &Bounds) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry?;

        let is_dem = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| EXTENSIONS.contains(&ext));

        if !entry.file_type().is_file() || !is_dem {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        let tile = DemTile::from_file_name(&name)?;

        if bounds.contains(tile.longitude as f64, tile.latitude as f64) {
            files.push(path::absolute(entry.path())?);
        } else {
            debug!("skipping {name} outside of {bounds}");
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::geom::Bucket;

    #[test]
    fn reads_tile_names() {
        assert_eq!(
            DemTile::from_file_name("N40W080.hgt"),
            Ok(DemTile {
                latitude: 40,
                longitude: -80
            })
        );
        assert_eq!(
            DemTile::from_file_name("s09e120_1arc_v3.tif"),
            Ok(DemTile {
                latitude: -9,
                longitude: 120
            })
        );
    }

    #[test]
    fn rejects_other_names() {
        for name in ["N40W080.png", "elevation.hgt", "N4W080.hgt", "\u{17f}40W080.hgt"] {
            assert_eq!(
                DemTile::from_file_name(name),
                Err(Error::MalformedDemName(name.to_string()))
            );
        }
    }

    #[test]
    fn finds_tiles_within_bounds() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let nested = dir.path().join("srtm");
        fs::create_dir_all(&nested).expect("creating directories");

        for name in ["N40W080.hgt", "N39W081.hgt", "N20W080.hgt"] {
            fs::write(nested.join(name), b"").expect("writing tile");
        }
        fs::write(dir.path().join("N45W075.tif"), b"").expect("writing tile");
        fs::write(dir.path().join("README.txt"), b"").expect("writing readme");

        let bucket: Bucket = "w080n40".parse().expect("bucket should parse");
        let files = find_dem_files(dir.path(), &bucket.dem_bounds()).expect("searching tiles");

        let names: Vec<String> = files
            .iter()
            .filter_map(|f| f.file_name())
            .map(|f| f.to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, ["N45W075.tif", "N39W081.hgt", "N40W080.hgt"]);
        assert!(files.iter().all(|f| f.is_absolute()));
    }
}
