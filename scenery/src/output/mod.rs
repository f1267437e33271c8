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

//! FlightGear airport files.
//!
//! FlightGear looks up the files of an airport in directories named after
//! the first letters of its identifier, e.g. `K/J/F/KJFK.threshold.xml`.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::facility::Facility;
use crate::Error;

#[cfg(feature = "serde")]
mod json;
mod xml;

#[cfg(feature = "serde")]
pub use json::to_json;
pub use xml::{threshold_xml, tower_xml};

/// Checks that an identifier is a plain ASCII alphanumeric file name.
///
/// # Errors
///
/// Returns [`Error::InvalidIdent`] if the identifier is empty or contains
/// any other character, e.g. a path separator.
pub fn check_ident(ident: &str) -> Result<&str, Error> {
    if !ident.is_empty() && ident.bytes().all(|b| b.is_ascii_alphanumeric()) {
        Ok(ident)
    } else {
        Err(Error::InvalidIdent(ident.to_string()))
    }
}

/// Returns the directory of an airport's files below `root`.
///
/// Up to three letters of the identifier become directory levels, but never
/// its last letter.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use scenery::output::airport_dir;
///
/// # fn main() -> Result<(), scenery::Error> {
/// assert_eq!(airport_dir("Airports", "KJFK")?, Path::new("Airports/K/J/F"));
/// assert_eq!(airport_dir("Airports", "EG")?, Path::new("Airports/E"));
/// assert_eq!(airport_dir("Airports", "X")?, Path::new("Airports"));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidIdent`] if the identifier isn't alphanumeric.
pub fn airport_dir(root: impl AsRef<Path>, ident: &str) -> Result<PathBuf, Error> {
    let ident = check_ident(ident)?;
    let mut dir = root.as_ref().to_path_buf();

    for c in ident.chars().take(3.min(ident.len() - 1)) {
        dir.push(c.to_string());
    }

    Ok(dir)
}

/// Writes the threshold file and, if the facility has a tower, the tower
/// file of a facility below `root`.
///
/// Returns the paths of the written files.
///
/// # Errors
///
/// Returns an error if the identifier isn't alphanumeric or a directory or
/// file can't be written.
pub fn write_airport_files(root: impl AsRef<Path>, facility: &Facility) -> Result<Vec<PathBuf>, Error> {
    let dir = airport_dir(root, &facility.ident)?;
    fs::create_dir_all(&dir)?;

    let mut written = Vec::with_capacity(2);

    let path = dir.join(format!("{}.threshold.xml", facility.ident));
    fs::write(&path, threshold_xml(facility)?)?;
    debug!("wrote {}", path.display());
    written.push(path);

    if let Some(xml) = tower_xml(facility)? {
        let path = dir.join(format!("{}.twr.xml", facility.ident));
        fs::write(&path, xml)?;
        debug!("wrote {}", path.display());
        written.push(path);
    }

    info!("wrote {} files of {}", written.len(), facility.ident);
    Ok(written)
}
