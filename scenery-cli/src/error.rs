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

//! CLI errors with user facing messages.

use std::fmt;
use std::io;
use std::path::Path;
use std::process;

/// Errors that end the program.
#[derive(Debug)]
pub enum CliError {
    /// The bucket argument isn't a bucket name.
    Bucket(scenery::Error),
    /// An input file can't be opened.
    Open { path: String, error: io::Error },
    /// Writing to standard output failed.
    Write(io::Error),
    /// The input can't be processed.
    Scenery(scenery::Error),
}

impl CliError {
    pub fn open(path: &Path, error: io::Error) -> Self {
        Self::Open {
            path: path.display().to_string(),
            error,
        }
    }

    /// Exit the process with the error message and exit code 1.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {self}");

        if let CliError::Bucket(_) = self {
            eprintln!();
            eprintln!("Buckets are named after their south-west corner in steps of 10 degrees,");
            eprintln!("e.g. w080n40 for 80W 40N or e010s20 for 10E 20S.");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Bucket(e) => write!(f, "Invalid bucket: {e}"),
            CliError::Open { path, error } => write!(f, "Failed to open '{path}': {error}"),
            CliError::Write(e) => write!(f, "Failed to write output: {e}"),
            CliError::Scenery(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Bucket(e) | CliError::Scenery(e) => Some(e),
            CliError::Open { error, .. } => Some(error),
            CliError::Write(e) => Some(e),
        }
    }
}

impl From<scenery::Error> for CliError {
    fn from(e: scenery::Error) -> Self {
        CliError::Scenery(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Write(e)
    }
}
