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

//! Splits apt.dat files into one block per facility.

use std::fs;
use std::io::BufRead;
use std::mem;
use std::path::{Path, PathBuf};

use aptdat::fields::RecordKind;
use aptdat::records::{self, Reader};
use aptdat::Line;
use log::info;

use crate::output::check_ident;
use crate::Error;

/// The verbatim lines of a facility.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FacilityBlock {
    pub ident: String,
    pub text: Vec<u8>,
}

/// Cuts the lines of an apt.dat file into facility blocks.
///
/// A block starts with a facility header and ends before the next header,
/// a blank line or the end of the file.
#[derive(Debug, Default)]
pub struct Splitter {
    current: Option<FacilityBlock>,
}

impl Splitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line to the current block.
    ///
    /// Returns the current block if the line ends it.
    ///
    /// # Errors
    ///
    /// Returns an error if a facility header has no identifier.
    pub fn push(&mut self, line: &Line<'_>) -> Result<Option<FacilityBlock>, Error> {
        match line.kind() {
            kind if kind.is_facility() => {
                let arpt = records::Airport::try_from(line).map_err(|e| Error::from(e).at(line))?;
                let previous = self.current.replace(FacilityBlock {
                    ident: arpt.ident.to_string(),
                    text: line.raw().to_vec(),
                });
                Ok(previous)
            }
            RecordKind::Blank | RecordKind::End => Ok(self.finish()),
            _ => {
                if let Some(block) = self.current.as_mut() {
                    block.text.extend_from_slice(line.raw());
                }
                Ok(None)
            }
        }
    }

    /// Completes the last block at the end of the input.
    pub fn finish(&mut self) -> Option<FacilityBlock> {
        mem::take(&mut self.current)
    }
}

/// Writes each facility of the input to `<dir>/<ident>.apt.dat`.
///
/// Returns the paths of the written files.
///
/// # Errors
///
/// Returns an error if reading or writing fails, a header is invalid or an
/// identifier isn't alphanumeric.
pub fn split_to_dir<R: BufRead>(input: R, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, Error> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut reader = Reader::new(input);
    let mut splitter = Splitter::new();
    let mut written = Vec::new();

    let mut write = |block: FacilityBlock| -> Result<(), Error> {
        let path = dir.join(format!("{}.apt.dat", check_ident(&block.ident)?));
        fs::write(&path, &block.text)?;
        written.push(path);
        Ok(())
    };

    while let Some(line) = reader.next_line()? {
        if let Some(block) = splitter.push(&line)? {
            write(block)?;
        }
    }

    if let Some(block) = splitter.finish() {
        write(block)?;
    }

    info!("split {} facilities into {}", written.len(), dir.display());
    Ok(written)
}
