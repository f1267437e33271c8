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

//! apt-scenery - Command line tools for apt.dat scenery data.
//!
//! Every command that reads apt.dat files reads standard input when no file
//! is given. apt.dat output is written to standard output byte for byte, so
//! the ISO-8859-1 encoding of the input is kept.

mod error;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::{info, warn, LevelFilter};
use scenery::downgrade::{self, Downgrade};
use scenery::facility::{Facilities, Facility};
use scenery::filter::{self, SpatialFilter};
use scenery::geom::{tile_index, Bucket};
use scenery::{dem, output, split};

use error::CliError;

#[derive(Parser)]
#[command(name = "apt-scenery", version)]
#[command(about = "Cut X-Plane apt.dat airport data into scenery buckets", long_about = None)]
struct Cli {
    /// Log progress information
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Log errors only
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the facilities within a bucket as apt.dat
    Filter {
        /// Bucket name, e.g. w080n40
        bucket: String,

        /// apt.dat files, each facility is written once
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Reduce apt.dat files to the records of the 1000 version
    Downgrade {
        /// apt.dat files, standard input if omitted
        files: Vec<PathBuf>,
    },

    /// Write the FlightGear threshold and tower files of all facilities
    Airports {
        /// Root directory of the airport files
        output: PathBuf,

        /// apt.dat files, standard input if omitted
        files: Vec<PathBuf>,

        /// Skip invalid records instead of stopping
        #[arg(long)]
        keep_going: bool,
    },

    /// Print all facilities as JSON
    Json {
        /// apt.dat files, standard input if omitted
        files: Vec<PathBuf>,

        /// Skip invalid records instead of stopping
        #[arg(long)]
        keep_going: bool,
    },

    /// Write each facility to its own apt.dat file
    Split {
        /// Directory of the facility files
        output: PathBuf,

        /// apt.dat files, standard input if omitted
        files: Vec<PathBuf>,
    },

    /// List the elevation files needed for a bucket
    Dem {
        /// Directory searched for .tif and .hgt files
        dir: PathBuf,

        /// Bucket name, e.g. w080n40
        bucket: String,
    },

    /// List the SRTM tile names of a bucket
    Hgt {
        /// Bucket name, e.g. w080n40
        bucket: String,
    },

    /// Print the bucket that contains a position
    Bucket {
        /// Latitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },

    /// Print the FlightGear tile index of a position
    TileIndex {
        /// Latitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        LevelFilter::Error
    } else if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .init();

    if let Err(e) = run(cli.command) {
        e.exit();
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Filter { bucket, files } => run_filter(&parse_bucket(&bucket)?, &files),
        Command::Downgrade { files } => run_downgrade(&files),
        Command::Airports {
            output,
            files,
            keep_going,
        } => for_each_facility(&files, keep_going, |facility| {
            output::write_airport_files(&output, &facility)?;
            Ok(())
        }),
        Command::Json { files, keep_going } => {
            let mut stdout = io::stdout().lock();
            for_each_facility(&files, keep_going, |facility| {
                writeln!(stdout, "{}", output::to_json(&facility)?)?;
                Ok(())
            })
        }
        Command::Split { output, files } => for_each_input(&files, |input| {
            split::split_to_dir(input, &output)?;
            Ok(())
        }),
        Command::Dem { dir, bucket } => {
            let bucket = parse_bucket(&bucket)?;
            let mut stdout = io::stdout().lock();
            for path in dem::find_dem_files(dir, &bucket.dem_bounds())? {
                writeln!(stdout, "{}", path.display())?;
            }
            Ok(())
        }
        Command::Hgt { bucket } => {
            let bucket = parse_bucket(&bucket)?;
            let mut stdout = io::stdout().lock();
            for name in bucket.hgt_tiles() {
                writeln!(stdout, "{name}")?;
            }
            Ok(())
        }
        Command::Bucket { lat, lon } => {
            println!("{}", Bucket::containing(lon, lat));
            Ok(())
        }
        Command::TileIndex { lat, lon } => {
            println!("{}", tile_index(lat, lon)?);
            Ok(())
        }
    }
}

fn parse_bucket(name: &str) -> Result<Bucket, CliError> {
    name.parse().map_err(CliError::Bucket)
}

/// Writes the facilities within the bucket from all files as one apt.dat.
fn run_filter(bucket: &Bucket, files: &[PathBuf]) -> Result<(), CliError> {
    let mut filter = SpatialFilter::for_bucket(bucket);
    let mut out = BufWriter::new(io::stdout().lock());

    out.write_all(filter::ORIGIN)?;
    out.write_all(filter::VERSION)?;

    let mut count = 0;
    for_each_input(files, |input| {
        count += filter.filter(input, &mut out)?;
        Ok(())
    })?;

    out.write_all(filter::END)?;
    out.flush()?;

    info!("{count} facilities within {bucket}");
    Ok(())
}

fn run_downgrade(files: &[PathBuf]) -> Result<(), CliError> {
    let mut downgrade = Downgrade::new();
    let mut out = BufWriter::new(io::stdout().lock());

    out.write_all(downgrade::PREAMBLE)?;
    for_each_input(files, |input| {
        downgrade.downgrade(input, &mut out)?;
        Ok(())
    })?;
    out.write_all(downgrade::END)?;
    out.flush()?;

    Ok(())
}

/// Calls `f` with a reader of each file, or of standard input if there are
/// no files.
fn for_each_input<F>(files: &[PathBuf], mut f: F) -> Result<(), CliError>
where
    F: FnMut(&mut dyn BufRead) -> Result<(), CliError>,
{
    if files.is_empty() {
        info!("reading standard input");
        return f(&mut io::stdin().lock());
    }

    for path in files {
        info!("reading {}", path.display());
        f(&mut open(path)?)?;
    }

    Ok(())
}

fn open(path: &Path) -> Result<BufReader<File>, CliError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| CliError::open(path, e))
}

/// Calls `f` with every facility of the inputs.
///
/// Invalid records stop the program unless `keep_going` is set, in which case
/// they are logged and skipped.
fn for_each_facility<F>(files: &[PathBuf], keep_going: bool, mut f: F) -> Result<(), CliError>
where
    F: FnMut(Facility) -> Result<(), CliError>,
{
    for_each_input(files, |input| {
        for facility in Facilities::new(input) {
            match facility {
                Ok(facility) => f(facility)?,
                Err(e) if keep_going => warn!("{e}"),
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    })
}
