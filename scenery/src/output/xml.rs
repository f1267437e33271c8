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

use std::io::Write;

use quick_xml::escape::minimal_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::facility::Facility;
use crate::Error;

fn new_document() -> Result<Writer<Vec<u8>>, Error> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(writer)
}

fn start<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), Error> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Writes `<name>value</name>` with `&` and `<` escaped.
fn property<W: Write>(writer: &mut Writer<W>, name: &str, value: &str) -> Result<(), Error> {
    start(writer, name)?;
    writer.write_event(Event::Text(BytesText::from_escaped(minimal_escape(value))))?;
    end(writer, name)
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String, Error> {
    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

/// Returns the threshold file of a facility.
///
/// The file lists every runway end with its position, true heading and, for
/// land runways, displaced threshold and stopway.
///
/// # Errors
///
/// Returns an error if the XML can't be written.
pub fn threshold_xml(facility: &Facility) -> Result<String, Error> {
    let mut writer = new_document()?;
    start(&mut writer, "PropertyList")?;

    for threshold in facility.thresholds() {
        start(&mut writer, "runway")?;
        property(&mut writer, "lon", &threshold.longitude.to_string())?;
        property(&mut writer, "lat", &threshold.latitude.to_string())?;
        property(&mut writer, "rwy", &threshold.ident)?;
        property(&mut writer, "hdg-deg", &format!("{:.2}", threshold.heading))?;

        if let Some(displaced) = threshold.displaced {
            property(&mut writer, "displ-m", &displaced.to_string())?;
        }

        if let Some(stopway) = threshold.stopway {
            property(&mut writer, "stopw-m", &stopway.to_string())?;
        }

        end(&mut writer, "runway")?;
    }

    end(&mut writer, "PropertyList")?;
    finish(writer)
}

/// Returns the tower file of a facility, or `None` if it has no tower.
///
/// # Errors
///
/// Returns an error if the XML can't be written.
pub fn tower_xml(facility: &Facility) -> Result<Option<String>, Error> {
    let Some(tower) = facility.tower() else {
        return Ok(None);
    };

    let mut writer = new_document()?;
    start(&mut writer, "PropertyList")?;
    start(&mut writer, "tower")?;
    start(&mut writer, "twr")?;
    property(&mut writer, "lon", &tower.longitude.to_string())?;
    property(&mut writer, "lat", &tower.latitude.to_string())?;
    property(&mut writer, "elev-m", &tower.height.to_string())?;
    end(&mut writer, "twr")?;
    end(&mut writer, "tower")?;
    end(&mut writer, "PropertyList")?;

    finish(writer).map(Some)
}
