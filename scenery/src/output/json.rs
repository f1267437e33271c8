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

use crate::facility::Facility;
use crate::Error;

/// Returns a facility as pretty printed JSON.
///
/// # Errors
///
/// Returns an error if the facility can't be serialized.
pub fn to_json(facility: &Facility) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(facility)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::{FacilityType, Frequency};
    use serde_json::Value;

    #[test]
    fn writes_facility_keys() {
        let mut facility = Facility::new(FacilityType::Heliport, 12, "XHEL".into(), "Heli".into());
        facility.frequencies.push(Frequency {
            code: 1054,
            frequency: 119700,
            name: "TWR".into(),
        });
        facility.metadata.insert("city".into(), "Somewhere".into());

        let json = to_json(&facility).expect("facility should serialize");
        let value: Value = serde_json::from_str(&json).expect("output should be JSON");

        assert_eq!(value["type"], 17);
        assert_eq!(value["elev-m"], 12);
        assert_eq!(value["ident"], "XHEL");
        assert_eq!(value["frequencies"][0]["type"], 1054);
        assert_eq!(value["metadata"]["city"], "Somewhere");
        assert!(value["runways"].as_array().is_some_and(Vec::is_empty));
    }

    #[test]
    fn reads_exported_facility() {
        let facility = Facility::new(FacilityType::Airport, 0, "KXYZ".into(), "Test".into());
        let json = to_json(&facility).expect("facility should serialize");

        let read: Facility = serde_json::from_str(&json).expect("JSON should deserialize");
        assert_eq!(read, facility);
    }
}
