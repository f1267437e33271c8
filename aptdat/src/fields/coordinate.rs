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

use crate::{Error, Field, Numeric};

macro_rules! coordinate {
    ($name:ident, $field:literal, $limit:literal, $expected:literal) => {
        #[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        pub struct $name<'a>(Numeric<'a>);

        impl<'a> $name<'a> {
            #[doc = concat!("Returns the ", $field, " as decimal degrees.")]
            ///
            /// # Errors
            ///
            /// Returns an error if the token is no number or exceeds the range.
            pub fn as_decimal(&self) -> Result<f64, Error> {
                let decimal = self.0.as_f64()?;

                if (-$limit..=$limit).contains(&decimal) {
                    Ok(decimal)
                } else {
                    Err(Error::OutOfRange {
                        field: $field,
                        bytes: self.0.as_bytes().to_vec(),
                        expected: $expected,
                    })
                }
            }

            /// Returns the raw bytes of the token.
            #[inline]
            pub fn as_bytes(&self) -> &'a [u8] {
                self.0.as_bytes()
            }
        }

        impl<'a> Field<'a> for $name<'a> {
            fn from_token(token: &'a [u8]) -> Result<Self, Error> {
                Numeric::from_token(token).map(Self)
            }
        }
    };
}

coordinate!(Latitude, "latitude", 90.0, "in the range from -90 to 90");
coordinate!(Longitude, "longitude", 180.0, "in the range from -180 to 180");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_latitude() {
        let lat = Latitude::from_token(b"40.63992777").expect("latitude should parse");
        assert_eq!(lat.as_decimal(), Ok(40.63992777));
    }

    #[test]
    fn parses_longitude() {
        let lon = Longitude::from_token(b"-073.77869166").expect("longitude should parse");
        assert_eq!(lon.as_decimal(), Ok(-73.77869166));
    }

    #[test]
    fn rejects_out_of_range() {
        let lat = Latitude::from_token(b"91.0").expect("latitude should parse");
        assert!(matches!(
            lat.as_decimal(),
            Err(Error::OutOfRange {
                field: "latitude",
                ..
            })
        ));
    }
}
