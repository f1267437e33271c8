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

use crate::Error;

/// A whitespace separated field type.
///
/// This trait is implemented by all apt.dat fields. Each field is created
/// [`from_token`](Field::from_token) and stores a reference to the token's
/// bytes.
pub trait Field<'a>: Sized {
    /// Parse this field from a single token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token contains invalid data.
    fn from_token(token: &'a [u8]) -> Result<Self, Error>;

    /// The value of this field when the record ends before it.
    ///
    /// Required fields have none, which makes the record truncated.
    fn missing() -> Option<Self> {
        None
    }
}

/// Decodes ISO-8859-1 bytes, where each byte is its own code point.
pub(crate) fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/////////////////////////////////////////////////////////////////////////////
// Text Field
/////////////////////////////////////////////////////////////////////////////

/// A single text token.
///
/// The bytes are kept as they are in the source, which is ISO-8859-1 encoded.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Text<'a>(pub(crate) &'a [u8]);

impl<'a> Text<'a> {
    /// Returns the raw bytes of the token.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Returns the token decoded from ISO-8859-1.
    ///
    /// The decoding is lossless, every byte maps to exactly one `char`.
    pub fn decode(&self) -> String {
        latin1(self.0)
    }
}

impl<'a> Field<'a> for Text<'a> {
    fn from_token(token: &'a [u8]) -> Result<Self, Error> {
        Ok(Self(token))
    }
}

impl fmt::Debug for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.decode())
    }
}

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.decode())
    }
}

impl From<Text<'_>> for String {
    fn from(t: Text<'_>) -> Self {
        t.decode()
    }
}

/////////////////////////////////////////////////////////////////////////////
// Numeric Field
/////////////////////////////////////////////////////////////////////////////

/// A numeric token, parsed on access.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Numeric<'a>(pub(crate) &'a [u8]);

macro_rules! numeric_impl {
    ($($method:ident : $t:ty),+) => {
        impl<'a> Numeric<'a> {
            $(
                #[inline]
                pub fn $method(&self) -> Result<$t, Error> {
                    parse_numeric!($t, self.0)
                }
            )+
        }
    };
}

numeric_impl!(as_i32: i32, as_u16: u16, as_u32: u32);

impl<'a> Numeric<'a> {
    /// Returns the token as finite floating point number.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is no number, or is infinite or NaN.
    #[inline]
    pub fn as_f64(&self) -> Result<f64, Error> {
        parse_numeric!(f64, self.0).and_then(|value| {
            if value.is_finite() {
                Ok(value)
            } else {
                Err(Error::NotANumber {
                    bytes: self.0.to_vec(),
                })
            }
        })
    }

    /// Returns the raw bytes of the token.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }
}

impl<'a> Field<'a> for Numeric<'a> {
    fn from_token(token: &'a [u8]) -> Result<Self, Error> {
        Ok(Self(token))
    }
}

impl fmt::Debug for Numeric<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = String::from_utf8_lossy(self.0);
        write!(f, "{s}")
    }
}

/////////////////////////////////////////////////////////////////////////////
// Rest Field
/////////////////////////////////////////////////////////////////////////////

/// All tokens following a position, e.g. a name containing spaces.
///
/// The tokens are joined by single spaces, so any run of whitespace in the
/// source collapses.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Rest<'a>(pub(crate) &'a [&'a [u8]]);

impl<'a> Rest<'a> {
    /// Returns `true` if there are no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the tokens joined by single spaces.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.join(&b' ')
    }

    /// Returns the joined tokens decoded from ISO-8859-1.
    pub fn decode(&self) -> String {
        latin1(&self.to_bytes())
    }
}

impl fmt::Debug for Rest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.decode())
    }
}

impl fmt::Display for Rest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.decode())
    }
}

impl From<Rest<'_>> for String {
    fn from(r: Rest<'_>) -> Self {
        r.decode()
    }
}

/////////////////////////////////////////////////////////////////////////////
// Optional Field Support
/////////////////////////////////////////////////////////////////////////////

/// Optional field that may be missing at the end of a record.
///
/// Allows fields to be `None` when the record stops early (i.e., data from an
/// older version).
impl<'a, T> Field<'a> for Option<T>
where
    T: Field<'a>,
{
    fn from_token(token: &'a [u8]) -> Result<Self, Error> {
        T::from_token(token).map(Some)
    }

    fn missing() -> Option<Self> {
        Some(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_latin1_text() {
        let text = Text::from_token(b"Z\xfcrich").expect("text should parse");
        assert_eq!(text.decode(), "Zürich");
        assert_eq!(text.as_bytes(), b"Z\xfcrich");
    }

    #[test]
    fn parses_numbers() {
        let n = Numeric::from_token(b"-12").expect("numeric should parse");
        assert_eq!(n.as_i32(), Ok(-12));
        assert!(n.as_u16().is_err());

        let n = Numeric::from_token(b"45.72").expect("numeric should parse");
        assert_eq!(n.as_f64(), Ok(45.72));
    }

    #[test]
    fn rejects_non_finite_numbers() {
        let n = Numeric::from_token(b"nan").expect("numeric should parse");
        assert_eq!(
            n.as_f64(),
            Err(Error::NotANumber {
                bytes: b"nan".to_vec()
            })
        );
    }

    #[test]
    fn joins_rest() {
        let tokens: [&[u8]; 2] = [b"Test", b"Airport"];
        assert_eq!(Rest(&tokens).decode(), "Test Airport");
        assert!(Rest(&[]).is_empty());
    }
}
