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

/// Parse an ASCII token as number and return Result
macro_rules! parse_numeric {
    ($t:ty, $b:expr) => {{
        let bytes: &[u8] = $b;
        std::str::from_utf8(bytes)
            .ok()
            .and_then(|s| s.parse::<$t>().ok())
            .ok_or_else(|| $crate::Error::NotANumber {
                bytes: bytes.to_vec(),
            })
    }};
}
