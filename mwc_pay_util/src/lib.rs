// Copyright 2026 The MWC-Pay Developers
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

//! Low-level codecs shared by the rest of the mwc-pay core: the big-endian
//! bit stream used by the slate format, the three address-friendly byte
//! encodings, SMAZ message compression, and the gzip helper behind the
//! foreign API's `Accept-Encoding: gzip` response path.

pub mod base32;
pub mod base58;
pub mod base64;
pub mod bit;
pub mod error;
pub mod gzip;
pub mod smaz;

pub use bit::{BitReader, BitWriter};
pub use error::{Error, ErrorKind};
