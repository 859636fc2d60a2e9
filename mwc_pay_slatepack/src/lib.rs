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

//! Slatepack armor: wraps a serialized slate (plain or encrypted to a
//! recipient's payment-proof address) in a Base58, checksummed, plain-text
//! envelope suitable for pasting into chat or email.

pub mod armor;
pub mod error;

pub use armor::{armor_encrypted, armor_plain, dearmor, open, Envelope};
pub use error::{Error, ErrorKind};
