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

//! Curve primitives, switch commitments, Bulletproofs and the two-party
//! aggregate signature the rest of the mwc-pay core is built on.

pub mod bip32;
pub mod bulletproof;
pub mod ed25519;
pub mod error;
pub mod hash;
pub mod secp;
pub mod switch;
pub mod x25519;

pub use error::{Error, ErrorKind};
pub use secp256k1zkp;
