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

//! Seed storage, per-invoice key derivation, and Tor/MQS payment-proof
//! addressing for the mwc-pay core.

pub mod error;
pub mod mnemonic;
pub mod mqs;
pub mod seed;
pub mod tor;
pub mod wallet;

pub use error::{Error, ErrorKind};
pub use seed::EncryptedSeed;
pub use wallet::Wallet;
