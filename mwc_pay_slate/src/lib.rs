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

//! In-memory slate transaction state, its bit-packed wire format, and the
//! recipient (merchant) side of the two-round slate exchange.

pub mod compressed;
pub mod error;
pub mod kernel;
pub mod participant;
pub mod receive;
pub mod slate;

pub use compressed::CompressedPublicKey;
pub use error::{Error, ErrorKind};
pub use kernel::KernelFeatures;
pub use participant::Participant;
pub use receive::{receive, ReceivedPayment};
pub use slate::{Output, Slate};
