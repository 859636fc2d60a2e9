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

//! Persisted invoice records, keyed by `id`, with the lifecycle invariants
//! of the payment state machine enforced declaratively on every write.

pub mod error;
pub mod payment;
pub mod store;

pub use error::{Error, ErrorKind};
pub use payment::{ConfirmingPayment, Payment, PaymentInfo, PaymentStatus, ReceivingPayment};
pub use store::PaymentStore;
