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

//! The persisted invoice row and its derived lifecycle status.

use serde_derive::{Deserialize, Serialize};

/// A persisted invoice row. Fields marked "frozen once set" in the design are
/// never overwritten by [`crate::PaymentStore`] once they carry a value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Payment {
	pub identifier_path: u64,
	pub id: u64,
	pub url: String,
	pub created: u64,
	pub price: Option<u64>,
	pub required_confirmations: u32,
	pub expires: Option<u64>,
	pub received: Option<u64>,
	pub confirmations: u32,
	pub completed: Option<u64>,
	pub completed_callback: Option<String>,
	pub received_callback: Option<String>,
	pub confirmed_callback: Option<String>,
	pub expired_callback: Option<String>,
	pub sender_payment_proof_address: Option<String>,
	pub kernel_commitment: Option<Vec<u8>>,
	pub sender_public_blind_excess: Option<Vec<u8>>,
	pub recipient_partial_signature: Option<Vec<u8>>,
	pub public_nonce_sum: Option<Vec<u8>>,
	pub kernel_data: Option<Vec<u8>>,
	pub confirmed_height: Option<u64>,
	pub completed_callback_successful: bool,
	pub confirmed_callback_acknowledged: bool,
	pub expired_callback_successful: bool,
}

impl Payment {
	/// Whether this row has already recorded the receive event (§3 second
	/// invariant).
	pub fn is_received(&self) -> bool {
		self.received.is_some()
	}

	/// Whether this row is still missing its completion.
	pub fn is_incomplete(&self) -> bool {
		self.completed.is_none() && self.received.is_some()
	}

	/// Whether this row is awaiting confirmation progress.
	pub fn is_confirming(&self) -> bool {
		self.completed.is_none() && self.confirmed_height.is_some()
	}

	/// `status` as surfaced by `get_payment_info` (§4.G).
	pub fn status(&self, now: u64) -> PaymentStatus {
		if self.completed.is_some() {
			PaymentStatus::Completed
		} else if self.confirmations > 0 {
			PaymentStatus::Confirmed
		} else if self.received.is_some() {
			PaymentStatus::Received
		} else if self.received.is_none() && self.expires.map_or(false, |expires| now >= expires) {
			PaymentStatus::Expired
		} else {
			PaymentStatus::NotReceived
		}
	}

	/// Seconds remaining before `expires`, or `None` if the invoice never
	/// expires or has already received payment.
	pub fn time_remaining(&self, now: u64) -> Option<u64> {
		if self.received.is_some() {
			return None;
		}
		self.expires.map(|expires| expires.saturating_sub(now))
	}
}

/// Lifecycle status computed from a [`Payment`] row, per §3/§4.G.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum PaymentStatus {
	NotReceived,
	Received,
	Confirmed,
	Completed,
	Expired,
}

impl PaymentStatus {
	pub fn as_str(&self) -> &'static str {
		match self {
			PaymentStatus::NotReceived => "Not received",
			PaymentStatus::Received => "Received",
			PaymentStatus::Confirmed => "Confirmed",
			PaymentStatus::Completed => "Completed",
			PaymentStatus::Expired => "Expired",
		}
	}
}

impl std::fmt::Display for PaymentStatus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The public/private-API projection of a [`Payment`], as returned by
/// `get_payment_info`.
#[derive(Clone, Debug)]
pub struct PaymentInfo {
	pub identifier_path: u64,
	pub url: String,
	pub price: Option<u64>,
	pub required_confirmations: u32,
	pub received: Option<u64>,
	pub confirmations: u32,
	pub time_remaining: Option<u64>,
	pub status: PaymentStatus,
}

impl From<(&Payment, u64)> for PaymentInfo {
	fn from((payment, now): (&Payment, u64)) -> PaymentInfo {
		PaymentInfo {
			identifier_path: payment.identifier_path,
			url: payment.url.clone(),
			price: payment.price,
			required_confirmations: payment.required_confirmations,
			received: payment.received,
			confirmations: payment.confirmations,
			time_remaining: payment.time_remaining(now),
			status: payment.status(now),
		}
	}
}

/// The projection `get_receiving_payment_for_url` returns.
#[derive(Clone, Debug)]
pub struct ReceivingPayment {
	pub identifier_path: u64,
	pub id: u64,
	pub price: Option<u64>,
	pub received_callback: Option<String>,
	pub confirmed_callback: Option<String>,
}

/// The projection `get_confirming_payments` returns.
#[derive(Clone, Debug)]
pub struct ConfirmingPayment {
	pub id: u64,
	pub required_confirmations: u32,
	pub confirmed_height: u64,
}
