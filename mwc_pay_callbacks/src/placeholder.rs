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

//! Literal token substitution applied to a callback URL before delivery.
//! Never applied to headers (there are none here — every callback is a bare
//! GET).

use mwc_pay_store::Payment;

/// Replace every placeholder token with the matching field of `payment`.
/// Absent optional fields substitute to an empty string.
pub fn substitute(url: &str, payment: &Payment) -> String {
	url.replace("__id__", &payment.id.to_string())
		.replace("__price__", &payment.price.map(|p| p.to_string()).unwrap_or_default())
		.replace(
			"__sender_payment_proof_address__",
			payment.sender_payment_proof_address.as_deref().unwrap_or(""),
		)
		.replace(
			"__kernel_commitment__",
			&payment
				.kernel_commitment
				.as_ref()
				.map(|bytes| hex::encode(bytes))
				.unwrap_or_default(),
		)
		.replace(
			"__recipient_payment_proof_signature__",
			&payment
				.recipient_partial_signature
				.as_ref()
				.map(|bytes| hex::encode(bytes))
				.unwrap_or_default(),
		)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn base_payment() -> Payment {
		Payment {
			identifier_path: 1,
			id: 42,
			url: "abcdefghijklmnopqrst".into(),
			created: 0,
			price: Some(1_000),
			required_confirmations: 1,
			expires: None,
			received: None,
			confirmations: 0,
			completed: None,
			completed_callback: None,
			received_callback: None,
			confirmed_callback: None,
			expired_callback: None,
			sender_payment_proof_address: Some("sender.onion".into()),
			kernel_commitment: Some(vec![0xabu8; 33]),
			sender_public_blind_excess: None,
			recipient_partial_signature: Some(vec![0xcdu8; 64]),
			public_nonce_sum: None,
			kernel_data: None,
			confirmed_height: None,
			completed_callback_successful: false,
			confirmed_callback_acknowledged: false,
			expired_callback_successful: false,
		}
	}

	#[test]
	fn substitutes_every_token() {
		let payment = base_payment();
		let url = "https://merchant.example/cb?id=__id__&price=__price__&addr=__sender_payment_proof_address__&commit=__kernel_commitment__&sig=__recipient_payment_proof_signature__";
		let out = substitute(url, &payment);
		assert_eq!(
			out,
			format!(
				"https://merchant.example/cb?id=42&price=1000&addr=sender.onion&commit={}&sig={}",
				hex::encode(vec![0xabu8; 33]),
				hex::encode(vec![0xcdu8; 64])
			)
		);
	}

	#[test]
	fn missing_fields_substitute_empty() {
		let mut payment = base_payment();
		payment.price = None;
		payment.sender_payment_proof_address = None;
		let out = substitute("__price__|__sender_payment_proof_address__", &payment);
		assert_eq!(out, "|");
	}
}
