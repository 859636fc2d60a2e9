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

//! Consumes archive-set and block notifications from the host's chain
//! client, locates the kernels that confirm a payment, verifies the
//! aggregate signature against the merchant's stored partial, and advances
//! (or, on reorg, rolls back) each row's confirmation count.

use crate::error::{Error, ErrorKind};
use crate::event::{ArchiveSetEvent, BlockEvent, Header, Kernel};
use mwc_pay_crypto::hash::sha256;
use mwc_pay_crypto::secp;
use mwc_pay_store::{Payment, PaymentStore};
use std::sync::Arc;

/// The interface the host's chain client drives this crate through.
pub trait BlockObserver {
	fn on_archive_set(&self, event: &ArchiveSetEvent) -> Result<(), Error>;
	fn on_block(&self, event: &BlockEvent) -> Result<(), Error>;
}

pub struct ChainObserver {
	store: Arc<PaymentStore>,
}

impl ChainObserver {
	pub fn new(store: Arc<PaymentStore>) -> ChainObserver {
		ChainObserver { store }
	}

	fn clamp_confirmations(archive_height: u64, confirmed_at: u64) -> u32 {
		let depth = archive_height.saturating_sub(confirmed_at) + 1;
		depth.min(u32::MAX as u64) as u32
	}

	/// The first header whose cumulative kernel-MMR size covers
	/// `mmr_index`, by binary search over `headers` (assumed sorted
	/// ascending by height, and so by `kernel_mmr_size`).
	fn header_containing_kernel(headers: &[Header], mmr_index: u64) -> Option<Header> {
		let position = headers.partition_point(|header| header.kernel_mmr_size <= mmr_index);
		headers.get(position).copied()
	}
}

impl BlockObserver for ChainObserver {
	fn on_archive_set(&self, event: &ArchiveSetEvent) -> Result<(), Error> {
		let _guard = self.store.lock_for_traversal();
		let front_height = match event.headers.first() {
			Some(header) => header.height,
			None => return Ok(()),
		};

		for payment in self.store.get_incomplete_payments()? {
			let potential_reorg = payment
				.confirmed_height
				.map_or(true, |confirmed_at| confirmed_at >= front_height);

			if potential_reorg {
				self.reconcile_against_archive_set(&payment, event)?;
			} else if let Some(confirmed_at) = payment.confirmed_height {
				let confirmations = Self::clamp_confirmations(event.archive_header.height, confirmed_at);
				self.store
					.set_payment_confirmed(payment.id, confirmations, confirmed_at)?;
			}
		}

		Ok(())
	}

	fn on_block(&self, event: &BlockEvent) -> Result<(), Error> {
		let _guard = self.store.lock_for_traversal();

		self.store.reorg_incomplete_payments(event.header.height)?;

		for confirming in self.store.get_confirming_payments()? {
			let confirmations = Self::clamp_confirmations(event.header.height, confirming.confirmed_height);
			self.store
				.set_payment_confirmed(confirming.id, confirmations, confirming.confirmed_height)?;
		}

		for kernel in &event.block.kernels {
			let payment = match self.store.get_unconfirmed_payment(&kernel.excess)? {
				Some(payment) => payment,
				None => continue,
			};
			if verify_confirming_kernel(&payment, kernel)? {
				self.store.set_payment_confirmed(payment.id, 1, event.header.height)?;
			}
		}

		Ok(())
	}
}

impl ChainObserver {
	fn reconcile_against_archive_set(&self, payment: &Payment, event: &ArchiveSetEvent) -> Result<(), Error> {
		let commitment = match &payment.kernel_commitment {
			Some(commitment) => commitment,
			None => return Ok(()),
		};

		let hit = event.kernels.iter().find(|kernel| &kernel.excess == commitment);
		let matched = match hit {
			Some(kernel) if verify_confirming_kernel(payment, kernel)? => Some(kernel),
			_ => None,
		};

		match matched {
			Some(kernel) => {
				if let Some(header) = Self::header_containing_kernel(&event.headers, kernel.mmr_index) {
					if header.height <= event.archive_header.height {
						let confirmations = Self::clamp_confirmations(event.archive_header.height, header.height);
						self.store
							.set_payment_confirmed(payment.id, confirmations, header.height)?;
					}
				}
			}
			None => {
				if payment.confirmed_height.is_some() {
					self.store.set_payment_confirmed(payment.id, 0, 0)?;
				}
			}
		}

		Ok(())
	}
}

/// Verify `kernel`'s complete aggregate signature against `payment`'s stored
/// partial and public values, per §4.H: recover the counterparty's partial
/// via `subtract_partial`, then check either candidate verifies under the
/// sender's public key and the summed nonce/public-key.
fn verify_confirming_kernel(payment: &Payment, kernel: &Kernel) -> Result<bool, Error> {
	let recipient_partial: [u8; 64] = payment
		.recipient_partial_signature
		.as_ref()
		.ok_or_else(|| ErrorKind::CorruptRecord("received payment is missing its partial signature".into()))?
		.as_slice()
		.try_into()
		.map_err(|_| ErrorKind::CorruptRecord("recipient partial signature has the wrong length".into()))?;
	let complete: [u8; 64] = kernel
		.excess_sig
		.as_slice()
		.try_into()
		.map_err(|_| ErrorKind::CorruptRecord("kernel signature has the wrong length".into()))?;

	let kernel_data = payment
		.kernel_data
		.as_ref()
		.ok_or_else(|| ErrorKind::CorruptRecord("received payment is missing its kernel data".into()))?;
	let message = sha256(kernel_data);

	let sender_pub_bytes = payment
		.sender_public_blind_excess
		.as_ref()
		.ok_or_else(|| ErrorKind::CorruptRecord("received payment is missing the sender's public blind excess".into()))?;
	let nonce_sum_bytes = payment
		.public_nonce_sum
		.as_ref()
		.ok_or_else(|| ErrorKind::CorruptRecord("received payment is missing its nonce sum".into()))?;

	let sender_pub = secp::parse_public_key(sender_pub_bytes)?;
	let nonce_sum = secp::parse_public_key(nonce_sum_bytes)?;
	// The excess commitment and the summed public-blind-excess share the
	// same 33-byte serialization (§4.D), so the stored commitment doubles
	// as the public-key sum here.
	let public_key_sum = secp::parse_public_key(commitment_bytes(payment)?)?;

	for candidate in secp::subtract_partial(&complete, &recipient_partial)? {
		if secp::verify_partial(&candidate, &sender_pub, &nonce_sum, &public_key_sum, &message)? {
			return Ok(true);
		}
	}
	Ok(false)
}

fn commitment_bytes(payment: &Payment) -> Result<&[u8], Error> {
	payment
		.kernel_commitment
		.as_deref()
		.ok_or_else(|| ErrorKind::CorruptRecord("received payment is missing its kernel commitment".into()).into())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn header_lookup_finds_the_first_covering_header() {
		let headers = vec![
			Header { height: 10, kernel_mmr_size: 100 },
			Header { height: 11, kernel_mmr_size: 120 },
			Header { height: 12, kernel_mmr_size: 150 },
		];
		let found = ChainObserver::header_containing_kernel(&headers, 110).unwrap();
		assert_eq!(found.height, 11);
	}

	#[test]
	fn header_lookup_returns_none_past_the_end() {
		let headers = vec![Header { height: 10, kernel_mmr_size: 100 }];
		assert!(ChainObserver::header_containing_kernel(&headers, 500).is_none());
	}

	#[test]
	fn confirmation_depth_clamps_at_u32_max() {
		let confirmations = ChainObserver::clamp_confirmations(u64::MAX, 0);
		assert_eq!(confirmations, u32::MAX);
	}
}
