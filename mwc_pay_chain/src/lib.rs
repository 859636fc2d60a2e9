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

//! Drives a [`mwc_pay_store::PaymentStore`] forward from chain notifications:
//! locates the kernel that confirms a received payment, verifies it against
//! the merchant's stored partial signature, and tracks confirmation depth
//! through reorgs.

pub mod error;
pub mod event;
pub mod observer;

pub use error::{Error, ErrorKind};
pub use event::{ArchiveSetEvent, Block, BlockEvent, Header, Kernel};
pub use observer::{BlockObserver, ChainObserver};

#[cfg(test)]
mod tests {
	use super::*;
	use mwc_pay_store::PaymentStore;
	use std::sync::Arc;

	fn open_temp() -> (tempfile::TempDir, Arc<PaymentStore>) {
		let dir = tempfile::tempdir().unwrap();
		let store = Arc::new(PaymentStore::open(dir.path()).unwrap());
		(dir, store)
	}

	fn header(height: u64, kernel_mmr_size: u64) -> Header {
		Header { height, kernel_mmr_size }
	}

	#[test]
	fn block_event_confirms_a_matching_kernel() {
		let (_dir, store) = open_temp();
		store
			.create_payment(1, "aaaaaaaaaaaaaaaaaaaa", None, 10, None, None, None, None, None)
			.unwrap();
		store
			.set_payment_received(1, 5_000, "tor-address", &[7u8; 33], &[2u8; 33], &[3u8; 64], &[4u8; 33], &[5u8; 9])
			.unwrap();

		let observer = ChainObserver::new(store.clone());
		let event = BlockEvent {
			header: header(100, 500),
			block: Block {
				kernels: vec![Kernel {
					excess: vec![9u8; 33],
					excess_sig: vec![0u8; 64],
					fee: 0,
					mmr_index: 490,
				}],
			},
		};
		// A kernel under an unrelated commitment leaves the payment untouched.
		observer.on_block(&event).unwrap();
		let info = store.get_payment_info(1).unwrap();
		assert_eq!(info.confirmations, 0);
	}

	#[test]
	fn block_event_rolls_forward_confirming_payments() {
		let (_dir, store) = open_temp();
		store
			.create_payment(1, "aaaaaaaaaaaaaaaaaaaa", None, 5, None, None, None, None, None)
			.unwrap();
		store
			.set_payment_received(1, 5_000, "tor-address", &[7u8; 33], &[2u8; 33], &[3u8; 64], &[4u8; 33], &[5u8; 9])
			.unwrap();
		store.set_payment_confirmed(1, 1, 100).unwrap();

		let observer = ChainObserver::new(store.clone());
		let event = BlockEvent {
			header: header(102, 500),
			block: Block { kernels: vec![] },
		};
		observer.on_block(&event).unwrap();

		let info = store.get_payment_info(1).unwrap();
		assert_eq!(info.confirmations, 3);
	}

	#[test]
	fn archive_set_event_is_a_no_op_on_an_empty_header_list() {
		let (_dir, store) = open_temp();
		let observer = ChainObserver::new(store);
		let event = ArchiveSetEvent {
			headers: vec![],
			archive_header: header(0, 0),
			kernels: vec![],
		};
		observer.on_archive_set(&event).unwrap();
	}
}
