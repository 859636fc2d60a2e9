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

//! Lifecycle callback delivery (§4.I): placeholder substitution plus a
//! best-effort synchronous send for `received` and a persistent retry loop
//! for `completed`/`confirmed`/`expired`.

pub mod driver;
pub mod error;
pub mod placeholder;

pub use driver::{deliver_once, CallbackDriver};
pub use error::{Error, ErrorKind};
pub use placeholder::substitute;

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Arc;
	use std::time::Duration;

	fn open_temp() -> (tempfile::TempDir, Arc<mwc_pay_store::PaymentStore>) {
		let dir = tempfile::tempdir().unwrap();
		let store = Arc::new(mwc_pay_store::PaymentStore::open(dir.path()).unwrap());
		(dir, store)
	}

	#[tokio::test]
	async fn tick_skips_rows_with_no_registered_callback() {
		let (_dir, store) = open_temp();
		store
			.create_payment(1, "aaaaaaaaaaaaaaaaaaaa", None, 1, None, None, None, None, None)
			.unwrap();
		store
			.set_payment_received(1, 5_000, "tor-address", &[1u8; 33], &[2u8; 33], &[3u8; 64], &[4u8; 33], &[5u8; 9])
			.unwrap();
		store.set_payment_confirmed(1, 1, 100).unwrap();

		let driver = CallbackDriver::new(store.clone(), reqwest::Client::new(), Duration::from_secs(1));
		driver.tick_confirmed_and_completed().await.unwrap();

		let info = store.get_payment_info(1).unwrap();
		assert_eq!(info.status.as_str(), "Completed");
	}
}
