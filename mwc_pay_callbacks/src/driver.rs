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

//! Fires the lifecycle callbacks §4.I describes. `deliver_once` is the
//! synchronous, single-attempt primitive the receive handler calls directly
//! (a failed `received` callback must abort the slate exchange before it
//! commits); [`CallbackDriver::run`] is the background task that retries
//! `completed`/`confirmed`/`expired` against the store until each succeeds,
//! surviving restarts because due-ness is recomputed from persisted state
//! rather than an in-memory queue.

use crate::error::{Error, ErrorKind};
use crate::placeholder::substitute;
use mwc_pay_store::PaymentStore;
use std::sync::Arc;
use std::time::Duration;

/// Issue a single best-effort GET to `payment`'s callback URL, substituting
/// placeholders first. Returns `Ok(())` only on a 2xx response.
pub async fn deliver_once(client: &reqwest::Client, url: &str) -> Result<(), Error> {
	let response = client.get(url).send().await?;
	let status = response.status();
	if status.is_success() {
		Ok(())
	} else {
		Err(ErrorKind::NotAcknowledged(status.as_u16()).into())
	}
}

pub struct CallbackDriver {
	store: Arc<PaymentStore>,
	client: reqwest::Client,
	retry_interval: Duration,
}

impl CallbackDriver {
	pub fn new(store: Arc<PaymentStore>, client: reqwest::Client, retry_interval: Duration) -> CallbackDriver {
		CallbackDriver {
			store,
			client,
			retry_interval,
		}
	}

	/// Drives `confirmed`+`completed` retries until cancelled. Per §5 these
	/// share one task, distinct from the `expired` monitor below.
	pub async fn run_confirmed_and_completed(&self) {
		loop {
			if let Err(err) = self.tick_confirmed_and_completed().await {
				log::error!("confirmed/completed callback tick failed: {}", err);
			}
			tokio::time::sleep(self.retry_interval).await;
		}
	}

	/// Drives the `expired` retry loop until cancelled, on its own task and
	/// its own cadence (§4.L runs this one on a 1s period).
	pub async fn run_expired(&self, period: Duration) {
		loop {
			if let Err(err) = self.tick_expired().await {
				log::error!("expired callback tick failed: {}", err);
			}
			tokio::time::sleep(period).await;
		}
	}

	/// One pass over every due `confirmed`/`completed` callback. Exposed
	/// separately from `run_confirmed_and_completed` so tests can drive it
	/// deterministically instead of racing a sleep loop.
	pub async fn tick_confirmed_and_completed(&self) -> Result<(), Error> {
		let _guard = self.store.lock_for_traversal();

		for payment in self.store.get_pending_completed_callbacks()? {
			let url = match &payment.completed_callback {
				Some(url) => substitute(url, &payment),
				None => continue,
			};
			if deliver_once(&self.client, &url).await.is_ok() {
				self.store.mark_completed_callback_successful(payment.id)?;
			}
		}

		for payment in self.store.get_pending_confirmed_callbacks()? {
			let url = match &payment.confirmed_callback {
				Some(url) => substitute(url, &payment),
				None => continue,
			};
			if deliver_once(&self.client, &url).await.is_ok() {
				self.store.mark_confirmed_callback_acknowledged(payment.id)?;
			}
		}

		Ok(())
	}

	/// One pass over every row that has expired without being received.
	pub async fn tick_expired(&self) -> Result<(), Error> {
		let _guard = self.store.lock_for_traversal();

		for payment in self.store.get_pending_expired_callbacks()? {
			let url = match &payment.expired_callback {
				Some(url) => substitute(url, &payment),
				None => continue,
			};
			if deliver_once(&self.client, &url).await.is_ok() {
				self.store.mark_expired_callback_successful(payment.id)?;
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn retry_interval_is_stored_verbatim() {
		let dir = tempfile::tempdir().unwrap();
		let store = Arc::new(PaymentStore::open(dir.path()).unwrap());
		let driver = CallbackDriver::new(store, reqwest::Client::new(), Duration::from_secs(5));
		assert_eq!(driver.retry_interval, Duration::from_secs(5));
	}
}
