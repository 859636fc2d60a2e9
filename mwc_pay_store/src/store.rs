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

//! An LMDB-backed (via `rkv`) payment store. A single `payments` database
//! keyed by `id` carries the full row, JSON-encoded; `by_url` and
//! `by_kernel_commitment` are unique secondary indexes mapping onto the same
//! `id`. The filtered views §4.G asks for (`incomplete`, `confirming`) are
//! served by a full scan over `payments` rather than a maintained index —
//! invoice counts for a single merchant are small enough that this stays
//! cheap, and it avoids a second place for the incomplete/confirming
//! predicates to drift out of sync with the row itself.

use crate::error::{Error, ErrorKind};
use crate::payment::{ConfirmingPayment, Payment, PaymentInfo, ReceivingPayment};
use rkv::backend::{Lmdb, LmdbDatabase, LmdbEnvironment};
use rkv::{Manager, Rkv, SingleStore, StoreOptions, Value};
use std::path::Path;
use std::sync::{Arc, Mutex, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

const NEXT_IDENTIFIER_PATH_KEY: &[u8] = b"next_identifier_path";

fn now() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("system clock is before the unix epoch")
		.as_secs()
}

fn url_index_key(url: &str) -> Vec<u8> {
	url.to_lowercase().into_bytes()
}

pub struct PaymentStore {
	env: Arc<RwLock<Rkv<LmdbEnvironment>>>,
	payments: SingleStore<LmdbDatabase>,
	by_url: SingleStore<LmdbDatabase>,
	by_kernel_commitment: SingleStore<LmdbDatabase>,
	meta: SingleStore<LmdbDatabase>,
	traversal_lock: Mutex<()>,
}

impl PaymentStore {
	/// Open (creating if absent) the LMDB environment rooted at `dir`.
	pub fn open(dir: &Path) -> Result<PaymentStore, Error> {
		std::fs::create_dir_all(dir).map_err(|err| ErrorKind::Storage(err.to_string()))?;

		let mut manager = Manager::<LmdbEnvironment>::singleton()
			.write()
			.map_err(|_| ErrorKind::Storage("rkv environment manager lock was poisoned".into()))?;
		let env = manager
			.get_or_create(dir, Rkv::new::<Lmdb>)
			.map_err(|err| ErrorKind::Storage(err.to_string()))?;

		let (payments, by_url, by_kernel_commitment, meta) = {
			let guard = env
				.read()
				.map_err(|_| ErrorKind::Storage("rkv environment lock was poisoned".into()))?;
			(
				guard.open_single("payments", StoreOptions::create())?,
				guard.open_single("by_url", StoreOptions::create())?,
				guard.open_single("by_kernel_commitment", StoreOptions::create())?,
				guard.open_single("meta", StoreOptions::create())?,
			)
		};

		Ok(PaymentStore {
			env,
			payments,
			by_url,
			by_kernel_commitment,
			meta,
			traversal_lock: Mutex::new(()),
		})
	}

	/// The lock external drivers (observer, callback driver) must hold
	/// around a read-then-write traversal of the store.
	pub fn lock_for_traversal(&self) -> std::sync::MutexGuard<'_, ()> {
		self.traversal_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	fn env(&self) -> std::sync::RwLockReadGuard<'_, Rkv<LmdbEnvironment>> {
		self.env.read().unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	fn get_payment<'env, T: rkv::Readable<'env>>(&self, txn: &'env T, id: u64) -> Result<Payment, Error> {
		match self.payments.get(txn, id.to_be_bytes())? {
			Some(Value::Blob(bytes)) => Ok(serde_json::from_slice(bytes)?),
			Some(_) => Err(ErrorKind::CorruptRecord("payment row was not stored as a blob".into()).into()),
			None => Err(ErrorKind::NotFound.into()),
		}
	}

	/// Insert a fresh invoice, minting its `identifier_path`.
	#[allow(clippy::too_many_arguments)]
	pub fn create_payment(
		&self,
		id: u64,
		url: &str,
		price: Option<u64>,
		required_confirmations: u32,
		timeout: Option<u64>,
		completed_callback: Option<String>,
		received_callback: Option<String>,
		confirmed_callback: Option<String>,
		expired_callback: Option<String>,
	) -> Result<u64, Error> {
		let env = self.env();
		let mut writer = env.write()?;

		if self.payments.get(&writer, id.to_be_bytes())?.is_some() {
			return Err(ErrorKind::DuplicateId.into());
		}
		let url_key = url_index_key(url);
		if self.by_url.get(&writer, &url_key)?.is_some() {
			return Err(ErrorKind::DuplicateUrl.into());
		}

		let next = match self.meta.get(&writer, NEXT_IDENTIFIER_PATH_KEY)? {
			Some(Value::U64(value)) => value,
			Some(_) => return Err(ErrorKind::CorruptRecord("identifier-path counter was corrupted".into()).into()),
			None => 1,
		};
		self.meta
			.put(&mut writer, NEXT_IDENTIFIER_PATH_KEY, &Value::U64(next + 1))?;

		let created = now();
		let payment = Payment {
			identifier_path: next,
			id,
			url: url.to_string(),
			created,
			price,
			required_confirmations,
			expires: timeout.filter(|&t| t != 0).map(|t| created + t),
			received: None,
			confirmations: 0,
			completed: None,
			completed_callback,
			received_callback,
			confirmed_callback,
			expired_callback,
			sender_payment_proof_address: None,
			kernel_commitment: None,
			sender_public_blind_excess: None,
			recipient_partial_signature: None,
			public_nonce_sum: None,
			kernel_data: None,
			confirmed_height: None,
			completed_callback_successful: false,
			confirmed_callback_acknowledged: false,
			expired_callback_successful: false,
		};

		let bytes = serde_json::to_vec(&payment)?;
		self.payments.put(&mut writer, payment.id.to_be_bytes(), &Value::Blob(&bytes))?;
		self.by_url.put(&mut writer, &url_key, &Value::U64(id))?;
		writer.commit()?;
		Ok(next)
	}

	/// The public/private-API projection of invoice `id`.
	pub fn get_payment_info(&self, id: u64) -> Result<PaymentInfo, Error> {
		let env = self.env();
		let reader = env.read()?;
		let payment = self.get_payment(&reader, id)?;
		Ok(PaymentInfo::from((&payment, now())))
	}

	/// The full row for `id`. Used where a caller needs the raw receive-set
	/// columns a [`PaymentInfo`] projection doesn't carry — the synchronous
	/// `received` callback substitutes its placeholders straight from here.
	pub fn get_payment_by_id(&self, id: u64) -> Result<Payment, Error> {
		let env = self.env();
		let reader = env.read()?;
		self.get_payment(&reader, id)
	}

	/// The still-payable invoice bound to `url`, if any.
	pub fn get_receiving_payment_for_url(&self, url: &str) -> Result<Option<ReceivingPayment>, Error> {
		let env = self.env();
		let reader = env.read()?;
		let id = match self.by_url.get(&reader, url_index_key(url))? {
			Some(Value::U64(id)) => id,
			Some(_) => return Err(ErrorKind::CorruptRecord("url index entry was corrupted".into()).into()),
			None => return Ok(None),
		};
		let payment = self.get_payment(&reader, id)?;
		if payment.received.is_some() {
			return Ok(None);
		}
		if let Some(expires) = payment.expires {
			if now() >= expires {
				return Ok(None);
			}
		}
		Ok(Some(ReceivingPayment {
			identifier_path: payment.identifier_path,
			id: payment.id,
			price: payment.price,
			received_callback: payment.received_callback,
			confirmed_callback: payment.confirmed_callback,
		}))
	}

	/// The row bound to `kernel_commitment`, iff it hasn't yet seen its first
	/// confirmation.
	pub fn get_unconfirmed_payment(&self, kernel_commitment: &[u8]) -> Result<Option<Payment>, Error> {
		let env = self.env();
		let reader = env.read()?;
		let id = match self.by_kernel_commitment.get(&reader, kernel_commitment)? {
			Some(Value::U64(id)) => id,
			Some(_) => return Err(ErrorKind::CorruptRecord("kernel-commitment index entry was corrupted".into()).into()),
			None => return Ok(None),
		};
		let payment = self.get_payment(&reader, id)?;
		if payment.confirmed_height.is_some() {
			return Ok(None);
		}
		Ok(Some(payment))
	}

	fn all_payments<'env, T: rkv::Readable<'env>>(&self, txn: &'env T) -> Result<Vec<Payment>, Error> {
		let mut rows = Vec::new();
		let mut iter = self.payments.iter_start(txn)?;
		while let Some(next) = iter.next() {
			let (_, value) = next?;
			match value {
				Some(Value::Blob(bytes)) => rows.push(serde_json::from_slice(bytes)?),
				Some(_) => return Err(ErrorKind::CorruptRecord("payment row was not stored as a blob".into()).into()),
				None => {}
			}
		}
		Ok(rows)
	}

	/// Every row still short of completion but already received.
	pub fn get_incomplete_payments(&self) -> Result<Vec<Payment>, Error> {
		let env = self.env();
		let reader = env.read()?;
		Ok(self
			.all_payments(&reader)?
			.into_iter()
			.filter(Payment::is_incomplete)
			.collect())
	}

	/// Every row that has reached `completed`, newest first. Used by the
	/// daemon's `--show_completed_payments` diagnostic, not on any hot path.
	pub fn get_completed_payments(&self) -> Result<Vec<Payment>, Error> {
		let env = self.env();
		let reader = env.read()?;
		let mut rows: Vec<Payment> = self
			.all_payments(&reader)?
			.into_iter()
			.filter(|payment| payment.completed.is_some())
			.collect();
		rows.sort_by_key(|payment| std::cmp::Reverse(payment.completed));
		Ok(rows)
	}

	/// Every row awaiting further confirmations.
	pub fn get_confirming_payments(&self) -> Result<Vec<ConfirmingPayment>, Error> {
		let env = self.env();
		let reader = env.read()?;
		Ok(self
			.all_payments(&reader)?
			.into_iter()
			.filter(Payment::is_confirming)
			.map(|payment| ConfirmingPayment {
				id: payment.id,
				required_confirmations: payment.required_confirmations,
				confirmed_height: payment.confirmed_height.expect("filtered by is_confirming"),
			})
			.collect())
	}

	/// Record the receive event for invoice `id`. The unique witness of the
	/// `received` transition (§4.G) — every receive-set column is
	/// write-once, enforced here.
	#[allow(clippy::too_many_arguments)]
	pub fn set_payment_received(
		&self,
		id: u64,
		price: u64,
		sender_payment_proof_address: &str,
		kernel_commitment: &[u8],
		sender_public_blind_excess: &[u8],
		recipient_partial_signature: &[u8],
		public_nonce_sum: &[u8],
		kernel_data: &[u8],
	) -> Result<(), Error> {
		let env = self.env();
		let mut writer = env.write()?;

		let mut payment = self.get_payment(&writer, id)?;
		if payment.received.is_some() {
			return Err(ErrorKind::InvariantViolation("payment has already been received".into()).into());
		}
		if let Some(existing_price) = payment.price {
			if existing_price != price {
				return Err(ErrorKind::InvariantViolation("price is frozen once set".into()).into());
			}
		}
		if self.by_kernel_commitment.get(&writer, kernel_commitment)?.is_some() {
			return Err(ErrorKind::DuplicateKernelCommitment.into());
		}

		payment.price = Some(price);
		payment.received = Some(now());
		payment.sender_payment_proof_address = Some(sender_payment_proof_address.to_string());
		payment.kernel_commitment = Some(kernel_commitment.to_vec());
		payment.sender_public_blind_excess = Some(sender_public_blind_excess.to_vec());
		payment.recipient_partial_signature = Some(recipient_partial_signature.to_vec());
		payment.public_nonce_sum = Some(public_nonce_sum.to_vec());
		payment.kernel_data = Some(kernel_data.to_vec());

		let bytes = serde_json::to_vec(&payment)?;
		self.payments.put(&mut writer, payment.id.to_be_bytes(), &Value::Blob(&bytes))?;
		self.by_kernel_commitment.put(&mut writer, kernel_commitment, &Value::U64(id))?;
		writer.commit()?;
		Ok(())
	}

	/// Advance `id`'s confirmation count, promoting to completed once
	/// `confirmations` reaches `required_confirmations`.
	pub fn set_payment_confirmed(&self, id: u64, confirmations: u32, confirmed_height: u64) -> Result<(), Error> {
		let env = self.env();
		let mut writer = env.write()?;

		let mut payment = self.get_payment(&writer, id)?;
		payment.confirmations = confirmations;
		payment.confirmed_height = if confirmations == 0 { None } else { Some(confirmed_height) };
		if confirmations >= payment.required_confirmations && payment.completed.is_none() {
			payment.completed = Some(now());
		}

		let bytes = serde_json::to_vec(&payment)?;
		self.payments.put(&mut writer, payment.id.to_be_bytes(), &Value::Blob(&bytes))?;
		writer.commit()?;
		Ok(())
	}

	/// Rows that have reached `completed` but whose completion callback
	/// hasn't yet been acknowledged by its endpoint.
	pub fn get_pending_completed_callbacks(&self) -> Result<Vec<Payment>, Error> {
		let env = self.env();
		let reader = env.read()?;
		Ok(self
			.all_payments(&reader)?
			.into_iter()
			.filter(|payment| payment.completed.is_some() && !payment.completed_callback_successful)
			.collect())
	}

	/// Rows that have seen their first confirmation but whose confirmed
	/// callback hasn't yet been acknowledged.
	pub fn get_pending_confirmed_callbacks(&self) -> Result<Vec<Payment>, Error> {
		let env = self.env();
		let reader = env.read()?;
		Ok(self
			.all_payments(&reader)?
			.into_iter()
			.filter(|payment| {
				payment.confirmations > 0 && payment.confirmed_callback.is_some() && !payment.confirmed_callback_acknowledged
			})
			.collect())
	}

	/// Rows that reached `expires` without being received and whose expiry
	/// callback hasn't yet succeeded.
	pub fn get_pending_expired_callbacks(&self) -> Result<Vec<Payment>, Error> {
		let env = self.env();
		let reader = env.read()?;
		let now = now();
		Ok(self
			.all_payments(&reader)?
			.into_iter()
			.filter(|payment| {
				payment.received.is_none()
					&& payment.expired_callback.is_some()
					&& !payment.expired_callback_successful
					&& payment.expires.map_or(false, |expires| now >= expires)
			})
			.collect())
	}

	/// Record that `id`'s completed callback received a 2xx response.
	pub fn mark_completed_callback_successful(&self, id: u64) -> Result<(), Error> {
		let env = self.env();
		let mut writer = env.write()?;
		let mut payment = self.get_payment(&writer, id)?;
		payment.completed_callback_successful = true;
		let bytes = serde_json::to_vec(&payment)?;
		self.payments.put(&mut writer, payment.id.to_be_bytes(), &Value::Blob(&bytes))?;
		writer.commit()?;
		Ok(())
	}

	/// Record that `id`'s confirmed callback received a 2xx response.
	pub fn mark_confirmed_callback_acknowledged(&self, id: u64) -> Result<(), Error> {
		let env = self.env();
		let mut writer = env.write()?;
		let mut payment = self.get_payment(&writer, id)?;
		payment.confirmed_callback_acknowledged = true;
		let bytes = serde_json::to_vec(&payment)?;
		self.payments.put(&mut writer, payment.id.to_be_bytes(), &Value::Blob(&bytes))?;
		writer.commit()?;
		Ok(())
	}

	/// Record that `id`'s expired callback received a 2xx response.
	pub fn mark_expired_callback_successful(&self, id: u64) -> Result<(), Error> {
		let env = self.env();
		let mut writer = env.write()?;
		let mut payment = self.get_payment(&writer, id)?;
		payment.expired_callback_successful = true;
		let bytes = serde_json::to_vec(&payment)?;
		self.payments.put(&mut writer, payment.id.to_be_bytes(), &Value::Blob(&bytes))?;
		writer.commit()?;
		Ok(())
	}

	/// Reset every incomplete row whose confirmation sits at or above
	/// `reorg_height` back to unconfirmed, because it now lies on an
	/// abandoned chain.
	pub fn reorg_incomplete_payments(&self, reorg_height: u64) -> Result<(), Error> {
		let env = self.env();
		let mut writer = env.write()?;

		let mut rows = Vec::new();
		{
			let mut iter = self.payments.iter_start(&writer)?;
			while let Some(next) = iter.next() {
				let (_, value) = next?;
				if let Some(Value::Blob(bytes)) = value {
					rows.push(serde_json::from_slice::<Payment>(bytes)?);
				}
			}
		}

		for mut payment in rows {
			if payment.completed.is_none() && payment.confirmed_height.map_or(false, |h| h >= reorg_height) {
				payment.confirmations = 0;
				payment.confirmed_height = None;
				let bytes = serde_json::to_vec(&payment)?;
				self.payments.put(&mut writer, payment.id.to_be_bytes(), &Value::Blob(&bytes))?;
			}
		}

		writer.commit()?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn open_temp() -> (tempfile::TempDir, PaymentStore) {
		let dir = tempfile::tempdir().unwrap();
		let store = PaymentStore::open(dir.path()).unwrap();
		(dir, store)
	}

	#[test]
	fn create_and_read_back_a_payment() {
		let (_dir, store) = open_temp();
		let path = store
			.create_payment(1, "abcdefghijklmnopqrst", Some(1_000), 10, Some(3600), None, None, None, None)
			.unwrap();
		assert_eq!(path, 1);

		let info = store.get_payment_info(1).unwrap();
		assert_eq!(info.price, Some(1_000));
		assert_eq!(info.status.as_str(), "Not received");
	}

	#[test]
	fn identifier_paths_are_strictly_monotonic() {
		let (_dir, store) = open_temp();
		let a = store
			.create_payment(1, "aaaaaaaaaaaaaaaaaaaa", None, 1, None, None, None, None, None)
			.unwrap();
		let b = store
			.create_payment(2, "bbbbbbbbbbbbbbbbbbbb", None, 1, None, None, None, None, None)
			.unwrap();
		assert!(b > a);
	}

	#[test]
	fn duplicate_id_is_rejected() {
		let (_dir, store) = open_temp();
		store
			.create_payment(1, "aaaaaaaaaaaaaaaaaaaa", None, 1, None, None, None, None, None)
			.unwrap();
		let err = store
			.create_payment(1, "bbbbbbbbbbbbbbbbbbbb", None, 1, None, None, None, None, None)
			.unwrap_err();
		assert_eq!(err.kind(), ErrorKind::DuplicateId);
	}

	#[test]
	fn duplicate_url_is_rejected_case_insensitively() {
		let (_dir, store) = open_temp();
		store
			.create_payment(1, "Invoice-Slug-Value01", None, 1, None, None, None, None, None)
			.unwrap();
		let err = store
			.create_payment(2, "invoice-slug-value01", None, 1, None, None, None, None, None)
			.unwrap_err();
		assert_eq!(err.kind(), ErrorKind::DuplicateUrl);
	}

	#[test]
	fn receive_then_confirm_then_complete() {
		let (_dir, store) = open_temp();
		store
			.create_payment(1, "aaaaaaaaaaaaaaaaaaaa", None, 2, None, None, None, None, None)
			.unwrap();

		store
			.set_payment_received(1, 5_000, "tor-address", &[1u8; 33], &[2u8; 33], &[3u8; 64], &[4u8; 33], &[5u8; 9])
			.unwrap();
		let info = store.get_payment_info(1).unwrap();
		assert_eq!(info.status.as_str(), "Received");

		store.set_payment_confirmed(1, 1, 100).unwrap();
		let info = store.get_payment_info(1).unwrap();
		assert_eq!(info.status.as_str(), "Confirmed");

		store.set_payment_confirmed(1, 2, 101).unwrap();
		let info = store.get_payment_info(1).unwrap();
		assert_eq!(info.status.as_str(), "Completed");
	}

	#[test]
	fn receive_is_write_once() {
		let (_dir, store) = open_temp();
		store
			.create_payment(1, "aaaaaaaaaaaaaaaaaaaa", None, 1, None, None, None, None, None)
			.unwrap();
		store
			.set_payment_received(1, 5_000, "tor-address", &[1u8; 33], &[2u8; 33], &[3u8; 64], &[4u8; 33], &[5u8; 9])
			.unwrap();
		let err = store
			.set_payment_received(1, 5_000, "tor-address", &[9u8; 33], &[2u8; 33], &[3u8; 64], &[4u8; 33], &[5u8; 9])
			.unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvariantViolation("payment has already been received".into()));
	}

	#[test]
	fn duplicate_kernel_commitment_is_rejected() {
		let (_dir, store) = open_temp();
		store
			.create_payment(1, "aaaaaaaaaaaaaaaaaaaa", None, 1, None, None, None, None, None)
			.unwrap();
		store
			.create_payment(2, "bbbbbbbbbbbbbbbbbbbb", None, 1, None, None, None, None, None)
			.unwrap();
		store
			.set_payment_received(1, 5_000, "tor-address", &[7u8; 33], &[2u8; 33], &[3u8; 64], &[4u8; 33], &[5u8; 9])
			.unwrap();
		let err = store
			.set_payment_received(2, 5_000, "tor-address", &[7u8; 33], &[2u8; 33], &[3u8; 64], &[4u8; 33], &[5u8; 9])
			.unwrap_err();
		assert_eq!(err.kind(), ErrorKind::DuplicateKernelCommitment);
	}

	#[test]
	fn reorg_resets_unfinished_confirmations() {
		let (_dir, store) = open_temp();
		store
			.create_payment(1, "aaaaaaaaaaaaaaaaaaaa", None, 5, None, None, None, None, None)
			.unwrap();
		store
			.set_payment_received(1, 5_000, "tor-address", &[1u8; 33], &[2u8; 33], &[3u8; 64], &[4u8; 33], &[5u8; 9])
			.unwrap();
		store.set_payment_confirmed(1, 2, 200).unwrap();

		store.reorg_incomplete_payments(150).unwrap();

		let confirming = store.get_confirming_payments().unwrap();
		assert!(confirming.is_empty());
	}

	#[test]
	fn get_receiving_payment_ignores_already_received_invoices() {
		let (_dir, store) = open_temp();
		store
			.create_payment(1, "aaaaaaaaaaaaaaaaaaaa", None, 1, None, None, None, None, None)
			.unwrap();
		assert!(store.get_receiving_payment_for_url("aaaaaaaaaaaaaaaaaaaa").unwrap().is_some());

		store
			.set_payment_received(1, 5_000, "tor-address", &[1u8; 33], &[2u8; 33], &[3u8; 64], &[4u8; 33], &[5u8; 9])
			.unwrap();
		assert!(store.get_receiving_payment_for_url("aaaaaaaaaaaaaaaaaaaa").unwrap().is_none());
	}

	#[test]
	fn completed_callback_becomes_pending_on_completion_and_clears_once_marked() {
		let (_dir, store) = open_temp();
		store
			.create_payment(1, "aaaaaaaaaaaaaaaaaaaa", None, 1, None, Some("http://h/__id__".into()), None, None, None)
			.unwrap();
		store
			.set_payment_received(1, 5_000, "tor-address", &[1u8; 33], &[2u8; 33], &[3u8; 64], &[4u8; 33], &[5u8; 9])
			.unwrap();
		assert!(store.get_pending_completed_callbacks().unwrap().is_empty());

		store.set_payment_confirmed(1, 1, 100).unwrap();
		let pending = store.get_pending_completed_callbacks().unwrap();
		assert_eq!(pending.len(), 1);

		store.mark_completed_callback_successful(1).unwrap();
		assert!(store.get_pending_completed_callbacks().unwrap().is_empty());
	}

	#[test]
	fn confirmed_callback_is_pending_until_acknowledged() {
		let (_dir, store) = open_temp();
		store
			.create_payment(1, "aaaaaaaaaaaaaaaaaaaa", None, 5, None, None, None, Some("http://h/__id__".into()), None)
			.unwrap();
		store
			.set_payment_received(1, 5_000, "tor-address", &[1u8; 33], &[2u8; 33], &[3u8; 64], &[4u8; 33], &[5u8; 9])
			.unwrap();
		assert!(store.get_pending_confirmed_callbacks().unwrap().is_empty());

		store.set_payment_confirmed(1, 1, 100).unwrap();
		assert_eq!(store.get_pending_confirmed_callbacks().unwrap().len(), 1);

		store.mark_confirmed_callback_acknowledged(1).unwrap();
		assert!(store.get_pending_confirmed_callbacks().unwrap().is_empty());
	}
}
