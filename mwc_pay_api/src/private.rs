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

//! The GET-only private control API a merchant's own backend calls:
//! `/create_payment`, `/get_payment_info`, `/get_price`.

use crate::slug;
use crate::state::AppState;
use gotham::helpers::http::response::create_response;
use gotham::hyper::{Body, Response, StatusCode};
use gotham::state::{FromState, State};
use gotham_derive::{StateData, StaticResponseExtender};
use mwc_pay_store::ErrorKind as StoreErrorKind;
use serde_derive::Deserialize;
use serde_json::json;

const URL_COLLISION_ATTEMPTS: u32 = 16;

#[derive(Deserialize, StateData, StaticResponseExtender)]
pub struct CreatePaymentQuery {
	pub price: Option<u64>,
	pub required_confirmations: Option<u32>,
	pub timeout: Option<u64>,
	pub completed_callback: String,
	pub received_callback: Option<String>,
	pub confirmed_callback: Option<String>,
	pub expired_callback: Option<String>,
}

#[derive(Deserialize, StateData, StaticResponseExtender)]
pub struct PaymentInfoQuery {
	pub payment_id: u64,
}

pub fn create_payment(state: State) -> (State, Response<Body>) {
	let query = CreatePaymentQuery::borrow_from(&state);
	let price = query.price;
	let required_confirmations = query.required_confirmations.unwrap_or(1);
	let timeout = query.timeout;
	let completed_callback = query.completed_callback.clone();
	let received_callback = query.received_callback.clone();
	let confirmed_callback = query.confirmed_callback.clone();
	let expired_callback = query.expired_callback.clone();
	let app_state = AppState::borrow_from(&state).clone();

	if let Err(message) = validate_callback_url(&completed_callback) {
		return respond(state, json!({ "error": message }));
	}
	for optional in [&received_callback, &confirmed_callback, &expired_callback] {
		if let Some(url) = optional {
			if let Err(message) = validate_callback_url(url) {
				return respond(state, json!({ "error": message }));
			}
		}
	}

	let mut attempt = 0;
	let outcome = loop {
		let id = slug::random_id();
		let url = slug::random_url();

		match app_state.store.create_payment(
			id,
			&url,
			price,
			required_confirmations,
			timeout,
			Some(completed_callback.clone()),
			received_callback.clone(),
			confirmed_callback.clone(),
			expired_callback.clone(),
		) {
			Ok(identifier_path) => break Ok((id, url, identifier_path)),
			Err(err) if matches!(err.kind(), StoreErrorKind::DuplicateId | StoreErrorKind::DuplicateUrl) => {
				attempt += 1;
				if attempt >= URL_COLLISION_ATTEMPTS {
					break Err(err.to_string());
				}
			}
			Err(err) => break Err(err.to_string()),
		}
	};

	let body = match outcome {
		Ok((id, url, identifier_path)) => match app_state.wallet.tor_payment_proof_address(identifier_path) {
			Ok(address) => json!({
				"payment_id": id,
				"url": url,
				"recipient_payment_proof_address": address,
			}),
			Err(err) => json!({ "error": err.to_string() }),
		},
		Err(message) => json!({ "error": message }),
	};

	respond(state, body)
}

pub fn get_payment_info(state: State) -> (State, Response<Body>) {
	let payment_id = PaymentInfoQuery::borrow_from(&state).payment_id;
	let app_state = AppState::borrow_from(&state).clone();

	let body = match app_state.store.get_payment_info(payment_id) {
		Ok(info) => match app_state.wallet.tor_payment_proof_address(info.identifier_path) {
			Ok(address) => json!({
				"url": info.url,
				"price": info.price,
				"required_confirmations": info.required_confirmations,
				"received": info.received,
				"confirmations": info.confirmations,
				"time_remaining": info.time_remaining,
				"status": info.status.as_str(),
				"recipient_payment_proof_address": address,
			}),
			Err(err) => json!({ "error": err.to_string() }),
		},
		Err(err) => json!({ "error": err.to_string() }),
	};

	respond(state, body)
}

pub fn get_price(state: State) -> (State, Response<Body>) {
	let app_state = AppState::borrow_from(&state).clone();

	let body = match &app_state.price {
		Some(aggregator) => match aggregator.current_price() {
			Some(price) => json!({ "price": price.to_string() }),
			None => json!({ "error": "no price has been collected yet" }),
		},
		None => json!({ "error": "price collector is disabled" }),
	};

	respond(state, body)
}

/// §4.K: a callback URL must be http(s) with a host and a resolvable port.
fn validate_callback_url(url: &str) -> Result<(), String> {
	let parsed = url::Url::parse(url).map_err(|err| format!("invalid callback url: {}", err))?;
	if parsed.scheme() != "http" && parsed.scheme() != "https" {
		return Err("callback url must be http or https".to_string());
	}
	if parsed.host_str().is_none() {
		return Err("callback url must have a host".to_string());
	}
	if parsed.port_or_known_default().is_none() {
		return Err("callback url must have a port".to_string());
	}
	Ok(())
}

fn respond(state: State, body: serde_json::Value) -> (State, Response<Body>) {
	let response = create_response(&state, StatusCode::OK, mime::APPLICATION_JSON, body.to_string());
	(state, response)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_http_and_https_with_a_port() {
		assert!(validate_callback_url("https://merchant.example:8443/cb").is_ok());
		assert!(validate_callback_url("http://merchant.example/cb").is_ok());
	}

	#[test]
	fn rejects_non_http_schemes() {
		assert!(validate_callback_url("ftp://merchant.example/cb").is_err());
	}

	#[test]
	fn rejects_urls_without_a_host() {
		assert!(validate_callback_url("file:///cb").is_err());
	}

	#[test]
	fn rejects_malformed_urls() {
		assert!(validate_callback_url("not a url").is_err());
	}
}
