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

//! The JSON-RPC 2.0 foreign API a sender's wallet speaks to pay an
//! invoice: `/<url>/v2/foreign`.

use crate::jsonrpc::{self, Request, Response};
use crate::state::AppState;
use gotham::handler::{HandlerFuture, IntoHandlerError};
use gotham::helpers::http::response::create_response;
use gotham::hyper::header::{HeaderMap, ACCEPT_ENCODING, CONTENT_ENCODING, CONTENT_TYPE};
use gotham::hyper::{body, Body, HeaderValue, StatusCode};
use gotham::state::{FromState, State};
use gotham_derive::{StateData, StaticResponseExtender};
use mwc_pay_slatepack::Envelope;
use serde_derive::Deserialize;
use serde_json::{json, Value};
use std::pin::Pin;

#[derive(Deserialize, StateData, StaticResponseExtender)]
pub struct UrlExtractor {
	pub url: String,
}

pub fn handle(mut state: State) -> Pin<Box<HandlerFuture>> {
	Box::pin(async move {
		let headers = HeaderMap::borrow_from(&state);
		if !content_type_is_json(headers) {
			let body = error_body(Value::Null, jsonrpc::INVALID_REQUEST, "Content-Type must be application/json");
			let response = create_response(&state, StatusCode::OK, mime::APPLICATION_JSON, body.to_string());
			return Ok((state, response));
		}
		let gzip_response = accepts_gzip(headers);

		let bytes = match body::to_bytes(Body::take_from(&mut state)).await {
			Ok(bytes) => bytes,
			Err(err) => return Err((state, err.into_handler_error())),
		};

		let url = UrlExtractor::borrow_from(&state).url.clone();
		let app_state = AppState::borrow_from(&state).clone();

		let body = dispatch(&app_state, &url, &bytes).to_string();

		let response = if gzip_response {
			let compressed = mwc_pay_util::gzip::compress(body.as_bytes());
			let mut response = create_response(&state, StatusCode::OK, mime::APPLICATION_JSON, compressed);
			response.headers_mut().insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));
			response
		} else {
			create_response(&state, StatusCode::OK, mime::APPLICATION_JSON, body)
		};
		Ok((state, response))
	})
}

/// `Content-Type: application/json`, optionally with `; charset=utf8` (§4.J).
fn content_type_is_json(headers: &HeaderMap) -> bool {
	let Some(value) = headers.get(CONTENT_TYPE) else {
		return false;
	};
	let Ok(value) = value.to_str() else {
		return false;
	};
	value.split(';').next().unwrap_or("").trim().eq_ignore_ascii_case("application/json")
}

fn accepts_gzip(headers: &HeaderMap) -> bool {
	headers
		.get(ACCEPT_ENCODING)
		.and_then(|value| value.to_str().ok())
		.is_some_and(|value| value.split(',').any(|encoding| encoding.trim().eq_ignore_ascii_case("gzip")))
}

fn dispatch(app_state: &AppState, url: &str, body: &[u8]) -> Value {
	let request: Request = match serde_json::from_slice(body) {
		Ok(request) => request,
		Err(err) => return error_body(Value::Null, jsonrpc::PARSE_ERROR, err.to_string()),
	};

	if let Err((code, message)) = jsonrpc::validate_envelope(&request) {
		return error_body(request.id, code, message);
	}

	let payment = match app_state.store.get_receiving_payment_for_url(url) {
		Ok(Some(payment)) => payment,
		Ok(None) => return error_body(request.id, jsonrpc::INVALID_PARAMS, "no payable invoice at this url"),
		Err(err) => return error_body(request.id, jsonrpc::INTERNAL_ERROR, err.to_string()),
	};

	let result = match request.method.as_str() {
		"check_version" => Ok(json!({
			"foreign_api_version": 2,
			"supported_slate_versions": ["SP"],
		})),
		"get_proof_address" => app_state
			.wallet
			.tor_payment_proof_address(payment.identifier_path)
			.map(|address| json!(address))
			.map_err(|err| (jsonrpc::INTERNAL_ERROR, err.to_string())),
		"receive_tx" => receive_tx(app_state, &payment, &request.params).map_err(|(code, message)| (code, message)),
		_ => Err((jsonrpc::METHOD_NOT_FOUND, format!("unknown method \"{}\"", request.method))),
	};

	match result {
		Ok(result) => response_body(Response::success(request.id, result)),
		Err((code, message)) => error_body(request.id, code, message),
	}
}

fn receive_tx(
	app_state: &AppState,
	payment: &mwc_pay_store::ReceivingPayment,
	params: &[Value],
) -> Result<Value, (i64, String)> {
	let slatepack_text = params
		.first()
		.and_then(Value::as_str)
		.ok_or_else(|| (jsonrpc::INVALID_PARAMS, "missing slatepack argument".to_string()))?;

	let envelope = mwc_pay_slatepack::dearmor(slatepack_text).map_err(|err| (jsonrpc::INVALID_PARAMS, err.to_string()))?;
	let sender_key = match &envelope {
		Envelope::Encrypted { sender_public_key, .. } => Some(*sender_public_key),
		Envelope::Plain(_) => None,
	};
	let request_bytes = mwc_pay_slatepack::open(envelope, &app_state.wallet, payment.identifier_path)
		.map_err(|err| (jsonrpc::INVALID_PARAMS, err.to_string()))?;

	let received = mwc_pay_slate::receive::receive(
		&request_bytes,
		&app_state.wallet,
		payment.identifier_path,
		payment.price,
		app_state.floonet,
	)
	.map_err(|err| {
		let price_mismatch = matches!(err.kind(), mwc_pay_slate::ErrorKind::AmountMismatch);
		if price_mismatch {
			let price = payment.price.unwrap_or_default();
			(jsonrpc::INVALID_PARAMS, format!("The amount must be exactly {}", price))
		} else {
			(jsonrpc::INVALID_PARAMS, err.to_string())
		}
	})?;

	// The callback fires before the receive is committed: a failure here
	// must abort the exchange rather than leave a received row a retry
	// can't reach (§4.I).
	if let Some(url) = &payment.received_callback {
		let mut preview = app_state.store.get_payment_by_id(payment.id).map_err(|err| (jsonrpc::INTERNAL_ERROR, err.to_string()))?;
		preview.price = Some(received.amount);
		preview.sender_payment_proof_address = Some(received.sender_payment_proof_address.clone());
		preview.kernel_commitment = Some(received.kernel_commitment.to_vec());
		preview.recipient_partial_signature = Some(received.recipient_partial_signature.to_vec());
		if let Err(err) = deliver_received_callback(url, &preview) {
			return Err((jsonrpc::INTERNAL_ERROR, err));
		}
	}

	app_state
		.store
		.set_payment_received(
			payment.id,
			received.amount,
			&received.sender_payment_proof_address,
			&received.kernel_commitment,
			&received.sender_public_blind_excess,
			&received.recipient_partial_signature,
			&received.public_nonce_sum,
			&received.kernel_data,
		)
		.map_err(|err| (jsonrpc::INTERNAL_ERROR, err.to_string()))?;

	let response_armor = match sender_key {
		Some(sender_key) => mwc_pay_slatepack::armor_encrypted(&app_state.wallet, payment.identifier_path, &sender_key, &received.response_bytes),
		None => mwc_pay_slatepack::armor_plain(&received.response_bytes),
	}
	.map_err(|err| (jsonrpc::INTERNAL_ERROR, err.to_string()))?;

	Ok(json!(response_armor))
}

/// The `received` callback is delivered synchronously, before the receive is
/// committed to the store — a failure here aborts the exchange (§4.I).
fn deliver_received_callback(url: &str, payment: &mwc_pay_store::Payment) -> Result<(), String> {
	let substituted = mwc_pay_callbacks::substitute(url, payment);

	let client = reqwest::blocking::Client::new();
	let response = client.get(&substituted).send().map_err(|err| err.to_string())?;
	if !response.status().is_success() {
		return Err(format!("received callback returned status {}", response.status()));
	}
	Ok(())
}

fn response_body(response: Response) -> Value {
	serde_json::to_value(response).expect("a jsonrpc::Response always serializes")
}

fn error_body(id: Value, code: i64, message: impl Into<String>) -> Value {
	response_body(Response::failure(id, code, message))
}
