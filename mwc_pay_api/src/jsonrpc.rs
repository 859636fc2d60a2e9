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

//! The JSON-RPC 2.0 envelope the foreign API speaks, with the standard
//! error codes fixed by the protocol.

use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

#[derive(Deserialize)]
pub struct Request {
	pub jsonrpc: String,
	pub id: Value,
	pub method: String,
	#[serde(default)]
	pub params: Vec<Value>,
}

#[derive(Serialize)]
pub struct RpcError {
	pub code: i64,
	pub message: String,
}

#[derive(Serialize)]
pub struct Response {
	pub jsonrpc: &'static str,
	pub id: Value,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub result: Option<Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<RpcError>,
}

impl Response {
	pub fn success(id: Value, result: Value) -> Response {
		Response {
			jsonrpc: "2.0",
			id,
			result: Some(result),
			error: None,
		}
	}

	pub fn failure(id: Value, code: i64, message: impl Into<String>) -> Response {
		Response {
			jsonrpc: "2.0",
			id,
			result: None,
			error: Some(RpcError {
				code,
				message: message.into(),
			}),
		}
	}
}

/// Validates the envelope shape §4.J requires, independent of the method.
pub fn validate_envelope(request: &Request) -> Result<(), (i64, String)> {
	if request.jsonrpc != "2.0" {
		return Err((INVALID_REQUEST, "jsonrpc must be \"2.0\"".to_string()));
	}
	if !request.id.is_u64() {
		return Err((INVALID_REQUEST, "id must be an unsigned integer".to_string()));
	}
	Ok(())
}
