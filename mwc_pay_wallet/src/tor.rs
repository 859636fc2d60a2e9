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

//! Tor v3 onion address encoding for Ed25519 payment-proof keys.

use crate::error::{Error, ErrorKind};
use mwc_pay_util::base32;
use sha3::{Digest, Sha3_256};

const VERSION: u8 = 3;
const CHECKSUM_CONSTANT: &[u8] = b".onion checksum";

/// Encode an Ed25519 public key as a `<56 chars>.onion` address.
pub fn encode(public_key: &[u8; 32]) -> String {
	let mut checksum_input = Vec::with_capacity(CHECKSUM_CONSTANT.len() + 32 + 1);
	checksum_input.extend_from_slice(CHECKSUM_CONSTANT);
	checksum_input.extend_from_slice(public_key);
	checksum_input.push(VERSION);
	let checksum = Sha3_256::digest(&checksum_input);

	let mut address_bytes = Vec::with_capacity(32 + 2 + 1);
	address_bytes.extend_from_slice(public_key);
	address_bytes.extend_from_slice(&checksum[..2]);
	address_bytes.push(VERSION);

	format!("{}.onion", base32::encode(&address_bytes).trim_end_matches('=').to_lowercase())
}

/// Recover the Ed25519 public key from a `.onion` address, validating its
/// checksum and version.
pub fn decode(address: &str) -> Result<[u8; 32], Error> {
	let stripped = address.strip_suffix(".onion").unwrap_or(address);
	let padded = pad_for_base32(stripped);
	let decoded = base32::decode(&padded)
		.map_err(|_| ErrorKind::InvalidInput("malformed onion address".into()))?;
	if decoded.len() != 35 {
		return Err(ErrorKind::InvalidInput("wrong onion address length".into()).into());
	}

	let (public_key, rest) = decoded.split_at(32);
	let (checksum, version) = rest.split_at(2);
	if version != [VERSION] {
		return Err(ErrorKind::InvalidInput("unsupported onion address version".into()).into());
	}

	let mut checksum_input = Vec::with_capacity(CHECKSUM_CONSTANT.len() + 32 + 1);
	checksum_input.extend_from_slice(CHECKSUM_CONSTANT);
	checksum_input.extend_from_slice(public_key);
	checksum_input.push(VERSION);
	let expected = Sha3_256::digest(&checksum_input);
	if checksum != &expected[..2] {
		return Err(ErrorKind::InvalidInput("onion address checksum mismatch".into()).into());
	}

	let mut out = [0u8; 32];
	out.copy_from_slice(public_key);
	Ok(out)
}

fn pad_for_base32(s: &str) -> String {
	let mut upper = s.to_uppercase();
	while upper.len() % 8 != 0 {
		upper.push('=');
	}
	upper.to_lowercase()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trip() {
		let pubkey = [42u8; 32];
		let address = encode(&pubkey);
		assert!(address.ends_with(".onion"));
		assert_eq!(decode(&address).unwrap(), pubkey);
	}

	#[test]
	fn rejects_tampered_address() {
		let pubkey = [42u8; 32];
		let mut address = encode(&pubkey);
		address.replace_range(0..1, "z");
		assert!(decode(&address).is_err());
	}
}
