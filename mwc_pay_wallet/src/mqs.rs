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

//! MQS (mwcmqs) address encoding: a version-prefixed, Base58Check-encoded
//! secp256k1 public key.

use crate::error::{Error, ErrorKind};
use mwc_pay_util::base58;

const MAINNET_VERSION: [u8; 2] = [1, 69];
const FLOONET_VERSION: [u8; 2] = [1, 121];

/// Encode a secp256k1 public key as an MQS address for the given network.
pub fn encode(public_key: &[u8; 33], floonet: bool) -> String {
	let version = if floonet { FLOONET_VERSION } else { MAINNET_VERSION };
	let mut payload = Vec::with_capacity(2 + 33);
	payload.extend_from_slice(&version);
	payload.extend_from_slice(public_key);
	base58::encode_with_checksum(&payload)
}

/// Decode an MQS address back into its secp256k1 public key, validating the
/// checksum and the expected network version.
pub fn decode(address: &str, floonet: bool) -> Result<[u8; 33], Error> {
	let payload = base58::decode_with_checksum(address)
		.map_err(|_| ErrorKind::InvalidInput("malformed mqs address".into()))?;
	if payload.len() != 2 + 33 {
		return Err(ErrorKind::InvalidInput("wrong mqs address length".into()).into());
	}

	let expected = if floonet { FLOONET_VERSION } else { MAINNET_VERSION };
	if payload[..2] != expected {
		return Err(ErrorKind::InvalidInput("mqs address is for the wrong network".into()).into());
	}

	let mut public_key = [0u8; 33];
	public_key.copy_from_slice(&payload[2..]);
	Ok(public_key)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_on_mainnet() {
		let mut key = [3u8; 33];
		key[0] = 0x02;
		let address = encode(&key, false);
		assert_eq!(decode(&address, false).unwrap(), key);
	}

	#[test]
	fn floonet_address_is_rejected_on_mainnet() {
		let mut key = [3u8; 33];
		key[0] = 0x02;
		let address = encode(&key, true);
		assert!(decode(&address, false).is_err());
	}
}
