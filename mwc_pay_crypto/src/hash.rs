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

//! Hash primitives: SHA-256/512, HMAC-SHA-512 (BIP32-style derivation) and
//! keyed BLAKE2b (Bulletproof nonce derivation).

use blake2::digest::consts::{U32, U64};
use blake2::digest::Mac;
use blake2::{Blake2bMac, Blake2b};
use hmac::Hmac;
use sha2::{Digest, Sha256, Sha512};

type Blake2b512 = Blake2b<U64>;
type Blake2bMac256 = Blake2bMac<U32>;

/// SHA-256(`data`).
pub fn sha256(data: &[u8]) -> [u8; 32] {
	Sha256::digest(data).into()
}

/// SHA-256(SHA-256(`data`)).
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
	sha256(&sha256(data))
}

/// SHA-512(`data`).
pub fn sha512(data: &[u8]) -> [u8; 64] {
	Sha512::digest(data).into()
}

/// BLAKE2b-512(`data`).
pub fn blake2b512(data: &[u8]) -> [u8; 64] {
	let mut hasher = Blake2b512::new();
	hasher.update(data);
	hasher.finalize().into()
}

/// HMAC-SHA-512(`key`, `msg`), used both for root extended-key derivation
/// (`"IamVoldemort"`) and BIP32-style child derivation.
pub fn hmac_sha512(key: &[u8], msg: &[u8]) -> [u8; 64] {
	let mut mac = Hmac::<Sha512>::new_from_slice(key).expect("HMAC accepts any key length");
	mac.update(msg);
	mac.finalize().into_bytes().into()
}

/// Keyed BLAKE2b with a 32-byte output, used to derive the Bulletproof
/// rewind and private nonces: `BLAKE2BMAC(key, msg)`.
pub fn blake2b_mac_32(key: &[u8], msg: &[u8]) -> [u8; 32] {
	let mut mac = Blake2bMac256::new_from_slice(key).expect("BLAKE2b accepts keys up to 64 bytes");
	mac.update(msg);
	mac.finalize_fixed().into()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hmac_sha512_is_deterministic() {
		let a = hmac_sha512(b"key", b"msg");
		let b = hmac_sha512(b"key", b"msg");
		assert_eq!(a, b);
	}

	#[test]
	fn blake2b_mac_changes_with_key() {
		let a = blake2b_mac_32(b"key-a", b"msg");
		let b = blake2b_mac_32(b"key-b", b"msg");
		assert_ne!(a, b);
	}
}
