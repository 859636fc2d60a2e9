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

//! Bulletproof rangeproof generation. The core never verifies rangeproofs
//! (the chain does); it only ever produces them for its own receiving
//! outputs.

use crate::error::Error;
use crate::hash::{blake2b512, blake2b_mac_32};
use crate::secp;
use secp256k1zkp::key::SecretKey;
use secp256k1zkp::pedersen::ProofMessage;

pub const MESSAGE_SIZE: usize = 20;
pub const PROOF_SIZE: usize = 675;

/// Regular (non-hardened) switch commitment type, embedded in the
/// Bulletproof message.
const SWITCH_TYPE_REGULAR: u8 = 0;

/// Encode `{switch-type=regular, path-depth=4, path}` into the 20-byte
/// Bulletproof message.
pub fn encode_message(path: &[u32; 4]) -> [u8; MESSAGE_SIZE] {
	let mut message = [0u8; MESSAGE_SIZE];
	message[0] = SWITCH_TYPE_REGULAR;
	message[1] = path.len() as u8;
	for (i, element) in path.iter().enumerate() {
		message[2 + i * 4..6 + i * 4].copy_from_slice(&element.to_be_bytes());
	}
	message
}

/// `rewind_nonce = BLAKE2BMAC(key = commitment, msg = BLAKE2B-512(root
/// public key))`.
pub fn rewind_nonce(commitment: &[u8], root_public_key: &[u8]) -> Result<SecretKey, Error> {
	let digest = blake2b_mac_32(commitment, &blake2b512(root_public_key));
	secp::scalar_from_bytes(&digest)
}

/// `private_nonce = BLAKE2BMAC(key = commitment, msg = BLAKE2B-512(root
/// scalar))`.
pub fn private_nonce(commitment: &[u8], root_scalar: &[u8]) -> Result<SecretKey, Error> {
	let digest = blake2b_mac_32(commitment, &blake2b512(root_scalar));
	secp::scalar_from_bytes(&digest)
}

/// Build the 675-byte single-value rangeproof over `[0, 2^64)`.
pub fn create(
	value: u64,
	blind: &SecretKey,
	rewind_nonce: &SecretKey,
	private_nonce: &SecretKey,
	message: [u8; MESSAGE_SIZE],
) -> [u8; PROOF_SIZE] {
	let proof = secp::context().bullet_proof(
		value,
		*blind,
		*rewind_nonce,
		*private_nonce,
		None,
		Some(ProofMessage::from_bytes(&message)),
	);
	let mut out = [0u8; PROOF_SIZE];
	let bytes = proof.proof;
	let len = proof.plen.min(PROOF_SIZE);
	out[..len].copy_from_slice(&bytes[..len]);
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_encodes_path() {
		let path = [0x0001_0203u32, 4, 0, 0];
		let message = encode_message(&path);
		assert_eq!(message[0], SWITCH_TYPE_REGULAR);
		assert_eq!(message[1], 4);
		assert_eq!(&message[2..6], &path[0].to_be_bytes());
	}

	#[test]
	fn nonces_are_deterministic_and_distinct() {
		let commitment = [7u8; 33];
		let root_pub = [1u8; 33];
		let root_scalar = [2u8; 32];
		let a = rewind_nonce(&commitment, &root_pub).unwrap();
		let b = rewind_nonce(&commitment, &root_pub).unwrap();
		assert_eq!(a.0, b.0);
		let c = private_nonce(&commitment, &root_scalar).unwrap();
		assert_ne!(a.0, c.0);
	}
}
