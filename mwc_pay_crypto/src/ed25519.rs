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

//! Ed25519 sign/verify and the Ed25519 -> X25519 birational map used for
//! Tor payment-proof addresses and address-message encryption.

use crate::error::{Error, ErrorKind};
use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey, SECRET_KEY_LENGTH};

pub const PRIVATE_KEY_SIZE: usize = 32;
pub const PUBLIC_KEY_SIZE: usize = 32;
pub const SIGNATURE_SIZE: usize = 64;

/// Build a signing key from a 32-byte scalar. Unlike standard Ed25519 key
/// generation, this wallet treats the derived 32 bytes directly as the
/// private scalar, never clamped-hashed again (the payment-proof key is
/// already the output of an HMAC/BIP32 chain).
pub fn signing_key_from_bytes(bytes: &[u8; PRIVATE_KEY_SIZE]) -> SigningKey {
	SigningKey::from_bytes(bytes)
}

/// The public key matching a private scalar.
pub fn public_key(signing_key: &SigningKey) -> [u8; PUBLIC_KEY_SIZE] {
	signing_key.verifying_key().to_bytes()
}

/// Is `bytes` a valid compressed Ed25519 point.
pub fn is_valid_public_key(bytes: &[u8]) -> bool {
	bytes.len() == PUBLIC_KEY_SIZE
		&& VerifyingKey::from_bytes(&{
			let mut a = [0u8; PUBLIC_KEY_SIZE];
			a.copy_from_slice(bytes);
			a
		})
		.is_ok()
}

/// Sign `data`.
pub fn sign(signing_key: &SigningKey, data: &[u8]) -> [u8; SIGNATURE_SIZE] {
	signing_key.sign(data).to_bytes()
}

/// Verify a signature over `data`.
pub fn verify(public_key: &[u8; PUBLIC_KEY_SIZE], data: &[u8], signature: &[u8; SIGNATURE_SIZE]) -> Result<(), Error> {
	let verifying_key =
		VerifyingKey::from_bytes(public_key).map_err(|_| ErrorKind::InvalidPublicKey)?;
	let sig = ed25519_dalek::Signature::from_bytes(signature);
	verifying_key
		.verify(data, &sig)
		.map_err(|_| ErrorKind::VerificationFailed.into())
}

const _: () = assert!(SECRET_KEY_LENGTH == PRIVATE_KEY_SIZE);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sign_and_verify_round_trip() {
		let signing_key = signing_key_from_bytes(&[5u8; 32]);
		let pubkey = public_key(&signing_key);
		let sig = sign(&signing_key, b"invoice data");
		assert!(verify(&pubkey, b"invoice data", &sig).is_ok());
	}

	#[test]
	fn verify_rejects_tampered_message() {
		let signing_key = signing_key_from_bytes(&[5u8; 32]);
		let pubkey = public_key(&signing_key);
		let sig = sign(&signing_key, b"invoice data");
		assert!(verify(&pubkey, b"tampered data", &sig).is_err());
	}
}
