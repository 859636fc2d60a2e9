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

//! X25519 ECDH, keyed from Ed25519 material via the standard clamp and the
//! Edwards -> Montgomery birational map.

use crate::error::{Error, ErrorKind};
use crate::hash::sha512;
use curve25519_dalek::edwards::CompressedEdwardsY;
use x25519_dalek::{PublicKey, StaticSecret};

pub const PRIVATE_KEY_SIZE: usize = 32;
pub const PUBLIC_KEY_SIZE: usize = 32;

/// `x25519_priv = clamp(SHA512(ed25519_priv)[:32])`. `StaticSecret::from`
/// applies the RFC 7748 clamp.
pub fn private_key_from_ed25519(ed25519_private_key: &[u8; 32]) -> StaticSecret {
	let digest = sha512(ed25519_private_key);
	let mut low = [0u8; 32];
	low.copy_from_slice(&digest[..32]);
	StaticSecret::from(low)
}

/// Map an Ed25519 public key's Edwards `y` coordinate to its birational
/// Montgomery `u` coordinate: `u = (1+y)/(1-y) mod (2^255 - 19)`.
pub fn public_key_from_ed25519(ed25519_public_key: &[u8; 32]) -> Result<PublicKey, Error> {
	let compressed = CompressedEdwardsY(*ed25519_public_key);
	let point = compressed
		.decompress()
		.ok_or(ErrorKind::InvalidPublicKey)?;
	Ok(PublicKey::from(point.to_montgomery().to_bytes()))
}

/// `X25519(priv, pub)`, rejecting an all-zero shared key (a low-order
/// public key).
pub fn shared_key(private_key: &StaticSecret, public_key: &PublicKey) -> Result<[u8; 32], Error> {
	let shared = private_key.diffie_hellman(public_key);
	let bytes = *shared.as_bytes();
	if bytes == [0u8; 32] {
		return Err(ErrorKind::DegenerateSharedKey.into());
	}
	Ok(bytes)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn derived_keys_agree_on_a_shared_secret() {
		let alice_ed25519_priv = [11u8; 32];
		let bob_ed25519_priv = [22u8; 32];

		let alice_x_priv = private_key_from_ed25519(&alice_ed25519_priv);
		let bob_x_priv = private_key_from_ed25519(&bob_ed25519_priv);

		let alice_ed25519_signing = crate::ed25519::signing_key_from_bytes(&alice_ed25519_priv);
		let bob_ed25519_signing = crate::ed25519::signing_key_from_bytes(&bob_ed25519_priv);

		let alice_x_pub =
			public_key_from_ed25519(&crate::ed25519::public_key(&alice_ed25519_signing)).unwrap();
		let bob_x_pub =
			public_key_from_ed25519(&crate::ed25519::public_key(&bob_ed25519_signing)).unwrap();

		let alice_shared = shared_key(&alice_x_priv, &bob_x_pub).unwrap();
		let bob_shared = shared_key(&bob_x_priv, &alice_x_pub).unwrap();
		assert_eq!(alice_shared, bob_shared);
	}
}
