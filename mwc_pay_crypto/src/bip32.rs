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

//! BIP32-style extended key and child derivation over secp256k1. Unlike
//! standard BIP32, callers here never set the hardened bit: the wallet
//! claims a disjoint, non-hardened subtree (see §3's identifier path).

use crate::error::{Error, ErrorKind};
use crate::hash::hmac_sha512;
use crate::secp;
use secp256k1zkp::key::SecretKey;
use zeroize::{Zeroize, Zeroizing};

const HARDENED_BIT: u32 = 0x8000_0000;

/// A BIP32-style extended private key: a scalar plus a chain code. Zeroized
/// on drop.
pub struct ExtendedKey {
	pub scalar: SecretKey,
	pub chain_code: Zeroizing<[u8; 32]>,
}

impl Drop for ExtendedKey {
	fn drop(&mut self) {
		// `SecretKey` from secp256k1zkp does not itself zeroize; scrub the
		// scalar's backing bytes best-effort before the rest of the struct
		// is dropped (the chain code zeroizes itself via `Zeroizing`).
		let mut copy = self.scalar.0;
		copy.zeroize();
	}
}

impl ExtendedKey {
	/// Build the root extended key: `HMAC-SHA-512(key = "IamVoldemort", msg
	/// = seed)`. The left 32 bytes must be a valid scalar.
	pub fn from_seed(seed: &[u8]) -> Result<ExtendedKey, Error> {
		let digest = hmac_sha512(b"IamVoldemort", seed);
		Self::from_hmac_digest(&digest)
	}

	/// Build an extended key directly from a 64-byte HMAC-SHA-512 digest
	/// (scalar ‖ chain code), the same way [`ExtendedKey::from_seed`] does
	/// but for a master key keyed on something other than the wallet seed
	/// (the payment-proof key chain keys on `"Grinbox_seed"` instead).
	pub fn from_hmac_digest(digest: &[u8; 64]) -> Result<ExtendedKey, Error> {
		let scalar = secp::scalar_from_bytes(&digest[..32])?;
		let mut chain_code = [0u8; 32];
		chain_code.copy_from_slice(&digest[32..]);
		Ok(ExtendedKey {
			scalar,
			chain_code: Zeroizing::new(chain_code),
		})
	}

	/// Derive one non-hardened child: `HMAC-SHA-512(key = chain_code, msg =
	/// serialize_compressed(k*G) || be32(p))`.
	pub fn derive_child(&self, path_element: u32) -> Result<ExtendedKey, Error> {
		if path_element & HARDENED_BIT != 0 {
			return self.derive_hardened_child(path_element);
		}

		let pubkey = secp::public_key(&self.scalar)?;
		let serialized = secp::serialize_public_key(&pubkey);

		let mut msg = Vec::with_capacity(33 + 4);
		msg.extend_from_slice(&serialized);
		msg.extend_from_slice(&path_element.to_be_bytes());

		let digest = hmac_sha512(&*self.chain_code, &msg);
		self.combine_digest(&digest)
	}

	fn derive_hardened_child(&self, path_element: u32) -> Result<ExtendedKey, Error> {
		let mut msg = Vec::with_capacity(1 + 32 + 4);
		msg.push(0x00);
		msg.extend_from_slice(&self.scalar.0);
		msg.extend_from_slice(&path_element.to_be_bytes());

		let digest = hmac_sha512(&*self.chain_code, &msg);
		self.combine_digest(&digest)
	}

	fn combine_digest(&self, digest: &[u8; 64]) -> Result<ExtendedKey, Error> {
		let left = secp::scalar_from_bytes(&digest[..32])?;
		let combined = secp::add_scalars(&self.scalar, &left)?;
		if !secp::is_valid_scalar(&combined.0) {
			return Err(ErrorKind::DerivationFailed.into());
		}
		let mut chain_code = [0u8; 32];
		chain_code.copy_from_slice(&digest[32..]);
		Ok(ExtendedKey {
			scalar: combined,
			chain_code: Zeroizing::new(chain_code),
		})
	}

	/// Derive along a full path of non-hardened elements in order, failing
	/// hard on the first invalid intermediate result (never falls back to
	/// `p+1`).
	pub fn derive_path(&self, path: &[u32]) -> Result<ExtendedKey, Error> {
		let mut current = self.derive_child(path[0])?;
		for &element in &path[1..] {
			current = current.derive_child(element)?;
		}
		Ok(current)
	}
}

/// Build the non-standard 4-level identifier path `[i_hi, i_lo, 0, 0]` from
/// a 64-bit identifier path, with the hardened bit left unset, claiming a
/// subtree disjoint from any standard wallet.
pub fn identifier_derivation_path(identifier_path: u64) -> [u32; 4] {
	let i_hi = (identifier_path >> 32) as u32;
	let i_lo = identifier_path as u32;
	[i_hi, i_lo, 0, 0]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_seed_still_derives_a_root_key() {
		// The root HMAC key derivation itself never fails on an all-zero
		// seed; invalidity (if any) only shows up once a child's switch
		// commitment is derived (see mwc_pay_wallet tests).
		let root = ExtendedKey::from_seed(&[0u8; 32]).unwrap();
		assert_eq!(root.chain_code.len(), 32);
	}

	#[test]
	fn derivation_is_deterministic() {
		let root = ExtendedKey::from_seed(&[7u8; 32]).unwrap();
		let path = identifier_derivation_path(42);
		let a = root.derive_path(&path).unwrap();
		let b = root.derive_path(&path).unwrap();
		assert_eq!(a.scalar.0, b.scalar.0);
		assert_eq!(*a.chain_code, *b.chain_code);
	}

	#[test]
	fn different_paths_diverge() {
		let root = ExtendedKey::from_seed(&[7u8; 32]).unwrap();
		let a = root.derive_path(&identifier_derivation_path(1)).unwrap();
		let b = root.derive_path(&identifier_derivation_path(2)).unwrap();
		assert_ne!(a.scalar.0, b.scalar.0);
	}
}
