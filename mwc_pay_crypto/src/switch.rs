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

//! Switch commitments: the blinding-factor adjustment that binds a
//! commitment's blinding factor to its value, defending against one class
//! of quantum attacks on Pedersen commitments.

use crate::error::{Error, ErrorKind};
use crate::hash::sha256;
use crate::secp;
use secp256k1zkp::constants::GENERATOR_J_COMPRESSED;
use secp256k1zkp::key::{PublicKey, SecretKey};
use secp256k1zkp::pedersen::Commitment;

/// The secp256k1 curve order, big-endian.
const CURVE_ORDER: [u8; 32] = [
	0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
	0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Reduce a 256-bit big-endian integer mod the curve order. The input is
/// always `< 2^256 < 2n`, so a single conditional subtraction suffices.
fn reduce_mod_n(bytes: [u8; 32]) -> [u8; 32] {
	if compare_be(&bytes, &CURVE_ORDER) != std::cmp::Ordering::Less {
		subtract_be(&bytes, &CURVE_ORDER)
	} else {
		bytes
	}
}

fn compare_be(a: &[u8; 32], b: &[u8; 32]) -> std::cmp::Ordering {
	a.cmp(b)
}

fn subtract_be(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
	let mut result = [0u8; 32];
	let mut borrow: i16 = 0;
	for i in (0..32).rev() {
		let diff = a[i] as i16 - b[i] as i16 - borrow;
		if diff < 0 {
			result[i] = (diff + 256) as u8;
			borrow = 1;
		} else {
			result[i] = diff as u8;
			borrow = 0;
		}
	}
	result
}

/// `b * J`, where `J` is the fixed NUMS generator secp256k1-zkp reserves for
/// switch commitments (no known discrete log relative to `G`/`H`).
fn blind_times_j(blind: &SecretKey) -> Result<PublicKey, Error> {
	let mut j =
		PublicKey::from_slice(secp::context(), &GENERATOR_J_COMPRESSED)
			.map_err(|_| ErrorKind::InvalidPublicKey)?;
	j.mul_assign(secp::context(), blind)
		.map_err(|_| ErrorKind::InvalidScalar)?;
	Ok(j)
}

/// Compute the switch-commitment blinding factor for value `v` given the
/// output's raw (pre-switch) blinding `b`:
/// `b' = b + SHA256(commit(b*G + v*H) || (b*J)) mod n`.
pub fn blinding_factor(raw_blind: &SecretKey, value: u64) -> Result<SecretKey, Error> {
	let raw_commit = secp::commit(value, raw_blind)?;
	let b_times_j = blind_times_j(raw_blind)?;
	let serialized_j = secp::serialize_public_key(&b_times_j);

	let mut preimage = Vec::with_capacity(33 + 33);
	preimage.extend_from_slice(&raw_commit.0);
	preimage.extend_from_slice(&serialized_j);

	let digest = reduce_mod_n(sha256(&preimage));
	let adjustment = secp::scalar_from_bytes(&digest)?;
	let switched = secp::add_scalars(raw_blind, &adjustment)?;
	if !secp::is_valid_scalar(&switched.0) {
		return Err(ErrorKind::InvalidScalar.into());
	}
	Ok(switched)
}

/// The Pedersen commitment `C = b'*G + v*H` for value `v`, using the
/// switch-commitment blinding factor derived from `raw_blind`.
pub fn commitment(raw_blind: &SecretKey, value: u64) -> Result<Commitment, Error> {
	let switched = blinding_factor(raw_blind, value)?;
	secp::commit(value, &switched)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deterministic_for_fixed_inputs() {
		let blind = secp::scalar_from_bytes(&[9u8; 32]).unwrap();
		let c1 = commitment(&blind, 1_000).unwrap();
		let c2 = commitment(&blind, 1_000).unwrap();
		assert_eq!(c1.0.to_vec(), c2.0.to_vec());
	}

	#[test]
	fn changes_with_value() {
		let blind = secp::scalar_from_bytes(&[9u8; 32]).unwrap();
		let c1 = commitment(&blind, 1_000).unwrap();
		let c2 = commitment(&blind, 1_001).unwrap();
		assert_ne!(c1.0.to_vec(), c2.0.to_vec());
	}

	#[test]
	fn changes_with_any_input_byte() {
		let blind_a = secp::scalar_from_bytes(&[9u8; 32]).unwrap();
		let mut b_bytes = [9u8; 32];
		b_bytes[31] ^= 1;
		let blind_b = secp::scalar_from_bytes(&b_bytes).unwrap();
		let c1 = commitment(&blind_a, 500).unwrap();
		let c2 = commitment(&blind_b, 500).unwrap();
		assert_ne!(c1.0.to_vec(), c2.0.to_vec());
	}
}
