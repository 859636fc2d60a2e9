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

//! Bitcoin-style Base58, with an optional double-SHA-256 checksum used by
//! the Slatepack armor.

use crate::error::{Error, ErrorKind};
use sha2::{Digest, Sha256};

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const CHECKSUM_SIZE: usize = 4;

fn double_sha256(data: &[u8]) -> [u8; 32] {
	let first = Sha256::digest(data);
	let second = Sha256::digest(&first);
	second.into()
}

/// Encode raw bytes as Base58, preserving leading zero bytes as leading `1`s.
pub fn encode(data: &[u8]) -> String {
	let leading_zeros = data.iter().take_while(|&&b| b == 0).count();

	// Big-endian base-256 to base-58 conversion via repeated division.
	let mut digits: Vec<u8> = vec![0];
	for &byte in data {
		let mut carry = byte as u32;
		for digit in digits.iter_mut() {
			let value = (*digit as u32) * 256 + carry;
			*digit = (value % 58) as u8;
			carry = value / 58;
		}
		while carry > 0 {
			digits.push((carry % 58) as u8);
			carry /= 58;
		}
	}

	let mut result: Vec<u8> = std::iter::repeat(ALPHABET[0])
		.take(leading_zeros)
		.collect();
	result.extend(digits.iter().rev().map(|&d| ALPHABET[d as usize]));
	String::from_utf8(result).expect("alphabet is ASCII")
}

/// Encode with a 4-byte double-SHA-256 checksum appended before encoding.
pub fn encode_with_checksum(data: &[u8]) -> String {
	let checksum = double_sha256(data);
	let mut with_checksum = data.to_vec();
	with_checksum.extend_from_slice(&checksum[..CHECKSUM_SIZE]);
	encode(&with_checksum)
}

/// Decode a Base58 string back to bytes.
pub fn decode(data: &str) -> Result<Vec<u8>, Error> {
	let bytes = data.as_bytes();
	let leading_ones = bytes.iter().take_while(|&&b| b == ALPHABET[0]).count();

	let mut result: Vec<u8> = vec![0];
	for &b in bytes {
		let digit = ALPHABET
			.iter()
			.position(|&c| c == b)
			.ok_or(ErrorKind::InvalidAlphabet)? as u32;
		let mut carry = digit;
		for byte in result.iter_mut() {
			let value = (*byte as u32) * 58 + carry;
			*byte = (value & 0xFF) as u8;
			carry = value >> 8;
		}
		while carry > 0 {
			result.push((carry & 0xFF) as u8);
			carry >>= 8;
		}
	}

	let significant: Vec<u8> = result.into_iter().rev().collect();
	let first_nonzero = significant.iter().position(|&b| b != 0);
	let mut out = vec![0u8; leading_ones];
	match first_nonzero {
		Some(idx) => out.extend_from_slice(&significant[idx..]),
		None => {}
	}
	Ok(out)
}

/// Decode and verify the trailing 4-byte double-SHA-256 checksum.
pub fn decode_with_checksum(data: &str) -> Result<Vec<u8>, Error> {
	let decoded = decode(data)?;
	if decoded.len() < CHECKSUM_SIZE {
		return Err(ErrorKind::InvalidEncoding("too short for a checksum".into()).into());
	}
	let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_SIZE);
	let expected = double_sha256(payload);
	if checksum != &expected[..CHECKSUM_SIZE] {
		return Err(ErrorKind::InvalidEncoding("checksum mismatch".into()).into());
	}
	Ok(payload.to_vec())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trip_with_leading_zeros() {
		let data = vec![0, 0, 1, 2, 3, 255];
		assert_eq!(decode(&encode(&data)).unwrap(), data);
	}

	#[test]
	fn checksum_round_trip() {
		let data = b"mwc-pay invoice".to_vec();
		let encoded = encode_with_checksum(&data);
		assert_eq!(decode_with_checksum(&encoded).unwrap(), data);
	}

	#[test]
	fn checksum_rejects_tamper() {
		let data = b"mwc-pay invoice".to_vec();
		let mut encoded = encode_with_checksum(&data);
		encoded.push('1');
		assert!(decode_with_checksum(&encoded).is_err());
	}

	proptest::proptest! {
		#[test]
		fn arbitrary_bytes_round_trip(data in proptest::collection::vec(proptest::prelude::any::<u8>(), 0..256)) {
			proptest::prop_assert_eq!(decode(&encode(&data)).unwrap(), data);
		}
	}
}
