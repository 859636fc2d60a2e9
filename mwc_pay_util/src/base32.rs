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

//! Lowercase RFC 4648 Base32, 5 bits per character, `=`-padded.

use crate::error::{Error, ErrorKind};

const ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";
const PADDING: u8 = b'=';

/// Encode `data` as lowercase, padded Base32.
pub fn encode(data: &[u8]) -> String {
	let mut result = Vec::with_capacity((data.len() + 4) / 5 * 8);
	for chunk in data.chunks(5) {
		let mut buffer = [0u8; 5];
		buffer[..chunk.len()].copy_from_slice(chunk);

		let characters = match chunk.len() {
			1 => 2,
			2 => 4,
			3 => 5,
			4 => 7,
			5 => 8,
			_ => unreachable!(),
		};

		let value: u64 = buffer.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);
		for i in 0..8 {
			if i < characters {
				let shift = 35 - 5 * i;
				let index = ((value >> shift) & 0x1F) as usize;
				result.push(ALPHABET[index]);
			} else {
				result.push(PADDING);
			}
		}
	}
	String::from_utf8(result).expect("alphabet is ASCII")
}

/// Decode a lowercase, padded Base32 string.
pub fn decode(data: &str) -> Result<Vec<u8>, Error> {
	let bytes = data.as_bytes();
	if bytes.is_empty() || bytes.len() % 8 != 0 {
		return Err(ErrorKind::InvalidEncoding("length must be a multiple of 8".into()).into());
	}

	let mut result = Vec::with_capacity(bytes.len() / 8 * 5);
	for chunk in bytes.chunks(8) {
		let padding = chunk.iter().rev().take_while(|&&b| b == PADDING).count();
		let characters = 8 - padding;
		let output_len = match characters {
			2 => 1,
			4 => 2,
			5 => 3,
			7 => 4,
			8 => 5,
			_ => {
				return Err(
					ErrorKind::InvalidEncoding("invalid padding length".into()).into(),
				)
			}
		};

		let mut value: u64 = 0;
		for (i, &b) in chunk.iter().enumerate() {
			if i < characters {
				let index = ALPHABET
					.iter()
					.position(|&c| c == b)
					.ok_or(ErrorKind::InvalidAlphabet)?;
				value |= (index as u64) << (35 - 5 * i);
			} else if b != PADDING {
				return Err(ErrorKind::InvalidAlphabet.into());
			}
		}

		let full = value.to_be_bytes();
		result.extend_from_slice(&full[3..3 + output_len]);
	}

	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trip_various_lengths() {
		for len in 0..20usize {
			let data: Vec<u8> = (0..len as u8).collect();
			let encoded = encode(&data);
			assert_eq!(decode(&encoded).unwrap(), data);
		}
	}

	#[test]
	fn rejects_bad_alphabet() {
		assert!(decode("AAAAAAA=").is_err());
	}

	#[test]
	fn rejects_bad_length() {
		assert!(decode("abc").is_err());
	}

	proptest::proptest! {
		#[test]
		fn arbitrary_bytes_round_trip(data in proptest::collection::vec(proptest::prelude::any::<u8>(), 0..256)) {
			proptest::prop_assert_eq!(decode(&encode(&data)).unwrap(), data);
		}
	}
}
