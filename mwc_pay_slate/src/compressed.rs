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

//! Compressed-integer and compressed-public-key fields shared by every
//! slate block.

use crate::error::{Error, ErrorKind};
use mwc_pay_crypto::{ed25519, secp};
use mwc_pay_util::{BitReader, BitWriter};

const MAX_HUNDREDS_POWER: u32 = 7;

fn bit_length(value: u64) -> u32 {
	64 - value.leading_zeros()
}

/// Write `value` (must be nonzero) with the "hundreds" prefix: `h` is
/// maximized until `h = 7` or the value stops being divisible by 100.
pub fn write_with_hundreds(writer: &mut BitWriter, value: u64) -> Result<(), Error> {
	if value == 0 {
		return Err(ErrorKind::ParseError("compressed value must be nonzero".into()).into());
	}
	let mut raw = value;
	let mut h = 0u32;
	while h < MAX_HUNDREDS_POWER && raw % 100 == 0 {
		raw /= 100;
		h += 1;
	}
	writer.set_bits(h as u64, 3);
	let digit_count = bit_length(raw);
	writer.set_bits((digit_count - 1) as u64, 6);
	writer.set_bits(raw, digit_count);
	Ok(())
}

/// Read a "hundreds"-prefixed compressed value.
pub fn read_with_hundreds(reader: &mut BitReader) -> Result<u64, Error> {
	let h = reader.get_bits(3)?;
	let digit_count = reader.get_bits(6)? as u32 + 1;
	let raw = reader.get_bits(digit_count)?;
	scale_by_hundreds(raw, h as u32)
}

/// Write `value` (must be nonzero) without a "hundreds" prefix.
pub fn write_without_hundreds(writer: &mut BitWriter, value: u64) -> Result<(), Error> {
	if value == 0 {
		return Err(ErrorKind::ParseError("compressed value must be nonzero".into()).into());
	}
	let digit_count = bit_length(value);
	writer.set_bits((digit_count - 1) as u64, 6);
	writer.set_bits(value, digit_count);
	Ok(())
}

/// Read a plain (no "hundreds" prefix) compressed value.
pub fn read_without_hundreds(reader: &mut BitReader) -> Result<u64, Error> {
	let digit_count = reader.get_bits(6)? as u32 + 1;
	reader.get_bits(digit_count).map_err(Into::into)
}

fn scale_by_hundreds(raw: u64, h: u32) -> Result<u64, Error> {
	let mut value = raw;
	for _ in 0..h {
		value = value
			.checked_mul(100)
			.ok_or_else(|| ErrorKind::ParseError("compressed value overflowed".into()))?;
	}
	Ok(value)
}

/// A compressed public key: either a secp256k1 point or an Ed25519 point,
/// distinguished by a leading 1-bit flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompressedPublicKey {
	Secp256k1(Vec<u8>),
	Ed25519([u8; 32]),
}

impl CompressedPublicKey {
	pub fn write(&self, writer: &mut BitWriter) -> Result<(), Error> {
		match self {
			CompressedPublicKey::Secp256k1(bytes) => {
				writer.set_bits(1, 1);
				if bytes.len() > 0x7F {
					return Err(ErrorKind::ParseError("secp256k1 public key is too long".into()).into());
				}
				writer.set_bits(bytes.len() as u64, 7);
				writer.set_bytes(bytes);
			}
			CompressedPublicKey::Ed25519(bytes) => {
				writer.set_bits(0, 1);
				writer.set_bytes(bytes);
			}
		}
		Ok(())
	}

	pub fn read(reader: &mut BitReader) -> Result<CompressedPublicKey, Error> {
		let is_secp256k1 = reader.get_bits(1)? != 0;
		if is_secp256k1 {
			let length = reader.get_bits(7)? as usize;
			let bytes = reader.get_bytes(length)?;
			secp::parse_public_key(&bytes)?;
			Ok(CompressedPublicKey::Secp256k1(bytes))
		} else {
			let bytes = reader.get_bytes(32)?;
			if !ed25519::is_valid_public_key(&bytes) {
				return Err(ErrorKind::ParseError("invalid Ed25519 public key".into()).into());
			}
			let mut array = [0u8; 32];
			array.copy_from_slice(&bytes);
			Ok(CompressedPublicKey::Ed25519(array))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn with_hundreds_round_trips_exact_multiple() {
		let mut w = BitWriter::new();
		write_with_hundreds(&mut w, 500_000).unwrap();
		let bytes = w.into_bytes();
		let mut r = BitReader::new(&bytes);
		assert_eq!(read_with_hundreds(&mut r).unwrap(), 500_000);
	}

	#[test]
	fn with_hundreds_round_trips_non_multiple() {
		let mut w = BitWriter::new();
		write_with_hundreds(&mut w, 123_457).unwrap();
		let bytes = w.into_bytes();
		let mut r = BitReader::new(&bytes);
		assert_eq!(read_with_hundreds(&mut r).unwrap(), 123_457);
	}

	#[test]
	fn without_hundreds_round_trips() {
		let mut w = BitWriter::new();
		write_without_hundreds(&mut w, 7).unwrap();
		let bytes = w.into_bytes();
		let mut r = BitReader::new(&bytes);
		assert_eq!(read_without_hundreds(&mut r).unwrap(), 7);
	}

	proptest::proptest! {
		#[test]
		fn with_hundreds_arbitrary_round_trip(value in 1u64..=1_000_000_000_000u64) {
			let mut w = BitWriter::new();
			write_with_hundreds(&mut w, value).unwrap();
			let bytes = w.into_bytes();
			let mut r = BitReader::new(&bytes);
			proptest::prop_assert_eq!(read_with_hundreds(&mut r).unwrap(), value);
		}
	}
}
