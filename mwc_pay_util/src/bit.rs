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

//! Big-endian bit-stream reader and writer used by the slate format. Bit 0
//! of any byte is its most significant bit.

use crate::error::{Error, ErrorKind};

/// Reads a sequence of fields out of a byte slice, bit by bit, MSB first.
pub struct BitReader<'a> {
	bytes: &'a [u8],
	byte_index: usize,
	bit_index: u32,
}

impl<'a> BitReader<'a> {
	/// Create a reader over `bytes`.
	pub fn new(bytes: &'a [u8]) -> Self {
		BitReader {
			bytes,
			byte_index: 0,
			bit_index: 0,
		}
	}

	/// Read `number_of_bits` (0..=64) MSB-first bits, returning them packed
	/// into the low bits of a `u64`.
	pub fn get_bits(&mut self, number_of_bits: u32) -> Result<u64, Error> {
		if number_of_bits > 8 {
			let mut result: u64 = 0;
			let mut remaining = number_of_bits;
			while remaining > 0 {
				let used = remaining.min(8);
				result = result
					.checked_shl(used)
					.ok_or(ErrorKind::UnexpectedEnd)?;
				result |= self.get_bits(used)?;
				remaining -= used;
			}
			return Ok(result);
		}

		if number_of_bits == 0 {
			return Ok(0);
		}

		let len = self.bytes.len();
		if self.byte_index == len
			|| (self.byte_index == len - 1
				&& self.bit_index + number_of_bits > 8)
		{
			return Err(ErrorKind::UnexpectedEnd.into());
		}

		let mut result: u64 = (self.bytes[self.byte_index] as u64) << 8;
		if self.bit_index + number_of_bits > 8 {
			result |= self.bytes[self.byte_index + 1] as u64;
		}

		result &= (1u64 << (16 - self.bit_index)) - 1;
		result >>= 16 - (self.bit_index + number_of_bits);

		self.bit_index += number_of_bits;
		if self.bit_index >= 8 {
			self.byte_index += 1;
			self.bit_index %= 8;
		}

		Ok(result)
	}

	/// Read `length` whole bytes, each byte-aligned bit-by-bit.
	pub fn get_bytes(&mut self, length: usize) -> Result<Vec<u8>, Error> {
		let mut result = Vec::with_capacity(length);
		for _ in 0..length {
			result.push(self.get_bits(8)? as u8);
		}
		Ok(result)
	}

	/// True once the reader has consumed every byte and bit.
	pub fn is_exhausted(&self) -> bool {
		self.byte_index == self.bytes.len() && self.bit_index == 0
	}
}

/// Writes a sequence of fields into a byte buffer, bit by bit, MSB first.
#[derive(Default)]
pub struct BitWriter {
	bytes: Vec<u8>,
	byte_index: usize,
	bit_index: u32,
}

impl BitWriter {
	/// Create an empty writer.
	pub fn new() -> Self {
		BitWriter::default()
	}

	/// Write the low `number_of_bits` bits of `bits`, MSB first.
	pub fn set_bits(&mut self, bits: u64, number_of_bits: u32) {
		let mut remaining = number_of_bits;
		while remaining > 8 {
			let shift = 8 * (remaining / 8 - 1) + remaining % 8;
			self.set_bits(bits >> shift, 8);
			remaining -= 8;
		}

		if remaining == 0 {
			return;
		}

		if self.bit_index == 0 || self.bit_index + remaining > 8 {
			self.bytes.push(0);
		}

		if self.bit_index + remaining > 8 {
			self.bytes[self.byte_index] |= (bits >> ((self.bit_index + remaining) - 8)) as u8;
			self.bytes[self.byte_index + 1] |= (bits << (16 - (self.bit_index + remaining))) as u8;
		} else {
			self.bytes[self.byte_index] |= (bits << (8 - (self.bit_index + remaining))) as u8;
		}

		self.bit_index += remaining;
		if self.bit_index >= 8 {
			self.byte_index += 1;
			self.bit_index %= 8;
		}
	}

	/// Write each byte of `bytes` byte-aligned.
	pub fn set_bytes(&mut self, bytes: &[u8]) {
		for &b in bytes {
			self.set_bits(b as u64, 8);
		}
	}

	/// Consume the writer, returning the accumulated bytes.
	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}

	/// Borrow the accumulated bytes without consuming the writer.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn byte_aligned_round_trip() {
		let data = [0xDEu8, 0xAD, 0xBE, 0xEF, 0x01];
		let mut w = BitWriter::new();
		w.set_bytes(&data);
		assert_eq!(w.into_bytes(), data.to_vec());

		let mut r = BitReader::new(&data);
		assert_eq!(r.get_bytes(5).unwrap(), data.to_vec());
		assert!(r.is_exhausted());
	}

	#[test]
	fn unaligned_field_round_trip() {
		let mut w = BitWriter::new();
		w.set_bits(0b101, 3);
		w.set_bits(0x1234_5678_9ABC, 48);
		w.set_bits(0b11, 2);
		w.set_bits(0b001, 3);
		let bytes = w.into_bytes();

		let mut r = BitReader::new(&bytes);
		assert_eq!(r.get_bits(3).unwrap(), 0b101);
		assert_eq!(r.get_bits(48).unwrap(), 0x1234_5678_9ABC);
		assert_eq!(r.get_bits(2).unwrap(), 0b11);
		assert_eq!(r.get_bits(3).unwrap(), 0b001);
	}

	#[test]
	fn chunked_composition_matches_one_shot() {
		let value: u64 = 0x0123_4567_89AB_CDEF;
		let mut one_shot = BitWriter::new();
		one_shot.set_bits(value, 64);

		let mut chunked = BitWriter::new();
		chunked.set_bits(value >> 32, 32);
		chunked.set_bits(value & 0xFFFF_FFFF, 32);

		assert_eq!(one_shot.into_bytes(), chunked.into_bytes());
	}

	#[test]
	fn read_past_end_fails() {
		let data = [0xFFu8];
		let mut r = BitReader::new(&data);
		assert!(r.get_bits(8).is_ok());
		assert!(r.get_bits(1).is_err());
	}

	proptest::proptest! {
		#[test]
		fn arbitrary_bit_widths_round_trip(words in proptest::collection::vec((0u64..=0xFFFFu64, 1u32..=16u32), 0..64)) {
			let masked: Vec<(u64, u32)> = words
				.iter()
				.map(|&(value, width)| (value & ((1u64 << width) - 1), width))
				.collect();

			let mut w = BitWriter::new();
			for &(value, width) in &masked {
				w.set_bits(value, width);
			}
			let bytes = w.into_bytes();
			let mut r = BitReader::new(&bytes);
			for &(value, width) in &masked {
				let got = r.get_bits(width).unwrap();
				proptest::prop_assert_eq!(got, value);
			}
		}
	}
}
