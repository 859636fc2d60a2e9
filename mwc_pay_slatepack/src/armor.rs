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

//! Slatepack armor: a Base58-with-checksum payload wrapped between plain-text
//! begin/end markers, either carrying a serialized slate directly or an
//! encrypted envelope around one.

use crate::error::{Error, ErrorKind};
use mwc_pay_crypto::hash::double_sha256;
use mwc_pay_util::base58;
use mwc_pay_wallet::Wallet;

const VERSION: u8 = 0;

const PLAIN_BEGIN: &str = "BEGINSLATE_BIN. ";
const PLAIN_END: &str = ". ENDSLATE_BIN.";
const ENCRYPTED_BEGIN: &str = "BEGINSLATEPACK. ";
const ENCRYPTED_END: &str = ". ENDSLATEPACK.";

const NONCE_SIZE: usize = 12;

/// The unwrapped contents of an armored slatepack.
pub enum Envelope {
	/// A slate transmitted without payment-proof address encryption.
	Plain(Vec<u8>),
	/// A slate encrypted to a recipient's payment-proof address.
	Encrypted {
		sender_public_key: [u8; 32],
		recipient_public_key: [u8; 32],
		nonce: [u8; NONCE_SIZE],
		ciphertext: Vec<u8>,
	},
}

/// Armor `slate_bytes` without encryption.
pub fn armor_plain(slate_bytes: &[u8]) -> Result<String, Error> {
	if slate_bytes.len() > u16::MAX as usize {
		return Err(ErrorKind::LengthMismatch.into());
	}
	let mut payload = Vec::with_capacity(1 + 2 + slate_bytes.len());
	payload.push(VERSION);
	payload.extend_from_slice(&(slate_bytes.len() as u16).to_be_bytes());
	payload.extend_from_slice(slate_bytes);
	Ok(wrap(PLAIN_BEGIN, PLAIN_END, &payload))
}

/// Encrypt `slate_bytes` to `recipient_public_key` under invoice
/// `identifier_path`'s payment-proof key and armor the result.
pub fn armor_encrypted(
	wallet: &Wallet,
	identifier_path: u64,
	recipient_public_key: &[u8; 32],
	slate_bytes: &[u8],
) -> Result<String, Error> {
	let sender_public_key = wallet.tor_payment_proof_address_public_key(identifier_path)?;
	let (ciphertext, nonce) =
		wallet.encrypt_address_message(slate_bytes, recipient_public_key, identifier_path, VERSION)?;

	if ciphertext.len() > u16::MAX as usize {
		return Err(ErrorKind::LengthMismatch.into());
	}

	let mut payload = Vec::with_capacity(1 + 32 + 32 + NONCE_SIZE + 2 + ciphertext.len());
	payload.push(VERSION);
	payload.extend_from_slice(&sender_public_key);
	payload.extend_from_slice(recipient_public_key);
	payload.extend_from_slice(&nonce);
	payload.extend_from_slice(&(ciphertext.len() as u16).to_be_bytes());
	payload.extend_from_slice(&ciphertext);
	Ok(wrap(ENCRYPTED_BEGIN, ENCRYPTED_END, &payload))
}

/// Parse an armored slatepack, recognizing either envelope by its markers.
pub fn dearmor(input: &str) -> Result<Envelope, Error> {
	let trimmed = input.trim();
	if let Some(body) = strip_markers(trimmed, PLAIN_BEGIN, PLAIN_END) {
		let payload = decode_checked(body)?;
		return parse_plain(&payload);
	}
	if let Some(body) = strip_markers(trimmed, ENCRYPTED_BEGIN, ENCRYPTED_END) {
		let payload = decode_checked(body)?;
		return parse_encrypted(&payload);
	}
	Err(ErrorKind::MalformedArmor.into())
}

/// Unwrap an [`Envelope`] into the serialized slate bytes, decrypting for
/// `identifier_path` if it was encrypted.
pub fn open(envelope: Envelope, wallet: &Wallet, identifier_path: u64) -> Result<Vec<u8>, Error> {
	match envelope {
		Envelope::Plain(bytes) => Ok(bytes),
		Envelope::Encrypted {
			sender_public_key,
			nonce,
			ciphertext,
			..
		} => wallet
			.decrypt_address_message(&ciphertext, &nonce, &sender_public_key, identifier_path, VERSION)
			.map_err(Into::into),
	}
}

fn wrap(begin: &str, end: &str, payload: &[u8]) -> String {
	let checksum = double_sha256(payload);
	let mut framed = Vec::with_capacity(4 + payload.len());
	framed.extend_from_slice(&checksum[..4]);
	framed.extend_from_slice(payload);

	let mut out = String::with_capacity(begin.len() + end.len() + framed.len() * 2);
	out.push_str(begin);
	out.push_str(&base58::encode(&framed));
	out.push_str(end);
	out
}

fn strip_markers<'a>(input: &'a str, begin: &str, end: &str) -> Option<&'a str> {
	let body = input.strip_prefix(begin)?;
	body.strip_suffix(end)
}

fn decode_checked(body: &str) -> Result<Vec<u8>, Error> {
	let cleaned: String = body.chars().filter(|c| !c.is_whitespace()).collect();
	let framed = base58::decode(&cleaned)?;
	if framed.len() < 4 {
		return Err(ErrorKind::MalformedArmor.into());
	}
	let (checksum, payload) = framed.split_at(4);
	let expected = double_sha256(payload);
	if checksum != &expected[..4] {
		return Err(ErrorKind::ChecksumMismatch.into());
	}
	Ok(payload.to_vec())
}

fn parse_plain(payload: &[u8]) -> Result<Envelope, Error> {
	if payload.len() < 3 {
		return Err(ErrorKind::MalformedArmor.into());
	}
	let version = payload[0];
	if version != VERSION {
		return Err(ErrorKind::UnsupportedVersion.into());
	}
	let length = u16::from_be_bytes([payload[1], payload[2]]) as usize;
	let slate_bytes = &payload[3..];
	if slate_bytes.len() != length {
		return Err(ErrorKind::LengthMismatch.into());
	}
	Ok(Envelope::Plain(slate_bytes.to_vec()))
}

fn parse_encrypted(payload: &[u8]) -> Result<Envelope, Error> {
	let header_len = 1 + 32 + 32 + NONCE_SIZE + 2;
	if payload.len() < header_len {
		return Err(ErrorKind::MalformedArmor.into());
	}
	let version = payload[0];
	if version != VERSION {
		return Err(ErrorKind::UnsupportedVersion.into());
	}

	let mut sender_public_key = [0u8; 32];
	sender_public_key.copy_from_slice(&payload[1..33]);
	let mut recipient_public_key = [0u8; 32];
	recipient_public_key.copy_from_slice(&payload[33..65]);
	let mut nonce = [0u8; NONCE_SIZE];
	nonce.copy_from_slice(&payload[65..65 + NONCE_SIZE]);

	let length_offset = 65 + NONCE_SIZE;
	let length = u16::from_be_bytes([payload[length_offset], payload[length_offset + 1]]) as usize;
	let ciphertext = &payload[length_offset + 2..];
	if ciphertext.len() != length {
		return Err(ErrorKind::LengthMismatch.into());
	}

	Ok(Envelope::Encrypted {
		sender_public_key,
		recipient_public_key,
		nonce,
		ciphertext: ciphertext.to_vec(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_armor_round_trips() {
		let slate_bytes = b"not actually a slate, just some bytes".to_vec();
		let armored = armor_plain(&slate_bytes).unwrap();
		assert!(armored.starts_with(PLAIN_BEGIN));
		assert!(armored.ends_with(PLAIN_END));

		match dearmor(&armored).unwrap() {
			Envelope::Plain(bytes) => assert_eq!(bytes, slate_bytes),
			Envelope::Encrypted { .. } => panic!("expected a plain envelope"),
		}
	}

	#[test]
	fn plain_armor_tolerates_embedded_whitespace() {
		let slate_bytes = b"invoice #1, pay the bearer".to_vec();
		let armored = armor_plain(&slate_bytes).unwrap();
		let body = strip_markers(&armored, PLAIN_BEGIN, PLAIN_END).unwrap();
		let mut spaced = String::new();
		for (i, c) in body.chars().enumerate() {
			spaced.push(c);
			if i % 8 == 7 {
				spaced.push('\n');
			}
		}
		let reassembled = format!("{}{}{}", PLAIN_BEGIN, spaced, PLAIN_END);

		match dearmor(&reassembled).unwrap() {
			Envelope::Plain(bytes) => assert_eq!(bytes, slate_bytes),
			Envelope::Encrypted { .. } => panic!("expected a plain envelope"),
		}
	}

	#[test]
	fn plain_armor_rejects_a_tampered_checksum() {
		let armored = armor_plain(b"hello").unwrap();
		let mut tampered = armored.clone();
		tampered.insert(PLAIN_BEGIN.len(), '1');
		assert!(dearmor(&tampered).is_err());
	}

	#[test]
	fn encrypted_armor_round_trips_and_decrypts() {
		let (alice, _) = Wallet::create(b"alice-pass").unwrap();
		let (bob, _) = Wallet::create(b"bob-pass").unwrap();
		let bob_pub = bob.tor_payment_proof_address_public_key(1).unwrap();

		let slate_bytes = b"a serialized slate would go here".to_vec();
		let armored = armor_encrypted(&alice, 1, &bob_pub, &slate_bytes).unwrap();
		assert!(armored.starts_with(ENCRYPTED_BEGIN));
		assert!(armored.ends_with(ENCRYPTED_END));

		let envelope = dearmor(&armored).unwrap();
		let opened = open(envelope, &bob, 1).unwrap();
		assert_eq!(opened, slate_bytes);
	}

	#[test]
	fn malformed_input_is_rejected() {
		assert!(dearmor("not a slatepack at all").is_err());
	}
}
