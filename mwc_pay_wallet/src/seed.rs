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

//! Seed envelope encryption: AES-256-GCM with a PBKDF2-SHA512 key derived
//! from the wallet password peppered by a random 32-byte value. All four
//! auxiliary values (salt, IV, pepper, and the derived key itself only
//! transiently) are non-secret except the key and the seed.

use crate::error::{Error, ErrorKind};
use aes_gcm::aead::generic_array::typenum::U32;
use aes_gcm::aead::{generic_array::GenericArray, Aead, KeyInit};
use aes_gcm::{aes::Aes256, AesGcm};
use rand::RngCore;
use zeroize::Zeroizing;

pub const SEED_SIZE: usize = 32;
pub const SALT_SIZE: usize = 32;
pub const IV_SIZE: usize = 32;
pub const PEPPER_SIZE: usize = 32;
const PBKDF2_ITERATIONS: u32 = 210_000;

/// AES-256-GCM with a 32-byte (rather than the usual 12-byte) IV.
type Aes256Gcm32 = AesGcm<Aes256, U32>;

/// The persisted, encrypted form of the wallet seed.
pub struct EncryptedSeed {
	pub salt: [u8; SALT_SIZE],
	pub iv: [u8; IV_SIZE],
	pub pepper: [u8; PEPPER_SIZE],
	pub ciphertext: Vec<u8>,
}

fn derive_key(password: &[u8], pepper: &[u8; PEPPER_SIZE], salt: &[u8; SALT_SIZE]) -> Zeroizing<[u8; 32]> {
	let mut peppered = Zeroizing::new(Vec::with_capacity(password.len() + pepper.len()));
	peppered.extend_from_slice(password);
	peppered.extend_from_slice(pepper);

	let mut key = Zeroizing::new([0u8; 32]);
	pbkdf2::pbkdf2_hmac::<sha2::Sha512>(&peppered, salt, PBKDF2_ITERATIONS, &mut *key);
	key
}

/// Encrypt a freshly minted seed under `password`.
pub fn encrypt(seed: &Zeroizing<[u8; SEED_SIZE]>, password: &[u8]) -> Result<EncryptedSeed, Error> {
	let mut rng = rand::thread_rng();
	let mut salt = [0u8; SALT_SIZE];
	let mut iv = [0u8; IV_SIZE];
	let mut pepper = [0u8; PEPPER_SIZE];
	rng.fill_bytes(&mut salt);
	rng.fill_bytes(&mut iv);
	rng.fill_bytes(&mut pepper);

	let key = derive_key(password, &pepper, &salt);
	let cipher = Aes256Gcm32::new(GenericArray::from_slice(&*key));
	let nonce = GenericArray::from_slice(&iv);
	let ciphertext = cipher
		.encrypt(nonce, seed.as_slice())
		.map_err(|_| ErrorKind::CorruptData("seed encryption failed".into()))?;

	Ok(EncryptedSeed {
		salt,
		iv,
		pepper,
		ciphertext,
	})
}

/// Decrypt a stored seed. An AEAD tag mismatch (wrong password) is
/// distinguished from any other failure, per §7.
pub fn decrypt(encrypted: &EncryptedSeed, password: &[u8]) -> Result<Zeroizing<[u8; SEED_SIZE]>, Error> {
	let key = derive_key(password, &encrypted.pepper, &encrypted.salt);
	let cipher = Aes256Gcm32::new(GenericArray::from_slice(&*key));
	let nonce = GenericArray::from_slice(&encrypted.iv);
	let plaintext = cipher
		.decrypt(nonce, encrypted.ciphertext.as_slice())
		.map_err(|_| ErrorKind::IncorrectPassword)?;

	if plaintext.len() != SEED_SIZE {
		return Err(ErrorKind::CorruptData("decrypted seed has the wrong length".into()).into());
	}
	let mut seed = Zeroizing::new([0u8; SEED_SIZE]);
	seed.copy_from_slice(&plaintext);
	Ok(seed)
}

/// Mint a fresh 32-byte seed from the OS CSPRNG.
pub fn generate() -> Zeroizing<[u8; SEED_SIZE]> {
	let mut seed = Zeroizing::new([0u8; SEED_SIZE]);
	rand::thread_rng().fill_bytes(&mut *seed);
	seed
}

impl EncryptedSeed {
	/// The on-disk layout: `salt ‖ iv ‖ pepper ‖ ciphertext`, all fixed-width
	/// except the trailing ciphertext (which carries its own AEAD tag).
	pub fn to_bytes(&self) -> Vec<u8> {
		let mut out = Vec::with_capacity(SALT_SIZE + IV_SIZE + PEPPER_SIZE + self.ciphertext.len());
		out.extend_from_slice(&self.salt);
		out.extend_from_slice(&self.iv);
		out.extend_from_slice(&self.pepper);
		out.extend_from_slice(&self.ciphertext);
		out
	}

	pub fn from_bytes(bytes: &[u8]) -> Result<EncryptedSeed, Error> {
		let header_len = SALT_SIZE + IV_SIZE + PEPPER_SIZE;
		if bytes.len() <= header_len {
			return Err(ErrorKind::CorruptData("wallet seed file is too short".into()).into());
		}

		let mut salt = [0u8; SALT_SIZE];
		let mut iv = [0u8; IV_SIZE];
		let mut pepper = [0u8; PEPPER_SIZE];
		salt.copy_from_slice(&bytes[..SALT_SIZE]);
		iv.copy_from_slice(&bytes[SALT_SIZE..SALT_SIZE + IV_SIZE]);
		pepper.copy_from_slice(&bytes[SALT_SIZE + IV_SIZE..header_len]);

		Ok(EncryptedSeed {
			salt,
			iv,
			pepper,
			ciphertext: bytes[header_len..].to_vec(),
		})
	}
}

#[cfg(test)]
mod layout_tests {
	use super::*;

	#[test]
	fn encrypted_seed_round_trips_through_bytes() {
		let seed = generate();
		let encrypted = encrypt(&seed, b"hunter2").unwrap();
		let bytes = encrypted.to_bytes();
		let restored = EncryptedSeed::from_bytes(&bytes).unwrap();
		let decrypted = decrypt(&restored, b"hunter2").unwrap();
		assert_eq!(*decrypted, *seed);
	}

	#[test]
	fn truncated_bytes_are_rejected() {
		assert!(EncryptedSeed::from_bytes(&[0u8; 10]).is_err());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_with_correct_password() {
		let seed = generate();
		let encrypted = encrypt(&seed, b"hunter2").unwrap();
		let decrypted = decrypt(&encrypted, b"hunter2").unwrap();
		assert_eq!(*decrypted, *seed);
	}

	#[test]
	fn wrong_password_is_reported_as_incorrect_password() {
		let seed = generate();
		let encrypted = encrypt(&seed, b"hunter2").unwrap();
		let err = decrypt(&encrypted, b"wrong").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::IncorrectPassword);
	}
}
