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

//! The wallet: seed lifecycle, per-invoice key derivation, and the
//! per-invoice payment-proof (Tor and MQS) address chains.

use crate::error::{Error, ErrorKind};
use crate::seed::{self, EncryptedSeed};
use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use mwc_pay_crypto::bip32::{identifier_derivation_path, ExtendedKey};
use mwc_pay_crypto::secp256k1zkp::key::PublicKey as Secp256k1PublicKey;
use mwc_pay_crypto::secp256k1zkp::pedersen::Commitment;
use mwc_pay_crypto::{bulletproof, ed25519, hash, secp, switch, x25519};
use rand::RngCore;
use zeroize::Zeroizing;

/// Fixed committed value the payment-proof address master key is switched
/// against, per §3 — unrelated to any invoice amount.
const PAYMENT_PROOF_COMMITTED_VALUE: u64 = 713;
const PAYMENT_PROOF_HMAC_KEY: &[u8] = b"Grinbox_seed";

pub struct Wallet {
	root: ExtendedKey,
}

impl Wallet {
	/// Mint a fresh wallet seed, returning both the open wallet and its
	/// password-encrypted envelope ready for persistence.
	pub fn create(password: &[u8]) -> Result<(Wallet, EncryptedSeed), Error> {
		let seed = seed::generate();
		let wallet = Wallet::from_seed(&seed)?;
		let encrypted = seed::encrypt(&seed, password)?;
		Ok((wallet, encrypted))
	}

	/// Decrypt a stored seed envelope and rebuild the wallet from it.
	pub fn open(encrypted: &EncryptedSeed, password: &[u8]) -> Result<Wallet, Error> {
		let seed = seed::decrypt(encrypted, password)?;
		Wallet::from_seed(&seed)
	}

	fn from_seed(seed: &Zeroizing<[u8; seed::SEED_SIZE]>) -> Result<Wallet, Error> {
		let root = ExtendedKey::from_seed(&**seed)?;
		let wallet = Wallet { root };
		// Second derivation check (§4.4): a probe switch commitment must
		// also derive cleanly, not just the root scalar itself.
		wallet
			.raw_blind(&identifier_derivation_path(0))
			.map_err(|_| ErrorKind::InvalidSeed)?;
		Ok(wallet)
	}

	fn raw_blind(&self, path: &[u32; 4]) -> Result<mwc_pay_crypto::secp256k1zkp::key::SecretKey, Error> {
		let derived = self.root.derive_path(path)?;
		Ok(derived.scalar)
	}

	/// The wallet's root extended key's public key, serialized. Diagnostic
	/// only — never used in any derivation.
	pub fn root_public_key(&self) -> Result<[u8; 33], Error> {
		let pubkey = secp::public_key(&self.root.scalar)?;
		Ok(secp::serialize_public_key(&pubkey))
	}

	/// The switch-commitment blinding factor this wallet would use for
	/// `identifier_path`'s output of `value`.
	pub fn blinding_factor(
		&self,
		identifier_path: u64,
		value: u64,
	) -> Result<mwc_pay_crypto::secp256k1zkp::key::SecretKey, Error> {
		let path = identifier_derivation_path(identifier_path);
		let raw_blind = self.raw_blind(&path)?;
		switch::blinding_factor(&raw_blind, value)
	}

	/// This wallet's Pedersen commitment for `identifier_path`'s output.
	pub fn commitment(&self, identifier_path: u64, value: u64) -> Result<Commitment, Error> {
		let path = identifier_derivation_path(identifier_path);
		let raw_blind = self.raw_blind(&path)?;
		switch::commitment(&raw_blind, value)
	}

	/// This wallet's Bulletproof rangeproof for `identifier_path`'s output.
	pub fn bulletproof(&self, identifier_path: u64, value: u64) -> Result<[u8; bulletproof::PROOF_SIZE], Error> {
		let path = identifier_derivation_path(identifier_path);
		let raw_blind = self.raw_blind(&path)?;
		let switched_blind = switch::blinding_factor(&raw_blind, value)?;
		let commit = secp::commit(value, &switched_blind)?;

		let root_pubkey = secp::public_key(&self.root.scalar)?;
		let root_pubkey_bytes = secp::serialize_public_key(&root_pubkey);
		let rewind_nonce = bulletproof::rewind_nonce(&commit.0, &root_pubkey_bytes)?;
		let private_nonce = bulletproof::private_nonce(&commit.0, &self.root.scalar.0)?;
		let message = bulletproof::encode_message(&path);

		Ok(bulletproof::create(value, &switched_blind, &rewind_nonce, &private_nonce, message))
	}

	/// The payment-proof address chain's master key, shared by every
	/// invoice: the root scalar switched against the fixed value 713,
	/// re-keyed into a fresh HMAC chain under `"Grinbox_seed"`.
	fn payment_proof_master_key(&self) -> Result<ExtendedKey, Error> {
		let addr_blind = switch::blinding_factor(&self.root.scalar, PAYMENT_PROOF_COMMITTED_VALUE)?;
		let digest = hash::hmac_sha512(PAYMENT_PROOF_HMAC_KEY, &addr_blind.0);
		ExtendedKey::from_hmac_digest(&digest)
	}

	/// The per-invoice payment-proof extended key: the master key derived
	/// along `[i_hi, i_lo]`.
	fn payment_proof_extended_key(&self, identifier_path: u64) -> Result<ExtendedKey, Error> {
		let master = self.payment_proof_master_key()?;
		let path = identifier_derivation_path(identifier_path);
		master.derive_path(&path[..2])
	}

	fn payment_proof_ed25519_signing_key(&self, identifier_path: u64) -> Result<ed25519_dalek::SigningKey, Error> {
		let addr_ext = self.payment_proof_extended_key(identifier_path)?;
		Ok(ed25519::signing_key_from_bytes(&addr_ext.scalar.0))
	}

	/// `hex(kernel_commitment) ‖ sender_addr ‖ decimal(value)`, the message
	/// both the Tor and MQS payment-proof signatures cover.
	fn payment_proof_message(kernel_commitment: &[u8], sender_addr: &str, value: u64) -> Vec<u8> {
		let mut message = hex::encode(kernel_commitment).into_bytes();
		message.extend_from_slice(sender_addr.as_bytes());
		message.extend_from_slice(value.to_string().as_bytes());
		message
	}

	/// The Tor v3 `.onion` address for invoice `identifier_path`.
	pub fn tor_payment_proof_address(&self, identifier_path: u64) -> Result<String, Error> {
		let pubkey = self.tor_payment_proof_address_public_key(identifier_path)?;
		Ok(crate::tor::encode(&pubkey))
	}

	/// The raw Ed25519 public key behind [`Wallet::tor_payment_proof_address`].
	pub fn tor_payment_proof_address_public_key(&self, identifier_path: u64) -> Result<[u8; 32], Error> {
		let signing_key = self.payment_proof_ed25519_signing_key(identifier_path)?;
		Ok(ed25519::public_key(&signing_key))
	}

	/// Sign `hex(kernel_commitment) ‖ sender_addr ‖ decimal(value)` with this
	/// invoice's Tor payment-proof key.
	pub fn tor_payment_proof_signature(
		&self,
		identifier_path: u64,
		kernel_commitment: &[u8],
		sender_addr: &str,
		value: u64,
	) -> Result<[u8; 64], Error> {
		let signing_key = self.payment_proof_ed25519_signing_key(identifier_path)?;
		let message = Self::payment_proof_message(kernel_commitment, sender_addr, value);
		Ok(ed25519::sign(&signing_key, &message))
	}

	/// This invoice's MQS address, reinterpreting the same payment-proof
	/// scalar as a secp256k1 key rather than an Ed25519 one.
	pub fn mqs_payment_proof_address(&self, identifier_path: u64, floonet: bool) -> Result<String, Error> {
		let pubkey = self.mqs_payment_proof_address_public_key(identifier_path)?;
		Ok(crate::mqs::encode(&pubkey, floonet))
	}

	/// The raw secp256k1 public key behind [`Wallet::mqs_payment_proof_address`].
	pub fn mqs_payment_proof_address_public_key(&self, identifier_path: u64) -> Result<[u8; 33], Error> {
		let pubkey = self.mqs_payment_proof_public_key(identifier_path)?;
		Ok(secp::serialize_public_key(&pubkey))
	}

	fn mqs_payment_proof_public_key(&self, identifier_path: u64) -> Result<Secp256k1PublicKey, Error> {
		let addr_ext = self.payment_proof_extended_key(identifier_path)?;
		secp::public_key(&addr_ext.scalar)
	}

	/// A secp256k1 ECDSA-DER signature (over SHA-256 of the same
	/// concatenation as the Tor variant) with this invoice's MQS
	/// payment-proof key.
	pub fn mqs_payment_proof_signature(
		&self,
		identifier_path: u64,
		kernel_commitment: &[u8],
		sender_addr: &str,
		value: u64,
	) -> Result<Vec<u8>, Error> {
		let addr_ext = self.payment_proof_extended_key(identifier_path)?;
		let message = Self::payment_proof_message(kernel_commitment, sender_addr, value);
		secp::ecdsa_sign_der(&addr_ext.scalar, &message).map_err(Into::into)
	}

	/// Encrypt `plaintext` to `recipient_public_key` for invoice
	/// `identifier_path`, returning `(ciphertext_with_tag, nonce)`. The
	/// shared key is an X25519 ECDH over both sides' Ed25519 payment-proof
	/// keys via the birational map; the trailing 4 bytes under the AEAD are
	/// a CRC32 binding `version`, both public keys and the plaintext
	/// together, per §4.D.
	pub fn encrypt_address_message(
		&self,
		plaintext: &[u8],
		recipient_public_key: &[u8; 32],
		identifier_path: u64,
		version: u8,
	) -> Result<(Vec<u8>, [u8; 12]), Error> {
		let signing_key = self.payment_proof_ed25519_signing_key(identifier_path)?;
		let my_pub = ed25519::public_key(&signing_key);
		let ed25519_private = signing_key.to_bytes();
		let x_priv = x25519::private_key_from_ed25519(&ed25519_private);
		let x_pub = x25519::public_key_from_ed25519(recipient_public_key)?;
		let shared = x25519::shared_key(&x_priv, &x_pub)?;

		let checksum = checksum_input(version, &my_pub, recipient_public_key, plaintext);
		let mut framed = Vec::with_capacity(plaintext.len() + 4);
		framed.extend_from_slice(plaintext);
		framed.extend_from_slice(&checksum.to_be_bytes());

		let cipher = ChaCha20Poly1305::new(Key::from_slice(&shared));
		let mut nonce_bytes = [0u8; 12];
		rand::thread_rng().fill_bytes(&mut nonce_bytes);
		let nonce = Nonce::from_slice(&nonce_bytes);
		let ciphertext = cipher
			.encrypt(nonce, framed.as_slice())
			.map_err(|_| ErrorKind::CorruptData("address message encryption failed".into()))?;

		Ok((ciphertext, nonce_bytes))
	}

	/// Decrypt a message produced by [`Wallet::encrypt_address_message`] from
	/// `sender_public_key`, verifying its CRC32 checksum.
	pub fn decrypt_address_message(
		&self,
		ciphertext: &[u8],
		nonce: &[u8; 12],
		sender_public_key: &[u8; 32],
		identifier_path: u64,
		version: u8,
	) -> Result<Vec<u8>, Error> {
		let signing_key = self.payment_proof_ed25519_signing_key(identifier_path)?;
		let my_pub = ed25519::public_key(&signing_key);
		let ed25519_private = signing_key.to_bytes();
		let x_priv = x25519::private_key_from_ed25519(&ed25519_private);
		let x_pub = x25519::public_key_from_ed25519(sender_public_key)?;
		let shared = x25519::shared_key(&x_priv, &x_pub)?;

		let cipher = ChaCha20Poly1305::new(Key::from_slice(&shared));
		let nonce = Nonce::from_slice(nonce);
		let framed = cipher
			.decrypt(nonce, ciphertext)
			.map_err(|_| ErrorKind::CorruptData("address message decryption failed".into()))?;

		if framed.len() < 4 {
			return Err(ErrorKind::CorruptData("address message is missing its checksum".into()).into());
		}
		let (plaintext, checksum_bytes) = framed.split_at(framed.len() - 4);
		let expected = u32::from_be_bytes(checksum_bytes.try_into().expect("checked length"));
		if checksum_input(version, sender_public_key, &my_pub, plaintext) != expected {
			return Err(ErrorKind::CorruptData("address message checksum mismatch".into()).into());
		}
		Ok(plaintext.to_vec())
	}
}

fn checksum_input(version: u8, first_pub: &[u8; 32], second_pub: &[u8; 32], plaintext: &[u8]) -> u32 {
	let mut input = Vec::with_capacity(1 + 32 + 32 + plaintext.len());
	input.push(version);
	input.extend_from_slice(first_pub);
	input.extend_from_slice(second_pub);
	input.extend_from_slice(plaintext);
	crc32fast::hash(&input)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn create_and_open_round_trip() {
		let (wallet, encrypted) = Wallet::create(b"hunter2").unwrap();
		let reopened = Wallet::open(&encrypted, b"hunter2").unwrap();
		assert_eq!(
			wallet.commitment(1, 1_000).unwrap().0.to_vec(),
			reopened.commitment(1, 1_000).unwrap().0.to_vec()
		);
	}

	#[test]
	fn different_identifier_paths_yield_different_commitments() {
		let (wallet, _) = Wallet::create(b"hunter2").unwrap();
		let a = wallet.commitment(1, 1_000).unwrap();
		let b = wallet.commitment(2, 1_000).unwrap();
		assert_ne!(a.0.to_vec(), b.0.to_vec());
	}

	#[test]
	fn bulletproof_has_the_expected_size() {
		let (wallet, _) = Wallet::create(b"hunter2").unwrap();
		let proof = wallet.bulletproof(7, 50_000).unwrap();
		assert_eq!(proof.len(), bulletproof::PROOF_SIZE);
	}

	#[test]
	fn different_invoices_have_different_payment_proof_addresses() {
		let (wallet, _) = Wallet::create(b"hunter2").unwrap();
		let a = wallet.tor_payment_proof_address_public_key(1).unwrap();
		let b = wallet.tor_payment_proof_address_public_key(2).unwrap();
		assert_ne!(a, b);
	}

	#[test]
	fn tor_payment_proof_signature_verifies() {
		let (wallet, _) = Wallet::create(b"hunter2").unwrap();
		let pubkey = wallet.tor_payment_proof_address_public_key(1).unwrap();
		let sig = wallet
			.tor_payment_proof_signature(1, &[0xAB; 33], "tor-sender-addr", 42_000)
			.unwrap();
		let message = Wallet::payment_proof_message(&[0xAB; 33], "tor-sender-addr", 42_000);
		assert!(ed25519::verify(&pubkey, &message, &sig).is_ok());
	}

	#[test]
	fn tor_address_round_trips_through_its_own_encoding() {
		let (wallet, _) = Wallet::create(b"hunter2").unwrap();
		let address = wallet.tor_payment_proof_address(3).unwrap();
		let pubkey = wallet.tor_payment_proof_address_public_key(3).unwrap();
		assert_eq!(crate::tor::decode(&address).unwrap(), pubkey);
	}

	#[test]
	fn mqs_address_round_trips_through_its_own_encoding() {
		let (wallet, _) = Wallet::create(b"hunter2").unwrap();
		let address = wallet.mqs_payment_proof_address(4, false).unwrap();
		let pubkey = wallet.mqs_payment_proof_address_public_key(4).unwrap();
		assert_eq!(crate::mqs::decode(&address, false).unwrap(), pubkey);
	}

	#[test]
	fn address_messages_round_trip_between_two_wallets() {
		let (alice, _) = Wallet::create(b"alice-pass").unwrap();
		let (bob, _) = Wallet::create(b"bob-pass").unwrap();

		let alice_pub = alice.tor_payment_proof_address_public_key(1).unwrap();
		let bob_pub = bob.tor_payment_proof_address_public_key(1).unwrap();

		let (ciphertext, nonce) = alice
			.encrypt_address_message(b"pay to invoice 9", &bob_pub, 1, 0)
			.unwrap();
		let plaintext = bob
			.decrypt_address_message(&ciphertext, &nonce, &alice_pub, 1, 0)
			.unwrap();
		assert_eq!(plaintext, b"pay to invoice 9");
	}

	#[test]
	fn address_message_rejects_wrong_version_on_decrypt() {
		let (alice, _) = Wallet::create(b"alice-pass").unwrap();
		let (bob, _) = Wallet::create(b"bob-pass").unwrap();

		let alice_pub = alice.tor_payment_proof_address_public_key(1).unwrap();
		let bob_pub = bob.tor_payment_proof_address_public_key(1).unwrap();

		let (ciphertext, nonce) = alice
			.encrypt_address_message(b"pay to invoice 9", &bob_pub, 1, 0)
			.unwrap();
		assert!(bob
			.decrypt_address_message(&ciphertext, &nonce, &alice_pub, 1, 1)
			.is_err());
	}

	#[test]
	fn wrong_password_is_reported_distinctly() {
		let (_, encrypted) = Wallet::create(b"hunter2").unwrap();
		let err = Wallet::open(&encrypted, b"wrong").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::IncorrectPassword);
	}
}
