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

//! secp256k1 scalar/point operations, Pedersen commitments and the
//! two-party single-signer aggregate signature, all on top of
//! `secp256k1zkp` (the same fork grin_util::secp wraps).

use crate::error::{Error, ErrorKind};
use lazy_static::lazy_static;
use secp256k1zkp::aggsig;
use secp256k1zkp::key::{PublicKey, SecretKey};
use secp256k1zkp::pedersen::Commitment;
use secp256k1zkp::{ContextFlag, Message, Secp256k1, Signature};
use zeroize::Zeroizing;

pub const SECRET_KEY_SIZE: usize = 32;
pub const PUBLIC_KEY_SIZE: usize = 33;
pub const COMMITMENT_SIZE: usize = 33;
pub const SINGLE_SIGNER_SIGNATURE_SIZE: usize = 64;

lazy_static! {
	/// Process-lifetime singleton curve context. secp256k1zkp contexts are
	/// expensive to build (they randomize internal tables) so, like grin's
	/// `grin_util::secp::static_secp_instance`, we build exactly one.
	static ref SECP: Secp256k1 = Secp256k1::with_caps(ContextFlag::Commit);
}

/// Borrow the process-wide curve context.
pub fn context() -> &'static Secp256k1 {
	&SECP
}

/// A scalar is valid iff it is non-zero and less than the curve order;
/// `SecretKey::from_slice` already enforces exactly that.
pub fn is_valid_scalar(bytes: &[u8]) -> bool {
	bytes.len() == SECRET_KEY_SIZE && SecretKey::from_slice(&SECP, bytes).is_ok()
}

/// Parse 32 bytes as a secret scalar, rejecting zero and out-of-range values.
pub fn scalar_from_bytes(bytes: &[u8]) -> Result<SecretKey, Error> {
	SecretKey::from_slice(&SECP, bytes).map_err(|_| ErrorKind::InvalidScalar.into())
}

/// Add two scalars mod the group order.
pub fn add_scalars(a: &SecretKey, b: &SecretKey) -> Result<SecretKey, Error> {
	let mut result = *a;
	result
		.add_assign(&SECP, b)
		.map_err(|_| ErrorKind::InvalidScalar)?;
	Ok(result)
}

/// `a - b mod n`, computed as `a + (-b)`.
pub fn sub_scalars(a: &SecretKey, b: &SecretKey) -> Result<SecretKey, Error> {
	let mut neg_b = *b;
	neg_b
		.neg_assign(&SECP)
		.map_err(|_| ErrorKind::InvalidScalar)?;
	add_scalars(a, &neg_b)
}

/// Serialized compressed public key for a secret scalar.
pub fn public_key(secret: &SecretKey) -> Result<PublicKey, Error> {
	PublicKey::from_secret_key(&SECP, secret).map_err(|_| ErrorKind::InvalidScalar.into())
}

/// Serialize a public key to its 33-byte compressed form.
pub fn serialize_public_key(pubkey: &PublicKey) -> [u8; PUBLIC_KEY_SIZE] {
	let mut out = [0u8; PUBLIC_KEY_SIZE];
	out.copy_from_slice(&pubkey.serialize_vec(&SECP, true)[..]);
	out
}

/// Parse a 33-byte compressed public key.
pub fn parse_public_key(bytes: &[u8]) -> Result<PublicKey, Error> {
	PublicKey::from_slice(&SECP, bytes).map_err(|_| ErrorKind::InvalidPublicKey.into())
}

/// Combine (sum) a list of public keys.
pub fn combine_public_keys(keys: &[PublicKey]) -> Result<PublicKey, Error> {
	let refs: Vec<&PublicKey> = keys.iter().collect();
	PublicKey::from_combination(&SECP, refs).map_err(|_| ErrorKind::InvalidPublicKey.into())
}

/// Pedersen commitment `blind*G + value*H`.
pub fn commit(value: u64, blind: &SecretKey) -> Result<Commitment, Error> {
	SECP.commit(value, *blind)
		.map_err(|_| ErrorKind::InvalidScalar.into())
}

/// Reinterpret a compressed public key as a Pedersen commitment (same
/// 33-byte serialization), used to turn a summed public-blind-excess into
/// an "excess" commitment for payment-proof signing.
pub fn public_key_to_commitment(pubkey: &PublicKey) -> Result<Commitment, Error> {
	SECP.commit_to_pubkey(pubkey)
		.map_err(|_| ErrorKind::InvalidPublicKey.into())
}

/// Create a fresh private nonce for a single-signer aggregate signature.
pub fn create_private_nonce() -> Result<SecretKey, Error> {
	aggsig::export_secnonce_single(&SECP).map_err(|_| ErrorKind::EntropyExhausted.into())
}

/// Compute this participant's partial signature share.
pub fn sign_partial(
	secret: &SecretKey,
	private_nonce: &SecretKey,
	public_nonce_sum: &PublicKey,
	public_key_sum: &PublicKey,
	message: &[u8; 32],
) -> Result<[u8; SINGLE_SIGNER_SIGNATURE_SIZE], Error> {
	let msg = Message::from_slice(message).map_err(|_| ErrorKind::SigningFailed)?;
	let sig = aggsig::sign_single(
		&SECP,
		&msg,
		secret,
		Some(private_nonce),
		None,
		Some(public_nonce_sum),
		Some(public_key_sum),
		Some(public_nonce_sum),
	)
	.map_err(|_| ErrorKind::SigningFailed)?;
	let mut out = [0u8; SINGLE_SIGNER_SIGNATURE_SIZE];
	out.copy_from_slice(&sig.serialize_compact(&SECP));
	Ok(out)
}

/// Verify one participant's partial signature under a forced combined
/// nonce, the way the recipient verifies the sender's share before signing.
pub fn verify_partial(
	partial: &[u8; SINGLE_SIGNER_SIGNATURE_SIZE],
	public_key: &PublicKey,
	public_nonce_sum: &PublicKey,
	public_key_sum: &PublicKey,
	message: &[u8; 32],
) -> Result<bool, Error> {
	let sig = Signature::from_compact(&SECP, partial).map_err(|_| ErrorKind::VerificationFailed)?;
	let msg = Message::from_slice(message).map_err(|_| ErrorKind::VerificationFailed)?;
	Ok(aggsig::verify_single(
		&SECP,
		&sig,
		&msg,
		Some(public_nonce_sum),
		public_key,
		Some(public_key_sum),
		false,
	))
}

/// Recover the counterparty's partial signature from the complete signature
/// and this side's own partial. Because the combined nonce's sign is chosen
/// only when the complete signature is finalized, two candidates come back;
/// the caller verifies each against the expected public key.
pub fn subtract_partial(
	complete: &[u8; SINGLE_SIGNER_SIGNATURE_SIZE],
	partial: &[u8; SINGLE_SIGNER_SIGNATURE_SIZE],
) -> Result<[[u8; SINGLE_SIGNER_SIGNATURE_SIZE]; 2], Error> {
	let complete_s = scalar_from_bytes(&complete[32..64])?;
	let partial_s = scalar_from_bytes(&partial[32..64])?;
	let diff = sub_scalars(&complete_s, &partial_s)?;
	let mut diff_negated = diff;
	diff_negated
		.neg_assign(&SECP)
		.map_err(|_| ErrorKind::InvalidScalar)?;

	let r = &complete[..32];
	let mut candidate1 = [0u8; SINGLE_SIGNER_SIGNATURE_SIZE];
	candidate1[..32].copy_from_slice(r);
	candidate1[32..].copy_from_slice(&diff.0);

	let mut candidate2 = [0u8; SINGLE_SIGNER_SIGNATURE_SIZE];
	candidate2[..32].copy_from_slice(r);
	candidate2[32..].copy_from_slice(&diff_negated.0);

	Ok([candidate1, candidate2])
}

/// Verify a standalone (non-aggregate) single-signer Schnorr signature over
/// `message`, as attached to a slate participant's plaintext message. Unlike
/// [`verify_partial`] this signature was produced without a forced nonce.
pub fn verify_message_signature(
	signature: &[u8; SINGLE_SIGNER_SIGNATURE_SIZE],
	public_key: &PublicKey,
	message: &[u8; 32],
) -> Result<bool, Error> {
	let sig = Signature::from_compact(&SECP, signature).map_err(|_| ErrorKind::VerificationFailed)?;
	let msg = Message::from_slice(message).map_err(|_| ErrorKind::VerificationFailed)?;
	Ok(aggsig::verify_single(&SECP, &sig, &msg, None, public_key, None, false))
}

/// secp256k1 ECDSA-DER signature over `data`, used by the MQS address
/// helpers.
pub fn ecdsa_sign_der(secret: &SecretKey, data: &[u8]) -> Result<Vec<u8>, Error> {
	use sha2::{Digest, Sha256};
	let digest = Sha256::digest(data);
	let msg = Message::from_slice(&digest).map_err(|_| ErrorKind::SigningFailed)?;
	let sig = SECP
		.sign(&msg, secret)
		.map_err(|_| ErrorKind::SigningFailed)?;
	Ok(sig.serialize_der(&SECP))
}

/// Verify a secp256k1 ECDSA-DER signature over `data`.
pub fn ecdsa_verify_der(pubkey: &PublicKey, data: &[u8], signature: &[u8]) -> bool {
	use sha2::{Digest, Sha256};
	let digest = Sha256::digest(data);
	let msg = match Message::from_slice(&digest) {
		Ok(m) => m,
		Err(_) => return false,
	};
	let sig = match Signature::from_der(&SECP, signature) {
		Ok(s) => s,
		Err(_) => return false,
	};
	SECP.verify(&msg, &sig, pubkey).is_ok()
}

/// Zeroizing wrapper for a raw 32-byte scalar, for values that never need
/// to round-trip through `secp256k1zkp::SecretKey`.
pub type Scalar32 = Zeroizing<[u8; 32]>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn valid_scalar_round_trips_through_public_key() {
		let secret = scalar_from_bytes(&[1u8; 32]).unwrap();
		let pubkey = public_key(&secret).unwrap();
		let serialized = serialize_public_key(&pubkey);
		let parsed = parse_public_key(&serialized).unwrap();
		assert_eq!(serialize_public_key(&parsed), serialized);
	}

	#[test]
	fn zero_scalar_is_invalid() {
		assert!(!is_valid_scalar(&[0u8; 32]));
	}

	#[test]
	fn commitment_changes_with_blinding() {
		let b1 = scalar_from_bytes(&[2u8; 32]).unwrap();
		let b2 = scalar_from_bytes(&[3u8; 32]).unwrap();
		let c1 = commit(100, &b1).unwrap();
		let c2 = commit(100, &b2).unwrap();
		assert_ne!(c1.0.to_vec(), c2.0.to_vec());
	}
}
