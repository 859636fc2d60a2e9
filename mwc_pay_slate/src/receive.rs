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

//! The recipient (merchant) side of the two-round slate exchange: parse a
//! send-initial slate, build the receiving output, co-sign the kernel, and
//! emit a send-response slate.

use crate::compressed::CompressedPublicKey;
use crate::error::{Error, ErrorKind};
use crate::participant::Participant;
use crate::slate::{Output, Slate};
use mwc_pay_crypto::secp;
use mwc_pay_wallet::Wallet;

/// Everything the payment store needs to record once a slate has been
/// received and co-signed.
pub struct ReceivedPayment {
	pub amount: u64,
	pub sender_payment_proof_address: String,
	pub kernel_commitment: [u8; 33],
	pub sender_public_blind_excess: Vec<u8>,
	pub recipient_partial_signature: [u8; 64],
	pub public_nonce_sum: Vec<u8>,
	pub kernel_data: Vec<u8>,
	pub response_bytes: Vec<u8>,
}

/// Receive an inbound send-initial slate for the invoice at `identifier_path`
/// expecting `invoice_price` (when the invoice names a fixed price), and
/// produce the signed send-response slate.
pub fn receive(
	request_bytes: &[u8],
	wallet: &Wallet,
	identifier_path: u64,
	invoice_price: Option<u64>,
	floonet: bool,
) -> Result<ReceivedPayment, Error> {
	let mut slate = Slate::parse_request(request_bytes, floonet)?;

	if let Some(price) = invoice_price {
		if slate.amount != price {
			return Err(ErrorKind::AmountMismatch.into());
		}
	}

	let sender_address = slate
		.sender_payment_proof_address
		.clone()
		.ok_or(ErrorKind::MissingSenderProofAddress)?;

	let wallet_tor_pubkey = wallet.tor_payment_proof_address_public_key(identifier_path)?;
	let wallet_key = CompressedPublicKey::Ed25519(wallet_tor_pubkey);

	match &slate.recipient_payment_proof_address {
		None => slate.recipient_payment_proof_address = Some(wallet_key.clone()),
		Some(recipient) if *recipient == sender_address => {
			slate.recipient_payment_proof_address = Some(wallet_key.clone())
		}
		Some(recipient) if *recipient == wallet_key => {}
		Some(_) => return Err(ErrorKind::ProofKeyMismatch.into()),
	}

	let sender_participant = slate
		.participants
		.first()
		.ok_or_else(|| ErrorKind::ParseError("request slate has no sender participant".into()))?
		.clone();

	// Step 3: build the recipient's rangeproof output.
	let commitment = wallet.commitment(identifier_path, slate.amount)?;
	let proof = wallet.bulletproof(identifier_path, slate.amount)?;
	let mut commitment_bytes = [0u8; 33];
	commitment_bytes.copy_from_slice(&commitment.0);
	slate.output = Some(Output {
		commitment: commitment_bytes,
		proof: proof.to_vec(),
	});

	// Step 4: blinding factor and random offset.
	let mut raw_blind = wallet.blinding_factor(identifier_path, slate.amount)?;
	let offset = draw_offset(&mut raw_blind)?;
	slate.offset = offset;
	let blind = raw_blind;

	// Step 5: fresh nonce and public values.
	let private_nonce = secp::create_private_nonce()?;
	let public_blind_excess = secp::public_key(&blind)?;
	let public_nonce = secp::public_key(&private_nonce)?;

	// Step 6: add the recipient participant and compute the combined sums.
	let sender_public_blind_excess = sender_participant_key(&sender_participant.public_blind_excess)?;
	let sender_public_nonce = sender_participant_key(&sender_participant.public_nonce)?;
	let public_blind_excess_sum = secp::combine_public_keys(&[sender_public_blind_excess, public_blind_excess])?;
	let public_nonce_sum = secp::combine_public_keys(&[sender_public_nonce, public_nonce])?;

	let kernel_hash = slate.kernel_hash();

	// Step 7: sign and self-verify before attaching.
	let partial = secp::sign_partial(
		&blind,
		&private_nonce,
		&public_nonce_sum,
		&public_blind_excess_sum,
		&kernel_hash,
	)?;
	if !secp::verify_partial(&partial, &public_blind_excess, &public_nonce_sum, &public_blind_excess_sum, &kernel_hash)? {
		return Err(ErrorKind::Crypto(mwc_pay_crypto::ErrorKind::VerificationFailed).into());
	}

	// Step 8: attach the partial signature and the payment-proof signature.
	let excess_commitment = secp::public_key_to_commitment(&public_blind_excess_sum)?;
	let sender_address_string = payment_proof_address_string(&sender_address, floonet);
	let recipient_signature = wallet.tor_payment_proof_signature(
		identifier_path,
		&excess_commitment.0,
		&sender_address_string,
		slate.amount,
	)?;

	slate.participants = vec![Participant {
		public_blind_excess: CompressedPublicKey::Secp256k1(secp::serialize_public_key(&public_blind_excess).to_vec()),
		public_nonce: CompressedPublicKey::Secp256k1(secp::serialize_public_key(&public_nonce).to_vec()),
		partial_signature: Some(partial),
		message: None,
	}];
	slate.sender_payment_proof_address = Some(sender_address);
	slate.recipient_payment_proof_signature = Some(recipient_signature.to_vec());

	// Step 9: serialize the response.
	let response_bytes = slate.serialize_response(floonet)?;

	Ok(ReceivedPayment {
		amount: slate.amount,
		sender_payment_proof_address: sender_address_string,
		kernel_commitment: commitment_bytes,
		sender_public_blind_excess: secp::serialize_public_key(&sender_public_blind_excess).to_vec(),
		recipient_partial_signature: partial,
		public_nonce_sum: secp::serialize_public_key(&public_nonce_sum).to_vec(),
		kernel_data: crate::kernel::KernelFeatures::Plain.kernel_data(slate.fee),
		response_bytes,
	})
}

fn sender_participant_key(key: &CompressedPublicKey) -> Result<mwc_pay_crypto::secp256k1zkp::key::PublicKey, Error> {
	match key {
		CompressedPublicKey::Secp256k1(bytes) => secp::parse_public_key(bytes).map_err(Into::into),
		CompressedPublicKey::Ed25519(_) => {
			Err(ErrorKind::ParseError("participant keys must be secp256k1 points".into()).into())
		}
	}
}

fn payment_proof_address_string(key: &CompressedPublicKey, floonet: bool) -> String {
	match key {
		CompressedPublicKey::Ed25519(bytes) => mwc_pay_wallet::tor::encode(bytes),
		CompressedPublicKey::Secp256k1(bytes) => {
			let mut array = [0u8; 33];
			array.copy_from_slice(bytes);
			mwc_pay_wallet::mqs::encode(&array, floonet)
		}
	}
}

/// Draw a random 32-byte offset `o` such that both `o` and `blinding - o`
/// are valid curve scalars, retrying up to entropy exhaustion. Replaces
/// `blinding` in place with `blinding - o` and returns `o`.
fn draw_offset(blinding: &mut mwc_pay_crypto::secp256k1zkp::key::SecretKey) -> Result<[u8; 32], Error> {
	use rand::RngCore;

	const MAX_ATTEMPTS: u32 = 64;
	let mut rng = rand::thread_rng();

	for _ in 0..MAX_ATTEMPTS {
		let mut candidate = [0u8; 32];
		rng.fill_bytes(&mut candidate);
		let offset_scalar = match secp::scalar_from_bytes(&candidate) {
			Ok(scalar) => scalar,
			Err(_) => continue,
		};
		let reduced = match secp::sub_scalars(blinding, &offset_scalar) {
			Ok(scalar) => scalar,
			Err(_) => continue,
		};
		*blinding = reduced;
		return Ok(candidate);
	}

	Err(mwc_pay_crypto::ErrorKind::EntropyExhausted.into())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compressed::CompressedPublicKey;
	use crate::participant::Participant;
	use mwc_pay_util::BitWriter;
	use uuid::Uuid;

	fn build_request(sender_wallet: &Wallet, identifier_path: u64, amount: u64, fee: u64, floonet: bool) -> Vec<u8> {
		let sender_blind = sender_wallet.blinding_factor(identifier_path, amount).unwrap();
		let sender_pub = secp::public_key(&sender_blind).unwrap();
		let sender_nonce = secp::create_private_nonce().unwrap();
		let sender_nonce_pub = secp::public_key(&sender_nonce).unwrap();
		let sender_tor_pub = sender_wallet.tor_payment_proof_address_public_key(identifier_path).unwrap();

		let mut writer = BitWriter::new();
		writer.set_bits(0, 3); // purpose: send-initial
		writer.set_bytes(Uuid::new_v4().as_bytes());
		writer.set_bits(floonet as u64, 1);
		crate::compressed::write_with_hundreds(&mut writer, amount).unwrap();
		crate::compressed::write_with_hundreds(&mut writer, fee).unwrap();
		crate::compressed::write_without_hundreds(&mut writer, 100).unwrap();
		crate::compressed::write_without_hundreds(&mut writer, 0).unwrap();
		writer.set_bits(0, 1); // no ttl cutoff

		let participant = Participant {
			public_blind_excess: CompressedPublicKey::Secp256k1(secp::serialize_public_key(&sender_pub).to_vec()),
			public_nonce: CompressedPublicKey::Secp256k1(secp::serialize_public_key(&sender_nonce_pub).to_vec()),
			partial_signature: None,
			message: None,
		};
		participant.public_blind_excess.write(&mut writer).unwrap();
		participant.public_nonce.write(&mut writer).unwrap();
		writer.set_bits(0, 1); // partial signature present
		writer.set_bits(0, 1); // message present

		writer.set_bits(1, 1); // payment proof present
		CompressedPublicKey::Ed25519(sender_tor_pub).write(&mut writer).unwrap();
		writer.set_bits(0, 1); // no recipient proof key yet

		writer.into_bytes()
	}

	#[test]
	fn receives_a_well_formed_request() {
		let (sender_wallet, _) = Wallet::create(b"sender-pass").unwrap();
		let (merchant_wallet, _) = Wallet::create(b"merchant-pass").unwrap();

		let bytes = build_request(&sender_wallet, 1, 2_000_000, 800_000, false);
		let received = receive(&bytes, &merchant_wallet, 1, Some(2_000_000), false).unwrap();

		assert_eq!(received.kernel_commitment.len(), 33);
		assert!(!received.response_bytes.is_empty());
	}

	#[test]
	fn rejects_amount_mismatch_against_invoice_price() {
		let (sender_wallet, _) = Wallet::create(b"sender-pass").unwrap();
		let (merchant_wallet, _) = Wallet::create(b"merchant-pass").unwrap();

		let bytes = build_request(&sender_wallet, 1, 2_000_000, 800_000, false);
		let err = receive(&bytes, &merchant_wallet, 1, Some(1_000_000), false).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::AmountMismatch);
	}
}
