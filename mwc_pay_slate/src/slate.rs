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

//! In-memory slate state and its bit-packed wire format.

use crate::compressed::{self, CompressedPublicKey};
use crate::error::{Error, ErrorKind};
use crate::kernel::KernelFeatures;
use crate::participant::Participant;
use mwc_pay_util::{BitReader, BitWriter};
use uuid::Uuid;

const PURPOSE_SEND_INITIAL: u64 = 0;
const PURPOSE_SEND_RESPONSE: u64 = 1;

pub struct Output {
	pub commitment: [u8; 33],
	pub proof: Vec<u8>,
}

/// An in-memory slate, covering both the fields parsed off an inbound
/// send-initial slate and the ones the recipient fills in before emitting a
/// send-response slate.
pub struct Slate {
	pub uuid: Uuid,
	pub amount: u64,
	pub fee: u64,
	pub height: u64,
	pub lock_height: u64,
	pub ttl_cutoff_height: Option<u64>,
	pub participants: Vec<Participant>,
	pub output: Option<Output>,
	pub sender_payment_proof_address: Option<CompressedPublicKey>,
	pub recipient_payment_proof_address: Option<CompressedPublicKey>,
	pub recipient_payment_proof_signature: Option<Vec<u8>>,
	pub offset: [u8; 32],
}

impl Slate {
	/// Parse an inbound send-initial slate.
	pub fn parse_request(bytes: &[u8], floonet: bool) -> Result<Slate, Error> {
		let mut reader = BitReader::new(bytes);

		let purpose = reader.get_bits(3)?;
		if purpose != PURPOSE_SEND_INITIAL {
			return Err(ErrorKind::UnexpectedPurpose.into());
		}

		let uuid_bytes = reader.get_bytes(16)?;
		let uuid = parse_uuid(&uuid_bytes)?;

		let is_floonet = reader.get_bits(1)? != 0;
		if is_floonet != floonet {
			return Err(ErrorKind::WrongNetwork.into());
		}

		let amount = compressed::read_with_hundreds(&mut reader)?;
		if amount == 0 {
			return Err(ErrorKind::ParseError("amount is invalid".into()).into());
		}
		let fee = compressed::read_with_hundreds(&mut reader)?;
		if fee == 0 {
			return Err(ErrorKind::ParseError("fee is invalid".into()).into());
		}
		let height = compressed::read_without_hundreds(&mut reader)?;
		let lock_height = compressed::read_without_hundreds(&mut reader)?;

		let ttl_present = reader.get_bits(1)? != 0;
		let ttl_cutoff_height = if ttl_present {
			let cutoff = compressed::read_without_hundreds(&mut reader)?;
			if cutoff <= height || cutoff < lock_height {
				return Err(ErrorKind::ParseError("ttl cutoff must exceed height and be at least lock_height".into()).into());
			}
			Some(cutoff)
		} else {
			None
		};

		let participant = Participant::parse(&mut reader)?;

		let payment_proof_present = reader.get_bits(1)? != 0;
		let (sender_payment_proof_address, recipient_payment_proof_address) = if payment_proof_present {
			// Both keys are always present together once this bit is set —
			// there is no second presence bit for the recipient key.
			let sender = CompressedPublicKey::read(&mut reader)?;
			let recipient = CompressedPublicKey::read(&mut reader)?;
			(Some(sender), Some(recipient))
		} else {
			(None, None)
		};

		Ok(Slate {
			uuid,
			amount,
			fee,
			height,
			lock_height,
			ttl_cutoff_height,
			participants: vec![participant],
			output: None,
			sender_payment_proof_address,
			recipient_payment_proof_address,
			recipient_payment_proof_signature: None,
			offset: [0u8; 32],
		})
	}

	/// Serialize the recipient's send-response slate. Expects `output`,
	/// `offset` and a single participant (the recipient's, with a partial
	/// signature attached) to already be set.
	pub fn serialize_response(&self, floonet: bool) -> Result<Vec<u8>, Error> {
		let mut writer = BitWriter::new();
		writer.set_bits(PURPOSE_SEND_RESPONSE, 3);
		writer.set_bytes(self.uuid.as_bytes());
		writer.set_bits(floonet as u64, 1);

		compressed::write_without_hundreds(&mut writer, self.height)?;
		compressed::write_without_hundreds(&mut writer, self.lock_height)?;

		match self.ttl_cutoff_height {
			Some(cutoff) => {
				writer.set_bits(1, 1);
				compressed::write_without_hundreds(&mut writer, cutoff)?;
			}
			None => writer.set_bits(0, 1),
		}

		writer.set_bytes(&self.offset);

		let output = self
			.output
			.as_ref()
			.ok_or_else(|| ErrorKind::ParseError("response slate is missing its output".into()))?;
		writer.set_bytes(&output.commitment);
		writer.set_bits(output.proof.len() as u64, 10);
		writer.set_bytes(&output.proof);
		writer.set_bits(0, 1); // end-of-outputs

		compressed::write_with_hundreds(&mut writer, self.fee)?;
		writer.set_bytes(&[0u8; 33]); // kernel excess placeholder
		writer.set_bytes(&[0u8; 64]); // kernel signature placeholder
		writer.set_bits(0, 1); // end-of-kernels

		let participant = self
			.participants
			.last()
			.ok_or_else(|| ErrorKind::ParseError("response slate is missing the recipient participant".into()))?;
		participant.write(&mut writer)?;

		let sender = self
			.sender_payment_proof_address
			.as_ref()
			.ok_or_else(|| ErrorKind::MissingSenderProofAddress)?;
		let recipient = self
			.recipient_payment_proof_address
			.as_ref()
			.ok_or_else(|| ErrorKind::ProofKeyMismatch)?;
		sender.write(&mut writer)?;
		recipient.write(&mut writer)?;

		let signature = self
			.recipient_payment_proof_signature
			.as_ref()
			.ok_or_else(|| ErrorKind::ParseError("response slate is missing its payment-proof signature".into()))?;
		if signature.len() > 64 {
			return Err(ErrorKind::ParseError("payment-proof signature is too long".into()).into());
		}
		let length_offset = 64 - signature.len() as u64;
		writer.set_bits(length_offset, 4);
		writer.set_bytes(signature);

		Ok(writer.into_bytes())
	}

	/// The kernel-data bytes and their hash for this slate's fee, under the
	/// Plain kernel variant (the only one the Pay-side accepts).
	pub fn kernel_hash(&self) -> [u8; 32] {
		crate::kernel::kernel_data_hash(&KernelFeatures::Plain, self.fee)
	}
}

fn parse_uuid(bytes: &[u8]) -> Result<Uuid, Error> {
	if bytes.len() != 16 {
		return Err(ErrorKind::ParseError("uuid must be 16 bytes".into()).into());
	}
	let version_nibble = bytes[6] >> 4;
	if version_nibble != 4 {
		return Err(ErrorKind::ParseError("uuid must be version 4".into()).into());
	}
	let variant_bits = bytes[8] >> 6;
	if variant_bits != 0b10 && variant_bits != 0b11 {
		return Err(ErrorKind::ParseError("uuid has an unsupported variant".into()).into());
	}
	let mut array = [0u8; 16];
	array.copy_from_slice(bytes);
	Ok(Uuid::from_bytes(array))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::participant::Participant;
	use mwc_pay_crypto::secp;

	fn sample_participant() -> Participant {
		let secret = secp::scalar_from_bytes(&[4u8; 32]).unwrap();
		let pubkey = secp::public_key(&secret).unwrap();
		let bytes = secp::serialize_public_key(&pubkey).to_vec();
		Participant {
			public_blind_excess: CompressedPublicKey::Secp256k1(bytes.clone()),
			public_nonce: CompressedPublicKey::Secp256k1(bytes),
			partial_signature: None,
			message: None,
		}
	}

	fn build_request_bytes(floonet: bool) -> Vec<u8> {
		let mut writer = BitWriter::new();
		writer.set_bits(PURPOSE_SEND_INITIAL, 3);
		let uuid = Uuid::new_v4();
		writer.set_bytes(uuid.as_bytes());
		writer.set_bits(floonet as u64, 1);
		compressed::write_with_hundreds(&mut writer, 2_000_000).unwrap();
		compressed::write_with_hundreds(&mut writer, 800_000).unwrap();
		compressed::write_without_hundreds(&mut writer, 100).unwrap();
		compressed::write_without_hundreds(&mut writer, 0).unwrap();
		writer.set_bits(0, 1); // no ttl cutoff
		sample_participant().write_as_inbound(&mut writer);
		writer.set_bits(0, 1); // no payment proof block
		writer.into_bytes()
	}

	impl Participant {
		fn write_as_inbound(&self, writer: &mut BitWriter) {
			self.public_blind_excess.write(writer).unwrap();
			self.public_nonce.write(writer).unwrap();
			writer.set_bits(0, 1); // partial signature present = 0
			writer.set_bits(0, 1); // message present = 0
		}
	}

	#[test]
	fn parses_a_minimal_request_slate() {
		let bytes = build_request_bytes(false);
		let slate = Slate::parse_request(&bytes, false).unwrap();
		assert_eq!(slate.amount, 2_000_000);
		assert_eq!(slate.fee, 800_000);
		assert_eq!(slate.height, 100);
		assert_eq!(slate.lock_height, 0);
		assert!(slate.ttl_cutoff_height.is_none());
		assert_eq!(slate.participants.len(), 1);
	}

	#[test]
	fn rejects_wrong_network() {
		let bytes = build_request_bytes(true);
		assert!(Slate::parse_request(&bytes, false).is_err());
	}

	#[test]
	fn rejects_response_purpose_as_a_request() {
		let mut writer = BitWriter::new();
		writer.set_bits(PURPOSE_SEND_RESPONSE, 3);
		let bytes = writer.into_bytes();
		assert!(Slate::parse_request(&bytes, false).is_err());
	}
}
