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

//! A single slate participant: their public blind excess and nonce, and
//! either an inbound plaintext message or an outbound partial signature.

use crate::compressed::CompressedPublicKey;
use crate::error::{Error, ErrorKind};
use mwc_pay_crypto::{hash, secp};
use mwc_pay_util::{smaz, BitReader, BitWriter};

#[derive(Clone, Debug)]
pub struct Participant {
	pub public_blind_excess: CompressedPublicKey,
	pub public_nonce: CompressedPublicKey,
	pub partial_signature: Option<[u8; 64]>,
	pub message: Option<String>,
}

impl Participant {
	/// Parse an inbound participant block. A partial signature must NOT be
	/// present (only the recipient side ever attaches one).
	pub fn parse(reader: &mut BitReader) -> Result<Participant, Error> {
		let public_blind_excess = CompressedPublicKey::read(reader)?;
		let public_nonce = CompressedPublicKey::read(reader)?;

		let partial_sig_present = reader.get_bits(1)? != 0;
		if partial_sig_present {
			return Err(ErrorKind::ParseError("inbound participant must not carry a partial signature".into()).into());
		}

		let message_present = reader.get_bits(1)? != 0;
		let message = if message_present {
			let length = reader.get_bits(16)? as usize;
			let compressed = reader.get_bytes(length)?;
			let text = smaz::decompress(&compressed).map_err(|_| ErrorKind::InvalidUtf8)?;

			let signature_bytes = reader.get_bytes(64)?;
			let mut signature = [0u8; 64];
			signature.copy_from_slice(&signature_bytes);

			let signing_pubkey = match &public_blind_excess {
				CompressedPublicKey::Secp256k1(bytes) => secp::parse_public_key(bytes)?,
				CompressedPublicKey::Ed25519(_) => {
					return Err(ErrorKind::ParseError("participant message signer must be a secp256k1 key".into()).into())
				}
			};
			let digest = hash::sha256(text.as_bytes());
			if !secp::verify_message_signature(&signature, &signing_pubkey, &digest)? {
				return Err(ErrorKind::InvalidMessageSignature.into());
			}

			Some(text)
		} else {
			None
		};

		Ok(Participant {
			public_blind_excess,
			public_nonce,
			partial_signature: None,
			message,
		})
	}

	/// Serialize an outbound (recipient) participant block: partial
	/// signature present, message absent.
	pub fn write(&self, writer: &mut BitWriter) -> Result<(), Error> {
		self.public_blind_excess.write(writer)?;
		self.public_nonce.write(writer)?;

		match &self.partial_signature {
			Some(sig) => {
				writer.set_bits(1, 1);
				writer.set_bits(0, 1); // message present = 0
				writer.set_bytes(sig);
			}
			None => {
				writer.set_bits(0, 1);
				writer.set_bits(0, 1);
			}
		}
		Ok(())
	}
}
