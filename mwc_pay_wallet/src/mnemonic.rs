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

//! BIP-39 mnemonic rendering of the wallet seed, for display during `init`
//! and `recover` only — the mnemonic is never stored, only the encrypted
//! seed envelope is.

use crate::error::{Error, ErrorKind};
use bip39::{Language, Mnemonic};
use zeroize::Zeroizing;

/// Render a 32-byte seed as a 24-word BIP-39 mnemonic for one-time display.
pub fn encode(seed: &[u8; 32]) -> Result<String, Error> {
	let mnemonic = Mnemonic::from_entropy_in(Language::English, seed)
		.map_err(|_| ErrorKind::InvalidSeed)?;
	Ok(mnemonic.to_string())
}

/// Parse an operator-entered mnemonic phrase back into the 32-byte seed it
/// encodes, for wallet recovery.
pub fn decode(phrase: &str) -> Result<Zeroizing<[u8; 32]>, Error> {
	let mnemonic = Mnemonic::parse_in(Language::English, phrase)
		.map_err(|_| ErrorKind::InvalidInput("not a valid BIP-39 mnemonic".into()))?;
	let entropy = mnemonic.to_entropy();
	if entropy.len() != 32 {
		return Err(ErrorKind::InvalidInput("mnemonic does not encode a 32-byte seed".into()).into());
	}
	let mut seed = Zeroizing::new([0u8; 32]);
	seed.copy_from_slice(&entropy);
	Ok(seed)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_through_the_word_list() {
		let seed = [9u8; 32];
		let phrase = encode(&seed).unwrap();
		assert_eq!(phrase.split_whitespace().count(), 24);
		let recovered = decode(&phrase).unwrap();
		assert_eq!(*recovered, seed);
	}

	#[test]
	fn rejects_garbage_input() {
		assert!(decode("not a real mnemonic phrase at all here").is_err());
	}
}
