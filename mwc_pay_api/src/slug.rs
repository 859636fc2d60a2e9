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

//! Random identifiers for a freshly created invoice: a 20-character URL
//! slug and a u64 payment id, both drawn fresh on every collision.

use rand::RngCore;

const ALPHABET: &[u8; 32] = b"abcdefghijkmnpqrstuvwxyz23456789";
const SLUG_LENGTH: usize = 20;

pub fn random_url() -> String {
	let mut rng = rand::thread_rng();
	let mut out = String::with_capacity(SLUG_LENGTH);
	for _ in 0..SLUG_LENGTH {
		let index = (rng.next_u32() as usize) % ALPHABET.len();
		out.push(ALPHABET[index] as char);
	}
	out
}

pub fn random_id() -> u64 {
	rand::thread_rng().next_u64()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn random_url_is_twenty_characters_from_the_alphabet() {
		let url = random_url();
		assert_eq!(url.len(), SLUG_LENGTH);
		assert!(url.bytes().all(|b| ALPHABET.contains(&b)));
	}

	#[test]
	fn successive_urls_differ() {
		assert_ne!(random_url(), random_url());
	}
}
