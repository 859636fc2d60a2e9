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

//! Gzip compression for the JSON-RPC foreign API's `Accept-Encoding: gzip`
//! response path.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Gzip-compress `bytes` at the default compression level.
pub fn compress(bytes: &[u8]) -> Vec<u8> {
	let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
	// Writing to a `Vec<u8>` sink never fails.
	encoder.write_all(bytes).expect("gzip encoding into a Vec cannot fail");
	encoder.finish().expect("gzip encoding into a Vec cannot fail")
}

#[cfg(test)]
mod tests {
	use super::*;
	use flate2::read::GzDecoder;
	use std::io::Read;

	#[test]
	fn round_trips_through_gzip() {
		let input = b"{\"jsonrpc\":\"2.0\",\"id\":1,\"result\":true}".repeat(8);
		let compressed = compress(&input);
		assert_ne!(compressed, input);

		let mut decoder = GzDecoder::new(&compressed[..]);
		let mut decompressed = Vec::new();
		decoder.read_to_end(&mut decompressed).unwrap();
		assert_eq!(decompressed, input);
	}
}
