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

//! Standard Base64, used only for HTTP Basic-auth payloads.

use crate::error::{Error, ErrorKind};
use data_encoding::BASE64;

/// Encode `data` as standard Base64.
pub fn encode(data: &[u8]) -> String {
	BASE64.encode(data)
}

/// Decode a standard Base64 string.
pub fn decode(data: &str) -> Result<Vec<u8>, Error> {
	BASE64
		.decode(data.as_bytes())
		.map_err(|_| ErrorKind::InvalidEncoding("invalid base64".into()).into())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trip() {
		let data = b"user:password".to_vec();
		assert_eq!(decode(&encode(&data)).unwrap(), data);
	}

	#[test]
	fn rejects_malformed_input() {
		assert!(decode("not base64!!").is_err());
	}
}
