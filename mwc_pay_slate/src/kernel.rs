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

//! Kernel features and the canonical kernel-data bytes signed by the
//! aggregate signature.

use mwc_pay_crypto::hash::sha256;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KernelFeatures {
	Plain,
	Coinbase,
	HeightLocked { lock_height: u64 },
}

impl KernelFeatures {
	/// The canonical kernel-data bytes this variant signs over.
	pub fn kernel_data(&self, fee: u64) -> Vec<u8> {
		match self {
			KernelFeatures::Plain => {
				let mut data = vec![0x00];
				data.extend_from_slice(&fee.to_be_bytes());
				data
			}
			KernelFeatures::Coinbase => vec![0x01],
			KernelFeatures::HeightLocked { lock_height } => {
				let mut data = vec![0x02];
				data.extend_from_slice(&fee.to_be_bytes());
				data.extend_from_slice(&lock_height.to_be_bytes());
				data
			}
		}
	}
}

/// `SHA256(kernel_data)`, the message the aggregate signature covers.
pub fn kernel_data_hash(features: &KernelFeatures, fee: u64) -> [u8; 32] {
	sha256(&features.kernel_data(fee))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_kernel_data_encodes_fee() {
		let data = KernelFeatures::Plain.kernel_data(250);
		assert_eq!(data[0], 0x00);
		assert_eq!(&data[1..], &250u64.to_be_bytes());
	}

	#[test]
	fn coinbase_kernel_data_is_a_single_byte() {
		assert_eq!(KernelFeatures::Coinbase.kernel_data(0), vec![0x01]);
	}

	#[test]
	fn height_locked_kernel_data_encodes_fee_and_lock_height() {
		let data = KernelFeatures::HeightLocked { lock_height: 900 }.kernel_data(10);
		assert_eq!(data[0], 0x02);
		assert_eq!(&data[1..9], &10u64.to_be_bytes());
		assert_eq!(&data[9..], &900u64.to_be_bytes());
	}
}
