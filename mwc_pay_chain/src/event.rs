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

//! The two inbound notifications the host's chain client delivers (§4.H).

/// A block header, as far as the observer needs to know it: its height and
/// the cumulative size of the kernel MMR up to and including this block.
#[derive(Clone, Copy, Debug)]
pub struct Header {
	pub height: u64,
	pub kernel_mmr_size: u64,
}

/// One kernel as carried by an archive-set or block notification.
#[derive(Clone, Debug)]
pub struct Kernel {
	/// The 33-byte Pedersen commitment this kernel's excess serializes to.
	pub excess: Vec<u8>,
	/// The 64-byte complete aggregate signature.
	pub excess_sig: Vec<u8>,
	pub fee: u64,
	/// This kernel's 0-based position within the chain's kernel MMR.
	pub mmr_index: u64,
}

/// A contiguous run of headers the host's archive (compacted) chain segment
/// spans, together with every kernel appearing in it.
#[derive(Clone, Debug)]
pub struct ArchiveSetEvent {
	pub headers: Vec<Header>,
	pub archive_header: Header,
	pub kernels: Vec<Kernel>,
}

/// A single freshly-accepted block.
#[derive(Clone, Debug)]
pub struct Block {
	pub kernels: Vec<Kernel>,
}

#[derive(Clone, Debug)]
pub struct BlockEvent {
	pub header: Header,
	pub block: Block,
}
