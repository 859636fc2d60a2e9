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

//! `node_state.bin` (§6): an opaque blob the chain observer's feed can use
//! to resume without replaying its whole history, rewritten via temp+rename
//! so a crash mid-write never leaves a torn file. This build's observer has
//! no external feed driving it yet (see the daemon's `node_dns_seed_*`
//! handling), so the blob is an empty placeholder today; the load/save pair
//! is the stable contract a future feed implementation writes against.

use crate::directory::NODE_STATE_FILE_NAME;
use std::io::Write;
use std::path::Path;

pub fn load(directory: &Path) -> std::io::Result<Vec<u8>> {
	match std::fs::read(directory.join(NODE_STATE_FILE_NAME)) {
		Ok(bytes) => Ok(bytes),
		Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
		Err(err) => Err(err),
	}
}

/// Write `bytes` to `node_state.bin` atomically via a temp file + rename.
pub fn save(directory: &Path, bytes: &[u8]) -> std::io::Result<()> {
	let final_path = directory.join(NODE_STATE_FILE_NAME);
	let temp_path = directory.join(format!("{}.tmp", NODE_STATE_FILE_NAME));

	let mut file = std::fs::File::create(&temp_path)?;
	file.write_all(bytes)?;
	file.sync_all()?;
	drop(file);

	std::fs::rename(&temp_path, &final_path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_file_loads_as_empty() {
		let dir = tempfile::tempdir().unwrap();
		assert_eq!(load(dir.path()).unwrap(), Vec::<u8>::new());
	}

	#[test]
	fn save_then_load_round_trips() {
		let dir = tempfile::tempdir().unwrap();
		save(dir.path(), b"opaque-blob").unwrap();
		assert_eq!(load(dir.path()).unwrap(), b"opaque-blob");
	}

	#[test]
	fn save_overwrites_an_existing_snapshot() {
		let dir = tempfile::tempdir().unwrap();
		save(dir.path(), b"first").unwrap();
		save(dir.path(), b"second").unwrap();
		assert_eq!(load(dir.path()).unwrap(), b"second");
	}
}
