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

//! Resolves the data directory (§6) and holds the `directory.lock` advisory
//! lock that keeps two daemons from sharing it.

use crate::error::{Error, ErrorKind};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

pub const WALLET_FILE_NAME: &str = "wallet.dat";
pub const NODE_STATE_FILE_NAME: &str = "node_state.bin";
const LOCK_FILE_NAME: &str = "directory.lock";

/// `$HOME/.mwc_pay/<network>`, unless overridden by `--directory`.
pub fn resolve(override_dir: Option<PathBuf>, floonet: bool) -> Result<PathBuf, Error> {
	if let Some(dir) = override_dir {
		return Ok(dir);
	}
	let home = dirs::home_dir().ok_or_else(|| ErrorKind::Io("could not determine the home directory".into()))?;
	let network = if floonet { "floonet" } else { "mainnet" };
	Ok(home.join(".mwc_pay").join(network))
}

/// Holds the advisory lock for as long as the daemon runs; dropping it
/// releases the lock.
pub struct DirectoryLock {
	file: File,
}

impl DirectoryLock {
	pub fn acquire(dir: &Path) -> Result<DirectoryLock, Error> {
		std::fs::create_dir_all(dir)?;
		let file = OpenOptions::new().create(true).write(true).open(dir.join(LOCK_FILE_NAME))?;
		file.try_lock_exclusive().map_err(|_| ErrorKind::DirectoryLocked)?;
		Ok(DirectoryLock { file })
	}
}

impl Drop for DirectoryLock {
	fn drop(&mut self) {
		let _ = FileExt::unlock(&self.file);
	}
}
