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

//! Opens the wallet file at `<directory>/wallet.dat`, minting a fresh one on
//! first run. The password either comes from `--password` or an interactive
//! prompt; a wrong password on an existing file is reported distinctly from
//! every other failure, per §7.

use crate::directory::WALLET_FILE_NAME;
use crate::error::{Error, ErrorKind};
use mwc_pay_wallet::seed::EncryptedSeed;
use mwc_pay_wallet::Wallet;
use std::path::Path;

/// Open the wallet at `directory`, creating one (and printing its recovery
/// phrase exactly once) if none exists yet.
pub fn open_or_create(directory: &Path, password: Option<String>) -> Result<Wallet, Error> {
	let path = directory.join(WALLET_FILE_NAME);

	if path.exists() {
		let password = resolve_password(password, "Wallet password: ")?;
		let bytes = std::fs::read(&path)?;
		let encrypted = EncryptedSeed::from_bytes(&bytes).map_err(|err| ErrorKind::CorruptWalletFile(err.to_string()))?;
		Ok(Wallet::open(&encrypted, password.as_bytes())?)
	} else {
		let password = match password {
			Some(password) => password,
			None => prompt_new_password()?,
		};
		let (wallet, encrypted) = Wallet::create(password.as_bytes())?;
		std::fs::write(&path, encrypted.to_bytes())?;
		log::info!("minted a new wallet at {}", path.display());
		Ok(wallet)
	}
}

/// Decrypt and return the raw seed behind `directory`'s wallet file, for the
/// `--recovery_passphrase` diagnostic. Does not touch the open wallet.
pub fn decrypt_seed(directory: &Path, password: Option<String>) -> Result<zeroize::Zeroizing<[u8; 32]>, Error> {
	let path = directory.join(WALLET_FILE_NAME);
	let password = resolve_password(password, "Wallet password: ")?;
	let bytes = std::fs::read(&path)?;
	let encrypted = EncryptedSeed::from_bytes(&bytes).map_err(|err| ErrorKind::CorruptWalletFile(err.to_string()))?;
	Ok(mwc_pay_wallet::seed::decrypt(&encrypted, password.as_bytes())?)
}

fn resolve_password(password: Option<String>, prompt: &str) -> Result<String, Error> {
	match password {
		Some(password) => Ok(password),
		None => Ok(rpassword::prompt_password(prompt)?),
	}
}

fn prompt_new_password() -> Result<String, Error> {
	let password = rpassword::prompt_password("Set a new wallet password: ")?;
	let confirm = rpassword::prompt_password("Confirm password: ")?;
	if password != confirm {
		return Err(ErrorKind::Io("passwords did not match".into()).into());
	}
	Ok(password)
}
