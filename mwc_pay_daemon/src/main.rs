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

//! The `mwc_pay` binary: parses the CLI (§6), resolves the data directory,
//! opens (or mints) the wallet, and either services one of the diagnostic
//! early exits or starts the daemon's supervised task set (§5).

mod cli;
mod directory;
mod error;
mod node_state;
mod wallet_file;

use clap::Parser;
use cli::Args;
use error::{Error, ErrorKind};
use mwc_pay_api::AppState;
use mwc_pay_price::{Network as PriceNetwork, PriceAggregator};
use mwc_pay_store::PaymentStore;
use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

fn main() -> ExitCode {
	env_logger::init();
	let args = match Args::try_parse() {
		Ok(args) => args,
		Err(err) => {
			// `--help`/`--version` route through the same error path but
			// exit cleanly; every other parse failure is exit 1 per §6.
			let _ = err.print();
			return if err.exit_code() == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE };
		}
	};

	match run(args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			if err.is_incorrect_password() {
				eprintln!("Incorrect password");
			} else {
				eprintln!("mwc_pay: {}", err);
			}
			ExitCode::FAILURE
		}
	}
}

impl Error {
	fn is_incorrect_password(&self) -> bool {
		matches!(self.kind(), ErrorKind::IncorrectPassword)
	}
}

fn run(args: Args) -> Result<(), Error> {
	let directory = directory::resolve(args.directory.clone(), args.floonet)?;
	std::fs::create_dir_all(&directory)?;

	if args.recovery_passphrase {
		let seed = wallet_file::decrypt_seed(&directory, args.password.clone())?;
		let phrase = mwc_pay_wallet::mnemonic::encode(&seed)?;
		println!("{}", phrase);
		return Ok(());
	}

	if args.show_completed_payments {
		let store = PaymentStore::open(&directory)?;
		for payment in store.get_completed_payments()? {
			println!("{} {} completed={:?}", payment.id, payment.url, payment.completed);
		}
		return Ok(());
	}

	if let Some(id) = args.show_payment {
		let store = PaymentStore::open(&directory)?;
		let info = store.get_payment_info(id)?;
		println!(
			"url={} price={:?} status={} confirmations={}/{} time_remaining={:?}",
			info.url, info.price, info.status, info.confirmations, info.required_confirmations, info.time_remaining
		);
		return Ok(());
	}

	let _lock = directory::DirectoryLock::acquire(&directory)?;
	let wallet = wallet_file::open_or_create(&directory, args.password.clone())?;

	if args.root_public_key {
		println!("{}", hex::encode(wallet.root_public_key()?));
		return Ok(());
	}

	let runtime = tokio::runtime::Runtime::new()?;
	runtime.block_on(serve(args, directory, wallet))
}

async fn serve(args: Args, directory: std::path::PathBuf, wallet: mwc_pay_wallet::Wallet) -> Result<(), Error> {
	// Establishes node_state.bin if absent; the bytes themselves are only
	// meaningful once a chain feed is wired up (see the log line below).
	if node_state::load(&directory)?.is_empty() {
		node_state::save(&directory, &[])?;
	}

	let store = Arc::new(PaymentStore::open(&directory)?);
	let wallet = Arc::new(wallet);
	let http_client = reqwest::Client::new();

	let price = if args.price_disable {
		None
	} else {
		let network = if args.floonet { PriceNetwork::Test } else { PriceNetwork::Main };
		Some(Arc::new(PriceAggregator::new(
			mwc_pay_price::oracles::all(),
			http_client.clone(),
			Duration::from_secs(args.price_update_interval),
			args.price_average_length,
			network,
		)))
	};

	let public_addr: SocketAddr = format!("{}:{}", args.public_address, args.public_port)
		.parse()
		.map_err(|_| ErrorKind::Io("invalid --public_address/--public_port".into()))?;
	let private_addr: SocketAddr = format!("{}:{}", args.private_address, args.private_port)
		.parse()
		.map_err(|_| ErrorKind::Io("invalid --private_address/--private_port".into()))?;

	if args.public_certificate.is_some() || args.private_certificate.is_some() {
		log::warn!("TLS certificate/key flags were supplied; this build serves plain HTTP only");
	}
	if args.node_dns_seed_address.is_some() {
		log::info!("node_dns_seed_address accepted but unused: the chain observer expects an external feed, not an embedded P2P client");
	}

	let public_router = mwc_pay_api::public_router(AppState::new(store.clone(), wallet.clone(), price.clone(), args.floonet));
	let private_router = mwc_pay_api::private_router(AppState::new(store.clone(), wallet.clone(), price.clone(), args.floonet));
	let callback_driver = Arc::new(mwc_pay_callbacks::CallbackDriver::new(store.clone(), http_client, Duration::from_secs(5)));

	let mut tasks = tokio::task::JoinSet::new();

	tasks.spawn(async move {
		if let Err(err) = mwc_pay_api::run(public_addr, public_router).await {
			log::error!("public API server stopped: {}", err);
		}
	});

	tasks.spawn(async move {
		if let Err(err) = mwc_pay_api::run(private_addr, private_router).await {
			log::error!("private API server stopped: {}", err);
		}
	});

	if let Some(price) = price {
		tasks.spawn(async move {
			price.run().await;
		});
	}

	{
		let driver = callback_driver.clone();
		tasks.spawn(async move {
			driver.run_confirmed_and_completed().await;
		});
	}
	{
		let driver = callback_driver;
		tasks.spawn(async move {
			// §4.L: the expiry monitor runs on its own 1s cadence, distinct
			// from the confirmed/completed retry loop above.
			driver.run_expired(Duration::from_secs(1)).await;
		});
	}

	log::info!("mwc_pay listening: public={} private={}", public_addr, private_addr);

	tokio::select! {
		_ = tokio::signal::ctrl_c() => {
			log::info!("shutdown signal received");
		}
	}
	tasks.abort_all();

	Ok(())
}
