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

//! The daemon's command-line surface (§6): a single flat flag set rather
//! than subcommands, since most flags configure the one long-running
//! process and only a handful are diagnostic early exits.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mwc_pay", about = "A non-custodial MWC payment processor", version)]
pub struct Args {
	/// Override the data directory (default `$HOME/.mwc_pay/<network>`).
	#[arg(long, value_name = "PATH")]
	pub directory: Option<PathBuf>,

	/// Run against floonet rather than mainnet.
	#[arg(long)]
	pub floonet: bool,

	/// Bypass the interactive password prompt.
	#[arg(long, value_name = "PWD")]
	pub password: Option<String>,

	/// Print the wallet's BIP-39 recovery phrase and exit.
	#[arg(long)]
	pub recovery_passphrase: bool,

	/// Print the wallet's root public key and exit.
	#[arg(long)]
	pub root_public_key: bool,

	/// Print every completed payment and exit.
	#[arg(long)]
	pub show_completed_payments: bool,

	/// Print one payment by id and exit.
	#[arg(long, value_name = "ID")]
	pub show_payment: Option<u64>,

	#[arg(long, default_value = "127.0.0.1")]
	pub private_address: String,
	#[arg(long, default_value_t = 3420)]
	pub private_port: u16,
	#[arg(long, value_name = "PATH")]
	pub private_certificate: Option<PathBuf>,
	#[arg(long, value_name = "PATH")]
	pub private_key: Option<PathBuf>,

	#[arg(long, default_value = "0.0.0.0")]
	pub public_address: String,
	#[arg(long, default_value_t = 3413)]
	pub public_port: u16,
	#[arg(long, value_name = "PATH")]
	pub public_certificate: Option<PathBuf>,
	#[arg(long, value_name = "PATH")]
	pub public_key: Option<PathBuf>,

	#[arg(long, value_name = "ADDRESS")]
	pub tor_socks_proxy_address: Option<String>,
	#[arg(long, value_name = "PORT")]
	pub tor_socks_proxy_port: Option<u16>,
	#[arg(long, value_name = "BRIDGE")]
	pub tor_bridge: Option<String>,
	#[arg(long, value_name = "PLUGIN")]
	pub tor_transport_plugin: Option<String>,

	/// Accepted and stored for a future embedded chain client; this build's
	/// chain observer is driven through [`mwc_pay_chain::BlockObserver`] by
	/// an external feed, not by a P2P client this daemon dials itself.
	#[arg(long, value_name = "ADDRESS")]
	pub node_dns_seed_address: Option<String>,
	#[arg(long, value_name = "PORT")]
	pub node_dns_seed_port: Option<u16>,

	#[arg(long, default_value_t = 60)]
	pub price_update_interval: u64,
	#[arg(long, default_value_t = 10)]
	pub price_average_length: usize,
	#[arg(long)]
	pub price_disable: bool,
}
