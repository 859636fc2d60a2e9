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

pub mod aggregator;
pub mod error;
pub mod oracle;
pub mod oracles;

pub use aggregator::{Network, PriceAggregator};
pub use error::{Error, ErrorKind};
pub use oracle::{PriceOracle, Quote};

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use rust_decimal::Decimal;
	use std::sync::atomic::{AtomicU64, Ordering};
	use std::time::Duration;

	struct FixedOracle {
		name: &'static str,
		timestamp: u64,
		price: &'static str,
	}

	#[async_trait]
	impl PriceOracle for FixedOracle {
		fn name(&self) -> &'static str {
			self.name
		}

		async fn quote(&self, _client: &reqwest::Client) -> Result<Quote, Error> {
			Ok(Quote {
				timestamp: self.timestamp,
				price: self.price.parse().unwrap(),
			})
		}
	}

	struct FailingOracle;

	#[async_trait]
	impl PriceOracle for FailingOracle {
		fn name(&self) -> &'static str {
			"failing"
		}

		async fn quote(&self, _client: &reqwest::Client) -> Result<Quote, Error> {
			Err(ErrorKind::Transport("connection refused".into()).into())
		}
	}

	struct CountingOracle {
		calls: AtomicU64,
	}

	#[async_trait]
	impl PriceOracle for CountingOracle {
		fn name(&self) -> &'static str {
			"counting"
		}

		async fn quote(&self, _client: &reqwest::Client) -> Result<Quote, Error> {
			let call = self.calls.fetch_add(1, Ordering::SeqCst);
			Ok(Quote {
				timestamp: 1_000 + call,
				price: Decimal::from(call + 1),
			})
		}
	}

	#[tokio::test]
	async fn a_failing_oracle_does_not_block_the_round() {
		let aggregator = PriceAggregator::new(
			vec![
				Box::new(FailingOracle),
				Box::new(FixedOracle {
					name: "a",
					timestamp: 1_000,
					price: "5.0",
				}),
			],
			reqwest::Client::new(),
			Duration::from_secs(300),
			3,
			Network::Main,
		);

		aggregator.poll_once().await.unwrap();
		assert_eq!(aggregator.current_price(), Some(Decimal::from(5)));
	}

	#[tokio::test]
	async fn zero_price_is_rejected_on_mainnet_but_allowed_on_testnet() {
		let oracles = || {
			vec![Box::new(FixedOracle {
				name: "zero",
				timestamp: 1_000,
				price: "0",
			}) as Box<dyn PriceOracle>]
		};

		let mainnet = PriceAggregator::new(oracles(), reqwest::Client::new(), Duration::from_secs(300), 3, Network::Main);
		assert!(mainnet.poll_once().await.is_err());
		assert_eq!(mainnet.current_price(), None);

		let testnet = PriceAggregator::new(oracles(), reqwest::Client::new(), Duration::from_secs(300), 3, Network::Test);
		testnet.poll_once().await.unwrap();
		assert_eq!(testnet.current_price(), Some(Decimal::ZERO));
	}

	#[tokio::test]
	async fn the_window_mean_follows_successive_rounds() {
		let aggregator = PriceAggregator::new(
			vec![Box::new(CountingOracle { calls: AtomicU64::new(0) })],
			reqwest::Client::new(),
			Duration::from_secs(300),
			2,
			Network::Main,
		);

		aggregator.poll_once().await.unwrap();
		assert_eq!(aggregator.current_price(), Some(Decimal::from(1)));

		aggregator.poll_once().await.unwrap();
		assert_eq!(aggregator.current_price(), Some(Decimal::new(15, 1)));

		aggregator.poll_once().await.unwrap();
		// window now holds rounds 2 and 3 (round 1 evicted): prices 2 and 3.
		assert_eq!(aggregator.current_price(), Some(Decimal::new(25, 1)));
	}
}
