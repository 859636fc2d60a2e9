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

//! Polls every registered oracle on a fixed interval, combines their quotes
//! into a single weighted price, and folds that into a rolling window whose
//! mean is what the private API's `get_price` reports.

use crate::error::{Error, ErrorKind};
use crate::oracle::{PriceOracle, Quote};
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::sync::RwLock;
use std::time::Duration;

/// Which chain this daemon is paying out on. Only affects whether a
/// zero-valued quote is treated as a hard error.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Network {
	Main,
	Test,
}

impl Network {
	fn allows_zero_price(self) -> bool {
		matches!(self, Network::Test)
	}
}

pub struct PriceAggregator {
	oracles: Vec<Box<dyn PriceOracle>>,
	client: reqwest::Client,
	update_interval: Duration,
	average_length: usize,
	network: Network,
	window: RwLock<VecDeque<Decimal>>,
}

impl PriceAggregator {
	pub fn new(
		oracles: Vec<Box<dyn PriceOracle>>,
		client: reqwest::Client,
		update_interval: Duration,
		average_length: usize,
		network: Network,
	) -> PriceAggregator {
		PriceAggregator {
			oracles,
			client,
			update_interval,
			average_length,
			network,
			window: RwLock::new(VecDeque::with_capacity(average_length)),
		}
	}

	/// The current published price: the arithmetic mean of the rolling
	/// window, or `None` before the first successful round.
	pub fn current_price(&self) -> Option<Decimal> {
		let window = self.window.read().unwrap_or_else(|poisoned| poisoned.into_inner());
		if window.is_empty() {
			return None;
		}
		Some(window.iter().sum::<Decimal>() / Decimal::from(window.len()))
	}

	/// Runs until cancelled, polling every oracle and folding the round's
	/// result into the window at `update_interval` cadence.
	pub async fn run(&self) {
		loop {
			if let Err(err) = self.poll_once().await {
				log::warn!("price round produced no update: {}", err);
			}
			tokio::time::sleep(self.update_interval).await;
		}
	}

	/// One full round: gather quotes, compute the weighted average, and
	/// push it into the rolling window.
	pub async fn poll_once(&self) -> Result<(), Error> {
		let mut quotes = Vec::new();
		for oracle in &self.oracles {
			match oracle.quote(&self.client).await {
				Ok(quote) => {
					if quote.timestamp == 0 {
						continue;
					}
					if quote.price.is_zero() && !self.network.allows_zero_price() {
						log::warn!("{} returned a zero price, dropping", oracle.name());
						continue;
					}
					quotes.push(quote);
				}
				Err(err) => log::warn!("{} quote failed: {}", oracle.name(), err),
			}
		}

		let round = weighted_average(&quotes, self.update_interval)?;

		let mut window = self.window.write().unwrap_or_else(|poisoned| poisoned.into_inner());
		window.push_back(round);
		while window.len() > self.average_length {
			window.pop_front();
		}
		Ok(())
	}
}

/// Weight each quote by how far inside the freshness window it falls
/// (`timestamp - threshold`), then average. Quotes at or before the
/// threshold carry zero or negative weight and are excluded entirely.
fn weighted_average(quotes: &[Quote], update_interval: Duration) -> Result<Decimal, Error> {
	let newest_ts = quotes.iter().map(|q| q.timestamp).max().ok_or(ErrorKind::NoQuotes)?;
	let threshold = newest_ts.saturating_sub(update_interval.as_secs());

	let mut weighted_sum = Decimal::ZERO;
	let mut total_weight = Decimal::ZERO;
	for quote in quotes {
		if quote.timestamp <= threshold {
			continue;
		}
		let weight = Decimal::from(quote.timestamp - threshold);
		weighted_sum += quote.price * weight;
		total_weight += weight;
	}

	if total_weight <= Decimal::ZERO {
		return Err(ErrorKind::NonPositiveWeight.into());
	}
	Ok(weighted_sum / total_weight)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn quote(timestamp: u64, price: &str) -> Quote {
		Quote {
			timestamp,
			price: price.parse().unwrap(),
		}
	}

	#[test]
	fn weighted_average_favors_the_freshest_quote() {
		let quotes = vec![quote(1_000, "1.0"), quote(1_100, "2.0")];
		let average = weighted_average(&quotes, Duration::from_secs(200)).unwrap();
		// threshold = 900; weights are 100 and 200.
		assert_eq!(average, Decimal::from(1) * Decimal::from(100) / Decimal::from(300) + Decimal::from(2) * Decimal::from(200) / Decimal::from(300));
	}

	#[test]
	fn stale_quotes_are_excluded_entirely() {
		let quotes = vec![quote(500, "9.0"), quote(1_000, "1.0")];
		let average = weighted_average(&quotes, Duration::from_secs(100)).unwrap();
		assert_eq!(average, Decimal::from(1));
	}

	#[test]
	fn empty_round_is_an_error() {
		assert!(weighted_average(&[], Duration::from_secs(60)).is_err());
	}

	#[test]
	fn window_mean_drops_the_oldest_entry_once_full() {
		let aggregator = PriceAggregator::new(vec![], reqwest::Client::new(), Duration::from_secs(60), 2, Network::Main);
		{
			let mut window = aggregator.window.write().unwrap();
			window.push_back(Decimal::from(1));
			window.push_back(Decimal::from(3));
		}
		assert_eq!(aggregator.current_price(), Some(Decimal::from(2)));
	}
}
