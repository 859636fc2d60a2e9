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

//! WhiteBIT has no direct MWC/USDT market, so the MWC/BTC and BTC/USDT
//! trade feeds are fetched and multiplied together.

use crate::error::{Error, ErrorKind};
use crate::oracle::{PriceOracle, Quote};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::str::FromStr;

pub struct WhiteBit;

#[async_trait]
impl PriceOracle for WhiteBit {
	fn name(&self) -> &'static str {
		"whitebit"
	}

	async fn quote(&self, client: &reqwest::Client) -> Result<Quote, Error> {
		let mwc_btc = most_recent_trade(client, "MWC_BTC").await?;
		let btc_usdt = most_recent_trade(client, "BTC_USDT").await?;
		Ok(Quote {
			timestamp: mwc_btc.0,
			price: mwc_btc.1 * btc_usdt.1,
		})
	}
}

async fn most_recent_trade(client: &reqwest::Client, market: &str) -> Result<(u64, Decimal), Error> {
	let url = format!("https://whitebit.com/api/v4/public/trades/{}", market);
	let body: serde_json::Value = client.get(&url).send().await?.json().await?;
	let trades = body.as_array().ok_or_else(|| ErrorKind::Malformed(format!("{} response was not an array", market)))?;
	let most_recent = trades
		.first()
		.ok_or_else(|| ErrorKind::Malformed(format!("{} trade history was empty", market)))?;

	let timestamp = most_recent
		.get("trade_timestamp")
		.and_then(|v| v.as_u64())
		.ok_or_else(|| ErrorKind::Malformed(format!("{} missing trade_timestamp", market)))?;
	let price = most_recent
		.get("price")
		.and_then(|v| v.as_str())
		.ok_or_else(|| ErrorKind::Malformed(format!("{} missing price", market)))?;
	let price = Decimal::from_str(price).map_err(|_| ErrorKind::Malformed(format!("{} price was not decimal", market)))?;
	if price <= Decimal::ZERO {
		return Err(ErrorKind::Malformed(format!("{} price was not positive", market)).into());
	}
	Ok((timestamp, price))
}
