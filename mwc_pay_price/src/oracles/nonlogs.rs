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

use crate::error::{Error, ErrorKind};
use crate::oracle::{PriceOracle, Quote};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::str::FromStr;

pub struct NonLogs;

#[async_trait]
impl PriceOracle for NonLogs {
	fn name(&self) -> &'static str {
		"nonlogs"
	}

	async fn quote(&self, client: &reqwest::Client) -> Result<Quote, Error> {
		let body: serde_json::Value = client
			.get("https://api.nonlogs.io/order/orderbook/MWC-USDT")
			.query(&[("depth", "0")])
			.send()
			.await?
			.json()
			.await?;

		let last_trade_time = body
			.get("last_trade_time")
			.and_then(|v| v.as_str())
			.ok_or_else(|| ErrorKind::Malformed("missing last_trade_time".into()))?;
		let last_trade_price = body
			.get("last_trade_price")
			.and_then(|v| v.as_str())
			.ok_or_else(|| ErrorKind::Malformed("missing last_trade_price".into()))?;

		let timestamp = NaiveDateTime::parse_from_str(last_trade_time, "%Y-%m-%dT%H:%M:%S%.f")
			.map_err(|_| ErrorKind::Malformed("last_trade_time was not a parseable timestamp".into()))?
			.and_utc()
			.timestamp();
		let timestamp = u64::try_from(timestamp).map_err(|_| ErrorKind::Malformed("last_trade_time was out of range".into()))?;

		let price = Decimal::from_str(last_trade_price)
			.map_err(|_| ErrorKind::Malformed("last_trade_price was not decimal".into()))?;
		if price <= Decimal::ZERO {
			return Err(ErrorKind::Malformed("last_trade_price was not positive".into()).into());
		}

		Ok(Quote { timestamp, price })
	}
}
