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
use rust_decimal::Decimal;
use std::str::FromStr;

pub struct Coinstore;

#[async_trait]
impl PriceOracle for Coinstore {
	fn name(&self) -> &'static str {
		"coinstore"
	}

	async fn quote(&self, client: &reqwest::Client) -> Result<Quote, Error> {
		let body: serde_json::Value = client
			.get("https://api.coinstore.com/api/v1/market/tickers")
			.query(&[("symbol", "MWCUSDT")])
			.send()
			.await?
			.json()
			.await?;

		let data = body
			.get("data")
			.and_then(|v| v.as_array())
			.ok_or_else(|| ErrorKind::Malformed("missing data array".into()))?;
		let entry = data.first().ok_or_else(|| ErrorKind::Malformed("data array was empty".into()))?;

		let timestamp_ms = entry
			.get("timestamp")
			.and_then(|v| v.as_u64())
			.ok_or_else(|| ErrorKind::Malformed("missing timestamp".into()))?;
		let last = entry.get("close").or_else(|| entry.get("last"));
		let last = last.and_then(|v| v.as_str()).ok_or_else(|| ErrorKind::Malformed("missing close/last".into()))?;
		let price = Decimal::from_str(last).map_err(|_| ErrorKind::Malformed("close/last was not decimal".into()))?;
		if price <= Decimal::ZERO {
			return Err(ErrorKind::Malformed("close/last was not positive".into()).into());
		}

		Ok(Quote {
			timestamp: timestamp_ms / 1000,
			price,
		})
	}
}
