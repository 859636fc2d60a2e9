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

//! TradeOgre's ticker doesn't carry a trade timestamp, so the fetch time is
//! used as the quote's timestamp.

use crate::error::{Error, ErrorKind};
use crate::oracle::{PriceOracle, Quote};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

pub struct TradeOgre;

#[async_trait]
impl PriceOracle for TradeOgre {
	fn name(&self) -> &'static str {
		"tradeogre"
	}

	async fn quote(&self, client: &reqwest::Client) -> Result<Quote, Error> {
		let body: serde_json::Value = client
			.get("https://tradeogre.com/api/v1/ticker/USDT-MWC")
			.send()
			.await?
			.json()
			.await?;

		let price = body
			.get("price")
			.and_then(|v| v.as_str())
			.ok_or_else(|| ErrorKind::Malformed("missing price".into()))?;
		let price = Decimal::from_str(price).map_err(|_| ErrorKind::Malformed("price was not decimal".into()))?;
		if price <= Decimal::ZERO {
			return Err(ErrorKind::Malformed("price was not positive".into()).into());
		}

		let timestamp = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.expect("system clock is before the unix epoch")
			.as_secs();
		Ok(Quote { timestamp, price })
	}
}
