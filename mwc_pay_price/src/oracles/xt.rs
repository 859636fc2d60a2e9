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

pub struct Xt;

#[async_trait]
impl PriceOracle for Xt {
	fn name(&self) -> &'static str {
		"xt"
	}

	async fn quote(&self, client: &reqwest::Client) -> Result<Quote, Error> {
		let body: serde_json::Value = client
			.get("https://sapi.xt.com/v4/public/ticker/price")
			.query(&[("symbol", "mwc_usdt")])
			.send()
			.await?
			.json()
			.await?;

		let result = body
			.get("result")
			.and_then(|v| v.as_array())
			.ok_or_else(|| ErrorKind::Malformed("missing result array".into()))?;
		let most_recent = result.first().ok_or_else(|| ErrorKind::Malformed("result array was empty".into()))?;

		let timestamp_ms = most_recent
			.get("t")
			.and_then(|v| v.as_u64())
			.ok_or_else(|| ErrorKind::Malformed("missing t".into()))?;
		let price = most_recent
			.get("p")
			.and_then(|v| v.as_str())
			.ok_or_else(|| ErrorKind::Malformed("missing p".into()))?;
		let price = Decimal::from_str(price).map_err(|_| ErrorKind::Malformed("p was not decimal".into()))?;
		if price <= Decimal::ZERO {
			return Err(ErrorKind::Malformed("p was not positive".into()).into());
		}

		Ok(Quote {
			timestamp: timestamp_ms / 1000,
			price,
		})
	}
}
