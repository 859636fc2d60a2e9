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

pub struct AscendEx;

#[async_trait]
impl PriceOracle for AscendEx {
	fn name(&self) -> &'static str {
		"ascendex"
	}

	async fn quote(&self, client: &reqwest::Client) -> Result<Quote, Error> {
		let body: serde_json::Value = client
			.get("https://ascendex.com/api/pro/v1/ticker")
			.query(&[("symbol", "MWC/USDT")])
			.send()
			.await?
			.json()
			.await?;

		let data = body.get("data").ok_or_else(|| ErrorKind::Malformed("missing data".into()))?;

		let timestamp_ms = data
			.get("ts")
			.and_then(|v| v.as_u64())
			.ok_or_else(|| ErrorKind::Malformed("missing ts".into()))?;
		let close = data
			.get("close")
			.and_then(|v| v.as_str())
			.ok_or_else(|| ErrorKind::Malformed("missing close".into()))?;
		let price = Decimal::from_str(close).map_err(|_| ErrorKind::Malformed("close was not decimal".into()))?;
		if price <= Decimal::ZERO {
			return Err(ErrorKind::Malformed("close was not positive".into()).into());
		}

		Ok(Quote {
			timestamp: timestamp_ms / 1000,
			price,
		})
	}
}
