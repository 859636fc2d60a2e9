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

pub struct BitForex;

#[async_trait]
impl PriceOracle for BitForex {
	fn name(&self) -> &'static str {
		"bitforex"
	}

	async fn quote(&self, client: &reqwest::Client) -> Result<Quote, Error> {
		let body: serde_json::Value = client
			.get("https://api.bitforex.com/api/v1/market/ticker")
			.query(&[("symbol", "coin-usdt-mwc")])
			.send()
			.await?
			.json()
			.await?;

		if !body.get("success").and_then(|v| v.as_bool()).unwrap_or(false) {
			return Err(ErrorKind::Malformed("response reported failure".into()).into());
		}
		let data = body.get("data").ok_or_else(|| ErrorKind::Malformed("missing data".into()))?;

		let timestamp_ms = data
			.get("date")
			.and_then(|v| v.as_u64())
			.ok_or_else(|| ErrorKind::Malformed("missing date".into()))?;

		let last = data.get("last").ok_or_else(|| ErrorKind::Malformed("missing last".into()))?;
		let last_f64 = last.as_f64().ok_or_else(|| ErrorKind::Malformed("last was not numeric".into()))?;
		if !last_f64.is_finite() || last_f64 <= 0.0 {
			return Err(ErrorKind::Malformed("last was not a positive finite number".into()).into());
		}
		let price = match last.as_str() {
			Some(text) => Decimal::from_str(text).map_err(|_| ErrorKind::Malformed("last was not decimal".into()))?,
			None => Decimal::try_from(last_f64).map_err(|_| ErrorKind::Malformed("last could not be represented exactly".into()))?,
		};

		Ok(Quote {
			timestamp: timestamp_ms / 1000,
			price,
		})
	}
}
