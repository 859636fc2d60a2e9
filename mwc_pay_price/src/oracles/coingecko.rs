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

//! CoinGecko quotes MWC only against USD, not USDT directly, so the MWC/USD
//! and USDT/USD pairs are fetched together and divided.

use crate::error::{Error, ErrorKind};
use crate::oracle::{PriceOracle, Quote};
use async_trait::async_trait;
use rust_decimal::Decimal;

pub struct CoinGecko;

#[async_trait]
impl PriceOracle for CoinGecko {
	fn name(&self) -> &'static str {
		"coingecko"
	}

	async fn quote(&self, client: &reqwest::Client) -> Result<Quote, Error> {
		let body: serde_json::Value = client
			.get("https://api.coingecko.com/api/v3/simple/price")
			.query(&[
				("ids", "mimblewimblecoin,tether"),
				("vs_currencies", "usd"),
				("include_last_updated_at", "true"),
			])
			.send()
			.await?
			.json()
			.await?;

		let mwc = body
			.get("mimblewimblecoin")
			.ok_or_else(|| ErrorKind::Malformed("missing mimblewimblecoin entry".into()))?;
		let usdt = body.get("tether").ok_or_else(|| ErrorKind::Malformed("missing tether entry".into()))?;

		let timestamp = mwc
			.get("last_updated_at")
			.and_then(|v| v.as_u64())
			.ok_or_else(|| ErrorKind::Malformed("missing last_updated_at".into()))?;
		let mwc_usd = decimal_field(mwc, "usd")?;
		let usdt_usd = decimal_field(usdt, "usd")?;
		if usdt_usd.is_zero() {
			return Err(ErrorKind::Malformed("tether price was zero".into()).into());
		}

		Ok(Quote {
			timestamp,
			price: mwc_usd / usdt_usd,
		})
	}
}

fn decimal_field(value: &serde_json::Value, field: &str) -> Result<Decimal, Error> {
	let raw = value.get(field).ok_or_else(|| ErrorKind::Malformed(format!("missing {}", field)))?;
	let price = raw
		.as_f64()
		.ok_or_else(|| ErrorKind::Malformed(format!("{} was not numeric", field)))?;
	if !price.is_finite() || price <= 0.0 {
		return Err(ErrorKind::Malformed(format!("{} was not a positive finite number", field)).into());
	}
	Decimal::try_from(price).map_err(|_| ErrorKind::Malformed(format!("{} could not be represented exactly", field)).into())
}
