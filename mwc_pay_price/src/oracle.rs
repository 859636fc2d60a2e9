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

use crate::error::Error;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// One oracle's quote: when the trade it reflects happened (unix seconds)
/// and the MWC/USDT price at that time.
#[derive(Clone, Copy, Debug)]
pub struct Quote {
	pub timestamp: u64,
	pub price: Decimal,
}

/// A single exchange price feed. Implementations perform their own HTTP
/// round-trip(s) and return the most recent trade they can find; a failed
/// or malformed response is an `Err`, not a zero quote.
#[async_trait]
pub trait PriceOracle: Send + Sync {
	fn name(&self) -> &'static str;
	async fn quote(&self, client: &reqwest::Client) -> Result<Quote, Error>;
}
