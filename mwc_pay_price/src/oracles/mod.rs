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

pub mod ascendex;
pub mod bitforex;
pub mod coingecko;
pub mod coinstore;
pub mod nonlogs;
pub mod tradeogre;
pub mod whitebit;
pub mod xt;

use crate::oracle::PriceOracle;

/// The full default oracle set, in the order quotes are collected.
pub fn all() -> Vec<Box<dyn PriceOracle>> {
	vec![
		Box::new(coingecko::CoinGecko),
		Box::new(whitebit::WhiteBit),
		Box::new(bitforex::BitForex),
		Box::new(nonlogs::NonLogs),
		Box::new(xt::Xt),
		Box::new(ascendex::AscendEx),
		Box::new(tradeogre::TradeOgre),
		Box::new(coinstore::Coinstore),
	]
}
