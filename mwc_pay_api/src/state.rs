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

//! The shared context every handler reaches for, injected into gotham's
//! request `State` by a `StateMiddleware`.

use gotham_derive::StateData;
use mwc_pay_price::PriceAggregator;
use mwc_pay_store::PaymentStore;
use mwc_pay_wallet::Wallet;
use std::sync::Arc;

#[derive(Clone, StateData)]
pub struct AppState {
	pub store: Arc<PaymentStore>,
	pub wallet: Arc<Wallet>,
	pub price: Option<Arc<PriceAggregator>>,
	pub floonet: bool,
}

impl AppState {
	pub fn new(store: Arc<PaymentStore>, wallet: Arc<Wallet>, price: Option<Arc<PriceAggregator>>, floonet: bool) -> AppState {
		AppState {
			store,
			wallet,
			price,
			floonet,
		}
	}
}
