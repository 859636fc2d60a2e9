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

//! The daemon's two HTTP surfaces: the JSON-RPC 2.0 foreign API a sender's
//! wallet talks to (§4.J), and the GET-only private control API a
//! merchant's own backend talks to (§4.K).

pub mod error;
pub mod foreign;
pub mod jsonrpc;
pub mod private;
pub mod slug;
pub mod state;

pub use error::{Error, ErrorKind};
pub use state::AppState;

use gotham::middleware::state::StateMiddleware;
use gotham::pipeline::{new_pipeline, single::single_pipeline};
use gotham::router::builder::{build_router, DefineSingleRoute, DrawRoutes};
use gotham::router::Router;

/// The public-facing router: only the JSON-RPC foreign API a sender's
/// wallet talks to. This is what `--public_address` binds.
pub fn public_router(app_state: AppState) -> Router {
	let middleware = StateMiddleware::new(app_state);
	let pipeline = new_pipeline().add(middleware).build();
	let (chain, pipelines) = single_pipeline(pipeline);

	build_router(chain, pipelines, |route| {
		route
			.post("/:url/v2/foreign")
			.with_path_extractor::<foreign::UrlExtractor>()
			.to(foreign::handle);
	})
}

/// The private control router a merchant's own backend talks to. This is
/// what `--private_address` binds and must never be exposed publicly.
pub fn private_router(app_state: AppState) -> Router {
	let middleware = StateMiddleware::new(app_state);
	let pipeline = new_pipeline().add(middleware).build();
	let (chain, pipelines) = single_pipeline(pipeline);

	build_router(chain, pipelines, |route| {
		route
			.get("/create_payment")
			.with_query_string_extractor::<private::CreatePaymentQuery>()
			.to(private::create_payment);

		route
			.get("/get_payment_info")
			.with_query_string_extractor::<private::PaymentInfoQuery>()
			.to(private::get_payment_info);

		route.get("/get_price").to(private::get_price);
	})
}

/// Serve `router` on `addr` until the future is dropped (the daemon's
/// supervisor cancels it on shutdown).
pub async fn run(addr: std::net::SocketAddr, router: Router) -> std::io::Result<()> {
	gotham::plain::init_server(addr, router).await
}

#[cfg(test)]
mod tests {
	use super::*;
	use mwc_pay_wallet::Wallet;
	use std::sync::Arc;

	fn open_temp() -> (tempfile::TempDir, AppState) {
		let dir = tempfile::tempdir().unwrap();
		let store = mwc_pay_store::PaymentStore::open(dir.path()).unwrap();
		let (wallet, _) = Wallet::create(b"test-pass").unwrap();
		(dir, AppState::new(Arc::new(store), Arc::new(wallet), None, true))
	}

	#[test]
	fn routers_build_without_panicking() {
		let (_dir, app_state) = open_temp();
		let _public = public_router(app_state.clone());
		let _private = private_router(app_state);
	}
}
