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

use failure::{Backtrace, Context, Fail};
use std::fmt::{self, Display};

#[derive(Clone, Debug, Fail)]
pub enum ErrorKind {
	#[fail(display = "malformed request: {}", _0)]
	Malformed(String),
	#[fail(display = "{}", _0)]
	InvalidParams(String),
	#[fail(display = "no such payment")]
	NotFound,
	#[fail(display = "price collector is disabled")]
	PriceUnavailable,
	#[fail(display = "received callback was not acknowledged: {}", _0)]
	ReceivedCallbackFailed(String),
	#[fail(display = "{}", _0)]
	Store(mwc_pay_store::ErrorKind),
	#[fail(display = "{}", _0)]
	Wallet(mwc_pay_wallet::ErrorKind),
	#[fail(display = "{}", _0)]
	Slate(mwc_pay_slate::ErrorKind),
	#[fail(display = "{}", _0)]
	Slatepack(mwc_pay_slatepack::ErrorKind),
}

#[derive(Debug)]
pub struct Error {
	inner: Context<ErrorKind>,
}

impl Fail for Error {
	fn cause(&self) -> Option<&dyn Fail> {
		self.inner.cause()
	}

	fn backtrace(&self) -> Option<&Backtrace> {
		self.inner.backtrace()
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.inner, f)
	}
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		self.inner.get_context().clone()
	}
}

impl From<ErrorKind> for Error {
	fn from(kind: ErrorKind) -> Error {
		Error {
			inner: Context::new(kind),
		}
	}
}

impl From<Context<ErrorKind>> for Error {
	fn from(inner: Context<ErrorKind>) -> Error {
		Error { inner }
	}
}

impl From<mwc_pay_store::Error> for Error {
	fn from(err: mwc_pay_store::Error) -> Error {
		ErrorKind::Store(err.kind()).into()
	}
}

impl From<mwc_pay_wallet::Error> for Error {
	fn from(err: mwc_pay_wallet::Error) -> Error {
		ErrorKind::Wallet(err.kind()).into()
	}
}

impl From<mwc_pay_slate::Error> for Error {
	fn from(err: mwc_pay_slate::Error) -> Error {
		ErrorKind::Slate(err.kind()).into()
	}
}

impl From<mwc_pay_slatepack::Error> for Error {
	fn from(err: mwc_pay_slatepack::Error) -> Error {
		ErrorKind::Slatepack(err.kind()).into()
	}
}

impl From<reqwest::Error> for Error {
	fn from(err: reqwest::Error) -> Error {
		ErrorKind::ReceivedCallbackFailed(err.to_string()).into()
	}
}
