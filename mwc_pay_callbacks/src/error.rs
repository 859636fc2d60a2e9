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
	/// The endpoint responded, but not with a 2xx status.
	#[fail(display = "callback endpoint returned status {}", _0)]
	NotAcknowledged(u16),
	/// The request never got a response at all (DNS, connect, timeout, TLS).
	#[fail(display = "callback delivery failed: {}", _0)]
	Transport(String),
	#[fail(display = "{}", _0)]
	Store(mwc_pay_store::ErrorKind),
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

impl From<reqwest::Error> for Error {
	fn from(err: reqwest::Error) -> Error {
		ErrorKind::Transport(err.to_string()).into()
	}
}
