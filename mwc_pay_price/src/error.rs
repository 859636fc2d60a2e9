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
	#[fail(display = "oracle request failed: {}", _0)]
	Transport(String),
	/// The oracle replied but the payload didn't have the shape this oracle
	/// expects.
	#[fail(display = "oracle response malformed: {}", _0)]
	Malformed(String),
	/// Every oracle in the round either failed outright or had its quote
	/// aged out by the freshness threshold.
	#[fail(display = "no usable price quotes this round")]
	NoQuotes,
	/// The round's combined freshness weight came out zero or negative.
	#[fail(display = "combined oracle weight was non-positive")]
	NonPositiveWeight,
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

impl From<reqwest::Error> for Error {
	fn from(err: reqwest::Error) -> Error {
		ErrorKind::Transport(err.to_string()).into()
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Error {
		ErrorKind::Malformed(err.to_string()).into()
	}
}
