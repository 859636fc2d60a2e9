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

#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorKind {
	#[fail(display = "slate parse error: {}", _0)]
	ParseError(String),
	#[fail(display = "participant message is not valid UTF-8")]
	InvalidUtf8,
	#[fail(display = "participant message signature does not verify")]
	InvalidMessageSignature,
	#[fail(display = "unsupported slate purpose")]
	UnexpectedPurpose,
	#[fail(display = "slate network flag does not match this node")]
	WrongNetwork,
	#[fail(display = "slate amount does not match the invoice price")]
	AmountMismatch,
	#[fail(display = "slate kernel features are not Plain")]
	UnsupportedKernelFeatures,
	#[fail(display = "sender payment-proof address is missing")]
	MissingSenderProofAddress,
	#[fail(display = "recipient payment-proof key does not match this invoice")]
	ProofKeyMismatch,
	#[fail(display = "{}", _0)]
	Crypto(mwc_pay_crypto::ErrorKind),
	#[fail(display = "{}", _0)]
	Wallet(mwc_pay_wallet::ErrorKind),
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

impl From<mwc_pay_crypto::Error> for Error {
	fn from(err: mwc_pay_crypto::Error) -> Error {
		ErrorKind::Crypto(err.kind()).into()
	}
}

impl From<mwc_pay_wallet::Error> for Error {
	fn from(err: mwc_pay_wallet::Error) -> Error {
		ErrorKind::Wallet(err.kind()).into()
	}
}

impl From<mwc_pay_util::Error> for Error {
	fn from(err: mwc_pay_util::Error) -> Error {
		ErrorKind::ParseError(err.to_string()).into()
	}
}
