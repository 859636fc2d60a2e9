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

//! Crypto error kinds. These all correspond to the `Crypto` kind of §7;
//! every one of them is a hard failure, never retried.

use failure::{Backtrace, Context, Fail};
use std::fmt::{self, Display};

#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorKind {
	#[fail(display = "scalar is zero or not less than the curve order")]
	InvalidScalar,
	#[fail(display = "not a valid curve point")]
	InvalidPublicKey,
	#[fail(display = "BIP32-style child key derivation failed")]
	DerivationFailed,
	#[fail(display = "signing operation failed")]
	SigningFailed,
	#[fail(display = "signature did not verify")]
	VerificationFailed,
	#[fail(display = "shared key is all-zero")]
	DegenerateSharedKey,
	#[fail(display = "entropy exhausted while sampling a nonce")]
	EntropyExhausted,
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
