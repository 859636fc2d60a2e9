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

//! Error types for the bit codec, address codecs and SMAZ compression.

use failure::{Backtrace, Context, Fail};
use std::fmt::{self, Display};

/// Kinds of errors this crate's codecs can raise. Every parse/validation
/// failure is `InvalidInput`; there is no other way to fail here.
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorKind {
	/// Attempted to read or decode past the end of the input.
	#[fail(display = "unexpected end of input")]
	UnexpectedEnd,
	/// A byte fell outside the codec's alphabet.
	#[fail(display = "invalid character in encoded input")]
	InvalidAlphabet,
	/// Base32/Base58 padding or checksum didn't validate.
	#[fail(display = "invalid encoding: {}", _0)]
	InvalidEncoding(String),
}

/// Error wrapping an [`ErrorKind`] with a captured backtrace, matching the
/// `failure`-based `Error`/`ErrorKind` split used across this workspace.
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
	/// Return the error's kind.
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
