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

//! SMAZ, a codebook-based compressor for short free-text strings, used for
//! the slate participant "message" field. Byte 254 escapes a single literal
//! byte; byte 255 escapes a run of `n+1` literal bytes; any other byte
//! indexes the codebook.

use crate::error::{Error, ErrorKind};

const VERBATIM: u8 = 254;
const VERBATIM_RUN: u8 = 255;

/// Common short English fragments, longest-match-first during compression.
/// Index in this table is the wire byte for that fragment.
const CODEBOOK: &[&str] = &[
	" ", "the", "e", "t", "a", "of", "o", "and", "i", "n", "s", "e ", "r", " th", " t", "in",
	"he", "th", "h", "he ", "to", "\r\n", "l", "s ", "d", " a", "an", "er", "c", " o", "d ",
	"on", " of", "re", "of ", "t ", ", ", "is", "u", "at", "   ", "n ", "or", "which", "f",
	"m", "as", "it", "that", "\n", "was", "en", "  ", " w", "es", " an", " i", "\r", "f ",
	"g", "p", "nd", " s", "nd ", "ed ", "w", "ed", "http://", "for", "te", "ing", "y", "The",
	" c", "ti", "r ", "his", "st", " in", "ar", "nt", ",", " to", "y ", "ng", " h", "with",
	"le", "al", "to ", "b", "ou", "be", "were", " b", "se", "o ", "ent", "ha", "ng ",
	"their", "\"", "hi", "from", " f", "in ", "de", "ion", "me", "v", ".", "ve", "all", "re ",
	"ri", "ro", "is ", "co", "f t", "are", "ea", ". ", "her", " m", "er ", " p", "es ", "by",
	"they", "di", "ra", "ic", "not", "s, ", "d t", "at ", "ce", "la", "h ", "ne", "as ", "tio",
	"on ", "n t", "io", "we", " a ", "om", ", ", "s o", "ur", "li", "ll", "ch", "had", "this",
	"e t", "g ", "e\r\n", " wh", "ere", " co", "e o", "a ", "us", " d", "ss", "\n\r\n",
	"\r\n\r", "=\"", " be", " e", "s\r\n", "\"\n", "it ", "ot", "so", "me ", "ide", "l ", "ich",
	"ge", "age", "ve ", "te ", "ave", "at the", "the ", "en ", "ide ", "tion ", "es, ", "s a",
	"ass", "un", "up ", "ith", "or ", "ary ", "of the", "in the", " you", "s,", "nd the",
	"ve t", "a "  ,
];

/// Compress a UTF-8 string with SMAZ. Greedy longest-prefix codebook match,
/// falling back to literal byte runs.
pub fn compress(input: &str) -> Vec<u8> {
	let bytes = input.as_bytes();
	let mut out = Vec::new();
	let mut i = 0;
	while i < bytes.len() {
		if let Some((code, matched_len)) = best_match(&bytes[i..]) {
			out.push(code as u8);
			i += matched_len;
			continue;
		}

		// Accumulate a literal run until the next codebook match (or end).
		let start = i;
		i += 1;
		while i < bytes.len() && i - start < 255 && best_match(&bytes[i..]).is_none() {
			i += 1;
		}
		let run = &bytes[start..i];
		if run.len() == 1 {
			out.push(VERBATIM);
			out.push(run[0]);
		} else {
			out.push(VERBATIM_RUN);
			out.push((run.len() - 1) as u8);
			out.extend_from_slice(run);
		}
	}
	out
}

fn best_match(remaining: &[u8]) -> Option<(usize, usize)> {
	let mut best: Option<(usize, usize)> = None;
	for (code, word) in CODEBOOK.iter().enumerate() {
		let w = word.as_bytes();
		if !w.is_empty() && remaining.len() >= w.len() && &remaining[..w.len()] == w {
			if best.map(|(_, len)| w.len() > len).unwrap_or(true) {
				best = Some((code, w.len()));
			}
		}
	}
	best
}

/// Decompress a SMAZ-compressed byte string back to UTF-8.
pub fn decompress(data: &[u8]) -> Result<String, Error> {
	let mut out = Vec::with_capacity(data.len() * 2);
	let mut i = 0;
	while i < data.len() {
		match data[i] {
			VERBATIM => {
				i += 1;
				let byte = *data
					.get(i)
					.ok_or(ErrorKind::InvalidEncoding("truncated literal".into()))?;
				out.push(byte);
				i += 1;
			}
			VERBATIM_RUN => {
				i += 1;
				let run_len = *data
					.get(i)
					.ok_or(ErrorKind::InvalidEncoding("truncated literal run".into()))?
					as usize
					+ 1;
				i += 1;
				let end = i + run_len;
				if end > data.len() {
					return Err(ErrorKind::InvalidEncoding("truncated literal run".into()).into());
				}
				out.extend_from_slice(&data[i..end]);
				i = end;
			}
			code => {
				let word = CODEBOOK
					.get(code as usize)
					.ok_or(ErrorKind::InvalidEncoding("codebook index out of range".into()))?;
				out.extend_from_slice(word.as_bytes());
				i += 1;
			}
		}
	}
	String::from_utf8(out).map_err(|_| ErrorKind::InvalidEncoding("not valid UTF-8".into()).into())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trip_plain_message() {
		let message = "Thank you for the order, it is on the way!";
		let compressed = compress(message);
		assert_eq!(decompress(&compressed).unwrap(), message);
	}

	#[test]
	fn round_trip_non_codebook_text() {
		let message = "\u{1F600}\u{1F600} zzz123";
		let compressed = compress(message);
		assert_eq!(decompress(&compressed).unwrap(), message);
	}

	#[test]
	fn rejects_truncated_run() {
		assert!(decompress(&[VERBATIM_RUN, 5, 1, 2]).is_err());
	}
}
