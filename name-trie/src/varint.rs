// Copyright 2026 Parity Technologies
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

//! Canonical variable-length integers and length-prefixed byte strings.
//!
//! Integers use the compact size format: a first byte below `0xfd` is the
//! value, `0xfd` announces a little endian `u16` and `0xfe` a little endian
//! `u32`. Every value must use its shortest form and `0xff` (the `u64` form)
//! is not supported.

use crate::{
	rstd::{borrow::Cow, vec::Vec},
	DecodeError,
};

const U16_MARKER: u8 = 0xfd;
const U32_MARKER: u8 = 0xfe;
const U64_MARKER: u8 = 0xff;

/// Read a varint at the start of `data`. Returns the number of bytes it
/// occupies and its value.
pub fn read_varint(data: &[u8]) -> Result<(usize, u32), DecodeError> {
	let first = *data.first().ok_or(DecodeError::Encoding("empty varint"))?;
	match first {
		U64_MARKER => Err(DecodeError::Encoding("unsupported 64 bit varint")),
		U32_MARKER => {
			let bytes = data.get(1..5).ok_or(DecodeError::Encoding("truncated varint"))?;
			let value = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
			if value <= 0xffff {
				return Err(DecodeError::Encoding("non-canonical varint"))
			}
			Ok((5, value))
		},
		U16_MARKER => {
			let bytes = data.get(1..3).ok_or(DecodeError::Encoding("truncated varint"))?;
			let value = u16::from_le_bytes([bytes[0], bytes[1]]);
			if value < U16_MARKER as u16 {
				return Err(DecodeError::Encoding("non-canonical varint"))
			}
			Ok((3, value as u32))
		},
		value => Ok((1, value as u32)),
	}
}

/// Read a varint length prefix followed by that many bytes. Returns the size
/// of the prefix and the payload.
///
/// With `borrow` set, the payload is a view into `data`; use it when the bytes
/// are about to be re-parsed into a fresh allocation anyway. Otherwise the
/// payload is copied into an owned buffer.
pub fn read_varbytes<'a>(
	data: &'a [u8],
	borrow: bool,
) -> Result<(usize, Cow<'a, [u8]>), DecodeError> {
	let (size, len) = read_varint(data)?;
	let payload = data[size..]
		.get(..len as usize)
		.ok_or(DecodeError::Encoding("truncated byte string"))?;

	if borrow {
		return Ok((size, Cow::Borrowed(payload)))
	}

	let mut owned = Vec::new();
	owned.try_reserve_exact(payload.len()).map_err(|_| DecodeError::OutOfMemory)?;
	owned.extend_from_slice(payload);
	Ok((size, Cow::Owned(owned)))
}
