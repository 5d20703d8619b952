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

//! Nibble oriented methods.
//!
//! Key paths are handled in expanded form: one nibble per byte, followed by a
//! terminator nibble. Short node keys travel in hex-prefix (compact) form on
//! the wire and are expanded by [`decompress`].

use crate::DecodeError;
use smallvec::SmallVec;

/// Number of child for a branch (trie radix).
pub const NIBBLE_LENGTH: usize = 16;

/// Number of slots of a full node: one per nibble plus the terminator slot.
pub const BRANCH_WIDTH: usize = NIBBLE_LENGTH + 1;

/// Nibble appended after the last nibble of a path. Selects the value slot
/// of a full node and is never a valid radix index.
pub const NIBBLE_TERMINATOR: u8 = 16;

/// Path length of a 32 byte key, terminator included.
pub const KEY_NIBBLES: usize = 32 * 2 + 1;

/// Hex-prefix header flag: the nibble count is odd.
const ODD_FLAG: u8 = 0b01;

/// Hex-prefix header flag: the path ends with the terminator.
const TERMINATOR_FLAG: u8 = 0b10;

/// Expanded nibble path, one nibble per byte. Inline storage covers a full key
/// path.
pub type NibbleVec = SmallVec<[u8; 72]>;

/// Expand `data` to its nibbles, high half first, and append the terminator.
///
/// The result always holds `2 * data.len() + 1` nibbles.
pub fn to_nibbles(data: &[u8]) -> Result<NibbleVec, DecodeError> {
	let mut nibbles = NibbleVec::new();
	nibbles.try_reserve_exact(data.len() * 2 + 1).map_err(|_| DecodeError::OutOfMemory)?;
	for b in data {
		nibbles.push(b >> 4);
		nibbles.push(b & 0x0f);
	}
	nibbles.push(NIBBLE_TERMINATOR);
	Ok(nibbles)
}

/// Undo the hex-prefix encoding of a short node key.
///
/// The first nibble is a header: bit 0 means the path has an odd number of
/// nibbles (the header then occupies one nibble, else two), bit 1 means the
/// path ends with the terminator, which is then kept in the output.
pub fn decompress(data: &[u8]) -> Result<NibbleVec, DecodeError> {
	if data.is_empty() {
		return Ok(NibbleVec::new())
	}

	let mut nibbles = to_nibbles(data)?;
	let header = nibbles[0];
	let start = if header & ODD_FLAG != 0 { 1 } else { 2 };
	let mut end = nibbles.len() - 1;
	if header & TERMINATOR_FLAG != 0 {
		end += 1;
	}

	nibbles.truncate(end);
	nibbles.drain(..start);
	Ok(nibbles)
}
