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

//! Decoding of serialized trie nodes.
//!
//! A node starts with a tag byte:
//!
//! - `0`: null node, no payload.
//! - `1`: hash node, followed by a digest of `Hasher::LENGTH` bytes.
//! - `2`: short node, followed by a compact encoded key (varint prefixed) and
//!   the encoding of its child.
//! - `3`: full node, followed by the encodings of its 17 children.
//! - `4`: value node, followed by a varint prefixed payload.
//!
//! Children are stored inline in the same blob, except when they are hash
//! nodes which the next blob of a proof resolves.

use crate::{
	nibble::decompress,
	node::{Children, Node, NodeKind},
	rstd::{boxed::Box, ops::Range, vec::Vec},
	varint::read_varbytes,
	DecodeError, Hasher, TrieHash, TrieLayout,
};

/// Cursor over an immutable input blob.
struct ByteSliceInput<'a> {
	data: &'a [u8],
	offset: usize,
}

impl<'a> ByteSliceInput<'a> {
	fn new(data: &'a [u8]) -> Self {
		ByteSliceInput { data, offset: 0 }
	}

	fn remaining(&self) -> &'a [u8] {
		&self.data[self.offset..]
	}

	fn read_byte(&mut self) -> Option<u8> {
		let byte = *self.data.get(self.offset)?;
		self.offset += 1;
		Some(byte)
	}

	fn take(&mut self, count: usize) -> Option<Range<usize>> {
		if self.data.len() - self.offset < count {
			return None
		}

		let range = self.offset..(self.offset + count);
		self.offset += count;
		Some(range)
	}
}

/// Parse one node from the start of `data`. Returns the node and the bytes
/// following its encoding.
pub fn parse_node<L: TrieLayout>(
	data: &[u8],
) -> Result<(Node<TrieHash<L>>, &[u8]), DecodeError> {
	let mut input = ByteSliceInput::new(data);
	let node = decode_node::<L>(&mut input, 0)?;
	Ok((node, input.remaining()))
}

/// Decode the node at the start of a proof blob. Bytes left after the node
/// are ignored.
pub fn decode<L: TrieLayout>(data: &[u8]) -> Result<Node<TrieHash<L>>, DecodeError> {
	parse_node::<L>(data).map(|(node, _)| node)
}

/// Decode a proof blob that must hold exactly one node.
pub fn decode_exact<L: TrieLayout>(data: &[u8]) -> Result<Node<TrieHash<L>>, DecodeError> {
	match parse_node::<L>(data)? {
		(node, []) => Ok(node),
		_ => Err(DecodeError::MalformedNode("trailing bytes")),
	}
}

fn decode_node<L: TrieLayout>(
	input: &mut ByteSliceInput,
	depth: usize,
) -> Result<Node<TrieHash<L>>, DecodeError> {
	if depth > L::MAX_INLINE_DEPTH {
		return Err(DecodeError::MalformedNode("inline nodes nested too deep"))
	}

	let tag = input.read_byte().ok_or(DecodeError::MalformedNode("empty node"))?;
	match NodeKind::from_tag(tag) {
		Some(NodeKind::Null) => Ok(Node::Null),
		Some(NodeKind::Hash) => {
			let range = input
				.take(L::Hash::LENGTH)
				.ok_or(DecodeError::MalformedNode("truncated hash"))?;
			let mut hash = <TrieHash<L>>::default();
			hash.as_mut().copy_from_slice(&input.data[range]);
			Ok(Node::Hash(hash))
		},
		Some(NodeKind::Short) => {
			let (size, compact) = read_varbytes(input.remaining(), true)?;
			let nibbles = decompress(&compact)?;
			let mut key = Vec::new();
			key.try_reserve_exact(nibbles.len()).map_err(|_| DecodeError::OutOfMemory)?;
			key.extend_from_slice(&nibbles);
			input.offset += size + compact.len();
			let child = decode_node::<L>(input, depth + 1)?;
			Ok(Node::Short { key: key.into_boxed_slice(), child: Box::new(child) })
		},
		Some(NodeKind::Full) => {
			let mut children: Children<TrieHash<L>> = Box::default();
			for child in children.iter_mut() {
				// Children decoded so far are released with `children` on error.
				*child = decode_node::<L>(input, depth + 1)?;
			}
			Ok(Node::Full(children))
		},
		Some(NodeKind::Value) => {
			let (size, value) = read_varbytes(input.remaining(), false)?;
			input.offset += size + value.len();
			Ok(Node::Value(value.into_owned()))
		},
		None => Err(DecodeError::MalformedNode("unknown node type")),
	}
}
