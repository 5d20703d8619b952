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

//! Trie lookup within a single decoded proof node.

use crate::{
	node::{select_child, Detached, Node},
	proof::VerifyError,
	rstd::vec::Vec,
	TrieHash, TrieLayout,
};
use log::trace;

/// Where a descent stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descent<HO> {
	/// The key has no value below the descended node.
	Absent,
	/// Value stored under the key.
	Value(Vec<u8>),
	/// The path continues in the node with this hash, at the given position of
	/// the key path.
	Hash(HO, usize),
}

/// Walk `node` along the expanded key path `key`, starting at `position`,
/// until reaching a hash node or a terminal.
///
/// The node is consumed: each visited node is released shallowly to keep the
/// child on the path, and branches off the path are released recursively. The
/// position never moves past the end of `key`.
pub fn descend<L: TrieLayout>(
	mut node: Node<TrieHash<L>>,
	key: &[u8],
	mut position: usize,
) -> Result<Descent<TrieHash<L>>, VerifyError<TrieHash<L>>> {
	while position < key.len() {
		match &node {
			Node::Null => return Ok(Descent::Absent),
			Node::Hash(hash) => return Ok(Descent::Hash(*hash, position)),
			Node::Short { key: partial, .. } => {
				if !key[position..].starts_with(partial) {
					trace!(
						target: "trie",
						"path diverges at {}: {:?} vs {:?}",
						position,
						&partial[..],
						&key[position..],
					);
					return Ok(Descent::Absent)
				}
				position += partial.len();
			},
			Node::Full(_) => (),
			Node::Value(_) => {
				if L::STRICT_VALUE_DEPTH {
					trace!(target: "trie", "value at {} before end of path", position);
					return Err(VerifyError::UnexpectedNode)
				}
				break
			},
		}

		node = match node.release_shallow() {
			Detached::Child(child) => child,
			Detached::Children(children) => {
				let index = key[position] as usize;
				position += 1;
				select_child(children, index)
			},
			Detached::Nothing => Node::Null,
		};
	}

	if node.is_null() {
		return Ok(Descent::Absent)
	}
	match node.into_value() {
		Ok(value) => Ok(Descent::Value(value)),
		Err(other) => {
			trace!(target: "trie", "{:?} node left at end of path", other.kind());
			if L::STRICT_VALUE_DEPTH {
				Err(VerifyError::InvalidNode)
			} else {
				Ok(Descent::Absent)
			}
		},
	}
}
