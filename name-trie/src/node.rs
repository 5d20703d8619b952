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

//! Owned trie nodes decoded from a proof blob.
//!
//! A node exclusively owns its children, so dropping a node releases its whole
//! subtree. Descent keeps a single child alive at each step and lets the rest
//! go: [`Node::release_shallow`] hands the children of a node back to the
//! caller while releasing the node's own buffers, [`Node::release_recursive`]
//! releases everything.

use crate::{
	nibble::BRANCH_WIDTH,
	rstd::{boxed::Box, fmt, mem, vec::Vec},
	ToHex,
};

/// Expanded nibble path of a short node.
pub type PartialKey = Box<[u8]>;

/// Children of a full node, indexed by nibble. The last slot holds the node
/// reached when the path terminates at the branch.
pub type Children<HO> = Box<[Node<HO>; BRANCH_WIDTH]>;

/// Type of node in the trie and essential information thereof.
#[derive(Eq, PartialEq, Clone)]
pub enum Node<HO> {
	/// Absence of a node. Proves that no value lives below this point.
	Null,
	/// Reference to a node that is supplied by the next blob of the proof.
	Hash(HO),
	/// Path-compressed edge; `key` is the expanded nibble path to match.
	Short { key: PartialKey, child: Box<Node<HO>> },
	/// Branch on the next nibble of the path.
	Full(Children<HO>),
	/// Leaf payload.
	Value(Vec<u8>),
}

impl<HO> Default for Node<HO> {
	fn default() -> Self {
		Node::Null
	}
}

/// What is left of a node after a shallow release.
pub enum Detached<HO> {
	/// The node had no children.
	Nothing,
	/// Child of a short node.
	Child(Node<HO>),
	/// Children of a full node.
	Children(Children<HO>),
}

/// Discriminant of a node, matching its tag byte on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NodeKind {
	Null = 0,
	Hash = 1,
	Short = 2,
	Full = 3,
	Value = 4,
}

impl NodeKind {
	/// Tag byte of this kind of node.
	pub fn as_tag(self) -> u8 {
		self as u8
	}

	/// Kind of node announced by a tag byte, if any.
	pub fn from_tag(tag: u8) -> Option<Self> {
		Some(match tag {
			0 => NodeKind::Null,
			1 => NodeKind::Hash,
			2 => NodeKind::Short,
			3 => NodeKind::Full,
			4 => NodeKind::Value,
			_ => return None,
		})
	}
}

impl<HO> Node<HO> {
	pub fn kind(&self) -> NodeKind {
		match self {
			Node::Null => NodeKind::Null,
			Node::Hash(_) => NodeKind::Hash,
			Node::Short { .. } => NodeKind::Short,
			Node::Full(_) => NodeKind::Full,
			Node::Value(_) => NodeKind::Value,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Node::Null)
	}

	/// Detach the payload of a value node. Any other kind of node is handed
	/// back.
	pub fn into_value(self) -> Result<Vec<u8>, Self> {
		match self {
			Node::Value(value) => Ok(value),
			other => Err(other),
		}
	}

	/// Release the node itself together with the buffers it owns directly (the
	/// key of a short node, the payload of a value node), handing its children
	/// back untouched.
	pub fn release_shallow(self) -> Detached<HO> {
		match self {
			Node::Short { child, .. } => Detached::Child(*child),
			Node::Full(children) => Detached::Children(children),
			Node::Null | Node::Hash(_) | Node::Value(_) => Detached::Nothing,
		}
	}

	/// Release the node and every node below it.
	pub fn release_recursive(self) {
		mem::drop(self)
	}
}

/// Keep the child at `index`, releasing every other child recursively. An
/// index past the last slot selects nothing.
pub fn select_child<HO>(mut children: Children<HO>, index: usize) -> Node<HO> {
	let child = children.get_mut(index).map(mem::take).unwrap_or_default();
	for sibling in children.iter_mut() {
		mem::take(sibling).release_recursive();
	}
	child
}

impl<HO: AsRef<[u8]>> fmt::Debug for Node<HO> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Node::Null => write!(fmt, "Null"),
			Node::Hash(hash) => write!(fmt, "Hash({:?})", ToHex(hash.as_ref())),
			Node::Short { key, child } => write!(fmt, "Short({:?}, {:?})", &key[..], child),
			Node::Full(children) => write!(fmt, "Full({:?})", &children[..]),
			Node::Value(value) => write!(fmt, "Value({:?})", ToHex(value)),
		}
	}
}
