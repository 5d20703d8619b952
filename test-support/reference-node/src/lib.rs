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

//! Reference producer of name-trie nodes and proofs, for tests and benches.

use hash_db::{HashDB, Hasher, EMPTY_PREFIX};
use memory_db::{HashKey, MemoryDB};
use name_trie::{
	descend,
	nibble::{to_nibbles, NibbleVec, BRANCH_WIDTH, NIBBLE_TERMINATOR},
	node::Children,
	Descent, Node, NodeKind, TrieHash, TrieLayout,
};
use std::{collections::BTreeMap, marker::PhantomData};

pub use name_trie::{NameLayout, StrictNameLayout};

/// Apply a test method on every test layouts.
#[macro_export]
macro_rules! test_layouts {
	($test:ident, $test_internal:ident) => {
		#[test]
		fn $test() {
			eprintln!("Running with layout `NameLayout`");
			$test_internal::<$crate::NameLayout>();
			eprintln!("Running with layout `StrictNameLayout`");
			$test_internal::<$crate::StrictNameLayout>();
		}
	};
}

/// Nodes whose encoding is at least this long are stored by hash.
pub const INLINE_THRESHOLD: usize = 32;

/// Write `value` as a canonical compact size integer.
pub fn write_varint(value: usize, out: &mut Vec<u8>) {
	if value < 0xfd {
		out.push(value as u8);
	} else if value <= 0xffff {
		out.push(0xfd);
		out.extend_from_slice(&(value as u16).to_le_bytes());
	} else {
		assert!(value <= u32::MAX as usize, "payload too large for a proof node");
		out.push(0xfe);
		out.extend_from_slice(&(value as u32).to_le_bytes());
	}
}

/// Write a length prefixed byte string.
pub fn write_varbytes(bytes: &[u8], out: &mut Vec<u8>) {
	write_varint(bytes.len(), out);
	out.extend_from_slice(bytes);
}

/// Hex-prefix encoding of a nibble path. A trailing terminator nibble is
/// folded into the header flags. The empty path has an empty encoding.
pub fn compact_nibbles(nibbles: &[u8]) -> Vec<u8> {
	if nibbles.is_empty() {
		return Vec::new()
	}
	let (body, terminated) = match nibbles.split_last() {
		Some((&NIBBLE_TERMINATOR, body)) => (body, true),
		_ => (nibbles, false),
	};
	let odd = body.len() % 2 == 1;
	let flags = (odd as u8) | ((terminated as u8) << 1);

	let mut all = Vec::with_capacity(body.len() + 2);
	all.push(flags);
	if !odd {
		all.push(0);
	}
	all.extend_from_slice(body);
	all.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect()
}

/// Serialize a node, the inverse of `name_trie::decode`.
pub fn encode_node<HO: AsRef<[u8]>>(node: &Node<HO>) -> Vec<u8> {
	let mut out = Vec::new();
	encode_into(node, &mut out);
	out
}

fn encode_into<HO: AsRef<[u8]>>(node: &Node<HO>, out: &mut Vec<u8>) {
	out.push(node.kind().as_tag());
	match node {
		Node::Null => (),
		Node::Hash(hash) => out.extend_from_slice(hash.as_ref()),
		Node::Short { key, child } => {
			write_varbytes(&compact_nibbles(key), out);
			encode_into(child, out);
		},
		Node::Full(children) =>
			for child in children.iter() {
				encode_into(child, out);
			},
		Node::Value(value) => write_varbytes(value, out),
	}
}

type ReferenceDB<L> = MemoryDB<<L as TrieLayout>::Hash, HashKey<<L as TrieLayout>::Hash>, Vec<u8>>;

/// In-memory trie over digest sized keys, storing every node that is not
/// inlined in its parent.
pub struct ReferenceTrie<L: TrieLayout> {
	db: ReferenceDB<L>,
	root: TrieHash<L>,
	root_blob: Vec<u8>,
	entries: BTreeMap<Vec<u8>, Vec<u8>>,
	_marker: PhantomData<L>,
}

impl<L: TrieLayout> ReferenceTrie<L> {
	/// Build a trie from `(key, value)` pairs. Later duplicates of a key win.
	pub fn new<I, K, V>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<[u8]>,
		V: AsRef<[u8]>,
	{
		let entries: BTreeMap<Vec<u8>, Vec<u8>> = entries
			.into_iter()
			.map(|(k, v)| {
				assert_eq!(k.as_ref().len(), <L::Hash as Hasher>::LENGTH, "keys are digests");
				(k.as_ref().to_vec(), v.as_ref().to_vec())
			})
			.collect();

		let paths: Vec<(NibbleVec, &[u8])> = entries
			.iter()
			.map(|(k, v)| (to_nibbles(k).expect("small allocation"), &v[..]))
			.collect();

		let mut db = ReferenceDB::<L>::default();
		let root_node = build::<L>(&mut db, &paths, 0);
		let root_blob = encode_node(&root_node);
		let root = db.insert(EMPTY_PREFIX, &root_blob);

		ReferenceTrie { db, root, root_blob, entries, _marker: PhantomData }
	}

	/// Build a trie keyed by the hashes of names.
	pub fn from_names<'a, I, V>(entries: I) -> Self
	where
		I: IntoIterator<Item = (&'a str, V)>,
		V: AsRef<[u8]>,
	{
		Self::new(entries.into_iter().map(|(name, value)| (Self::name_key(name), value)))
	}

	/// Key under which a name is stored.
	pub fn name_key(name: &str) -> TrieHash<L> {
		L::Hash::hash(name.as_bytes())
	}

	pub fn root(&self) -> TrieHash<L> {
		self.root
	}

	/// Value stored under `key`.
	pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
		self.entries.get(key).map(|v| &v[..])
	}

	/// Number of nodes stored by hash, root included.
	pub fn stored_nodes(&self) -> usize {
		self.db.keys().len()
	}

	/// Proof of inclusion or exclusion for `key`: the blobs met while looking
	/// it up, root first.
	pub fn generate_proof(&self, key: &[u8]) -> Vec<Vec<u8>> {
		let path = to_nibbles(key).expect("small allocation");
		let mut proof = vec![self.root_blob.clone()];
		let mut position = 0;
		loop {
			let blob = &proof[proof.len() - 1];
			let node = name_trie::decode::<L>(blob).expect("reference nodes decode");
			match descend::<L>(node, &path, position) {
				Ok(Descent::Hash(hash, next)) => {
					let blob = self.db.get(&hash, EMPTY_PREFIX).expect("referenced node is stored");
					proof.push(blob);
					position = next;
				},
				_ => return proof,
			}
		}
	}
}

fn build<L: TrieLayout>(
	db: &mut ReferenceDB<L>,
	entries: &[(NibbleVec, &[u8])],
	depth: usize,
) -> Node<TrieHash<L>> {
	match entries {
		[] => Node::Null,
		[(path, value)] => Node::Short {
			key: path[depth..].iter().cloned().collect(),
			child: Box::new(Node::Value(value.to_vec())),
		},
		[(first, _), .., (last, _)] => {
			// entries are sorted, the first and last bound the shared prefix
			let shared = first[depth..]
				.iter()
				.zip(last[depth..].iter())
				.take_while(|(a, b)| a == b)
				.count();
			if shared > 0 {
				let child = build::<L>(db, entries, depth + shared);
				return Node::Short {
					key: first[depth..depth + shared].iter().cloned().collect(),
					child: Box::new(commit::<L>(db, child)),
				}
			}

			let mut children: Children<TrieHash<L>> = Box::default();
			let mut start = 0;
			for index in 0..BRANCH_WIDTH {
				let end = start +
					entries[start..]
						.iter()
						.take_while(|(path, _)| path[depth] as usize == index)
						.count();
				let child = build::<L>(db, &entries[start..end], depth + 1);
				children[index] = commit::<L>(db, child);
				start = end;
			}
			Node::Full(children)
		},
	}
}

/// Replace a child by its hash when it is too large to be inlined.
fn commit<L: TrieLayout>(db: &mut ReferenceDB<L>, node: Node<TrieHash<L>>) -> Node<TrieHash<L>> {
	if matches!(node.kind(), NodeKind::Null | NodeKind::Hash) {
		return node
	}
	let encoded = encode_node(&node);
	if encoded.len() < INLINE_THRESHOLD {
		return node
	}
	Node::Hash(db.insert(EMPTY_PREFIX, &encoded))
}
