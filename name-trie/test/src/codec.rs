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

use hex_literal::hex;
use name_trie::{
	decode, decode_exact, parse_node, Blake2bHasher, DecodeError, Hasher, NameLayout, Node,
	NodeKind, TrieLayout,
};
use reference_node::{encode_node, test_layouts, ReferenceTrie};

use crate::{random_entries, test_names};

test_layouts!(proof_nodes_reencode, proof_nodes_reencode_internal);
fn proof_nodes_reencode_internal<L: TrieLayout>() {
	let entries = random_entries(300, 10);
	let trie = ReferenceTrie::<L>::new(entries.iter().map(|(k, v)| (k, v)));

	let mut kinds = Vec::new();
	for (key, _) in entries.iter().take(50) {
		for blob in trie.generate_proof(key) {
			let node = decode_exact::<L>(&blob).unwrap();
			kinds.push(node.kind());
			assert_eq!(encode_node(&node), blob);
		}
	}
	assert!(kinds.contains(&NodeKind::Full));
	assert!(kinds.contains(&NodeKind::Short));
}

#[test]
fn fixed_vectors() {
	// short node over an inline value
	let blob = hex!("02 02 20ab 04 03 616263");
	let node = decode_exact::<NameLayout>(&blob).unwrap();
	match &node {
		Node::Short { key, child } => {
			assert_eq!(&key[..], &[0xa, 0xb, 16]);
			assert_eq!(**child, Node::Value(b"abc".to_vec()));
		},
		other => panic!("unexpected node {:?}", other),
	}
	assert_eq!(encode_node(&node), blob.to_vec());

	// hash node
	let blob = hex!("01 0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8");
	assert_eq!(
		decode::<NameLayout>(&blob),
		Ok(Node::Hash(hex!("0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8"))),
	);

	// odd length key without terminator, over a null node
	let node = decode_exact::<NameLayout>(&hex!("02 02 1abc 00")).unwrap();
	assert!(matches!(node, Node::Short { ref key, .. } if &key[..] == &[0xa, 0xb, 0xc]));

	// value longer than a single byte length prefix
	let mut blob = hex!("04 fd0001").to_vec();
	blob.extend_from_slice(&[0x5a; 256]);
	assert_eq!(decode_exact::<NameLayout>(&blob), Ok(Node::Value(vec![0x5a; 256])));
}

#[test]
fn empty_input_hash() {
	assert_eq!(
		Blake2bHasher::hash(&[]),
		hex!("0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8"),
	);
}

#[test]
fn rejected_blobs() {
	let cases: Vec<(Vec<u8>, DecodeError)> = vec![
		(vec![], DecodeError::MalformedNode("empty node")),
		(vec![7], DecodeError::MalformedNode("unknown node type")),
		(hex!("01 0000").to_vec(), DecodeError::MalformedNode("truncated hash")),
		(hex!("04").to_vec(), DecodeError::Encoding("empty varint")),
		(hex!("04 05 0102").to_vec(), DecodeError::Encoding("truncated byte string")),
		(hex!("04 ff 0100000000000000").to_vec(), DecodeError::Encoding("unsupported 64 bit varint")),
		(hex!("04 fe 10000000").to_vec(), DecodeError::Encoding("non-canonical varint")),
		(hex!("02 02 20ab").to_vec(), DecodeError::MalformedNode("empty node")),
		(hex!("03 00 00 00").to_vec(), DecodeError::MalformedNode("empty node")),
	];
	for (blob, err) in cases {
		assert_eq!(decode::<NameLayout>(&blob), Err(err));
	}
}

#[test]
fn trailing_bytes() {
	let blob = hex!("00 dead");
	let (node, rest) = parse_node::<NameLayout>(&blob).unwrap();
	assert!(node.is_null());
	assert_eq!(rest, &hex!("dead"));
	assert_eq!(
		decode_exact::<NameLayout>(&blob),
		Err(DecodeError::MalformedNode("trailing bytes")),
	);
}

#[test]
fn names_trie_shape() {
	let trie = ReferenceTrie::<NameLayout>::from_names(test_names());
	// the root of a populated trie is a branch
	let root_blob = trie.generate_proof(&[0; 32]).remove(0);
	assert_eq!(root_blob[0], NodeKind::Full.as_tag());
	assert_eq!(Blake2bHasher::hash(&root_blob), trie.root());
}
