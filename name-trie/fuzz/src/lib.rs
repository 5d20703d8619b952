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

use arbitrary::Arbitrary;
use hash_db::Hasher;
use name_trie::{decode, parse_node, proof::verify_proof, TrieLayout, VerifyError};
use reference_node::{encode_node, ReferenceTrie};

/// A trie, a key to prove and a byte of the proof to corrupt.
#[derive(Debug, Arbitrary)]
pub struct FuzzProof {
	pub entries: Vec<([u8; 32], Vec<u8>)>,
	/// Prove one of the entries when it points at one, an absent key otherwise.
	pub target: u8,
	pub absent_key: [u8; 32],
	pub corrupt_blob: u8,
	pub corrupt_offset: u16,
	pub corrupt_mask: u8,
}

/// Decoding never panics, and what decodes re-encodes to an equivalent node.
pub fn fuzz_that_decode_is_stable<L: TrieLayout>(input: &[u8]) {
	let (node, rest) = match parse_node::<L>(input) {
		Ok(parsed) => parsed,
		Err(_) => return,
	};
	assert!(rest.len() < input.len());

	let encoded = encode_node(&node);
	assert!(encoded.len() <= input.len() - rest.len());
	assert_eq!(decode::<L>(&encoded).as_ref(), Ok(&node));
}

/// Honest proofs verify to the stored value and corrupted ones never do.
pub fn fuzz_that_verify_rejects_invalid_proofs<L: TrieLayout>(input: &FuzzProof) {
	let trie = ReferenceTrie::<L>::new(input.entries.iter().map(|(k, v)| (k, v)));
	let root = trie.root();
	let key = match input.entries.get(input.target as usize) {
		Some((key, _)) => *key,
		None => input.absent_key,
	};

	let mut proof = trie.generate_proof(&key);
	let expected = trie.get(&key).map(|v| v.to_vec());
	assert_eq!(verify_proof::<L, _>(&root, &key, &proof), Ok(expected));

	if input.corrupt_mask == 0 {
		return
	}
	let index = input.corrupt_blob as usize % proof.len();
	let offset = input.corrupt_offset as usize % proof[index].len();
	proof[index][offset] ^= input.corrupt_mask;
	assert_eq!(
		verify_proof::<L, _>(&root, &key, &proof),
		Err(VerifyError::HashMismatch(L::Hash::hash(&proof[index]))),
	);
}

/// Arbitrary blobs chained from the hash of the first one never panic the
/// verifier.
pub fn fuzz_that_verify_never_panics<L: TrieLayout>(proof: &[Vec<u8>], key: &[u8; 32]) {
	let root = match proof.first() {
		Some(blob) => L::Hash::hash(blob),
		None => return,
	};
	let _ = verify_proof::<L, _>(&root, key, proof);
}
