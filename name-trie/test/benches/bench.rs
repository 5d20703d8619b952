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

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use name_trie::{decode, nibble::to_nibbles, proof::verify_proof, NameLayout as Layout};
use name_trie_test::{random_entries, random_keys};
use reference_node::ReferenceTrie;

criterion_group!(benches, node_decoding, key_expansion, proof_verification, absence_verification);
criterion_main!(benches);

fn node_decoding(c: &mut Criterion) {
	let entries = random_entries(1000, 1);
	let trie = ReferenceTrie::<Layout>::new(entries.iter().map(|(k, v)| (k, v)));
	let blobs: Vec<Vec<u8>> =
		entries.iter().take(100).flat_map(|(k, _)| trie.generate_proof(k)).collect();

	c.bench_function("node_decoding", move |b| {
		b.iter(|| {
			for blob in blobs.iter() {
				black_box(decode::<Layout>(blob).unwrap());
			}
		})
	});
}

fn key_expansion(c: &mut Criterion) {
	let keys = random_keys(1000, 2);
	c.bench_function("key_expansion", move |b| {
		b.iter(|| {
			for key in keys.iter() {
				black_box(to_nibbles(key).unwrap());
			}
		})
	});
}

fn proof_verification(c: &mut Criterion) {
	let entries = random_entries(1000, 3);
	let trie = ReferenceTrie::<Layout>::new(entries.iter().map(|(k, v)| (k, v)));
	let root = trie.root();
	let proofs: Vec<_> =
		entries.iter().take(100).map(|(k, _)| (*k, trie.generate_proof(k))).collect();

	c.bench_function("proof_verification", move |b| {
		b.iter(|| {
			for (key, proof) in proofs.iter() {
				black_box(verify_proof::<Layout, _>(&root, key, proof).unwrap());
			}
		})
	});
}

fn absence_verification(c: &mut Criterion) {
	let entries = random_entries(1000, 4);
	let trie = ReferenceTrie::<Layout>::new(entries.iter().map(|(k, v)| (k, v)));
	let root = trie.root();
	let proofs: Vec<_> =
		random_keys(100, 5).into_iter().map(|k| (k, trie.generate_proof(&k))).collect();

	c.bench_function("absence_verification", move |b| {
		b.iter(|| {
			for (key, proof) in proofs.iter() {
				black_box(verify_proof::<Layout, _>(&root, key, proof).unwrap());
			}
		})
	});
}
