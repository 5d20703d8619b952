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

//! Tests for name-trie crate.

#[cfg(test)]
mod codec;

use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Set of named entries for base testing.
pub fn test_names() -> Vec<(&'static str, &'static [u8])> {
	vec![
		// short values end up inlined in their parent.
		("alfa", b"a"),
		("bravo", b"bravo"),
		// large values push their leaf out to its own proof node.
		("charlie", &[0xcc; 64]),
		("delta", &[0xdd; 300]),
		("echo", b""),
		("foxtrot", b"foxtrot.example"),
		("golf", &[0x01; 31]),
	]
}

/// Random digest sized keys with values of varying size, reproducible from
/// `seed`.
pub fn random_entries(count: usize, seed: u64) -> Vec<([u8; 32], Vec<u8>)> {
	let mut rng = SmallRng::seed_from_u64(seed);
	(0..count)
		.map(|_| {
			let key: [u8; 32] = rng.gen();
			let len = rng.gen_range(0..96);
			let value = (0..len).map(|_| rng.gen()).collect();
			(key, value)
		})
		.collect()
}

/// Random keys, reproducible from `seed`.
pub fn random_keys(count: usize, seed: u64) -> Vec<[u8; 32]> {
	let mut rng = SmallRng::seed_from_u64(seed);
	(0..count).map(|_| rng.gen()).collect()
}
