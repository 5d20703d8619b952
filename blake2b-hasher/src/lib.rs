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

//! Hasher implementation for the BLAKE2b hash truncated to a 256-bit digest.

#![cfg_attr(not(feature = "std"), no_std)]

use blake2::{digest::consts::U32, Blake2b, Digest};
use hash256_std_hasher::Hash256StdHasher;
use hash_db::Hasher;

type Blake2b256 = Blake2b<U32>;

/// Concrete `Hasher` impl for BLAKE2b with a 32 byte output.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Blake2bHasher;

impl Hasher for Blake2bHasher {
	type Out = [u8; 32];

	type StdHasher = Hash256StdHasher;

	const LENGTH: usize = 32;

	fn hash(x: &[u8]) -> Self::Out {
		let mut out = [0u8; 32];
		out.copy_from_slice(&Blake2b256::digest(x));
		out
	}
}
