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
#![cfg_attr(not(feature = "std"), no_std)]

//! Stateless verification of name-registry trie proofs.
//!
//! A proof is a chain of serialized trie nodes, ordered from the root towards
//! the leaf. Each blob must hash to the digest referenced by the previous one
//! (the first to the trusted root). Walking the chain along the nibble path of
//! a 32 byte key either yields the value stored under the key or proves that
//! no value exists.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
mod rstd {
	pub use std::{borrow, boxed, fmt, marker, mem, ops, vec};
}

#[cfg(not(feature = "std"))]
mod rstd {
	pub use alloc::{borrow, boxed, vec};
	pub use core::{fmt, marker, mem, ops};
}

use self::rstd::fmt;

pub mod lookup;
pub mod nibble;
pub mod node;
pub mod node_codec;
pub mod proof;
pub mod varint;

pub use self::{
	lookup::{descend, Descent},
	nibble::{NibbleVec, BRANCH_WIDTH, KEY_NIBBLES, NIBBLE_LENGTH, NIBBLE_TERMINATOR},
	node::{Detached, Node, NodeKind, PartialKey},
	node_codec::{decode, decode_exact, parse_node},
	proof::{verify_name, verify_proof, ProofState, ProofVerifier, VerifyError},
};
pub use blake2b_hasher::Blake2bHasher;
pub use hash_db::Hasher;

/// Errors raised while reading primitives or nodes out of a proof blob.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum DecodeError {
	/// A varint or length-prefixed byte string was truncated or not canonical.
	Encoding(&'static str),
	/// Unknown node discriminator, missing fixed-size field or excessive nesting.
	MalformedNode(&'static str),
	/// A buffer sized by the input could not be allocated.
	OutOfMemory,
}

#[cfg(feature = "std")]
impl fmt::Display for DecodeError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			DecodeError::Encoding(msg) => write!(f, "Invalid encoding: {}", msg),
			DecodeError::MalformedNode(msg) => write!(f, "Malformed node: {}", msg),
			DecodeError::OutOfMemory => write!(f, "Out of memory while decoding"),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

/// Trait with definition of the proof format used by a name registry.
pub trait TrieLayout {
	/// If true, a value node is only accepted once the whole key path, terminator
	/// included, has been consumed. Anything else left at the end of the path is
	/// then an invalid node rather than an absence.
	const STRICT_VALUE_DEPTH: bool;
	/// Maximum nesting of inline nodes within a single proof blob.
	const MAX_INLINE_DEPTH: usize = KEY_NIBBLES + 8;

	/// Hasher used for keys and proof nodes. Its output is the digest embedded
	/// in hash nodes.
	type Hash: Hasher;
}

/// Proof format of the name registry.
#[derive(Default, Clone)]
pub struct NameLayout;

impl TrieLayout for NameLayout {
	const STRICT_VALUE_DEPTH: bool = false;
	type Hash = Blake2bHasher;
}

/// Same as `NameLayout`, but values must sit at the end of the key path.
#[derive(Default, Clone)]
pub struct StrictNameLayout;

impl TrieLayout for StrictNameLayout {
	const STRICT_VALUE_DEPTH: bool = true;
	type Hash = Blake2bHasher;
}

/// Alias accessor to hasher hash output type from a `TrieLayout`.
pub type TrieHash<L> = <<L as TrieLayout>::Hash as Hasher>::Out;

/// Hex rendering of digests and payloads in log output.
pub(crate) struct ToHex<'a>(pub &'a [u8]);

#[cfg(feature = "std")]
impl<'a> fmt::Debug for ToHex<'a> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		let hex = rustc_hex::ToHexIter::new(self.0.iter());
		for b in hex {
			write!(fmt, "{}", b)?;
		}
		Ok(())
	}
}

#[cfg(not(feature = "std"))]
impl<'a> fmt::Debug for ToHex<'a> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		for b in self.0 {
			write!(fmt, "{:02x}", b)?;
		}
		Ok(())
	}
}
