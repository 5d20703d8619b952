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

//! Verification of proof chains against a trusted root.

use crate::{
	lookup::{descend, Descent},
	nibble::{to_nibbles, NibbleVec},
	node_codec,
	rstd::{marker::PhantomData, vec::Vec},
	DecodeError, Hasher, ToHex, TrieHash, TrieLayout,
};
use log::{debug, trace};

/// Errors that may occur during proof verification. Apart from `BadArgument`,
/// they all mean that the proof is invalid for the given root and key.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Error<HO> {
	/// The key handed to the verifier does not have the length of a digest.
	BadArgument(&'static str),
	/// A buffer sized by the proof could not be allocated.
	OutOfMemory,
	/// A varint or length-prefixed byte string in a proof node is truncated or
	/// not canonical.
	Encoding(&'static str),
	/// A proof node could not be decoded.
	MalformedNode(&'static str),
	/// A value was found where the key path should have continued.
	UnexpectedNode,
	/// A node was found where the key path allows none.
	InvalidNode,
	/// A proof node does not hash to the expected digest. The parameter is the
	/// hash of the offending node.
	HashMismatch(HO),
	/// The proof was resolved before its last node.
	EarlyEnd,
	/// The proof is missing nodes required to reach a result.
	NoResult,
}

impl<HO> Error<HO> {
	/// Whether the error shows that the proof nodes themselves are not well
	/// formed, as opposed to not matching the expected root or being incomplete.
	pub fn is_malformed(&self) -> bool {
		matches!(
			self,
			Error::Encoding(_) | Error::MalformedNode(_) | Error::UnexpectedNode | Error::InvalidNode
		)
	}

	fn label(&self) -> &'static str {
		match self {
			Error::BadArgument(msg) | Error::Encoding(msg) | Error::MalformedNode(msg) => msg,
			Error::OutOfMemory => "out of memory",
			Error::UnexpectedNode => "unexpected node",
			Error::InvalidNode => "invalid node",
			Error::HashMismatch(_) => "hash mismatch",
			Error::EarlyEnd => "early end",
			Error::NoResult => "no result",
		}
	}
}

impl<HO> From<DecodeError> for Error<HO> {
	fn from(err: DecodeError) -> Self {
		match err {
			DecodeError::Encoding(msg) => Error::Encoding(msg),
			DecodeError::MalformedNode(msg) => Error::MalformedNode(msg),
			DecodeError::OutOfMemory => Error::OutOfMemory,
		}
	}
}

#[cfg(feature = "std")]
impl<HO: AsRef<[u8]>> std::fmt::Display for Error<HO> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
		match self {
			Error::BadArgument(msg) => write!(f, "Bad argument: {}", msg),
			Error::OutOfMemory => write!(f, "Out of memory"),
			Error::Encoding(msg) => write!(f, "Invalid encoding in proof node: {}", msg),
			Error::MalformedNode(msg) => write!(f, "Malformed proof node: {}", msg),
			Error::UnexpectedNode => write!(f, "Unexpected value node before the end of the key"),
			Error::InvalidNode => write!(f, "Invalid node at the end of the key"),
			Error::HashMismatch(hash) => write!(
				f,
				"Proof node hash {:?} does not match the expected hash",
				ToHex(hash.as_ref())
			),
			Error::EarlyEnd => write!(f, "Proof has extraneous nodes after its result"),
			Error::NoResult => write!(f, "Proof is incomplete -- expected more nodes"),
		}
	}
}

#[cfg(feature = "std")]
impl<HO: AsRef<[u8]> + std::fmt::Debug> std::error::Error for Error<HO> {}

/// Progress of a proof verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofState<HO> {
	/// Next proof node must hash to `expected`; the key path resumes at
	/// `position`.
	AwaitingBlob { expected: HO, position: usize },
	/// The proof resolved to the value of the key, or to its absence.
	Resolved(Option<Vec<u8>>),
	/// The proof was rejected.
	Failed(Error<HO>),
}

/// Step-wise verifier of a proof chain, consuming one proof node at a time in
/// root to leaf order.
pub struct ProofVerifier<L: TrieLayout> {
	key: NibbleVec,
	state: ProofState<TrieHash<L>>,
	consumed: usize,
	_marker: PhantomData<L>,
}

impl<L: TrieLayout> ProofVerifier<L> {
	/// Start verifying the proof of `key` against the trusted `root`.
	pub fn new(root: &TrieHash<L>, key: &[u8]) -> Result<Self, Error<TrieHash<L>>> {
		if key.len() != L::Hash::LENGTH {
			return Err(Error::BadArgument("key length differs from digest length"))
		}

		Ok(ProofVerifier {
			key: to_nibbles(key)?,
			state: ProofState::AwaitingBlob { expected: *root, position: 0 },
			consumed: 0,
			_marker: PhantomData,
		})
	}

	/// Current state of the verification.
	pub fn state(&self) -> &ProofState<TrieHash<L>> {
		&self.state
	}

	/// Number of proof nodes fed so far.
	pub fn consumed(&self) -> usize {
		self.consumed
	}

	/// Consume the next proof node.
	///
	/// Feeding a node after the proof resolved fails with `EarlyEnd`. Once
	/// failed, the verifier keeps returning the same error.
	pub fn feed(&mut self, blob: &[u8]) -> Result<(), Error<TrieHash<L>>> {
		let (expected, position) = match self.state {
			ProofState::AwaitingBlob { expected, position } => (expected, position),
			ProofState::Resolved(_) => return self.fail(Error::EarlyEnd),
			ProofState::Failed(ref err) => return Err(err.clone()),
		};
		let index = self.consumed;
		self.consumed += 1;

		let hash = L::Hash::hash(blob);
		if hash != expected {
			return self.fail(Error::HashMismatch(hash))
		}

		let node = match node_codec::decode::<L>(blob) {
			Ok(node) => node,
			Err(err) => return self.fail(err.into()),
		};
		trace!(
			target: "trie",
			"proof node {} ({} bytes, {:?}) at position {}",
			index,
			blob.len(),
			node.kind(),
			position,
		);

		self.state = match descend::<L>(node, &self.key, position) {
			Ok(Descent::Hash(next, position)) => {
				trace!(target: "trie", "continue with {:?} at {}", ToHex(next.as_ref()), position);
				ProofState::AwaitingBlob { expected: next, position }
			},
			Ok(Descent::Value(value)) => {
				trace!(target: "trie", "resolved to value {:?}", ToHex(&value));
				ProofState::Resolved(Some(value))
			},
			Ok(Descent::Absent) => {
				trace!(target: "trie", "resolved to absence");
				ProofState::Resolved(None)
			},
			Err(err) => return self.fail(err),
		};
		Ok(())
	}

	/// Conclude the verification: the value under the key, `None` if the proof
	/// shows the key has no value, or the reason the proof was rejected.
	pub fn finish(self) -> Result<Option<Vec<u8>>, Error<TrieHash<L>>> {
		match self.state {
			ProofState::AwaitingBlob { .. } => {
				debug!(target: "trie", "proof ended after {} nodes without result", self.consumed);
				Err(Error::NoResult)
			},
			ProofState::Resolved(value) => Ok(value),
			ProofState::Failed(err) => Err(err),
		}
	}

	fn fail(&mut self, err: Error<TrieHash<L>>) -> Result<(), Error<TrieHash<L>>> {
		debug!(target: "trie", "proof rejected after {} nodes: {}", self.consumed, err.label());
		self.state = ProofState::Failed(err.clone());
		Err(err)
	}
}

/// Verify a proof for a raw key given a trusted root hash.
///
/// Returns the value stored under `key`, or `None` if the proof shows that
/// `key` has no value. The key must be exactly one digest long.
pub fn verify_proof<L, I>(
	root: &TrieHash<L>,
	key: &[u8],
	proof: I,
) -> Result<Option<Vec<u8>>, Error<TrieHash<L>>>
where
	L: TrieLayout,
	I: IntoIterator,
	I::Item: AsRef<[u8]>,
{
	let mut verifier = ProofVerifier::<L>::new(root, key)?;
	for blob in proof {
		verifier.feed(blob.as_ref())?;
	}
	verifier.finish()
}

/// Verify a proof for a name given a trusted root hash. The key is the hash of
/// the name.
pub fn verify_name<L, I>(
	root: &TrieHash<L>,
	name: &str,
	proof: I,
) -> Result<Option<Vec<u8>>, Error<TrieHash<L>>>
where
	L: TrieLayout,
	I: IntoIterator,
	I::Item: AsRef<[u8]>,
{
	let key = L::Hash::hash(name.as_bytes());
	verify_proof::<L, I>(root, key.as_ref(), proof)
}
