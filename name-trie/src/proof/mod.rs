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

//! Verification of inclusion and exclusion proofs.
//!
//! A proof is the list of serialized nodes met while looking a key up, from
//! the root downwards. Nodes referenced by their hash are the next entry of
//! the list; every other node is inline in its parent's entry. The verifier
//! checks each entry against the hash it was referenced by, the first one
//! against the trusted root, and follows the key's nibble path through it.
//! The proof resolves when the path reaches a value or proves that none
//! exists; it must then have no further entries.

pub use self::verify::{
	verify_name, verify_proof, Error as VerifyError, ProofState, ProofVerifier,
};

mod verify;
